use std::env;
use std::fs;
use std::path::Path;

/// Header written when no dataset fixture exists, so the app still builds
/// and reports a load error at startup instead of failing compilation.
const EMPTY_DATASET: &str = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("all_data.csv");

    // Embed the dataset: a browser has no working directory to read
    // `all_data.csv` from, so the file travels inside the WASM binary.
    let src = Path::new("../fixtures/all_data.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, EMPTY_DATASET).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/all_data.csv");
}
