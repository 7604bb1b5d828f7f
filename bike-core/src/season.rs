/// Label used for season codes outside 1..=4.
pub const UNKNOWN_SEASON_LABEL: &str = "";

/// Meteorological season as encoded in the `season` column.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Map a dataset season code (1 = Spring .. 4 = Winter).
    pub fn from_code(code: i64) -> Option<Season> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// Label for a raw code; unknown codes map to the empty label.
    pub fn label_for_code(code: i64) -> &'static str {
        Season::from_code(code)
            .map(|s| s.label())
            .unwrap_or(UNKNOWN_SEASON_LABEL)
    }
}
