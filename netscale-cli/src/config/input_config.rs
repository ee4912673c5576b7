use serde::{Deserialize, Serialize};

pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_HEADER: bool = false;

/// How edge list files are parsed.
#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct InputConfig {
    pub delimiter: String,
    pub header: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            header: DEFAULT_HEADER,
        }
    }
}
