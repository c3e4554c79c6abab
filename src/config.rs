use std::env;

/// Environment-derived settings. Resolved before the extraction core runs;
/// the core itself only ever sees an input path and an output prefix.
#[derive(Debug, Default)]
pub struct Settings {
    pub base_path: Option<String>,
    pub data_path: Option<String>,
    pub raw_path: Option<String>,
    pub output_path: Option<String>,
    pub document_name: Option<String>,
    pub document_path: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            base_path: env::var("BASE_PATH").ok(),
            data_path: env::var("DATA_PATH").ok(),
            raw_path: env::var("RAW_PATH").ok(),
            output_path: env::var("OUTPUT_PATH").ok(),
            document_name: env::var("DOCUMENT_NAME").ok(),
            document_path: env::var("DOCUMENT_PATH").ok(),
        }
    }
}
