use std::path::PathBuf;

pub const DEFAULT_REPORT_PATH: &str = "test_results.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the JSON report is written after a run
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Relative to the working directory
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.report_path, PathBuf::from("test_results.json"));
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new().with_report_path("/tmp/out/report.json");

        assert_eq!(config.report_path, PathBuf::from("/tmp/out/report.json"));
    }
}
