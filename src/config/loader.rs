use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::FlowConfig;
use super::scoring::ScoringConfig;
use super::thresholds::ThresholdsConfig;

pub const CONFIG_FILE_NAME: &str = ".flowhealth.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<FlowConfig, String> {
    let mut config = toml::from_str::<FlowConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Err(e) = config.scoring.validate() {
        eprintln!("Warning: Invalid scoring mappings: {e}. Using defaults.");
        config.scoring = ScoringConfig::default();
    }
    if let Err(e) = config.thresholds.validate() {
        eprintln!("Warning: Invalid thresholds: {e}. Using defaults.");
        config.thresholds = ThresholdsConfig::default();
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<FlowConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Walk from `start` upward through its ancestors, nearest first
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf))
        .take(max_depth + 1)
}

/// Load configuration from the nearest `.flowhealth.toml`, falling back to
/// defaults when none exists
pub fn load_config() -> FlowConfig {
    load_config_from(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Load configuration starting the ancestor walk at a given directory
pub fn load_config_from(start: PathBuf) -> FlowConfig {
    directory_ancestors(start, 10)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_thresholds_and_windows() {
        let contents = indoc! {r#"
            terminal_statuses = ["Done", "Deployed", "Cancelled"]

            [thresholds]
            stuck_threshold_days = 45.0
            include_completed = true

            [[pi_windows]]
            name = "26Q1"
            start_date = "2026-01-01"
            end_date = "2026-03-31"
        "#};

        let config = parse_and_validate_config(contents).unwrap();
        assert_eq!(config.thresholds.stuck_threshold_days, 45.0);
        assert!(config.thresholds.include_completed);
        assert_eq!(config.pi_windows.len(), 1);
        assert_eq!(config.pi_windows[0].name, "26Q1");
        assert!(config.is_terminal("cancelled"));
    }

    #[test]
    fn invalid_scoring_falls_back_to_defaults() {
        let contents = indoc! {r#"
            [[scoring.mappings]]
            metric = "flow_efficiency"
            dimension = "flow"
            weight = -2.0
        "#};

        let config = parse_and_validate_config(contents).unwrap();
        // Warn-and-default, never a hard failure
        assert!(config.scoring.validate().is_ok());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.thresholds.stuck_threshold_days, 30.0);
        assert!(config.pi_windows.is_empty());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_and_validate_config("not [ valid").is_err());
    }
}
