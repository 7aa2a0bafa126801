use rpwgen::alphabet::CharacterClassSelection;
use rpwgen::configtool::{ConfigError, GenConfig};
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = GenConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, GenConfig::default());
        assert_eq!(config.default_length, 16);
        assert_eq!((config.min_length, config.max_length), (4, 32));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = GenConfig {
            default_length: 20,
            selection: CharacterClassSelection {
                symbols: false,
                ..CharacterClassSelection::all()
            },
            clipboard_clear_secs: 0,
            ..GenConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(GenConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_length": 12 }"#).unwrap();
        let config = GenConfig::load_from(&path).unwrap();
        assert_eq!(config.default_length, 12);
        assert_eq!(config.max_length, 32);
        assert_eq!(config.selection, CharacterClassSelection::all());
    }

    #[test]
    fn test_partial_selection_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "selection": { "symbols": false } }"#).unwrap();
        let config = GenConfig::load_from(&path).unwrap();
        assert_eq!(
            config.selection,
            CharacterClassSelection { symbols: false, ..CharacterClassSelection::all() }
        );
        assert_eq!(config.default_length, 16);
    }

    #[test]
    fn test_json_error_message_not_repeated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_length": "long" }"#).unwrap();
        let err = GenConfig::load_from(&path).unwrap_err();
        assert_eq!(err.to_string(), "JSON error");
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert!(chain.starts_with("JSON error: "));
        assert_eq!(chain.matches("invalid type").count(), 1);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "min_length": 10, "max_length": 8, "default_length": 9 }"#).unwrap();
        assert!(matches!(GenConfig::load_from(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(GenConfig::load_from(&path), Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_check_length_range() {
        let config = GenConfig::default();
        assert!(config.check_length(4).is_ok());
        assert!(config.check_length(32).is_ok());
        assert!(config.check_length(3).is_err());
        assert!(config.check_length(33).is_err());
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let config = GenConfig { min_length: 0, ..GenConfig::default() };
        assert!(config.validate().is_err());
    }
}
