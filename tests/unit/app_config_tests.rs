/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use conceptdocs::app_config::{Config, LogLevel};
use conceptdocs::language_utils::Locale;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.default_locale, Locale::En);
    assert_eq!(config.fallback_locale, Locale::En);
    assert!(config.content_dir.is_none());
    assert!(config.include_builtin);
    assert!(config.validation.enabled);
    assert!(!config.validation.strict);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() -> Result<()> {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // No concept source at all
    config.include_builtin = false;
    assert!(config.validate().is_err());

    // A content directory that exists is a valid source
    let temp_dir = common::create_temp_dir()?;
    config.content_dir = Some(temp_dir.path().to_path_buf());
    assert!(config.validate().is_ok());

    // A content directory that does not exist
    config.content_dir = Some(temp_dir.path().join("missing"));
    assert!(config.validate().is_err());

    // Strict validation needs validation enabled
    let mut config = Config::default();
    config.validation.enabled = false;
    config.validation.strict = true;
    assert!(config.validate().is_err());

    Ok(())
}

/// Test saving and loading a config file
#[test]
fn test_config_save_and_load_withCustomValues_shouldPreserveThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conceptdocs.json");

    let mut config = Config::default();
    config.default_locale = Locale::Es;
    config.validation.strict = true;
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let (loaded, found) = Config::load_or_default(&path)?;

    assert!(found);
    assert_eq!(loaded, config);

    Ok(())
}

/// Test loading when the file does not exist
#[test]
fn test_load_or_default_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let (config, found) = Config::load_or_default(temp_dir.path().join("absent.json"))?;

    assert!(!found);
    assert_eq!(config, Config::default());

    Ok(())
}

/// Test that an unparseable file is reported with its path
#[test]
fn test_from_file_withInvalidJson_shouldFailWithContext() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    let error = Config::from_file(&path).unwrap_err();

    assert!(error.to_string().contains("Failed to parse config file"));

    Ok(())
}

/// Test that unknown locales in the file are rejected
#[test]
fn test_from_file_withUnsupportedLocale_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{ "default_locale": "fr" }"#)?;

    assert!(Config::from_file(&path).is_err());

    Ok(())
}
