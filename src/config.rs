//! Generation settings, and loading them from a YAML defaults file.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::CharacterClass;

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            length: 26,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

impl GenerationConfig {
    /// Lengths outside `MIN_LENGTH..=MAX_LENGTH` are allowed, but warned about.
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 26;
    /// The longest password that will be generated at all.
    pub const LENGTH_LIMIT: usize = 4096;

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.include_uppercase,
            CharacterClass::Lowercase => &mut self.include_lowercase,
            CharacterClass::Numbers => &mut self.include_numbers,
            CharacterClass::Symbols => &mut self.include_symbols,
        };
        *flag = enabled;
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    pub fn any_class_enabled(&self) -> bool {
        self.enabled_classes().next().is_some()
    }

    pub fn length_in_recommended_range(&self) -> bool {
        (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&self.length)
    }

    pub fn length_within_limit(&self) -> bool {
        self.length <= Self::LENGTH_LIMIT
    }

    /// Load a config from a YAML file. Fields missing from the file take their default values.
    pub fn load(path: &Path) -> Result<GenerationConfig, ConfigError> {
        let file = File::open(path).map_err(ConfigErrorRepr::Io)?;
        Self::from_reader(file)
    }

    /// Like [`GenerationConfig::load`], but a file that doesn't exist yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<GenerationConfig, ConfigError> {
        match File::open(path) {
            Ok(file) => Self::from_reader(file),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}; using defaults", path.display());
                Ok(GenerationConfig::default())
            }
            Err(err) => Err(ConfigErrorRepr::Io(err).into()),
        }
    }

    pub fn from_reader(rdr: impl Read) -> Result<GenerationConfig, ConfigError> {
        // An empty document deserializes as unit rather than a map.
        let value: Option<GenerationConfig> =
            serde_yaml::from_reader(rdr).map_err(ConfigErrorRepr::Parse)?;
        Ok(value.unwrap_or_default())
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ConfigError(ConfigErrorRepr);

impl From<ConfigErrorRepr> for ConfigError {
    fn from(err: ConfigErrorRepr) -> ConfigError {
        ConfigError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum ConfigErrorRepr {
    #[error("I/O error while reading the config: {0}")]
    Io(io::Error),
    #[error("failed to parse the config as YAML: {0}")]
    Parse(#[source] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::GenerationConfig;
    use crate::CharacterClass;

    #[test]
    fn defaults_match_the_form() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 26);
        assert!(!config.any_class_enabled());
        assert!(config.length_in_recommended_range());
    }

    #[test]
    fn set_and_query_classes() {
        let mut config = GenerationConfig::default();
        config.set_class(CharacterClass::Symbols, true);
        config.set_class(CharacterClass::Uppercase, true);
        config.set_class(CharacterClass::Uppercase, false);
        assert_eq!(
            config.enabled_classes().collect::<Vec<_>>(),
            vec![CharacterClass::Symbols]
        );
        assert!(config.include_symbols);
        assert!(!config.include_uppercase);
    }

    #[test]
    fn recommended_range() {
        let mut config = GenerationConfig::default();
        config.length = 7;
        assert!(!config.length_in_recommended_range());
        config.length = 8;
        assert!(config.length_in_recommended_range());
        config.length = 27;
        assert!(!config.length_in_recommended_range());
        assert!(config.length_within_limit());
        config.length = GenerationConfig::LENGTH_LIMIT + 1;
        assert!(!config.length_within_limit());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config =
            GenerationConfig::from_reader("include_numbers: true\nlength: 12\n".as_bytes())
                .unwrap();
        assert_eq!(config.length, 12);
        assert!(config.include_numbers);
        assert!(!config.include_lowercase);
    }

    #[test]
    fn empty_yaml_is_default() {
        let config = GenerationConfig::from_reader("".as_bytes()).unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = GenerationConfig::from_reader("length: [1, 2]\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("YAML"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"include_lowercase: true\ninclude_symbols: true\n")
            .unwrap();
        let config = GenerationConfig::load(file.path()).unwrap();
        assert!(config.include_lowercase);
        assert!(config.include_symbols);
        assert_eq!(config.length, 26);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        assert_eq!(
            GenerationConfig::load_or_default(&path).unwrap(),
            GenerationConfig::default()
        );
        assert!(GenerationConfig::load(&path).is_err());
    }
}
