use crate::app_dirs::AppDirs;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

const RANGE_MIN_KEY: &str = "RangeMin";
const RANGE_MAX_KEY: &str = "RangeMax";

/// Inclusive range secret numbers are drawn from. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
    min: i32,
    max: i32,
}

impl RangeConfig {
    pub fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn as_inclusive(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

/// On-disk game settings, keyed `RangeMin` / `RangeMax`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    pub range_min: i32,
    pub range_max: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            range_min: 1,
            range_max: 100,
        }
    }
}

impl Settings {
    /// Replace either bound, leaving the other as loaded.
    pub fn with_overrides(self, range_min: Option<i32>, range_max: Option<i32>) -> Self {
        Self {
            range_min: range_min.unwrap_or(self.range_min),
            range_max: range_max.unwrap_or(self.range_max),
        }
    }

    pub fn range(&self) -> Result<RangeConfig, ConfigError> {
        RangeConfig::new(self.range_min, self.range_max)
    }
}

// Bounds are accepted as numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBound {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(rename = "RangeMin")]
    range_min: Option<RawBound>,
    #[serde(rename = "RangeMax")]
    range_max: Option<RawBound>,
}

fn resolve_bound(key: &'static str, bound: Option<RawBound>) -> Result<i32, ConfigError> {
    let non_numeric = |value: String| ConfigError::NonNumericBound { key, value };
    match bound {
        None => Err(ConfigError::MissingBound(key)),
        Some(RawBound::Number(n)) => i32::try_from(n).map_err(|_| non_numeric(n.to_string())),
        Some(RawBound::Text(text)) => text.trim().parse::<i32>().map_err(|_| non_numeric(text)),
    }
}

/// Parse settings from JSON bytes. `path` is only used for error reporting.
pub fn parse_settings(bytes: &[u8], path: &Path) -> Result<Settings, ConfigError> {
    let raw: RawSettings = serde_json::from_slice(bytes).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Settings {
        range_min: resolve_bound(RANGE_MIN_KEY, raw.range_min)?,
        range_max: resolve_bound(RANGE_MAX_KEY, raw.range_max)?,
    })
}

pub trait ConfigStore {
    fn load(&self) -> Result<Settings, ConfigError>;
    fn save(&self, settings: &Settings) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// `./settings.json` if it exists, else the platform config directory.
    pub fn discover() -> Self {
        let local = PathBuf::from(SETTINGS_FILE_NAME);
        let path = if local.exists() {
            local
        } else {
            AppDirs::settings_path().unwrap_or(local)
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Settings, ConfigError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                log::debug!("loading settings from {}", self.path.display());
                parse_settings(&bytes, &self.path)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ConfigError::NotFound {
                path: self.path.clone(),
            }),
            Err(source) => Err(ConfigError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, settings: &Settings) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    fn parse(json: &str) -> Result<Settings, ConfigError> {
        parse_settings(json.as_bytes(), Path::new("settings.json"))
    }

    #[test]
    fn roundtrip_default_settings() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("settings.json"));
        let settings = Settings::default();
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn saved_file_uses_pascal_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let store = FileConfigStore::with_path(&path);
        store
            .save(&Settings {
                range_min: -5,
                range_max: 5,
            })
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"RangeMin\": -5"));
        assert!(text.contains("\"RangeMax\": 5"));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let settings = parse(r#"{ "RangeMin": "1", "RangeMax": " 50 " }"#).unwrap();
        assert_eq!(settings.range_min, 1);
        assert_eq!(settings.range_max, 50);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings = parse(r#"{ "RangeMin": 3, "RangeMax": 9, "Theme": "dark" }"#).unwrap();
        assert_eq!(settings.range().unwrap().as_inclusive(), 3..=9);
    }

    #[test]
    fn missing_bound_is_reported() {
        assert_matches!(
            parse(r#"{ "RangeMin": 1 }"#),
            Err(ConfigError::MissingBound("RangeMax"))
        );
        assert_matches!(parse("{}"), Err(ConfigError::MissingBound("RangeMin")));
    }

    #[test]
    fn non_numeric_bound_is_reported() {
        assert_matches!(
            parse(r#"{ "RangeMin": "one", "RangeMax": 10 }"#),
            Err(ConfigError::NonNumericBound { key: "RangeMin", .. })
        );
        assert_matches!(
            parse(r#"{ "RangeMin": 1, "RangeMax": 99999999999 }"#),
            Err(ConfigError::NonNumericBound { key: "RangeMax", .. })
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert_matches!(parse("RangeMin=1"), Err(ConfigError::Parse { .. }));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let settings = parse(r#"{ "RangeMin": 10, "RangeMax": 1 }"#).unwrap();
        assert_matches!(
            settings.range(),
            Err(ConfigError::InvalidRange { min: 10, max: 1 })
        );
    }

    #[test]
    fn single_value_range_is_valid() {
        let range = RangeConfig::new(7, 7).unwrap();
        assert!(range.contains(7));
        assert!(!range.contains(8));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let store = FileConfigStore::with_path(&path);
        assert_matches!(store.load(), Err(ConfigError::NotFound { path: p }) if p == path);
    }

    #[test]
    fn missing_file_error_points_at_init_config() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("settings.json"),
        };
        assert!(err.to_string().contains("--init-config"));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path());
        assert_matches!(store.load(), Err(ConfigError::Read { .. }));
    }

    #[test]
    fn overrides_replace_only_given_bounds() {
        let settings = Settings::default().with_overrides(None, Some(20));
        assert_eq!(
            settings,
            Settings {
                range_min: 1,
                range_max: 20
            }
        );
    }
}
