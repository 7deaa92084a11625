//! Configuration management for the salary survey.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. The configuration is built once at
//! startup and handed by value to the sources and the aggregator.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Languages surveyed when no list is configured.
pub const DEFAULT_LANGUAGES: [&str; 9] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Swift",
    "TypeScript",
];

/// SuperJob never returns more than this many objects per page.
const SUPERJOB_MAX_PAGE_SIZE: u32 = 100;

/// Main application configuration.
///
/// This is loaded from `~/.config/salary-survey/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General survey settings
    pub general: GeneralConfig,
    /// hh.ru listing source settings
    pub hh: HhConfig,
    /// SuperJob catalogue source settings
    pub superjob: SuperJobConfig,
    /// HTTP client and scheduling settings
    pub http: HttpConfig,
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults
    /// if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides, then validate.
    ///
    /// Supports the following environment variables:
    /// - `SALARY_SURVEY_LANGUAGES`: Comma separated language list
    /// - `SALARY_SURVEY_CONCURRENCY`: Languages fetched at the same time
    /// - `SALARY_SURVEY_TIMEOUT_SECS`: HTTP request timeout
    pub fn load_with_env(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    ///
    /// Unparseable values are ignored and the configured value is kept.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SALARY_SURVEY_LANGUAGES") {
            let languages: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if !languages.is_empty() {
                tracing::debug!("Override general.languages from env: {:?}", languages);
                self.general.languages = languages;
            }
        }

        if let Some(val) = lookup("SALARY_SURVEY_CONCURRENCY") {
            if let Ok(limit) = val.parse() {
                self.http.max_concurrent_languages = limit;
                tracing::debug!("Override http.max_concurrent_languages from env: {}", limit);
            }
        }

        if let Some(val) = lookup("SALARY_SURVEY_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.http.timeout_secs = secs;
                tracing::debug!("Override http.timeout_secs from env: {}", secs);
            }
        }
    }

    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.general.languages.is_empty() {
            return Err(invalid("general.languages", "at least one language is required"));
        }
        if self.general.languages.iter().any(|l| l.trim().is_empty()) {
            return Err(invalid("general.languages", "language names must not be blank"));
        }
        let mut seen = HashSet::new();
        let mut languages = self.general.languages.iter().map(String::as_str);
        if let Some(repeated) = languages.find(|l| !seen.insert(*l)) {
            return Err(invalid(
                "general.languages",
                &format!("{repeated} is listed more than once"),
            ));
        }
        if self.http.max_concurrent_languages == 0 {
            return Err(invalid("http.max_concurrent_languages", "must be at least 1"));
        }
        if self.http.timeout_secs == 0 {
            return Err(invalid("http.timeout_secs", "must be at least 1"));
        }
        if self.superjob.page_size == 0 || self.superjob.page_size > SUPERJOB_MAX_PAGE_SIZE {
            return Err(invalid(
                "superjob.page_size",
                &format!("must be between 1 and {SUPERJOB_MAX_PAGE_SIZE}"),
            ));
        }
        if matches!(self.hh.per_page, Some(0)) {
            return Err(invalid("hh.per_page", "must be at least 1 when set"));
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/salary-survey/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "salary-survey", "salary-survey")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// General survey settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Language keywords to survey, in report order
    pub languages: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| (*l).to_string()).collect(),
        }
    }
}

/// hh.ru listing source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HhConfig {
    /// API base URL
    pub base_url: String,
    /// Area code searched (1 = Moscow)
    pub area: u32,
    /// Only listings published within this many days
    pub period_days: u32,
    /// Page size; the API default is used when unset
    pub per_page: Option<u32>,
    /// Currency code salaries must be reported in to be averaged
    pub currency: String,
    /// Report title
    pub title: String,
}

impl Default for HhConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru".to_string(),
            area: 1,
            period_days: 1,
            per_page: None,
            currency: "RUR".to_string(),
            title: "hh Moscow".to_string(),
        }
    }
}

/// SuperJob catalogue source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    /// API base URL
    pub base_url: String,
    /// Town name searched
    pub town: String,
    /// Catalogue (job category) id; 48 is "Development, programming"
    pub catalogue: u32,
    /// Currency requested from the API; all returned salaries use it
    pub currency: String,
    /// Objects per page
    pub page_size: u32,
    /// Report title
    pub title: String,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0".to_string(),
            town: "Москва".to_string(),
            catalogue: 48,
            currency: "rub".to_string(),
            page_size: SUPERJOB_MAX_PAGE_SIZE,
            title: "sj Moscow".to_string(),
        }
    }
}

/// HTTP client and scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string (hh.ru rejects requests without one)
    pub user_agent: String,
    /// Languages fetched at the same time; 1 keeps the survey sequential
    pub max_concurrent_languages: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("salary-survey/", env!("CARGO_PKG_VERSION")).to_string(),
            max_concurrent_languages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.languages.len(), 9);
        assert_eq!(config.general.languages[0], "JavaScript");
        assert_eq!(config.hh.area, 1);
        assert_eq!(config.hh.currency, "RUR");
        assert_eq!(config.superjob.catalogue, 48);
        assert_eq!(config.superjob.page_size, 100);
        assert_eq!(config.http.max_concurrent_languages, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[general]
languages = ["Rust", "Go"]

[superjob]
town = "Санкт-Петербург"
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.general.languages, vec!["Rust", "Go"]);
        assert_eq!(config.superjob.town, "Санкт-Петербург");
        // These should be defaults
        assert_eq!(config.superjob.catalogue, 48);
        assert_eq!(config.hh.base_url, "https://api.hh.ru");
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            "[hh]\narea = 2\nper_page = 50\n\n[http]\nmax_concurrent_languages = 4\n",
        )
        .expect("write config file");

        let config = AppConfig::load_from(&config_path).expect("load config");
        assert_eq!(config.hh.area, 2);
        assert_eq!(config.hh.per_page, Some(50));
        assert_eq!(config.http.max_concurrent_languages, 4);
    }

    #[test]
    fn test_load_from_missing_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let err = AppConfig::load_from(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "[hh\narea = ").expect("write config file");

        let err = AppConfig::load_from(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SALARY_SURVEY_LANGUAGES", "Rust, Go ,,Kotlin"),
            ("SALARY_SURVEY_CONCURRENCY", "3"),
            ("SALARY_SURVEY_TIMEOUT_SECS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env_overrides(|name| env.get(name).map(|v| (*v).to_string()));

        assert_eq!(config.general.languages, vec!["Rust", "Go", "Kotlin"]);
        assert_eq!(config.http.max_concurrent_languages, 3);
        // Unparseable value keeps the default
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.general.languages.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "general.languages"
        ));

        let mut config = AppConfig::default();
        config.http.max_concurrent_languages = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.superjob.page_size = 500;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.hh.per_page = Some(0);
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.general.languages = vec!["Go".to_string(), "Go".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[superjob]"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.superjob.town, config.superjob.town);
    }
}
