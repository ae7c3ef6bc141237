//! Runtime configuration for the care core's file collaborators.
//!
//! # Responsibility
//! - Carry every destination path explicitly instead of relying on the
//!   working directory.
//! - Validate paths and log level before anything touches the filesystem.

use crate::journal::{export_pet_report, CareJournal, JournalResult};
use crate::logging::{default_log_level, init_logging, parse_level, LoggingError};
use crate::model::pet::Pet;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required path field is empty. Carries the field name.
    EmptyPath(&'static str),
    /// A path field is relative. Carries the field name.
    RelativePath(&'static str),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath(field) => write!(f, "`{field}` must not be empty"),
            Self::RelativePath(field) => write!(f, "`{field}` must be an absolute path"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

/// File destinations and diagnostic level for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareConfig {
    #[serde(default = "default_level_string")]
    pub log_level: String,
    pub log_dir: PathBuf,
    pub journal_path: PathBuf,
    pub report_path: PathBuf,
}

fn default_level_string() -> String {
    default_log_level().to_string()
}

impl CareConfig {
    /// Places the log directory, journal and report under `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            log_level: default_level_string(),
            log_dir: root.join("logs"),
            journal_path: root.join("care_log.txt"),
            report_path: root.join("pet_report.txt"),
        }
    }

    /// Checks the log level and that every path is absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_level(&self.log_level)?;
        require_absolute("log_dir", &self.log_dir)?;
        require_absolute("journal_path", &self.journal_path)?;
        require_absolute("report_path", &self.report_path)?;
        Ok(())
    }

    /// Validates, then starts process logging from this configuration.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        self.validate()?;
        init_logging(&self.log_level, &self.log_dir)?;
        Ok(())
    }

    pub fn journal(&self) -> JournalResult<CareJournal> {
        CareJournal::new(self.journal_path.clone())
    }

    /// Exports the pet report to `report_path`. Returns the number of lines.
    pub fn export_report<'a, I>(&self, pets: I) -> JournalResult<usize>
    where
        I: IntoIterator<Item = &'a Pet>,
    {
        export_pet_report(&self.report_path, pets)
    }
}

fn require_absolute(field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath(field));
    }
    if !path.is_absolute() {
        return Err(ConfigError::RelativePath(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CareConfig, ConfigError};
    use crate::logging::LoggingError;
    use std::path::{Path, PathBuf};

    #[test]
    fn under_root_is_valid() {
        let config = CareConfig::under(Path::new("/var/lib/petcare"));
        config.validate().unwrap();
        assert_eq!(
            config.journal_path,
            PathBuf::from("/var/lib/petcare/care_log.txt")
        );
    }

    #[test]
    fn relative_and_empty_paths_are_rejected() {
        let mut config = CareConfig::under(Path::new("/srv/pets"));
        config.report_path = PathBuf::from("report.txt");
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::RelativePath("report_path")
        );

        config.report_path = PathBuf::new();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::EmptyPath("report_path")
        );
    }

    #[test]
    fn unsupported_level_is_rejected() {
        let mut config = CareConfig::under(Path::new("/srv/pets"));
        config.log_level = "loud".to_string();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::Logging(LoggingError::UnsupportedLevel("loud".to_string()))
        );
    }

    #[test]
    fn deserializes_with_default_level() {
        let config: CareConfig = serde_json::from_value(serde_json::json!({
            "log_dir": "/srv/pets/logs",
            "journal_path": "/srv/pets/care_log.txt",
            "report_path": "/srv/pets/pet_report.txt"
        }))
        .unwrap();
        assert_eq!(config.log_level, crate::logging::default_log_level());
        config.validate().unwrap();
    }
}
