//! Core domain logic for the pet care tracker.
//! This crate is the single source of truth for care scheduling invariants.

pub mod config;
pub mod error;
pub mod journal;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{CareConfig, ConfigError};
pub use error::{CareError, CareResult, EntityKind};
pub use journal::{export_pet_report, CareJournal, JournalError, JournalResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::owner::Owner;
pub use model::pet::{ActivityLevel, CareNeeds, HealthStatus, HealthSummary, Pet, Species};
pub use model::schedule::{FirstDue, Schedule};
pub use model::task::CareTask;
pub use model::validation::parse_date;
pub use model::vet::VetRecord;
pub use service::shared::SharedTracker;
pub use service::tracker::{DueEntry, Tracker};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
