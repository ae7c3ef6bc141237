//! Flat pet report export.
//!
//! # Responsibility
//! - Render one `<name>, Age: <age>, Weight: <weight>` line per pet.
//!
//! # Invariants
//! - Each export truncates the destination and rewrites it in full.

use crate::journal::{single_line, JournalError, JournalResult};
use crate::model::pet::Pet;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Formats `<name>, Age: <age>, Weight: <weight>`.
pub fn format_report_line(pet: &Pet) -> String {
    format!(
        "{}, Age: {}, Weight: {}",
        single_line(pet.name()),
        pet.age_years(),
        pet.weight_kg()
    )
}

/// Writes one report line per pet to `path`, replacing previous content.
///
/// # Errors
/// - `InvalidPath` when `path` is empty.
/// - `Io` when the file cannot be created or written.
pub fn export_pet_report<'a, I>(path: &Path, pets: I) -> JournalResult<usize>
where
    I: IntoIterator<Item = &'a Pet>,
{
    if path.as_os_str().is_empty() {
        return Err(JournalError::InvalidPath(
            "report path must not be empty".to_string(),
        ));
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let mut written = 0usize;
    for pet in pets {
        writeln!(writer, "{}", format_report_line(pet))?;
        written += 1;
    }
    writer.flush()?;

    info!("event=pet_report_export module=journal status=ok pet_count={written}");
    Ok(written)
}
