//! Veterinary history attached to each pet.

use std::fmt::{Display, Formatter};

/// Vaccination names and appointment notes in recording order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VetRecord {
    vaccinations: Vec<String>,
    appointments: Vec<String>,
}

impl VetRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vaccination(&mut self, name: impl Into<String>) {
        self.vaccinations.push(name.into());
    }

    pub fn add_appointment(&mut self, note: impl Into<String>) {
        self.appointments.push(note.into());
    }

    pub fn vaccinations(&self) -> &[String] {
        &self.vaccinations
    }

    pub fn appointments(&self) -> &[String] {
        &self.appointments
    }

    /// Number of recorded vet visits (one per appointment note).
    pub fn visit_count(&self) -> usize {
        self.appointments.len()
    }
}

impl Display for VetRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vaccinations, {} vet visits",
            self.vaccinations.len(),
            self.appointments.len()
        )
    }
}
