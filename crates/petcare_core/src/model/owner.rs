//! Pet owner aggregate.
//!
//! # Responsibility
//! - Own a named set of pets in insertion order.
//!
//! # Invariants
//! - `name` is non-blank.
//! - Pet names are unique per owner; re-insertion is rejected, not merged.

use crate::error::{CareError, CareResult, EntityKind};
use crate::model::pet::Pet;
use crate::model::validation::normalize_name;
use log::{debug, warn};
use std::fmt::{Display, Formatter};

/// A person owning one or more pets.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    name: String,
    email: Option<String>,
    pets: Vec<Pet>,
}

impl Owner {
    /// Creates an owner without contact email.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is blank.
    pub fn new(name: &str) -> CareResult<Self> {
        Ok(Self {
            name: normalize_name("owner name", name)?,
            email: None,
            pets: Vec::new(),
        })
    }

    pub fn with_email(name: &str, email: impl Into<String>) -> CareResult<Self> {
        let mut owner = Self::new(name)?;
        owner.email = Some(email.into());
        Ok(owner)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Pets in the order they were added.
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pet(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.name() == name)
    }

    pub fn pet_mut(&mut self, name: &str) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.name() == name)
    }

    /// Adds a pet, rejecting a name already used by this owner.
    pub fn add_pet(&mut self, pet: Pet) -> CareResult<()> {
        if self.pet(pet.name()).is_some() {
            warn!("event=pet_add module=owner status=rejected reason=duplicate_name");
            return Err(CareError::duplicate(EntityKind::Pet, pet.name()));
        }
        self.pets.push(pet);
        debug!(
            "event=pet_add module=owner status=ok pet_count={}",
            self.pets.len()
        );
        Ok(())
    }

    /// Removes and returns the pet named `name`.
    ///
    /// # Errors
    /// - `NotFound` when no pet has that name.
    pub fn remove_pet(&mut self, name: &str) -> CareResult<Pet> {
        let index = self
            .pets
            .iter()
            .position(|pet| pet.name() == name)
            .ok_or_else(|| CareError::not_found(EntityKind::Pet, name))?;
        let removed = self.pets.remove(index);
        debug!(
            "event=pet_remove module=owner status=ok pet_count={}",
            self.pets.len()
        );
        Ok(removed)
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} pet(s)", self.name, self.pets.len())
    }
}
