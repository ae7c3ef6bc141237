//! Owner registry and due-task aggregation.
//!
//! # Responsibility
//! - Own the registered owners in registration order.
//! - Answer "what is due on date D" across the whole owner/pet/task tree.
//!
//! # Invariants
//! - Owner names are unique; `register_owner` rejects duplicates like
//!   `Owner::add_pet` and `Pet::add_task` do. Overwrite is only possible
//!   through `replace_owner`.
//! - `all_due` orders results by owner registration, then pet insertion,
//!   then task insertion.

use crate::error::{CareError, CareResult, EntityKind};
use crate::model::owner::Owner;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One due task located in the ownership tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DueEntry {
    pub owner_name: String,
    pub pet_name: String,
    pub task_label: String,
}

impl DueEntry {
    /// Borrows the entry as an `(owner, pet, task)` tuple.
    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (
            self.owner_name.as_str(),
            self.pet_name.as_str(),
            self.task_label.as_str(),
        )
    }
}

/// Registry of owners answering due-task queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracker {
    owners: Vec<Owner>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owners in registration order.
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    pub fn owner(&self, name: &str) -> Option<&Owner> {
        self.owners.iter().find(|owner| owner.name() == name)
    }

    pub fn owner_mut(&mut self, name: &str) -> Option<&mut Owner> {
        self.owners.iter_mut().find(|owner| owner.name() == name)
    }

    /// Registers a new owner.
    ///
    /// # Errors
    /// - `DuplicateKey` when an owner with the same name is registered; the
    ///   registered owner is left untouched.
    pub fn register_owner(&mut self, owner: Owner) -> CareResult<()> {
        if self.owner(owner.name()).is_some() {
            warn!("event=owner_register module=tracker status=rejected reason=duplicate_name");
            return Err(CareError::duplicate(EntityKind::Owner, owner.name()));
        }
        self.owners.push(owner);
        debug!(
            "event=owner_register module=tracker status=ok owner_count={}",
            self.owners.len()
        );
        Ok(())
    }

    /// Inserts `owner`, overwriting a registered owner of the same name.
    ///
    /// A replaced owner keeps its registration position. Returns the
    /// previous owner when one was replaced.
    pub fn replace_owner(&mut self, owner: Owner) -> Option<Owner> {
        match self.owner_mut(owner.name()) {
            Some(slot) => {
                debug!("event=owner_replace module=tracker status=ok replaced=true");
                Some(std::mem::replace(slot, owner))
            }
            None => {
                self.owners.push(owner);
                debug!("event=owner_replace module=tracker status=ok replaced=false");
                None
            }
        }
    }

    /// Lists every task due on `on` across all owners and pets.
    pub fn all_due(&self, on: NaiveDate) -> Vec<DueEntry> {
        let mut entries = Vec::new();
        for owner in &self.owners {
            for pet in owner.pets() {
                for task in pet.due_tasks(on) {
                    entries.push(DueEntry {
                        owner_name: owner.name().to_string(),
                        pet_name: pet.name().to_string(),
                        task_label: task.label().to_string(),
                    });
                }
            }
        }
        debug!(
            "event=due_query module=tracker status=ok due_count={}",
            entries.len()
        );
        entries
    }

    /// Completes one task addressed by owner, pet and task label.
    ///
    /// # Errors
    /// - `NotFound` naming the first missing level of the path.
    pub fn complete_task(
        &mut self,
        owner_name: &str,
        pet_name: &str,
        task_label: &str,
        on: NaiveDate,
    ) -> CareResult<()> {
        let owner = self
            .owner_mut(owner_name)
            .ok_or_else(|| CareError::not_found(EntityKind::Owner, owner_name))?;
        let pet = owner
            .pet_mut(pet_name)
            .ok_or_else(|| CareError::not_found(EntityKind::Pet, pet_name))?;
        pet.complete_task(task_label, on)
    }
}

impl Display for Tracker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tracker with {} owner(s)", self.owners.len())
    }
}
