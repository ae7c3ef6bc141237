//! Pet model with species-specific care needs.
//!
//! # Responsibility
//! - Hold the shared pet profile (identity, breed, weight, age).
//! - Own the pet's care tasks and vet record.
//! - Expose species coefficients through the `CareNeeds` capability set.
//!
//! # Invariants
//! - `name` is non-blank and identifies the pet within its owner.
//! - Task labels are unique per pet; tasks iterate in insertion order.
//! - Weight and age are validated once at construction; there is no
//!   mutation path for either afterwards.
//! - `daily_food_amount` and `food_portion` are independent estimates.

use crate::error::{CareError, CareResult, EntityKind};
use crate::journal::{CareJournal, JournalResult};
use crate::model::task::CareTask;
use crate::model::validation::{normalize_name, validate_age, validate_weight};
use crate::model::vet::VetRecord;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Base grams-per-kg multiplier for activity-adjusted portions.
const PORTION_GRAMS_PER_KG: f64 = 30.0;

/// Species-specific capability set every pet provides.
pub trait CareNeeds {
    /// Daily food in grams.
    fn daily_food_amount(&self) -> f64;
    fn daily_exercise_minutes(&self) -> u32;
    fn sound(&self) -> &'static str;
}

/// Supported species. Each variant carries fixed care coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
    Bird,
}

impl Species {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
        }
    }

    pub fn food_grams_per_kg(self) -> f64 {
        match self {
            Self::Dog => 40.0,
            Self::Cat => 30.0,
            Self::Bird => 20.0,
        }
    }

    pub fn exercise_minutes(self) -> u32 {
        match self {
            Self::Dog => 60,
            Self::Cat => 20,
            Self::Bird => 10,
        }
    }

    pub fn sound(self) -> &'static str {
        match self {
            Self::Dog => "Woof!",
            Self::Cat => "Meow!",
            Self::Bird => "Chirp!",
        }
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = CareError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            "bird" => Ok(Self::Bird),
            other => Err(CareError::invalid(format!(
                "unsupported species `{other}`; expected dog|cat|bird"
            ))),
        }
    }
}

/// Activity level used by the general food portion estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    pub fn portion_factor(self) -> f64 {
        match self {
            Self::Low => 0.8,
            Self::Medium => 1.0,
            Self::High => 1.2,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = CareError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CareError::invalid(format!(
                "unsupported activity level `{other}`; expected low|medium|high"
            ))),
        }
    }
}

/// Overall health flag reported by `Pet::health_summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Needs attention")]
    NeedsAttention,
}

impl Display for HealthStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => f.write_str("Good"),
            Self::NeedsAttention => f.write_str("Needs attention"),
        }
    }
}

/// Point-in-time health snapshot of one pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub name: String,
    pub age: f64,
    pub weight: f64,
    pub vet_visit_count: usize,
    pub status: HealthStatus,
}

/// An owned pet with identity, physical attributes, tasks and vet history.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    name: String,
    species: Species,
    breed: String,
    weight_kg: f64,
    age_years: f64,
    tasks: Vec<CareTask>,
    vet: VetRecord,
}

impl Pet {
    /// Creates a pet of `species`.
    ///
    /// # Errors
    /// - `InvalidArgument` when `name` is blank, `age_years <= 0`, or
    ///   `weight_kg` lies outside `(0, 200)`.
    pub fn new(
        species: Species,
        name: &str,
        breed: impl Into<String>,
        weight_kg: f64,
        age_years: f64,
    ) -> CareResult<Self> {
        let name = normalize_name("pet name", name)?;
        let age_years = validate_age(age_years)?;
        let weight_kg = validate_weight(weight_kg)?;

        Ok(Self {
            name,
            species,
            breed: breed.into(),
            weight_kg,
            age_years,
            tasks: Vec::new(),
            vet: VetRecord::new(),
        })
    }

    pub fn dog(
        name: &str,
        breed: impl Into<String>,
        weight_kg: f64,
        age_years: f64,
    ) -> CareResult<Self> {
        Self::new(Species::Dog, name, breed, weight_kg, age_years)
    }

    pub fn cat(
        name: &str,
        breed: impl Into<String>,
        weight_kg: f64,
        age_years: f64,
    ) -> CareResult<Self> {
        Self::new(Species::Cat, name, breed, weight_kg, age_years)
    }

    pub fn bird(
        name: &str,
        breed: impl Into<String>,
        weight_kg: f64,
        age_years: f64,
    ) -> CareResult<Self> {
        Self::new(Species::Bird, name, breed, weight_kg, age_years)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn age_years(&self) -> f64 {
        self.age_years
    }

    pub fn vet(&self) -> &VetRecord {
        &self.vet
    }

    pub fn vet_mut(&mut self) -> &mut VetRecord {
        &mut self.vet
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[CareTask] {
        &self.tasks
    }

    pub fn task(&self, label: &str) -> Option<&CareTask> {
        self.tasks.iter().find(|task| task.label() == label)
    }

    pub fn task_mut(&mut self, label: &str) -> Option<&mut CareTask> {
        self.tasks.iter_mut().find(|task| task.label() == label)
    }

    /// Adds a task, rejecting a label already used by this pet.
    ///
    /// # Errors
    /// - `DuplicateKey` when the label exists; the existing task is untouched.
    pub fn add_task(&mut self, task: CareTask) -> CareResult<()> {
        if self.task(task.label()).is_some() {
            warn!("event=task_add module=pet status=rejected reason=duplicate_label");
            return Err(CareError::duplicate(EntityKind::Task, task.label()));
        }
        self.tasks.push(task);
        debug!(
            "event=task_add module=pet status=ok task_count={}",
            self.tasks.len()
        );
        Ok(())
    }

    /// Marks the task named `label` completed on `on`.
    ///
    /// # Errors
    /// - `NotFound` when no task has that label.
    pub fn complete_task(&mut self, label: &str, on: NaiveDate) -> CareResult<()> {
        let task = self
            .task_mut(label)
            .ok_or_else(|| CareError::not_found(EntityKind::Task, label))?;
        task.complete(on);
        debug!("event=task_complete module=pet status=ok");
        Ok(())
    }

    /// Tasks due on `on`, in insertion order.
    pub fn due_tasks(&self, on: NaiveDate) -> impl Iterator<Item = &CareTask> + '_ {
        self.tasks.iter().filter(move |task| task.is_due(on))
    }

    /// General food estimate in grams scaled by activity level.
    ///
    /// `activity_level` is one of `low|medium|high`, case-insensitive.
    pub fn food_portion(&self, activity_level: &str) -> CareResult<f64> {
        let level = activity_level.parse::<ActivityLevel>()?;
        Ok(self.food_portion_for(level))
    }

    pub fn food_portion_for(&self, level: ActivityLevel) -> f64 {
        self.weight_kg * PORTION_GRAMS_PER_KG * level.portion_factor()
    }

    /// Distance in km for a walk, rounded to two decimals.
    pub fn walk_distance(&self, duration_minutes: f64, pace_kmh: f64) -> f64 {
        round_to_cents(pace_kmh * (duration_minutes / 60.0))
    }

    pub fn reminder_message(&self, task_label: &str) -> String {
        format!("Reminder: {task_label} for {}.", self.name)
    }

    /// Appends one care event line for this pet to `journal`.
    pub fn log_event(
        &self,
        journal: &CareJournal,
        event_type: &str,
        notes: &str,
    ) -> JournalResult<()> {
        journal.record(&self.name, event_type, notes)
    }

    pub fn health_summary(&self) -> HealthSummary {
        let status = if self.weight_kg <= 0.0 || self.age_years <= 0.0 {
            HealthStatus::NeedsAttention
        } else {
            HealthStatus::Good
        };

        HealthSummary {
            name: self.name.clone(),
            age: self.age_years,
            weight: self.weight_kg,
            vet_visit_count: self.vet.visit_count(),
            status,
        }
    }
}

impl CareNeeds for Pet {
    fn daily_food_amount(&self) -> f64 {
        self.weight_kg * self.species.food_grams_per_kg()
    }

    fn daily_exercise_minutes(&self) -> u32 {
        self.species.exercise_minutes()
    }

    fn sound(&self) -> &'static str {
        self.species.sound()
    }
}

impl Display for Pet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} the {} ({})", self.name, self.breed, self.species)
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{round_to_cents, ActivityLevel, Species};

    #[test]
    fn species_parses_case_insensitively() {
        assert_eq!(" DOG ".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("Cat".parse::<Species>().unwrap(), Species::Cat);
        assert!("hamster".parse::<Species>().is_err());
    }

    #[test]
    fn activity_level_factors_are_fixed() {
        assert_eq!(ActivityLevel::Low.portion_factor(), 0.8);
        assert_eq!(ActivityLevel::Medium.portion_factor(), 1.0);
        assert_eq!(ActivityLevel::High.portion_factor(), 1.2);
    }

    #[test]
    fn round_to_cents_keeps_two_decimals() {
        assert_eq!(round_to_cents(1.23456), 1.23);
        assert_eq!(round_to_cents(2.005_1), 2.01);
    }
}
