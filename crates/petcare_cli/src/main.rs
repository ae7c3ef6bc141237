//! CLI smoke entry point.
//!
//! # Responsibility
//! - Run the canonical owner -> pet -> task scenario against `petcare_core`.
//! - Keep output deterministic for a given date argument (`YYYY-MM-DD`,
//!   defaults to today).

use chrono::Local;
use petcare_core::{parse_date, CareNeeds, CareResult, CareTask, Owner, Pet, Schedule, Tracker};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("petcare: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CareResult<()> {
    let today = match std::env::args().nth(1) {
        Some(arg) => parse_date(&arg)?,
        None => Local::now().date_naive(),
    };
    println!("petcare_core version={}", petcare_core::core_version());

    let mut owner = Owner::with_email("Amar", "amar@example.com")?;
    let mut suki = Pet::dog("Suki", "Pomsky", 13.6, 1.5)?;
    let feed = CareTask::with_notes(
        "Breakfast",
        Schedule::first_due_on(1, today)?,
        "Purina Pro",
    )?;
    println!("\n=== TASK ===");
    println!("{feed}");
    println!("Due today? {}", feed.is_due(today));
    suki.add_task(feed)?;

    println!("\n=== PET ===");
    println!("{suki}");
    println!("Daily food amount: {}", suki.daily_food_amount());
    println!("Daily exercise needed: {}", suki.daily_exercise_minutes());
    println!("Sound: {}", suki.sound());
    owner.add_pet(suki)?;

    println!("\n=== OWNER ===");
    println!("{owner}");

    let mut tracker = Tracker::new();
    tracker.register_owner(owner)?;

    println!("\n=== TRACKER OUTPUT ===");
    println!("{tracker}");
    for entry in tracker.all_due(today) {
        let (owner_name, pet_name, task_label) = entry.as_tuple();
        println!("{owner_name} / {pet_name} / {task_label}");
    }
    Ok(())
}
