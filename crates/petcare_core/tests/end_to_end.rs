use chrono::{Days, NaiveDate};
use petcare_core::{CareNeeds, CareTask, Owner, Pet, Schedule, SharedTracker, Tracker};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 14).unwrap()
}

fn tomorrow() -> NaiveDate {
    today().checked_add_days(Days::new(1)).unwrap()
}

fn amar_with_suki() -> Owner {
    let mut owner = Owner::with_email("Amar", "amar@example.com").unwrap();
    let mut suki = Pet::dog("Suki", "Pomsky", 13.6, 1.5).unwrap();
    let breakfast = CareTask::with_notes(
        "Breakfast",
        Schedule::first_due_on(1, today()).unwrap(),
        "Purina Pro",
    )
    .unwrap();
    suki.add_task(breakfast).unwrap();
    owner.add_pet(suki).unwrap();
    owner
}

#[test]
fn breakfast_cycle_through_tracker() {
    let mut tracker = Tracker::new();
    tracker.register_owner(amar_with_suki()).unwrap();

    let due: Vec<_> = tracker.all_due(today());
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].as_tuple(), ("Amar", "Suki", "Breakfast"));

    tracker
        .owner_mut("Amar")
        .and_then(|owner| owner.pet_mut("Suki"))
        .and_then(|pet| pet.task_mut("Breakfast"))
        .unwrap()
        .complete(today());

    assert!(tracker.all_due(today()).is_empty());
    let due = tracker.all_due(tomorrow());
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].as_tuple(), ("Amar", "Suki", "Breakfast"));
}

#[test]
fn demo_profile_values() {
    let owner = amar_with_suki();
    let suki = owner.pet("Suki").unwrap();

    assert_eq!(suki.daily_food_amount(), 13.6 * 40.0);
    assert_eq!(suki.daily_exercise_minutes(), 60);
    assert_eq!(suki.sound(), "Woof!");
    assert_eq!(suki.task("Breakfast").unwrap().notes(), "Purina Pro");
}

#[test]
fn shared_tracker_runs_same_cycle() {
    let shared = SharedTracker::new(Tracker::new());
    shared.register_owner(amar_with_suki()).unwrap();

    assert_eq!(shared.all_due(today()).len(), 1);
    shared
        .complete_task("Amar", "Suki", "Breakfast", today())
        .unwrap();
    assert!(shared.all_due(today()).is_empty());
    assert_eq!(shared.all_due(tomorrow()).len(), 1);
}
