//! Thread-safe handle over one tracker tree.
//!
//! # Invariants
//! - The whole owner/pet/task tree is guarded by a single mutex; reads and
//!   mutations are serialized through it.
//! - Clones share the same tree.

use crate::error::CareResult;
use crate::model::owner::Owner;
use crate::service::tracker::{DueEntry, Tracker};
use chrono::NaiveDate;
use log::warn;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared, lock-guarded tracker for multi-threaded embeddings.
#[derive(Debug, Clone, Default)]
pub struct SharedTracker {
    inner: Arc<Mutex<Tracker>>,
}

impl SharedTracker {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Runs `f` with exclusive access to the tracker tree.
    ///
    /// A panic inside `f` poisons the lock and later calls recover the tree
    /// as `f` left it, so multi-step closures must stay panic-safe.
    pub fn with<T>(&self, f: impl FnOnce(&mut Tracker) -> T) -> T {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn register_owner(&self, owner: Owner) -> CareResult<()> {
        self.with(|tracker| tracker.register_owner(owner))
    }

    pub fn complete_task(
        &self,
        owner_name: &str,
        pet_name: &str,
        task_label: &str,
        on: NaiveDate,
    ) -> CareResult<()> {
        self.with(|tracker| tracker.complete_task(owner_name, pet_name, task_label, on))
    }

    pub fn all_due(&self, on: NaiveDate) -> Vec<DueEntry> {
        self.with(|tracker| tracker.all_due(on))
    }

    // Why: the named methods each apply one insert or assignment, so a
    // poisoned lock still guards a consistent tree for them.
    fn lock(&self) -> MutexGuard<'_, Tracker> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("event=tracker_lock module=shared status=recovered reason=poisoned");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SharedTracker;
    use crate::model::owner::Owner;
    use crate::model::pet::Pet;
    use crate::model::schedule::Schedule;
    use crate::model::task::CareTask;
    use chrono::NaiveDate;
    use std::thread;

    #[test]
    fn concurrent_registrations_are_serialized() {
        let shared = SharedTracker::default();
        let handles: Vec<_> = (0..8)
            .map(|index| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let owner = Owner::new(&format!("owner-{index}")).unwrap();
                    shared.register_owner(owner).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.with(|tracker| tracker.owners().len()), 8);
    }

    #[test]
    fn completion_through_handle_is_visible_to_clones() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut pet = Pet::cat("Luna", "Tabby", 5.0, 3.0).unwrap();
        pet.add_task(CareTask::new("Litter", Schedule::first_due_on(2, today).unwrap()).unwrap())
            .unwrap();
        let mut owner = Owner::new("Amar").unwrap();
        owner.add_pet(pet).unwrap();

        let shared = SharedTracker::default();
        shared.register_owner(owner).unwrap();
        let reader = shared.clone();
        assert_eq!(reader.all_due(today).len(), 1);

        shared.complete_task("Amar", "Luna", "Litter", today).unwrap();
        assert!(reader.all_due(today).is_empty());
    }

    #[test]
    fn poisoned_lock_keeps_tree_readable() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut pet = Pet::dog("Suki", "Pomsky", 13.6, 1.5).unwrap();
        pet.add_task(CareTask::new("Feed", Schedule::new(1, start).unwrap()).unwrap())
            .unwrap();
        let mut owner = Owner::new("Amar").unwrap();
        owner.add_pet(pet).unwrap();

        let shared = SharedTracker::default();
        shared.register_owner(owner).unwrap();

        let writer = shared.clone();
        let joined = thread::spawn(move || writer.with(|_| panic!("closure failed"))).join();
        assert!(joined.is_err());

        let due = shared.all_due(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].as_tuple(), ("Amar", "Suki", "Feed"));

        shared.register_owner(Owner::new("Zoe").unwrap()).unwrap();
        assert_eq!(shared.with(|tracker| tracker.owners().len()), 2);
    }
}
