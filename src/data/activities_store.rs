use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;

use crate::controllers::ActivitiesHttpError;

use super::{activity::Activity, seed::seed_activities};

pub type ActivitiesMap = BTreeMap<String, Activity>;

/// Shared handle to the in-memory activities table.
///
/// The set of activity names is fixed once the store is built; only rosters change. Every
/// membership transition checks and mutates under a single write lock so concurrent signups
/// on the same activity cannot lose updates.
#[derive(Clone)]
pub struct ActivitiesStore {
    inner: Arc<RwLock<ActivitiesMap>>
}

impl ActivitiesStore {
    pub fn from_activities<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>
    {
        let map = activities
            .into_iter()
            .map(|(name, activity)| (name.into(), activity))
            .collect();

        Self {
            inner: Arc::new(RwLock::new(map))
        }
    }

    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    /// Snapshot of every activity, taken under the read lock.
    pub async fn get_all(&self) -> ActivitiesMap {
        self.inner.read().await.clone()
    }

    pub async fn contains(&self, activity_name: &str) -> bool {
        self.inner.read().await.contains_key(activity_name)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn add_participant(&self, activity_name: &str, email: &str) -> Result<(), ActivitiesHttpError> {
        let mut lock = self.inner.write().await;
        let activity = lock.get_mut(activity_name)
            .ok_or_else(|| ActivitiesHttpError::activity_not_found(activity_name))?;

        if activity.has_participant(email) {
            return Err(ActivitiesHttpError::already_signed_up(activity_name));
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub async fn remove_participant(&self, activity_name: &str, email: &str) -> Result<(), ActivitiesHttpError> {
        let mut lock = self.inner.write().await;
        let activity = lock.get_mut(activity_name)
            .ok_or_else(|| ActivitiesHttpError::activity_not_found(activity_name))?;

        let position = activity.participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ActivitiesHttpError::not_signed_up(activity_name))?;

        activity.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_activity_store() -> ActivitiesStore {
        ActivitiesStore::from_activities([(
            "Chess Club",
            Activity::new("Chess", "Fridays", 2, &["michael@mergington.edu", "daniel@mergington.edu"])
        )])
    }

    #[tokio::test]
    async fn seeded_store_has_nine_activities() {
        let store = ActivitiesStore::seeded();

        assert_eq!(store.len().await, 9);
        assert!(store.contains("Chess Club").await);
        assert!(store.contains("Science Olympiad").await);
        assert!(!store.contains("Nonexistent Club").await);

        for (_, activity) in store.get_all().await {
            assert_eq!(activity.participants.len(), 2);
        }
    }

    #[tokio::test]
    async fn add_participant_appends_at_the_end() {
        let store = single_activity_store();
        store.add_participant("Chess Club", "newstudent@mergington.edu").await.unwrap();

        let activities = store.get_all().await;
        assert_eq!(
            activities["Chess Club"].participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu", "newstudent@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn add_participant_ignores_capacity() {
        let store = single_activity_store();
        store.add_participant("Chess Club", "third@mergington.edu").await.unwrap();
        store.add_participant("Chess Club", "fourth@mergington.edu").await.unwrap();

        let activities = store.get_all().await;
        assert_eq!(activities["Chess Club"].max_participants, 2);
        assert_eq!(activities["Chess Club"].participants.len(), 4);
    }

    #[tokio::test]
    async fn add_participant_rejects_duplicates() {
        let store = single_activity_store();
        let result = store.add_participant("Chess Club", "michael@mergington.edu").await;

        assert!(matches!(result, Err(ActivitiesHttpError::AlreadySignedUp(_))));
        assert_eq!(store.get_all().await["Chess Club"].participants.len(), 2);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let store = single_activity_store();

        let signup = store.add_participant("Nonexistent Club", "a@mergington.edu").await;
        let removal = store.remove_participant("Nonexistent Club", "a@mergington.edu").await;

        assert!(matches!(signup, Err(ActivitiesHttpError::ActivityNotFound(_))));
        assert!(matches!(removal, Err(ActivitiesHttpError::ActivityNotFound(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_participant_keeps_remaining_order() {
        let store = ActivitiesStore::from_activities([(
            "Drama Club",
            Activity::new("Drama", "Thursdays", 25, &["a@mergington.edu", "b@mergington.edu", "c@mergington.edu"])
        )]);

        store.remove_participant("Drama Club", "b@mergington.edu").await.unwrap();

        assert_eq!(
            store.get_all().await["Drama Club"].participants,
            vec!["a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn remove_participant_rejects_absent_email() {
        let store = single_activity_store();
        let result = store.remove_participant("Chess Club", "notsignedup@mergington.edu").await;

        assert!(matches!(result, Err(ActivitiesHttpError::NotSignedUp(_))));
    }

    #[tokio::test]
    async fn get_all_is_a_snapshot() {
        let store = single_activity_store();
        let before = store.get_all().await;

        store.add_participant("Chess Club", "later@mergington.edu").await.unwrap();

        assert_eq!(before["Chess Club"].participants.len(), 2);
        assert_eq!(store.get_all().await["Chess Club"].participants.len(), 3);
    }

    #[tokio::test]
    async fn concurrent_signups_are_not_lost() {
        let store = single_activity_store();

        let tasks = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.add_participant("Chess Club", &format!("student{}@mergington.edu", i)).await
                })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.get_all().await["Chess Club"].participants.len(), 34);
    }
}
