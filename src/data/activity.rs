use crate::models::ActivityRecord;

/// Watch events in file order
#[derive(Debug, Clone)]
pub struct UserActivity {
    records: Vec<ActivityRecord>,
}

impl UserActivity {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }

    /// Rows belonging to one user, in original order
    pub fn for_user(&self, user_id: u64) -> impl Iterator<Item = &ActivityRecord> {
        self.records
            .iter()
            .filter(move |record| record.user_id == user_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
