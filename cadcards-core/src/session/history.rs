use serde::{Deserialize, Serialize};

/// Most entries kept in the recent list
pub const RECENT_HISTORY_LIMIT: usize = 5;

/// Recently viewed entry ids, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentHistory {
    ids: Vec<String>,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view. Ids already in the list keep their position.
    pub fn record(&mut self, id: &str) -> bool {
        if self.ids.iter().any(|seen| seen == id) {
            return false;
        }
        self.ids.insert(0, id.to_string());
        self.ids.truncate(RECENT_HISTORY_LIMIT);
        true
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_capped() {
        let mut history = RecentHistory::new();
        for id in ["a", "b", "c", "d", "e", "f"] {
            assert!(history.record(id));
        }
        assert_eq!(history.ids(), ["f", "e", "d", "c", "b"].map(String::from));
    }

    #[test]
    fn test_repeat_view_is_ignored() {
        let mut history = RecentHistory::new();
        history.record("a");
        history.record("b");
        assert!(!history.record("a"));
        assert_eq!(history.ids(), ["b", "a"].map(String::from));
    }
}
