use crate::error::{HandoffError, StoreError};
use crate::logger;
use crate::models::QuizResult;
use std::collections::HashMap;

/// Key the result view reads the finished quiz from.
pub const QUIZ_RESULT_KEY: &str = "tikiri.quizResult";

/// String key-value store shared by the quiz view and the result view.
pub trait ResultStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

pub fn publish(store: &mut dyn ResultStore, result: &QuizResult) -> Result<(), HandoffError> {
    let payload = serde_json::to_string(result)?;
    store.set(QUIZ_RESULT_KEY, &payload)?;
    logger::log(&format!(
        "Published quiz result: {} unwise of {} ({}%)",
        result.unwise_count,
        result.unwise_count + result.wise_count,
        result.unwise_percent
    ));
    Ok(())
}

/// Reads the published result. Anything unreadable counts as absent.
pub fn consume(store: &dyn ResultStore) -> Option<QuizResult> {
    let payload = match store.get(QUIZ_RESULT_KEY) {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(e) => {
            logger::log(&format!("Failed to read quiz result: {}", e));
            return None;
        }
    };

    match serde_json::from_str::<QuizResult>(&payload) {
        Ok(result) if result.unwise_percent <= 100 => Some(result),
        Ok(result) => {
            logger::log(&format!(
                "Ignoring quiz result with out-of-range percent {}",
                result.unwise_percent
            ));
            None
        }
        Err(e) => {
            logger::log(&format!("Ignoring malformed quiz result: {}", e));
            None
        }
    }
}

/// What the result view shows: the published result, or 0% when there is none.
pub fn consume_or_default(store: &dyn ResultStore) -> QuizResult {
    consume(store).unwrap_or_default()
}

pub fn clear(store: &mut dyn ResultStore) -> Result<(), StoreError> {
    store.remove(QUIZ_RESULT_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteStore;
    use crate::models::Choice;

    fn sample_result() -> QuizResult {
        QuizResult {
            answers: vec![Some(Choice::B), Some(Choice::A)],
            unwise_count: 1,
            wise_count: 1,
            unwise_percent: 50,
        }
    }

    #[test]
    fn test_consume_empty_store_defaults_to_zero() {
        let store = MemoryStore::new();
        assert!(consume(&store).is_none());
        assert_eq!(consume_or_default(&store).unwise_percent, 0);
    }

    #[test]
    fn test_publish_then_consume() {
        let mut store = MemoryStore::new();
        publish(&mut store, &sample_result()).unwrap();
        assert_eq!(consume(&store), Some(sample_result()));
    }

    #[test]
    fn test_publish_writes_legacy_json_under_fixed_key() {
        let mut store = MemoryStore::new();
        publish(&mut store, &sample_result()).unwrap();

        let raw = store.get("tikiri.quizResult").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["answers"], serde_json::json!(["B", "A"]));
        assert_eq!(json["yesCount"], 1);
        assert_eq!(json["noCount"], 1);
        assert_eq!(json["stupidPercent"], 50);
    }

    #[test]
    fn test_reads_value_written_by_other_surface() {
        let mut store = MemoryStore::new();
        store
            .set(
                QUIZ_RESULT_KEY,
                r#"{"answers":["A",null],"yesCount":2,"noCount":8,"stupidPercent":20}"#,
            )
            .unwrap();
        let result = consume(&store).unwrap();
        assert_eq!(result.answers, vec![Some(Choice::A), None]);
        assert_eq!(result.unwise_percent, 20);
    }

    #[test]
    fn test_malformed_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(QUIZ_RESULT_KEY, "not json").unwrap();
        assert!(consume(&store).is_none());
        assert_eq!(consume_or_default(&store), QuizResult::default());

        store
            .set(QUIZ_RESULT_KEY, r#"{"stupidPercent":"lots"}"#)
            .unwrap();
        assert_eq!(consume_or_default(&store).unwise_percent, 0);
    }

    #[test]
    fn test_out_of_range_percent_falls_back() {
        let mut store = MemoryStore::new();
        store.set(QUIZ_RESULT_KEY, r#"{"stupidPercent":140}"#).unwrap();
        assert!(consume(&store).is_none());
    }

    #[test]
    fn test_clear_removes_result() {
        let mut store = MemoryStore::new();
        publish(&mut store, &sample_result()).unwrap();
        clear(&mut store).unwrap();
        assert!(consume(&store).is_none());
    }

    #[test]
    fn test_sqlite_store_handoff() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("handoff.db");

        let mut writer = SqliteStore::open(&db_path).unwrap();
        publish(&mut writer, &sample_result()).unwrap();

        // The result view opens its own handle.
        let reader = SqliteStore::open(&db_path).unwrap();
        assert_eq!(consume(&reader), Some(sample_result()));
    }
}
