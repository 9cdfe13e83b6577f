use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

/// Append-only memoization map shared behind `&self`.
///
/// Resolution results never change for the lifetime of a process, so entries
/// are inserted once and read forever. Contention on the mutex is negligible:
/// keys are small and reused constantly after warm-up.
#[derive(Debug, Default)]
pub(crate) struct PatternCache<Key, Value>
where
    Key: Eq + Hash,
{
    cache: Mutex<HashMap<Key, Value>>,
}

impl<Key, Value> PatternCache<Key, Value>
where
    Key: Eq + Hash + Clone,
    Value: Clone,
{
    pub(crate) fn new() -> Self {
        PatternCache {
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn read(&self, key: &Key) -> Option<Value> {
        self.cache.lock().expect("cache mutex poisoned").get(key).cloned()
    }

    pub(crate) fn write(&self, key: &Key, value: &Value) {
        self.cache
            .lock()
            .expect("cache mutex poisoned")
            .insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_of_missing_key_is_none() {
        let cache = PatternCache::<String, String>::new();
        assert!(cache.read(&"missing".to_string()).is_none());
    }

    #[test]
    fn write_then_read() {
        let cache = PatternCache::<(String, u8), String>::new();
        let key = ("en-us".to_string(), 2);
        cache.write(&key, &"M/d/yy".to_string());
        assert_eq!(cache.read(&key).as_deref(), Some("M/d/yy"));
    }

    #[test]
    fn overwrite_keeps_latest_value() {
        let cache = PatternCache::<String, i32>::new();
        let key = "counter".to_string();
        cache.write(&key, &1);
        cache.write(&key, &2);
        assert_eq!(cache.read(&key), Some(2));
    }
}
