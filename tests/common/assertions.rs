//! Custom test assertions

use geocache::{Coordinate, CoordinateDictionary, MemoryCache};

/// Assertions for coordinate dictionaries
pub trait DictionaryAssertions {
    /// Assert the dictionary holds exactly these keys
    fn assert_keys(&self, expected: &[&str]);

    /// Assert `key` maps to `coordinate`
    fn assert_coordinate(&self, key: &str, coordinate: Coordinate);
}

impl DictionaryAssertions for CoordinateDictionary {
    fn assert_keys(&self, expected: &[&str]) {
        let mut actual: Vec<&str> = self.keys().map(String::as_str).collect();
        actual.sort_unstable();
        let mut expected = expected.to_vec();
        expected.sort_unstable();
        assert_eq!(actual, expected, "Dictionary keys differ");
    }

    fn assert_coordinate(&self, key: &str, coordinate: Coordinate) {
        match self.get(key) {
            Some(found) => assert_eq!(*found, coordinate, "Wrong coordinate for {}", key),
            None => panic!("Expected {} to be present", key),
        }
    }
}

/// Assert the live entry count never exceeds `max + overflow`
pub fn assert_within_capacity(cache: &MemoryCache) {
    let config = cache.config();
    assert!(
        cache.len() <= config.max_cache_count(),
        "Cache holds {} live entries, limit is {}",
        cache.len(),
        config.max_cache_count()
    );
}
