//! Configuration loading from files

use geocache::MemoryCache;
use geocache::config::{BlobBackendKind, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_config_file_drives_cache_capacity() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "cache:\n  max_cache_size: 4\n  max_cache_size_overflow: 1\nstorage:\n  backend: local\n"
    )
    .unwrap();

    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config.storage.backend, BlobBackendKind::Local);

    let cache = MemoryCache::new(config.cache).unwrap();
    assert_eq!(cache.config().max_cache_count(), 5);
}

#[tokio::test]
async fn test_invalid_storage_key_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "storage:\n  storage_key: \"../escape\"\n").unwrap();
    assert!(Config::from_file(file.path()).await.is_err());
}

#[test]
fn test_yaml_round_trip() {
    let mut config = Config::default();
    config.cache.max_cache_size = 123;
    config.logging.json = true;

    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml_str(&yaml).unwrap(), config);
}
