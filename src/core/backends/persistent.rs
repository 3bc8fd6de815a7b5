//! Persistent blob-store backend
//!
//! All coordinates live in one JSON object stored under a fixed key:
//! `{ "<location key>": { "lat": <f64>, "lon": <f64> }, ... }`.
//! Reads never fail on I/O or parse problems; they yield an empty dictionary.
//! Writes merge into the stored object and report failures through
//! [`SaveStatus::Discarded`].

use crate::core::traits::{BlobStore, CacheManager, DiscardReason, PermissionState, SaveStatus};
use crate::core::types::{Coordinate, CoordinateDictionary, LocationKey, StoredLocation};
use crate::utils::error::{GeocacheError, Result};
use crate::utils::sys::ResultExt;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

type LocationObject = Map<String, Value>;

/// Durable coordinate cache on top of an async blob store
pub struct PersistentCache<S> {
    store: S,
    storage_key: String,
    /// Last permission state seen by `sync_status`; `None` until the first check
    permission: RwLock<Option<PermissionState>>,
    /// Serializes the read-merge-write cycle of concurrent saves
    write_lock: Mutex<()>,
}

impl<S: BlobStore> PersistentCache<S> {
    /// Create an adapter; access stays denied until `sync_status` reports `Allowed`
    pub fn new(store: S, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            permission: RwLock::new(None),
            write_lock: Mutex::new(()),
        }
    }

    /// Create an adapter and run the initial permission check
    pub async fn connect(store: S, storage_key: impl Into<String>) -> Self {
        let cache = Self::new(store, storage_key);
        cache.sync_status().await;
        cache
    }

    /// Refresh the cached permission flag from the store
    ///
    /// A failing status call is logged and leaves the previous flag untouched.
    pub async fn sync_status(&self) -> Option<PermissionState> {
        match self.store.status().await {
            Ok(state) => {
                *self.permission.write() = Some(state);
                info!(state = ?state, "Persistent storage status synced");
                Some(state)
            }
            Err(e) => {
                error!("Could not get persistent storage status: {}", e);
                *self.permission.read()
            }
        }
    }

    pub fn permission(&self) -> Option<PermissionState> {
        *self.permission.read()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn is_allowed(&self) -> bool {
        self.permission().is_some_and(|state| state.is_allowed())
    }

    /// Read and decode the stored object; `Ok(None)` when nothing is stored
    async fn read_locations(&self) -> Result<Option<LocationObject>> {
        match self.store.get(&self.storage_key).await? {
            Some(blob) => decode_blob(&blob),
            None => Ok(None),
        }
    }
}

/// Parse the blob text: `null` means empty, anything but an object is malformed
fn decode_blob(blob: &str) -> Result<Option<LocationObject>> {
    let value: Value = serde_json::from_str(blob)
        .map_err(|e| GeocacheError::malformed(format!("Stored coordinates are not JSON: {}", e)))?;

    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(GeocacheError::malformed(format!(
            "Stored coordinates must be a JSON object, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode one stored entry; null or mis-shaped entries are skipped
fn decode_location(value: &Value) -> Option<Coordinate> {
    StoredLocation::deserialize(value).ok().map(Coordinate::from)
}

/// JSON has no NaN or infinity; such values would be written as `null`
fn is_encodable(coordinate: &Coordinate) -> bool {
    coordinate.latitude.is_finite() && coordinate.longitude.is_finite()
}

fn encode_location(coordinate: &Coordinate) -> Value {
    let stored = StoredLocation::from(*coordinate);
    serde_json::json!({ "lat": stored.lat, "lon": stored.lon })
}

#[async_trait]
impl<S: BlobStore> CacheManager for PersistentCache<S> {
    /// Empty `keys` returns every stored entry
    async fn load_coordinates(&self, keys: &[LocationKey]) -> Result<CoordinateDictionary> {
        debug!("Loading coordinates from persistent storage");

        if !self.is_allowed() {
            warn!("Persistent storage is not allowed");
            return Ok(CoordinateDictionary::new());
        }

        let Some(stored) = self
            .read_locations()
            .await
            .log_and_continue("persistent coordinate load")
            .flatten()
        else {
            debug!("Did not get any data from persistent storage");
            return Ok(CoordinateDictionary::new());
        };

        let result: CoordinateDictionary = if keys.is_empty() {
            stored
                .iter()
                .filter_map(|(key, value)| decode_location(value).map(|c| (key.clone(), c)))
                .collect()
        } else {
            keys.iter()
                .filter_map(|key| {
                    stored
                        .get(key)
                        .and_then(decode_location)
                        .map(|c| (key.clone(), c))
                })
                .collect()
        };

        debug!(
            requested = keys.len(),
            found = result.len(),
            "Loaded coordinates from persistent storage"
        );
        Ok(result)
    }

    async fn save_coordinates(&self, coordinates: &CoordinateDictionary) -> Result<SaveStatus> {
        if !self.is_allowed() {
            warn!("Persistent storage is not allowed");
            return Ok(SaveStatus::Discarded(DiscardReason::PermissionDenied));
        }

        if coordinates.is_empty() {
            return Ok(SaveStatus::Stored(0));
        }

        let incoming: LocationObject = coordinates
            .iter()
            .filter(|(key, coordinate)| {
                let encodable = is_encodable(coordinate);
                if !encodable {
                    warn!(key = %key, "Skipping non-finite coordinate");
                }
                encodable
            })
            .map(|(key, coordinate)| (key.clone(), encode_location(coordinate)))
            .collect();

        if incoming.is_empty() {
            return Ok(SaveStatus::Stored(0));
        }
        let stored = incoming.len();

        debug!(count = stored, "Saving coordinates to persistent storage");

        let _guard = self.write_lock.lock().await;

        let merged = match self.read_locations().await {
            Ok(Some(mut existing)) => {
                existing.extend(incoming);
                existing
            }
            Ok(None) => incoming,
            Err(e) => {
                warn!(
                    "Persistent storage is empty or unreadable ({}), writing coordinates standalone",
                    e
                );
                incoming
            }
        };

        let serialized = match serde_json::to_string(&Value::Object(merged)) {
            Ok(text) => text,
            Err(e) => {
                error!("Could not serialize coordinates for persistent storage: {}", e);
                return Ok(SaveStatus::Discarded(DiscardReason::StoreUnavailable));
            }
        };

        match self.store.set(&self.storage_key, &serialized).await {
            Ok(()) => {
                info!(
                    count = stored,
                    "Successfully saved coordinates to persistent storage"
                );
                Ok(SaveStatus::Stored(stored))
            }
            Err(e) => {
                error!("Could not save coordinates to persistent storage: {}", e);
                Ok(SaveStatus::Discarded(DiscardReason::StoreUnavailable))
            }
        }
    }

    fn name(&self) -> &'static str {
        "persistent"
    }
}

impl<S> std::fmt::Debug for PersistentCache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentCache")
            .field("storage_key", &self.storage_key)
            .field("permission", &*self.permission.read())
            .finish_non_exhaustive()
    }
}
