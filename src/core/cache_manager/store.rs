//! Hit-count biased coordinate store
//!
//! Single-owner, synchronous state behind [`super::MemoryCache`].

use super::types::{EvictionKind, MemoryCacheStats, Slot, SlotState};
use crate::config::{CacheConfig, Validate};
use crate::core::types::{Coordinate, CoordinateDictionary, LocationKey};
use crate::utils::error::{GeocacheError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Bounded coordinate map with deferred compaction
#[derive(Debug)]
pub struct CoordinateStore {
    slots: HashMap<LocationKey, Slot>,
    /// Number of `SlotState::Live` slots
    live_count: usize,
    next_seq: u64,
    config: CacheConfig,
    hits: u64,
    misses: u64,
    evicted: u64,
    sweeps: u64,
    compactions: u64,
}

impl CoordinateStore {
    /// Create an empty store; rejects capacities that cannot hold the size bound
    pub fn new(config: CacheConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GeocacheError::Config(format!("Invalid cache capacity: {}", e)))?;

        Ok(Self {
            slots: HashMap::new(),
            live_count: 0,
            next_seq: 0,
            config,
            hits: 0,
            misses: 0,
            evicted: 0,
            sweeps: 0,
            compactions: 0,
        })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Live entry count
    pub fn len(&self) -> usize {
        self.live_count
    }

    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Live plus tombstoned slot count
    pub fn physical_len(&self) -> usize {
        self.slots.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.get(key).is_some_and(Slot::is_live)
    }

    /// Current hit count of a live key, without counting a read
    pub fn hit_count(&self, key: &str) -> Option<u64> {
        match self.slots.get(key)?.state {
            SlotState::Live(entry) => Some(entry.hit_count),
            SlotState::Tombstoned => None,
        }
    }

    /// Read one key, counting a hit when it is live
    pub fn get(&mut self, key: &str) -> Option<Coordinate> {
        match self.slots.get_mut(key).map(|slot| &mut slot.state) {
            Some(SlotState::Live(entry)) => {
                self.hits += 1;
                Some(entry.mark_accessed())
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Read a set of keys; absent or tombstoned keys are omitted
    pub fn get_many(&mut self, keys: &[LocationKey]) -> CoordinateDictionary {
        let mut found = CoordinateDictionary::with_capacity(keys.len());
        for key in keys {
            if found.contains_key(key) {
                continue;
            }
            if let Some(coordinate) = self.get(key) {
                found.insert(key.clone(), coordinate);
            }
        }
        found
    }

    /// Every live entry, counting a hit on each
    pub fn snapshot(&mut self) -> CoordinateDictionary {
        let mut all = CoordinateDictionary::with_capacity(self.live_count);
        for (key, slot) in self.slots.iter_mut() {
            if let SlotState::Live(entry) = &mut slot.state {
                all.insert(key.clone(), entry.mark_accessed());
            }
        }
        self.hits += all.len() as u64;
        all
    }

    /// Insert if absent. Returns `false` when the key is already live.
    pub fn insert(&mut self, key: &str, coordinate: Coordinate) -> bool {
        if self.contains_key(key) {
            return false;
        }

        if self.live_count >= self.config.max_cache_count() {
            self.evict();
        }

        match self.slots.get_mut(key) {
            // A tombstoned slot that survived compaction is revived in place
            Some(slot) => slot.state = SlotState::Live(super::CacheEntry::new(coordinate)),
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.slots.insert(key.to_owned(), Slot::live(seq, coordinate));
            }
        }
        self.live_count += 1;
        true
    }

    /// Evict everything ranked below `max_cache_size`
    ///
    /// Ranking is hit count descending, then slot sequence ascending.
    pub(crate) fn evict(&mut self) -> EvictionKind {
        let max_cache_size = self.config.max_cache_size;
        let physical_size = self.slots.len();

        let mut ranked: Vec<(&LocationKey, u64, u64)> = self
            .slots
            .iter()
            .map(|(key, slot)| (key, slot.hit_count(), slot.seq))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        let kind = if physical_size < self.config.max_cache_count().saturating_mul(2) {
            let doomed: Vec<LocationKey> = ranked
                .iter()
                .skip(max_cache_size)
                .map(|(key, _, _)| (*key).clone())
                .collect();

            let mut removed = 0u64;
            for key in &doomed {
                if let Some(slot) = self.slots.get_mut(key) {
                    if slot.is_live() {
                        slot.state = SlotState::Tombstoned;
                        removed += 1;
                    }
                }
            }
            self.evicted += removed;
            self.sweeps += 1;
            EvictionKind::LazySweep
        } else {
            let survivors: Vec<LocationKey> = ranked
                .iter()
                .take(max_cache_size)
                .map(|(key, _, _)| (*key).clone())
                .collect();

            let mut fresh = HashMap::with_capacity(self.config.max_cache_count());
            for key in survivors {
                if let Some(slot) = self.slots.remove(&key) {
                    fresh.insert(key, slot);
                }
            }
            let survivors_live = fresh.values().filter(|slot| slot.is_live()).count();
            self.evicted += self.live_count.saturating_sub(survivors_live) as u64;
            self.slots = fresh;
            self.compactions += 1;
            EvictionKind::Compaction
        };

        debug!(
            kind = ?kind,
            physical_before = physical_size,
            physical_after = self.slots.len(),
            "Evicted low hit-count coordinates"
        );

        self.live_count = max_cache_size;
        kind
    }

    /// Drop every slot and reset counters
    pub fn clear(&mut self) {
        self.slots.clear();
        self.live_count = 0;
        self.next_seq = 0;
        self.hits = 0;
        self.misses = 0;
        self.evicted = 0;
        self.sweeps = 0;
        self.compactions = 0;
    }

    pub fn stats(&self) -> MemoryCacheStats {
        MemoryCacheStats {
            live_entries: self.live_count,
            physical_slots: self.slots.len(),
            hits: self.hits,
            misses: self.misses,
            evicted: self.evicted,
            sweeps: self.sweeps,
            compactions: self.compactions,
        }
    }
}
