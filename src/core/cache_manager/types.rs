//! Memory cache type definitions

use crate::core::types::Coordinate;

/// Cached coordinate with its read counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheEntry {
    pub coordinate: Coordinate,
    /// Starts at 1 on insert, +1 per read, never decreases
    pub hit_count: u64,
}

impl CacheEntry {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            hit_count: 1,
        }
    }

    /// Count a read and return the coordinate
    pub fn mark_accessed(&mut self) -> Coordinate {
        self.hit_count = self.hit_count.saturating_add(1);
        self.coordinate
    }
}

/// Logical state of a physical slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotState {
    Live(CacheEntry),
    /// Evicted but not yet reclaimed by compaction
    Tombstoned,
}

/// One physical slot in the backing map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Insertion sequence of the slot; breaks hit-count ties (older first)
    pub seq: u64,
    pub state: SlotState,
}

impl Slot {
    pub fn live(seq: u64, coordinate: Coordinate) -> Self {
        Self {
            seq,
            state: SlotState::Live(CacheEntry::new(coordinate)),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.state, SlotState::Live(_))
    }

    /// Ranking weight: tombstones rank as zero
    pub fn hit_count(&self) -> u64 {
        match self.state {
            SlotState::Live(entry) => entry.hit_count,
            SlotState::Tombstoned => 0,
        }
    }
}

/// Which eviction strategy a pass used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionKind {
    /// Losers were tombstoned in place
    LazySweep,
    /// The map was rebuilt from the top `max_cache_size` slots
    Compaction,
}

/// Memory cache statistics snapshot
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryCacheStats {
    /// Non-tombstoned entries
    pub live_entries: usize,
    /// Live plus tombstoned slots
    pub physical_slots: usize,
    /// Keys found live on read
    pub hits: u64,
    /// Keys requested but absent or tombstoned
    pub misses: u64,
    /// Live entries removed by eviction
    pub evicted: u64,
    /// Eviction passes that tombstoned in place
    pub sweeps: u64,
    /// Eviction passes that rebuilt the map
    pub compactions: u64,
}

impl MemoryCacheStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
