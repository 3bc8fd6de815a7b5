//! Tiered coordinate lookup
//!
//! A [`CoordinateResolver`] walks an ordered list of cache tiers (fastest
//! first), asking each one only for the keys still missing, and writes what a
//! slower tier found back into the faster ones.


use crate::core::traits::CacheManager;
use crate::core::types::{CoordinateDictionary, LocationKey};
use crate::utils::error::{GeocacheError, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Hits served by one tier during a resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierHits {
    pub tier: &'static str,
    pub hits: usize,
}

/// Outcome of [`CoordinateResolver::resolve_with_report`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveReport {
    pub coordinates: CoordinateDictionary,
    /// One entry per tier that was consulted, in order
    pub tiers: Vec<TierHits>,
    /// Requested keys no tier could answer, in request order
    pub unresolved: Vec<LocationKey>,
}

impl ResolveReport {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Ordered set of cache tiers queried fastest first
#[derive(Clone, Default)]
pub struct CoordinateResolver {
    tiers: Vec<Arc<dyn CacheManager>>,
}

impl CoordinateResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tier after the existing ones
    pub fn with_tier(mut self, tier: Arc<dyn CacheManager>) -> Self {
        self.tiers.push(tier);
        self
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Resolve as many keys as possible; unresolved keys are absent
    pub async fn resolve(&self, keys: &[LocationKey]) -> Result<CoordinateDictionary> {
        Ok(self.resolve_with_report(keys).await?.coordinates)
    }

    pub async fn resolve_with_report(&self, keys: &[LocationKey]) -> Result<ResolveReport> {
        if keys.is_empty() {
            return Err(GeocacheError::empty_input("No locations to be resolved"));
        }

        let mut seen = HashSet::with_capacity(keys.len());
        let mut missing: Vec<LocationKey> = keys
            .iter()
            .filter(|key| seen.insert(key.as_str()))
            .cloned()
            .collect();

        let mut report = ResolveReport::default();

        for (index, tier) in self.tiers.iter().enumerate() {
            if missing.is_empty() {
                break;
            }

            let found = match tier.load_coordinates(&missing).await {
                Ok(found) => found,
                Err(e) => {
                    warn!(tier = tier.name(), "Tier lookup failed, treating as miss: {}", e);
                    CoordinateDictionary::new()
                }
            };

            // Keep only answers to what was asked
            let asked: HashSet<&str> = missing.iter().map(String::as_str).collect();
            let found: CoordinateDictionary = found
                .into_iter()
                .filter(|(key, _)| asked.contains(key.as_str()))
                .collect();

            debug!(
                tier = tier.name(),
                requested = missing.len(),
                found = found.len(),
                "Resolved coordinates from tier"
            );
            report.tiers.push(TierHits {
                tier: tier.name(),
                hits: found.len(),
            });

            if found.is_empty() {
                continue;
            }

            missing.retain(|key| !found.contains_key(key));
            self.write_back(&self.tiers[..index], &found).await;
            report.coordinates.extend(found);
        }

        report.unresolved = missing;
        Ok(report)
    }

    async fn write_back(&self, faster: &[Arc<dyn CacheManager>], found: &CoordinateDictionary) {
        for tier in faster {
            match tier.save_coordinates(found).await {
                Ok(status) => debug!(tier = tier.name(), status = ?status, "Wrote back coordinates"),
                Err(e) => warn!(tier = tier.name(), "Write-back failed: {}", e),
            }
        }
    }
}

impl std::fmt::Debug for CoordinateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinateResolver")
            .field("tiers", &self.tier_names())
            .finish()
    }
}
