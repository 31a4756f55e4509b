//! Decoded rule cache
//!
//! The host resends the same rule document with every request for a pool, so
//! decoded rule sets are shared by JSON text. Failed decodes are not cached.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::error::MatchError;
use crate::matchmaker::GameRules;

pub struct RuleCache {
    entries: DashMap<String, Arc<GameRules>>,
    capacity: usize,
}

impl RuleCache {
    /// `capacity == 0` disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity,
        }
    }

    pub fn get_or_decode<F>(&self, json: &str, decode: F) -> Result<Arc<GameRules>, MatchError>
    where
        F: FnOnce(&str) -> Result<GameRules, MatchError>,
    {
        if let Some(rules) = self.entries.get(json) {
            debug!("rule cache hit");
            return Ok(Arc::clone(rules.value()));
        }

        let rules = Arc::new(decode(json)?);
        if self.capacity == 0 {
            return Ok(rules);
        }

        if self.entries.len() >= self.capacity {
            debug!(capacity = self.capacity, "rule cache full, clearing");
            self.entries.clear();
        }
        self.entries.insert(json.to_string(), Arc::clone(&rules));
        Ok(rules)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
