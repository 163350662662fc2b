//! RecommendationLedger: at most one recommendation per event.
//!
//! All state sits behind one mutex. Every mutator holds it for the whole
//! update, so the event index, the id index, and the active set never
//! disagree.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use chainwatch_core::errors::LedgerError;
use chainwatch_core::models::{Priority, Recommendation};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Default)]
struct LedgerState {
    by_event: HashMap<String, Recommendation>,
    /// Recommendation id → event id.
    event_by_rec: HashMap<String, String>,
    /// Recommendation ids not yet implemented.
    active: HashSet<String>,
}

/// Summary counts for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total: usize,
    pub active: usize,
    /// Mean confidence over all held recommendations; 0.0 when empty.
    pub average_confidence: f64,
}

/// Thread-safe store of the current recommendation per event.
#[derive(Default)]
pub struct RecommendationLedger {
    state: Mutex<LedgerState>,
}

impl RecommendationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, LedgerState>, LedgerError> {
        self.state.lock().map_err(|e| LedgerError::LockPoisoned {
            reason: e.to_string(),
        })
    }

    /// Insert `rec`, replacing any recommendation for the same event.
    /// Returns the superseded one.
    ///
    /// Fails with `DuplicateId` if `rec.id` is already held for another
    /// event; the ledger is left unchanged.
    pub fn upsert(&self, rec: Recommendation) -> Result<Option<Recommendation>, LedgerError> {
        let mut state = self.state()?;
        let rec_id = rec.id.clone();
        let event_id = rec.event_id.clone();

        if let Some(held_for) = state.event_by_rec.get(&rec_id) {
            if *held_for != event_id {
                return Err(LedgerError::DuplicateId {
                    recommendation_id: rec_id,
                    held_for: held_for.clone(),
                    event_id,
                });
            }
        }

        let superseded = state.by_event.insert(event_id.clone(), rec);
        if let Some(old) = &superseded {
            state.event_by_rec.remove(&old.id);
            state.active.remove(&old.id);
            debug!(event_id = %event_id, superseded = %old.id, "recommendation replaced");
        }
        state.event_by_rec.insert(rec_id.clone(), event_id);
        state.active.insert(rec_id);
        Ok(superseded)
    }

    /// Remove a recommendation entirely.
    pub fn dismiss(&self, recommendation_id: &str) -> Result<Recommendation, LedgerError> {
        let mut state = self.state()?;
        let event_id = state
            .event_by_rec
            .remove(recommendation_id)
            .ok_or_else(|| not_found(recommendation_id))?;
        state.active.remove(recommendation_id);
        state
            .by_event
            .remove(&event_id)
            .ok_or_else(|| not_found(recommendation_id))
    }

    /// Mark a recommendation as carried out. It stays held for its event
    /// with priority lowered to low, and leaves the active set.
    pub fn implement(&self, recommendation_id: &str) -> Result<Recommendation, LedgerError> {
        let mut state = self.state()?;
        let event_id = state
            .event_by_rec
            .get(recommendation_id)
            .cloned()
            .ok_or_else(|| not_found(recommendation_id))?;
        let rec = state
            .by_event
            .get_mut(&event_id)
            .ok_or_else(|| not_found(recommendation_id))?;
        rec.priority = Priority::Low;
        let implemented = rec.clone();
        state.active.remove(recommendation_id);
        Ok(implemented)
    }

    pub fn clear(&self) -> Result<(), LedgerError> {
        let mut state = self.state()?;
        state.by_event.clear();
        state.event_by_rec.clear();
        state.active.clear();
        Ok(())
    }

    pub fn get_for_event(&self, event_id: &str) -> Result<Option<Recommendation>, LedgerError> {
        Ok(self.state()?.by_event.get(event_id).cloned())
    }

    pub fn contains_event(&self, event_id: &str) -> Result<bool, LedgerError> {
        Ok(self.state()?.by_event.contains_key(event_id))
    }

    /// All held recommendations, highest confidence first, newest first on ties.
    pub fn list(&self) -> Result<Vec<Recommendation>, LedgerError> {
        let mut all: Vec<Recommendation> = self.state()?.by_event.values().cloned().collect();
        all.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        Ok(all)
    }

    /// Ids of recommendations not yet implemented, sorted.
    pub fn active_ids(&self) -> Result<Vec<String>, LedgerError> {
        let mut ids: Vec<String> = self.state()?.active.iter().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    pub fn stats(&self) -> Result<LedgerStats, LedgerError> {
        let state = self.state()?;
        let total = state.by_event.len();
        let average_confidence = if total == 0 {
            0.0
        } else {
            state.by_event.values().map(|r| r.confidence).sum::<f64>() / total as f64
        };
        Ok(LedgerStats {
            total,
            active: state.active.len(),
            average_confidence,
        })
    }

    pub fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.state()?.by_event.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.state()?.by_event.is_empty())
    }
}

fn not_found(recommendation_id: &str) -> LedgerError {
    LedgerError::NotFound {
        recommendation_id: recommendation_id.to_string(),
    }
}
