//! Favorited map entities, persisted as a JSON array of id strings in a
//! single durable slot.
//!
//! The slot is read once at boot and rewritten in full after every toggle.
//! Toggles that arrive before the boot read are remembered and replayed on
//! top of the slot, so the first write always carries the saved ids.
//! A missing or unreadable slot degrades to "no favorites"; nothing here
//! fails past [`PersistentFavoritesStore::load`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::model::FavoriteId;

pub type FavoriteSet = BTreeSet<FavoriteId>;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum FavoritesError {
    #[error("favorites slot is not a JSON array of strings: {reason}")]
    Corrupt { reason: String },

    #[error("favorites could not be encoded: {reason}")]
    Encode { reason: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Hydration {
    #[default]
    Pending,
    Loaded,
}

/// What a boot read did to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hydrated {
    /// The slot contents became the set.
    Restored,
    /// Earlier toggles were replayed on top of the slot. The merged set has
    /// not been written yet.
    Merged,
    /// The slot was already applied; this read changed nothing.
    Ignored,
}

impl Hydrated {
    pub fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn needs_write(self) -> bool {
        matches!(self, Self::Merged)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistentFavoritesStore {
    ids: FavoriteSet,
    hydration: Hydration,
    /// Ids toggled before the boot read, in order.
    early_toggles: Vec<FavoriteId>,
}

impl PersistentFavoritesStore {
    pub fn decode(bytes: &[u8]) -> Result<FavoriteSet, FavoritesError> {
        let ids: Vec<FavoriteId> =
            serde_json::from_slice(bytes).map_err(|e| FavoritesError::Corrupt {
                reason: e.to_string(),
            })?;
        Ok(ids.into_iter().collect())
    }

    pub fn encode(ids: &FavoriteSet) -> Result<Vec<u8>, FavoritesError> {
        serde_json::to_vec(ids).map_err(|e| FavoritesError::Encode {
            reason: e.to_string(),
        })
    }

    /// Reads the slot contents. Absent or corrupt state yields an empty set.
    pub fn load(slot: Option<&[u8]>) -> FavoriteSet {
        let Some(bytes) = slot else {
            return FavoriteSet::new();
        };
        match Self::decode(bytes) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "discarding unreadable favorites slot");
                FavoriteSet::new()
            }
        }
    }

    /// `ids` with `id` added if absent and removed if present.
    pub fn toggled(ids: &FavoriteSet, id: &FavoriteId) -> FavoriteSet {
        let mut next = ids.clone();
        if !next.remove(id) {
            next.insert(id.clone());
        }
        next
    }

    /// Applies the boot read. Toggles made while the read was pending are
    /// replayed on the loaded set. Only the first read counts.
    #[instrument(skip(self, slot), fields(present = slot.is_some()))]
    pub fn hydrate(&mut self, slot: Option<&[u8]>) -> Hydrated {
        if self.is_loaded() {
            warn!("favorites slot already applied, ignoring repeat read");
            return Hydrated::Ignored;
        }
        self.hydration = Hydration::Loaded;

        let early = std::mem::take(&mut self.early_toggles);
        let loaded = Self::load(slot);
        self.ids = early
            .iter()
            .fold(loaded, |ids, id| Self::toggled(&ids, id));

        if early.is_empty() {
            info!(count = self.ids.len(), "favorites restored");
            Hydrated::Restored
        } else {
            info!(
                count = self.ids.len(),
                replayed = early.len(),
                "favorites restored, replayed toggles made before the slot was read"
            );
            Hydrated::Merged
        }
    }

    /// Toggles membership and returns the new set. Before the boot read the
    /// toggle is also remembered for [`Self::hydrate`].
    #[instrument(skip(self, id), fields(id = %id))]
    pub fn toggle(&mut self, id: &FavoriteId) -> &FavoriteSet {
        self.ids = Self::toggled(&self.ids, id);
        if !self.is_loaded() {
            self.early_toggles.push(id.clone());
        }
        &self.ids
    }

    /// Serialized form of the whole set, written on every change.
    pub fn save(&self) -> Result<Vec<u8>, FavoritesError> {
        Self::encode(&self.ids)
    }

    pub fn contains(&self, id: &FavoriteId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &FavoriteSet {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.hydration == Hydration::Loaded
    }
}
