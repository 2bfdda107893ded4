use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::PlaceId;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Stop,
    Route,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SavedPlace {
    pub id: PlaceId,
    pub kind: PlaceKind,
    pub name: String,
    pub subtitle: String,
    pub eta: Option<String>,
    pub distance: String,
    pub routes: Vec<String>,
    pub last_used: String,
    pub alerts: bool,
}

/// The favorites screen list. Order is seed order; missing ids are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedPlaces {
    places: Vec<SavedPlace>,
}

impl Default for SavedPlaces {
    fn default() -> Self {
        Self::new(catalog::saved_places())
    }
}

impl SavedPlaces {
    pub fn new(places: Vec<SavedPlace>) -> Self {
        Self { places }
    }

    pub fn places(&self) -> &[SavedPlace] {
        &self.places
    }

    pub fn get(&self, id: &PlaceId) -> Option<&SavedPlace> {
        self.places.iter().find(|place| &place.id == id)
    }

    pub fn remove(&mut self, id: &PlaceId) -> bool {
        let before = self.places.len();
        self.places.retain(|place| &place.id != id);
        self.places.len() != before
    }

    /// Returns the new flag, or `None` if the place is unknown.
    pub fn toggle_alerts(&mut self, id: &PlaceId) -> Option<bool> {
        let place = self.places.iter_mut().find(|place| &place.id == id)?;
        place.alerts = !place.alerts;
        Some(place.alerts)
    }
}
