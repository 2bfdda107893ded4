use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capabilities::TimerId;
use crate::catalog;
use crate::favorites::PersistentFavoritesStore;
use crate::notifications::NotificationStore;
use crate::overlay::OverlayController;
use crate::router::{ScreenRouter, Transition};
use crate::saved_places::SavedPlaces;
use crate::search::SearchState;
use crate::settings::Settings;
use crate::ShellConfig;

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

typed_id!(EntityId);
typed_id!(NotificationId);
typed_id!(PlaceId);
typed_id!(SearchResultId);

/// A favorite is the id of a map entity; the durable slot stores it as a bare string.
pub type FavoriteId = EntityId;

// --- Screens ---

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    #[default]
    Map,
    Search,
    Favorites,
    Notifications,
    Settings,
    History,
    Routes,
    Help,
    About,
}

impl ScreenId {
    /// Drawer order.
    pub const ALL: [ScreenId; 9] = [
        ScreenId::Map,
        ScreenId::Search,
        ScreenId::Favorites,
        ScreenId::History,
        ScreenId::Routes,
        ScreenId::Notifications,
        ScreenId::Settings,
        ScreenId::Help,
        ScreenId::About,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Search => "search",
            Self::Favorites => "favorites",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
            Self::History => "history",
            Self::Routes => "routes",
            Self::Help => "help",
            Self::About => "about",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Map => "Live Map",
            Self::Search => "Search & Plan",
            Self::Favorites => "Favorites",
            Self::Notifications => "Notifications",
            Self::Settings => "Settings",
            Self::History => "Trip History",
            Self::Routes => "All Routes",
            Self::Help => "Help & Support",
            Self::About => "About",
        }
    }

    /// Whether the shell has a dedicated view for this screen.
    #[must_use]
    pub const fn has_view(self) -> bool {
        matches!(
            self,
            Self::Map | Self::Search | Self::Favorites | Self::Notifications | Self::Settings
        )
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.as_str() == s)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Map entities ---

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: EntityId,
    pub name: String,
    pub position: LatLon,
    pub eta: String,
    pub distance: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Bus {
    pub id: EntityId,
    pub name: String,
    pub position: LatLon,
    pub eta: String,
    pub distance: String,
    pub route: String,
    pub next_stop: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Stop,
    Bus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapEntity {
    Stop(Stop),
    Bus(Bus),
}

impl MapEntity {
    pub fn id(&self) -> &EntityId {
        match self {
            Self::Stop(stop) => &stop.id,
            Self::Bus(bus) => &bus.id,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Stop(_) => EntityKind::Stop,
            Self::Bus(_) => EntityKind::Bus,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Stop(stop) => &stop.name,
            Self::Bus(bus) => &bus.name,
        }
    }

    pub fn eta(&self) -> &str {
        match self {
            Self::Stop(stop) => &stop.eta,
            Self::Bus(bus) => &bus.eta,
        }
    }

    pub fn distance(&self) -> &str {
        match self {
            Self::Stop(stop) => &stop.distance,
            Self::Bus(bus) => &bus.distance,
        }
    }

    pub fn route(&self) -> Option<&str> {
        match self {
            Self::Stop(_) => None,
            Self::Bus(bus) => Some(&bus.route),
        }
    }

    pub fn next_stop(&self) -> Option<&str> {
        match self {
            Self::Stop(_) => None,
            Self::Bus(bus) => Some(&bus.next_stop),
        }
    }

    pub fn position(&self) -> LatLon {
        match self {
            Self::Stop(stop) => stop.position,
            Self::Bus(bus) => bus.position,
        }
    }

    pub fn reference(&self) -> EntityRef {
        EntityRef {
            kind: self.kind(),
            id: self.id().clone(),
        }
    }
}

/// What the shell sends back when a marker is tapped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: EntityId,
}

impl EntityRef {
    pub fn stop(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Stop,
            id: EntityId::new(id),
        }
    }

    pub fn bus(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Bus,
            id: EntityId::new(id),
        }
    }
}

/// Seeded stops and buses shown on the map. Ids are unique per variant and stable.
#[derive(Clone, Debug, PartialEq)]
pub struct MapData {
    pub stops: Vec<Stop>,
    pub buses: Vec<Bus>,
}

impl Default for MapData {
    fn default() -> Self {
        Self {
            stops: catalog::stops(),
            buses: catalog::buses(),
        }
    }
}

impl MapData {
    pub fn resolve(&self, entity: &EntityRef) -> Option<MapEntity> {
        match entity.kind {
            EntityKind::Stop => self
                .stops
                .iter()
                .find(|stop| stop.id == entity.id)
                .cloned()
                .map(MapEntity::Stop),
            EntityKind::Bus => self
                .buses
                .iter()
                .find(|bus| bus.id == entity.id)
                .cloned()
                .map(MapEntity::Bus),
        }
    }

    /// Stops first, then buses, each in seed order.
    pub fn entities(&self) -> impl Iterator<Item = MapEntity> + '_ {
        self.stops
            .iter()
            .cloned()
            .map(MapEntity::Stop)
            .chain(self.buses.iter().cloned().map(MapEntity::Bus))
    }
}

// --- Boot sequence ---

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BootPhase {
    #[default]
    Booting,
    Splash,
    Active,
}

impl BootPhase {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub config: ShellConfig,
    pub boot: BootPhase,
    /// Pending splash dwell timer; `None` once it fired or was cancelled.
    pub splash_timer: Option<TimerId>,
    pub next_timer_id: u64,

    pub router: ScreenRouter,
    pub overlay: OverlayController,

    pub map: MapData,
    pub favorites: PersistentFavoritesStore,
    pub notifications: NotificationStore,
    pub settings: Settings,
    pub search: SearchState,
    pub saved_places: SavedPlaces,
}

impl Model {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn allocate_timer_id(&mut self) -> TimerId {
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        TimerId(self.next_timer_id)
    }

    /// Every navigation closes the drawer. The info panel belongs to the
    /// screen it was opened on, so a real screen change drops the selection.
    pub fn navigate(&mut self, target: ScreenId) -> Transition {
        let transition = self.router.navigate(target);
        self.settle_overlays(transition)
    }

    /// Back always lands on the default screen, with the same overlay rules
    /// as [`Self::navigate`].
    pub fn navigate_back(&mut self) -> Transition {
        let transition = self.router.back_to_default();
        self.settle_overlays(transition)
    }

    fn settle_overlays(&mut self, transition: Transition) -> Transition {
        self.overlay.close_drawer();
        if transition.changed_screen() {
            self.overlay.clear_selection();
        }
        transition
    }

    /// The entity behind the info panel, if it is open.
    pub fn selected_entity(&self) -> Option<MapEntity> {
        self.overlay
            .selected()
            .and_then(|entity| self.map.resolve(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_ids_round_trip_through_their_names() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::parse(screen.as_str()), Some(screen));
        }
        assert_eq!(ScreenId::parse("nowhere"), None);
    }

    #[test]
    fn only_five_screens_have_views() {
        let with_view: Vec<_> = ScreenId::ALL.into_iter().filter(|s| s.has_view()).collect();
        assert_eq!(with_view.len(), 5);
        assert!(!ScreenId::History.has_view());
        assert!(!ScreenId::About.has_view());
    }

    #[test]
    fn screen_id_serializes_snake_case() {
        let json = serde_json::to_string(&ScreenId::Notifications).unwrap();
        assert_eq!(json, "\"notifications\"");
    }

    #[test]
    fn bus_only_fields_are_absent_on_stops() {
        let data = MapData::default();
        let stop = data.resolve(&EntityRef::stop("1")).unwrap();
        let bus = data.resolve(&EntityRef::bus("bus-1")).unwrap();

        assert_eq!(stop.route(), None);
        assert_eq!(stop.next_stop(), None);
        assert_eq!(bus.route(), Some("Route A"));
        assert_eq!(bus.next_stop(), Some("Student Center"));
    }

    #[test]
    fn resolve_respects_the_variant() {
        let data = MapData::default();
        assert!(data.resolve(&EntityRef::bus("1")).is_none());
        assert!(data.resolve(&EntityRef::stop("bus-1")).is_none());
    }

    #[test]
    fn entity_ids_are_unique_within_variant() {
        let data = MapData::default();
        let mut stop_ids: Vec<_> = data.stops.iter().map(|s| s.id.clone()).collect();
        stop_ids.sort();
        stop_ids.dedup();
        assert_eq!(stop_ids.len(), data.stops.len());

        let mut bus_ids: Vec<_> = data.buses.iter().map(|b| b.id.clone()).collect();
        bus_ids.sort();
        bus_ids.dedup();
        assert_eq!(bus_ids.len(), data.buses.len());
    }

    #[test]
    fn map_entity_is_tagged_by_kind() {
        let data = MapData::default();
        let bus = data.resolve(&EntityRef::bus("bus-2")).unwrap();
        let json = serde_json::to_value(&bus).unwrap();
        assert_eq!(json["kind"], "bus");
        assert_eq!(json["route"], "Route B");
    }

    #[test]
    fn navigation_always_closes_the_drawer() {
        for screen in ScreenId::ALL {
            let mut model = Model::default();
            model.overlay.open_drawer();
            model.navigate(screen);
            assert!(!model.overlay.drawer_open());
            assert_eq!(model.router.current(), screen);
        }
    }

    #[test]
    fn selection_survives_only_same_screen_navigation() {
        let mut model = Model::default();
        model.overlay.select_entity(EntityRef::stop("1"));
        model.navigate(ScreenId::Map);
        assert!(model.selected_entity().is_some());

        model.navigate(ScreenId::Search);
        assert!(model.selected_entity().is_none());
    }

    #[test]
    fn back_closes_the_drawer_and_drops_a_foreign_selection() {
        let mut model = Model::default();
        model.navigate(ScreenId::Favorites);
        model.overlay.select_entity(EntityRef::bus("bus-1"));
        model.overlay.open_drawer();

        let transition = model.navigate_back();
        assert!(transition.changed_screen());
        assert_eq!(model.router.current(), ScreenId::Map);
        assert!(!model.overlay.drawer_open());
        assert!(model.overlay.selected().is_none());
    }

    #[test]
    fn back_on_the_map_keeps_the_selection() {
        let mut model = Model::default();
        model.overlay.select_entity(EntityRef::stop("2"));
        let transition = model.navigate_back();
        assert!(!transition.changed_screen());
        assert!(model.selected_entity().is_some());
    }

    #[test]
    fn timer_ids_are_never_reused() {
        let mut model = Model::default();
        let first = model.allocate_timer_id();
        let second = model.allocate_timer_id();
        assert_ne!(first, second);
    }
}
