//! Render-ready projection of the [`Model`]. Everything here is derived on
//! every call; nothing is cached between renders.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::{BootPhase, EntityRef, MapEntity, Model, ScreenId};
use crate::notifications::{Notification, Tone};
use crate::saved_places::SavedPlace;
use crate::search::{Destination, SearchResult};
use crate::settings::{SettingKey, SECTIONS};
use crate::{FONT_SIZE_RANGE_PX, REFRESH_INTERVAL_RANGE_S};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarkerView {
    pub entity: EntityRef,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub is_favorite: bool,
    pub is_selected: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntityView {
    pub entity: EntityRef,
    pub name: String,
    pub eta: String,
    pub distance: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NotificationView {
    #[serde(flatten)]
    pub record: Notification,
    pub tone: Tone,
}

impl From<&Notification> for NotificationView {
    fn from(record: &Notification) -> Self {
        Self {
            tone: record.tone(),
            record: record.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToggleView {
    pub key: SettingKey,
    pub label: String,
    pub description: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SettingsSectionView {
    pub title: String,
    pub toggles: Vec<ToggleView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SliderView {
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenView {
    Map {
        markers: Vec<MarkerView>,
    },
    Search {
        query: String,
        searching: bool,
        results: Vec<SearchResult>,
        recent: Vec<String>,
        popular: Vec<Destination>,
    },
    Favorites {
        places: Vec<SavedPlace>,
        entities: Vec<FavoriteEntityView>,
    },
    Notifications {
        items: Vec<NotificationView>,
        unread_count: usize,
    },
    Settings {
        sections: Vec<SettingsSectionView>,
        font_size: SliderView,
        refresh_interval: SliderView,
    },
    /// Valid target with no dedicated view yet.
    Placeholder {
        title: String,
    },
}

/// Floating buttons over the map.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MapChromeView {
    pub unread_badge: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrawerItemView {
    pub screen: ScreenId,
    pub label: String,
    pub active: bool,
    pub badge: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrawerView {
    pub open: bool,
    pub items: Vec<DrawerItemView>,
    pub can_install: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InfoPanelView {
    pub entity: EntityRef,
    pub name: String,
    pub eta: String,
    pub distance: String,
    pub route: Option<String>,
    pub next_stop: Option<String>,
    pub is_favorite: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub phase: BootPhase,
    pub screen: ScreenId,
    pub title: String,
    pub content: ScreenView,
    pub chrome: Option<MapChromeView>,
    pub drawer: DrawerView,
    pub info_panel: Option<InfoPanelView>,
    pub install_banner: bool,
    pub font_size_px: u32,
    pub dark_mode: bool,
}

impl ViewModel {
    pub fn splash_visible(&self) -> bool {
        !self.phase.is_active()
    }
}

fn markers(model: &Model) -> Vec<MarkerView> {
    let selected = model.overlay.selected();
    model
        .map
        .entities()
        .map(|entity| {
            let reference = entity.reference();
            let position = entity.position();
            MarkerView {
                is_favorite: model.favorites.contains(entity.id()),
                is_selected: selected == Some(&reference),
                entity: reference,
                name: entity.name().to_string(),
                lat: position.lat,
                lng: position.lng,
            }
        })
        .collect()
}

fn favorite_entities(model: &Model) -> Vec<FavoriteEntityView> {
    model
        .map
        .entities()
        .filter(|entity| model.favorites.contains(entity.id()))
        .map(|entity| FavoriteEntityView {
            entity: entity.reference(),
            name: entity.name().to_string(),
            eta: entity.eta().to_string(),
            distance: entity.distance().to_string(),
        })
        .collect()
}

fn settings_sections(model: &Model) -> Vec<SettingsSectionView> {
    SECTIONS
        .iter()
        .map(|(title, keys)| SettingsSectionView {
            title: (*title).to_string(),
            toggles: keys
                .iter()
                .map(|&key| ToggleView {
                    key,
                    label: key.label().to_string(),
                    description: key.description().to_string(),
                    enabled: model.settings.get(key),
                })
                .collect(),
        })
        .collect()
}

fn screen_view(model: &Model, screen: ScreenId) -> ScreenView {
    match screen {
        ScreenId::Map => ScreenView::Map {
            markers: markers(model),
        },
        ScreenId::Search => ScreenView::Search {
            query: model.search.query().to_string(),
            searching: model.search.is_searching(),
            results: model.search.results().to_vec(),
            recent: catalog::recent_searches(),
            popular: catalog::popular_destinations(),
        },
        ScreenId::Favorites => ScreenView::Favorites {
            places: model.saved_places.places().to_vec(),
            entities: favorite_entities(model),
        },
        ScreenId::Notifications => ScreenView::Notifications {
            items: model
                .notifications
                .records()
                .iter()
                .map(NotificationView::from)
                .collect(),
            unread_count: model.notifications.unread_count(),
        },
        ScreenId::Settings => ScreenView::Settings {
            sections: settings_sections(model),
            font_size: SliderView {
                value: model.settings.font_size_px,
                min: FONT_SIZE_RANGE_PX.0,
                max: FONT_SIZE_RANGE_PX.1,
            },
            refresh_interval: SliderView {
                value: model.settings.refresh_interval_s,
                min: REFRESH_INTERVAL_RANGE_S.0,
                max: REFRESH_INTERVAL_RANGE_S.1,
            },
        },
        ScreenId::History | ScreenId::Routes | ScreenId::Help | ScreenId::About => {
            ScreenView::Placeholder {
                title: screen.label().to_string(),
            }
        }
    }
}

fn drawer(model: &Model, current: ScreenId) -> DrawerView {
    let unread = model.notifications.unread_count();
    DrawerView {
        open: model.overlay.drawer_open(),
        items: ScreenId::ALL
            .into_iter()
            .map(|screen| DrawerItemView {
                screen,
                label: screen.label().to_string(),
                active: screen == current,
                badge: (screen == ScreenId::Notifications && unread > 0).then(|| "new".to_string()),
            })
            .collect(),
        can_install: model.overlay.install.is_available(),
    }
}

fn info_panel(model: &Model) -> Option<InfoPanelView> {
    let entity: MapEntity = model.selected_entity()?;
    Some(InfoPanelView {
        is_favorite: model.favorites.contains(entity.id()),
        entity: entity.reference(),
        name: entity.name().to_string(),
        eta: entity.eta().to_string(),
        distance: entity.distance().to_string(),
        route: entity.route().map(str::to_string),
        next_stop: entity.next_stop().map(str::to_string),
    })
}

pub fn build(model: &Model) -> ViewModel {
    let screen = model.router.current();
    let unread = model.notifications.unread_count();

    let chrome = (screen == ScreenId::Map).then(|| MapChromeView {
        unread_badge: (unread > 0).then_some(unread),
    });

    ViewModel {
        phase: model.boot,
        screen,
        title: screen.label().to_string(),
        content: screen_view(model, screen),
        chrome,
        drawer: drawer(model, screen),
        info_panel: info_panel(model),
        install_banner: model.overlay.install.banner_visible(),
        font_size_px: model.settings.font_size_px,
        dark_mode: model.settings.dark_mode,
    }
}
