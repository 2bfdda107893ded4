// lib.rs - shared core of the campus bus tracker

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]

pub mod capabilities;
pub mod catalog;
pub mod event;
pub mod favorites;
pub mod model;
pub mod notifications;
pub mod overlay;
pub mod router;
pub mod saved_places;
pub mod search;
pub mod settings;
pub mod view;

use std::time::Duration;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use crux_core::{render::Render, App as CruxApp};
pub use event::Event;
pub use model::{BootPhase, EntityRef, Model, ScreenId};
pub use view::ViewModel;

// --- Constants ---

pub const SPLASH_DWELL_MS: u64 = 3200;
pub const FAVORITES_SLOT_KEY: &str = "bus-tracker-favorites";
pub const DEFAULT_FONT_SIZE_PX: u32 = 16;
pub const FONT_SIZE_RANGE_PX: (u32, u32) = (12, 24);
pub const FONT_SIZE_STEP_PX: u32 = 1;
pub const DEFAULT_REFRESH_INTERVAL_S: u32 = 30;
pub const REFRESH_INTERVAL_RANGE_S: (u32, u32) = (10, 120);
pub const REFRESH_INTERVAL_STEP_S: u32 = 5;
/// Queries must be longer than this (after trimming) to be matched.
pub const MIN_SEARCH_QUERY_CHARS: usize = 2;

/// Knobs the shell may override when it builds the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub splash_dwell: Duration,
    pub favorites_slot: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            splash_dwell: Duration::from_millis(SPLASH_DWELL_MS),
            favorites_slot: FAVORITES_SLOT_KEY.to_string(),
        }
    }
}

pub mod app {
    use tracing::{debug, info, info_span, warn};

    use crate::capabilities::{
        read_slot, write_slot, CapabilityError, Capabilities, InstallError, SlotKey, TimerError,
        TimerId, TimerOutput,
    };
    use crate::event::Event;
    use crate::model::{BootPhase, Model, ScreenId};
    use crate::view::{self, ViewModel};

    #[derive(Default)]
    pub struct App;

    impl App {
        fn favorites_key(model: &Model) -> Result<SlotKey, CapabilityError> {
            Ok(SlotKey::new(model.config.favorites_slot.as_str())?)
        }

        /// Booting -> Splash. Starts the dwell timer and the one boot read of
        /// the favorites slot.
        fn start(model: &mut Model, caps: &Capabilities) -> bool {
            if model.boot != BootPhase::Booting {
                warn!(phase = ?model.boot, "shell already started");
                return false;
            }
            model.boot = BootPhase::Splash;

            let id = model.allocate_timer_id();
            model.splash_timer = Some(id);
            caps.timer
                .start(id, model.config.splash_dwell, move |outcome| Event::SplashTimer {
                    id,
                    outcome,
                });
            info!(timer = %id, dwell = ?model.config.splash_dwell, "splash shown");

            match Self::favorites_key(model) {
                Ok(key) => read_slot(&caps.key_value, &key, |result| Event::FavoritesLoaded {
                    result,
                }),
                Err(e) => {
                    warn!(error = %e, "favorites slot unusable, starting empty");
                    Self::hydrate_favorites(model, caps, None);
                }
            }
            true
        }

        fn finish_splash(model: &mut Model, id: TimerId, outcome: TimerOutput) -> bool {
            if model.splash_timer != Some(id) {
                warn!(error = %TimerError::Stale { id }, "ignoring timer result");
                return false;
            }
            model.splash_timer = None;

            if outcome == TimerOutput::Cancelled {
                warn!(error = %TimerError::Cancelled { id }, "shell cancelled the splash, activating anyway");
            }
            model.boot = BootPhase::Active;
            info!("shell active");
            true
        }

        fn tear_down(model: &mut Model, caps: &Capabilities) -> bool {
            if let Some(id) = model.splash_timer.take() {
                caps.timer.cancel(id);
                info!(timer = %id, "splash timer released");
            }
            false
        }

        fn persist_favorites(model: &Model, caps: &Capabilities) -> Result<(), CapabilityError> {
            let key = Self::favorites_key(model)?;
            let bytes = model.favorites.save()?;
            write_slot(&caps.key_value, &key, bytes, |result| Event::FavoritesSaved {
                result,
            })?;
            Ok(())
        }

        /// Applies the boot read and writes back the merged set when toggles
        /// arrived first. Returns whether the set changed.
        fn hydrate_favorites(
            model: &mut Model,
            caps: &Capabilities,
            slot: Option<&[u8]>,
        ) -> bool {
            let outcome = model.favorites.hydrate(slot);
            if outcome.needs_write() {
                if let Err(e) = Self::persist_favorites(model, caps) {
                    warn!(error = %e, "merged favorites not persisted");
                }
            }
            outcome.changed()
        }

        fn request_install(model: &mut Model, caps: &Capabilities) -> bool {
            model.overlay.close_drawer();
            match model.overlay.install.take() {
                Some(handle) => {
                    caps.install_prompt
                        .prompt(handle, |outcome| Event::InstallPromptResolved { outcome });
                }
                None => {
                    warn!(error = %CapabilityError::from(InstallError::NoHandle), "install requested");
                }
            }
            true
        }

        /// Applies one event. Returns whether anything the view reads changed.
        fn apply(event: Event, model: &mut Model, caps: &Capabilities) -> bool {
            match event {
                Event::AppStarted => Self::start(model, caps),
                Event::SplashTimer { id, outcome } => Self::finish_splash(model, id, outcome),
                Event::ShellTornDown => Self::tear_down(model, caps),

                Event::Navigate { screen } => {
                    model.navigate(screen);
                    true
                }
                Event::NavigateBack => {
                    model.navigate_back();
                    true
                }

                Event::OpenDrawer => {
                    model.overlay.open_drawer();
                    true
                }
                Event::CloseDrawer => {
                    model.overlay.close_drawer();
                    true
                }
                Event::ToggleDrawer => {
                    model.overlay.toggle_drawer();
                    true
                }
                Event::BackdropTapped { overlay } => {
                    model.overlay.dismiss(overlay);
                    true
                }
                Event::EntitySelected { entity } => {
                    if model.map.resolve(&entity).is_none() {
                        warn!(kind = ?entity.kind, id = %entity.id, "unknown map entity");
                        return false;
                    }
                    model.overlay.select_entity(entity);
                    true
                }
                Event::SelectionCleared => {
                    model.overlay.clear_selection();
                    true
                }
                Event::FavoriteToggled { id } => {
                    model.favorites.toggle(&id);
                    if model.favorites.is_loaded() {
                        if let Err(e) = Self::persist_favorites(model, caps) {
                            warn!(error = %e, "favorites not persisted");
                        }
                    } else {
                        debug!("favorites write held until the slot is read");
                    }
                    true
                }

                Event::FavoritesLoaded { result } => match result {
                    Ok(slot) => Self::hydrate_favorites(model, caps, slot.as_deref()),
                    Err(e) => {
                        warn!(error = %e, "favorites slot unreadable");
                        Self::hydrate_favorites(model, caps, None)
                    }
                },
                Event::FavoritesSaved { result } => {
                    if let Err(e) = result {
                        warn!(error = %e, "favorites write failed, in-memory set stays canonical");
                    }
                    false
                }

                Event::NotificationRead { id } => {
                    model.notifications.mark_read(&id);
                    true
                }
                Event::AllNotificationsRead => {
                    model.notifications.mark_all_read();
                    true
                }
                Event::NotificationDeleted { id } => {
                    model.notifications.delete(&id);
                    true
                }
                Event::AllNotificationsCleared => {
                    model.notifications.clear_all();
                    true
                }

                Event::SettingToggled { key } => {
                    let enabled = model.settings.toggle(key);
                    debug!(?key, enabled, "setting toggled");
                    true
                }
                Event::FontSizeChanged { px } => {
                    model.settings.set_font_size(px);
                    true
                }
                Event::RefreshIntervalChanged { seconds } => {
                    model.settings.set_refresh_interval(seconds);
                    true
                }

                Event::SearchQueryChanged { query } => {
                    let matches = model.search.set_query(query);
                    debug!(matches, "search updated");
                    true
                }
                Event::SearchCleared => {
                    model.search.clear();
                    true
                }
                Event::SearchResultSelected { id } => {
                    if model.search.find(&id).is_none() {
                        warn!(%id, "unknown search result");
                        return false;
                    }
                    model.navigate(ScreenId::Map);
                    true
                }

                Event::SavedPlaceSelected { id } => {
                    if model.saved_places.get(&id).is_none() {
                        warn!(%id, "unknown saved place");
                        return false;
                    }
                    model.navigate(ScreenId::Map);
                    true
                }
                Event::SavedPlaceRemoved { id } => model.saved_places.remove(&id),
                Event::SavedPlaceAlertsToggled { id } => {
                    model.saved_places.toggle_alerts(&id).is_some()
                }

                Event::InstallPromptAvailable { handle } => {
                    model.overlay.install.store(handle);
                    info!("install prompt available");
                    true
                }
                Event::InstallRequested => Self::request_install(model, caps),
                Event::InstallPromptDeferred => {
                    model.overlay.install.defer();
                    true
                }
                Event::InstallPromptResolved { outcome } => {
                    info!(?outcome, "install prompt resolved");
                    true
                }
            }
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            let span = info_span!("update", event = event.name());
            let _entered = span.enter();
            if event.is_user_initiated() {
                debug!("user action");
            }

            if Self::apply(event, model, caps) {
                caps.render.render();
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            view::build(model)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_durable_key() {
        let config = ShellConfig::default();
        assert_eq!(config.favorites_slot, "bus-tracker-favorites");
        assert_eq!(config.splash_dwell, Duration::from_millis(3200));
    }

    #[test]
    fn slider_defaults_sit_inside_their_ranges() {
        assert!((FONT_SIZE_RANGE_PX.0..=FONT_SIZE_RANGE_PX.1).contains(&DEFAULT_FONT_SIZE_PX));
        assert!(
            (REFRESH_INTERVAL_RANGE_S.0..=REFRESH_INTERVAL_RANGE_S.1)
                .contains(&DEFAULT_REFRESH_INTERVAL_S)
        );
        assert_eq!(
            (DEFAULT_REFRESH_INTERVAL_S - REFRESH_INTERVAL_RANGE_S.0) % REFRESH_INTERVAL_STEP_S,
            0
        );
    }

    #[test]
    fn model_new_keeps_custom_config() {
        let config = ShellConfig {
            splash_dwell: Duration::from_millis(10),
            favorites_slot: "test-favorites".into(),
        };
        let model = Model::new(config.clone());
        assert_eq!(model.config, config);
        assert_eq!(model.boot, BootPhase::Booting);
    }
}
