use serde::{Deserialize, Serialize};

use crate::capabilities::{InstallOutcome, SlotRead, SlotWrite, TimerId, TimerOutput};
use crate::model::{EntityRef, FavoriteId, NotificationId, PlaceId, ScreenId, SearchResultId};
use crate::overlay::{InstallHandle, OverlayKind};
use crate::settings::SettingKey;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    // Lifecycle
    AppStarted,
    SplashTimer {
        id: TimerId,
        outcome: TimerOutput,
    },
    ShellTornDown,

    // Navigation
    Navigate {
        screen: ScreenId,
    },
    NavigateBack,

    // Overlays
    OpenDrawer,
    CloseDrawer,
    ToggleDrawer,
    BackdropTapped {
        overlay: OverlayKind,
    },
    EntitySelected {
        entity: EntityRef,
    },
    SelectionCleared,
    FavoriteToggled {
        id: FavoriteId,
    },

    // Durable slot responses
    FavoritesLoaded {
        result: SlotRead,
    },
    FavoritesSaved {
        result: SlotWrite,
    },

    // Notifications
    NotificationRead {
        id: NotificationId,
    },
    AllNotificationsRead,
    NotificationDeleted {
        id: NotificationId,
    },
    AllNotificationsCleared,

    // Settings
    SettingToggled {
        key: SettingKey,
    },
    FontSizeChanged {
        px: u32,
    },
    RefreshIntervalChanged {
        seconds: u32,
    },

    // Search
    SearchQueryChanged {
        query: String,
    },
    SearchCleared,
    SearchResultSelected {
        id: SearchResultId,
    },

    // Saved places
    SavedPlaceSelected {
        id: PlaceId,
    },
    SavedPlaceRemoved {
        id: PlaceId,
    },
    SavedPlaceAlertsToggled {
        id: PlaceId,
    },

    // Install prompt
    InstallPromptAvailable {
        handle: InstallHandle,
    },
    InstallRequested,
    InstallPromptDeferred,
    InstallPromptResolved {
        outcome: InstallOutcome,
    },
}

impl Event {
    /// Stable name for log fields; never includes payload data.
    pub fn name(&self) -> &'static str {
        match self {
            Event::AppStarted => "app_started",
            Event::SplashTimer { .. } => "splash_timer",
            Event::ShellTornDown => "shell_torn_down",
            Event::Navigate { .. } => "navigate",
            Event::NavigateBack => "navigate_back",
            Event::OpenDrawer => "open_drawer",
            Event::CloseDrawer => "close_drawer",
            Event::ToggleDrawer => "toggle_drawer",
            Event::BackdropTapped { .. } => "backdrop_tapped",
            Event::EntitySelected { .. } => "entity_selected",
            Event::SelectionCleared => "selection_cleared",
            Event::FavoriteToggled { .. } => "favorite_toggled",
            Event::FavoritesLoaded { .. } => "favorites_loaded",
            Event::FavoritesSaved { .. } => "favorites_saved",
            Event::NotificationRead { .. } => "notification_read",
            Event::AllNotificationsRead => "all_notifications_read",
            Event::NotificationDeleted { .. } => "notification_deleted",
            Event::AllNotificationsCleared => "all_notifications_cleared",
            Event::SettingToggled { .. } => "setting_toggled",
            Event::FontSizeChanged { .. } => "font_size_changed",
            Event::RefreshIntervalChanged { .. } => "refresh_interval_changed",
            Event::SearchQueryChanged { .. } => "search_query_changed",
            Event::SearchCleared => "search_cleared",
            Event::SearchResultSelected { .. } => "search_result_selected",
            Event::SavedPlaceSelected { .. } => "saved_place_selected",
            Event::SavedPlaceRemoved { .. } => "saved_place_removed",
            Event::SavedPlaceAlertsToggled { .. } => "saved_place_alerts_toggled",
            Event::InstallPromptAvailable { .. } => "install_prompt_available",
            Event::InstallRequested => "install_requested",
            Event::InstallPromptDeferred => "install_prompt_deferred",
            Event::InstallPromptResolved { .. } => "install_prompt_resolved",
        }
    }

    /// Events raised by a person tapping something, as opposed to the
    /// platform, a timer or a capability response.
    pub fn is_user_initiated(&self) -> bool {
        !matches!(
            self,
            Event::AppStarted
                | Event::SplashTimer { .. }
                | Event::ShellTornDown
                | Event::FavoritesLoaded { .. }
                | Event::FavoritesSaved { .. }
                | Event::InstallPromptAvailable { .. }
                | Event::InstallPromptResolved { .. }
        )
    }
}
