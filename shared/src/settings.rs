use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_FONT_SIZE_PX, DEFAULT_REFRESH_INTERVAL_S, FONT_SIZE_RANGE_PX, FONT_SIZE_STEP_PX,
    REFRESH_INTERVAL_RANGE_S, REFRESH_INTERVAL_STEP_S,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    Notifications,
    Sound,
    Vibration,
    DarkMode,
    LocationSharing,
    RealTimeUpdates,
    FavoriteRoutes,
    ArrivalAlerts,
    DelayNotifications,
    LowBatteryMode,
    AutoRefresh,
    OfflineMode,
}

impl SettingKey {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Notifications => "Push Notifications",
            Self::ArrivalAlerts => "Arrival Alerts",
            Self::DelayNotifications => "Delay Notifications",
            Self::Sound => "Sound Alerts",
            Self::Vibration => "Vibration",
            Self::DarkMode => "Dark Mode",
            Self::LowBatteryMode => "Battery Saver",
            Self::LocationSharing => "Location Services",
            Self::RealTimeUpdates => "Real-time Tracking",
            Self::AutoRefresh => "Auto Refresh",
            Self::OfflineMode => "Offline Mode",
            Self::FavoriteRoutes => "Sync Favorites",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Notifications => "Receive alerts and updates",
            Self::ArrivalAlerts => "Get notified when bus arrives",
            Self::DelayNotifications => "Alert for service delays",
            Self::Sound => "Audio notifications",
            Self::Vibration => "Haptic feedback",
            Self::DarkMode => "Switch to dark theme",
            Self::LowBatteryMode => "Reduce background activity",
            Self::LocationSharing => "Enable GPS for better accuracy",
            Self::RealTimeUpdates => "Live bus locations",
            Self::AutoRefresh => "Automatically update data",
            Self::OfflineMode => "Cache data for offline use",
            Self::FavoriteRoutes => "Save favorites to cloud",
        }
    }
}

/// Toggle sections in display order.
pub const SECTIONS: &[(&str, &[SettingKey])] = &[
    (
        "Notifications",
        &[
            SettingKey::Notifications,
            SettingKey::ArrivalAlerts,
            SettingKey::DelayNotifications,
            SettingKey::Sound,
            SettingKey::Vibration,
        ],
    ),
    (
        "Display & Interface",
        &[SettingKey::DarkMode, SettingKey::LowBatteryMode],
    ),
    (
        "Location & Tracking",
        &[
            SettingKey::LocationSharing,
            SettingKey::RealTimeUpdates,
            SettingKey::AutoRefresh,
        ],
    ),
    (
        "Data & Storage",
        &[SettingKey::OfflineMode, SettingKey::FavoriteRoutes],
    ),
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub notifications: bool,
    pub sound: bool,
    pub vibration: bool,
    pub dark_mode: bool,
    pub location_sharing: bool,
    pub real_time_updates: bool,
    pub favorite_routes: bool,
    pub arrival_alerts: bool,
    pub delay_notifications: bool,
    pub low_battery_mode: bool,
    pub auto_refresh: bool,
    pub offline_mode: bool,
    pub font_size_px: u32,
    pub refresh_interval_s: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            sound: true,
            vibration: true,
            dark_mode: false,
            location_sharing: true,
            real_time_updates: true,
            favorite_routes: true,
            arrival_alerts: true,
            delay_notifications: true,
            low_battery_mode: false,
            auto_refresh: true,
            offline_mode: false,
            font_size_px: DEFAULT_FONT_SIZE_PX,
            refresh_interval_s: DEFAULT_REFRESH_INTERVAL_S,
        }
    }
}

/// Clamp into `range`, then snap down onto the step grid anchored at its start.
fn snap(value: u32, range: (u32, u32), step: u32) -> u32 {
    let (min, max) = range;
    let clamped = value.clamp(min, max);
    min + (clamped - min) / step * step
}

impl Settings {
    fn slot(&mut self, key: SettingKey) -> &mut bool {
        match key {
            SettingKey::Notifications => &mut self.notifications,
            SettingKey::Sound => &mut self.sound,
            SettingKey::Vibration => &mut self.vibration,
            SettingKey::DarkMode => &mut self.dark_mode,
            SettingKey::LocationSharing => &mut self.location_sharing,
            SettingKey::RealTimeUpdates => &mut self.real_time_updates,
            SettingKey::FavoriteRoutes => &mut self.favorite_routes,
            SettingKey::ArrivalAlerts => &mut self.arrival_alerts,
            SettingKey::DelayNotifications => &mut self.delay_notifications,
            SettingKey::LowBatteryMode => &mut self.low_battery_mode,
            SettingKey::AutoRefresh => &mut self.auto_refresh,
            SettingKey::OfflineMode => &mut self.offline_mode,
        }
    }

    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Notifications => self.notifications,
            SettingKey::Sound => self.sound,
            SettingKey::Vibration => self.vibration,
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::LocationSharing => self.location_sharing,
            SettingKey::RealTimeUpdates => self.real_time_updates,
            SettingKey::FavoriteRoutes => self.favorite_routes,
            SettingKey::ArrivalAlerts => self.arrival_alerts,
            SettingKey::DelayNotifications => self.delay_notifications,
            SettingKey::LowBatteryMode => self.low_battery_mode,
            SettingKey::AutoRefresh => self.auto_refresh,
            SettingKey::OfflineMode => self.offline_mode,
        }
    }

    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let slot = self.slot(key);
        *slot = !*slot;
        *slot
    }

    pub fn set_font_size(&mut self, px: u32) -> u32 {
        self.font_size_px = snap(px, FONT_SIZE_RANGE_PX, FONT_SIZE_STEP_PX);
        self.font_size_px
    }

    pub fn set_refresh_interval(&mut self, seconds: u32) -> u32 {
        self.refresh_interval_s = snap(seconds, REFRESH_INTERVAL_RANGE_S, REFRESH_INTERVAL_STEP_S);
        self.refresh_interval_s
    }
}
