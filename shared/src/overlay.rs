use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::EntityRef;

/// Overlays that sit above the active screen and close through a backdrop.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Drawer,
    InfoPanel,
    InstallPrompt,
}

/// Platform "installable" event, stored as-is and handed back when prompting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstallHandle(pub String);

/// Owned by the shell state, set by the platform event and cleared once the
/// prompt resolved either way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstallPromptState {
    handle: Option<InstallHandle>,
    banner_visible: bool,
}

impl InstallPromptState {
    pub fn store(&mut self, handle: InstallHandle) {
        self.handle = Some(handle);
        self.banner_visible = true;
    }

    /// Hand the stored event to the platform; a second call has nothing to take.
    pub fn take(&mut self) -> Option<InstallHandle> {
        self.banner_visible = false;
        self.handle.take()
    }

    /// "Later": hide the banner but keep the handle for the drawer action.
    pub fn defer(&mut self) {
        self.banner_visible = false;
    }

    pub fn is_available(&self) -> bool {
        self.handle.is_some()
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible && self.handle.is_some()
    }
}

/// Transient overlay state. The drawer and the info panel are independent;
/// both may be open at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayController {
    drawer_open: bool,
    selected: Option<EntityRef>,
    pub install: InstallPromptState,
}

impl OverlayController {
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn selected(&self) -> Option<&EntityRef> {
        self.selected.as_ref()
    }

    pub fn info_panel_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Replaces any previous selection.
    pub fn select_entity(&mut self, entity: EntityRef) {
        if let Some(previous) = self.selected.replace(entity) {
            debug!(previous = %previous.id, "selection replaced");
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The single close path for an overlay; explicit close buttons and
    /// backdrop taps both land here.
    pub fn dismiss(&mut self, overlay: OverlayKind) {
        match overlay {
            OverlayKind::Drawer => self.close_drawer(),
            OverlayKind::InfoPanel => self.clear_selection(),
            OverlayKind::InstallPrompt => self.install.defer(),
        }
    }

    pub fn is_open(&self, overlay: OverlayKind) -> bool {
        match overlay {
            OverlayKind::Drawer => self.drawer_open,
            OverlayKind::InfoPanel => self.info_panel_open(),
            OverlayKind::InstallPrompt => self.install.banner_visible(),
        }
    }
}
