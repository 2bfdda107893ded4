mod install;
mod kv;
mod timer;

pub use self::install::{InstallError, InstallOperation, InstallOutcome, InstallPrompt};
pub use self::kv::{read_slot, write_slot, SlotError, SlotKey, SlotRead, SlotWrite};
pub use self::timer::{Timer, TimerError, TimerId, TimerOperation, TimerOutput};

pub use crux_core::render::Render;
pub use crux_kv::KeyValue;

use crate::event::Event;
use crate::favorites::FavoritesError;
// The Effect derive refers to the app by name.
use crate::App;

/// Everything that can go wrong at the shell boundary. None of these escape
/// `update`; they are logged and the model degrades.
#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("storage error: {0}")]
    Slot(#[from] SlotError),

    #[error("favorites error: {0}")]
    Favorites(#[from] FavoritesError),

    #[error("timer error: {0}")]
    Timer(#[from] TimerError),

    #[error("install error: {0}")]
    Install(#[from] InstallError),
}

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub key_value: KeyValue<Event>,
    pub timer: Timer<Event>,
    pub install_prompt: InstallPrompt<Event>,
}
