pub mod config;
pub mod error;
pub mod face;
pub mod prefs;
pub mod quip;
pub mod roll;
pub mod table;

pub use config::{Pairing, WidgetConfig, PAIRING_PARAM};
pub use error::{ConfigError, DiceError};
pub use face::{RollOutcome, Rotation, FACE_COUNT, RESTING_TRANSFORM};
pub use prefs::{
    DiceMode, MemoryStore, PreferenceStore, Preferences, Theme, DICE_COUNT_KEY, LIGHT_THEME_CLASS,
    THEME_KEY,
};
pub use quip::{craps_quip, face_quip, ROLLING_TEXT};
pub use roll::{Die, DiePose, DieState, RollPlan, EXTRA_TURNS, ROLL_DURATION_MS};
pub use table::{Banner, DiceTable, DieSlot, RollReport, RollTicket, Trigger};
