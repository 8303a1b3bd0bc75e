//! Game engine and run settings

mod cancel;
mod engine;
mod settings;

pub use cancel::CancelToken;
pub use engine::{GameEngine, GameError, GameRecord, GameState, TurnRecord};
pub use settings::{
    DEFAULT_CODE_LENGTH, DEFAULT_COLOURS, DEFAULT_GAMES, DEFAULT_MAX_GUESSES, ErrorPolicy,
    GameSettings, SettingsError,
};
