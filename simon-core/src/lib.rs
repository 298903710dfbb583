//! Simon Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits für LEDs, Taster und Entropie sowie die
//! komplette Spiel-Zustandsmaschine (testbar auf dem Host).

#![no_std]

#[macro_use]
mod fmt;

pub mod config;
pub mod game;
pub mod led_button;
pub mod player_turn;
pub mod sequence;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{ConfigError, GameTiming, validate_pins};
pub use game::SimonGame;
pub use led_button::LedButton;
pub use player_turn::PlayerTurn;
pub use sequence::{Sequence, SequenceFull};
pub use traits::{ButtonInput, ButtonListener, EntropySource, LedError, LedPin};
pub use types::{ButtonEdge, LedButtonPins, MoveOutcome, RoundOutcome, TurnOutcome};
