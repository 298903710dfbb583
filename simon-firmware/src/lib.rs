// Library-Root: Hardware-Anbindung und Tasks für das Simon-Spiel
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von simon-core
pub use simon_core::{
    ButtonEdge, ConfigError, GameTiming, LedButton, LedButtonPins, LedError, PlayerTurn,
    SimonGame, validate_pins,
};

use embassy_time::Delay;

use crate::hal::{GpioLed, HardwareEntropy};

// ============================================================================
// Type-Aliase für die Firmware-Typen
// ============================================================================
//
// Embassy Tasks dürfen nicht generisch sein, daher feste Typen.

/// LedButton mit GPIO-LED, lebt für die gesamte Laufzeit
pub type FirmwareLedButton = LedButton<'static, GpioLed>;

/// Simon-Spiel mit GPIO-LEDs, embassy Delay und Hardware-RNG
pub type Game = SimonGame<'static, GpioLed, Delay, HardwareEntropy>;
