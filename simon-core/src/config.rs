//! Spiel-Konfiguration: Zeitkonstanten, Grenzen und Validierung
//!
//! Pin-Nummern gehören nicht hierher (siehe Firmware config.rs),
//! nur die plattformunabhängigen Parameter des Spiels.

use crate::types::LedButtonPins;

// ============================================================================
// Grenzen
// ============================================================================

/// Maximale Anzahl LED/Taster-Einheiten
pub const MAX_BUTTONS: usize = 8;

/// Maximale Länge der Sequenz (danach gilt das Spiel als gewonnen)
pub const MAX_SEQUENCE_LEN: usize = 64;

// ============================================================================
// Zeitkonstanten (Millisekunden)
// ============================================================================

/// Grundgeschwindigkeit der Wiedergabe: LED leuchtet `SPEED_MS / 2`,
/// danach `SPEED_MS` Pause bis zur nächsten LED
pub const SPEED_MS: u32 = 800;

/// Leuchtdauer jeder LED beim Boot-Lauflicht
pub const BOOT_FLASH_MS: u32 = 300;

/// Wie oft das Boot-Lauflicht über alle LEDs läuft
pub const BOOT_FLASH_ROUNDS: u8 = 2;

/// Pause zwischen Lauflicht und gemeinsamem Blinken
pub const BOOT_PAUSE_MS: u32 = 300;

/// Intervall des gemeinsamen Blinkens
pub const BOOT_TOGGLE_MS: u32 = 500;

/// Anzahl Toggles beim gemeinsamen Blinken (gerade: endet mit LEDs aus)
pub const BOOT_TOGGLE_COUNT: u8 = 4;

/// Pause nach jeder Spielerrunde
pub const ROUND_PAUSE_MS: u32 = 500;

// ============================================================================
// Fehler
// ============================================================================

/// Fehler-Typ für ungültige Konfiguration
///
/// Wird beim Aufbau geprüft, bevor die Spielschleife startet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Geräteliste ist leer
    NoButtons,
    /// Mehr Einheiten als `MAX_BUTTONS`
    TooManyButtons { count: usize },
    /// Pin-Nummer wird mehrfach verwendet
    DuplicatePin { pin: u8 },
    /// LedButton an Position `index` trägt einen anderen Slot
    SlotMismatch { index: usize, slot: usize },
    /// Geschwindigkeit 0 würde die Wiedergabe unsichtbar machen
    ZeroSpeed,
}

// ============================================================================
// GameTiming
// ============================================================================

/// Zeitparameter für Boot-Animation, Wiedergabe und Rundenpause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTiming {
    pub speed_ms: u32,
    pub boot_flash_ms: u32,
    pub boot_flash_rounds: u8,
    pub boot_pause_ms: u32,
    pub boot_toggle_ms: u32,
    pub boot_toggle_count: u8,
    pub round_pause_ms: u32,
}

impl GameTiming {
    pub const fn new() -> Self {
        Self {
            speed_ms: SPEED_MS,
            boot_flash_ms: BOOT_FLASH_MS,
            boot_flash_rounds: BOOT_FLASH_ROUNDS,
            boot_pause_ms: BOOT_PAUSE_MS,
            boot_toggle_ms: BOOT_TOGGLE_MS,
            boot_toggle_count: BOOT_TOGGLE_COUNT,
            round_pause_ms: ROUND_PAUSE_MS,
        }
    }

    /// Setzt die Wiedergabe-Geschwindigkeit (kleiner = schneller)
    pub const fn with_speed(mut self, speed_ms: u32) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speed_ms == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        Ok(())
    }
}

impl Default for GameTiming {
    fn default() -> Self {
        Self::new()
    }
}

/// Prüft die Pin-Zuordnung der Geräteliste
///
/// Schlägt fehl bei leerer Liste, zu vielen Einheiten oder
/// wenn ein Pin doppelt vorkommt (auch LED- gegen Taster-Pin).
pub fn validate_pins(pins: &[LedButtonPins]) -> Result<(), ConfigError> {
    if pins.is_empty() {
        return Err(ConfigError::NoButtons);
    }
    if pins.len() > MAX_BUTTONS {
        return Err(ConfigError::TooManyButtons { count: pins.len() });
    }

    // Ein Eintrag pro möglicher Pin-Nummer
    let mut seen = [false; u8::MAX as usize + 1];
    for pin in pins.iter().flat_map(|p| [p.led_pin, p.button_pin]) {
        let used = &mut seen[usize::from(pin)];
        if *used {
            return Err(ConfigError::DuplicatePin { pin });
        }
        *used = true;
    }
    Ok(())
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::NoButtons => defmt::write!(fmt, "NoButtons"),
            ConfigError::TooManyButtons { count } => {
                defmt::write!(fmt, "TooManyButtons {{ count: {} }}", count)
            }
            ConfigError::DuplicatePin { pin } => {
                defmt::write!(fmt, "DuplicatePin {{ pin: {} }}", pin)
            }
            ConfigError::SlotMismatch { index, slot } => {
                defmt::write!(fmt, "SlotMismatch {{ index: {}, slot: {} }}", index, slot)
            }
            ConfigError::ZeroSpeed => defmt::write!(fmt, "ZeroSpeed"),
        }
    }
}
