//! Core Types für das Simon-Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Pin-Paar einer LED/Taster-Einheit
///
/// Die Reihenfolge in der Geräteliste bestimmt den Slot-Index,
/// über den Sequenz und Eingabe-Vergleich die Einheit identifizieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedButtonPins {
    pub led_pin: u8,
    pub button_pin: u8,
}

impl LedButtonPins {
    pub const fn new(led_pin: u8, button_pin: u8) -> Self {
        Self {
            led_pin,
            button_pin,
        }
    }
}

/// Entprellte Flanke eines Tasters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

/// Ergebnis eines einzelnen, angenommenen Spielerzugs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Richtige Taste, Sequenz geht weiter
    Matched { position: usize },
    /// Richtige Taste, Sequenz ist vollständig nachgespielt
    Completed,
    /// Falsche Taste an `position`
    Mismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },
}

/// Ergebnis eines Spielerzugs (Player-Turn Phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Completed,
    Lost,
}

/// Ergebnis einer kompletten Runde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Sequenz korrekt nachgespielt, nächste Runde wird länger
    Continued { length: usize },
    /// Falsche Taste: Boot-Animation lief, Sequenz ist leer
    Lost { length: usize },
    /// Maximale Sequenzlänge geschafft: Neustart wie nach einer Niederlage
    Won,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedButtonPins {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LedButtonPins {{ led: GPIO{}, button: GPIO{} }}",
            self.led_pin,
            self.button_pin
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonEdge {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ButtonEdge::Pressed => defmt::write!(fmt, "Pressed"),
            ButtonEdge::Released => defmt::write!(fmt, "Released"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MoveOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MoveOutcome::Matched { position } => {
                defmt::write!(fmt, "Matched {{ position: {} }}", position)
            }
            MoveOutcome::Completed => defmt::write!(fmt, "Completed"),
            MoveOutcome::Mismatch {
                position,
                expected,
                actual,
            } => defmt::write!(
                fmt,
                "Mismatch {{ position: {}, expected: {}, actual: {} }}",
                position,
                expected,
                actual
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TurnOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TurnOutcome::Completed => defmt::write!(fmt, "Completed"),
            TurnOutcome::Lost => defmt::write!(fmt, "Lost"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RoundOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RoundOutcome::Continued { length } => {
                defmt::write!(fmt, "Continued {{ length: {} }}", length)
            }
            RoundOutcome::Lost { length } => defmt::write!(fmt, "Lost {{ length: {} }}", length),
            RoundOutcome::Won => defmt::write!(fmt, "Won"),
        }
    }
}
