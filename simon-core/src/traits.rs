//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::ButtonEdge;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für einen einzelnen LED-Ausgang
///
/// # Implementierungen
/// - **Production:** GpioLed (esp-hal Output)
/// - **Testing:** MockLed (in-memory Mock)
pub trait LedPin: Send {
    fn set_on(&mut self) -> Result<(), LedError>;

    fn set_off(&mut self) -> Result<(), LedError>;

    fn toggle(&mut self) -> Result<(), LedError>;

    /// Aktueller logischer Zustand (spiegelt den Ausgang)
    fn is_on(&self) -> bool;
}

/// Trait für einen bereits entprellten Taster
///
/// Liefert asynchron die nächste Press- oder Release-Flanke.
/// Entprellen ist Aufgabe der Implementierung, nicht des Cores.
pub trait ButtonInput {
    fn wait_for_edge(&mut self) -> impl Future<Output = ButtonEdge>;
}

/// Trait für eine Hardware-Entropiequelle
///
/// Wird einmal pro Runde gelesen, um den Zufallsgenerator neu zu seeden.
pub trait EntropySource {
    fn next_u32(&mut self) -> u32;
}

/// Empfänger für Taster-Benachrichtigungen einer LedButton
///
/// `notify` läuft im Kontext des Input-Tasks und darf nicht blockieren:
/// Implementierungen halten nur Zustand fest und wecken ggf. einen
/// wartenden Task (z.B. über ein `Signal`).
pub trait ButtonListener: Sync {
    fn notify(&self, slot: usize);
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
