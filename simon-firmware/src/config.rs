// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LED/Taster Zuordnung
// ============================================================================

/// Anzahl der LED/Taster-Einheiten
pub const BUTTON_COUNT: usize = 3;

/// Liefert die GPIO-Peripherals als `([LED; N], [Taster; N])` in Slot-Reihenfolge
///
/// Einzige Stelle mit Pin-Zuordnungen. Die Pin-Nummern für Validierung und
/// Log werden in main() aus den Pins selbst gelesen.
///
/// | Slot | Farbe | LED    | Taster |
/// |------|-------|--------|--------|
/// | 0    | Rot   | GPIO4  | GPIO2  |
/// | 1    | Grün  | GPIO10 | GPIO11 |
/// | 2    | Blau  | GPIO18 | GPIO5  |
#[macro_export]
macro_rules! led_button_gpios {
    ($p:expr) => {
        $crate::led_button_gpios!(@split $p;
            (GPIO4, GPIO2),
            (GPIO10, GPIO11),
            (GPIO18, GPIO5),
        )
    };
    (@split $p:expr; $(($led:ident, $button:ident)),* $(,)?) => {
        ([$($p.$led.into()),*], [$($p.$button.into()),*])
    };
}

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// Entprell-Zeit in Millisekunden
/// Taster sind active-low mit internem Pull-Up
pub const DEBOUNCE_MS: u64 = 20;

// ============================================================================
// Spiel Konfiguration
// ============================================================================

/// Wiedergabe-Geschwindigkeit in Millisekunden
/// LED leuchtet die Hälfte davon, danach volle Pause
pub const GAME_SPEED_MS: u32 = simon_core::config::SPEED_MS;
