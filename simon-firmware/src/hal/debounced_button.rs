// Entprellter Taster - liefert Press/Release Flanken an simon-core

use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;
use simon_core::{ButtonEdge, ButtonInput};

/// Active-low Taster mit Software-Entprellung
///
/// Wartet auf einen Pegelwechsel, dann `debounce` lang, und meldet die
/// Flanke nur, wenn der neue Pegel danach noch anliegt.
pub struct DebouncedButton {
    input: Input<'static>,
    debounce: Duration,
    pressed: bool,
}

impl DebouncedButton {
    /// Erstellt einen DebouncedButton
    ///
    /// # Parameter
    /// - `input`: Eingang mit Pull-Up (gedrückt = Low)
    /// - `debounce`: Mindestdauer eines stabilen Pegels
    pub fn new(input: Input<'static>, debounce: Duration) -> Self {
        let pressed = input.is_low();
        Self {
            input,
            debounce,
            pressed,
        }
    }
}

impl ButtonInput for DebouncedButton {
    async fn wait_for_edge(&mut self) -> ButtonEdge {
        loop {
            if self.pressed {
                self.input.wait_for_high().await;
            } else {
                self.input.wait_for_low().await;
            }

            Timer::after(self.debounce).await;

            // Prellen: Pegel ist zurückgesprungen, weiter warten
            let pressed = self.input.is_low();
            if pressed == self.pressed {
                continue;
            }

            self.pressed = pressed;
            return if pressed {
                ButtonEdge::Pressed
            } else {
                ButtonEdge::Released
            };
        }
    }
}
