// GPIO LED - einfache LED an einem Push-Pull Ausgang

use esp_hal::gpio::Output;
use simon_core::{LedError, LedPin};

/// LED an einem GPIO-Ausgang (active-high)
///
/// GPIO-Schreibzugriffe können auf dem ESP32 nicht fehlschlagen,
/// daher liefern alle Methoden immer `Ok`.
pub struct GpioLed {
    pin: Output<'static>,
}

impl GpioLed {
    /// Erstellt eine GpioLed
    ///
    /// # Parameter
    /// - `pin`: bereits als Ausgang konfigurierter Pin (Startwert Low)
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl LedPin for GpioLed {
    fn set_on(&mut self) -> Result<(), LedError> {
        self.pin.set_high();
        Ok(())
    }

    fn set_off(&mut self) -> Result<(), LedError> {
        self.pin.set_low();
        Ok(())
    }

    fn toggle(&mut self) -> Result<(), LedError> {
        self.pin.toggle();
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}
