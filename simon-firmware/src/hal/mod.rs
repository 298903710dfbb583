// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus simon-core für die ESP32-C6 Peripherals.
// Tests laufen gegen Mocks in simon-tests, nicht gegen diese Typen.

pub mod debounced_button;
pub mod entropy;
pub mod gpio_led;

pub use debounced_button::DebouncedButton;
pub use entropy::HardwareEntropy;
pub use gpio_led::GpioLed;
