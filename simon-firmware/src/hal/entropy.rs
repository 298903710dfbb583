// Hardware-Entropie aus dem ESP32 RNG Peripheral

use esp_hal::rng::Rng;
use simon_core::EntropySource;

/// Liest Zufallswerte aus dem Hardware-RNG
///
/// Wird vom Spiel einmal pro Runde zum Neu-Seeden genutzt.
pub struct HardwareEntropy {
    rng: Rng,
}

impl HardwareEntropy {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl EntropySource for HardwareEntropy {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }
}
