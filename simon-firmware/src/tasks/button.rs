// Button Task - verarbeitet die Flanken eines Tasters
use defmt::{error, info};

use crate::FirmwareLedButton;
use crate::config::BUTTON_COUNT;
use crate::hal::DebouncedButton;

// pool_size muss ein Literal sein
const _: () = assert!(BUTTON_COUNT == 3);

/// Button Task - eine Instanz pro LedButton
///
/// Wartet auf entprellte Flanken und ruft die Press/Release-Handler der
/// LedButton auf. Die registrierten Listener blockieren nicht, der Task
/// ist sofort wieder bereit für die nächste Flanke.
///
/// # Parameter
/// - `input`: entprellter Taster dieser Einheit
/// - `led_button`: zugehörige LedButton aus der gemeinsamen Geräteliste
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(mut input: DebouncedButton, led_button: &'static FirmwareLedButton) {
    info!("Button: Task für Slot {} gestartet", led_button.slot());

    match led_button.listen(&mut input).await {
        Ok(never) => match never {},
        Err(e) => {
            error!("Button: LED-Schreibfehler {} in Slot {}", e, led_button.slot());
            panic!("Button: LED write failed");
        }
    }
}
