// Game Task - führt die Simon-Zustandsmaschine aus
use defmt::{error, info};

use crate::Game;

/// Simon Game Task - läuft für immer
///
/// Boot-Animation, dann Runde um Runde. Ein LED-Fehler ist nicht
/// behebbar: er wird geloggt und an den Panic-Handler weitergereicht
/// (esp-backtrace gibt den Backtrace aus und hält an).
#[embassy_executor::task]
pub async fn game_task(mut game: Game) {
    info!(
        "Game: Start mit {} LedButtons, Speed {} ms",
        game.buttons().len(),
        game.timing().speed_ms
    );

    match game.run().await {
        Ok(never) => match never {},
        Err(e) => {
            error!("Game: LED-Schreibfehler {}, Abbruch", e);
            panic!("Game: LED write failed");
        }
    }
}
