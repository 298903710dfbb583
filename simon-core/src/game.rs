//! SimonGame - Zustandsmaschine des Spiels
//!
//! Ablauf (zyklisch, ohne Endzustand):
//!
//! ```text
//! BOOT → ROUND-START → PLAYBACK → PLAYER-TURN → WIN-CONTINUE | LOSE-RESTART
//!   ^                                                              |
//!   +--------------------------------------------------------------+
//! ```
//!
//! Das Spiel teilt die Geräteliste (`&[LedButton]`) mit den Input-Tasks.
//! Die Sequenz speichert nur Slot-Indizes in diese Liste.

use core::convert::Infallible;

use embedded_hal_async::delay::DelayNs;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::{ConfigError, GameTiming, MAX_BUTTONS};
use crate::led_button::LedButton;
use crate::player_turn::PlayerTurn;
use crate::sequence::{Sequence, SequenceFull};
use crate::traits::{ButtonListener, EntropySource, LedError, LedPin};
use crate::types::{RoundOutcome, TurnOutcome};

/// Simon-Spiel über einer festen Geräteliste
///
/// # Generische Parameter
/// - `P`: LED-Ausgang der LedButtons
/// - `D`: Async-Delay für alle zeitgesteuerten Phasen
/// - `E`: Entropiequelle zum Neu-Seeden pro Runde
/// - `R`: Zufallsgenerator (Standard: `SmallRng`)
pub struct SimonGame<'a, P, D, E, R = SmallRng> {
    buttons: &'a [LedButton<'a, P>],
    turn: &'a PlayerTurn,
    sequence: Sequence,
    rng: R,
    entropy: E,
    delay: D,
    timing: GameTiming,
}

impl<'a, P, D, E, R> SimonGame<'a, P, D, E, R>
where
    P: LedPin,
    D: DelayNs,
    E: EntropySource,
    R: RngCore + SeedableRng,
{
    /// Erstellt das Spiel
    ///
    /// # Fehlerbehandlung
    /// Gibt `ConfigError` zurück bei leerer oder zu großer Geräteliste,
    /// wenn ein LedButton nicht an seiner Slot-Position steht oder
    /// die Zeitparameter ungültig sind.
    pub fn new(
        buttons: &'a [LedButton<'a, P>],
        turn: &'a PlayerTurn,
        entropy: E,
        delay: D,
        timing: GameTiming,
    ) -> Result<Self, ConfigError> {
        if buttons.is_empty() {
            return Err(ConfigError::NoButtons);
        }
        if buttons.len() > MAX_BUTTONS {
            return Err(ConfigError::TooManyButtons {
                count: buttons.len(),
            });
        }
        if let Some((index, button)) = buttons
            .iter()
            .enumerate()
            .find(|(index, button)| button.slot() != *index)
        {
            return Err(ConfigError::SlotMismatch {
                index,
                slot: button.slot(),
            });
        }
        timing.validate()?;

        Ok(Self {
            buttons,
            turn,
            sequence: Sequence::new(),
            // Wird vor jeder Auswahl aus der Entropiequelle neu geseedet
            rng: R::seed_from_u64(0),
            entropy,
            delay,
            timing,
        })
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn buttons(&self) -> &'a [LedButton<'a, P>] {
        self.buttons
    }

    pub fn timing(&self) -> &GameTiming {
        &self.timing
    }

    /// Hauptschleife: Boot-Animation, danach Runde um Runde
    ///
    /// Kehrt nur bei einem Hardware-Fehler zurück.
    pub async fn run(&mut self) -> Result<Infallible, LedError> {
        info!("Simon startet mit {} LedButtons", self.buttons.len());
        self.start_over().await?;

        loop {
            let outcome = self.play_round().await?;
            debug!("Runde beendet: {}", outcome);
        }
    }

    /// Eine komplette Runde: erweitern, vorspielen, nachspielen lassen
    ///
    /// Nach einer Niederlage (oder der maximalen Sequenzlänge) läuft
    /// `start_over()`. Danach folgt immer die Rundenpause.
    pub async fn play_round(&mut self) -> Result<RoundOutcome, LedError> {
        let outcome = match self.advance_sequence() {
            Err(SequenceFull) => {
                info!(
                    "Alle {} Schritte geschafft, Spiel gewonnen!",
                    self.sequence.len()
                );
                self.start_over().await?;
                RoundOutcome::Won
            }
            Ok(slot) => {
                let length = self.sequence.len();
                info!("Runde {}: neuer Schritt Slot {}", length, slot);

                self.show_sequence().await?;
                match self.play_turn().await {
                    TurnOutcome::Completed => RoundOutcome::Continued { length },
                    TurnOutcome::Lost => {
                        warn!("Falsche Taste in Runde {}, Neustart", length);
                        self.start_over().await?;
                        RoundOutcome::Lost { length }
                    }
                }
            }
        };

        self.delay.delay_ms(self.timing.round_pause_ms).await;
        Ok(outcome)
    }

    /// Boot-Animation abspielen, danach Sequenz leeren und LEDs aus
    pub async fn start_over(&mut self) -> Result<(), LedError> {
        debug!("Neustart mit Boot-Animation");
        self.boot_sequence().await?;

        self.reset_leds()?;
        self.sequence.clear();
        Ok(())
    }

    /// Boot-Animation: Lauflicht über alle LEDs, Pause, gemeinsames Blinken
    pub async fn boot_sequence(&mut self) -> Result<(), LedError> {
        self.reset_leds()?;

        for _ in 0..self.timing.boot_flash_rounds {
            for button in self.buttons {
                button.led_on()?;
                self.delay.delay_ms(self.timing.boot_flash_ms).await;
                button.led_off()?;
            }
        }

        self.delay.delay_ms(self.timing.boot_pause_ms).await;

        for _ in 0..self.timing.boot_toggle_count {
            for button in self.buttons {
                button.toggle_led()?;
            }
            self.delay.delay_ms(self.timing.boot_toggle_ms).await;
        }

        Ok(())
    }

    /// Seedet den Generator neu und hängt einen zufälligen Slot an
    ///
    /// Auswahl gleichverteilt über alle LedButtons, mit Zurücklegen.
    pub fn advance_sequence(&mut self) -> Result<usize, SequenceFull> {
        let seed = u64::from(self.entropy.next_u32()) << 32 | u64::from(self.entropy.next_u32());
        self.rng = R::seed_from_u64(seed);

        let slot = self.rng.gen_range(0..self.buttons.len());
        self.sequence.push(slot)?;
        Ok(slot)
    }

    /// Spielt die Sequenz streng nacheinander auf den LEDs ab
    pub async fn show_sequence(&mut self) -> Result<(), LedError> {
        self.reset_leds()?;

        let on_ms = self.timing.speed_ms / 2;
        for slot in self.sequence.iter() {
            let button = &self.buttons[slot];
            button.led_on()?;
            self.delay.delay_ms(on_ms).await;
            button.led_off()?;
            self.delay.delay_ms(self.timing.speed_ms).await;
        }

        Ok(())
    }

    /// Player-Turn: wartet auf Release-Flanken bis Fehler oder Sequenzende
    ///
    /// Pro Warte-Zyklus wird genau ein Zug abgeholt. Es gibt kein Timeout,
    /// das Spiel wartet beliebig lange auf den nächsten Tastendruck.
    pub async fn play_turn(&mut self) -> TurnOutcome {
        self.turn.begin(&self.sequence);

        let listener: &'a dyn ButtonListener = self.turn;
        for button in self.buttons {
            button.on_released(Some(listener));
        }

        while !self.turn.is_lost() && self.turn.expected().is_some() {
            let outcome = self.turn.wait_for_move().await;
            debug!("Zug: {}", outcome);
        }

        for button in self.buttons {
            button.on_released(None);
        }
        self.turn.finish();

        if self.turn.is_lost() {
            TurnOutcome::Lost
        } else {
            TurnOutcome::Completed
        }
    }

    fn reset_leds(&self) -> Result<(), LedError> {
        for button in self.buttons {
            button.led_off()?;
        }
        Ok(())
    }
}
