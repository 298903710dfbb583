//! Gemeinsame Mocks und Helfer für die Host-Tests
//!
//! Diese Tests laufen auf dem Host (x86_64) und ersetzen LEDs, Taster,
//! Entropie und Delays durch In-Memory Mocks.

#![allow(dead_code)] // Nicht jede Test-Datei nutzt jeden Helfer

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;
use simon_core::{
    ButtonEdge, ButtonInput, EntropySource, GameTiming, LedButton, LedError, LedPin, PlayerTurn,
    SimonGame,
};

pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;

pub type TestGame<'a> = SimonGame<'a, MockLed, MockDelay, CountingEntropy>;

// ============================================================================
// Mock LED
// ============================================================================

/// Ein Schreibzugriff auf eine LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedWrite {
    pub slot: usize,
    pub on: bool,
}

/// Gemeinsames Protokoll aller LED-Schreibzugriffe
pub type LedLog = Arc<Mutex<Vec<LedWrite>>>;

pub struct MockLed {
    slot: usize,
    on: bool,
    log: LedLog,
    /// Simuliere Fehler bei jedem Schreibzugriff
    pub fail_writes: bool,
}

impl MockLed {
    pub fn new(slot: usize, log: &LedLog) -> Self {
        Self {
            slot,
            on: false,
            log: Arc::clone(log),
            fail_writes: false,
        }
    }

    pub fn failing(slot: usize, log: &LedLog) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(slot, log)
        }
    }

    fn write(&mut self, on: bool) -> Result<(), LedError> {
        if self.fail_writes {
            return Err(LedError::WriteFailed);
        }

        self.on = on;
        self.log.lock().unwrap().push(LedWrite {
            slot: self.slot,
            on,
        });
        Ok(())
    }
}

impl LedPin for MockLed {
    fn set_on(&mut self) -> Result<(), LedError> {
        self.write(true)
    }

    fn set_off(&mut self) -> Result<(), LedError> {
        self.write(false)
    }

    fn toggle(&mut self) -> Result<(), LedError> {
        self.write(!self.on)
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay ohne Wartezeit, protokolliert die angeforderten Millisekunden
#[derive(Clone, Default)]
pub struct MockDelay {
    pub log: Arc<Mutex<Vec<u32>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<u32> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.lock().unwrap().push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.lock().unwrap().push(ms);
    }
}

// ============================================================================
// Mock Entropie
// ============================================================================

/// Deterministische Entropie: zählt ab einem Startwert hoch
pub struct CountingEntropy {
    next: u32,
}

impl CountingEntropy {
    pub fn new(start: u32) -> Self {
        Self { next: start }
    }
}

impl EntropySource for CountingEntropy {
    fn next_u32(&mut self) -> u32 {
        let value = self.next;
        self.next = self.next.wrapping_add(1);
        value
    }
}

/// Liefert immer denselben Wert
pub struct ConstantEntropy(pub u32);

impl EntropySource for ConstantEntropy {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

// ============================================================================
// Mock Taster
// ============================================================================

/// Taster mit vorbereiteten Flanken; danach wartet er für immer
pub struct ScriptedButton {
    edges: VecDeque<ButtonEdge>,
}

impl ScriptedButton {
    pub fn new(edges: &[ButtonEdge]) -> Self {
        Self {
            edges: edges.iter().copied().collect(),
        }
    }
}

impl ButtonInput for ScriptedButton {
    async fn wait_for_edge(&mut self) -> ButtonEdge {
        match self.edges.pop_front() {
            Some(edge) => edge,
            None => core::future::pending().await,
        }
    }
}

// ============================================================================
// Aufbau
// ============================================================================

pub fn mock_buttons<'a>(log: &LedLog) -> [LedButton<'a, MockLed>; 3] {
    LedButton::numbered([RED, GREEN, BLUE].map(|slot| MockLed::new(slot, log)))
}

pub fn new_game<'a>(
    buttons: &'a [LedButton<'a, MockLed>],
    turn: &'a PlayerTurn,
    delay: &MockDelay,
) -> TestGame<'a> {
    SimonGame::new(
        buttons,
        turn,
        CountingEntropy::new(7),
        delay.clone(),
        GameTiming::default(),
    )
    .unwrap()
}

// ============================================================================
// Spieler-Simulation
// ============================================================================

pub async fn wait_for_turn(turn: &PlayerTurn) {
    while !turn.is_active() {
        yield_now().await;
    }
}

pub async fn wait_until_consumed(turn: &PlayerTurn) {
    while turn.has_pending_move() {
        yield_now().await;
    }
}

pub fn press_and_release(button: &LedButton<'_, MockLed>) {
    button.handle_pressed().unwrap();
    button.handle_released().unwrap();
}

/// Spielt die erwartete Sequenz fehlerfrei nach
pub async fn echo_sequence(turn: &PlayerTurn, buttons: &[LedButton<'_, MockLed>]) {
    wait_for_turn(turn).await;
    while let Some(slot) = turn.expected() {
        press_and_release(&buttons[slot]);
        wait_until_consumed(turn).await;
    }
}

/// Spielt `correct` Schritte richtig, danach eine falsche Taste
pub async fn fail_at(turn: &PlayerTurn, buttons: &[LedButton<'_, MockLed>], correct: usize) {
    wait_for_turn(turn).await;
    for _ in 0..correct {
        let slot = turn.expected().unwrap();
        press_and_release(&buttons[slot]);
        wait_until_consumed(turn).await;
    }

    let expected = turn.expected().unwrap();
    press_and_release(&buttons[(expected + 1) % buttons.len()]);
    wait_until_consumed(turn).await;
}
