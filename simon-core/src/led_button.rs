//! LedButton - eine LED/Taster-Einheit
//!
//! Besitzt den LED-Ausgang exklusiv und hält je einen optionalen
//! Listener für Press- und Release-Flanken. Alle Methoden nehmen `&self`,
//! damit Spiel-Task und Input-Tasks dieselbe Geräteliste teilen können.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::traits::{ButtonInput, ButtonListener, LedError, LedPin};
use crate::types::ButtonEdge;

/// Einzelner Listener-Slot: Registrieren ersetzt, `None` meldet ab
type ListenerSlot<'a> = Mutex<CriticalSectionRawMutex, Cell<Option<&'a dyn ButtonListener>>>;

pub struct LedButton<'a, P> {
    slot: usize,
    led: Mutex<CriticalSectionRawMutex, RefCell<P>>,
    on_pressed: ListenerSlot<'a>,
    on_released: ListenerSlot<'a>,
}

impl<'a, P: LedPin> LedButton<'a, P> {
    /// Erstellt eine LedButton für Position `slot` der Geräteliste
    pub fn new(slot: usize, led: P) -> Self {
        Self {
            slot,
            led: Mutex::new(RefCell::new(led)),
            on_pressed: Mutex::new(Cell::new(None)),
            on_released: Mutex::new(Cell::new(None)),
        }
    }

    /// Baut eine Geräteliste: Slot = Position in `leds`
    pub fn numbered<const N: usize>(leds: [P; N]) -> [Self; N] {
        let mut slot = 0;
        leds.map(|led| {
            let button = Self::new(slot, led);
            slot += 1;
            button
        })
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn led_on(&self) -> Result<(), LedError> {
        self.led.lock(|led| led.borrow_mut().set_on())
    }

    pub fn led_off(&self) -> Result<(), LedError> {
        self.led.lock(|led| led.borrow_mut().set_off())
    }

    pub fn toggle_led(&self) -> Result<(), LedError> {
        self.led.lock(|led| led.borrow_mut().toggle())
    }

    pub fn is_lit(&self) -> bool {
        self.led.lock(|led| led.borrow().is_on())
    }

    /// Ersetzt den Press-Listener (`None` meldet ab)
    pub fn on_pressed(&self, listener: Option<&'a dyn ButtonListener>) {
        self.on_pressed.lock(|slot| slot.set(listener));
    }

    /// Ersetzt den Release-Listener (`None` meldet ab)
    pub fn on_released(&self, listener: Option<&'a dyn ButtonListener>) {
        self.on_released.lock(|slot| slot.set(listener));
    }

    pub fn has_release_listener(&self) -> bool {
        self.on_released.lock(|slot| slot.get().is_some())
    }

    /// Taster gedrückt: LED an, dann Press-Listener benachrichtigen
    pub fn handle_pressed(&self) -> Result<(), LedError> {
        self.led_on()?;

        // Listener außerhalb des Locks aufrufen
        if let Some(listener) = self.on_pressed.lock(|slot| slot.get()) {
            listener.notify(self.slot);
        }
        Ok(())
    }

    /// Taster losgelassen: LED aus, dann Release-Listener benachrichtigen
    pub fn handle_released(&self) -> Result<(), LedError> {
        self.led_off()?;

        if let Some(listener) = self.on_released.lock(|slot| slot.get()) {
            listener.notify(self.slot);
        }
        Ok(())
    }

    pub fn handle_edge(&self, edge: ButtonEdge) -> Result<(), LedError> {
        match edge {
            ButtonEdge::Pressed => self.handle_pressed(),
            ButtonEdge::Released => self.handle_released(),
        }
    }

    /// Verarbeitet endlos die Flanken eines entprellten Tasters
    ///
    /// Kehrt nur zurück, wenn ein LED-Schreibzugriff fehlschlägt.
    pub async fn listen<B: ButtonInput>(&self, input: &mut B) -> Result<Infallible, LedError> {
        loop {
            let edge = input.wait_for_edge().await;
            debug!("Slot {}: {}", self.slot, edge);
            self.handle_edge(edge)?;
        }
    }
}
