//! Eingabe-Abgleich während der Player-Turn Phase
//!
//! `PlayerTurn` wird als Release-Listener bei allen LedButtons registriert.
//! Jede Release-Flanke wird synchron gegen das nächste erwartete Element
//! geprüft. Das Ergebnis landet in einem einzelnen Pending-Slot und weckt
//! den Spiel-Task über ein `Signal`.
//!
//! Solange ein Zug noch nicht vom Spiel-Task abgeholt wurde, werden weitere
//! Flanken verworfen. So sieht die Spielschleife genau ein Ereignis pro
//! Warte-Zyklus, ohne dass Input-Tasks jemals blockieren.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::sequence::Sequence;
use crate::traits::ButtonListener;
use crate::types::MoveOutcome;

struct TurnState {
    expected: Sequence,
    cursor: usize,
    lost: bool,
    active: bool,
    pending: Option<MoveOutcome>,
}

impl TurnState {
    const fn new() -> Self {
        Self {
            expected: Sequence::new(),
            cursor: 0,
            lost: false,
            active: false,
            pending: None,
        }
    }
}

pub struct PlayerTurn {
    state: Mutex<CriticalSectionRawMutex, RefCell<TurnState>>,
    next_move: Signal<CriticalSectionRawMutex, ()>,
}

impl PlayerTurn {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(TurnState::new())),
            next_move: Signal::new(),
        }
    }

    /// Startet einen Spielerzug für `sequence`, Cursor auf dem ersten Element
    pub fn begin(&self, sequence: &Sequence) {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            state.expected.clone_from(sequence);
            state.cursor = 0;
            state.lost = false;
            state.pending = None;
            state.active = true;
        });
        self.next_move.reset();
    }

    /// Beendet den Spielerzug, spätere Flanken werden ignoriert
    pub fn finish(&self) {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            state.active = false;
            state.pending = None;
        });
    }

    /// Prüft eine Release-Flanke gegen das erwartete Element
    ///
    /// Gibt `None` zurück, wenn die Flanke verworfen wurde: kein aktiver
    /// Zug, Runde bereits verloren, Sequenz schon komplett oder ein
    /// vorheriger Zug noch nicht abgeholt.
    pub fn record_release(&self, slot: usize) -> Option<MoveOutcome> {
        let outcome = self.state.lock(|state| {
            let mut state = state.borrow_mut();
            if !state.active || state.lost || state.pending.is_some() {
                return None;
            }

            let position = state.cursor;
            let expected = state.expected.get(position)?;
            let outcome = if slot == expected {
                state.cursor += 1;
                if state.cursor == state.expected.len() {
                    MoveOutcome::Completed
                } else {
                    MoveOutcome::Matched { position }
                }
            } else {
                // Cursor bleibt stehen
                state.lost = true;
                MoveOutcome::Mismatch {
                    position,
                    expected,
                    actual: slot,
                }
            };

            state.pending = Some(outcome);
            Some(outcome)
        })?;

        self.next_move.signal(());
        Some(outcome)
    }

    /// Wartet auf den nächsten Zug und gibt den Pending-Slot wieder frei
    pub async fn wait_for_move(&self) -> MoveOutcome {
        loop {
            if let Some(outcome) = self.take_pending() {
                return outcome;
            }
            self.next_move.wait().await;
        }
    }

    fn take_pending(&self) -> Option<MoveOutcome> {
        self.state.lock(|state| state.borrow_mut().pending.take())
    }

    /// Nächster erwarteter Slot, `None` wenn die Sequenz abgearbeitet ist
    pub fn expected(&self) -> Option<usize> {
        self.state.lock(|state| {
            let state = state.borrow();
            state.expected.get(state.cursor)
        })
    }

    /// Anzahl bereits richtig nachgespielter Elemente
    pub fn position(&self) -> usize {
        self.state.lock(|state| state.borrow().cursor)
    }

    pub fn is_lost(&self) -> bool {
        self.state.lock(|state| state.borrow().lost)
    }

    pub fn is_active(&self) -> bool {
        self.state.lock(|state| state.borrow().active)
    }

    pub fn has_pending_move(&self) -> bool {
        self.state.lock(|state| state.borrow().pending.is_some())
    }
}

impl Default for PlayerTurn {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonListener for PlayerTurn {
    fn notify(&self, slot: usize) {
        if self.record_release(slot).is_none() {
            debug!("Release von Slot {} verworfen", slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence_of(slots: &[usize]) -> Sequence {
        let mut sequence = Sequence::new();
        for &slot in slots {
            sequence.push(slot).unwrap();
        }
        sequence
    }

    #[test]
    fn test_matching_releases_exhaust_cursor() {
        let turn = PlayerTurn::new();
        turn.begin(&sequence_of(&[0, 2, 2]));

        assert_eq!(turn.record_release(0), Some(MoveOutcome::Matched { position: 0 }));
        assert_eq!(turn.take_pending(), Some(MoveOutcome::Matched { position: 0 }));
        assert_eq!(turn.record_release(2), Some(MoveOutcome::Matched { position: 1 }));
        turn.take_pending();
        assert_eq!(turn.record_release(2), Some(MoveOutcome::Completed));
        turn.take_pending();

        assert!(!turn.is_lost());
        assert_eq!(turn.expected(), None);
        assert_eq!(turn.position(), 3);
    }

    #[test]
    fn test_mismatch_halts_cursor() {
        let turn = PlayerTurn::new();
        turn.begin(&sequence_of(&[1, 0]));

        turn.record_release(1);
        turn.take_pending();
        assert_eq!(
            turn.record_release(2),
            Some(MoveOutcome::Mismatch {
                position: 1,
                expected: 0,
                actual: 2
            })
        );
        turn.take_pending();

        assert!(turn.is_lost());
        assert_eq!(turn.position(), 1);
        assert_eq!(turn.expected(), Some(0));

        // Nach dem Verlieren bewegt sich nichts mehr
        assert_eq!(turn.record_release(0), None);
        assert_eq!(turn.position(), 1);
    }

    #[test]
    fn test_release_while_pending_is_dropped() {
        let turn = PlayerTurn::new();
        turn.begin(&sequence_of(&[1, 1, 1]));

        assert!(turn.record_release(1).is_some());
        assert!(turn.has_pending_move());
        assert_eq!(turn.record_release(1), None);
        assert_eq!(turn.record_release(0), None);

        assert_eq!(turn.position(), 1);
        assert!(!turn.is_lost());
    }

    #[test]
    fn test_inactive_turn_ignores_releases() {
        let turn = PlayerTurn::new();
        assert_eq!(turn.record_release(0), None);

        turn.begin(&sequence_of(&[0]));
        turn.finish();
        assert_eq!(turn.record_release(0), None);
        assert!(!turn.is_active());
    }

    #[test]
    fn test_begin_resets_previous_turn() {
        let turn = PlayerTurn::new();
        turn.begin(&sequence_of(&[0]));
        turn.record_release(1);
        assert!(turn.is_lost());

        turn.begin(&sequence_of(&[2, 1]));
        assert!(!turn.is_lost());
        assert!(!turn.has_pending_move());
        assert_eq!(turn.expected(), Some(2));
    }

    #[test]
    fn test_wait_for_move_consumes_pending() {
        let turn = PlayerTurn::new();
        turn.begin(&sequence_of(&[0, 1]));
        turn.notify(0);

        let outcome = embassy_futures::block_on(turn.wait_for_move());
        assert_eq!(outcome, MoveOutcome::Matched { position: 0 });
        assert!(!turn.has_pending_move());

        // Slot wieder frei: nächster Release wird angenommen
        assert_eq!(turn.record_release(1), Some(MoveOutcome::Completed));
    }
}
