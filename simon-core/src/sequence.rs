//! Zielsequenz des Spiels
//!
//! Speichert Slot-Indizes in die gemeinsame Geräteliste, keine LedButtons
//! selbst. Wächst pro Runde um genau ein Element, wird nur komplett geleert.

use heapless::Vec;

use crate::config::MAX_SEQUENCE_LEN;

/// Sequenz hat `MAX_SEQUENCE_LEN` erreicht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceFull;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    slots: Vec<usize, MAX_SEQUENCE_LEN>,
}

impl Sequence {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Hängt einen Slot an (Wiederholungen sind erlaubt)
    pub fn push(&mut self, slot: usize) -> Result<(), SequenceFull> {
        self.slots.push(slot).map_err(|_| SequenceFull)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, position: usize) -> Option<usize> {
        self.slots.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    /// `true` wenn `prefix` ein Anfangsstück dieser Sequenz ist
    pub fn starts_with(&self, prefix: &Sequence) -> bool {
        self.slots.starts_with(&prefix.slots)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sequence {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_repeats() {
        let mut sequence = Sequence::new();
        sequence.push(2).unwrap();
        sequence.push(0).unwrap();
        sequence.push(2).unwrap();

        assert_eq!(sequence.as_slice(), &[2, 0, 2]);
        assert_eq!(sequence.get(1), Some(0));
        assert_eq!(sequence.get(3), None);
    }

    #[test]
    fn test_push_fails_when_full() {
        let mut sequence = Sequence::new();
        for slot in 0..MAX_SEQUENCE_LEN {
            sequence.push(slot % 3).unwrap();
        }

        assert!(sequence.is_full());
        assert_eq!(sequence.push(1), Err(SequenceFull));
        assert_eq!(sequence.len(), MAX_SEQUENCE_LEN);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut sequence = Sequence::new();
        sequence.push(1).unwrap();
        sequence.clear();

        assert!(sequence.is_empty());
        assert_eq!(sequence.iter().count(), 0);
    }

    #[test]
    fn test_starts_with() {
        let mut short = Sequence::new();
        short.push(1).unwrap();
        let mut long = short.clone();
        long.push(0).unwrap();

        assert!(long.starts_with(&short));
        assert!(!short.starts_with(&long));

        let mut other = Sequence::new();
        other.push(2).unwrap();
        assert!(!long.starts_with(&other));
    }
}
