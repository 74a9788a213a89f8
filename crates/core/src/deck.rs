use crate::SlotCard;

pub const DECK_SLOTS: usize = 8;

/// The deck is a fixed array of slots, so its length cannot drift. Slot
/// order matters: position 0 is next in line for eviction, the last
/// position is where new and cycled cards land.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slots: [Option<SlotCard>; DECK_SLOTS],
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<SlotCard>] {
        &self.slots
    }

    pub fn get(&self, position: usize) -> Option<&SlotCard> {
        self.slots.get(position).and_then(|slot| slot.as_ref())
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .map(|held| held.card.name.eq_ignore_ascii_case(name))
                .unwrap_or(false)
        })
    }

    /// Drops whatever sits in slot 0, shifts everything left and places
    /// `card` in the freed last slot. Returns the evicted occupant.
    pub fn push_back_evicting(&mut self, card: SlotCard) -> Option<SlotCard> {
        let evicted = self.slots[0].take();
        self.slots.rotate_left(1);
        self.slots[DECK_SLOTS - 1] = Some(card);
        evicted
    }

    /// Moves the occupant of `position` to the last slot, shifting the
    /// slots behind it left by one. Empty or out-of-range positions leave
    /// the deck untouched.
    pub fn cycle_to_back(&mut self, position: usize) -> bool {
        match self.slots.get(position) {
            Some(Some(_)) => {}
            _ => return false,
        }
        self.slots[position..].rotate_left(1);
        true
    }

    /// Flips the evolution flag on an occupied slot and returns the new
    /// value.
    pub fn toggle_evo(&mut self, position: usize) -> Option<bool> {
        match self.slots.get_mut(position) {
            Some(Some(held)) => {
                held.evo = !held.evo;
                Some(held.evo)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardRecord;

    fn slot(name: &str) -> SlotCard {
        SlotCard::new(CardRecord::new(name, "https://cards.test/card.png"))
    }

    fn names(deck: &Deck) -> Vec<Option<&str>> {
        deck.slots()
            .iter()
            .map(|slot| slot.as_ref().map(|held| held.name()))
            .collect()
    }

    #[test]
    fn deck_always_has_eight_slots() {
        let mut deck = Deck::new();
        assert_eq!(deck.slots().len(), DECK_SLOTS);
        for index in 0..20 {
            deck.push_back_evicting(slot(&format!("Card {}", index)));
            assert_eq!(deck.slots().len(), DECK_SLOTS);
        }
    }

    #[test]
    fn push_fills_from_the_back() {
        let mut deck = Deck::new();
        deck.push_back_evicting(slot("Knight"));
        deck.push_back_evicting(slot("Archers"));
        assert_eq!(deck.get(6).map(SlotCard::name), Some("Knight"));
        assert_eq!(deck.get(7).map(SlotCard::name), Some("Archers"));
        assert_eq!(deck.occupied(), 2);
    }

    #[test]
    fn push_on_full_deck_evicts_slot_zero() {
        let mut deck = Deck::new();
        for index in 0..DECK_SLOTS {
            deck.push_back_evicting(slot(&format!("Card {}", index)));
        }
        let evicted = deck.push_back_evicting(slot("Newcomer"));
        assert_eq!(evicted.map(|held| held.card.name), Some("Card 0".to_string()));
        assert_eq!(deck.get(0).map(SlotCard::name), Some("Card 1"));
        assert_eq!(deck.get(7).map(SlotCard::name), Some("Newcomer"));
        assert_eq!(deck.occupied(), DECK_SLOTS);
    }

    #[test]
    fn cycle_moves_card_to_back_and_preserves_evo() {
        let mut deck = Deck::new();
        deck.push_back_evicting(slot("Knight"));
        deck.push_back_evicting(slot("Archers"));
        deck.push_back_evicting(slot("Giant"));
        deck.toggle_evo(5);
        assert!(deck.cycle_to_back(5));
        assert_eq!(
            names(&deck),
            vec![None, None, None, None, None, Some("Archers"), Some("Giant"), Some("Knight")]
        );
        let knight = deck.get(7).expect("cycled card");
        assert!(knight.evo);
    }

    #[test]
    fn cycle_last_slot_is_a_visible_noop() {
        let mut deck = Deck::new();
        deck.push_back_evicting(slot("Knight"));
        let before = deck.clone();
        assert!(deck.cycle_to_back(DECK_SLOTS - 1));
        assert_eq!(deck, before);
    }

    #[test]
    fn cycle_rejects_empty_and_out_of_range() {
        let mut deck = Deck::new();
        deck.push_back_evicting(slot("Knight"));
        let before = deck.clone();
        assert!(!deck.cycle_to_back(2));
        assert!(!deck.cycle_to_back(DECK_SLOTS));
        assert_eq!(deck, before);
    }

    #[test]
    fn position_lookup_ignores_case() {
        let mut deck = Deck::new();
        deck.push_back_evicting(slot("Mega Knight"));
        assert_eq!(deck.position_of("mega knight"), Some(DECK_SLOTS - 1));
        assert_eq!(deck.position_of("Knight"), None);
    }

    #[test]
    fn toggle_flips_only_occupied_slots() {
        let mut deck = Deck::new();
        deck.push_back_evicting(slot("Witch"));
        assert_eq!(deck.toggle_evo(7), Some(true));
        assert_eq!(deck.toggle_evo(7), Some(false));
        assert_eq!(deck.toggle_evo(0), None);
        assert_eq!(deck.toggle_evo(DECK_SLOTS), None);
    }
}
