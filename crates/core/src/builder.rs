use crate::{
    find_best_match, interpret, CardRecord, Catalog, Deck, Event, EventBus, History, SlotCard,
    VoiceCommand, DECK_SLOTS,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("slot {0} out of range")]
    SlotOutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Placed in the last slot; `evicted` is set when slot 0 had to make
    /// room.
    Added { evicted: bool },
    /// The name was already in the deck, so its slot was cycled instead.
    Bumped { from: usize },
}

/// All mutable widget state: the deck under construction, its undo history
/// and the transient picker selection. The catalog is owned here too but
/// never changes after construction.
///
/// Every mutating operation snapshots the deck before touching it, emits
/// events describing the change, and keeps the slot count fixed. Undo is
/// the one exception: it consumes history instead of growing it.
#[derive(Debug, Default)]
pub struct BuilderState {
    pub catalog: Catalog,
    pub deck: Deck,
    pub history: History,
    pub selected_cost: Option<String>,
}

impl BuilderState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            deck: Deck::new(),
            history: History::default(),
            selected_cost: None,
        }
    }

    /// Adds a card to the deck, or cycles its slot if a card with the same
    /// name is already present. Both branches record history; re-adding the
    /// card in the last slot is a deliberate no-visible-change mutation.
    pub fn insert_or_bump(&mut self, card: &CardRecord, events: &mut EventBus) -> InsertOutcome {
        if let Some(position) = self.deck.position_of(&card.name) {
            let name = card.name.clone();
            let snapshot = self.deck.clone();
            self.deck.cycle_to_back(position);
            self.history.push(snapshot);
            events.push(Event::SlotCycled {
                name,
                from: position,
            });
            return InsertOutcome::Bumped { from: position };
        }
        let snapshot = self.deck.clone();
        let evicted = self.deck.push_back_evicting(SlotCard::new(card.clone()));
        self.history.push(snapshot);
        if let Some(gone) = &evicted {
            events.push(Event::CardEvicted {
                name: gone.card.name.clone(),
            });
        }
        events.push(Event::CardAdded {
            name: card.name.clone(),
            slot: DECK_SLOTS - 1,
        });
        InsertOutcome::Added {
            evicted: evicted.is_some(),
        }
    }

    /// Cycles the card at `position` to the last slot. Clicking an empty
    /// slot changes nothing and records nothing.
    pub fn cycle_slot(
        &mut self,
        position: usize,
        events: &mut EventBus,
    ) -> Result<bool, BuildError> {
        if position >= DECK_SLOTS {
            return Err(BuildError::SlotOutOfRange(position));
        }
        let Some(held) = self.deck.get(position) else {
            return Ok(false);
        };
        let name = held.card.name.clone();
        let snapshot = self.deck.clone();
        if !self.deck.cycle_to_back(position) {
            return Ok(false);
        }
        self.history.push(snapshot);
        events.push(Event::SlotCycled {
            name,
            from: position,
        });
        Ok(true)
    }

    /// Flips the evolution flag on an occupied slot. Empty slots are a
    /// silent no-op, same as cycling.
    pub fn toggle_evolution(
        &mut self,
        position: usize,
        events: &mut EventBus,
    ) -> Result<bool, BuildError> {
        if position >= DECK_SLOTS {
            return Err(BuildError::SlotOutOfRange(position));
        }
        let Some(held) = self.deck.get(position) else {
            return Ok(false);
        };
        let name = held.card.name.clone();
        let snapshot = self.deck.clone();
        let Some(evo) = self.deck.toggle_evo(position) else {
            return Ok(false);
        };
        self.history.push(snapshot);
        events.push(Event::EvolutionToggled { name, evo });
        Ok(true)
    }

    /// Restores the most recent snapshot wholesale. Undoing is itself not
    /// undoable, so nothing is recorded here.
    pub fn undo(&mut self, events: &mut EventBus) -> bool {
        let Some(deck) = self.history.pop() else {
            return false;
        };
        self.deck = deck;
        events.push(Event::UndoApplied {
            remaining: self.history.len(),
        });
        true
    }

    /// Picker selection is transient view state and deliberately outside
    /// the undo history.
    pub fn select_cost(&mut self, cost: &str, events: &mut EventBus) -> bool {
        if self.catalog.cards_for_cost(cost).is_none() {
            return false;
        }
        self.selected_cost = Some(cost.to_string());
        events.push(Event::PickerSelected {
            cost: cost.to_string(),
        });
        true
    }

    /// Runs one recognized transcript through the command grammar and, for
    /// add commands, the matcher. Unrecognized transcripts never reach the
    /// matcher and never touch the deck.
    pub fn handle_transcript(
        &mut self,
        transcript: &str,
        events: &mut EventBus,
    ) -> Option<InsertOutcome> {
        self.apply_command(interpret(transcript), events)
    }

    pub fn apply_command(
        &mut self,
        command: VoiceCommand,
        events: &mut EventBus,
    ) -> Option<InsertOutcome> {
        match command {
            VoiceCommand::AddCard(spoken) => {
                let Some(card) = find_best_match(&spoken, &self.catalog).cloned() else {
                    events.push(Event::MatchMissed { spoken });
                    return None;
                };
                Some(self.insert_or_bump(&card, events))
            }
            VoiceCommand::Unrecognized => None,
        }
    }
}
