use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardAdded { name: String, slot: usize },
    CardEvicted { name: String },
    SlotCycled { name: String, from: usize },
    EvolutionToggled { name: String, evo: bool },
    UndoApplied { remaining: usize },
    PickerSelected { cost: String },
    MatchMissed { spoken: String },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
