use crate::{BuildError, BuilderState, CardRecord, EventBus};
use serde::{Deserialize, Serialize};

/// Everything a surface can do to the widget, expressed as data so any
/// toolkit or headless harness can drive the same state machine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Gesture {
    ElixirSelected(String),
    CardChosen(CardRecord),
    SlotClicked(usize),
    EvolutionDropped(usize),
    UndoRequested,
    VoiceTranscript(String),
}

impl BuilderState {
    pub fn apply_gesture(
        &mut self,
        gesture: Gesture,
        events: &mut EventBus,
    ) -> Result<(), BuildError> {
        match gesture {
            Gesture::ElixirSelected(cost) => {
                self.select_cost(&cost, events);
            }
            Gesture::CardChosen(card) => {
                self.insert_or_bump(&card, events);
            }
            Gesture::SlotClicked(position) => {
                self.cycle_slot(position, events)?;
            }
            Gesture::EvolutionDropped(position) => {
                self.toggle_evolution(position, events)?;
            }
            Gesture::UndoRequested => {
                self.undo(events);
            }
            Gesture::VoiceTranscript(text) => {
                self.handle_transcript(&text, events);
            }
        }
        Ok(())
    }
}
