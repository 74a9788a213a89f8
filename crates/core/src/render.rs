use crate::{BuilderState, CardRecord, Deck, Event, EventBus};

/// What a surface must provide. The core never draws; it calls these with
/// plain state and the surface decides how to show it.
pub trait Renderer {
    fn render_deck(&mut self, deck: &Deck);
    fn render_card_picker(&mut self, cost: &str, cards: &[CardRecord]);
    fn notify(&mut self, message: &str);
}

/// Drains pending events and translates them into renderer calls. Deck
/// mutations collapse into a single deck render per drain; notifications
/// keep their order.
pub fn present(state: &BuilderState, events: &mut EventBus, renderer: &mut dyn Renderer) {
    let mut deck_dirty = false;
    let mut picker_cost: Option<String> = None;
    let mut notices: Vec<String> = Vec::new();
    for event in events.drain() {
        match event {
            Event::CardAdded { .. }
            | Event::SlotCycled { .. }
            | Event::EvolutionToggled { .. }
            | Event::UndoApplied { .. } => deck_dirty = true,
            Event::CardEvicted { name } => {
                deck_dirty = true;
                notices.push(format!("{} left the deck", name));
            }
            Event::PickerSelected { cost } => picker_cost = Some(cost),
            Event::MatchMissed { spoken } => {
                notices.push(format!("no card found for \"{}\"", spoken));
            }
        }
    }
    if let Some(cost) = picker_cost {
        let cards = state.catalog.cards_for_cost(&cost).unwrap_or(&[]);
        renderer.render_card_picker(&cost, cards);
    }
    if deck_dirty {
        renderer.render_deck(&state.deck);
    }
    for message in &notices {
        renderer.notify(message);
    }
}
