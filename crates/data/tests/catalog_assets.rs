use deckforge_core::{BuilderState, Event, EventBus, Gesture, DECK_SLOTS};
use deckforge_data::{load_catalog, load_catalog_or_empty};
use std::path::{Path, PathBuf};

fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
        .join("cards.json")
}

#[test]
fn shipped_catalog_loads_and_is_well_formed() {
    let catalog = load_catalog(&catalog_path()).expect("load catalog");
    assert!(catalog.len() >= 30, "shipped catalog should be substantial");
    assert!(catalog.find_by_name("Knight").is_some());
    assert!(catalog.find_by_name("Mega Knight").is_some());
    for card in catalog.cards() {
        assert!(!card.name.trim().is_empty());
        assert!(card.image.starts_with("https://"));
    }
}

#[test]
fn shipped_costs_run_from_cheap_to_expensive() {
    let catalog = load_catalog(&catalog_path()).expect("load catalog");
    let costs: Vec<i64> = catalog
        .costs()
        .map(|cost| cost.parse().expect("numeric cost label"))
        .collect();
    let mut sorted = costs.clone();
    sorted.sort_unstable();
    assert_eq!(costs, sorted);
    assert!(costs.first().is_some());
}

#[test]
fn deck_building_works_against_the_shipped_catalog() {
    let catalog = load_catalog_or_empty(&catalog_path());
    let mut state = BuilderState::new(catalog);
    let mut events = EventBus::default();
    state
        .apply_gesture(Gesture::VoiceTranscript("add mega knight".to_string()), &mut events)
        .expect("voice add");
    state
        .apply_gesture(Gesture::VoiceTranscript("add the log".to_string()), &mut events)
        .expect("voice add");
    assert_eq!(state.deck.occupied(), 2);
    assert_eq!(
        state.deck.get(DECK_SLOTS - 2).map(|held| held.name()),
        Some("Mega Knight")
    );
    assert_eq!(
        state.deck.get(DECK_SLOTS - 1).map(|held| held.name()),
        Some("The Log")
    );
}

#[test]
fn missing_catalog_leaves_deck_building_inert() {
    let catalog = load_catalog_or_empty(Path::new("definitely/not/here.json"));
    assert!(catalog.is_empty());
    let mut state = BuilderState::new(catalog);
    let mut events = EventBus::default();
    state
        .apply_gesture(Gesture::VoiceTranscript("add knight".to_string()), &mut events)
        .expect("voice add");
    assert_eq!(state.deck.occupied(), 0);
    assert!(state.history.is_empty());
    let emitted: Vec<Event> = events.drain().collect();
    assert_eq!(
        emitted,
        vec![Event::MatchMissed {
            spoken: "knight".to_string()
        }]
    );
}
