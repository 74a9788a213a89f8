use serde::{Deserialize, Serialize};

/// A card as listed in the catalog document. `alternatives` holds extra
/// spellings a speech recognizer tends to produce for the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRecord {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl CardRecord {
    pub fn new(name: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            alternatives: Vec::new(),
        }
    }
}

/// A card occupying a deck slot. Holds its own copy of the record so the
/// evolution flag never leaks into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotCard {
    pub card: CardRecord,
    #[serde(default)]
    pub evo: bool,
}

impl SlotCard {
    pub fn new(card: CardRecord) -> Self {
        Self { card, evo: false }
    }

    pub fn name(&self) -> &str {
        &self.card.name
    }
}
