use crate::{CardRecord, Catalog};

/// Words dropped before the loosest matching tier. Only standalone words
/// are removed, so "another" keeps its "an".
const STOPWORDS: [&str; 3] = ["the", "a", "an"];

/// Resolves free-form speech text to a catalog card. Tiers run strictly in
/// order, each scanning the whole catalog before the next gets a chance, so
/// an exact name always beats a substring hit on an earlier card:
///
/// 1. exact name, 2. exact alternative, 3. substring on name (either
/// direction), 4. substring on alternatives, 5. substring on name with
/// stopwords stripped from both sides.
pub fn find_best_match<'a>(spoken: &str, catalog: &'a Catalog) -> Option<&'a CardRecord> {
    let spoken = spoken.trim().to_ascii_lowercase();
    if spoken.is_empty() {
        return None;
    }

    if let Some(card) = catalog
        .cards()
        .find(|card| card.name.eq_ignore_ascii_case(&spoken))
    {
        return Some(card);
    }

    if let Some(card) = catalog.cards().find(|card| {
        card.alternatives
            .iter()
            .any(|alternative| alternative.eq_ignore_ascii_case(&spoken))
    }) {
        return Some(card);
    }

    if let Some(card) = catalog
        .cards()
        .find(|card| contains_either(&card.name.to_ascii_lowercase(), &spoken))
    {
        return Some(card);
    }

    if let Some(card) = catalog.cards().find(|card| {
        card.alternatives
            .iter()
            .any(|alternative| contains_either(&alternative.to_ascii_lowercase(), &spoken))
    }) {
        return Some(card);
    }

    let stripped_spoken = strip_stopwords(&spoken);
    if stripped_spoken.is_empty() {
        return None;
    }
    catalog.cards().find(|card| {
        let stripped_name = strip_stopwords(&card.name.to_ascii_lowercase());
        !stripped_name.is_empty() && contains_either(&stripped_name, &stripped_spoken)
    })
}

fn contains_either(candidate: &str, spoken: &str) -> bool {
    candidate.contains(spoken) || spoken.contains(candidate)
}

fn strip_stopwords(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !STOPWORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
