use anyhow::{bail, Context};
use deckforge_core::{CardRecord, Catalog, CostGroup};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct RawCard {
    name: String,
    image: String,
    #[serde(default)]
    alternatives: Vec<String>,
}

/// Reads and validates the catalog document: a JSON object mapping an
/// elixir cost label to its card list. Card names must be unique across
/// the whole document (compared case-insensitively, since matching and
/// bump detection are).
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let groups: BTreeMap<String, Vec<RawCard>> = load_json(path)?;
    build_catalog(groups).with_context(|| format!("validate {}", path.display()))
}

/// Parses a catalog document already held in memory, for surfaces that
/// fetch the document themselves.
pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    let groups: BTreeMap<String, Vec<RawCard>> =
        serde_json::from_str(raw).context("parse catalog document")?;
    build_catalog(groups)
}

/// The widget treats a broken catalog as a degraded session, not a crash:
/// the failure is logged and everything downstream sees an empty pool.
pub fn load_catalog_or_empty(path: &Path) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!("catalog unavailable, starting empty: {:#}", err);
            Catalog::empty()
        }
    }
}

fn build_catalog(groups: BTreeMap<String, Vec<RawCard>>) -> anyhow::Result<Catalog> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(groups.len());
    for (cost, cards) in groups {
        if cost.trim().is_empty() {
            bail!("cost label cannot be empty");
        }
        let mut records = Vec::with_capacity(cards.len());
        for card in cards {
            let name = card.name.trim();
            if name.is_empty() {
                bail!("card name cannot be empty in cost group {}", cost);
            }
            if !seen.insert(name.to_ascii_lowercase()) {
                bail!("duplicate card name {}", name);
            }
            records.push(CardRecord {
                name: name.to_string(),
                image: card.image,
                alternatives: card.alternatives,
            });
        }
        out.push(CostGroup {
            cost,
            cards: records,
        });
    }
    Ok(Catalog::from_groups(out))
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
