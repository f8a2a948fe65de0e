use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::wire::{ApiNamedResource, ApiPokemon};
use crate::error::CatalogError;

/// One item of the catalog index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// URL of the entry's detail resource.
    pub reference: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

impl From<ApiNamedResource> for CatalogEntry {
    fn from(resource: ApiNamedResource) -> Self {
        Self {
            name: resource.name,
            reference: resource.url,
        }
    }
}

/// What a list card needs: derived from a [`FullRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalRecord {
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub primary_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

impl Stat {
    /// Highest base stat the upstream data can report.
    pub const MAX_VALUE: u32 = 255;

    /// Share of [`Stat::MAX_VALUE`], clamped to `0.0..=1.0`, for stat bars.
    pub fn fill_ratio(&self) -> f64 {
        (f64::from(self.value) / f64::from(Self::MAX_VALUE)).min(1.0)
    }
}

/// Everything the detail view shows for one entry.
///
/// `categories` is never empty; [`FullRecord::try_from`] rejects records
/// without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullRecord {
    pub name: String,
    pub id: u32,
    pub categories: Vec<String>,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub stats: Vec<Stat>,
    pub moves: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub species_reference: String,
}

impl FullRecord {
    pub fn primary_category(&self) -> &str {
        self.categories.first().map(String::as_str).unwrap_or_default()
    }

    pub fn to_minimal(&self) -> MinimalRecord {
        MinimalRecord {
            name: self.name.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            primary_category: self.primary_category().to_string(),
        }
    }

    pub fn height_meters(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kilograms(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// The first `count` moves, as listed by the detail view.
    pub fn leading_moves(&self, count: usize) -> &[String] {
        &self.moves[..count.min(self.moves.len())]
    }
}

impl TryFrom<ApiPokemon> for FullRecord {
    type Error = CatalogError;

    fn try_from(api: ApiPokemon) -> Result<Self, Self::Error> {
        let mut types = api.types;
        types.sort_by_key(|slot| slot.slot);
        if types.is_empty() {
            return Err(CatalogError::MalformedRecord {
                name: api.name,
                reason: "no types listed".to_string(),
            });
        }

        Ok(Self {
            id: api.id,
            categories: types.into_iter().map(|slot| slot.kind.name).collect(),
            height: api.height,
            weight: api.weight,
            stats: api
                .stats
                .into_iter()
                .map(|stat| Stat {
                    name: stat.stat.name,
                    value: stat.base_stat,
                })
                .collect(),
            moves: api.moves.into_iter().map(|slot| slot.kind.name).collect(),
            thumbnail_url: api.sprites.front_default,
            species_reference: api.species.url,
            name: api.name,
        })
    }
}

/// Names in evolution order, following the first branch at every stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub names: Vec<String>,
    /// Set when some stage had more than one successor and the others were dropped.
    pub truncated: bool,
}

impl EvolutionChain {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// One stage of an evolution chain, with its thumbnail when it could be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionMember {
    pub name: String,
    pub thumbnail_url: Option<String>,
}

/// A resolved detail view: the record is mandatory, evolutions best-effort.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub record: Arc<FullRecord>,
    pub chain: EvolutionChain,
    pub evolutions: Vec<EvolutionMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> ApiPokemon {
        serde_json::from_value(serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "sprites": { "front_default": "https://img.test/25.png" },
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }],
            "stats": [
                { "base_stat": 35, "stat": { "name": "hp" } },
                { "base_stat": 90, "stat": { "name": "speed" } }
            ],
            "moves": [
                { "move": { "name": "mega-punch" } },
                { "move": { "name": "pay-day" } },
                { "move": { "name": "thunder-punch" } }
            ],
            "species": { "name": "pikachu", "url": "https://api.test/pokemon-species/25/" }
        }))
        .unwrap()
    }

    #[test]
    fn test_full_record_from_api() {
        let record = FullRecord::try_from(pikachu()).unwrap();

        assert_eq!(record.id, 25);
        assert_eq!(record.primary_category(), "electric");
        assert_eq!(record.stats[1], Stat { name: "speed".into(), value: 90 });
        assert_eq!(record.moves.len(), 3);
        assert_eq!(record.species_reference, "https://api.test/pokemon-species/25/");
        assert!((record.height_meters() - 0.4).abs() < f64::EPSILON);
        assert!((record.weight_kilograms() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_categories_follow_slot_order() {
        let mut api = pikachu();
        api.types = serde_json::from_value(serde_json::json!([
            { "slot": 2, "type": { "name": "flying" } },
            { "slot": 1, "type": { "name": "normal" } }
        ]))
        .unwrap();

        let record = FullRecord::try_from(api).unwrap();
        assert_eq!(record.categories, vec!["normal", "flying"]);
    }

    #[test]
    fn test_record_without_types_is_malformed() {
        let mut api = pikachu();
        api.types.clear();

        let err = FullRecord::try_from(api).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { ref name, .. } if name == "pikachu"));
    }

    #[test]
    fn test_minimal_projection() {
        let minimal = FullRecord::try_from(pikachu()).unwrap().to_minimal();

        assert_eq!(
            minimal,
            MinimalRecord {
                name: "pikachu".into(),
                thumbnail_url: Some("https://img.test/25.png".into()),
                primary_category: "electric".into(),
            }
        );
    }

    #[test]
    fn test_leading_moves_clamps() {
        let record = FullRecord::try_from(pikachu()).unwrap();

        assert_eq!(record.leading_moves(2), ["mega-punch", "pay-day"]);
        assert_eq!(record.leading_moves(10).len(), 3);
    }

    #[test]
    fn test_stat_fill_ratio() {
        let full = Stat { name: "hp".into(), value: 255 };
        let half = Stat { name: "hp".into(), value: 51 };

        assert_eq!(full.fill_ratio(), 1.0);
        assert!((half.fill_ratio() - 0.2).abs() < 1e-9);
    }
}
