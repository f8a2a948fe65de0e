//! Upstream JSON shapes (PokeAPI v2). Fields the viewer never reads are ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiNamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResourceList {
    pub results: Vec<ApiNamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub sprites: ApiSprites,
    pub types: Vec<ApiTypeSlot>,
    #[serde(default)]
    pub stats: Vec<ApiStat>,
    #[serde(default)]
    pub moves: Vec<ApiMoveSlot>,
    pub species: ApiNamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: ApiNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiStat {
    pub base_stat: u32,
    pub stat: ApiNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMoveSlot {
    #[serde(rename = "move")]
    pub kind: ApiNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiUrl {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSpecies {
    pub evolution_chain: Option<ApiUrl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEvolutionChain {
    pub chain: ApiChainLink,
}

/// A node of the evolution tree: a species and the species it can become.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiChainLink {
    pub species: ApiNamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ApiChainLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_ignores_pagination_fields() {
        let list: ApiResourceList = serde_json::from_value(serde_json::json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=1025&limit=1025",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }
            ]
        }))
        .unwrap();

        assert_eq!(list.results.len(), 1);
        assert_eq!(list.results[0].name, "bulbasaur");
    }

    #[test]
    fn test_species_without_chain() {
        let species: ApiSpecies =
            serde_json::from_value(serde_json::json!({ "evolution_chain": null })).unwrap();
        assert!(species.evolution_chain.is_none());
    }

    #[test]
    fn test_chain_leaf_without_evolves_to() {
        let chain: ApiEvolutionChain = serde_json::from_value(serde_json::json!({
            "id": 10,
            "chain": { "species": { "name": "ditto", "url": "" }, "is_baby": false }
        }))
        .unwrap();

        assert_eq!(chain.chain.species.name, "ditto");
        assert!(chain.chain.evolves_to.is_empty());
    }
}
