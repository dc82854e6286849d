//! GraphQL wire format of the upstream catalog store.
//!
//! The store answers with deeply nested, partially populated objects. Every
//! field is optional on the wire; the conversion into the contract types in
//! this module is the only place where missing values get defaulted.

use contracts::domain::a001_pokemon::aggregate::{Pokemon, PokemonDetail, PokemonStat};
use serde::Deserialize;

use super::error::CatalogError;

pub const LIST_QUERY: &str = r#"
query GetPokemons($limit: Int, $offset: Int) {
  pokemon(limit: $limit, offset: $offset, order_by: { id: asc }) {
    id
    pokemonspecy {
      pokemonspeciesnames(where: { language: { name: { _eq: "en" } } }) {
        name
      }
    }
    pokemonsprites {
      sprites(path: "other.official-artwork.front_default")
    }
    pokemontypes {
      type {
        typenames(where: { language: { name: { _eq: "en" } } }) {
          name
        }
      }
    }
  }
}
"#;

pub const DETAIL_QUERY: &str = r#"
query GetPokemonDetails($id: Int!) {
  pokemon(where: { id: { _eq: $id } }) {
    id
    pokemonspecy {
      pokemonspeciesnames(where: { language: { name: { _eq: "en" } } }) {
        name
      }
      capture_rate
    }
    pokemonsprites {
      sprites(path: "other.official-artwork.front_default")
    }
    pokemontypes {
      type {
        typenames(where: { language: { name: { _eq: "en" } } }) {
          name
        }
      }
    }
    weight
    height
    pokemonstats {
      base_stat
      stat {
        name
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
pub struct GqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PokemonData {
    #[serde(default)]
    pub pokemon: Vec<GqlPokemon>,
}

#[derive(Debug, Deserialize)]
pub struct GqlPokemon {
    pub id: u32,
    #[serde(default)]
    pub pokemonspecy: Option<GqlSpecies>,
    #[serde(default)]
    pub pokemonsprites: Vec<GqlSprites>,
    #[serde(default)]
    pub pokemontypes: Vec<GqlPokemonType>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub pokemonstats: Vec<GqlPokemonStat>,
}

#[derive(Debug, Deserialize)]
pub struct GqlSpecies {
    #[serde(default)]
    pub pokemonspeciesnames: Vec<GqlName>,
    #[serde(default)]
    pub capture_rate: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct GqlName {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GqlSprites {
    /// JSON path projection, normally a URL string or null.
    #[serde(default)]
    pub sprites: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct GqlPokemonType {
    #[serde(rename = "type", default)]
    pub kind: Option<GqlType>,
}

#[derive(Debug, Deserialize)]
pub struct GqlType {
    #[serde(default)]
    pub typenames: Vec<GqlName>,
}

#[derive(Debug, Deserialize)]
pub struct GqlPokemonStat {
    #[serde(default)]
    pub base_stat: Option<u32>,
    #[serde(default)]
    pub stat: Option<GqlStat>,
}

#[derive(Debug, Deserialize)]
pub struct GqlStat {
    #[serde(default)]
    pub name: Option<String>,
}

/// Достаёт `data` из ответа GraphQL, ошибки уровня запроса превращает в `CatalogError`
pub fn unwrap_response<T>(response: GqlResponse<T>) -> Result<T, CatalogError> {
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(CatalogError::GraphQl(messages.join("; ")));
    }
    response
        .data
        .ok_or_else(|| CatalogError::Decode("response has no data".to_string()))
}

fn first_name(names: &[GqlName]) -> Option<String> {
    names
        .first()
        .and_then(|n| n.name.clone())
        .filter(|n| !n.is_empty())
}

impl GqlPokemon {
    fn name(&self) -> String {
        self.pokemonspecy
            .as_ref()
            .and_then(|s| first_name(&s.pokemonspeciesnames))
            .unwrap_or_default()
    }

    fn types(&self) -> Vec<String> {
        self.pokemontypes
            .iter()
            .filter_map(|t| t.kind.as_ref().and_then(|k| first_name(&k.typenames)))
            .collect()
    }

    fn sprite(&self) -> Option<String> {
        self.pokemonsprites
            .first()
            .and_then(|s| s.sprites.as_ref())
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn into_pokemon(self) -> Pokemon {
        Pokemon {
            id: self.id.to_string(),
            name: self.name(),
            number: self.id,
            types: self.types(),
            sprite: self.sprite(),
        }
    }

    pub fn into_detail(self) -> PokemonDetail {
        let capture_rate = self.pokemonspecy.as_ref().and_then(|s| s.capture_rate);
        let stats = self
            .pokemonstats
            .iter()
            .map(|ps| PokemonStat {
                name: ps
                    .stat
                    .as_ref()
                    .and_then(|s| s.name.clone())
                    .unwrap_or_default(),
                base_stat: ps.base_stat.unwrap_or(0),
            })
            .collect();
        let weight = self.weight;
        let height = self.height;

        PokemonDetail {
            base: self.into_pokemon(),
            weight,
            height,
            capture_rate,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "pokemonspecy": {
            "pokemonspeciesnames": [{ "name": "Bulbasaur" }],
            "capture_rate": 45
        },
        "pokemonsprites": [{ "sprites": "https://img.example/1.png" }],
        "pokemontypes": [
            { "type": { "typenames": [{ "name": "Grass" }] } },
            { "type": { "typenames": [{ "name": "Poison" }] } }
        ],
        "weight": 69,
        "height": 7,
        "pokemonstats": [
            { "base_stat": 45, "stat": { "name": "hp" } },
            { "base_stat": 65, "stat": { "name": "special-attack" } }
        ]
    }"#;

    #[test]
    fn test_list_record_normalization() {
        let raw: GqlPokemon = serde_json::from_str(BULBASAUR).unwrap();
        let p = raw.into_pokemon();
        assert_eq!(p.id, "1");
        assert_eq!(p.number, 1);
        assert_eq!(p.name, "Bulbasaur");
        assert_eq!(p.types, vec!["Grass".to_string(), "Poison".to_string()]);
        assert_eq!(p.sprite.as_deref(), Some("https://img.example/1.png"));
    }

    #[test]
    fn test_detail_normalization() {
        let raw: GqlPokemon = serde_json::from_str(BULBASAUR).unwrap();
        let d = raw.into_detail();
        assert_eq!(d.weight, Some(69));
        assert_eq!(d.height, Some(7));
        assert_eq!(d.capture_rate, Some(45));
        assert_eq!(d.stats.len(), 2);
        assert_eq!(d.stats[1].name, "special-attack");
        assert_eq!(d.stats[1].base_stat, 65);
    }

    #[test]
    fn test_sparse_record_gets_defaults() {
        let raw: GqlPokemon = serde_json::from_str(
            r#"{
                "id": 151,
                "pokemonspecy": { "pokemonspeciesnames": [] },
                "pokemonsprites": [{ "sprites": null }],
                "pokemontypes": [{ "type": { "typenames": [] } }, { "type": null }],
                "pokemonstats": [{ "stat": null }]
            }"#,
        )
        .unwrap();
        let d = raw.into_detail();
        assert_eq!(d.base.name, "");
        assert!(d.base.types.is_empty());
        assert_eq!(d.base.sprite, None);
        assert_eq!(d.capture_rate, None);
        assert_eq!(d.weight, None);
        assert_eq!(d.stats[0].name, "");
        assert_eq!(d.stats[0].base_stat, 0);
    }

    #[test]
    fn test_graphql_errors_are_surfaced() {
        let response: GqlResponse<PokemonData> = serde_json::from_str(
            r#"{ "errors": [{ "message": "field not found" }, { "message": "bad query" }] }"#,
        )
        .unwrap();
        match unwrap_response(response) {
            Err(CatalogError::GraphQl(msg)) => assert_eq!(msg, "field not found; bad query"),
            other => panic!("unexpected result: {:?}", other.map(|d| d.pokemon.len())),
        }
    }

    #[test]
    fn test_missing_data_is_a_decode_error() {
        let response: GqlResponse<PokemonData> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            unwrap_response(response),
            Err(CatalogError::Decode(_))
        ));
    }
}
