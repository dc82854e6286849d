use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор покемона (числовой, совпадает с номером в каталоге)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PokemonId(pub u32);

impl PokemonId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for PokemonId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let value = u32::from_string(s).map_err(|e| format!("Invalid Pokémon id: {}", e))?;
        if value == 0 {
            return Err("Invalid Pokémon id: 0".to_string());
        }
        Ok(Self(value))
    }
}

// ============================================================================
// Records
// ============================================================================

/// Запись каталога (элемент списка).
///
/// Missing fields are defaulted here so that consumers never have to
/// deal with partially populated records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub number: u32,
    /// Type names in declaration order (1–2 entries).
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub sprite: Option<String>,
}

impl Pokemon {
    /// Parsed numeric id, `None` when the id is not a positive integer.
    pub fn pokemon_id(&self) -> Option<PokemonId> {
        PokemonId::from_string(&self.id).ok()
    }

    /// Номер для отображения: `#001`, `#025`, `#151`
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.number)
    }
}

/// Одна базовая характеристика (hp, attack, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "baseStat", default)]
    pub base_stat: u32,
}

/// Детальная карточка, загружается лениво по id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    #[serde(flatten)]
    pub base: Pokemon,
    /// Hectograms, as reported by the store.
    #[serde(default)]
    pub weight: Option<u32>,
    /// Decimetres.
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(rename = "captureRate", default)]
    pub capture_rate: Option<u32>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_id_parsing() {
        assert_eq!(PokemonId::from_string("25"), Ok(PokemonId(25)));
        assert_eq!(PokemonId::from_string(" 7 "), Ok(PokemonId(7)));
        assert!(PokemonId::from_string("pikachu").is_err());
        assert!(PokemonId::from_string("").is_err());
        assert!(PokemonId::from_string("0").is_err());
        assert!(PokemonId::from_string("-1").is_err());
    }

    #[test]
    fn test_missing_fields_are_defaulted() {
        let p: Pokemon = serde_json::from_str(r#"{"id":"1","number":1}"#).unwrap();
        assert_eq!(p.name, "");
        assert!(p.types.is_empty());
        assert_eq!(p.sprite, None);
    }

    #[test]
    fn test_detail_flattens_base_record() {
        let json = r#"{
            "id": "25", "name": "Pikachu", "number": 25, "types": ["Electric"],
            "sprite": null, "weight": 60, "height": 4, "captureRate": 190,
            "stats": [{"name": "hp", "baseStat": 35}]
        }"#;
        let d: PokemonDetail = serde_json::from_str(json).unwrap();
        assert_eq!(d.base.name, "Pikachu");
        assert_eq!(d.base.display_number(), "#025");
        assert_eq!(d.capture_rate, Some(190));
        assert_eq!(d.stats[0].base_stat, 35);

        let back = serde_json::to_value(&d).unwrap();
        assert_eq!(back["captureRate"], 190);
        assert_eq!(back["name"], "Pikachu");
    }
}
