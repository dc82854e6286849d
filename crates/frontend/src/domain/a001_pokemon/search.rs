use contracts::domain::a001_pokemon::aggregate::Pokemon;

use crate::shared::list_utils::Searchable;

impl Searchable for Pokemon {
    /// Name or any type contains the term (case-insensitive), or the decimal
    /// number contains the term exactly as typed.
    fn matches_filter(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter_lower)
            || self.number.to_string().contains(filter)
            || self
                .types
                .iter()
                .any(|t| t.to_lowercase().contains(&filter_lower))
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t.to_lowercase() == tag.to_lowercase())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;

    pub fn pokemon(number: u32, name: &str, types: &[&str]) -> Pokemon {
        Pokemon {
            id: number.to_string(),
            name: name.to_string(),
            number,
            types: types.iter().map(|t| t.to_string()).collect(),
            sprite: None,
        }
    }

    pub fn starters() -> Vec<Pokemon> {
        vec![
            pokemon(1, "Bulbasaur", &["Grass", "Poison"]),
            pokemon(2, "Ivysaur", &["Grass", "Poison"]),
            pokemon(25, "Pikachu", &["Electric"]),
        ]
    }

    fn names(items: &[Pokemon]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_search_by_name_number_and_type() {
        let all = starters();
        assert_eq!(names(&filter_list(&all, "pika", "")), vec!["Pikachu"]);
        assert_eq!(names(&filter_list(&all, "GRASS", "")), vec!["Bulbasaur", "Ivysaur"]);
        assert_eq!(names(&filter_list(&all, "25", "")), vec!["Pikachu"]);
        assert_eq!(names(&filter_list(&all, "2", "")), vec!["Ivysaur", "Pikachu"]);
        assert_eq!(names(&filter_list(&all, "", "")), vec!["Bulbasaur", "Ivysaur", "Pikachu"]);
    }

    #[test]
    fn test_number_match_uses_raw_term() {
        let all = starters();
        // " 25" is a non-blank search, but the number string "25" does not contain " 25"
        assert!(filter_list(&all, " 25", "").is_empty());
    }

    #[test]
    fn test_type_filter_is_exact_and_case_insensitive() {
        let all = starters();
        assert_eq!(names(&filter_list(&all, "", "grass")), vec!["Bulbasaur", "Ivysaur"]);
        assert_eq!(names(&filter_list(&all, "", "ELECTRIC")), vec!["Pikachu"]);
        assert!(filter_list(&all, "", "gras").is_empty());
        assert_eq!(names(&filter_list(&all, "ivy", "poison")), vec!["Ivysaur"]);
    }

    #[test]
    fn test_every_result_contains_the_term() {
        let all = starters();
        for term in ["a", "SAUR", "1", "elec", "o"] {
            let lower = term.to_lowercase();
            for p in filter_list(&all, term, "") {
                assert!(
                    p.name.to_lowercase().contains(&lower)
                        || p.number.to_string().contains(term)
                        || p.types.iter().any(|t| t.to_lowercase().contains(&lower)),
                    "{} does not contain {}",
                    p.name,
                    term
                );
            }
        }
    }
}
