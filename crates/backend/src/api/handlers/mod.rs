// Aggregate handlers
pub mod a001_pokemon;
