pub mod a001_pokemon;
pub mod common;
