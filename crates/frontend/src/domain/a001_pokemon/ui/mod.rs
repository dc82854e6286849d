pub mod components;
pub mod details;
pub mod list;
