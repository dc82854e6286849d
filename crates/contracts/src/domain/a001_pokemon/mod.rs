pub mod aggregate;
pub mod list;
