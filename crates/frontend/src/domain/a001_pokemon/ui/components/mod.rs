pub mod card;
pub mod states;
pub mod type_badge;

pub use card::PokemonCard;
pub use states::{EmptyState, ErrorBanner, ListSkeleton};
pub use type_badge::{BadgeSize, TypeBadge};
