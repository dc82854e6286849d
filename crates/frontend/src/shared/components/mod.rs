pub mod pagination_controls;
pub mod type_filter_chip;
