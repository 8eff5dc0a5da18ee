pub mod api;
pub mod implementation;
pub mod public_types;
