pub mod identifier;
pub mod movie;
