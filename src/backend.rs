pub mod analyzer;
pub mod picker;
