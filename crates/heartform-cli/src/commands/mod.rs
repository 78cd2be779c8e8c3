pub mod fields;
pub mod sample;
pub mod simulate;
pub mod validate;
