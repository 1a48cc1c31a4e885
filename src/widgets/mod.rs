pub mod base;
pub mod inputs;
pub mod traits;
pub mod validators;
