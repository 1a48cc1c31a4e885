pub mod field;

pub use field::{Field, FieldValues};

pub type NodeId = String;
