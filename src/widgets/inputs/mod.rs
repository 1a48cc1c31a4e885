pub mod button;
pub mod text;
pub mod text_edit;
