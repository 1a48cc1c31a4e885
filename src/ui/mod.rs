pub mod renderer;
pub mod screen;
pub mod span;
pub mod style;
pub mod theme;
pub mod view;
