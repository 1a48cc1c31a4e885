pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use config::FormConfig;
pub use crate::core::{Field, FieldValues};
pub use error::{AppError, Result};
pub use state::form::{FormState, Phase, SubmitOutcome};
pub use state::validation::{ValidationErrors, validate};
pub use ui::screen::Screen;
