use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub heading: Style,
    pub label: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub submitted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: Style::new().color(Color::Cyan).bold(),
            label: Style::new().bold(),
            hint: Style::new().color(Color::Yellow),
            error: Style::new().color(Color::Red),
            placeholder: Style::new().color(Color::DarkGrey),
            submitted: Style::new().color(Color::Green),
        }
    }
}

impl Theme {
    /// Plain output for terminals without color.
    pub fn monochrome() -> Self {
        Self {
            heading: Style::new().bold(),
            label: Style::new().bold(),
            hint: Style::new(),
            error: Style::new().bold(),
            placeholder: Style::new(),
            submitted: Style::new(),
        }
    }
}
