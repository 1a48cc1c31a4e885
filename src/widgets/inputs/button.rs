use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{DrawOutput, Drawable, InteractionResult, Interactive, RenderContext};

pub struct ButtonInput {
    base: WidgetBase,
    text: String,
}

impl ButtonInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            base: WidgetBase::new(id, label.clone()),
            text: label,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Drawable for ButtonInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let style = if self.base.is_focused(ctx) {
            Style::new()
                .color(Color::White)
                .background(Color::Blue)
                .bold()
        } else {
            Style::new().color(Color::DarkGrey)
        };
        DrawOutput {
            lines: vec![vec![Span::styled(format!("[ {} ]", self.text), style)]],
        }
    }
}

impl Interactive for ButtonInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ButtonInput;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::ui::span::line_text;
    use crate::widgets::traits::{Drawable, Interactive, RenderContext};

    #[test]
    fn enter_and_space_press_the_button() {
        let mut button = ButtonInput::new("submit", "Submit");
        assert!(button.on_key(KeyEvent::plain(KeyCode::Enter)).is_input_done());
        assert!(button.on_key(KeyEvent::plain(KeyCode::Char(' '))).is_input_done());
        assert!(!button.on_key(KeyEvent::plain(KeyCode::Char('x'))).handled);
    }

    #[test]
    fn draws_bracketed_text() {
        let button = ButtonInput::new("submit", "Submit");
        let out = button.draw(&RenderContext::default());
        assert_eq!(line_text(&out.lines[0]), "[ Submit ]");
    }
}
