use super::text_edit;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, TextEditState,
    WidgetAction,
};
use unicode_width::UnicodeWidthChar;

/// Single-line text field. Every edit that changes the value reports
/// `ValueChanged` with the full new text.
pub struct TextInput {
    base: WidgetBase,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            value: String::new(),
            cursor: 0,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the buffer and parks the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = text_edit::char_count(&self.value);
    }
}

impl Drawable for TextInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let span = match (&self.placeholder, self.value.is_empty()) {
            (Some(ph), true) if !self.base.is_focused(ctx) => {
                Span::styled(ph.clone(), Style::new().color(Color::DarkGrey))
            }
            _ => Span::new(self.value.clone()),
        };
        DrawOutput {
            lines: vec![vec![span]],
        }
    }
}

impl Interactive for TextInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        // CONTROL|ALT is how AltGr characters arrive on some platforms.
        if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
        {
            return InteractionResult::ignored();
        }
        match key.code {
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                self.edited_result()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                InteractionResult::handled()
            }
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        Some(TextEditState {
            value: &mut self.value,
            cursor: &mut self.cursor,
        })
    }

    fn edited_result(&self) -> InteractionResult {
        InteractionResult::with_action(WidgetAction::ValueChanged {
            id: self.base.id().to_string(),
            value: self.value.clone(),
        })
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let col: usize = self
            .value
            .chars()
            .take(text_edit::clamp_cursor(self.cursor, &self.value))
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum();
        Some(CursorPos {
            col: col.min(u16::MAX as usize) as u16,
            row: 0,
        })
    }
}
