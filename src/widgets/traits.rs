use crate::core::NodeId;
use crate::terminal::{CursorPos, KeyEvent};
use crate::ui::span::SpanLine;
use crate::widgets::inputs::text_edit;

#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub focused_id: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

pub trait Drawable {
    fn id(&self) -> &str;

    fn label(&self) -> &str;

    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    ValueChanged { id: NodeId, value: String },
    InputDone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }

    pub fn input_done() -> Self {
        Self::with_action(WidgetAction::InputDone)
    }

    pub fn is_input_done(&self) -> bool {
        self.actions
            .iter()
            .any(|action| matches!(action, WidgetAction::InputDone))
    }
}

// ---------------------------------------------------------------------------
// TextAction & TextEditState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    DeleteWordLeft,
    DeleteWordRight,
}

pub struct TextEditState<'a> {
    pub value: &'a mut String,
    pub cursor: &'a mut usize,
}

impl TextAction {
    pub(crate) fn apply(self, state: &mut TextEditState<'_>) -> bool {
        match self {
            Self::DeleteWordLeft => text_edit::delete_word_left(state.value, state.cursor),
            Self::DeleteWordRight => text_edit::delete_word_right(state.value, state.cursor),
        }
    }
}

// ---------------------------------------------------------------------------
// Interactive: focusable nodes
// ---------------------------------------------------------------------------

pub trait Interactive: Drawable + Send {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        None
    }

    fn on_text_action(&mut self, action: TextAction) -> InteractionResult {
        let Some(mut state) = self.text_editing() else {
            return InteractionResult::ignored();
        };
        if action.apply(&mut state) {
            return self.edited_result();
        }
        InteractionResult::ignored()
    }

    /// Result reported after the value changed through a text action.
    fn edited_result(&self) -> InteractionResult {
        InteractionResult::handled()
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        None
    }
}
