use crate::widgets::traits::RenderContext;

#[derive(Debug, Clone)]
pub struct WidgetBase {
    id: String,
    label: String,
}

impl WidgetBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_focused(&self, ctx: &RenderContext) -> bool {
        ctx.focused_id.as_deref() == Some(self.id.as_str())
    }
}

pub fn focus_marker(focused: bool) -> &'static str {
    if focused { ">" } else { " " }
}
