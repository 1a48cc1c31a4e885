use crate::core::{Field, NodeId};
use crate::state::form::{FormState, SUBMIT_ID};
use crate::widgets::traits::Drawable;

pub const SUBMITTED_HEADING: &str = "You Submitted:";

/// Semantic role of a view node, independent of how it is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Note,
    Textbox,
    Button,
    Alert,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub role: Role,
    pub id: Option<NodeId>,
    pub label: Option<String>,
    pub test_id: Option<String>,
    pub text: String,
}

impl ViewNode {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            id: None,
            label: None,
            test_id: None,
            text: text.into(),
        }
    }

    fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Form field behind a textbox or its error alert.
    pub fn field(&self) -> Option<Field> {
        let id = self.id.as_deref()?;
        Field::from_key(id.strip_suffix("Error").unwrap_or(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub nodes: Vec<ViewNode>,
}

/// Builds the view for the current form state. Called after every transition.
pub fn render_view(form: &FormState) -> View {
    let mut nodes = vec![ViewNode::new(Role::Heading, form.title())];

    if let Some(hint) = form.hint() {
        nodes.push(ViewNode::new(Role::Note, hint));
    }

    for field in Field::ALL {
        nodes.push(
            ViewNode::new(Role::Textbox, form.value(field))
                .with_id(field.key())
                .with_label(field.label()),
        );
        if let Some(error) = form.visible_error(field) {
            nodes.push(ViewNode::new(Role::Alert, error).with_id(format!("{}Error", field.key())));
        }
    }

    let button = form.button();
    nodes.push(
        ViewNode::new(Role::Button, button.text())
            .with_id(SUBMIT_ID)
            .with_label(button.label()),
    );

    if let Some(submitted) = form.submitted() {
        nodes.push(ViewNode::new(Role::Heading, SUBMITTED_HEADING));
        for (field, value) in submitted.iter() {
            if field == Field::Message && value.is_empty() {
                continue;
            }
            nodes.push(
                ViewNode::new(Role::Text, value)
                    .with_label(field.label())
                    .with_test_id(field.display_id()),
            );
        }
    }

    View { nodes }
}
