use crate::core::{Field, FieldValues};
use crate::state::focus::FocusState;
use crate::state::validation::{ValidationErrors, ValidationState};
use crate::terminal::KeyEvent;
use crate::widgets::inputs::button::ButtonInput;
use crate::widgets::inputs::text::TextInput;
use crate::widgets::traits::{Drawable, InteractionResult, Interactive, TextAction, WidgetAction};
use tracing::{debug, info};

pub const FORM_TITLE: &str = "Contact Form";
pub const SUBMIT_ID: &str = "submit";
const EMAIL_PLACEHOLDER: &str = "name@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(FieldValues),
    Rejected(ValidationErrors),
}

/// The contact form: field buffers, derived errors and the last accepted
/// snapshot. A snapshot is only ever taken from error-free values.
pub struct FormState {
    hint: Option<String>,
    inputs: Vec<TextInput>,
    button: ButtonInput,
    values: FieldValues,
    validation: ValidationState,
    submitted: Option<FieldValues>,
    phase: Phase,
    focus: FocusState,
    should_exit: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let inputs: Vec<TextInput> = Field::ALL
            .into_iter()
            .map(|field| {
                let input = TextInput::new(field.key(), field.label());
                match field {
                    Field::Email => input.with_placeholder(EMAIL_PLACEHOLDER),
                    _ => input,
                }
            })
            .collect();
        let focus_ids = Field::ALL
            .into_iter()
            .map(Field::key)
            .chain(std::iter::once(SUBMIT_ID));
        let values = FieldValues::default();

        Self {
            hint: None,
            inputs,
            button: ButtonInput::new(SUBMIT_ID, "Submit"),
            validation: ValidationState::from_values(&values),
            values,
            submitted: None,
            phase: Phase::Editing,
            focus: FocusState::new(focus_ids),
            should_exit: false,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn title(&self) -> &str {
        FORM_TITLE
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn input(&self, field: Field) -> &TextInput {
        &self.inputs[field_index(field)]
    }

    pub fn button(&self) -> &ButtonInput {
        &self.button
    }

    pub fn errors(&self) -> &ValidationErrors {
        self.validation.errors()
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        self.validation.visible_error(field)
    }

    pub fn submitted(&self) -> Option<&FieldValues> {
        self.submitted.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focus.current_id()
    }

    pub fn focus_next(&mut self) {
        self.focus.next();
        debug!(focused = ?self.focus.current_id(), "focus moved");
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev();
        debug!(focused = ?self.focus.current_id(), "focus moved");
    }

    pub fn focus_field(&mut self, field: Field) {
        self.focus.set_focus_by_id(field.key());
    }

    /// Change handler for one field: overwrite its value and re-validate.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.inputs[field_index(field)].set_value(value.clone());
        self.apply_change(field, value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.validation.refresh(&self.values);
        self.validation.reveal_all();

        if !self.validation.is_valid() {
            debug!(errors = self.validation.errors().len(), "submit rejected");
            return SubmitOutcome::Rejected(self.validation.errors().clone());
        }

        let snapshot = self.values.clone();
        self.submitted = Some(snapshot.clone());
        self.phase = Phase::Submitted;
        info!(
            has_message = !snapshot.message.is_empty(),
            "contact form submitted"
        );
        SubmitOutcome::Accepted(snapshot)
    }

    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> InteractionResult {
        let Some(widget) = self.focused_widget_mut() else {
            return InteractionResult::ignored();
        };
        let result = widget.on_key(key);
        self.apply_actions(&result);
        result
    }

    pub fn dispatch_text_action_to_focused(&mut self, action: TextAction) -> InteractionResult {
        let Some(widget) = self.focused_widget_mut() else {
            return InteractionResult::ignored();
        };
        let result = widget.on_text_action(action);
        self.apply_actions(&result);
        result
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn focused_widget_mut(&mut self) -> Option<&mut dyn Interactive> {
        let id = self.focus.current_id()?.to_owned();
        if id == SUBMIT_ID {
            return Some(&mut self.button);
        }
        self.inputs
            .iter_mut()
            .find(|input| input.id() == id)
            .map(|input| input as &mut dyn Interactive)
    }

    fn apply_actions(&mut self, result: &InteractionResult) {
        for action in &result.actions {
            if let WidgetAction::ValueChanged { id, value } = action {
                if let Some(field) = Field::from_key(id) {
                    self.apply_change(field, value.clone());
                }
            }
        }
    }

    fn apply_change(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.validation.refresh(&self.values);
        self.validation.reveal(field);
        self.phase = Phase::Editing;
        debug!(
            field = field.key(),
            valid = self.validation.visible_error(field).is_none(),
            "field changed"
        );
    }
}

fn field_index(field: Field) -> usize {
    match field {
        Field::FirstName => 0,
        Field::LastName => 1,
        Field::Email => 2,
        Field::Message => 3,
    }
}
