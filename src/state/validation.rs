use crate::core::{Field, FieldValues};
use crate::widgets::validators::{Validator, email, min_length, required, run_validators};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const FIRST_NAME_ERROR: &str = "Error: firstName must have at least 5 characters.";
pub const LAST_NAME_ERROR: &str = "Error: lastName is a required field.";
pub const EMAIL_ERROR: &str = "Error: email must be a valid email address.";

const FIRST_NAME_MIN_LEN: usize = 5;

/// Field to message, in form order. A missing key means the field is valid.
pub type ValidationErrors = IndexMap<Field, String>;

static CONTACT_RULES: LazyLock<FieldRules> = LazyLock::new(FieldRules::contact_form);

/// Validators attached to each field, run in order with the first failure kept.
pub struct FieldRules {
    rules: Vec<(Field, Vec<Validator>)>,
}

impl FieldRules {
    pub fn contact_form() -> Self {
        Self {
            rules: vec![
                (
                    Field::FirstName,
                    vec![min_length(FIRST_NAME_MIN_LEN, FIRST_NAME_ERROR)],
                ),
                (Field::LastName, vec![required(LAST_NAME_ERROR)]),
                (Field::Email, vec![email(EMAIL_ERROR)]),
                (Field::Message, Vec::new()),
            ],
        }
    }

    pub fn validate_field(&self, field: Field, value: &str) -> Option<String> {
        self.rules
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .and_then(|(_, validators)| run_validators(validators, value).err())
    }

    pub fn validate(&self, values: &FieldValues) -> ValidationErrors {
        self.rules
            .iter()
            .filter_map(|(field, validators)| {
                run_validators(validators, values.get(*field))
                    .err()
                    .map(|err| (*field, err))
            })
            .collect()
    }
}

pub fn validate_field(field: Field, value: &str) -> Option<String> {
    CONTACT_RULES.validate_field(field, value)
}

pub fn validate(values: &FieldValues) -> ValidationErrors {
    CONTACT_RULES.validate(values)
}

/// Current errors plus which of them the user has been shown.
#[derive(Debug, Default, Clone)]
pub struct ValidationState {
    errors: ValidationErrors,
    revealed: HashSet<Field>,
}

impl ValidationState {
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            errors: validate(values),
            revealed: HashSet::new(),
        }
    }

    pub fn refresh(&mut self, values: &FieldValues) {
        self.errors = validate(values);
    }

    pub fn reveal(&mut self, field: Field) {
        self.revealed.insert(field);
    }

    pub fn reveal_all(&mut self) {
        self.revealed.extend(Field::ALL);
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if !self.revealed.contains(&field) {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    pub fn visible_errors(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors
            .iter()
            .filter(|(field, _)| self.revealed.contains(*field))
            .map(|(field, err)| (*field, err.as_str()))
    }
}
