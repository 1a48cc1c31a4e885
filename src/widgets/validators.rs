use regex::Regex;
use std::sync::LazyLock;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

/// Fails on the empty string only; whitespace counts as a value.
pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.chars().count() < min_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn email(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if EMAIL_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}
