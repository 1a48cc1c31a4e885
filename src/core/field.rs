use serde::Serialize;

/// One of the four inputs the contact form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// Form order, which is also focus and render order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Stable identifier used as node id and in error messages.
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Test id of the region showing this field's submitted value.
    pub fn display_id(self) -> &'static str {
        match self {
            Field::FirstName => "firstnameDisplay",
            Field::LastName => "lastnameDisplay",
            Field::Email => "emailDisplay",
            Field::Message => "messageDisplay",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldValues};

    #[test]
    fn keys_round_trip_through_from_key() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("phone"), None);
    }

    #[test]
    fn set_overwrites_only_the_named_field() {
        let mut values = FieldValues::new("Chavion", "Jackson", "", "");
        values.set(Field::Email, "chavionjackson@yahoo.com");

        assert_eq!(values.get(Field::FirstName), "Chavion");
        assert_eq!(values.get(Field::Email), "chavionjackson@yahoo.com");
        assert_eq!(values.get(Field::Message), "");
    }

    #[test]
    fn set_keeps_surrounding_whitespace() {
        let mut values = FieldValues::default();
        values.set(Field::LastName, "  Jackson ");
        assert_eq!(values.last_name, "  Jackson ");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let values = FieldValues::new("Chavion", "Jackson", "c@yahoo.com", "hi");
        let json = serde_json::to_value(&values).expect("serialize");
        assert_eq!(json["firstName"], "Chavion");
        assert_eq!(json["lastName"], "Jackson");
        assert_eq!(json["email"], "c@yahoo.com");
        assert_eq!(json["message"], "hi");
    }
}
