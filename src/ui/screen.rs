use crate::state::form::FormState;
use crate::ui::view::{Role, View, ViewNode, render_view};

/// Lookup helpers over a rendered view, keyed by what a user can see or
/// what a control is called rather than by layout.
#[derive(Debug, Clone)]
pub struct Screen {
    view: View,
}

impl Screen {
    pub fn new(view: View) -> Self {
        Self { view }
    }

    pub fn render(form: &FormState) -> Self {
        Self::new(render_view(form))
    }

    /// Nodes whose visible text contains `text`. Textboxes are excluded so
    /// typed input never counts as rendered copy.
    pub fn query_all_by_text(&self, text: &str) -> Vec<&ViewNode> {
        self.view
            .nodes
            .iter()
            .filter(|node| node.role != Role::Textbox && node.text.contains(text))
            .collect()
    }

    pub fn query_by_text(&self, text: &str) -> Option<&ViewNode> {
        self.query_all_by_text(text).into_iter().next()
    }

    /// Form controls whose label contains `label`.
    pub fn query_by_label(&self, label: &str) -> Option<&ViewNode> {
        self.view.nodes.iter().find(|node| {
            matches!(node.role, Role::Textbox | Role::Button)
                && node.label.as_deref().is_some_and(|l| l.contains(label))
        })
    }

    pub fn query_all_by_role(&self, role: Role) -> Vec<&ViewNode> {
        self.view.nodes.iter().filter(|node| node.role == role).collect()
    }

    pub fn query_by_role(&self, role: Role) -> Option<&ViewNode> {
        self.view.nodes.iter().find(|node| node.role == role)
    }

    pub fn query_by_test_id(&self, test_id: &str) -> Option<&ViewNode> {
        self.view
            .nodes
            .iter()
            .find(|node| node.test_id.as_deref() == Some(test_id))
    }
}

#[cfg(test)]
mod tests {
    use super::Screen;
    use crate::core::{Field, FieldValues};
    use crate::state::form::FormState;
    use crate::state::validation::{EMAIL_ERROR, FIRST_NAME_ERROR, LAST_NAME_ERROR};
    use crate::ui::view::Role;

    const DISPLAY_IDS: [&str; 4] = [
        "firstnameDisplay",
        "lastnameDisplay",
        "emailDisplay",
        "messageDisplay",
    ];

    fn submit_with(values: &FieldValues) -> Screen {
        let mut form = FormState::new();
        for (field, value) in values.iter() {
            form.change(field, value);
        }
        form.submit();
        Screen::render(&form)
    }

    #[test]
    fn renders_the_header() {
        let screen = Screen::render(&FormState::new());
        let header = screen.query_by_text("Contact Form").expect("header");
        assert_eq!(header.role, Role::Heading);
        assert_eq!(header.text, "Contact Form");
    }

    #[test]
    fn controls_are_found_by_label_and_role() {
        let screen = Screen::render(&FormState::new());
        for label in ["First Name", "Last Name", "Email", "Message"] {
            let node = screen.query_by_label(label).expect(label);
            assert_eq!(node.role, Role::Textbox);
        }
        assert!(screen.query_by_role(Role::Button).is_some());
    }

    #[test]
    fn short_first_name_shows_one_error() {
        let mut form = FormState::new();
        form.change(Field::FirstName, "Chev");
        let screen = Screen::render(&form);

        assert!(screen.query_by_text(FIRST_NAME_ERROR).is_some());
        assert_eq!(screen.query_all_by_role(Role::Alert).len(), 1);
    }

    #[test]
    fn empty_submit_shows_three_errors_and_no_display() {
        let screen = submit_with(&FieldValues::default());

        assert!(screen.query_by_text(FIRST_NAME_ERROR).is_some());
        assert!(screen.query_by_text(LAST_NAME_ERROR).is_some());
        assert!(screen.query_by_text(EMAIL_ERROR).is_some());
        assert_eq!(screen.query_all_by_role(Role::Alert).len(), 3);
        for id in DISPLAY_IDS {
            assert!(screen.query_by_test_id(id).is_none(), "{id}");
        }
    }

    #[test]
    fn missing_email_shows_email_error() {
        let screen = submit_with(&FieldValues::new("Chevy", "Jackson", "", ""));
        let alerts = screen.query_all_by_role(Role::Alert);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].text, EMAIL_ERROR);
    }

    #[test]
    fn invalid_email_shows_error_while_typing() {
        let mut form = FormState::new();
        form.change(Field::Email, "bhhjkhk");
        let screen = Screen::render(&form);
        assert!(screen.query_by_text(EMAIL_ERROR).is_some());
    }

    #[test]
    fn submit_without_message_omits_message_display() {
        let screen = submit_with(&FieldValues::new(
            "Chavion",
            "Jackson",
            "chavionjackson@yahoo.com",
            "",
        ));

        assert_eq!(
            screen.query_by_test_id("firstnameDisplay").map(|n| n.text.as_str()),
            Some("Chavion")
        );
        assert_eq!(
            screen.query_by_test_id("lastnameDisplay").map(|n| n.text.as_str()),
            Some("Jackson")
        );
        assert_eq!(
            screen.query_by_test_id("emailDisplay").map(|n| n.text.as_str()),
            Some("chavionjackson@yahoo.com")
        );
        assert!(screen.query_by_test_id("messageDisplay").is_none());
        assert!(screen.query_all_by_role(Role::Alert).is_empty());
    }

    #[test]
    fn submit_with_message_shows_all_displays() {
        let screen = submit_with(&FieldValues::new(
            "Chavion",
            "Jackson",
            "chavionjackson@yahoo.com",
            "chavionjackson@yahoo.com",
        ));

        for id in DISPLAY_IDS {
            assert!(screen.query_by_test_id(id).is_some(), "{id}");
        }
        assert_eq!(
            screen.query_by_test_id("messageDisplay").map(|n| n.text.as_str()),
            Some("chavionjackson@yahoo.com")
        );
    }

    #[test]
    fn typed_values_do_not_match_text_queries() {
        let mut form = FormState::new();
        form.change(Field::Message, "Contact Form");
        let screen = Screen::render(&form);
        assert_eq!(screen.query_all_by_text("Contact Form").len(), 1);
    }
}
