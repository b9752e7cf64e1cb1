//! Client-side contact form state. Submissions are only logged locally.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// First required field that is blank, in form order.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }

    /// Validate, log and reset. A missing field leaves the form untouched.
    pub fn submit(&mut self) -> Result<ContactSubmission, FormError> {
        if let Some(field) = self.first_missing() {
            return Err(FormError::MissingField(field));
        }

        let submission = ContactSubmission {
            form: std::mem::take(self),
        };
        info!(submission = %submission.to_json(), "contact_form_submitted");
        Ok(submission)
    }
}

/// A validated form snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    #[serde(flatten)]
    form: ContactForm,
}

impl ContactSubmission {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn full_submit_clears_every_field() {
        let mut form = filled();

        let submission = form.submit().expect("complete form submits");
        assert_eq!(form, ContactForm::default());
        assert_eq!(submission.to_json()["name"], "Ada");
    }

    #[test]
    fn missing_field_is_reported_in_form_order() {
        let mut form = filled();
        form.set(Field::Email, "");
        form.set(Field::Message, "   ");

        assert_eq!(form.submit(), Err(FormError::MissingField(Field::Email)));
        assert_eq!(form.message, "   ");
    }

    #[test]
    fn missing_field_error_names_the_input() {
        assert_eq!(Field::Message.as_str(), "message");
        assert_eq!(FormError::MissingField(Field::Name).to_string(), "name is required");
    }

    #[test]
    fn submission_serializes_flat() {
        let mut form = filled();
        let submission = form.submit().expect("complete form submits");

        assert_eq!(
            submission.to_json(),
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Let's build something.",
            })
        );
    }

    proptest! {
        #[test]
        fn any_blank_field_leaves_state_unchanged(
            name in "[a-z ]{0,6}",
            email in "[a-z@. ]{0,6}",
            message in "[a-z ]{0,6}",
        ) {
            let mut form = ContactForm { name, email, message };
            let before = form.clone();

            match form.submit() {
                Ok(_) => {
                    prop_assert!(before.first_missing().is_none());
                    prop_assert_eq!(form, ContactForm::default());
                }
                Err(FormError::MissingField(_)) => {
                    prop_assert!(before.first_missing().is_some());
                    prop_assert_eq!(form, before);
                }
            }
        }
    }
}
