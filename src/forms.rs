//! Form payloads for creating and editing entries, and their validation.

use serde::Deserialize;

use crate::services::entry_store::{is_valid_title, MAX_TITLE_BYTES};

pub const REQUIRED: &str = "This field is required.";
pub const BAD_TITLE: &str = "Titles may not contain slashes, control characters or start with a dot.";
pub const TITLE_TOO_LONG: &str = "Titles may be at most 252 bytes long.";

/// Result of validating a submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    Valid(T),
    Invalid(FieldErrors),
}

/// Problems with individual form fields, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, &'static str)>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.errors.push((field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages attached to `field`
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.errors
            .iter()
            .filter(move |(name, _)| *name == field)
            .map(|(_, message)| *message)
    }
}

/// Raw body of `POST /new`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEntryForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Raw body of `POST /edit/{title}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditEntryForm {
    #[serde(default)]
    pub content: Option<String>,
}

/// A validated new entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
}

/// Trimmed value of a required field, or `None` when missing or blank
fn required(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl NewEntryForm {
    pub fn validate(&self) -> Validation<NewEntry> {
        let mut errors = FieldErrors::default();

        let title = required(self.title.as_deref());
        match &title {
            None => errors.add("title", REQUIRED),
            Some(title) if title.len() > MAX_TITLE_BYTES => errors.add("title", TITLE_TOO_LONG),
            Some(title) if !is_valid_title(title) => errors.add("title", BAD_TITLE),
            Some(_) => {}
        }

        let content = required(self.content.as_deref());
        if content.is_none() {
            errors.add("content", REQUIRED);
        }

        match (title, content) {
            (Some(title), Some(content)) if errors.is_empty() => {
                Validation::Valid(NewEntry { title, content })
            }
            _ => Validation::Invalid(errors),
        }
    }
}

impl EditEntryForm {
    /// The new body, trimmed
    pub fn validate(&self) -> Validation<String> {
        match required(self.content.as_deref()) {
            Some(content) => Validation::Valid(content),
            None => {
                let mut errors = FieldErrors::default();
                errors.add("content", REQUIRED);
                Validation::Invalid(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn new_form(title: Option<&str>, content: Option<&str>) -> NewEntryForm {
        NewEntryForm {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn complete_new_form_is_valid_and_trimmed() {
        let validation = new_form(Some("  Rust "), Some("# Rust\n")).validate();
        assert_eq!(
            validation,
            Validation::Valid(NewEntry { title: "Rust".into(), content: "# Rust".into() })
        );
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let Validation::Invalid(errors) = new_form(None, Some("   ")).validate() else {
            panic!("expected invalid form");
        };
        assert_eq!(errors.for_field("title").collect::<Vec<_>>(), vec![REQUIRED]);
        assert_eq!(errors.for_field("content").collect::<Vec<_>>(), vec![REQUIRED]);
    }

    #[test]
    fn path_like_title_is_invalid() {
        let Validation::Invalid(errors) = new_form(Some("../etc"), Some("body")).validate() else {
            panic!("expected invalid form");
        };
        assert_eq!(errors.for_field("title").collect::<Vec<_>>(), vec![BAD_TITLE]);
        assert_eq!(errors.for_field("content").count(), 0);
    }

    #[test]
    fn overlong_title_is_a_field_error() {
        let title = "a".repeat(300);
        let Validation::Invalid(errors) = new_form(Some(&title), Some("body")).validate() else {
            panic!("expected invalid form");
        };
        assert_eq!(errors.for_field("title").collect::<Vec<_>>(), vec![TITLE_TOO_LONG]);

        let fits = "a".repeat(MAX_TITLE_BYTES);
        assert!(matches!(new_form(Some(&fits), Some("body")).validate(), Validation::Valid(_)));
    }

    #[test]
    fn edit_form_requires_content() {
        let empty = EditEntryForm { content: Some("\n".into()) };
        assert!(matches!(empty.validate(), Validation::Invalid(_)));

        let filled = EditEntryForm { content: Some("new body".into()) };
        assert_eq!(filled.validate(), Validation::Valid("new body".into()));
    }
}
