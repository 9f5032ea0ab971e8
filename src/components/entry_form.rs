use crate::forms::FieldErrors;
use crate::utils::{edit_href, escape_attr, escape_html};

/// Component for the create and edit forms
pub struct FormComponent;

impl FormComponent {
    pub fn new() -> Self {
        Self
    }

    /// Form for `POST /new`, with any submitted values and field errors
    pub fn render_new_form(&self, title: &str, content: &str, errors: &FieldErrors) -> String {
        let mut html = String::from("<h1>Create New Page</h1>");
        html.push_str("<form action=\"/new\" method=\"post\" class=\"entry-form\">");
        html.push_str(&field_errors(errors, "title"));
        html.push_str(&format!(
            "<p><label for=\"id_title\">Title:</label> <input type=\"text\" name=\"title\" id=\"id_title\" placeholder=\"Enter the title\" value=\"{}\" required></p>",
            escape_attr(title)
        ));
        html.push_str(&content_field(content, errors));
        html.push_str("<input type=\"submit\" value=\"Save\">");
        html.push_str("</form>");
        html
    }

    /// Form for `POST /edit/{title}`
    pub fn render_edit_form(&self, title: &str, content: &str, errors: &FieldErrors) -> String {
        let mut html = format!("<h1>Edit {}</h1>", escape_html(title));
        html.push_str(&format!(
            "<form action=\"{}\" method=\"post\" class=\"entry-form\">",
            escape_attr(&edit_href(title))
        ));
        html.push_str(&content_field(content, errors));
        html.push_str("<input type=\"submit\" value=\"Save\">");
        html.push_str("</form>");
        html
    }
}

impl Default for FormComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn content_field(content: &str, errors: &FieldErrors) -> String {
    format!(
        "{}<p><label for=\"id_content\">Content:</label> <textarea name=\"content\" id=\"id_content\" rows=\"20\" required>{}</textarea></p>",
        field_errors(errors, "content"),
        escape_html(content)
    )
}

fn field_errors(errors: &FieldErrors, field: &str) -> String {
    let items: String = errors
        .for_field(field)
        .map(|message| format!("<li>{}</li>", escape_html(message)))
        .collect();
    if items.is_empty() {
        String::new()
    } else {
        format!("<ul class=\"errorlist\">{items}</ul>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::REQUIRED;

    #[test]
    fn blank_new_form_has_no_errors() {
        let html = FormComponent::new().render_new_form("", "", &FieldErrors::default());
        assert!(html.contains("name=\"title\""));
        assert!(html.contains("name=\"content\""));
        assert!(!html.contains("errorlist"));
    }

    #[test]
    fn errors_and_values_are_shown() {
        let mut errors = FieldErrors::default();
        errors.add("content", REQUIRED);
        let html = FormComponent::new().render_new_form("<Rust>", "", &errors);
        assert!(html.contains("value=\"&lt;Rust&gt;\""));
        assert!(html.contains(REQUIRED));
    }

    #[test]
    fn edit_form_is_prefilled_and_posts_to_entry() {
        let html = FormComponent::new().render_edit_form("C Sharp", "# C#", &FieldErrors::default());
        assert!(html.contains("action=\"/edit/C%20Sharp\""));
        assert!(html.contains("># C#</textarea>"));
    }
}
