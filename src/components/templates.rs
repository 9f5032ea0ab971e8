use crate::components::{FabComponent, NavigationComponent};
use crate::types::TemplateContext;
use crate::utils::escape_html;

/// Component for handling HTML template rendering
pub struct TemplateComponent;

impl TemplateComponent {
    /// Create a new template component
    pub fn new() -> Self {
        Self
    }

    /// Render the main HTML shell around a page
    pub fn render_shell_template(&self, context: &TemplateContext) -> String {
        format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title><link rel=\"stylesheet\" href=\"/static/css/encyclopedia.css\"></head><body><a id=\"top\"></a><div class=\"layout\"><aside class=\"sidebar glass\">{}</aside><main class=\"content\"><div class=\"article-card glass\">{}</div></main></div><a class=\"back-to-top glass\" href=\"#top\" aria-label=\"Back to top\">↑</a>{}</body></html>",
            escape_html(&context.title), context.sidebar, context.content, context.fab
        )
    }

    /// Generate a complete page with navigation and content
    pub fn render_page_with_nav(
        &self,
        navigation: &str,
        content: &str,
        fab: &str,
        title: &str,
    ) -> String {
        let context = TemplateContext {
            title: title.to_string(),
            content: content.to_string(),
            sidebar: navigation.to_string(),
            fab: fab.to_string(),
        };

        self.render_shell_template(&context)
    }

    /// Generate the generic error page, e.g. `"404: Not Found"`
    pub fn render_error_page(&self, code: &str, message: &str) -> String {
        let content = format!(
            "<div class=\"error-page\"><h1 class=\"error-title\">{}</h1><p class=\"error-message\">{}</p><p><a href=\"/\" class=\"error-btn primary\">Go Home</a></p></div>",
            escape_html(code),
            escape_html(message)
        );
        let sidebar = NavigationComponent::new().build_sidebar_html();
        let fab = FabComponent::new();
        let fab_html = fab.generate_fab_html(&fab.generate_actions(None));
        self.render_page_with_nav(&sidebar, &content, &fab_html, "Error")
    }
}

impl Default for TemplateComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_escaped_in_shell() {
        let page = TemplateComponent::new().render_page_with_nav("", "<p>x</p>", "", "<Tom & Jerry>");
        assert!(page.contains("<title>&lt;Tom &amp; Jerry&gt;</title>"));
        assert!(page.contains("<p>x</p>"));
    }

    #[test]
    fn error_page_shows_code_and_message() {
        let page = TemplateComponent::new().render_error_page("409: Conflict", "Already exists.");
        assert!(page.contains("409: Conflict"));
        assert!(page.contains("Already exists."));
    }
}
