use log::debug;

use crate::utils::{edit_href, escape_attr, escape_html};

/// Component for the Floating Action Bar (FAB): search box plus page actions
pub struct FabComponent;

impl FabComponent {
    /// Create a new FAB component
    pub fn new() -> Self {
        Self
    }

    /// Generate FAB actions for the entry being shown, if any
    pub fn generate_actions(&self, title: Option<&str>) -> Vec<FabAction> {
        let mut actions = Vec::new();

        if let Some(title) = title {
            actions.push(FabAction {
                href: edit_href(title),
                title: "Edit this page".to_string(),
                class: "fab-action-edit".to_string(),
            });
        }

        debug!("Generated {} FAB actions for {:?}", actions.len(), title);
        actions
    }

    /// Generate complete FAB HTML
    pub fn generate_fab_html(&self, actions: &[FabAction]) -> String {
        let mut html = String::from("<div class=\"fab glass fab-page\" id=\"fab\">");
        html.push_str("<div class=\"fab-menu\">");

        html.push_str("<a href=\"/\" class=\"fab-item\" title=\"Home\"></a>");

        html.push_str("<div class=\"fab-search\">");
        html.push_str("<form action=\"/search\" method=\"get\" style=\"display:flex;width:100%\">");
        html.push_str("<input type=\"text\" name=\"q\" placeholder=\"Search Encyclopedia\" style=\"flex:1;border:none;background:none;outline:none;color:inherit;font:inherit\">");
        html.push_str("</form>");
        html.push_str("</div>");

        if !actions.is_empty() {
            html.push_str("<div class=\"fab-actions\">");
            for action in actions {
                html.push_str(&format!(
                    "<a href=\"{}\" title=\"{}\" class=\"{}\">{}</a>",
                    escape_attr(&action.href),
                    escape_attr(&action.title),
                    escape_attr(&action.class),
                    escape_html(&action.title)
                ));
            }
            html.push_str("</div>");
        }

        html.push_str("</div>");
        html.push_str("</div>");
        html
    }
}

/// Represents a FAB action button
pub struct FabAction {
    pub href: String,
    pub title: String,
    pub class: String,
}

impl Default for FabComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_pages_get_an_edit_action() {
        let fab = FabComponent::new();
        let actions = fab.generate_actions(Some("C Sharp"));
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].href, "/edit/C%20Sharp");
        assert!(fab.generate_fab_html(&actions).contains("Edit this page"));
    }

    #[test]
    fn other_pages_only_get_search() {
        let fab = FabComponent::new();
        let html = fab.generate_fab_html(&fab.generate_actions(None));
        assert!(html.contains("action=\"/search\""));
        assert!(!html.contains("fab-actions"));
    }
}
