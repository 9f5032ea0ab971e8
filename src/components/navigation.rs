use log::debug;

/// Component for the sidebar: site links and an optional table of contents
pub struct NavigationComponent;

impl NavigationComponent {
    /// Create a new navigation component
    pub fn new() -> Self {
        Self
    }

    /// Build sidebar HTML with table of contents
    pub fn build_sidebar_with_toc(&self, toc: &str) -> String {
        let sidebar_html = self.build_sidebar_html();
        if toc.is_empty() {
            return sidebar_html;
        }
        format!(
            "{}<div class=\"sidebar-toc\"><h4 class=\"sidebar-toc-title\">On This Page</h4>{}</div>",
            sidebar_html, toc
        )
    }

    /// Build basic sidebar HTML
    pub fn build_sidebar_html(&self) -> String {
        debug!("Building sidebar HTML");
        let mut html = String::new();
        html.push_str("<div class=\"sidebar-nav\">");
        html.push_str("<h3>Encyclopedia</h3>");
        html.push_str("<ul class=\"nav-list\">");
        for (href, label) in [
            ("/", "Home"),
            ("/new", "Create New Page"),
            ("/random", "Random Page"),
        ] {
            html.push_str(&format!("<li class=\"nav-item\"><a href=\"{href}\">{label}</a></li>"));
        }
        html.push_str("</ul>");
        html.push_str("</div>");
        html
    }
}

impl Default for NavigationComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_links_every_page_kind() {
        let html = NavigationComponent::new().build_sidebar_html();
        for href in ["href=\"/\"", "href=\"/new\"", "href=\"/random\""] {
            assert!(html.contains(href), "missing {href}");
        }
    }

    #[test]
    fn toc_is_appended_only_when_present() {
        let nav = NavigationComponent::new();
        assert_eq!(nav.build_sidebar_with_toc(""), nav.build_sidebar_html());
        assert!(nav.build_sidebar_with_toc("<nav>toc</nav>").contains("On This Page"));
    }
}
