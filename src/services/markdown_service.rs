use std::collections::HashMap;

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use crate::types::MarkdownResult;
use crate::utils::{escape_attr, escape_html};

/// Service for handling markdown rendering
pub struct MarkdownService {
    options: Options,
}

impl MarkdownService {
    /// Create a new markdown service
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options }
    }

    /// Render markdown with heading anchors and a table of contents
    pub fn render_with_toc(&self, content: &str) -> MarkdownResult {
        let headings = self.collect_headings(content);

        let mut out = String::with_capacity(content.len() * 3 / 2);
        let mut next_heading = headings.iter();
        let mut open: Vec<(u32, String)> = Vec::new();
        for ev in Parser::new_ext(content, self.options) {
            match ev {
                Event::Start(Tag::Heading { level, .. }) => {
                    let lvl = heading_level_to_u32(level);
                    let id = next_heading.next().map(|h| h.id.clone()).unwrap_or_default();
                    out.push_str(&format!("<h{} id=\"{}\">", lvl, escape_attr(&id)));
                    open.push((lvl, id));
                }
                Event::End(TagEnd::Heading(level)) => {
                    let (lvl, id) = open.pop().unwrap_or((heading_level_to_u32(level), String::new()));
                    out.push_str(&format!(
                        "<a class=\"hlink\" href=\"#{}\" aria-label=\"Link to this section\">#</a></h{}>\n",
                        escape_attr(&id),
                        lvl
                    ));
                }
                _ => html::push_html(&mut out, std::iter::once(ev)),
            }
        }

        MarkdownResult {
            html: out,
            toc: build_toc_html(&headings),
        }
    }

    /// First pass: heading levels, unique ids and text
    fn collect_headings(&self, content: &str) -> Vec<Heading> {
        let mut headings = Vec::new();
        let mut current: Option<u32> = None;
        let mut buf = String::new();
        let mut id_counts: HashMap<String, usize> = HashMap::new();

        for ev in Parser::new_ext(content, self.options) {
            match ev {
                Event::Start(Tag::Heading { level, .. }) => {
                    current = Some(heading_level_to_u32(level));
                    buf.clear();
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(level) = current.take() {
                        let mut id = slugify(&buf);
                        if id.is_empty() {
                            id = format!("h{level}");
                        }
                        let count = id_counts.entry(id.clone()).or_insert(0);
                        if *count > 0 {
                            id = format!("{id}-{count}");
                        }
                        *count += 1;
                        headings.push(Heading { level, id, text: buf.clone() });
                    }
                }
                Event::Text(t) | Event::Code(t) if current.is_some() => buf.push_str(&t),
                Event::SoftBreak | Event::HardBreak if current.is_some() => buf.push(' '),
                _ => {}
            }
        }
        headings
    }
}

impl Default for MarkdownService {
    fn default() -> Self {
        Self::new()
    }
}

struct Heading {
    level: u32,
    id: String,
    text: String,
}

/// Build HTML for the Table of Contents
fn build_toc_html(headings: &[Heading]) -> String {
    if headings.is_empty() {
        return String::new();
    }
    let mut html = String::new();
    html.push_str("<nav class=\"toc\"><div class=\"toc-title\">Contents</div>");
    let mut depth = 0u32;
    for heading in headings {
        while depth < heading.level { html.push_str("<ul>"); depth += 1; }
        while depth > heading.level { html.push_str("</ul>"); depth -= 1; }
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>",
            escape_attr(&heading.id),
            escape_html(&heading.text)
        ));
    }
    while depth > 0 { html.push_str("</ul>"); depth -= 1; }
    html.push_str("</nav>");
    html
}

fn heading_level_to_u32(level: HeadingLevel) -> u32 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Create URL-friendly slug from text
fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_dash = false;
    for ch in text.chars() {
        let c = ch.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_dash = false;
        } else if (c.is_ascii_whitespace() || c == '-' || c == '_') && !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}
