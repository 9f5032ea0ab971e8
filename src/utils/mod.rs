use std::path::{Component, Path};
use std::time::SystemTime;
use time::OffsetDateTime;

use crate::errors::WikiError;

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Link to the view page of `title`
pub fn entry_href(title: &str) -> String {
    format!("/wiki/{}", urlencoding::encode(title))
}

/// Link to the edit page of `title`
pub fn edit_href(title: &str) -> String {
    format!("/edit/{}", urlencoding::encode(title))
}

/// Generate last modified metadata HTML
pub fn last_modified_html(modified: Option<SystemTime>) -> String {
    let Some(mtime) = modified else {
        return String::new();
    };
    let Ok(dur) = mtime.duration_since(std::time::UNIX_EPOCH) else {
        return String::new();
    };
    let Ok(secs) = i64::try_from(dur.as_secs()) else {
        return String::new();
    };
    OffsetDateTime::from_unix_timestamp(secs)
        .ok()
        .and_then(|dt| dt.format(&time::format_description::well_known::Rfc3339).ok())
        .map(|s| format!("<p class=\"meta\">Last modified: {}</p>", escape_html(&s)))
        .unwrap_or_default()
}

/// Normalize a static asset path, rejecting anything that leaves the root
pub fn normalize_path(path: &str) -> Result<String, WikiError> {
    let trimmed = path.trim_matches('/');
    for comp in Path::new(trimmed).components() {
        match comp {
            Component::Normal(_) | Component::CurDir => {}
            _ => return Err(WikiError::InvalidPath),
        }
    }
    Ok(trimmed.to_string())
}

/// Determine content type for a file
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "txt" => "text/plain",
        "md" => "text/markdown",
        _ => "application/octet-stream",
    }
}
