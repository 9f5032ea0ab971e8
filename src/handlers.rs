use axum::{
    extract::{Form, Path as AxumPath, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::errors::WikiError;
use crate::forms::{EditEntryForm, FieldErrors, NewEntryForm, Validation};
use crate::types::{AppState, SearchOutcome};
use crate::utils::{content_type_for, entry_href, escape_attr, escape_html, last_modified_html, normalize_path};
use crate::services::{MarkdownService, WikiService};
use crate::components::{FabComponent, FormComponent, NavigationComponent, TemplateComponent};

/// Query string of `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

fn service(state: &AppState) -> WikiService {
    WikiService::new(state.store.clone())
}

/// Wrap `content` in the page shell. `entry` adds entry actions, `toc` a sidebar TOC.
fn render_page(content: &str, title: &str, entry: Option<&str>, toc: &str) -> String {
    let navigation = NavigationComponent::new();
    let fab = FabComponent::new();
    let actions = fab.generate_actions(entry);
    let fab_html = fab.generate_fab_html(&actions);
    let sidebar = navigation.build_sidebar_with_toc(toc);
    TemplateComponent::new().render_page_with_nav(&sidebar, content, &fab_html, title)
}

fn redirect_to_entry(title: &str) -> Response {
    Redirect::to(&entry_href(title)).into_response()
}

/// Handle root path requests: list every entry
pub async fn handle_index(State(state): State<AppState>) -> Result<Response, WikiError> {
    let titles = service(&state).list()?;
    log::info!("Index request, {} entries", titles.len());

    let mut html = String::from("<h1>All Pages</h1>");
    if titles.is_empty() {
        html.push_str("<p class=\"no-results\">There are no entries yet. <a href=\"/new\">Create the first one.</a></p>");
    } else {
        html.push_str("<ul class=\"listing\">\n");
        for title in &titles {
            html.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                escape_attr(&entry_href(title)),
                escape_html(title)
            ));
        }
        html.push_str("</ul>\n");
    }

    Ok(Html(render_page(&html, "Encyclopedia", None, "")).into_response())
}

/// Handle `GET /wiki/{title}`
pub async fn handle_entry(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    log::info!("Entry request received: '{}'", title);

    let entry = service(&state).view(&title)?;
    let result = MarkdownService::new().render_with_toc(&entry.body);
    let body = format!("{}{}", last_modified_html(entry.modified), result.html);
    let page = render_page(&body, &entry.title, Some(&entry.title), &result.toc);

    log::debug!("Rendered entry '{}', {} bytes of HTML", title, page.len());
    Ok(Html(page).into_response())
}

/// Handle `GET /search?q=`
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, WikiError> {
    log::info!("Search request received for query: {:?}", params.q);
    let start_time = std::time::Instant::now();

    let outcome = service(&state).search(params.q.as_deref())?;
    let response = match outcome {
        SearchOutcome::Exact(title) => {
            log::debug!("Redirecting search to entry '{}'", title);
            redirect_to_entry(&title)
        }
        SearchOutcome::Listing { query, results } => {
            let content = render_search_results(&query, &results);
            Html(render_page(&content, "Search", None, "")).into_response()
        }
    };

    log::debug!("Search request completed in {}ms", start_time.elapsed().as_millis());
    Ok(response)
}

/// Handle `GET /new`
pub async fn handle_new_form() -> Html<String> {
    let form = FormComponent::new().render_new_form("", "", &FieldErrors::default());
    Html(render_page(&form, "Create New Page", None, ""))
}

/// Handle `POST /new`
pub async fn handle_new_submit(
    State(state): State<AppState>,
    Form(form): Form<NewEntryForm>,
) -> Result<Response, WikiError> {
    log::info!("New entry submitted: {:?}", form.title);

    match service(&state).create(&form)? {
        Validation::Valid(title) => Ok(redirect_to_entry(&title)),
        Validation::Invalid(errors) => {
            let html = FormComponent::new().render_new_form(
                form.title.as_deref().unwrap_or_default(),
                form.content.as_deref().unwrap_or_default(),
                &errors,
            );
            Ok(Html(render_page(&html, "Create New Page", None, "")).into_response())
        }
    }
}

/// Handle `GET /edit/{title}`
pub async fn handle_edit_form(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    log::info!("Edit form requested for '{}'", title);

    let body = service(&state).edit_form(&title)?;
    let html = FormComponent::new().render_edit_form(&title, &body, &FieldErrors::default());
    Ok(Html(render_page(&html, &format!("Edit {title}"), None, "")).into_response())
}

/// Handle `POST /edit/{title}`
pub async fn handle_edit_submit(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
    Form(form): Form<EditEntryForm>,
) -> Result<Response, WikiError> {
    log::info!("Edit submitted for '{}'", title);

    match service(&state).edit(&title, &form)? {
        Validation::Valid(()) => Ok(redirect_to_entry(&title)),
        Validation::Invalid(errors) => {
            let html = FormComponent::new().render_edit_form(
                &title,
                form.content.as_deref().unwrap_or_default(),
                &errors,
            );
            Ok(Html(render_page(&html, &format!("Edit {title}"), None, "")).into_response())
        }
    }
}

/// Handle `GET /random`
pub async fn handle_random(State(state): State<AppState>) -> Result<Response, WikiError> {
    let title = service(&state).random(&mut rand::thread_rng())?;
    log::info!("Random entry chosen: '{}'", title);
    Ok(redirect_to_entry(&title))
}

/// Handle static file requests
pub async fn handle_static(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
) -> Result<Response, WikiError> {
    let normalized = normalize_path(&path)?;
    let requested = state.static_dir.join(&normalized);

    if !requested.is_file() {
        log::warn!("Static asset not found: '{}'", normalized);
        return Err(WikiError::NotFound(normalized));
    }

    let bytes = std::fs::read(&requested)?;
    let content_type = content_type_for(&requested);
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

/// Render search results HTML
fn render_search_results(query: &str, results: &[String]) -> String {
    let mut content = String::from("<div class=\"search-results\">");

    if query.is_empty() {
        content.push_str("<p class=\"no-query\">Enter a search query to find content.</p>");
        content.push_str("</div>");
        return content;
    }

    content.push_str(&format!("<h2 class=\"search-header\">Search Results for \"{}\"</h2>", escape_html(query)));
    content.push_str(&format!(
        "<p class=\"results-count\">Found {} result{}</p>",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    ));

    if results.is_empty() {
        content.push_str("<p class=\"no-results\">No results found for your search.</p>");
    } else {
        content.push_str("<ul class=\"search-results-list\">");
        for title in results {
            content.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape_attr(&entry_href(title)),
                escape_html(title)
            ));
        }
        content.push_str("</ul>");
    }

    content.push_str("</div>");
    content
}
