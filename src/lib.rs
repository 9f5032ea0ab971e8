//! Encyclopedia - a small flat-file wiki
//!
//! Entries are Markdown files in one directory, one file per title. The crate
//! lists, views, searches, creates and edits them over HTTP.

pub mod components;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod logger;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::WikiError;
pub use forms::{EditEntryForm, FieldErrors, NewEntryForm, Validation};
pub use routes::app_router;
pub use types::{AppState, EntryView, MarkdownResult, SearchOutcome, TemplateContext};
pub use services::{EntryStore, FileStore, MarkdownService, SearchService, WikiService};
pub use components::{FabComponent, FormComponent, NavigationComponent, TemplateComponent};
