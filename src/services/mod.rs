pub mod entry_store;
pub mod search_service;
pub mod markdown_service;
pub mod wiki_service;

pub use entry_store::{EntryStore, FileStore};
pub use search_service::SearchService;
pub use markdown_service::MarkdownService;
pub use wiki_service::WikiService;
