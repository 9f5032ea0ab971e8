use std::sync::Arc;

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::WikiError;
use crate::forms::{EditEntryForm, NewEntryForm, Validation};
use crate::services::{EntryStore, SearchService};
use crate::types::{EntryView, SearchOutcome};

/// The encyclopedia's operations over an injected entry store
#[derive(Clone)]
pub struct WikiService {
    store: Arc<dyn EntryStore>,
}

impl WikiService {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// All titles, in store order
    pub fn list(&self) -> Result<Vec<String>, WikiError> {
        self.store.list_entries()
    }

    /// Fetch one entry for display
    pub fn view(&self, title: &str) -> Result<EntryView, WikiError> {
        let body = self.existing_body(title)?;
        Ok(EntryView {
            title: title.to_string(),
            body,
            modified: self.store.last_modified(title),
        })
    }

    pub fn search(&self, query: Option<&str>) -> Result<SearchOutcome, WikiError> {
        let titles = self.store.list_entries()?;
        Ok(SearchService::new().search(&titles, query))
    }

    /// Create a new entry, returning its title on success.
    ///
    /// An existing title is a conflict and leaves the store untouched.
    pub fn create(&self, form: &NewEntryForm) -> Result<Validation<String>, WikiError> {
        let entry = match form.validate() {
            Validation::Valid(entry) => entry,
            Validation::Invalid(errors) => {
                debug!("New entry form rejected: {:?}", errors);
                return Ok(Validation::Invalid(errors));
            }
        };

        // A case-insensitive filesystem resolves `python` to `Python.md`.
        let exists = self.store.list_entries()?.contains(&entry.title)
            || self.store.get_entry(&entry.title)?.is_some();
        if exists {
            warn!("Refusing to create duplicate entry '{}'", entry.title);
            return Err(WikiError::Conflict(entry.title));
        }

        self.store.save_entry(&entry.title, &entry.content)?;
        info!("Created entry '{}'", entry.title);
        Ok(Validation::Valid(entry.title))
    }

    /// Current body of `title`, for pre-filling the edit form
    pub fn edit_form(&self, title: &str) -> Result<String, WikiError> {
        self.existing_body(title)
    }

    /// Replace the body of `title`. Last write wins; existence is not re-checked.
    pub fn edit(&self, title: &str, form: &EditEntryForm) -> Result<Validation<()>, WikiError> {
        let content = match form.validate() {
            Validation::Valid(content) => content,
            Validation::Invalid(errors) => return Ok(Validation::Invalid(errors)),
        };
        self.store.save_entry(title, &content)?;
        info!("Updated entry '{}'", title);
        Ok(Validation::Valid(()))
    }

    /// A uniformly chosen title
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, WikiError> {
        let titles = self.store.list_entries()?;
        titles.choose(rng).cloned().ok_or(WikiError::EmptyStore)
    }

    fn existing_body(&self, title: &str) -> Result<String, WikiError> {
        if !self.store.list_entries()?.iter().any(|t| t == title) {
            warn!("Entry not found: '{}'", title);
            return Err(WikiError::NotFound(title.to_string()));
        }
        // The file can vanish between the listing and the read.
        self.store
            .get_entry(title)?
            .ok_or_else(|| WikiError::NotFound(title.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    use super::*;
    use crate::services::FileStore;

    fn service_with(entries: &[(&str, &str)]) -> (TempDir, WikiService) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        for (title, body) in entries {
            store.save_entry(title, body).unwrap();
        }
        (dir, WikiService::new(Arc::new(store)))
    }

    /// Resolves titles the way a case-insensitive filesystem resolves file names
    #[derive(Default)]
    struct CaseFoldingStore {
        files: Mutex<BTreeMap<String, (String, String)>>,
    }

    impl EntryStore for CaseFoldingStore {
        fn list_entries(&self) -> Result<Vec<String>, WikiError> {
            Ok(self.files.lock().unwrap().values().map(|(title, _)| title.clone()).collect())
        }

        fn get_entry(&self, title: &str) -> Result<Option<String>, WikiError> {
            Ok(self.files.lock().unwrap().get(&title.to_lowercase()).map(|(_, body)| body.clone()))
        }

        fn save_entry(&self, title: &str, body: &str) -> Result<(), WikiError> {
            let mut files = self.files.lock().unwrap();
            let slot = files
                .entry(title.to_lowercase())
                .or_insert_with(|| (title.to_string(), String::new()));
            slot.1 = body.to_string();
            Ok(())
        }
    }

    fn sample() -> (TempDir, WikiService) {
        service_with(&[("Python", "# Python"), ("Django", "# Django"), ("HTML", "# HTML")])
    }

    fn new_form(title: &str, content: &str) -> NewEntryForm {
        NewEntryForm { title: Some(title.into()), content: Some(content.into()) }
    }

    #[test]
    fn view_returns_last_saved_body() {
        let (_dir, service) = sample();
        service.edit("Python", &EditEntryForm { content: Some("v2".into()) }).unwrap();
        let entry = service.view("Python").unwrap();
        assert_eq!(entry.title, "Python");
        assert_eq!(entry.body, "v2");
    }

    #[test]
    fn view_and_edit_form_of_missing_title_are_not_found() {
        let (_dir, service) = sample();
        assert!(matches!(service.view("Rust"), Err(WikiError::NotFound(_))));
        assert!(matches!(service.edit_form("Rust"), Err(WikiError::NotFound(_))));
        assert!(matches!(service.view("python"), Err(WikiError::NotFound(_))));
    }

    #[test]
    fn create_saves_new_entry() {
        let (_dir, service) = sample();
        let outcome = service.create(&new_form("Rust", "# Rust")).unwrap();
        assert_eq!(outcome, Validation::Valid("Rust".to_string()));
        assert_eq!(service.view("Rust").unwrap().body, "# Rust");
    }

    #[test]
    fn create_with_existing_title_conflicts_without_writing() {
        let (_dir, service) = sample();
        let err = service.create(&new_form("HTML", "overwritten")).unwrap_err();
        assert!(matches!(err, WikiError::Conflict(ref title) if title == "HTML"));
        assert_eq!(service.view("HTML").unwrap().body, "# HTML");
    }

    #[test]
    fn create_conflicts_when_store_resolves_title_case_insensitively() {
        let store = Arc::new(CaseFoldingStore::default());
        store.save_entry("Python", "# Python").unwrap();
        let service = WikiService::new(store.clone());

        let err = service.create(&new_form("python", "clobbered")).unwrap_err();
        assert!(matches!(err, WikiError::Conflict(ref title) if title == "python"));
        assert_eq!(store.get_entry("Python").unwrap().as_deref(), Some("# Python"));
        assert_eq!(store.list_entries().unwrap(), vec!["Python"]);
    }

    #[test]
    fn invalid_create_does_not_touch_store() {
        let (_dir, service) = sample();
        let outcome = service.create(&new_form("Rust", "")).unwrap();
        assert!(matches!(outcome, Validation::Invalid(_)));
        assert_eq!(service.list().unwrap().len(), 3);
    }

    #[test]
    fn edit_overwrites_regardless_of_prior_body() {
        let (_dir, service) = sample();
        let form = EditEntryForm { content: Some("rewritten".into()) };
        assert_eq!(service.edit("Django", &form).unwrap(), Validation::Valid(()));
        assert_eq!(service.edit_form("Django").unwrap(), "rewritten");
    }

    #[test]
    fn edit_of_unknown_title_creates_it() {
        let (_dir, service) = sample();
        let form = EditEntryForm { content: Some("# Rust".into()) };
        assert_eq!(service.edit("Rust", &form).unwrap(), Validation::Valid(()));
        assert_eq!(service.view("Rust").unwrap().body, "# Rust");
    }

    #[test]
    fn edit_with_padded_title_is_rejected() {
        let (_dir, service) = sample();
        let form = EditEntryForm { content: Some("dup".into()) };
        assert!(matches!(service.edit(" Python ", &form), Err(WikiError::InvalidTitle(_))));
        assert_eq!(service.list().unwrap(), vec!["Django", "HTML", "Python"]);
    }

    #[test]
    fn invalid_edit_keeps_body() {
        let (_dir, service) = sample();
        let outcome = service.edit("Django", &EditEntryForm { content: None }).unwrap();
        assert!(matches!(outcome, Validation::Invalid(_)));
        assert_eq!(service.edit_form("Django").unwrap(), "# Django");
    }

    #[test]
    fn search_examples() {
        let (_dir, service) = sample();
        assert_eq!(
            service.search(Some("py")).unwrap(),
            SearchOutcome::Listing { query: "py".into(), results: vec!["Python".into()] }
        );
        assert_eq!(service.search(Some("HTML")).unwrap(), SearchOutcome::Exact("HTML".into()));
        assert_eq!(
            service.search(Some("zzz")).unwrap(),
            SearchOutcome::Listing { query: "zzz".into(), results: vec![] }
        );
    }

    #[test]
    fn random_picks_existing_titles_uniformly() {
        let (_dir, service) = service_with(&[("A", "a"), ("B", "b")]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut a = 0;
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let title = service.random(&mut rng).unwrap();
            if title == "A" {
                a += 1;
            }
            seen.insert(title);
        }
        assert_eq!(seen, HashSet::from(["A".to_string(), "B".to_string()]));
        assert!((400..=600).contains(&a), "skewed pick count: {a}");
    }

    #[test]
    fn random_on_empty_store_is_an_explicit_error() {
        let (_dir, service) = service_with(&[]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(service.random(&mut rng), Err(WikiError::EmptyStore)));
    }
}
