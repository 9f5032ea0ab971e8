use std::path::PathBuf;
use std::time::SystemTime;
use std::fs;
use log::{debug, info, warn, error};
use crate::errors::WikiError;

const ENTRY_EXTENSION: &str = "md";

/// Longest title, in bytes, whose `<title>.md` fits a 255-byte file name
pub const MAX_TITLE_BYTES: usize = 255 - ENTRY_EXTENSION.len() - 1;

/// Persistence for entries, keyed by title
pub trait EntryStore: Send + Sync {
    /// Every known title, sorted
    fn list_entries(&self) -> Result<Vec<String>, WikiError>;

    /// The body of `title`, or `None` if there is no such entry
    fn get_entry(&self, title: &str) -> Result<Option<String>, WikiError>;

    /// Create `title` or replace its body wholesale
    fn save_entry(&self, title: &str, body: &str) -> Result<(), WikiError>;

    /// When `title` was last written, if known
    fn last_modified(&self, _title: &str) -> Option<SystemTime> {
        None
    }
}

/// Whether `title` can be used as an entry file name
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
        && title == title.trim()
        && title.len() <= MAX_TITLE_BYTES
        && !title.starts_with('.')
        && !title.contains(['/', '\\'])
        && !title.chars().any(char::is_control)
}

/// Entry store backed by a directory of `<title>.md` files
#[derive(Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new file store
    pub fn new(base_dir: PathBuf) -> Self {
        debug!("Creating FileStore with base directory: {:?}", base_dir);
        Self { base_dir }
    }

    /// Create the entries directory if it does not exist yet
    pub fn ensure_dir(&self) -> Result<(), WikiError> {
        if !self.base_dir.is_dir() {
            info!("Creating entries directory {:?}", self.base_dir);
            fs::create_dir_all(&self.base_dir)?;
        }
        Ok(())
    }

    fn entry_path(&self, title: &str) -> Result<PathBuf, WikiError> {
        if !is_valid_title(title) {
            warn!("Rejecting invalid title: {:?}", title);
            return Err(WikiError::InvalidTitle(title.to_string()));
        }
        Ok(self.base_dir.join(format!("{title}.{ENTRY_EXTENSION}")))
    }
}

impl EntryStore for FileStore {
    fn list_entries(&self) -> Result<Vec<String>, WikiError> {
        debug!("Listing entries in {:?}", self.base_dir);

        let entries = fs::read_dir(&self.base_dir)
            .map_err(|e| {
                error!("Failed to read directory {:?}: {}", self.base_dir, e);
                WikiError::Io(e)
            })?;

        let mut titles = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type()
                        .map(|ft| ft.is_file())
                        .unwrap_or(false);
                    if !is_file {
                        continue;
                    }
                    let path = entry.path();
                    let is_entry = path.extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| ext == ENTRY_EXTENSION);
                    let stem = path.file_stem().and_then(|s| s.to_str());
                    match stem {
                        Some(title) if is_entry && is_valid_title(title) => titles.push(title.to_string()),
                        _ => debug!("Skipping non-entry file: {:?}", path),
                    }
                }
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                }
            }
        }

        titles.sort();
        debug!("Found {} entries", titles.len());
        Ok(titles)
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>, WikiError> {
        let Ok(path) = self.entry_path(title) else {
            return Ok(None);
        };
        debug!("Reading entry {:?} from {:?}", title, path);

        match fs::read_to_string(&path) {
            Ok(body) => {
                debug!("Read entry {:?}, {} bytes", title, body.len());
                Ok(Some(body))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read entry {:?}: {}", path, e);
                Err(WikiError::Io(e))
            }
        }
    }

    fn save_entry(&self, title: &str, body: &str) -> Result<(), WikiError> {
        let path = self.entry_path(title)?;
        fs::write(&path, body)
            .map_err(|e| {
                error!("Failed to write entry {:?}: {}", path, e);
                WikiError::Io(e)
            })?;
        info!("Saved entry {:?}, {} bytes", title, body.len());
        Ok(())
    }

    fn last_modified(&self, title: &str) -> Option<SystemTime> {
        let path = self.entry_path(title).ok()?;
        fs::metadata(path).and_then(|m| m.modified()).ok()
    }
}
