pub mod codec;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::USER_TABLE;
use crate::error::{AppError, Result};
use crate::models::{Document, User};

/// Store handle type (Arc-wrapped for sharing across handlers)
pub type Store = Arc<RecordStore>;

/// Flat-file record store over a single JSON document
///
/// Every operation loads the document fresh from disk and mutating
/// operations rewrite it in full. All mutations run under one global write
/// lock held across the load-modify-save span, so concurrent writers
/// serialize instead of losing updates. Reads take no lock: the rename in
/// [`codec::save`] guarantees they see either the prior or the new
/// document, never a torn one.
pub struct RecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Open the store at the given path
    ///
    /// Creates the parent directory and seeds an empty document on first
    /// run. A file that goes missing later is still a storage error at
    /// operation time.
    pub fn open(path: impl AsRef<Path>) -> Result<Store> {
        let path = path.as_ref().to_path_buf();
        tracing::info!("Opening store at: {:?}", path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    tracing::error!("Failed to create store directory: {}", e);
                    AppError::Storage(e)
                })?;
            }
        }

        if !path.exists() {
            codec::save(&path, &Document::default())?;
            tracing::info!("Seeded empty document");
        }

        tracing::info!("Store initialized successfully");

        Ok(Arc::new(RecordStore {
            path,
            write_lock: Mutex::new(()),
        }))
    }

    /// Path of the backing store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current document
    pub fn load(&self) -> Result<Document> {
        codec::load(&self.path)
    }

    /// Fetch the first record whose id matches
    pub fn get_by_id(&self, id: i64) -> Result<User> {
        let document = codec::load(&self.path)?;
        let users = document
            .table(USER_TABLE)
            .ok_or_else(|| AppError::TableNotFound(USER_TABLE.to_string()))?;

        users
            .iter()
            .find(|user| user.matches_id(id))
            .cloned()
            .ok_or(AppError::NotFound)
    }

    /// List records whose name contains the given substring
    ///
    /// An empty substring returns the whole table in storage order. A
    /// non-empty substring that matches nothing yields an empty list, not
    /// an error. Matching is case-sensitive.
    pub fn list_by_name_contains(&self, substring: &str) -> Result<Vec<User>> {
        let document = codec::load(&self.path)?;
        let users = document
            .table(USER_TABLE)
            .ok_or_else(|| AppError::TableNotFound(USER_TABLE.to_string()))?;

        if substring.is_empty() {
            return Ok(users.clone());
        }

        Ok(users
            .iter()
            .filter(|user| user.name.contains(substring))
            .cloned()
            .collect())
    }

    /// Append a record to the user table, creating the table if absent
    ///
    /// The record keeps whatever id the caller supplied, including none.
    pub fn create(&self, user: User) -> Result<User> {
        let _guard = self.lock_writes();

        let mut document = codec::load(&self.path)?;
        document.table_or_default(USER_TABLE).push(user.clone());
        codec::save(&self.path, &document)?;

        Ok(user)
    }

    /// Replace name, email and password of the first record whose id matches
    ///
    /// The id itself is immutable across updates.
    pub fn update_by_id(&self, id: i64, update: User) -> Result<User> {
        let _guard = self.lock_writes();

        let mut document = codec::load(&self.path)?;
        let users = document
            .table_mut(USER_TABLE)
            .ok_or_else(|| AppError::TableNotFound(USER_TABLE.to_string()))?;

        let user = users
            .iter_mut()
            .find(|user| user.matches_id(id))
            .ok_or(AppError::NotFound)?;

        user.name = update.name;
        user.email = update.email;
        user.password = update.password;
        let updated = user.clone();

        codec::save(&self.path, &document)?;

        Ok(updated)
    }

    /// Remove the first record whose id matches, keeping the rest in order
    ///
    /// Returns the removed record's prior value.
    pub fn delete_by_id(&self, id: i64) -> Result<User> {
        let _guard = self.lock_writes();

        let mut document = codec::load(&self.path)?;
        let users = document
            .table_mut(USER_TABLE)
            .ok_or_else(|| AppError::TableNotFound(USER_TABLE.to_string()))?;

        let position = users
            .iter()
            .position(|user| user.matches_id(id))
            .ok_or(AppError::NotFound)?;
        let removed = users.remove(position);

        codec::save(&self.path, &document)?;

        Ok(removed)
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means another writer panicked; the file on
        // disk is still a complete snapshot, so writing may continue.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
