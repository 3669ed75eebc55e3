use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::constants::{COMMENTS_STORE_KEY, POSTS_STORE_KEY, PROFILE_STORE_KEY_PREFIX};
use crate::models::SourceGroup;
use crate::types::SourceTexts;
use crate::Error;

/// Read access to a host key/value store holding JSON-encoded strings, such
/// as a snapshot of browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn keys(&self) -> Vec<String>;
}

impl KeyValueStore for HashMap<String, String> {
    fn get_item(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }
}

impl KeyValueStore for BTreeMap<String, String> {
    fn get_item(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSourceKind {
    /// `posts`: JSON array of `{ "content": .. }`
    Posts,
    /// `postComments`: JSON object of post id to an array of `{ "content": .. }`
    Comments,
    /// `profile_*`: one JSON `{ "bio": .. }` per key
    Bios,
}

#[derive(Deserialize)]
struct StoredContent {
    content: Option<String>,
}

#[derive(Deserialize)]
struct StoredProfile {
    bio: Option<String>,
}

/// One source group read from a [`KeyValueStore`].
pub struct StoreSourceGroup<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    kind: StoreSourceKind,
}

impl<'a, S: KeyValueStore + ?Sized> StoreSourceGroup<'a, S> {
    pub fn new(store: &'a S, kind: StoreSourceKind) -> Self {
        Self { store, kind }
    }

    pub fn kind(&self) -> StoreSourceKind {
        self.kind
    }

    fn read_posts(&self) -> Result<Vec<Result<String, Error>>, Error> {
        let Some(raw_posts) = self.store.get_item(POSTS_STORE_KEY) else {
            return Ok(Vec::new());
        };

        let posts: Vec<Value> = serde_json::from_str(&raw_posts)?;

        Ok(posts
            .into_iter()
            .filter_map(|post| read_content(post).transpose())
            .collect())
    }

    fn read_comments(&self) -> Result<Vec<Result<String, Error>>, Error> {
        let Some(raw_comments) = self.store.get_item(COMMENTS_STORE_KEY) else {
            return Ok(Vec::new());
        };

        let comments_by_post: serde_json::Map<String, Value> = serde_json::from_str(&raw_comments)?;

        Ok(comments_by_post
            .into_iter()
            // Entries that are not arrays carry no comments
            .filter_map(|(_, comments)| match comments {
                Value::Array(comments) => Some(comments),
                _ => None,
            })
            .flatten()
            .filter_map(|comment| read_content(comment).transpose())
            .collect())
    }

    fn read_bios(&self) -> Result<Vec<Result<String, Error>>, Error> {
        let mut profile_keys: Vec<String> = self
            .store
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(PROFILE_STORE_KEY_PREFIX))
            .collect();
        profile_keys.sort();

        Ok(profile_keys
            .into_iter()
            .filter_map(|key| {
                let raw_profile = self.store.get_item(&key)?;

                match serde_json::from_str::<StoredProfile>(&raw_profile) {
                    Ok(profile) => profile.bio.filter(|bio| !bio.is_empty()).map(Ok),
                    Err(err) => Some(Err(Error::ParserError(format!(
                        "Malformed profile `{}`: {}",
                        key, err
                    )))),
                }
            })
            .collect())
    }
}

fn read_content(entry: Value) -> Result<Option<String>, Error> {
    let stored: StoredContent = serde_json::from_value(entry)?;

    Ok(stored.content.filter(|content| !content.is_empty()))
}

impl<S: KeyValueStore + ?Sized> SourceGroup for StoreSourceGroup<'_, S> {
    fn name(&self) -> &str {
        match self.kind {
            StoreSourceKind::Posts => POSTS_STORE_KEY,
            StoreSourceKind::Comments => COMMENTS_STORE_KEY,
            StoreSourceKind::Bios => PROFILE_STORE_KEY_PREFIX,
        }
    }

    fn texts(&self) -> Result<SourceTexts<'_>, Error> {
        let entries = match self.kind {
            StoreSourceKind::Posts => self.read_posts()?,
            StoreSourceKind::Comments => self.read_comments()?,
            StoreSourceKind::Bios => self.read_bios()?,
        };

        Ok(Box::new(entries.into_iter().map(|entry| entry.map(Cow::<str>::Owned))))
    }
}

/// The posts, comments and bios source groups of a host store.
pub struct KeyValueStoreSources<'a, S: KeyValueStore + ?Sized> {
    pub posts: StoreSourceGroup<'a, S>,
    pub comments: StoreSourceGroup<'a, S>,
    pub bios: StoreSourceGroup<'a, S>,
}

impl<'a, S: KeyValueStore + ?Sized> KeyValueStoreSources<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            posts: StoreSourceGroup::new(store, StoreSourceKind::Posts),
            comments: StoreSourceGroup::new(store, StoreSourceKind::Comments),
            bios: StoreSourceGroup::new(store, StoreSourceKind::Bios),
        }
    }

    pub fn groups(&self) -> [&dyn SourceGroup; 3] {
        [&self.posts, &self.comments, &self.bios]
    }

    /// Same as `groups`, with the demo posts scanned right after the stored
    /// posts. Scan order decides how tied trends are ranked.
    pub fn groups_with_seed<'s>(
        &'s self,
        seed_posts: &'s dyn SourceGroup,
    ) -> [&'s dyn SourceGroup; 4] {
        [&self.posts, seed_posts, &self.comments, &self.bios]
    }

    /// Whether a change to `key` can affect the trend list, i.e. whether a
    /// storage change notification for it should trigger a recompute.
    pub fn is_source_key(key: &str) -> bool {
        key == POSTS_STORE_KEY
            || key == COMMENTS_STORE_KEY
            || key.starts_with(PROFILE_STORE_KEY_PREFIX)
    }
}
