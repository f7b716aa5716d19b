//! In-memory storage for generated WAV clips.
//!
//! A clip lives exactly as long as its [`ClipHandle`]. Dropping the handle
//! removes the clip from the [`ClipStore`], so a clip is released once and only
//! once whether it is superseded in a [`ClipSlot`] or disposed explicitly.

use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Shared map of clip id to WAV bytes.
#[derive(Debug, Clone, Default)]
pub struct ClipStore {
    entries: Arc<RwLock<HashMap<Uuid, Bytes>>>,
}

impl ClipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a clip and returns the handle that owns it.
    pub fn insert(&self, wav: impl Into<Bytes>) -> ClipHandle {
        let id = Uuid::new_v4();
        let wav = wav.into();
        debug!(%id, bytes = wav.len(), "Storing clip");
        self.entries.write().insert(id, wav);
        ClipHandle {
            id,
            store: self.clone(),
        }
    }

    /// Returns the clip bytes if the clip has not been released.
    pub fn get(&self, id: &Uuid) -> Option<Bytes> {
        self.entries.read().get(id).cloned()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Number of live clips.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn release(&self, id: &Uuid) {
        if self.entries.write().remove(id).is_some() {
            debug!(%id, "Released clip");
        }
    }
}

/// Owning reference to a stored clip. Releases the clip on drop.
pub struct ClipHandle {
    id: Uuid,
    store: ClipStore,
}

impl ClipHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bytes(&self) -> Option<Bytes> {
        self.store.get(&self.id)
    }
}

impl fmt::Debug for ClipHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipHandle").field("id", &self.id).finish()
    }
}

impl Drop for ClipHandle {
    fn drop(&mut self) {
        self.store.release(&self.id);
    }
}

/// Holds the current clip of one consumer.
///
/// Replacing the clip releases the previous one.
#[derive(Debug, Default)]
pub struct ClipSlot {
    current: Option<ClipHandle>,
}

impl ClipSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handle` as the current clip, releasing the previous one.
    pub fn replace(&mut self, handle: ClipHandle) {
        self.current = Some(handle);
    }

    /// Releases the current clip. Returns whether a clip was held.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current_id(&self) -> Option<Uuid> {
        self.current.as_ref().map(ClipHandle::id)
    }
}
