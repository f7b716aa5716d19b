use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::core::clips::{ClipHandle, ClipSlot, ClipStore};

/// Application state that can be shared across handlers
pub struct AppState {
    pub config: ServerConfig,
    /// Generated WAV clips, addressable by id
    pub clips: ClipStore,
    /// Current clip of each session; replacing one releases the previous clip
    sessions: Mutex<Sessions>,
}

/// Session slots ordered from least to most recently updated
#[derive(Default)]
struct Sessions {
    slots: HashMap<String, ClipSlot>,
    order: VecDeque<String>,
}

impl Sessions {
    fn touch(&mut self, session: &str) {
        if let Some(pos) = self.order.iter().position(|s| s == session) {
            self.order.remove(pos);
        }
        self.order.push_back(session.to_string());
    }

    fn remove(&mut self, session: &str) -> Option<ClipSlot> {
        self.order.retain(|s| s != session);
        self.slots.remove(session)
    }
}

impl AppState {
    pub fn new(config: ServerConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            clips: ClipStore::new(),
            sessions: Mutex::new(Sessions::default()),
        })
    }

    /// Makes `handle` the session's current clip, releasing its previous one.
    ///
    /// When more than `max_sessions` sessions hold a clip, the least recently
    /// updated session is dropped along with its clip.
    pub fn set_session_clip(&self, session: &str, handle: ClipHandle) {
        let mut sessions = self.sessions.lock();
        sessions
            .slots
            .entry(session.to_string())
            .or_default()
            .replace(handle);
        sessions.touch(session);

        while sessions.slots.len() > self.config.max_sessions {
            let Some(oldest) = sessions.order.pop_front() else {
                break;
            };
            if sessions.slots.remove(&oldest).is_some() {
                debug!(session = %oldest, "Evicted idle session clip");
            }
        }
    }

    /// Releases the clip with `id` from whichever session holds it.
    ///
    /// Returns `false` when no session holds the clip.
    pub fn release_clip(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.lock();
        let owner = sessions
            .slots
            .iter()
            .find(|(_, slot)| slot.current_id() == Some(id))
            .map(|(session, _)| session.clone());

        match owner {
            Some(session) => sessions.remove(&session).is_some(),
            None => false,
        }
    }

    /// Id of the session's current clip, if any
    pub fn session_clip(&self, session: &str) -> Option<Uuid> {
        self.sessions
            .lock()
            .slots
            .get(session)
            .and_then(ClipSlot::current_id)
    }

    /// Number of sessions currently holding a clip
    pub fn session_count(&self) -> usize {
        self.sessions.lock().slots.len()
    }
}
