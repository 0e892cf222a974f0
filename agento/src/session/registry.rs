//! Concurrent map of live sessions.

use super::Session;
use crate::config::AgentoConfig;
use crate::events::{EventSink, NoOpEventSink};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Shared handle to one session.
///
/// The lock serialises callers of the same session; it must not be held
/// across an `.await`.
pub type SessionHandle = Arc<RwLock<Session>>;

/// Holds the sessions of a multi-user host, keyed by session id.
pub struct SessionRegistry {
    config: AgentoConfig,
    event_sink: Arc<dyn EventSink>,
    sessions: DashMap<Uuid, SessionHandle>,
}

impl SessionRegistry {
    /// Creates an empty registry whose sessions start from `config`.
    #[must_use]
    pub fn new(config: AgentoConfig) -> Self {
        Self {
            config,
            event_sink: Arc::new(NoOpEventSink),
            sessions: DashMap::new(),
        }
    }

    /// Sets the sink handed to every new session.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = sink;
        self
    }

    /// Returns the configuration new sessions start from.
    #[must_use]
    pub const fn config(&self) -> &AgentoConfig {
        &self.config
    }

    /// Creates and registers a new session.
    pub fn create(&self) -> SessionHandle {
        let session = Session::new(&self.config).with_event_sink(self.event_sink.clone());
        let id = session.id();
        let handle = Arc::new(RwLock::new(session));
        self.sessions.insert(id, handle.clone());
        info!(session_id = %id, live = self.sessions.len(), "session registered");
        handle
    }

    /// Returns the session for `id`, creating it on first access.
    pub fn get_or_create(&self, id: Uuid) -> SessionHandle {
        self.sessions
            .entry(id)
            .or_insert_with(|| {
                info!(session_id = %id, "session registered on first access");
                Arc::new(RwLock::new(
                    Session::with_id(id, &self.config).with_event_sink(self.event_sink.clone()),
                ))
            })
            .clone()
    }

    /// Looks up a session.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.get(&id).map(|entry| entry.value().clone())
    }

    /// Discards a session. Returns the handle if it existed.
    pub fn remove(&self, id: Uuid) -> Option<SessionHandle> {
        let removed = self.sessions.remove(&id).map(|(_, handle)| handle);
        if removed.is_some() {
            info!(session_id = %id, "session discarded");
        }
        removed
    }

    /// Returns the ids of all live sessions.
    #[must_use]
    pub fn ids(&self) -> Vec<Uuid> {
        self.sessions.iter().map(|entry| *entry.key()).collect()
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(AgentoConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ModuleId, ModuleOutput, ModuleStatus};
    use crate::events::CollectingEventSink;

    #[test]
    fn test_create_and_get() {
        let registry = SessionRegistry::default();
        assert!(registry.is_empty());

        let handle = registry.create();
        let id = handle.read().id();

        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&registry.get(id).unwrap(), &handle));
        assert_eq!(registry.ids(), vec![id]);
    }

    #[test]
    fn test_get_or_create_is_stable() {
        let registry = SessionRegistry::default();
        let id = Uuid::new_v4();

        let first = registry.get_or_create(id);
        first.write().save_output(ModuleId::Module1, ModuleOutput::new());

        let second = registry.get_or_create(id);
        assert_eq!(registry.len(), 1);
        assert_eq!(second.read().get_status(ModuleId::Module1), ModuleStatus::Completed);
    }

    #[test]
    fn test_remove() {
        let registry = SessionRegistry::default();
        let id = registry.create().read().id();

        assert!(registry.remove(id).is_some());
        assert!(registry.remove(id).is_none());
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_sessions_share_registry_sink() {
        let sink = Arc::new(CollectingEventSink::new());
        let registry = SessionRegistry::new(AgentoConfig::new().with_api_key("sk-1"))
            .with_event_sink(sink.clone());

        let a = registry.create();
        let b = registry.create();
        a.write().set_status(ModuleId::Module1, ModuleStatus::InProgress);
        b.write().set_status(ModuleId::Module2, ModuleStatus::Failed);

        assert_eq!(sink.events_of_type("module.status_changed").len(), 2);
        assert!(a.read().has_api_key());
        assert_eq!(b.read().get_status(ModuleId::Module1), ModuleStatus::NotStarted);
    }

    #[test]
    fn test_concurrent_sessions() {
        let registry = Arc::new(SessionRegistry::default());

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let handle = registry.create();
                    handle.write().save_output(ModuleId::Module1, ModuleOutput::new());
                })
            })
            .collect();

        for thread in threads {
            thread.join().unwrap();
        }

        assert_eq!(registry.len(), 8);
        for id in registry.ids() {
            let handle = registry.get(id).unwrap();
            assert_eq!(handle.read().get_status(ModuleId::Module1), ModuleStatus::Completed);
        }
    }
}
