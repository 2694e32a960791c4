//! Generic publish/subscribe registry over a closed set of event kinds.
//!
//! The hub decouples state mutation from reaction: a publisher emits a
//! payload for a declared kind and every handler bound to that kind runs
//! synchronously, in bind order. The hub owns no domain knowledge; the kind
//! type `K` and payload type `E` are supplied by the embedding component.
//!
//! Handlers are keyed by a caller-chosen id. Re-binding the same id to the
//! same kind replaces the stored closure in place (last write wins, original
//! position kept), which also replaces whatever extra state the closure
//! captured.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use thiserror::Error;

/// Result type returned by event handlers.
pub type HandlerResult = anyhow::Result<()>;

type Handler<E> = Box<dyn FnMut(&E) -> HandlerResult + Send>;

/// Errors that can occur during hub operations. Distinct from any domain
/// error family of the embedding component.
#[derive(Debug, Error)]
pub enum HubError {
    /// The kind was not part of the declared set.
    #[error("unknown event kind \"{0}\"")]
    UnknownEventKind(String),

    /// A bound handler returned an error during an emission. Remaining
    /// handlers still ran; this carries the first failure.
    #[error("handler \"{handler}\" failed for event \"{kind}\"")]
    HandlerFailed {
        kind: String,
        handler: String,
        #[source]
        source: anyhow::Error,
    },
}

/// A publish/subscribe registry for a fixed set of event kinds.
pub struct EventHub<K, E> {
    handlers: HashMap<K, Vec<(String, Handler<E>)>>,
}

impl<K, E> EventHub<K, E>
where
    K: Copy + Eq + Hash + fmt::Display,
{
    /// Creates a hub scoped to the given closed set of kinds. Binding or
    /// emitting any other kind fails with [`HubError::UnknownEventKind`].
    pub fn new(kinds: impl IntoIterator<Item = K>) -> Self {
        let mut hub = Self {
            handlers: HashMap::new(),
        };
        hub.declare(kinds);
        hub
    }

    /// Replaces the declared kind set, dropping all prior registrations.
    pub fn declare(&mut self, kinds: impl IntoIterator<Item = K>) {
        self.handlers = kinds.into_iter().map(|kind| (kind, Vec::new())).collect();
    }

    /// Whether `kind` is part of the declared set.
    pub fn is_declared(&self, kind: K) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// The declared kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.handlers.keys().copied()
    }

    /// Number of handlers currently bound to `kind`.
    pub fn handler_count(&self, kind: K) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Registers `handler` under `id` for every future emission of `kind`.
    ///
    /// Handlers run in bind order. Re-binding an id already bound to this
    /// kind replaces its closure in place, keeping its position in the run
    /// order. Extra per-handler state travels as closure captures.
    pub fn bind<F>(&mut self, kind: K, id: &str, handler: F) -> Result<(), HubError>
    where
        F: FnMut(&E) -> HandlerResult + Send + 'static,
    {
        let entries = self
            .handlers
            .get_mut(&kind)
            .ok_or_else(|| HubError::UnknownEventKind(kind.to_string()))?;
        let handler: Handler<E> = Box::new(handler);
        match entries.iter_mut().find(|(bound, _)| bound.as_str() == id) {
            Some(entry) => entry.1 = handler,
            None => entries.push((id.to_string(), handler)),
        }
        Ok(())
    }

    /// Removes the handler bound under `id` for `kind`. Removing an id that
    /// isn't bound is a no-op.
    pub fn unbind(&mut self, kind: K, id: &str) -> Result<(), HubError> {
        let entries = self
            .handlers
            .get_mut(&kind)
            .ok_or_else(|| HubError::UnknownEventKind(kind.to_string()))?;
        entries.retain(|(bound, _)| bound != id);
        Ok(())
    }

    /// Removes every handler bound to `kind`.
    pub fn unbind_all(&mut self, kind: K) -> Result<(), HubError> {
        let entries = self
            .handlers
            .get_mut(&kind)
            .ok_or_else(|| HubError::UnknownEventKind(kind.to_string()))?;
        entries.clear();
        Ok(())
    }

    /// Synchronously invokes every handler bound to `kind`, in bind order.
    ///
    /// A failing handler does not prevent the remaining handlers from
    /// running: every failure is logged, and the first one is returned as
    /// [`HubError::HandlerFailed`] after all handlers ran.
    pub fn emit(&mut self, kind: K, event: &E) -> Result<(), HubError> {
        let entries = self
            .handlers
            .get_mut(&kind)
            .ok_or_else(|| HubError::UnknownEventKind(kind.to_string()))?;
        let mut first_failure = None;
        for (id, handler) in entries.iter_mut() {
            if let Err(source) = handler(event) {
                log::error!("handler \"{id}\" failed for event \"{kind}\": {source:#}");
                if first_failure.is_none() {
                    first_failure = Some(HubError::HandlerFailed {
                        kind: kind.to_string(),
                        handler: id.clone(),
                        source,
                    });
                }
            }
        }
        first_failure.map_or(Ok(()), Err)
    }
}

impl<K, E> fmt::Debug for EventHub<K, E>
where
    K: Copy + Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, entries) in &self.handlers {
            let ids: Vec<&str> = entries.iter().map(|(id, _)| id.as_str()).collect();
            map.entry(&kind.to_string(), &ids);
        }
        map.finish()
    }
}
