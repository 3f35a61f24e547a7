//! High-level session logic: lookup, generate, reset.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{instrument, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::engine::{CycleState, Generation, Generator};
use crate::engine::output::Synthesizer;
use crate::preprocessing::Request;

type SessionState = Arc<Mutex<CycleState>>;

/// Public handle to the session table. Cloning shares the same table.
#[derive(Clone)]
pub struct SessionCache {
    inner: Arc<Mutex<LruCache<String, SessionState>>>,
}

// A panic mid-update cannot leave a `CycleState` half-written, so poisoned
// locks are taken over as-is.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(config.session_capacity)
            .ok_or(ConfigError::Zero("session_capacity"))?;
        Ok(Self::new(capacity))
    }

    fn session(&self, session_id: &str) -> SessionState {
        let mut table = lock(&self.inner);
        if let Some(state) = table.get(session_id) {
            return Arc::clone(state);
        }
        let state = SessionState::default();
        table.put(session_id.to_string(), Arc::clone(&state));
        state
    }

    /// Run one generation for `session_id`, advancing its cycle.
    /// Calls for the same session are serialized; other sessions proceed.
    #[instrument(skip_all, fields(session = session_id, domain = %S::DOMAIN))]
    pub fn generate<'g, S: Synthesizer>(
        &self,
        session_id: &str,
        generator: &'g Generator,
        synthesizer: &S,
        request: &Request<S::Style>,
    ) -> Generation<'g> {
        let session = self.session(session_id);
        let mut state = lock(&session);

        let (next, generation) = generator.generate(synthesizer, state.clone(), request);
        trace!(index = next.match_index, "session cycle advanced");
        *state = next;
        generation
    }

    /// Current cycling state for `session_id`, if the session is live.
    pub fn state(&self, session_id: &str) -> Option<CycleState> {
        let state = lock(&self.inner).peek(session_id).map(Arc::clone)?;
        let snapshot = lock(&state).clone();
        Some(snapshot)
    }

    /// Forget a session; its next call starts from the top match again.
    pub fn reset(&self, session_id: &str) -> bool {
        lock(&self.inner).pop(session_id).is_some()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
