use crate::middleware::{BoxFuture, Middleware, Next};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Root reducer: pure function from current state and action to next state
pub type Reducer<S, A> = fn(S, &A) -> S;

/// Callback invoked after every reduction
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Redux-style Store that holds application state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - Centralized state management
/// - Actions are dispatched to modify state
/// - A single pure root reducer handles state transitions
/// - State is immutable (replaced on each action)
///
/// `Store` is a cheap handle: clones share the same state, middleware and
/// listeners. Build it once at startup and hand clones to whoever needs to
/// read or dispatch.
///
/// # Middleware
///
/// ```rust,ignore
/// let store = Store::builder(reduce)
///     .add_middleware(LoggingMiddleware::new())
///     .add_middleware(ApiMiddleware::new(client))
///     .build();
///
/// store.dispatch(load_bugs()).await;
/// ```
pub struct Store<S, A> {
    inner: Arc<StoreInner<S, A>>,
}

struct StoreInner<S, A> {
    state: Mutex<Arc<S>>,
    reducer: Reducer<S, A>,
    middleware: Vec<Arc<dyn Middleware<S, A>>>,
    listeners: Mutex<Vec<Listener>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    /// Create a store without middleware, starting from `S::default()`
    pub fn new(reducer: Reducer<S, A>) -> Self
    where
        S: Default,
    {
        StoreBuilder::new(reducer).build()
    }

    pub fn builder(reducer: Reducer<S, A>) -> StoreBuilder<S, A> {
        StoreBuilder::new(reducer)
    }

    /// Current state snapshot
    ///
    /// The snapshot never changes; a later dispatch swaps in a new one.
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&self.lock_state())
    }

    /// Register a listener called after every dispatch, in registration order
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        lock(&self.inner.listeners).push(Arc::new(listener));
    }

    /// Dispatch an action through the middleware chain, then the reducer
    ///
    /// The returned future completes once every middleware is done with the
    /// action, including any network call it triggered and the follow-up
    /// actions dispatched from it. Dispatches may run concurrently; state is
    /// read by each middleware at the moment it runs.
    pub fn dispatch(&self, action: A) -> BoxFuture<'static, ()> {
        let store = self.clone();
        Box::pin(async move {
            Next::new(&store, &store.inner.middleware).run(action).await;
        })
    }

    /// Terminal stage of the chain: apply the reducer and notify listeners
    pub(crate) fn reduce(&self, action: A) {
        {
            let mut state = self.lock_state();
            let next = (self.inner.reducer)(S::clone(&state), &action);
            *state = Arc::new(next);
        }

        // Listeners run outside the locks so they may read state or dispatch
        let listeners = lock(&self.inner.listeners).clone();
        log::trace!("State replaced, notifying {} listeners", listeners.len());
        for listener in listeners {
            listener();
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, Arc<S>> {
        lock(&self.inner.state)
    }
}

/// Builder for a [`Store`]
///
/// Middleware runs in the order it was added: the first one sees every
/// action first, the last one sits right before the reducer.
pub struct StoreBuilder<S, A> {
    reducer: Reducer<S, A>,
    state: Option<S>,
    middleware: Vec<Arc<dyn Middleware<S, A>>>,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    pub fn new(reducer: Reducer<S, A>) -> Self {
        Self {
            reducer,
            state: None,
            middleware: Vec::new(),
        }
    }

    /// Start from the given state instead of `S::default()`
    pub fn with_state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// Append middleware to the chain
    pub fn add_middleware<M: Middleware<S, A> + 'static>(mut self, middleware: M) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Store<S, A>
    where
        S: Default,
    {
        let state = self.state.unwrap_or_default();
        Store {
            inner: Arc::new(StoreInner {
                state: Mutex::new(Arc::new(state)),
                reducer: self.reducer,
                middleware: self.middleware,
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }
}

/// Lock a mutex, recovering the data if a listener or reducer panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum CounterAction {
        Increment,
        Add(i64),
        Reset,
        Unknown,
    }

    fn counter(state: i64, action: &CounterAction) -> i64 {
        match action {
            CounterAction::Increment => state + 1,
            CounterAction::Add(n) => state + n,
            CounterAction::Reset => 0,
            CounterAction::Unknown => state,
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_default() {
        let store = Store::new(counter);
        assert_eq!(*store.get_state(), 0);
    }

    #[tokio::test]
    async fn test_with_state() {
        let store = Store::builder(counter).with_state(41).build();
        store.dispatch(CounterAction::Increment).await;
        assert_eq!(*store.get_state(), 42);
    }

    #[tokio::test]
    async fn test_state_equals_reducer_of_previous_state() {
        let store = Store::new(counter);
        let actions = [
            CounterAction::Increment,
            CounterAction::Add(5),
            CounterAction::Unknown,
            CounterAction::Reset,
            CounterAction::Add(-3),
        ];

        for action in actions {
            let previous = *store.get_state();
            store.dispatch(action).await;
            assert_eq!(*store.get_state(), counter(previous, &action));
        }
    }

    #[tokio::test]
    async fn test_snapshots_are_not_mutated() {
        let store = Store::new(counter);
        let before = store.get_state();

        store.dispatch(CounterAction::Add(10)).await;

        assert_eq!(*before, 0);
        assert_eq!(*store.get_state(), 10);
    }

    #[tokio::test]
    async fn test_listeners_run_in_registration_order() {
        let store = Store::new(counter);
        let calls = Arc::new(Mutex::new(Vec::new()));

        for id in 0..3 {
            let calls = Arc::clone(&calls);
            store.subscribe(move || calls.lock().unwrap().push(id));
        }

        store.dispatch(CounterAction::Increment).await;
        store.dispatch(CounterAction::Increment).await;

        assert_eq!(*calls.lock().unwrap(), vec![0, 1, 2, 0, 1, 2]);
    }

    #[tokio::test]
    async fn test_listener_sees_new_state() {
        let store = Store::new(counter);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = store.clone();
        let seen_by_listener = Arc::clone(&seen);
        store.subscribe(move || seen_by_listener.lock().unwrap().push(*handle.get_state()));

        store.dispatch(CounterAction::Add(2)).await;
        store.dispatch(CounterAction::Add(3)).await;

        assert_eq!(*seen.lock().unwrap(), vec![2, 5]);
    }

    #[tokio::test]
    async fn test_listener_called_for_identity_actions() {
        let store = Store::new(counter);
        let count = Arc::new(AtomicUsize::new(0));

        let listener_count = Arc::clone(&count);
        store.subscribe(move || {
            listener_count.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CounterAction::Unknown).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*store.get_state(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = Store::new(counter);
        let other = store.clone();

        other.dispatch(CounterAction::Increment).await;

        assert_eq!(*store.get_state(), 1);
    }
}
