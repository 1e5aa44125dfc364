use service::StudentStore;

/// Shared handler state. Cloned per request; the store itself holds only `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub store: StudentStore,
}

impl AppState {
    pub fn new(store: StudentStore) -> Self {
        Self { store }
    }
}
