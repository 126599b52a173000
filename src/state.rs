//! Shared state injected into request handlers

use std::sync::Arc;

use crate::completion::CompletionProvider;
use crate::store::StoreHandle;

/// Resources created once at startup and shared by every request
#[derive(Clone)]
pub struct AppState {
    pub store: StoreHandle,
    pub completion: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(store: StoreHandle, completion: Arc<dyn CompletionProvider>) -> Self {
        Self { store, completion }
    }
}
