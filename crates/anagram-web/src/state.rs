use anagram_core::{AnagramStore, QueryService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: QueryService,
}

impl AppState {
    pub fn new(store: Arc<AnagramStore>) -> Self {
        Self {
            service: QueryService::new(store),
        }
    }
}
