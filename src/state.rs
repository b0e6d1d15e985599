// src/state.rs
use std::sync::Arc;

use crate::services::chat::ChatService;

pub type SharedState = Arc<AppState>;

// Shared read-only after construction; the one client handle inside the
// service is never rebuilt or mutated.
pub struct AppState {
    pub chat: ChatService,
}

impl AppState {
    pub fn new(chat: ChatService) -> Self {
        Self { chat }
    }
}
