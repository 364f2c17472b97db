use crate::core::GameManager;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct AppState {
    pub game_manager: Arc<RwLock<GameManager>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
