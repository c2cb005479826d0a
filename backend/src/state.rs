use std::sync::Arc;

use crate::{config::Config, services::identity::SessionMinter};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub minter: Arc<dyn SessionMinter>,
}

impl AppState {
    pub fn new(config: Config, minter: Arc<dyn SessionMinter>) -> Self {
        Self { config, minter }
    }
}
