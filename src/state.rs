use std::sync::Arc;

use crate::repository::ProductRepository;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: impl ProductRepository + 'static) -> Self {
        Self {
            products: Arc::new(products),
        }
    }
}
