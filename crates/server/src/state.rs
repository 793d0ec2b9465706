use crate::templates::Templates;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared application state, created once at startup and cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Result<Self, tera::Error> {
        Ok(Self {
            db,
            templates: Arc::new(Templates::new()?),
        })
    }
}
