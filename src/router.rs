use std::sync::Arc;

use axum::Router;

use crate::{DataStore, create_hero_router, create_power_router, create_team_router};

/// Creates the full registry router: `powers`, `heroes`, and `teams`
/// endpoint groups sharing one injected data store.
pub fn create_registry_router(store: Arc<dyn DataStore>) -> Router {
    Router::new()
        .merge(create_power_router(store.clone()))
        .merge(create_hero_router(store.clone()))
        .merge(create_team_router(store))
}
