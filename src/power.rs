use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DataStore;
use crate::decode::{Decoded, parse_id};
use crate::ops::{RegistryError, RegistryOps};

//////////////////////////////////////////////// Power ////////////////////////////////////////////////

/// A power is the leaf resource of the registry: an identifier and a name.
/// Heroes embed full copies of their powers rather than referencing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Power {
    /// Unique identifier within the power collection.
    pub id: Uuid,
    /// Human-readable name, e.g. "Flight".
    pub name: String,
}

////////////////////////////////////////////// Routes //////////////////////////////////////////////////

async fn create_power(
    State(store): State<Arc<dyn DataStore>>,
    Decoded(power): Decoded<Power>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Power>), RegistryError> {
    let power = RegistryOps::create_power(&*store, power)?;
    let location = format!("/powers/{}", power.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(power),
    ))
}

async fn list_powers(
    State(store): State<Arc<dyn DataStore>>,
) -> Result<Json<Vec<Power>>, RegistryError> {
    Ok(Json(RegistryOps::list_powers(&*store)?))
}

async fn get_power(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
) -> Result<Json<Power>, RegistryError> {
    let id = parse_id(&id)?;
    Ok(Json(RegistryOps::get_power(&*store, &id)?))
}

async fn update_power(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
    Decoded(power): Decoded<Power>,
) -> Result<Json<Power>, RegistryError> {
    let id = parse_id(&id)?;
    Ok(Json(RegistryOps::update_power(&*store, id, power)?))
}

async fn delete_power(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, RegistryError> {
    let id = parse_id(&id)?;
    RegistryOps::delete_power(&*store, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

////////////////////////////////////////////// Router //////////////////////////////////////////////////

/// Creates an Axum router with power management endpoints.
pub fn create_power_router(store: Arc<dyn DataStore>) -> Router {
    Router::new()
        .route("/powers", get(list_powers).post(create_power))
        .route(
            "/powers/:id",
            get(get_power).post(update_power).delete(delete_power),
        )
        .with_state(store)
}
