use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DataStore;
use crate::Hero;
use crate::decode::{Decoded, parse_id};
use crate::ops::{RegistryError, RegistryOps};

//////////////////////////////////////////////// Team ////////////////////////////////////////////////

/// A team of heroes. Members are embedded by value with the same snapshot
/// semantics as hero powers: deleting a hero does not remove it from teams
/// that embedded a copy of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Team {
    /// Unique identifier within the team collection.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Snapshot copies of the member heroes.
    pub members: Vec<Hero>,
}

////////////////////////////////////////////// Routes //////////////////////////////////////////////////

async fn create_team(
    State(store): State<Arc<dyn DataStore>>,
    Decoded(team): Decoded<Team>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Team>), RegistryError> {
    let team = RegistryOps::create_team(&*store, team)?;
    let location = format!("/teams/{}", team.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(team),
    ))
}

async fn list_teams(
    State(store): State<Arc<dyn DataStore>>,
) -> Result<Json<Vec<Team>>, RegistryError> {
    Ok(Json(RegistryOps::list_teams(&*store)?))
}

async fn get_team(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
) -> Result<Json<Team>, RegistryError> {
    let id = parse_id(&id)?;
    Ok(Json(RegistryOps::get_team(&*store, &id)?))
}

async fn update_team(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
    Decoded(team): Decoded<Team>,
) -> Result<Json<Team>, RegistryError> {
    let id = parse_id(&id)?;
    Ok(Json(RegistryOps::update_team(&*store, id, team)?))
}

async fn delete_team(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, RegistryError> {
    let id = parse_id(&id)?;
    RegistryOps::delete_team(&*store, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

////////////////////////////////////////////// Router //////////////////////////////////////////////////

/// Creates an Axum router with team management endpoints.
pub fn create_team_router(store: Arc<dyn DataStore>) -> Router {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/:id",
            get(get_team).post(update_team).delete(delete_team),
        )
        .with_state(store)
}
