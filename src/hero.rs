use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DataStore;
use crate::Power;
use crate::decode::{Decoded, parse_id};
use crate::ops::{RegistryError, RegistryOps};

//////////////////////////////////////////////// Hero ////////////////////////////////////////////////

/// A hero with a home location and an ordered list of powers.
///
/// Powers are embedded by value: the hero stores full copies of the powers it
/// was created or last updated with, and those copies are never re-resolved
/// against the power collection. Deleting a power leaves every hero that
/// embedded it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    /// Unique identifier within the hero collection.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Where the hero operates; searchable via `GET /heroes?location=`.
    pub location: String,
    /// Snapshot copies of the hero's powers.
    pub powers: Vec<Power>,
}

#[derive(Debug, Deserialize)]
struct HeroListQuery {
    location: Option<String>,
}

////////////////////////////////////////////// Routes //////////////////////////////////////////////////

async fn create_hero(
    State(store): State<Arc<dyn DataStore>>,
    Decoded(hero): Decoded<Hero>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Hero>), RegistryError> {
    let hero = RegistryOps::create_hero(&*store, hero)?;
    let location = format!("/heroes/{}", hero.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(hero),
    ))
}

/// Lists heroes, filtered to an exact `location` match when the query
/// parameter is present. The search is equality, not substring containment.
async fn list_heroes(
    State(store): State<Arc<dyn DataStore>>,
    Query(query): Query<HeroListQuery>,
) -> Result<Json<Vec<Hero>>, RegistryError> {
    let heroes = match query.location {
        Some(location) => RegistryOps::find_heroes_by_location(&*store, &location)?,
        None => RegistryOps::list_heroes(&*store)?,
    };
    Ok(Json(heroes))
}

async fn get_hero(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
) -> Result<Json<Hero>, RegistryError> {
    let id = parse_id(&id)?;
    Ok(Json(RegistryOps::get_hero(&*store, &id)?))
}

async fn update_hero(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
    Decoded(hero): Decoded<Hero>,
) -> Result<Json<Hero>, RegistryError> {
    let id = parse_id(&id)?;
    Ok(Json(RegistryOps::update_hero(&*store, id, hero)?))
}

async fn delete_hero(
    State(store): State<Arc<dyn DataStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, RegistryError> {
    let id = parse_id(&id)?;
    RegistryOps::delete_hero(&*store, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

////////////////////////////////////////////// Router //////////////////////////////////////////////////

/// Creates an Axum router with hero management endpoints.
pub fn create_hero_router(store: Arc<dyn DataStore>) -> Router {
    Router::new()
        .route("/heroes", get(list_heroes).post(create_hero))
        .route(
            "/heroes/:id",
            get(get_hero).post(update_hero).delete(delete_hero),
        )
        .with_state(store)
}
