//! # Registry Operations Layer
//!
//! This module wraps the `DataStore` trait with the registry's decision
//! procedures: create-uniqueness, update-existence, and update-identity
//! checks, expressed as the `RegistryError` outcome taxonomy that the HTTP
//! handlers translate into status codes.
//!
//! ## Architecture
//!
//! ```text
//! HTTP Handlers
//!      ↓
//! RegistryOps (consistency checks, outcome taxonomy)
//!      ↓
//! DataStore trait (actual storage)
//! ```
//!
//! Every mutating request flows through exactly one `RegistryOps` method;
//! handlers never touch the store directly, so the check ordering below is
//! the only ordering the service ever exhibits. In particular, an update
//! whose body id disagrees with the path id is reported as a mismatch
//! before existence is consulted, which is observable when neither id
//! exists.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::{DataStore, DataStoreError, Hero, Power, Team};

/////////////////////////////////////////// RegistryError //////////////////////////////////////////////

/// Expected, caller-recoverable outcomes of registry operations.
///
/// All four taxonomy members render as structured 4xx responses; only
/// `Store` (an unexpected storage fault) renders as a 5xx. The service
/// never panics on any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The input was malformed or schema-violating (including unparseable
    /// path identifiers). Carries the decode detail.
    Invalid(String),
    /// A well-formed update whose body identifier disagrees with the
    /// addressed resource.
    IdentityMismatch {
        /// The identifier from the request path.
        path_id: Uuid,
        /// The identifier carried in the request body.
        body_id: Uuid,
    },
    /// A create addressed an identifier that is already taken.
    Conflict,
    /// The addressed identifier is absent from its collection.
    NotFound,
    /// The storage layer failed in an unexpected way.
    Store(DataStoreError),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(detail) => write!(f, "invalid request: {}", detail),
            Self::IdentityMismatch { path_id, body_id } => write!(
                f,
                "id in body ({}) does not match id in path ({})",
                body_id, path_id
            ),
            Self::Conflict => write!(f, "a resource with this id already exists"),
            Self::NotFound => write!(f, "resource not found"),
            Self::Store(e) => write!(f, "storage failure: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::IdentityMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

impl From<DataStoreError> for RegistryError {
    fn from(e: DataStoreError) -> Self {
        match e {
            DataStoreError::AlreadyExists => RegistryError::Conflict,
            DataStoreError::NotFound => RegistryError::NotFound,
            other => RegistryError::Store(other),
        }
    }
}

//////////////////////////////////////////// RegistryOps ///////////////////////////////////////////////

/// Standardized wrapper for registry operations.
///
/// Static methods translating store results into the outcome taxonomy.
/// Creates insert the decoded value verbatim (embedded children are taken
/// as given, never cross-validated against their own collections); updates
/// replace the stored value in full.
pub struct RegistryOps;

impl RegistryOps {
    /// Inserts a power, reporting `Conflict` for a duplicate id.
    pub fn create_power(store: &dyn DataStore, power: Power) -> Result<Power, RegistryError> {
        store.create_power(&power)?;
        Ok(power)
    }

    /// Fetches a power or reports `NotFound`.
    pub fn get_power(store: &dyn DataStore, id: &Uuid) -> Result<Power, RegistryError> {
        store.get_power(id)?.ok_or(RegistryError::NotFound)
    }

    /// Lists all powers.
    pub fn list_powers(store: &dyn DataStore) -> Result<Vec<Power>, RegistryError> {
        Ok(store.list_powers()?)
    }

    /// Replaces the power at `path_id` in full. The identity check runs
    /// before the existence check.
    pub fn update_power(
        store: &dyn DataStore,
        path_id: Uuid,
        power: Power,
    ) -> Result<Power, RegistryError> {
        if power.id != path_id {
            return Err(RegistryError::IdentityMismatch {
                path_id,
                body_id: power.id,
            });
        }
        if store.update_power(&power)? {
            Ok(power)
        } else {
            Err(RegistryError::NotFound)
        }
    }

    /// Removes a power, reporting `NotFound` if it never existed.
    pub fn delete_power(store: &dyn DataStore, id: &Uuid) -> Result<(), RegistryError> {
        if store.delete_power(id)? {
            Ok(())
        } else {
            Err(RegistryError::NotFound)
        }
    }

    /// Inserts a hero, reporting `Conflict` for a duplicate id. Embedded
    /// powers are stored as given.
    pub fn create_hero(store: &dyn DataStore, hero: Hero) -> Result<Hero, RegistryError> {
        store.create_hero(&hero)?;
        Ok(hero)
    }

    /// Fetches a hero or reports `NotFound`.
    pub fn get_hero(store: &dyn DataStore, id: &Uuid) -> Result<Hero, RegistryError> {
        store.get_hero(id)?.ok_or(RegistryError::NotFound)
    }

    /// Lists all heroes.
    pub fn list_heroes(store: &dyn DataStore) -> Result<Vec<Hero>, RegistryError> {
        Ok(store.list_heroes()?)
    }

    /// Lists heroes whose location equals `location` exactly.
    pub fn find_heroes_by_location(
        store: &dyn DataStore,
        location: &str,
    ) -> Result<Vec<Hero>, RegistryError> {
        Ok(store.find_heroes_by_location(location)?)
    }

    /// Replaces the hero at `path_id` in full; identity check first.
    pub fn update_hero(
        store: &dyn DataStore,
        path_id: Uuid,
        hero: Hero,
    ) -> Result<Hero, RegistryError> {
        if hero.id != path_id {
            return Err(RegistryError::IdentityMismatch {
                path_id,
                body_id: hero.id,
            });
        }
        if store.update_hero(&hero)? {
            Ok(hero)
        } else {
            Err(RegistryError::NotFound)
        }
    }

    /// Removes a hero, reporting `NotFound` if it never existed.
    pub fn delete_hero(store: &dyn DataStore, id: &Uuid) -> Result<(), RegistryError> {
        if store.delete_hero(id)? {
            Ok(())
        } else {
            Err(RegistryError::NotFound)
        }
    }

    /// Inserts a team, reporting `Conflict` for a duplicate id. Embedded
    /// heroes are stored as given.
    pub fn create_team(store: &dyn DataStore, team: Team) -> Result<Team, RegistryError> {
        store.create_team(&team)?;
        Ok(team)
    }

    /// Fetches a team or reports `NotFound`.
    pub fn get_team(store: &dyn DataStore, id: &Uuid) -> Result<Team, RegistryError> {
        store.get_team(id)?.ok_or(RegistryError::NotFound)
    }

    /// Lists all teams.
    pub fn list_teams(store: &dyn DataStore) -> Result<Vec<Team>, RegistryError> {
        Ok(store.list_teams()?)
    }

    /// Replaces the team at `path_id` in full; identity check first.
    pub fn update_team(
        store: &dyn DataStore,
        path_id: Uuid,
        team: Team,
    ) -> Result<Team, RegistryError> {
        if team.id != path_id {
            return Err(RegistryError::IdentityMismatch {
                path_id,
                body_id: team.id,
            });
        }
        if store.update_team(&team)? {
            Ok(team)
        } else {
            Err(RegistryError::NotFound)
        }
    }

    /// Removes a team, reporting `NotFound` if it never existed.
    pub fn delete_team(store: &dyn DataStore, id: &Uuid) -> Result<(), RegistryError> {
        if store.delete_team(id)? {
            Ok(())
        } else {
            Err(RegistryError::NotFound)
        }
    }
}
