//! Shared harness for the black-box API contract suites.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use uuid::Uuid;

use herodex::{Hero, InMemoryDataStore, Power, Team, create_registry_router};

/// Creates a test server over a fresh in-memory store.
pub fn test_server() -> TestServer {
    let store = Arc::new(InMemoryDataStore::new());
    TestServer::new(create_registry_router(store)).unwrap()
}

pub fn power(name: &str) -> Power {
    Power {
        id: Uuid::new_v4(),
        name: name.to_string(),
    }
}

pub fn hero(name: &str, location: &str, powers: Vec<Power>) -> Hero {
    Hero {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: location.to_string(),
        powers,
    }
}

pub fn team(name: &str, members: Vec<Hero>) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        members,
    }
}
