//! # Herodex: An In-Memory Hero Registry Service
//!
//! Herodex is a REST service managing three related resource kinds:
//!
//! - **Powers**: leaf resources with an id and a name
//! - **Heroes**: named resources with a location and embedded powers
//! - **Teams**: named resources with embedded hero members
//!
//! ## Core Concepts
//!
//! ### Snapshot embedding
//! Nesting is by value, not by reference. A hero stores full copies of its
//! powers and a team full copies of its heroes, frozen at the owning
//! resource's last create or update. The collections are otherwise
//! independent: deleting a power never reaches into heroes that embedded a
//! copy of it, and deleting a hero leaves its teams' membership lists
//! untouched.
//!
//! ### Status-code contract
//! Every operation is a single deterministic transition over the store with
//! a fixed wire outcome:
//!
//! | Outcome | Status |
//! |---|---|
//! | created | 201 + `Location` header |
//! | updated / fetched | 200 |
//! | deleted | 204 |
//! | malformed body or id, or body/path id mismatch | 400 |
//! | absent resource | 404 |
//! | duplicate id on create | 422 |
//!
//! Updates are full replacements keyed by the path id; the body's id must
//! agree with the path, and that check runs before the existence check.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ HTTP API Layer (Axum routes)            │
//! ├─────────────────────────────────────────┤
//! │ Body/Id Decoding (strict serde)         │
//! ├─────────────────────────────────────────┤
//! │ Registry Operations (consistency rules) │
//! ├─────────────────────────────────────────┤
//! │ Data Store (trait-based abstraction)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use herodex::{InMemoryDataStore, create_registry_router};
//!
//! let store = Arc::new(InMemoryDataStore::new());
//! let app = create_registry_router(store);
//! // serve `app` with axum::serve, or drive it with a test client
//! ```

mod data_store;
mod decode;
mod hero;
mod ops;
mod power;
mod router;
mod team;

/// HTTP client utilities for interacting with herodex services.
///
/// Provides a client with strict (error-propagating) and safe
/// (failure-capturing) calling modes over the same request path.
pub mod http_utils;

pub use data_store::{DataStore, DataStoreError, InMemoryDataStore};
pub use decode::Decoded;
pub use hero::{Hero, create_hero_router};
pub use ops::{RegistryError, RegistryOps};
pub use power::{Power, create_power_router};
pub use router::create_registry_router;
pub use team::{Team, create_team_router};
