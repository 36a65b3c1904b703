//! # Data Storage Abstraction
//!
//! This module provides the storage layer for the hero registry. It defines
//! the `DataStore` trait, a uniform interface over the three independent
//! collections (powers, heroes, teams), and `InMemoryDataStore`, the
//! thread-safe in-memory implementation.
//!
//! ## Storage Model
//!
//! Each collection is keyed by UUID and holds denormalized values: a stored
//! hero carries full copies of its powers, a stored team full copies of its
//! heroes. The store never re-resolves embedded children against their own
//! collections, and deletes never cascade across collections.
//!
//! ## Concurrency
//!
//! Every operation holds its collection's lock for the whole check-then-act
//! sequence, so two concurrent creates of the same id cannot both observe
//! "absent" and both insert.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::{Hero, Power, Team};

/// Errors that can occur during data store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataStoreError {
    /// The requested item was not found in the data store.
    NotFound,
    /// An item with the same identifier already exists.
    AlreadyExists,
    /// An internal storage system error occurred.
    Internal(String),
}

impl std::fmt::Display for DataStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Item not found in data store"),
            Self::AlreadyExists => write!(f, "Item already exists in data store"),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DataStoreError {}

/// Trait defining the storage interface for the hero registry.
///
/// Implementors must be thread-safe: the registry shares one store across
/// all request handlers. All mutation is single-key atomic; no caller ever
/// observes a partially-applied insert, replace, or remove.
pub trait DataStore: Send + Sync {
    // Power operations

    /// Creates a power; fails with `AlreadyExists` if the id is taken.
    fn create_power(&self, power: &Power) -> Result<(), DataStoreError>;
    /// Retrieves a power by id, `None` if absent.
    fn get_power(&self, id: &Uuid) -> Result<Option<Power>, DataStoreError>;
    /// Replaces the power stored at its id. Returns whether it existed.
    fn update_power(&self, power: &Power) -> Result<bool, DataStoreError>;
    /// Deletes a power by id. Returns whether it existed.
    fn delete_power(&self, id: &Uuid) -> Result<bool, DataStoreError>;
    /// Lists every power in the collection, in no guaranteed order.
    fn list_powers(&self) -> Result<Vec<Power>, DataStoreError>;

    // Hero operations

    /// Creates a hero; fails with `AlreadyExists` if the id is taken.
    /// Embedded powers are stored verbatim, not checked against the power
    /// collection.
    fn create_hero(&self, hero: &Hero) -> Result<(), DataStoreError>;
    /// Retrieves a hero by id, `None` if absent.
    fn get_hero(&self, id: &Uuid) -> Result<Option<Hero>, DataStoreError>;
    /// Replaces the hero stored at its id in full. Returns whether it existed.
    fn update_hero(&self, hero: &Hero) -> Result<bool, DataStoreError>;
    /// Deletes a hero by id. Returns whether it existed. Teams that embed
    /// the hero keep their snapshot copies.
    fn delete_hero(&self, id: &Uuid) -> Result<bool, DataStoreError>;
    /// Lists every hero in the collection, in no guaranteed order.
    fn list_heroes(&self) -> Result<Vec<Hero>, DataStoreError>;
    /// Lists heroes whose `location` field equals `location` exactly.
    fn find_heroes_by_location(&self, location: &str) -> Result<Vec<Hero>, DataStoreError>;

    // Team operations

    /// Creates a team; fails with `AlreadyExists` if the id is taken.
    fn create_team(&self, team: &Team) -> Result<(), DataStoreError>;
    /// Retrieves a team by id, `None` if absent.
    fn get_team(&self, id: &Uuid) -> Result<Option<Team>, DataStoreError>;
    /// Replaces the team stored at its id in full. Returns whether it existed.
    fn update_team(&self, team: &Team) -> Result<bool, DataStoreError>;
    /// Deletes a team by id. Returns whether it existed.
    fn delete_team(&self, id: &Uuid) -> Result<bool, DataStoreError>;
    /// Lists every team in the collection, in no guaranteed order.
    fn list_teams(&self) -> Result<Vec<Team>, DataStoreError>;
}

/// One UUID-keyed collection guarded by a single lock.
struct Table<T: Clone> {
    rows: Mutex<HashMap<Uuid, T>>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Table {
            rows: Mutex::new(HashMap::new()),
        }
    }

    fn insert(&self, id: Uuid, value: T) -> Result<(), DataStoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&id) {
            return Err(DataStoreError::AlreadyExists);
        }
        rows.insert(id, value);
        Ok(())
    }

    fn get(&self, id: &Uuid) -> Option<T> {
        let rows = self.rows.lock().unwrap();
        rows.get(id).cloned()
    }

    fn replace(&self, id: &Uuid, value: T) -> bool {
        let mut rows = self.rows.lock().unwrap();
        if let std::collections::hash_map::Entry::Occupied(mut e) = rows.entry(*id) {
            e.insert(value);
            true
        } else {
            false
        }
    }

    fn remove(&self, id: &Uuid) -> bool {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(id).is_some()
    }

    fn list(&self) -> Vec<T> {
        let rows = self.rows.lock().unwrap();
        rows.values().cloned().collect()
    }
}

/// Thread-safe in-memory implementation of the `DataStore` trait.
///
/// All data lives in three `Mutex<HashMap>` tables, one per collection, so
/// operations on different resource kinds never contend with each other.
/// Suitable for development, testing, and deployments that accept losing
/// state across restarts.
pub struct InMemoryDataStore {
    powers: Table<Power>,
    heroes: Table<Hero>,
    teams: Table<Team>,
}

impl InMemoryDataStore {
    /// Creates a new data store with all three collections empty.
    pub fn new() -> Self {
        Self {
            powers: Table::new(),
            heroes: Table::new(),
            teams: Table::new(),
        }
    }
}

impl Default for InMemoryDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for InMemoryDataStore {
    fn create_power(&self, power: &Power) -> Result<(), DataStoreError> {
        self.powers.insert(power.id, power.clone())
    }

    fn get_power(&self, id: &Uuid) -> Result<Option<Power>, DataStoreError> {
        Ok(self.powers.get(id))
    }

    fn update_power(&self, power: &Power) -> Result<bool, DataStoreError> {
        Ok(self.powers.replace(&power.id, power.clone()))
    }

    fn delete_power(&self, id: &Uuid) -> Result<bool, DataStoreError> {
        Ok(self.powers.remove(id))
    }

    fn list_powers(&self) -> Result<Vec<Power>, DataStoreError> {
        Ok(self.powers.list())
    }

    fn create_hero(&self, hero: &Hero) -> Result<(), DataStoreError> {
        self.heroes.insert(hero.id, hero.clone())
    }

    fn get_hero(&self, id: &Uuid) -> Result<Option<Hero>, DataStoreError> {
        Ok(self.heroes.get(id))
    }

    fn update_hero(&self, hero: &Hero) -> Result<bool, DataStoreError> {
        Ok(self.heroes.replace(&hero.id, hero.clone()))
    }

    fn delete_hero(&self, id: &Uuid) -> Result<bool, DataStoreError> {
        Ok(self.heroes.remove(id))
    }

    fn list_heroes(&self) -> Result<Vec<Hero>, DataStoreError> {
        Ok(self.heroes.list())
    }

    fn find_heroes_by_location(&self, location: &str) -> Result<Vec<Hero>, DataStoreError> {
        let mut heroes = self.heroes.list();
        heroes.retain(|hero| hero.location == location);
        Ok(heroes)
    }

    fn create_team(&self, team: &Team) -> Result<(), DataStoreError> {
        self.teams.insert(team.id, team.clone())
    }

    fn get_team(&self, id: &Uuid) -> Result<Option<Team>, DataStoreError> {
        Ok(self.teams.get(id))
    }

    fn update_team(&self, team: &Team) -> Result<bool, DataStoreError> {
        Ok(self.teams.replace(&team.id, team.clone()))
    }

    fn delete_team(&self, id: &Uuid) -> Result<bool, DataStoreError> {
        Ok(self.teams.remove(id))
    }

    fn list_teams(&self) -> Result<Vec<Team>, DataStoreError> {
        Ok(self.teams.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_power(name: &str) -> Power {
        Power {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    fn test_hero(name: &str, location: &str, powers: Vec<Power>) -> Hero {
        Hero {
            id: Uuid::new_v4(),
            name: name.to_string(),
            location: location.to_string(),
            powers,
        }
    }

    fn test_team(name: &str, members: Vec<Hero>) -> Team {
        Team {
            id: Uuid::new_v4(),
            name: name.to_string(),
            members,
        }
    }

    #[test]
    fn power_create_and_get() {
        let store = InMemoryDataStore::new();
        let power = test_power("Flight");

        assert!(store.create_power(&power).is_ok());
        assert_eq!(store.get_power(&power.id).unwrap(), Some(power.clone()));

        // Duplicate creates surface the conflict.
        assert_eq!(
            store.create_power(&power),
            Err(DataStoreError::AlreadyExists)
        );
    }

    #[test]
    fn power_update_is_full_replace() {
        let store = InMemoryDataStore::new();
        let power = test_power("Flight");
        store.create_power(&power).unwrap();

        let updated = Power {
            id: power.id,
            name: "Supersonic Flight".to_string(),
        };
        assert!(store.update_power(&updated).unwrap());
        assert_eq!(store.get_power(&power.id).unwrap(), Some(updated));

        // Updating an absent id reports nonexistence instead of inserting.
        let absent = test_power("Telepathy");
        assert!(!store.update_power(&absent).unwrap());
        assert_eq!(store.get_power(&absent.id).unwrap(), None);
    }

    #[test]
    fn power_delete() {
        let store = InMemoryDataStore::new();
        let power = test_power("Flight");
        store.create_power(&power).unwrap();

        assert!(store.delete_power(&power.id).unwrap());
        assert_eq!(store.get_power(&power.id).unwrap(), None);
        assert!(!store.delete_power(&power.id).unwrap());
    }

    #[test]
    fn list_contains_all_created_powers() {
        let store = InMemoryDataStore::new();
        let powers: Vec<Power> = (0..5).map(|i| test_power(&format!("Power {}", i))).collect();
        for power in &powers {
            store.create_power(power).unwrap();
        }

        let listed = store.list_powers().unwrap();
        assert_eq!(listed.len(), powers.len());
        for power in &powers {
            assert!(listed.contains(power));
        }
    }

    #[test]
    fn hero_crud() {
        let store = InMemoryDataStore::new();
        let hero = test_hero("Created Hero", "Test Suite", vec![test_power("Flight")]);

        store.create_hero(&hero).unwrap();
        assert_eq!(store.get_hero(&hero.id).unwrap(), Some(hero.clone()));
        assert_eq!(store.create_hero(&hero), Err(DataStoreError::AlreadyExists));

        let updated = Hero {
            id: hero.id,
            ..test_hero("Updated Hero", "Elsewhere", Vec::new())
        };
        assert!(store.update_hero(&updated).unwrap());
        assert_eq!(store.get_hero(&hero.id).unwrap(), Some(updated));

        assert!(store.delete_hero(&hero.id).unwrap());
        assert_eq!(store.get_hero(&hero.id).unwrap(), None);
    }

    #[test]
    fn find_heroes_by_location_is_exact() {
        let store = InMemoryDataStore::new();
        let here = test_hero("A", "Metropolis", Vec::new());
        let prefix = test_hero("B", "Metropolis East", Vec::new());
        let elsewhere = test_hero("C", "Gotham", Vec::new());
        store.create_hero(&here).unwrap();
        store.create_hero(&prefix).unwrap();
        store.create_hero(&elsewhere).unwrap();

        let found = store.find_heroes_by_location("Metropolis").unwrap();
        assert_eq!(found, vec![here]);
    }

    #[test]
    fn team_crud() {
        let store = InMemoryDataStore::new();
        let team = test_team("Created Team", vec![test_hero("Hero", "HQ", Vec::new())]);

        store.create_team(&team).unwrap();
        assert_eq!(store.get_team(&team.id).unwrap(), Some(team.clone()));
        assert_eq!(store.create_team(&team), Err(DataStoreError::AlreadyExists));

        let updated = Team {
            id: team.id,
            name: "Updated Team".to_string(),
            members: Vec::new(),
        };
        assert!(store.update_team(&updated).unwrap());
        assert_eq!(store.get_team(&team.id).unwrap(), Some(updated));

        assert!(store.delete_team(&team.id).unwrap());
        assert_eq!(store.get_team(&team.id).unwrap(), None);
        assert!(!store.delete_team(&team.id).unwrap());
    }

    #[test]
    fn collections_are_independent() {
        let store = InMemoryDataStore::new();
        let power = test_power("Flight");
        store.create_power(&power).unwrap();
        let hero = test_hero("Hero", "HQ", vec![power.clone()]);
        store.create_hero(&hero).unwrap();
        let team = test_team("Team", vec![hero.clone()]);
        store.create_team(&team).unwrap();

        // Deleting across collections never cascades into the snapshots.
        store.delete_power(&power.id).unwrap();
        store.delete_hero(&hero.id).unwrap();

        let stored_team = store.get_team(&team.id).unwrap().unwrap();
        assert_eq!(stored_team.members, vec![hero.clone()]);
        assert_eq!(stored_team.members[0].powers, vec![power]);
    }

    #[test]
    fn concurrent_creates_admit_exactly_one() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryDataStore::new());
        let power = test_power("Flight");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let power = power.clone();
                std::thread::spawn(move || store.create_power(&power).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(store.list_powers().unwrap().len(), 1);
    }
}
