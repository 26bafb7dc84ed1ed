//! Petz Storage Layer
//!
//! Implements the AnimalStore trait on SQLite.
//!
//! # Architecture
//!
//! - One `pets` table holds every animal, with nullable `sire_id`/`dam_id`
//!   columns forming the parentage graph
//! - `members`, `breeds` and `affixes` supply denormalized display names
//! - Ancestor traversal reads one generation per batched `IN (...)` query
//!
//! # Examples
//!
//! ```no_run
//! use petz_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for lineage queries
//! ```

#![warn(missing_docs)]

use petz_domain::traits::AnimalStore;
use petz_domain::{AnimalId, AnimalRecord, GameVersion, PetLink, PetStatus, ProfileSource, Sex};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const ANIMAL_COLUMNS: [&str; 21] = [
    "id",
    "show_name",
    "partial_show_name",
    "call_name",
    "pedigree_number",
    "registration_date",
    "registrar_id",
    "age",
    "sex",
    "game_version",
    "status",
    "sire_id",
    "dam_id",
    "affix_id",
    "breed_id",
    "owner_id",
    "breeder_id",
    "created_at",
    "added_by",
    "last_modified_at",
    "modified_by",
];

/// Column list for the pets table, optionally qualified with a table alias
fn animal_columns(alias: Option<&str>) -> String {
    ANIMAL_COLUMNS
        .iter()
        .map(|column| match alias {
            Some(alias) => format!("{}.{}", alias, column),
            None => (*column).to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Unix seconds as SQLite INTEGER
fn to_sql_timestamp(value: u64) -> Result<i64, StoreError> {
    i64::try_from(value)
        .map_err(|_| StoreError::InvalidData(format!("Timestamp out of range: {}", value)))
}

/// SQLite-based implementation of AnimalStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Share a store across threads by
/// wrapping it in a `Mutex`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use petz_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("petz.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Insert or replace a member
    pub fn insert_member(&mut self, id: i64, name: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO members (id, name) VALUES (?1, ?2)",
            params![id, name],
        )?;
        Ok(())
    }

    /// Insert or replace a breed
    pub fn insert_breed(&mut self, id: i64, name: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO breeds (id, name) VALUES (?1, ?2)",
            params![id, name],
        )?;
        Ok(())
    }

    /// Insert or replace an affix
    pub fn insert_affix(&mut self, id: i64, name: &str, owner_id: i64) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO affixes (id, name, owner_id) VALUES (?1, ?2, ?3)",
            params![id, name, owner_id],
        )?;
        Ok(())
    }

    /// Insert or replace an animal record
    ///
    /// Parent references are stored as given; they need not resolve.
    pub fn insert_animal(&mut self, animal: &AnimalRecord) -> Result<(), StoreError> {
        let placeholders = (1..=ANIMAL_COLUMNS.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT OR REPLACE INTO pets ({}) VALUES ({})",
            animal_columns(None),
            placeholders
        );

        let registration_date = animal.registration_date.map(to_sql_timestamp).transpose()?;
        let created_at = to_sql_timestamp(animal.created_at)?;
        let last_modified_at = animal.last_modified_at.map(to_sql_timestamp).transpose()?;

        self.conn.execute(
            &sql,
            params![
                animal.id.value(),
                &animal.show_name,
                &animal.partial_show_name,
                &animal.call_name,
                &animal.pedigree_number,
                registration_date,
                animal.registrar_id,
                animal.age,
                animal.sex.as_str(),
                animal.game_version.as_str(),
                animal.status.as_str(),
                animal.sire_id.map(|id| id.value()),
                animal.dam_id.map(|id| id.value()),
                animal.affix_id,
                animal.breed_id,
                animal.owner_id,
                animal.breeder_id,
                created_at,
                animal.added_by,
                last_modified_at,
                animal.modified_by,
            ],
        )?;

        Ok(())
    }

    /// Wrap a store error as a rusqlite conversion failure for row mappers
    fn conversion_error(column: usize, e: StoreError) -> rusqlite::Error {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    }

    /// Negative timestamps cannot come from this store; reject them
    fn read_timestamp(column: usize, value: i64) -> rusqlite::Result<u64> {
        u64::try_from(value).map_err(|_| {
            Self::conversion_error(
                column,
                StoreError::InvalidData(format!("Timestamp out of range: {}", value)),
            )
        })
    }

    /// Map a row selected with `animal_columns` starting at column 0
    fn row_to_animal(row: &Row<'_>) -> rusqlite::Result<AnimalRecord> {
        let sex: String = row.get(8)?;
        let game_version: String = row.get(9)?;
        let status: String = row.get(10)?;

        let sex = Sex::parse(&sex).ok_or_else(|| {
            Self::conversion_error(8, StoreError::InvalidData(format!("Unknown sex: {}", sex)))
        })?;
        let game_version = GameVersion::parse(&game_version).ok_or_else(|| {
            Self::conversion_error(
                9,
                StoreError::InvalidData(format!("Unknown game version: {}", game_version)),
            )
        })?;
        let status = PetStatus::parse(&status).ok_or_else(|| {
            Self::conversion_error(10, StoreError::InvalidData(format!("Unknown status: {}", status)))
        })?;

        let registration_date = row
            .get::<_, Option<i64>>(5)?
            .map(|t| Self::read_timestamp(5, t))
            .transpose()?;
        let created_at = Self::read_timestamp(17, row.get(17)?)?;
        let last_modified_at = row
            .get::<_, Option<i64>>(19)?
            .map(|t| Self::read_timestamp(19, t))
            .transpose()?;
        let sire_id: Option<i64> = row.get(11)?;
        let dam_id: Option<i64> = row.get(12)?;

        Ok(AnimalRecord {
            id: AnimalId::from_value(row.get(0)?),
            show_name: row.get(1)?,
            partial_show_name: row.get(2)?,
            call_name: row.get(3)?,
            pedigree_number: row.get(4)?,
            registration_date,
            registrar_id: row.get(6)?,
            age: row.get(7)?,
            sex,
            game_version,
            status,
            sire_id: sire_id.map(AnimalId::from_value),
            dam_id: dam_id.map(AnimalId::from_value),
            affix_id: row.get(13)?,
            breed_id: row.get(14)?,
            owner_id: row.get(15)?,
            breeder_id: row.get(16)?,
            created_at,
            added_by: row.get(18)?,
            last_modified_at,
            modified_by: row.get(20)?,
        })
    }

    /// Animals having `parent` as sire or dam, ordered by id
    fn offspring_of(&self, parent: AnimalId) -> Result<Vec<PetLink>, StoreError> {
        let sql = format!(
            "SELECT {} FROM pets WHERE sire_id = ?1 OR dam_id = ?1 ORDER BY id",
            animal_columns(None)
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;

        let links = stmt
            .query_map(params![parent.value()], |row| {
                Self::row_to_animal(row).map(|animal| PetLink::from(&animal))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(links)
    }
}

impl AnimalStore for SqliteStore {
    type Error = StoreError;

    fn get_animals(&self, ids: &[AnimalId]) -> Result<Vec<AnimalRecord>, Self::Error> {
        let unique: BTreeSet<i64> = ids.iter().map(|id| id.value()).collect();
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; unique.len()].join(", ");
        let sql = format!(
            "SELECT {} FROM pets WHERE id IN ({})",
            animal_columns(None),
            placeholders
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let animals = stmt
            .query_map(params_from_iter(unique.iter()), Self::row_to_animal)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(animals)
    }

    fn get_profile_source(&self, id: AnimalId) -> Result<Option<ProfileSource>, Self::Error> {
        let sql = format!(
            "SELECT {}, a.name, b.name, o.name, br.name
             FROM pets p
             LEFT JOIN affixes a ON a.id = p.affix_id
             LEFT JOIN breeds b ON b.id = p.breed_id
             LEFT JOIN members o ON o.id = p.owner_id
             LEFT JOIN members br ON br.id = p.breeder_id
             WHERE p.id = ?1 AND p.status != ?2",
            animal_columns(Some("p"))
        );

        let names_at = ANIMAL_COLUMNS.len();
        let found = self
            .conn
            .query_row(
                &sql,
                params![id.value(), PetStatus::PendingRegistration.as_str()],
                |row| {
                    Ok((
                        Self::row_to_animal(row)?,
                        row.get::<_, Option<String>>(names_at)?,
                        row.get::<_, Option<String>>(names_at + 1)?,
                        row.get::<_, Option<String>>(names_at + 2)?,
                        row.get::<_, Option<String>>(names_at + 3)?,
                    ))
                },
            )
            .optional()?;

        let Some((animal, affix_name, breed_name, owner_name, breeder_name)) = found else {
            return Ok(None);
        };

        let offspring = self.offspring_of(animal.id)?;
        let dam_offspring = match animal.dam_id {
            Some(dam) => self.offspring_of(dam)?,
            None => Vec::new(),
        };
        let sire_offspring = match animal.sire_id {
            Some(sire) => self.offspring_of(sire)?,
            None => Vec::new(),
        };

        Ok(Some(ProfileSource {
            animal,
            affix_name,
            breed_name,
            owner_name,
            breeder_name,
            offspring,
            dam_offspring,
            sire_offspring,
        }))
    }

    fn with_snapshot<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<Self::Error>,
        Self: Sized,
    {
        // Deferred transaction: the snapshot is taken at the first read.
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(StoreError::from)?;
        let result = f(self)?;
        tx.commit().map_err(StoreError::from)?;
        Ok(result)
    }
}
