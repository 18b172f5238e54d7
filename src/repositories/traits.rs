//! Common repository traits
//!
//! This module defines the generic interfaces for database operations.
//! Every entity repository implements the whole set, so the method sets never
//! drift apart between entities.

use sqlx::sqlite::SqliteQueryResult;

/// Trait for checking whether an entity exists
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Exists<Id> {
    /// # Returns
    /// * `Ok(true)` - An entity with that ID is present
    /// * `Ok(false)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn exists(&self, id: &Id) -> Result<bool, sqlx::Error>;
}

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `i32`, `(i32, i32)`)
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for reading every entity of a table
pub trait ReadAll<Entity> {
    /// Reads all the entities, ordered ascending by primary key
    async fn read_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `UpdateDTO` - DTO carrying the complete new value of the mutable fields
/// * `Id` - Type of the primary key
pub trait Update<UpdateDTO, Id> {
    /// Replaces the mutable fields of an existing entity
    ///
    /// # Returns
    /// * `Ok(true)` - The row was updated
    /// * `Ok(false)` - Nothing was saved (e.g. entity not found)
    /// * `Err(sqlx::Error)` - Error during update
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<bool, sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the database
    ///
    /// # Returns
    /// * `Ok(true)` - The row was removed
    /// * `Ok(false)` - Nothing was removed
    /// * `Err(sqlx::Error)` - Error during deletion
    async fn delete(&self, id: &Id) -> Result<bool, sqlx::Error>;
}

/// Save step shared by every write: true iff the store reported at least one
/// affected row.
pub fn saved(result: &SqliteQueryResult) -> bool {
    result.rows_affected() > 0
}

/// Converts the rowid assigned by SQLite (64 bit) into the `i32` ids of the
/// entities. A rowid out of range is reported as a decode error.
pub fn row_id(rowid: i64) -> Result<i32, sqlx::Error> {
    i32::try_from(rowid).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_in_range() {
        assert_eq!(row_id(1).ok(), Some(1));
        assert_eq!(row_id(i64::from(i32::MAX)).ok(), Some(i32::MAX));
    }

    #[test]
    fn test_row_id_out_of_range_is_error() {
        let result = row_id(i64::from(i32::MAX) + 1);
        assert!(matches!(result, Err(sqlx::Error::Decode(_))));
    }
}
