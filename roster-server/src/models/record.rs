//! Person record and its validated write input

use serde::Serialize;

use super::validation::{validate, ValidationError};

/// Person record as stored and as serialized to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Validated name/age pair, the only input the repository accepts for writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInput {
    name: String,
    age: i64,
}

impl RecordInput {
    /// Validate and wrap a name/age pair.
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self, ValidationError> {
        let name = name.into();
        validate(&name, age)?;
        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    /// Attach a store-assigned id.
    pub fn into_record(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            age: self.age,
        }
    }
}
