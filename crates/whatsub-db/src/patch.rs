//! Partial updates.
//!
//! [`Patch`] records whether a caller supplied a field at all, independently of
//! the value it supplied. [`UpdateBuilder`] turns the supplied fields into
//! `column = $n` assignments with bound values; column names come only from the
//! repositories, never from input.

use serde::{Deserialize, Deserializer};
use sqlx::{Encode, Postgres, QueryBuilder, Type};

/// A field of an update request.
///
/// Deserializes as `Set(value)` whenever the key is present. Containers must
/// mark the field `#[serde(default)]` so a missing key becomes `Unchanged`.
/// For nullable columns use `Patch<Option<T>>`: an explicit `null` is then
/// `Set(None)` and clears the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was absent; the column keeps its value.
    Unchanged,
    /// The key was present; the column is rewritten with this value.
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::Set)
    }
}

/// Builds `UPDATE <table> SET a = $1, b = $2 WHERE <key> = $3`.
pub struct UpdateBuilder<'args> {
    builder: QueryBuilder<'args, Postgres>,
    assignments: usize,
}

impl<'args> UpdateBuilder<'args> {
    /// Start an update of `table`. The name is trusted and pushed verbatim.
    pub fn new(table: &'static str) -> Self {
        Self {
            builder: QueryBuilder::new(format!("UPDATE {table} SET ")),
            assignments: 0,
        }
    }

    /// Push `column = $n` if the field was supplied.
    pub fn set<T>(&mut self, column: &'static str, patch: Patch<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Patch::Set(value) = patch {
            if self.assignments > 0 {
                self.builder.push(", ");
            }
            self.builder.push(column).push(" = ").push_bind(value);
            self.assignments += 1;
        }
        self
    }

    /// `true` while no field has been supplied.
    pub const fn is_empty(&self) -> bool {
        self.assignments == 0
    }

    /// Append the `WHERE` clause. Returns `None` when no field was supplied,
    /// in which case no statement should be issued.
    pub fn finish<K>(
        mut self,
        key_column: &'static str,
        key: K,
    ) -> Option<QueryBuilder<'args, Postgres>>
    where
        K: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if self.is_empty() {
            return None;
        }
        self.builder
            .push(" WHERE ")
            .push(key_column)
            .push(" = ")
            .push_bind(key);
        Some(self.builder)
    }
}
