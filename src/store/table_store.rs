//! The in-memory table store.
//!
//! Invariants:
//! - Natural keys are unique per table; create scans before append.
//! - Revisions are store-assigned and strictly increasing per series;
//!   revise appends, it never edits a row in place.
//! - Publish clears the draft flag; there is no transition back.
//! - Every failure is a typed value, never a panic.
//!
//! The store holds no locks. A shared instance must be serialized by
//! the caller; `&mut self` receivers make unsynchronized concurrent
//! mutation a compile error within safe code.

use super::errors::{StoreError, StoreResult};
use super::tables::{Operation, SeriesRow, TableRow, Tables};

/// Single-writer record store over the four tables.
///
/// The store exclusively owns its rows. Reads return clones of
/// matching rows, never references into the live tables.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    tables: Tables,
}

impl TableStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            tables: Tables::default(),
        }
    }

    /// Wraps an already-loaded snapshot.
    pub fn from_tables(tables: Tables) -> Self {
        Self { tables }
    }

    /// Read-only view of the tables, for serialization.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Consumes the store, yielding its tables.
    pub fn into_tables(self) -> Tables {
        self.tables
    }

    /// Appends `row` to its table.
    ///
    /// Fails with [`StoreError::PrimaryKey`] when an existing row
    /// collides on the natural key; the table is left unchanged.
    pub fn create<R: TableRow>(&mut self, row: R) -> StoreResult<()> {
        if let Some(existing) = R::table(&self.tables).iter().find(|r| r.same_key(&row)) {
            return Err(StoreError::primary_key(R::KIND, existing.primary_key()));
        }

        R::table_mut(&mut self.tables).push(row);
        Ok(())
    }

    /// Returns clones of every row matching `predicate`.
    ///
    /// Cannot fail; the error channel exists for interface uniformity.
    /// The predicate must not observe side effects.
    pub fn read<R: TableRow>(&self, predicate: impl Fn(&R) -> bool) -> StoreResult<Vec<R>> {
        Ok(R::table(&self.tables)
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect())
    }

    /// Appends a new revision built from `patch` over the latest
    /// revision of the patch's series.
    ///
    /// Fields absent from the patch carry forward; the revision is
    /// always assigned as previous + 1. Fails with
    /// [`StoreError::NotFound`] when the series has no rows. The
    /// previous revision is left untouched.
    pub fn revise<R: SeriesRow>(&mut self, patch: R::Patch) -> StoreResult<()> {
        if !R::KIND.supports(Operation::Revise) {
            return Err(StoreError::unsupported(R::KIND, Operation::Revise));
        }

        let series_id = R::patch_series_id(&patch);
        let previous = R::table(&self.tables)
            .iter()
            .filter(|row| row.series_id() == series_id)
            .max_by_key(|row| row.revision())
            .cloned();

        let previous = match previous {
            Some(row) => row,
            None => return Err(StoreError::series_not_found(R::KIND, series_id)),
        };

        let next_revision = previous.revision() + 1;
        let next = R::merge(previous, patch, next_revision);
        R::table_mut(&mut self.tables).push(next);
        Ok(())
    }

    /// Removes every row matching `predicate`.
    ///
    /// The matched set is computed against the current rows first; an
    /// empty set fails with [`StoreError::NotFound`] and mutates
    /// nothing. Removal re-applies the predicate, so it must be pure
    /// and deterministic.
    pub fn delete<R: TableRow>(&mut self, predicate: impl Fn(&R) -> bool) -> StoreResult<()> {
        if !R::KIND.supports(Operation::Delete) {
            return Err(StoreError::unsupported(R::KIND, Operation::Delete));
        }

        let matched = R::table(&self.tables)
            .iter()
            .filter(|row| predicate(row))
            .count();
        if matched == 0 {
            return Err(StoreError::no_rows_matched(R::KIND));
        }

        R::table_mut(&mut self.tables).retain(|row| !predicate(row));
        Ok(())
    }

    /// Clears the draft flag on every row matching `predicate`,
    /// leaving all other fields untouched.
    ///
    /// The matched set is computed first; an empty set fails with
    /// [`StoreError::NotFound`] and mutates nothing. Matching many
    /// rows is not an error; scoping the predicate is the caller's
    /// responsibility.
    pub fn publish<R: TableRow>(&mut self, predicate: impl Fn(&R) -> bool) -> StoreResult<()> {
        if !R::KIND.supports(Operation::Publish) {
            return Err(StoreError::unsupported(R::KIND, Operation::Publish));
        }

        let matched: Vec<usize> = R::table(&self.tables)
            .iter()
            .enumerate()
            .filter(|(_, row)| predicate(row))
            .map(|(index, _)| index)
            .collect();
        if matched.is_empty() {
            return Err(StoreError::no_rows_matched(R::KIND));
        }

        let table = R::table_mut(&mut self.tables);
        for index in matched {
            table[index].clear_draft();
        }
        Ok(())
    }
}
