//! The store contract shared by every backend.

use async_trait::async_trait;
use staffbook_core::{Employee, EmployeeFields, EmployeeId};

use crate::Result;

/// A collection of employee documents addressable by id.
///
/// Every mutating call is atomic on its own: either the whole change is
/// visible afterwards or none of it is. Backends re-validate the fields they
/// receive and enforce email uniqueness.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;

    /// Store a new record with a generated id and timestamps.
    ///
    /// Fails with [`Error::Validation`](crate::Error::Validation) on bad
    /// fields or [`Error::DuplicateKey`](crate::Error::DuplicateKey) if the
    /// email is taken.
    async fn insert(&self, fields: EmployeeFields) -> Result<Employee>;

    /// Every record, in the backend's native order.
    async fn find_all(&self) -> Result<Vec<Employee>>;

    /// The record with `id`, if any.
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>>;

    /// Overwrite the four business fields of `id` and refresh `updated_at`.
    ///
    /// Returns `Ok(None)` when no record has that id.
    async fn replace_by_id(
        &self,
        id: EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Option<Employee>>;

    /// Remove the record with `id`, returning it.
    ///
    /// Returns `Ok(None)` when no record has that id.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<Option<Employee>>;
}
