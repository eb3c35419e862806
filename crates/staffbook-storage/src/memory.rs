//! In-process employee store.
//!
//! Records live in a `HashMap` behind a `tokio` `RwLock`; a second map
//! indexes emails to ids. Listing returns records in insertion order.

use std::collections::HashMap;

use async_trait::async_trait;
use staffbook_core::validation::validate_fields;
use staffbook_core::{Employee, EmployeeFields, EmployeeId};
use tokio::sync::RwLock;

use crate::{EmployeeStore, Error, Result};

#[derive(Default)]
struct Inner {
    records: HashMap<EmployeeId, Employee>,
    order: Vec<EmployeeId>,
    emails: HashMap<String, EmployeeId>,
}

impl Inner {
    fn email_owner(&self, email: &str) -> Option<EmployeeId> {
        self.emails.get(email).copied()
    }
}

/// Employee store held entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<Employee> {
        let fields = validate_fields(fields)?;
        let mut inner = self.inner.write().await;

        if inner.email_owner(&fields.email).is_some() {
            return Err(Error::duplicate_key(fields.email));
        }

        let employee = Employee::new(fields);
        inner.emails.insert(employee.email.clone(), employee.id);
        inner.order.push(employee.id);
        inner.records.insert(employee.id, employee.clone());

        log::debug!("memory store: inserted employee {}", employee.id);
        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn replace_by_id(
        &self,
        id: EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Option<Employee>> {
        let fields = validate_fields(fields)?;
        let mut inner = self.inner.write().await;

        let Some(previous_email) = inner.records.get(&id).map(|e| e.email.clone()) else {
            return Ok(None);
        };

        if let Some(owner) = inner.email_owner(&fields.email)
            && owner != id
        {
            return Err(Error::duplicate_key(fields.email));
        }

        let new_email = fields.email.clone();
        let updated = match inner.records.get_mut(&id) {
            Some(employee) => {
                employee.replace(fields);
                employee.clone()
            }
            None => return Ok(None),
        };

        if previous_email != new_email {
            inner.emails.remove(&previous_email);
            inner.emails.insert(new_email, id);
        }

        log::debug!("memory store: replaced employee {id}");
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let mut inner = self.inner.write().await;
        let Some(removed) = inner.records.remove(&id) else {
            return Ok(None);
        };
        inner.emails.remove(&removed.email);
        inner.order.retain(|existing| *existing != id);

        log::debug!("memory store: deleted employee {id}");
        Ok(Some(removed))
    }
}
