//! Embedded on-disk employee store built on redb.
//!
//! Each record is a JSON document keyed by its id. A second table maps
//! email to id and carries the uniqueness rule. Every mutation runs inside a
//! single write transaction, and all redb calls run on the blocking pool.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use staffbook_core::validation::validate_fields;
use staffbook_core::{Employee, EmployeeFields, EmployeeId};

use crate::{EmployeeStore, Error, Result};

/// Employee documents keyed by `{employee_id}`.
const EMPLOYEES: TableDefinition<&str, &[u8]> = TableDefinition::new("employees");

/// Owning employee id keyed by `{email}`.
const EMAILS: TableDefinition<&str, &str> = TableDefinition::new("employee_emails");

/// Employee store persisted in a single redb file.
pub struct RedbStore {
    db: Arc<Database>,
    path: PathBuf,
}

impl RedbStore {
    /// Open (or create) the database file at `path` and make sure both
    /// tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let db = Database::create(&path).map_err(Error::database)?;

        let txn = db.begin_write().map_err(Error::database)?;
        {
            txn.open_table(EMPLOYEES).map_err(Error::database)?;
            txn.open_table(EMAILS).map_err(Error::database)?;
        }
        txn.commit().map_err(Error::database)?;

        log::info!("Opened redb employee store at {}", path.display());
        Ok(Self {
            db: Arc::new(db),
            path,
        })
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || op(&db)).await?
    }
}

fn decode(bytes: &[u8]) -> Result<Employee> {
    Ok(serde_json::from_slice(bytes)?)
}

fn insert_blocking(db: &Database, fields: EmployeeFields) -> Result<Employee> {
    let txn = db.begin_write().map_err(Error::database)?;
    let employee = {
        let mut emails = txn.open_table(EMAILS).map_err(Error::database)?;
        if emails
            .get(fields.email.as_str())
            .map_err(Error::database)?
            .is_some()
        {
            return Err(Error::duplicate_key(fields.email));
        }

        let employee = Employee::new(fields);
        let key = employee.id.to_string();
        let doc = serde_json::to_vec(&employee)?;

        let mut employees = txn.open_table(EMPLOYEES).map_err(Error::database)?;
        employees
            .insert(key.as_str(), doc.as_slice())
            .map_err(Error::database)?;
        emails
            .insert(employee.email.as_str(), key.as_str())
            .map_err(Error::database)?;
        employee
    };
    txn.commit().map_err(Error::database)?;
    Ok(employee)
}

fn find_all_blocking(db: &Database) -> Result<Vec<Employee>> {
    let txn = db.begin_read().map_err(Error::database)?;
    let table = txn.open_table(EMPLOYEES).map_err(Error::database)?;

    let mut employees = Vec::new();
    for entry in table.iter().map_err(Error::database)? {
        let (_key, value) = entry.map_err(Error::database)?;
        employees.push(decode(value.value())?);
    }
    // Same-tick records fall back to id order.
    employees.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    Ok(employees)
}

fn find_by_id_blocking(db: &Database, id: EmployeeId) -> Result<Option<Employee>> {
    let txn = db.begin_read().map_err(Error::database)?;
    let table = txn.open_table(EMPLOYEES).map_err(Error::database)?;
    let key = id.to_string();
    match table.get(key.as_str()).map_err(Error::database)? {
        Some(guard) => Ok(Some(decode(guard.value())?)),
        None => Ok(None),
    }
}

fn replace_blocking(
    db: &Database,
    id: EmployeeId,
    fields: EmployeeFields,
) -> Result<Option<Employee>> {
    let key = id.to_string();
    let txn = db.begin_write().map_err(Error::database)?;
    let updated = {
        let mut employees = txn.open_table(EMPLOYEES).map_err(Error::database)?;
        let mut emails = txn.open_table(EMAILS).map_err(Error::database)?;

        let current = match employees.get(key.as_str()).map_err(Error::database)? {
            Some(guard) => Some(decode(guard.value())?),
            None => None,
        };
        let Some(mut employee) = current else {
            return Ok(None);
        };

        let owner = emails
            .get(fields.email.as_str())
            .map_err(Error::database)?
            .map(|guard| guard.value().to_string());
        if let Some(owner) = owner
            && owner != key
        {
            return Err(Error::duplicate_key(fields.email));
        }

        let previous_email = employee.email.clone();
        employee.replace(fields);

        let doc = serde_json::to_vec(&employee)?;
        employees
            .insert(key.as_str(), doc.as_slice())
            .map_err(Error::database)?;
        if previous_email != employee.email {
            emails
                .remove(previous_email.as_str())
                .map_err(Error::database)?;
            emails
                .insert(employee.email.as_str(), key.as_str())
                .map_err(Error::database)?;
        }
        employee
    };
    txn.commit().map_err(Error::database)?;
    Ok(Some(updated))
}

fn delete_blocking(db: &Database, id: EmployeeId) -> Result<Option<Employee>> {
    let key = id.to_string();
    let txn = db.begin_write().map_err(Error::database)?;
    let removed = {
        let mut employees = txn.open_table(EMPLOYEES).map_err(Error::database)?;
        let removed = match employees.remove(key.as_str()).map_err(Error::database)? {
            Some(guard) => Some(decode(guard.value())?),
            None => None,
        };
        if let Some(employee) = &removed {
            let mut emails = txn.open_table(EMAILS).map_err(Error::database)?;
            emails
                .remove(employee.email.as_str())
                .map_err(Error::database)?;
        }
        removed
    };
    txn.commit().map_err(Error::database)?;
    Ok(removed)
}

#[async_trait]
impl EmployeeStore for RedbStore {
    fn backend_name(&self) -> &'static str {
        "redb"
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<Employee> {
        let fields = validate_fields(fields)?;
        let employee = self.run(move |db| insert_blocking(db, fields)).await?;
        log::debug!("redb store: inserted employee {}", employee.id);
        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        self.run(find_all_blocking).await
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        self.run(move |db| find_by_id_blocking(db, id)).await
    }

    async fn replace_by_id(
        &self,
        id: EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Option<Employee>> {
        let fields = validate_fields(fields)?;
        let updated = self.run(move |db| replace_blocking(db, id, fields)).await?;
        if updated.is_some() {
            log::debug!("redb store: replaced employee {id}");
        }
        Ok(updated)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let removed = self.run(move |db| delete_blocking(db, id)).await?;
        if removed.is_some() {
            log::debug!("redb store: deleted employee {id}");
        }
        Ok(removed)
    }
}
