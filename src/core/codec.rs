//! JSON encoding of a [`DirectoryStore`].
//!
//! The persisted layout is fixed for compatibility with existing data files:
//!
//! ```text
//! {
//!     "<department>": {
//!         "department_name": "<department>",
//!         "employees_list": [
//!             { "ID": "...", "name": "...", "title": "...", "department_name": "..." }
//!         ]
//!     }
//! }
//! ```
//!
//! Older files spell the employee field `department`; it is accepted on
//! read and always written back as `department_name`.

use crate::core::directory::DirectoryStore;
use crate::domain::model::{Department, Employee, EmployeeId};
use crate::utils::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize, Deserialize)]
struct DepartmentRecord {
    department_name: String,
    employees_list: Vec<EmployeeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EmployeeRecord {
    #[serde(rename = "ID")]
    id: String,
    name: String,
    title: String,
    #[serde(alias = "department")]
    department_name: String,
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id().to_string(),
            name: employee.name().to_string(),
            title: employee.title().to_string(),
            department_name: employee.department_name().to_string(),
        }
    }
}

impl From<&Department> for DepartmentRecord {
    fn from(department: &Department) -> Self {
        Self {
            department_name: department.name().to_string(),
            employees_list: department.employees().iter().map(EmployeeRecord::from).collect(),
        }
    }
}

impl EmployeeRecord {
    fn into_employee(self, key: &str) -> Result<Employee> {
        if self.id.is_empty() {
            return Err(RosterError::codec(format!(
                "department '{}': employee '{}' has an empty ID",
                key, self.name
            )));
        }

        Employee::new(
            self.name,
            self.title,
            self.department_name,
            Some(EmployeeId::from(self.id)),
        )
        .map_err(|e| RosterError::codec(format!("department '{}': {}", key, e)))
    }
}

/// Encodes the store as pretty-printed JSON with four-space indentation.
pub fn encode(store: &DirectoryStore) -> Result<String> {
    let mut root = Map::new();
    for department in store.departments() {
        let record = serde_json::to_value(DepartmentRecord::from(department))?;
        root.insert(department.name().to_string(), record);
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Value::Object(root).serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| RosterError::codec(e.to_string()))
}

/// Decodes persisted text. Blank input is an empty store.
pub fn decode(text: &str) -> Result<DirectoryStore> {
    let mut store = DirectoryStore::new();
    if text.trim().is_empty() {
        return Ok(store);
    }

    let root: Map<String, Value> = serde_json::from_str(text)
        .map_err(|e| RosterError::codec(format!("expected an object of departments: {}", e)))?;

    for (key, value) in root {
        let record = DepartmentRecord::deserialize(value)
            .map_err(|e| RosterError::codec(format!("department '{}': {}", key, e)))?;

        if record.department_name != key {
            return Err(RosterError::codec(format!(
                "department key '{}' does not match department_name '{}'",
                key, record.department_name
            )));
        }

        let employees = record
            .employees_list
            .into_iter()
            .map(|e| e.into_employee(&key))
            .collect::<Result<Vec<_>>>()?;

        let department = Department::from_parts(record.department_name, employees)
            .map_err(|e| RosterError::codec(format!("department '{}': {}", key, e)))?;
        store.add_department(department)?;
    }

    tracing::debug!(
        "Decoded {} department(s), {} employee(s)",
        store.department_count(),
        store.employee_count()
    );
    Ok(store)
}
