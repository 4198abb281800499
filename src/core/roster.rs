use crate::core::codec;
use crate::core::directory::DirectoryStore;
use crate::domain::model::{Department, Employee, EmployeeId};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// The directory plus the storage it is persisted to.
///
/// Every successful mutation is encoded and saved before returning. If the
/// save fails the in-memory directory is rolled back to what is on disk and
/// the error is returned.
pub struct Roster<S: Storage> {
    store: DirectoryStore,
    storage: S,
}

impl<S: Storage> Roster<S> {
    pub fn open(storage: S) -> Result<Self> {
        let text = storage.load()?;
        let store = codec::decode(&text)?;
        tracing::info!(
            "Loaded {} department(s), {} employee(s)",
            store.department_count(),
            store.employee_count()
        );
        Ok(Self { store, storage })
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add_department(&mut self, name: &str) -> Result<()> {
        let department = Department::new(name)?;
        self.mutate(|store| store.add_department(department))?;
        tracing::info!("Added department '{}'", name);
        Ok(())
    }

    pub fn remove_department(&mut self, name: &str) -> Result<()> {
        self.mutate(|store| store.remove_department(name))?;
        tracing::info!("Removed department '{}'", name);
        Ok(())
    }

    /// Creates an employee in `department_name` and returns the new id.
    pub fn add_employee(
        &mut self,
        department_name: &str,
        name: &str,
        title: &str,
    ) -> Result<EmployeeId> {
        let employee = Employee::new(name, title, department_name, None)?;
        let id = employee.id().clone();
        self.mutate(|store| store.add_employee(department_name, employee))?;
        tracing::info!("Added employee '{}' ({}) to '{}'", name, id, department_name);
        Ok(id)
    }

    /// Removes every employee named `employee_name`. Nothing is saved when
    /// no one matched.
    pub fn remove_employee(
        &mut self,
        department_name: &str,
        employee_name: &str,
    ) -> Result<usize> {
        let previous = self.store.clone();
        let removed = self.store.remove_employee(department_name, employee_name)?;
        if removed > 0 {
            self.persist_or_restore(previous)?;
            tracing::info!(
                "Removed {} employee(s) named '{}' from '{}'",
                removed,
                employee_name,
                department_name
            );
        }
        Ok(removed)
    }

    pub fn list_departments(&self) -> Vec<&str> {
        self.store.list_departments()
    }

    pub fn list_employees(&self, department_name: &str) -> Result<&[Employee]> {
        self.store.list_employees(department_name)
    }

    pub fn get_department(&self, name: &str) -> Option<&Department> {
        self.store.get_department(name)
    }

    /// Writes the current directory to storage.
    pub fn save(&self) -> Result<()> {
        let text = codec::encode(&self.store)?;
        self.storage.save(&text)?;
        tracing::info!("Saved data");
        Ok(())
    }

    fn mutate<T>(&mut self, op: impl FnOnce(&mut DirectoryStore) -> Result<T>) -> Result<T> {
        let previous = self.store.clone();
        let value = op(&mut self.store)?;
        self.persist_or_restore(previous)?;
        Ok(value)
    }

    fn persist_or_restore(&mut self, previous: DirectoryStore) -> Result<()> {
        if let Err(e) = self.save() {
            tracing::error!("Save failed, restoring previous state: {}", e);
            self.store = previous;
            return Err(e);
        }
        Ok(())
    }
}
