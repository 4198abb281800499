use crate::domain::model::{Department, Employee, EmployeeId};
use crate::utils::error::{Result, RosterError};

/// In-memory directory of departments, keyed by department name.
///
/// Departments are kept in insertion order so listings are stable between
/// runs. Lookups are linear; a roster is small enough that an index would
/// only add a second structure to keep consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryStore {
    departments: Vec<Department>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_department(&mut self, department: Department) -> Result<()> {
        if self.get_department(department.name()).is_some() {
            return Err(RosterError::DuplicateDepartment {
                name: department.name().to_string(),
            });
        }

        tracing::debug!("Adding department '{}'", department.name());
        self.departments.push(department);
        Ok(())
    }

    pub fn remove_department(&mut self, name: &str) -> Result<Department> {
        let index = self
            .departments
            .iter()
            .position(|d| d.name() == name)
            .ok_or_else(|| not_found(name))?;

        tracing::debug!("Removing department '{}'", name);
        Ok(self.departments.remove(index))
    }

    pub fn add_employee(&mut self, department_name: &str, employee: Employee) -> Result<()> {
        let department = self.department_mut(department_name)?;
        tracing::debug!("Adding employee {} to '{}'", employee, department_name);
        department.add_employee(employee);
        Ok(())
    }

    /// Removes every employee named `employee_name` from the department.
    ///
    /// Zero matches is not an error; callers get `Ok(0)` and decide how to
    /// report it.
    pub fn remove_employee(
        &mut self,
        department_name: &str,
        employee_name: &str,
    ) -> Result<usize> {
        let department = self.department_mut(department_name)?;
        let removed = department.remove_employees_named(employee_name);
        tracing::debug!(
            "Removed {} employee(s) named '{}' from '{}'",
            removed,
            employee_name,
            department_name
        );
        Ok(removed)
    }

    pub fn list_departments(&self) -> Vec<&str> {
        self.departments.iter().map(|d| d.name()).collect()
    }

    pub fn list_employees(&self, department_name: &str) -> Result<&[Employee]> {
        self.get_department(department_name)
            .map(|d| d.employees())
            .ok_or_else(|| not_found(department_name))
    }

    pub fn get_department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name() == name)
    }

    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.iter()
    }

    pub fn find_employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.departments
            .iter()
            .flat_map(|d| d.employees())
            .find(|e| e.id() == id)
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    pub fn employee_count(&self) -> usize {
        self.departments.iter().map(|d| d.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    fn department_mut(&mut self, name: &str) -> Result<&mut Department> {
        self.departments
            .iter_mut()
            .find(|d| d.name() == name)
            .ok_or_else(|| not_found(name))
    }
}

fn not_found(name: &str) -> RosterError {
    RosterError::DepartmentNotFound {
        name: name.to_string(),
    }
}
