use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of an employee record.
///
/// Fresh ids are random v4 UUIDs. Ids read back from storage are kept
/// verbatim, whatever their textual form, and are never regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    title: String,
    department_name: String,
}

impl Employee {
    /// Builds a validated employee, allocating an id when none is given.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        department_name: impl Into<String>,
        id: Option<EmployeeId>,
    ) -> Result<Self> {
        let name = name.into();
        let title = title.into();
        validate_non_empty_string("name", &name)?;
        validate_non_empty_string("title", &title)?;

        Ok(Self {
            id: id.unwrap_or_default(),
            name,
            title,
            department_name: department_name.into(),
        })
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Department name captured when the record was created or last added
    /// to a department.
    pub fn department_name(&self) -> &str {
        &self.department_name
    }

    pub fn details(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.id, self.name, self.title, self.department_name
        )
    }

    pub(crate) fn stamp_department(&mut self, department_name: &str) {
        if self.department_name != department_name {
            tracing::warn!(
                "Re-stamping employee {} department '{}' -> '{}'",
                self.id,
                self.department_name,
                department_name
            );
            self.department_name = department_name.to_string();
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    name: String,
    employees: Vec<Employee>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_non_empty_string("department_name", &name)?;
        Ok(Self {
            name,
            employees: Vec::new(),
        })
    }

    /// Rebuilds a department from persisted data. Employees keep the
    /// department name they were stored with.
    pub(crate) fn from_parts(name: String, employees: Vec<Employee>) -> Result<Self> {
        let mut department = Self::new(name)?;
        department.employees = employees;
        Ok(department)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn add_employee(&mut self, mut employee: Employee) {
        employee.stamp_department(&self.name);
        self.employees.push(employee);
    }

    /// Removes every employee with exactly this name, returning how many went.
    pub fn remove_employees_named(&mut self, employee_name: &str) -> usize {
        let before = self.employees.len();
        self.employees.retain(|e| e.name != employee_name);
        before - self.employees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RosterError;

    #[test]
    fn test_employee_requires_name_and_title() {
        let err = Employee::new("", "Engineer", "Engineering", None).unwrap_err();
        assert!(matches!(err, RosterError::ValidationError { ref field, .. } if field == "name"));

        let err = Employee::new("Alice", "", "Engineering", None).unwrap_err();
        assert!(matches!(err, RosterError::ValidationError { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_blank_name_and_title_are_accepted() {
        let employee = Employee::new(" ", "  ", "Engineering", None).unwrap();
        assert_eq!(employee.name(), " ");
        assert_eq!(employee.title(), "  ");
    }

    #[test]
    fn test_explicit_id_is_kept() {
        let employee = Employee::new(
            "Alice",
            "Engineer",
            "Engineering",
            Some(EmployeeId::from("legacy-id-1")),
        )
        .unwrap();
        assert_eq!(employee.id().as_str(), "legacy-id-1");
    }

    #[test]
    fn test_generated_ids_do_not_collide() {
        let a = Employee::new("Alice", "Engineer", "Engineering", None).unwrap();
        let b = Employee::new("Alice", "Engineer", "Engineering", None).unwrap();
        assert_ne!(a.id(), b.id());
        assert!(Uuid::parse_str(a.id().as_str()).is_ok());
    }

    #[test]
    fn test_display_formats() {
        let employee =
            Employee::new("Alice", "Engineer", "Engineering", Some("id-1".into())).unwrap();
        assert_eq!(employee.to_string(), "id-1 - Alice");
        assert_eq!(employee.details(), "id-1, Alice, Engineer, Engineering");
    }

    #[test]
    fn test_department_requires_name() {
        assert!(Department::new("").is_err());
        let department = Department::new("Engineering").unwrap();
        assert!(department.is_empty());
    }

    #[test]
    fn test_departments_do_not_share_employees() {
        let mut a = Department::new("A").unwrap();
        let b = Department::new("B").unwrap();

        a.add_employee(Employee::new("Alice", "Engineer", "A", None).unwrap());

        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_add_employee_restamps_department() {
        let mut department = Department::new("Sales").unwrap();
        department.add_employee(Employee::new("Bob", "Rep", "Marketing", None).unwrap());
        assert_eq!(department.employees()[0].department_name(), "Sales");
    }

    #[test]
    fn test_remove_employees_named_removes_all_matches() {
        let mut department = Department::new("Engineering").unwrap();
        for name in ["Alice", "Bob", "Alice"] {
            department.add_employee(Employee::new(name, "Engineer", "Engineering", None).unwrap());
        }

        assert_eq!(department.remove_employees_named("Alice"), 2);
        assert_eq!(department.len(), 1);
        assert_eq!(department.employees()[0].name(), "Bob");
        assert_eq!(department.remove_employees_named("Carol"), 0);
    }
}
