use crate::core::{Roster, Storage};
use crate::utils::error::{ErrorSeverity, Result};
use std::io::{BufRead, Write};

const SEPARATOR_WIDTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    AddEmployee,
    RemoveEmployee,
    ListDepartments,
    AddDepartment,
    RemoveDepartment,
    DepartmentDetails,
    Exit,
}

impl Command {
    fn parse(option: &str) -> Option<Self> {
        match option.trim() {
            "1" => Some(Command::AddEmployee),
            "2" => Some(Command::RemoveEmployee),
            "3" => Some(Command::ListDepartments),
            "4" => Some(Command::AddDepartment),
            "5" => Some(Command::RemoveDepartment),
            "6" => Some(Command::DepartmentDetails),
            "7" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Text menu over a [`Roster`]. Reads commands from `input` and writes
/// prompts and results to `output` until the user exits or input ends.
///
/// Recoverable errors are printed and the loop goes on; critical ones
/// (storage or data damage) end the session and are returned.
pub struct Menu<'a, S: Storage, R: BufRead, W: Write> {
    roster: &'a mut Roster<S>,
    input: R,
    output: W,
}

impl<'a, S: Storage, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(roster: &'a mut Roster<S>, input: R, output: W) -> Self {
        Self {
            roster,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(option) = self.read_line("Enter option (1-7): ")? else {
                tracing::debug!("Input closed, leaving menu");
                return Ok(());
            };
            writeln!(self.output, "{}", "=".repeat(SEPARATOR_WIDTH))?;

            let Some(command) = Command::parse(&option) else {
                writeln!(self.output, "INVALID INPUT")?;
                continue;
            };
            if command == Command::Exit {
                writeln!(self.output, "Exiting app...")?;
                return Ok(());
            }

            if let Err(e) = self.dispatch(command) {
                if e.severity() == ErrorSeverity::Critical {
                    return Err(e);
                }
                tracing::debug!("Command {:?} failed: {}", command, e);
                writeln!(self.output, "Error: {}", e.user_friendly_message())?;
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::AddEmployee => self.add_employee(),
            Command::RemoveEmployee => self.remove_employee(),
            Command::ListDepartments => self.list_departments(),
            Command::AddDepartment => self.add_department(),
            Command::RemoveDepartment => self.remove_department(),
            Command::DepartmentDetails => self.department_details(),
            Command::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Add Employee")?;
        writeln!(self.output, "2. Remove Employee")?;
        writeln!(self.output, "3. Display Departments")?;
        writeln!(self.output, "4. Add a new Department")?;
        writeln!(self.output, "5. Remove a Department")?;
        writeln!(self.output, "6. View department details")?;
        writeln!(self.output, "7. Exit")?;
        Ok(())
    }

    fn add_employee(&mut self) -> Result<()> {
        if self.roster.list_departments().is_empty() {
            writeln!(
                self.output,
                "No department available in the company. Add a department first"
            )?;
            return Ok(());
        }

        let name = self.prompt("Enter employee name: ")?;
        let title = self.prompt("Enter employee title: ")?;
        writeln!(self.output, "Select department")?;
        self.list_departments()?;
        let department = self.prompt("Enter department name: ")?;

        let id = self.roster.add_employee(&department, &name, &title)?;
        writeln!(self.output, "Added employee {} - {}", id, name)?;
        Ok(())
    }

    fn remove_employee(&mut self) -> Result<()> {
        writeln!(self.output, "Select department")?;
        self.list_departments()?;
        let department = self.prompt("Enter department name: ")?;

        for employee in self.roster.list_employees(&department)? {
            writeln!(self.output, "{}", employee)?;
        }
        let name = self.prompt("Enter employee name: ")?;

        match self.roster.remove_employee(&department, &name)? {
            0 => writeln!(self.output, "No employee named '{}' in {}", name, department)?,
            removed => writeln!(self.output, "Removed {} employee(s) named '{}'", removed, name)?,
        }
        Ok(())
    }

    fn list_departments(&mut self) -> Result<()> {
        for name in self.roster.list_departments() {
            writeln!(self.output, "{}", name)?;
        }
        Ok(())
    }

    fn add_department(&mut self) -> Result<()> {
        let name = self.prompt("Enter department name: ")?;
        self.roster.add_department(&name)?;
        writeln!(self.output, "Added department to company")?;
        Ok(())
    }

    fn remove_department(&mut self) -> Result<()> {
        writeln!(self.output, "Select department")?;
        self.list_departments()?;
        let name = self.prompt("Enter department name: ")?;
        self.roster.remove_department(&name)?;
        writeln!(self.output, "Removed department from company")?;
        Ok(())
    }

    fn department_details(&mut self) -> Result<()> {
        writeln!(self.output, "Select department")?;
        self.list_departments()?;
        let name = self.prompt("Enter department name: ")?;

        let Some(department) = self.roster.get_department(&name) else {
            writeln!(self.output, "Department '{}' doesn't exist", name)?;
            return Ok(());
        };

        writeln!(self.output, "Department name: {}", department.name())?;
        writeln!(self.output, "Employees:")?;
        for employee in department.employees() {
            writeln!(self.output, "{}", employee.details())?;
        }
        Ok(())
    }

    /// Reads one answer; end of input reads as an empty answer.
    fn prompt(&mut self, message: &str) -> Result<String> {
        Ok(self.read_line(message)?.unwrap_or_default())
    }

    fn read_line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
