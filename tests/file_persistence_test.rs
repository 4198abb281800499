use anyhow::Result;
use small_roster::{FileStorage, Roster, RosterError, Storage};
use tempfile::TempDir;

#[test]
fn test_fresh_data_file_starts_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("saved_data.json");

    let roster = Roster::open(FileStorage::new(&path))?;

    assert!(roster.list_departments().is_empty());
    assert!(!path.exists(), "opening must not create the file");
    Ok(())
}

#[test]
fn test_mutations_survive_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("saved_data.json");

    let alice_id = {
        let mut roster = Roster::open(FileStorage::new(&path))?;
        roster.add_department("Engineering")?;
        roster.add_department("Sales")?;
        let id = roster.add_employee("Engineering", "Alice", "Engineer")?;
        roster.add_employee("Sales", "Bob", "Rep")?;
        roster.remove_department("Sales")?;
        id
    };

    let roster = Roster::open(FileStorage::new(&path))?;
    assert_eq!(roster.list_departments(), vec!["Engineering"]);
    let employees = roster.list_employees("Engineering")?;
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id(), &alice_id);
    assert_eq!(employees[0].department_name(), "Engineering");
    Ok(())
}

#[test]
fn test_file_written_after_each_mutation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("saved_data.json");
    let mut roster = Roster::open(FileStorage::new(&path))?;

    roster.add_department("Engineering")?;
    let after_department = std::fs::read_to_string(&path)?;
    assert!(after_department.contains("\"department_name\": \"Engineering\""));

    roster.add_employee("Engineering", "Alice", "Engineer")?;
    let after_employee = std::fs::read_to_string(&path)?;
    assert!(after_employee.contains("\"name\": \"Alice\""));
    assert!(after_employee.contains("\"ID\""));
    Ok(())
}

#[test]
fn test_reads_files_from_the_original_tool() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("saved_data.json");
    std::fs::write(
        &path,
        r#"{
    "Engineering": {
        "department_name": "Engineering",
        "employees_list": [
            {
                "ID": "0b5e3a8c-3f52-4a51-9a55-3d2f6d0f7c11",
                "name": "Alice",
                "title": "Engineer",
                "department": "Engineering"
            }
        ]
    }
}"#,
    )?;

    let mut roster = Roster::open(FileStorage::new(&path))?;
    roster.add_department("Sales")?;

    let rewritten = std::fs::read_to_string(&path)?;
    assert!(rewritten.contains("\"department_name\": \"Engineering\""));
    assert!(rewritten.contains("0b5e3a8c-3f52-4a51-9a55-3d2f6d0f7c11"));
    assert!(!rewritten.contains("\"department\":"));
    Ok(())
}

#[test]
fn test_damaged_file_is_a_codec_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("saved_data.json");
    std::fs::write(&path, r#"{"Engineering": {"employees_list": []}}"#)?;

    let result = Roster::open(FileStorage::new(&path));

    assert!(matches!(result, Err(RosterError::CodecError { .. })));
    Ok(())
}

#[test]
fn test_failed_save_rolls_back() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("saved_data.json");
    let mut roster = Roster::open(FileStorage::new(&path))?;

    // a directory in place of the data file makes the final rename fail
    std::fs::create_dir(&path)?;
    let err = roster.add_department("Engineering").unwrap_err();

    assert!(matches!(err, RosterError::IoError(_)));
    assert!(roster.list_departments().is_empty());
    assert!(!temp_dir.path().join("saved_data.json.tmp").exists());
    Ok(())
}

#[test]
fn test_directory_as_data_file_fails_to_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = FileStorage::new(temp_dir.path());

    assert!(matches!(storage.load(), Err(RosterError::IoError(_))));
    Ok(())
}
