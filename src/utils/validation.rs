use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RosterError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RosterError::config(format!("{}: path cannot be empty", field_name)));
    }

    if path.contains('\0') {
        return Err(RosterError::config(format!(
            "{}: path contains null bytes",
            field_name
        )));
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RosterError::config(format!(
            "{}: unsupported value '{}'. Allowed values: {}",
            field_name,
            value,
            allowed.join(", ")
        )));
    }
    Ok(())
}
