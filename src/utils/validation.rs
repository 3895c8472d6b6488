use crate::utils::error::{Result, ZipfError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Source names must end in `.csv` before any I/O is attempted on them.
/// This is a validation failure, not a filesystem error.
pub fn validate_csv_suffix(name: &str) -> Result<()> {
    if !name.ends_with(".csv") {
        return Err(ZipfError::ValidationError {
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ZipfError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(ZipfError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ZipfError::ConfigError {
            message: format!("{} must be at least {}", field_name, min_value),
        });
    }
    Ok(())
}
