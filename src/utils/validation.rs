use crate::utils::error::{DomainsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects only the empty string; whitespace is kept as given.
pub fn validate_not_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DomainsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DomainsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DomainsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
