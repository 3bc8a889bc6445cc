use serde::Deserialize;

use crate::server::error::AppError;

/// Query string carrying a player id (`?id=`).
#[derive(Deserialize, Debug, Default)]
pub struct IdParam {
    pub id: Option<String>,
}

/// Query string carrying a server name (`?server=`).
#[derive(Deserialize, Debug, Default)]
pub struct ServerParam {
    pub server: Option<String>,
}

/// Returns `value` when it is present and non-empty.
///
/// # Returns
/// - `Ok(String)` - The value
/// - `Err(AppError::BadRequest)` - Missing or empty, naming `field`
pub fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(format!("Missing required field: {}", field))),
    }
}

/// Fails with the first empty field among `fields`.
pub fn require_all<S: AsRef<str>>(fields: &[(&str, S)]) -> Result<(), AppError> {
    match fields.iter().find(|(_, value)| value.as_ref().is_empty()) {
        Some((name, _)) => Err(AppError::BadRequest(format!(
            "Missing required field: {}",
            name
        ))),
        None => Ok(()),
    }
}
