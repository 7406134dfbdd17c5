use crate::server::error::AppError;

/// Parses a resource id taken from a request path.
///
/// Ids that are not positive integers cannot exist, so they are reported as
/// not found rather than as a routing failure.
///
/// # Arguments
/// - `resource` - Resource name used in the log message
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(AppError::NotFound)` - The value is not a positive `i32`
pub fn parse_id(resource: &str, value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(format!("No {} with the id of {}", resource, value)))
}
