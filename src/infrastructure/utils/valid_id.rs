use crate::errors::AppError;

/// Backend ids are opaque strings. Anything empty or containing a path separator would
/// escape its storage folder, so it is rejected before a request is built.
pub fn valid_entity_id(id: &str) -> Result<&str, AppError> {
    let id = id.trim();
    if id.is_empty() || id.contains('/') || id.contains('\\') {
        return Err(AppError::BadRequest("Invalid id format".to_string()));
    }
    Ok(id)
}
