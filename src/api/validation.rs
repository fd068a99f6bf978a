use time::PrimitiveDateTime;

use crate::api::errors::ApiError;
use crate::core::time::parse_rfc3339_utc;

pub(crate) fn ensure_upload_size(
    current_len: usize,
    next_len: usize,
    max_bytes: u64,
    max_upload_size_mb: u64,
) -> Result<(), ApiError> {
    if (current_len as u64).saturating_add(next_len as u64) > max_bytes {
        Err(ApiError::BadRequest(format!("File size exceeds {max_upload_size_mb}MB limit")))
    } else {
        Ok(())
    }
}

pub(crate) fn parse_due_date(value: Option<&str>) -> Result<Option<PrimitiveDateTime>, ApiError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => parse_rfc3339_utc(value).map(Some).ok_or_else(|| {
            ApiError::BadRequest("due_date must be an RFC 3339 timestamp".to_string())
        }),
    }
}
