use crate::errors::ServiceError;

/// Presence check over named optional fields. Absent and empty strings count
/// as missing; whitespace is a value.
/// Returns the values in order, or one error naming every missing field.
pub fn require<const N: usize>(fields: [(&str, Option<String>); N]) -> Result<[String; N], ServiceError> {
    let mut missing = Vec::new();
    let values = fields.map(|(name, value)| match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(name.to_string());
            String::new()
        }
    });
    if missing.is_empty() {
        Ok(values)
    } else {
        Err(ServiceError::Validation(format!("missing required fields: {}", missing.join(", "))))
    }
}
