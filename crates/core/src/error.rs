#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Collapse field errors into one human-readable message.
///
/// Custom messages are preferred over validator codes; duplicates are
/// dropped and fields are reported in name order.
impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{field} is invalid ({})", e.code),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut messages: Vec<String> = Vec::new();
        for message in fields.into_iter().flat_map(|(_, m)| m) {
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
        CoreError::Validation(messages.join("; "))
    }
}
