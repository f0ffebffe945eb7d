use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Flattens validator output into a single client-facing message.
///
/// Messages are ordered by field name and joined with `"; "`. Errors without
/// a message fall back to `"<field> is invalid"`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// `validator` hook for event dates, see [`util::timestamp::parse_timestamp`].
pub fn validate_timestamp(value: &str) -> Result<(), ValidationError> {
    match util::timestamp::parse_timestamp(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("timestamp")
            .with_message(Cow::Borrowed("Date must be a valid timestamp"))),
    }
}
