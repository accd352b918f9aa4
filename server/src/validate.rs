use actix_web::web::Json;
use validator::{Validate, ValidationErrors};

use errors::Error;

// Sorted by field name, since the validator hands the fields back in a HashMap.
fn collect_errors(errors: ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(|err| match err.message {
                    Some(ref message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect::<Vec<String>>()
        })
        .collect()
}

pub fn validate<T>(params: &Json<T>) -> Result<(), Error>
where
    T: Validate,
{
    params
        .validate()
        .map_err(|err| Error::ValidationError(collect_errors(err)))
}
