pub mod formats;
pub mod native;
pub mod primitive;

use dataschemes::{Kind, Value, asnative};

use crate::error::CoerceError;

/// Parse command-line text into a value of `kind`.
///
/// Booleans are read as `true`/`false` literals; the library's truthiness
/// cast would turn any non-empty text, `"false"` included, into `true`.
fn parse_value(kind: Kind, text: &str) -> Result<Value, CoerceError> {
    if kind == Kind::Boolean {
        return text
            .trim()
            .parse::<bool>()
            .map(Value::Boolean)
            .map_err(|source| CoerceError::InvalidBoolean {
                text: text.to_string(),
                source,
            });
    }
    Ok(asnative(kind, &Value::from(text), None)?)
}

fn print(value: &Value) {
    println!("{}: {value}", value.kind());
}
