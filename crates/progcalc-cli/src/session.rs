//! Feeding key tokens to a calculator and collecting notices.

use progcalc_core::{CalcError, Calculator};
use progcalc_model::{Key, ModelError};
use serde::Serialize;
use tracing::warn;

/// A rejected key surfaced to the user, the CLI equivalent of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub key: String,
    pub message: String,
}

/// Expands whitespace-separated tokens into keys.
///
/// # Errors
///
/// Returns the first token that is neither a keyword nor a digit run.
pub fn parse_keys<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Key>, ModelError> {
    let mut keys = Vec::new();
    for token in tokens {
        for part in token.as_ref().split_whitespace() {
            keys.extend(Key::parse_token(part)?);
        }
    }
    Ok(keys)
}

/// Dispatches `keys` in order.
///
/// Rejections the user can act on (invalid digit, limit reached, division by
/// zero) become [`Notice`]s and processing continues with the next key.
///
/// # Errors
///
/// Any other engine error stops the session.
pub fn feed(calculator: &mut Calculator, keys: &[Key]) -> Result<Vec<Notice>, CalcError> {
    let mut notices = Vec::new();
    for key in keys {
        match calculator.dispatch(*key) {
            Ok(()) => {}
            Err(error) if error.is_notice() => {
                warn!(key = %key, %error, "key rejected");
                notices.push(Notice {
                    key: key.to_string(),
                    message: error.to_string(),
                });
            }
            Err(error) => return Err(error),
        }
    }
    Ok(notices)
}
