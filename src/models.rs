//! Frontend Models
//!
//! Data structures persisted to browser storage.

use serde::{Deserialize, Serialize};

/// Length of a generated item id
pub const ID_LEN: usize = 10;

/// A single to-do entry
///
/// Immutable once created; only its list membership changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque identifier, never shown to the user
    pub id: String,
    /// User supplied text
    pub text: String,
}

impl TodoItem {
    pub fn new(id: String, text: String) -> Self {
        Self { id, text }
    }
}

/// Build an id of `ID_LEN` lowercase ascii letters.
///
/// `random` must yield values in `[0, 1)`, like `Math.random`.
pub fn generate_id(random: &mut dyn FnMut() -> f64) -> String {
    (0..ID_LEN)
        .map(|_| {
            let offset = ((random() * 26.0).floor() as u8).min(25);
            char::from(b'a' + offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_shape() {
        let mut seq = [0.0, 0.5, 0.999_999].into_iter().cycle();
        let id = generate_id(&mut || seq.next().unwrap());
        assert_eq!(id.len(), ID_LEN);
        assert_eq!(id, "anzanzanza");
    }

    #[test]
    fn test_generate_id_clamps_out_of_range() {
        let id = generate_id(&mut || 1.0);
        assert_eq!(id, "zzzzzzzzzz");
    }

    #[test]
    fn test_item_json_layout() {
        let item = TodoItem::new("abcdefghij".to_string(), "Buy milk".to_string());
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"abcdefghij","text":"Buy milk"}"#);
    }
}
