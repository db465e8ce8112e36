//! Instance and task identifier generation.

use chrono::Utc;
use uuid::Uuid;

/// Generate a unique identifier of the form `<prefix>-<base36 millis>-<8 hex>`.
///
/// The timestamp part keeps ids roughly sortable by creation time; the uuid
/// suffix keeps ids unique when several are generated in the same millisecond.
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, to_base36(millis), &suffix[..8])
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "zz");
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id("claude");
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "claude");
        assert!(parts[1].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn test_generate_id_unique() {
        let ids: HashSet<String> = (0..200).map(|_| generate_id("task")).collect();
        assert_eq!(ids.len(), 200);
    }
}
