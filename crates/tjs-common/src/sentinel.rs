//! The completion sentinel.
//!
//! Before re-checking a file for completion, the identifier under the cursor
//! gets this token appended so the checker always sees an identifier there,
//! even when the user has typed nothing yet (`foo.|`, `<Comp |`).

/// Synthetic identifier fragment inserted at the cursor.
pub const SENTINEL_TOKEN: &str = "AUTO332";

/// Width of [`SENTINEL_TOKEN`] in columns (and bytes; the token is ASCII).
pub const SENTINEL_WIDTH: u32 = SENTINEL_TOKEN.len() as u32;

/// Whether `name` is (or contains) the sentinel, i.e. it is the identifier
/// currently being completed rather than a real binding or member.
pub fn is_sentinel_name(name: &str) -> bool {
    name.contains(SENTINEL_TOKEN)
}

#[cfg(test)]
mod sentinel_tests {
    use super::*;

    #[test]
    fn test_width_matches_token() {
        assert_eq!(SENTINEL_WIDTH as usize, SENTINEL_TOKEN.len());
        assert!(SENTINEL_TOKEN.is_ascii());
    }

    #[test]
    fn test_sentinel_detection() {
        assert!(is_sentinel_name("AUTO332"));
        assert!(is_sentinel_name("baAUTO332"));
        assert!(!is_sentinel_name("ba"));
        assert!(!is_sentinel_name("AUTO33"));
    }
}
