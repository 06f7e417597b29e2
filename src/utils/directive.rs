//! Sort directive codec.
//!
//! A directive is stored in the `sort` query parameter as three tokens
//! separated by single spaces: `"<column> <asc|desc> <a|n>"`, e.g. `"price desc n"`.
//! Anything that does not parse into all three fields decodes to `None`, which
//! callers treat as "no sort".

use tracing::trace;

use crate::models::{SortDir, SortDirective, SortMode};

/// Query key under which the directive is stored.
pub const SORT_KEY: &str = "sort";

/// Decode a raw directive. Tokens past the third are ignored.
pub fn decode(raw: Option<&str>) -> Option<SortDirective> {
    let mut tokens = raw?.split(' ');
    let (column, dir, mode) = (tokens.next()?, tokens.next()?, tokens.next()?);
    if column.is_empty() {
        return None;
    }
    let (Ok(dir), Ok(mode)) = (dir.parse::<SortDir>(), mode.parse::<SortMode>()) else {
        trace!(?raw, "Ignoring malformed sort directive");
        return None;
    };
    Some(SortDirective::new(column, dir, mode))
}

#[inline]
pub fn encode(directive: &SortDirective) -> String {
    directive.to_string()
}

/// Column and direction tokens of a raw directive, as a header reads them.
///
/// Needs three tokens like [`decode`], but neither the direction nor the mode
/// token is validated, so a bad mode does not reset the toggle.
pub fn decode_tokens(raw: Option<&str>) -> Option<(&str, &str)> {
    let mut tokens = raw?.split(' ');
    let (column, dir, _mode) = (tokens.next()?, tokens.next()?, tokens.next()?);
    Some((column, dir))
}

/// Compute the directive that results from activating `column` with `mode`.
///
/// `current` is the `(column, direction)` token pair from [`decode_tokens`].
/// A new column always starts ascending, the same column flips direction. The
/// mode always comes from the activation, never from `current`.
pub fn next_directive(current: Option<(&str, &str)>, column: &str, mode: SortMode) -> String {
    let dir = match current {
        Some((prev, dir)) if prev == column => toggle_token(dir),
        _ => SortDir::Asc,
    };
    encode(&SortDirective::new(column, dir, mode))
}

// an empty direction counts as `asc` before toggling, an unknown one as `desc`
fn toggle_token(dir: &str) -> SortDir {
    match dir.parse::<SortDir>() {
        Ok(dir) => dir.toggle(),
        Err(_) if dir.is_empty() => SortDir::Desc,
        Err(_) => SortDir::Asc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode() {
        assert_eq!(
            decode(Some("price desc n")),
            Some(SortDirective::new("price", SortDir::Desc, SortMode::Numeric))
        );
        assert_eq!(
            decode(Some("name asc a")),
            Some(SortDirective::new("name", SortDir::Asc, SortMode::Alpha))
        );
        // extra tokens are ignored
        assert_eq!(
            decode(Some("name asc a trailing")),
            Some(SortDirective::new("name", SortDir::Asc, SortMode::Alpha))
        );
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(decode(None), None);
        assert_eq!(decode(Some("")), None);
        assert_eq!(decode(Some("name")), None);
        assert_eq!(decode(Some("name asc")), None);
        assert_eq!(decode(Some(" asc a")), None);
        assert_eq!(decode(Some("name  asc a")), None);
        assert_eq!(decode(Some("name up a")), None);
        assert_eq!(decode(Some("name asc x")), None);
        assert_eq!(decode(Some("name ASC a")), None);
    }

    #[test]
    fn test_round_trip() {
        for column in ["name", "age", "created_at", "名前"] {
            for dir in [SortDir::Asc, SortDir::Desc] {
                for mode in [SortMode::Alpha, SortMode::Numeric] {
                    let d = SortDirective::new(column, dir, mode);
                    assert_eq!(decode(Some(&encode(&d))), Some(d));
                }
            }
        }
    }

    #[test]
    fn test_next_directive() {
        let current = decode_tokens(Some("age asc n"));
        assert_eq!(next_directive(current, "age", SortMode::Numeric), "age desc n");

        let current = decode_tokens(Some("age desc n"));
        assert_eq!(next_directive(current, "name", SortMode::Alpha), "name asc a");
        assert_eq!(next_directive(current, "age", SortMode::Numeric), "age asc n");
    }

    #[test]
    fn test_toggle_law() {
        let first = next_directive(None, "name", SortMode::Alpha);
        assert_eq!(first, "name asc a");
        let second = next_directive(decode_tokens(Some(&first)), "name", SortMode::Alpha);
        assert_eq!(second, "name desc a");
        let third = next_directive(decode_tokens(Some(&second)), "name", SortMode::Alpha);
        assert_eq!(third, "name asc a");
    }

    #[test]
    fn test_mode_not_inherited() {
        let current = decode_tokens(Some("age asc n"));
        assert_eq!(next_directive(current, "age", SortMode::Alpha), "age desc a");
    }

    #[test]
    fn test_decode_tokens() {
        assert_eq!(decode_tokens(Some("age asc x")), Some(("age", "asc")));
        assert_eq!(decode_tokens(Some("age  n")), Some(("age", "")));
        assert_eq!(decode_tokens(Some("age asc")), None);
        assert_eq!(decode_tokens(None), None);
    }

    #[test]
    fn test_bad_mode_still_toggles() {
        // the sorter ignores it, the header still flips direction
        assert_eq!(decode(Some("age asc x")), None);
        let current = decode_tokens(Some("age asc x"));
        assert_eq!(next_directive(current, "age", SortMode::Numeric), "age desc n");
    }

    #[test]
    fn test_unknown_direction() {
        let current = decode_tokens(Some("age sideways n"));
        assert_eq!(next_directive(current, "age", SortMode::Numeric), "age asc n");
        // an empty direction is read as ascending and flips
        let current = decode_tokens(Some("age  n"));
        assert_eq!(next_directive(current, "age", SortMode::Numeric), "age desc n");
        // too few tokens is no current sort at all
        let current = decode_tokens(Some("age desc"));
        assert_eq!(next_directive(current, "age", SortMode::Numeric), "age asc n");
    }
}
