//! Category slug derivation.

/// Category token meaning "no category filter". Never a real slug.
pub const ALL_CATEGORIES: &str = "all";

/// Derive a slug from a category name: lowercase, each whitespace run becomes `_`.
///
/// Whitespace is Unicode whitespace, so a no-break or ideographic space
/// separates words like an ASCII space does.
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_run {
                slug.push('_');
            }
            in_run = true;
        } else {
            slug.push(c);
            in_run = false;
        }
    }
    slug
}

/// Whether a slug is reserved and cannot name a real category.
pub fn is_reserved(slug: &str) -> bool {
    slug == ALL_CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_slug() {
        assert_eq!(derive_slug("Action Games"), "action_games");
        assert_eq!(derive_slug("Puzzle"), "puzzle");
        assert_eq!(derive_slug("Two   Spaces\tand Tab"), "two_spaces_and_tab");
    }

    #[test]
    fn test_derive_slug_unicode_whitespace() {
        assert_eq!(derive_slug("Action\u{00A0}Games"), "action_games");
        assert_eq!(derive_slug("Action\u{3000}Games"), "action_games");
        assert_eq!(derive_slug("Action \u{00A0}\u{2003}Games"), "action_games");
    }

    #[test]
    fn test_derive_slug_edges_keep_one_underscore() {
        assert_eq!(derive_slug(" Retro  "), "_retro_");
        assert_eq!(derive_slug("Ünïcode Spiele"), "ünïcode_spiele");
    }

    #[test]
    fn test_reserved_all() {
        assert!(is_reserved(&derive_slug("All")));
        assert!(!is_reserved(&derive_slug("All Stars")));
    }
}
