//! Slug - filesystem-safe tokens from titles
//!
//! `"Hello, World!"` becomes `hello_world`.

/// Convert a title into a lowercase, underscore-separated token.
///
/// Every maximal run of characters outside `[a-z0-9]` (after lowercasing)
/// collapses to a single `_`; leading and trailing `_` are stripped.
///
/// # Examples
/// ```
/// use wsmem::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello_world");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_gap = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if in_gap && !slug.is_empty() {
                slug.push('_');
            }
            slug.push(c);
            in_gap = false;
        } else {
            in_gap = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_well_formed(slug: &str) -> bool {
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            && !slug.starts_with('_')
            && !slug.ends_with('_')
            && !slug.contains("__")
    }

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Hello, World!"), "hello_world");
        assert_eq!(slugify("My Title"), "my_title");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn test_strips_edges() {
        assert_eq!(slugify("  --leading and trailing--  "), "leading_and_trailing");
    }

    #[test]
    fn test_collapses_runs() {
        assert_eq!(slugify("a -- b __ c"), "a_b_c");
        assert_eq!(slugify("snake_case_already"), "snake_case_already");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(slugify("Release 2.0.1 notes"), "release_2_0_1_notes");
    }

    #[test]
    fn test_non_ascii_is_separator() {
        // Lowercased non-ASCII letters fall outside [a-z0-9]
        assert_eq!(slugify("Café Über"), "caf_ber");
        assert_eq!(slugify("日本語 notes"), "notes");
    }

    #[test]
    fn test_well_formed_for_varied_input() {
        let inputs = [
            "",
            "_",
            "a",
            "A_B",
            "Tabs\tand\nnewlines",
            "__x__y__",
            "emoji 🚀 launch",
            "MiXeD-CaSe/Path\\Like",
            "   ",
        ];
        for input in inputs {
            let slug = slugify(input);
            assert!(is_well_formed(&slug), "{input:?} -> {slug:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(slugify("Same Input"), slugify("Same Input"));
    }
}
