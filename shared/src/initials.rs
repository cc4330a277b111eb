//! Two-letter avatar labels for hosts without an image.

/// Label used when the name carries no characters at all.
pub const UNKNOWN_INITIALS: &str = "??";

fn upper(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

/// Derives a two-character uppercase label from a display name.
///
/// A single word yields its first and last letter (`"Plato"` -> `"PO"`),
/// several words yield the first letter of the first and of the last word
/// (`"Ranveer Allahbadia"` -> `"RA"`). Blank input yields `"??"`.
pub fn derive_initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    let (first, last) = match words.as_slice() {
        [] => return UNKNOWN_INITIALS.to_string(),
        [word] => (word.chars().next(), word.chars().next_back()),
        [head, .., tail] => (head.chars().next(), tail.chars().next()),
    };

    match (first, last) {
        (Some(first), Some(last)) => [upper(first), upper(last)].iter().collect(),
        _ => UNKNOWN_INITIALS.to_string(),
    }
}

/// [`derive_initials`] for names that may be missing.
pub fn derive_initials_opt(name: Option<&str>) -> String {
    name.map_or_else(|| UNKNOWN_INITIALS.to_string(), derive_initials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_fall_back() {
        assert_eq!(derive_initials(""), "??");
        assert_eq!(derive_initials("   \t\n"), "??");
        assert_eq!(derive_initials_opt(None), "??");
    }

    #[test]
    fn single_word_uses_first_and_last_letter() {
        assert_eq!(derive_initials("Plato"), "PO");
        assert_eq!(derive_initials("x"), "XX");
        assert_eq!(derive_initials("  madonna "), "MA");
    }

    #[test]
    fn multiple_words_use_outer_word_initials() {
        assert_eq!(derive_initials("Ranveer Allahbadia"), "RA");
        assert_eq!(derive_initials("  Nikhil   Kamath  "), "NK");
        assert_eq!(derive_initials("raj  k.  shamani"), "RS");
        assert_eq!(derive_initials_opt(Some("Nikhil Kamath")), "NK");
    }

    #[test]
    fn always_two_characters() {
        for name in ["voß", "élodie durand", "42", "a b", "ǆemal"] {
            assert_eq!(derive_initials(name).chars().count(), 2, "{name}");
        }
        assert_eq!(derive_initials("élodie durand"), "ÉD");
        assert_eq!(derive_initials("voß"), "VS");
    }
}
