//! Identifier case helpers used to derive public and private Go names.

/// Upper-case the first character (e.g., "oneField" -> "OneField").
///
/// The rest of the string is left untouched. An empty string stays empty.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character (e.g., "OneField" -> "oneField").
///
/// The rest of the string is left untouched. An empty string stays empty.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Whether `s` is exported in Go terms: its first character is upper-case.
pub fn is_public(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Whether the first character of `s` lower-cases to exactly one character
/// that upper-cases back to itself, so `capitalize(&decapitalize(s)) == s`.
pub fn has_private_form(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    let mut lower = first.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => {
            let mut upper = c.to_uppercase();
            upper.next() == Some(first) && upper.next().is_none()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("oneField"), "OneField");
        assert_eq!(capitalize("OneField"), "OneField");
        assert_eq!(capitalize("v"), "V");
        assert_eq!(capitalize("hTTP"), "HTTP");
        assert_eq!(capitalize("_x"), "_x");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("OneField"), "oneField");
        assert_eq!(decapitalize("V"), "v");
        assert_eq!(decapitalize("HTTP"), "hTTP");
        assert_eq!(decapitalize("Élan"), "élan");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_round_trip_for_public_names() {
        for name in ["A", "OneField", "First", "HTTPServer", "Élan", "X1"] {
            assert_eq!(capitalize(&decapitalize(name)), name);
        }
    }

    #[test]
    fn test_is_public() {
        assert!(is_public("OneField"));
        assert!(is_public("Élan"));
        assert!(!is_public("oneField"));
        assert!(!is_public("_Hidden"));
        assert!(!is_public("1abc"));
        assert!(!is_public(""));
    }

    #[test]
    fn test_has_private_form() {
        for name in ["A", "OneField", "Élan", "X1"] {
            assert!(has_private_form(name), "{:?}", name);
        }
        // U+0130 lower-cases to `i` plus a combining dot.
        assert!(!has_private_form("İd"));
        assert_eq!(decapitalize("İd"), "i\u{307}d");
        // U+1E9E lower-cases to `ß`, which upper-cases to "SS".
        assert!(!has_private_form("ẞig"));
        assert_eq!(capitalize(&decapitalize("ẞig")), "SSig");
        assert!(!has_private_form(""));
    }
}
