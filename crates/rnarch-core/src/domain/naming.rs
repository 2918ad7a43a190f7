//! Naming-convention normalization for feature/model/screen names.
//!
//! A raw user-supplied name is normalized once into the canonical case forms
//! used across templates and paths. Normalization is pure, total, and
//! deterministic: the same input always yields the same forms, and the forms
//! are mutually derivable (pascal = capitalized snake segments, camel =
//! pascal with the first letter lowered).

use std::fmt;

/// A feature/model/screen name with its derived case forms.
///
/// All four forms are computed eagerly at construction from a single word
/// split, so they can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureName {
    raw: String,
    snake: String,
    pascal: String,
    camel: String,
    kebab: String,
}

impl FeatureName {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let words = split_words(&raw);

        let snake = words.join("_");
        let kebab = words.join("-");
        let pascal: String = words.iter().map(|w| capitalize(w)).collect();
        let camel = match pascal.chars().next() {
            Some(first) => first.to_lowercase().collect::<String>() + &pascal[first.len_utf8()..],
            None => String::new(),
        };

        Self {
            raw,
            snake,
            pascal,
            camel,
            kebab,
        }
    }

    /// The name exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn snake(&self) -> &str {
        &self.snake
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn camel(&self) -> &str {
        &self.camel
    }

    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    /// The `auth` special case compares the raw argument, not a normalized
    /// form: only a literal `auth` triggers the Login/Register screen pair.
    pub fn is_auth(&self) -> bool {
        self.raw == "auth"
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.snake)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Split a string into lowercase words based on casing and separators.
///
/// Boundaries:
/// 1. Explicit separators: `_`, `-`, whitespace
/// 2. camelCase transition: `aB` splits between `a` and `B`
/// 3. Acronym boundary: `HTTPRequest` splits between `P` and `R`
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Upper, next Upper, next-next lower: acronym ends here.
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_separated_name_normalizes() {
        let n = FeatureName::new("user profile");
        assert_eq!(n.snake(), "user_profile");
        assert_eq!(n.pascal(), "UserProfile");
        assert_eq!(n.camel(), "userProfile");
        assert_eq!(n.kebab(), "user-profile");
    }

    #[test]
    fn forms_are_mutually_derivable() {
        // pascal = capitalize each snake segment; camel = pascal with the
        // first letter lowered.
        for raw in ["order", "userProfile", "user_profile", "MyHTTPServer"] {
            let n = FeatureName::new(raw);
            let derived_pascal: String = n
                .snake()
                .split('_')
                .map(|s| {
                    let mut c = s.chars();
                    c.next()
                        .map(|f| f.to_uppercase().collect::<String>() + c.as_str())
                        .unwrap_or_default()
                })
                .collect();
            assert_eq!(n.pascal(), derived_pascal);

            let mut chars = n.pascal().chars();
            let derived_camel = chars
                .next()
                .map(|f| f.to_lowercase().collect::<String>() + chars.as_str())
                .unwrap_or_default();
            assert_eq!(n.camel(), derived_camel);
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = FeatureName::new("OrderHistory");
        let again = FeatureName::new(once.snake());
        assert_eq!(once.snake(), again.snake());
        assert_eq!(once.pascal(), again.pascal());
        assert_eq!(once.camel(), again.camel());
    }

    #[test]
    fn camel_case_input_splits() {
        let n = FeatureName::new("orderHistory");
        assert_eq!(n.snake(), "order_history");
        assert_eq!(n.pascal(), "OrderHistory");
    }

    #[test]
    fn acronyms_split_correctly() {
        let n = FeatureName::new("XMLHttpRequest");
        assert_eq!(n.snake(), "xml_http_request");
        assert_eq!(n.pascal(), "XmlHttpRequest");
    }

    #[test]
    fn single_word_passes_through() {
        let n = FeatureName::new("billing");
        assert_eq!(n.snake(), "billing");
        assert_eq!(n.pascal(), "Billing");
        assert_eq!(n.camel(), "billing");
    }

    #[test]
    fn empty_input_yields_empty_forms() {
        let n = FeatureName::new("");
        assert_eq!(n.snake(), "");
        assert_eq!(n.pascal(), "");
        assert_eq!(n.camel(), "");
    }

    #[test]
    fn auth_matches_raw_only() {
        assert!(FeatureName::new("auth").is_auth());
        assert!(!FeatureName::new("Auth").is_auth());
        assert!(!FeatureName::new("auth ").is_auth());
        assert!(!FeatureName::new("authentication").is_auth());
    }

    #[test]
    fn collapses_repeated_separators() {
        let n = FeatureName::new("user__profile");
        assert_eq!(n.snake(), "user_profile");
    }
}
