//! Name derivation helpers.
//!
//! Every derived identifier in a generation run flows through this module:
//!
//! | Derivation | Example (`UserProfile`) |
//! |------------|-------------------------|
//! | table name | `user_profiles`         |
//! | route name | `user-profiles`         |
//! | controller | `UserProfileController` |
//! | humanized field | `Start date` (from `start_date`) |
//!
//! The word splitter understands snake_case, kebab-case, camelCase,
//! PascalCase, and acronym runs (`HTTPServer` -> `http`, `server`).

/// Convert to snake_case.
pub fn snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert to kebab-case.
pub fn kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert to StudlyCase (PascalCase).
pub fn studly_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Pluralize the final word of a (possibly separator-joined) name.
///
/// Basic English rules only: trailing consonant+`y` becomes `ies`;
/// sibilant endings (`s`, `x`, `z`, `ch`, `sh`) take `es`; everything
/// else appends `s`. Already-plural input is left as typed by the caller,
/// matching how the original generator behaved.
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let lower = s.to_ascii_lowercase();
    if let Some(stem) = s.strip_suffix('y') {
        let before = stem.chars().last();
        if before.map_or(false, |c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{s}es");
    }
    format!("{s}s")
}

/// Humanize a field name: capitalize the first letter, then replace
/// underscores with spaces. `start_date` -> `Start date`.
pub fn humanize(field: &str) -> String {
    capitalize(field).replace('_', " ")
}

/// Derived table name for a resource: pluralized snake_case.
pub fn table_name(resource: &str) -> String {
    pluralize(&snake_case(resource))
}

/// Derived route name for a resource: pluralized kebab-case.
pub fn route_name(resource: &str) -> String {
    pluralize(&kebab_case(resource))
}

/// Derived controller class name for a resource.
pub fn controller_name(resource: &str) -> String {
    format!("{}Controller", studly_case(resource))
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
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

/// Split an identifier into lowercase words.
///
/// Boundaries: explicit separators (`_`, `-`, whitespace), a lower->upper
/// case transition, and the end of an acronym run (upper, upper, lower).
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
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(char::is_lowercase)
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
