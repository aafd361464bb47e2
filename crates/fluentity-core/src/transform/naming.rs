//! Case conversions shared by the translator, the dialogue, and the renderer.
//!
//! These follow the Fluentity file conventions rather than a general-purpose
//! case library: only a separator directly followed by an ASCII lowercase
//! letter is collapsed, and nothing else about the input changes.

/// Collapse every `-x` / `_x` (separator + ASCII lowercase letter) into `X`.
///
/// - `user_profile` → `userProfile`
/// - `pet-store-api` → `petStoreApi`
/// - `User` → `User`
/// - `a__b` → `a_B`
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if matches!(ch, '-' | '_')
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            result.push(next.to_ascii_uppercase());
            chars.next();
            continue;
        }
        result.push(ch);
    }

    result
}

/// `to_camel_case` followed by upper-casing the first character.
pub fn to_pascal_case(s: &str) -> String {
    capitalize(&to_camel_case(s))
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Naive pluralization: lower-case and append `s`. No irregular plurals.
pub fn pluralize(s: &str) -> String {
    format!("{}s", s.to_lowercase())
}

/// PascalCase model name from the last segment of a `$ref` pointer.
pub fn ref_model_name(ref_path: &str) -> String {
    let last = ref_path.rsplit('/').next().unwrap_or(ref_path);
    to_pascal_case(last)
}

/// Sibling property names that mark a reference to `model` as `BelongsTo`.
///
/// `User` → `["userId", "UserId"]`; the two coincide for models whose
/// camel-cased name has no leading capital.
pub fn foreign_key_candidates(model: &str) -> Vec<String> {
    let camel = to_camel_case(model);
    let conventional = format!("{}Id", decapitalize(&camel));
    let literal = format!("{camel}Id");
    if conventional == literal {
        vec![conventional]
    } else {
        vec![conventional, literal]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_separators() {
        assert_eq!(to_camel_case("user_profile"), "userProfile");
        assert_eq!(to_camel_case("pet-store-api"), "petStoreApi");
        assert_eq!(to_camel_case("mixed_sep-case"), "mixedSepCase");
    }

    #[test]
    fn test_camel_case_leaves_other_text() {
        assert_eq!(to_camel_case("User"), "User");
        assert_eq!(to_camel_case("user_Profile"), "user_Profile");
        assert_eq!(to_camel_case("user_1"), "user_1");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_camel_case_repeated_separators() {
        assert_eq!(to_camel_case("a__b"), "a_B");
        assert_eq!(to_camel_case("a--b"), "a-B");
        assert_eq!(to_camel_case("-_a"), "-A");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("_private"), "Private");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_pascal_case_idempotent() {
        for input in [
            "user",
            "User",
            "user_profile",
            "pet-store-api",
            "a__b",
            "-_a",
            "__x",
            "ß_data",
            "Media",
            "HTTP_status",
        ] {
            let once = to_pascal_case(input);
            assert_eq!(to_pascal_case(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("User"), "users");
        assert_eq!(pluralize("media"), "medias");
        assert_eq!(pluralize("Person"), "persons");
        assert_eq!(pluralize("User"), pluralize("user"));
    }

    #[test]
    fn test_ref_model_name() {
        assert_eq!(ref_model_name("#/components/schemas/Media"), "Media");
        assert_eq!(ref_model_name("#/components/schemas/user_profile"), "UserProfile");
        assert_eq!(ref_model_name("Thumbnail"), "Thumbnail");
        assert_eq!(ref_model_name("#/components/schemas/"), "");
    }

    #[test]
    fn test_foreign_key_candidates() {
        assert_eq!(foreign_key_candidates("User"), vec!["userId", "UserId"]);
        assert_eq!(
            foreign_key_candidates("BlogPost"),
            vec!["blogPostId", "BlogPostId"]
        );
        assert_eq!(foreign_key_candidates("user"), vec!["userId"]);
    }
}
