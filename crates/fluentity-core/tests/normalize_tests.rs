use fluentity_core::transform::naming::{pluralize, to_camel_case, to_pascal_case};

#[test]
fn test_snake_case_input() {
    assert_eq!(to_camel_case("chat_message"), "chatMessage");
    assert_eq!(to_pascal_case("chat_message"), "ChatMessage");
}

#[test]
fn test_kebab_case_input() {
    assert_eq!(to_camel_case("pet-store-api"), "petStoreApi");
    assert_eq!(to_pascal_case("pet-store-api"), "PetStoreApi");
}

#[test]
fn test_pascal_case_input_is_unchanged() {
    assert_eq!(to_camel_case("ChatMessage"), "ChatMessage");
    assert_eq!(to_pascal_case("ChatMessage"), "ChatMessage");
}

#[test]
fn test_camel_case_keeps_leading_capital() {
    // Only separators are collapsed; the first letter is never lowered.
    assert_eq!(to_camel_case("User"), "User");
    assert_eq!(to_camel_case("Blog_post"), "BlogPost");
}

#[test]
fn test_deterministic() {
    for input in ["user", "user_profile", "Media", "x-y-z"] {
        assert_eq!(to_pascal_case(input), to_pascal_case(input));
        assert_eq!(pluralize(input), pluralize(input));
    }
}

#[test]
fn test_pascal_case_idempotent() {
    for input in ["pets", "user_profile", "pet-store-api", "_a_b_", "Already_Pascal"] {
        let once = to_pascal_case(input);
        let twice = to_pascal_case(&once);
        assert_eq!(once, twice, "input: {input}");
    }
}

#[test]
fn test_pluralize_ignores_input_case() {
    assert_eq!(pluralize("Media"), "medias");
    assert_eq!(pluralize("MEDIA"), "medias");
    assert_eq!(pluralize("user_profile"), "user_profiles");
}
