use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating project slugs
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "design-system", "proj123", "my-ui-kit"
    /// - Invalid: "-proj", "proj-", "proj--kit", "Proj", "proj_kit"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("design-system"));
        assert!(SLUG_REGEX.is_match("proj123"));
        assert!(SLUG_REGEX.is_match("my-ui-kit"));
        assert!(SLUG_REGEX.is_match("a"));
        assert!(SLUG_REGEX.is_match("a-b-c"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-proj")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("proj-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("proj--kit")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Proj")); // uppercase
        assert!(!SLUG_REGEX.is_match("proj_kit")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("proj kit")); // space
    }
}
