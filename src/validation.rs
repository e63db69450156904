use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::{Arc, LazyLock},
};

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

pub type CustomCheck = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Constraints for a single form field.
///
/// Checks run in a fixed order (required, email, min length, max length,
/// pattern, custom) and the first failure is reported.
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub email: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub custom: Option<CustomCheck>,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("email", &self.email)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn pattern(mut self, re: Regex) -> Self {
        self.pattern = Some(re);
        self
    }

    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }

    /// Run the checks for `field` against `value`, returning the first error.
    pub fn check(&self, field: &str, value: &str) -> Option<String> {
        if self.required && value.trim().is_empty() {
            return Some(format!("{} is required", display_name(field)));
        }
        // the remaining checks only look at values the user actually entered
        if value.is_empty() {
            return None;
        }
        if self.email && !is_valid_email(value) {
            return Some("Please enter a valid email address".to_string());
        }
        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Some(format!(
                    "{} must be at least {min} characters",
                    display_name(field)
                ));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Some(format!(
                    "{} must not exceed {max} characters",
                    display_name(field)
                ));
            }
        }
        if let Some(re) = &self.pattern {
            if !re.is_match(value) {
                return Some(format!("{} format is invalid", display_name(field)));
            }
        }
        self.custom.as_ref().and_then(|check| check(value))
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn display_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Per-form validation state: the declared rules plus the last error and
/// touched flag of every field.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    rules: Vec<(String, ValidationRule)>,
    errors: HashMap<String, String>,
    touched: HashSet<String>,
}

impl FormValidator {
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, ValidationRule)>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(|(f, r)| (f.into(), r)).collect(),
            errors: HashMap::new(),
            touched: HashSet::new(),
        }
    }

    fn rule(&self, field: &str) -> Option<&ValidationRule> {
        self.rules.iter().find(|(f, _)| f == field).map(|(_, r)| r)
    }

    /// Validate one field and record the outcome.
    pub fn validate_field(&mut self, field: &str, value: &str) -> Option<String> {
        let err = self.rule(field).and_then(|r| r.check(field, value));
        match &err {
            Some(msg) => {
                self.errors.insert(field.to_string(), msg.clone());
            }
            None => {
                self.errors.remove(field);
            }
        }
        err
    }

    pub fn mark_touched(&mut self, field: &str) {
        self.touched.insert(field.to_string());
    }

    /// Validate every declared field, replacing all recorded errors.
    ///
    /// `value_of` returns `None` for fields the form did not submit; those
    /// are checked as empty strings.
    pub fn validate_all<'a, F>(&mut self, value_of: F) -> bool
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let errors = self
            .rules
            .iter()
            .filter_map(|(field, rule)| {
                let value = value_of(field).unwrap_or_default();
                rule.check(field, value).map(|msg| (field.clone(), msg))
            })
            .collect::<HashMap<_, _>>();
        let is_valid = errors.is_empty();
        self.errors = errors;
        is_valid
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.touched.clear();
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Raw error for `field`, regardless of whether it was touched.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.error_message(field).is_some()
    }

    /// Error for `field` as the user should see it: hidden until touched.
    pub fn error_message(&self, field: &str) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_validator() -> FormValidator {
        FormValidator::new([
            (
                "name",
                ValidationRule::new().required().min_length(2).max_length(50),
            ),
            ("email", ValidationRule::new().required().email()),
            (
                "message",
                ValidationRule::new().required().min_length(10).max_length(500),
            ),
        ])
    }

    #[test]
    fn test_required_wins_over_everything() {
        let rule = ValidationRule::new()
            .required()
            .email()
            .min_length(5)
            .pattern(Regex::new("^x+$").unwrap())
            .custom(|_| Some("custom".to_string()));

        assert_eq!(rule.check("email", ""), Some("Email is required".to_string()));
        assert_eq!(
            rule.check("email", "   \t"),
            Some("Email is required".to_string())
        );
    }

    #[test]
    fn test_precedence_order() {
        let rule = ValidationRule::new()
            .email()
            .min_length(20)
            .max_length(3)
            .pattern(Regex::new("^z").unwrap());

        // email format is checked before length
        assert_eq!(
            rule.check("email", "nope"),
            Some("Please enter a valid email address".to_string())
        );
        // then min length
        assert_eq!(
            rule.check("email", "a@b.co"),
            Some("Email must be at least 20 characters".to_string())
        );

        let rule = ValidationRule::new().max_length(3).pattern(Regex::new("^z").unwrap());
        assert_eq!(
            rule.check("code", "abcd"),
            Some("Code must not exceed 3 characters".to_string())
        );
        assert_eq!(
            rule.check("code", "abc"),
            Some("Code format is invalid".to_string())
        );
        assert_eq!(rule.check("code", "zz"), None);
    }

    #[test]
    fn test_optional_empty_skips_checks() {
        let rule = ValidationRule::new().email().min_length(3);
        assert_eq!(rule.check("email", ""), None);
    }

    #[test]
    fn test_custom_check_runs_last() {
        let rule = ValidationRule::new()
            .min_length(2)
            .custom(|v| (v == "admin").then(|| "Name is reserved".to_string()));
        assert_eq!(
            rule.check("name", "a"),
            Some("Name must be at least 2 characters".to_string())
        );
        assert_eq!(rule.check("name", "admin"), Some("Name is reserved".to_string()));
        assert_eq!(rule.check("name", "hans"), None);
    }

    #[test]
    fn test_email_format() {
        for good in ["a@b.co", "first.last@example.com", "x@sub.domain.io"] {
            assert!(is_valid_email(good), "{good} should be valid");
        }
        for bad in [
            "foo",
            "foo@bar",
            "@bar.com",
            "foo@.com",
            "foo@bar.",
            "a@b@c.com",
            "with space@bar.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_lengths_count_chars() {
        let rule = ValidationRule::new().max_length(3);
        assert_eq!(rule.check("name", "äöü"), None);
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut v = contact_validator();

        assert_eq!(
            v.validate_field("name", ""),
            Some("Name is required".to_string())
        );
        assert_eq!(v.error("name"), Some("Name is required"));
        assert!(!v.has_error("name"));
        assert_eq!(v.error_message("name"), None);

        v.mark_touched("name");
        assert!(v.has_error("name"));
        assert_eq!(v.error_message("name"), Some("Name is required"));

        // correcting the value clears the error
        assert_eq!(v.validate_field("name", "Hans"), None);
        assert!(!v.has_error("name"));
    }

    #[test]
    fn test_unknown_field_is_valid() {
        let mut v = contact_validator();
        assert_eq!(v.validate_field("phone", ""), None);
    }

    #[test]
    fn test_validate_all() {
        let mut v = contact_validator();
        let values = HashMap::from([
            ("name", "Hans"),
            ("email", "foo"),
            ("message", "Hello there, long enough"),
        ]);

        assert!(!v.validate_all(|f| values.get(f).copied()));
        assert_eq!(v.error("email"), Some("Please enter a valid email address"));
        assert_eq!(v.error("name"), None);
        assert_eq!(v.error("message"), None);

        let values = HashMap::from([
            ("name", "Hans"),
            ("email", "hans@example.com"),
            ("message", "Hello there, long enough"),
        ]);
        assert!(v.validate_all(|f| values.get(f).copied()));
        assert_eq!(v.error("email"), None);
    }

    #[test]
    fn test_validate_all_missing_field_is_empty() {
        let mut v = contact_validator();
        let values = HashMap::from([("name", "Hans"), ("email", "hans@example.com")]);
        assert!(!v.validate_all(|f| values.get(f).copied()));
        assert_eq!(v.error("message"), Some("Message is required"));
    }

    #[test]
    fn test_clear_resets_errors_and_touched() {
        let mut v = contact_validator();
        v.validate_field("name", "");
        v.mark_touched("name");
        v.clear();
        assert!(!v.is_touched("name"));
        assert_eq!(v.error("name"), None);
    }
}
