//! Input rules applied before anything reaches a repository.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{DomainError, DomainResult};
use crate::models::{PostInput, UserInput};

// Dot-separated atoms of RFC 5322 atext (plus any Unicode letter or digit)
// before the `@`; at least two dot-separated hostname labels after it.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*@[\p{L}\p{N}]([\p{L}\p{N}-]*[\p{L}\p{N}])?(\.[\p{L}\p{N}]([\p{L}\p{N}-]*[\p{L}\p{N}])?)+$",
    )
    .expect("email pattern is valid")
});

/// Types that can check their own fields.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

pub fn require_non_empty(field: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

impl Validate for UserInput {
    fn validate(&self) -> DomainResult<()> {
        require_non_empty("username", &self.username)?;
        require_non_empty("email", &self.email)?;
        if !is_valid_email(&self.email) {
            return Err(DomainError::validation("email must be a valid email address"));
        }
        Ok(())
    }
}

impl Validate for PostInput {
    fn validate(&self) -> DomainResult<()> {
        require_non_empty("title", &self.title)?;
        require_non_empty("content", &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: &str) -> UserInput {
        UserInput {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn accepts_ordinary_addresses() {
        for email in ["a@x.com", "first.last+tag@mail.example.org", "u_1@sub-domain.io"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "plain",
            "@x.com",
            "a@",
            "a@x",
            "a b@x.com",
            "a@@x.com",
            "a..b@x.com",
            ".a@x.com",
            "a.@x.com",
            "a@-x.com",
            "a@x..com",
            "a\"b@x.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn user_input_requires_both_fields() {
        assert_eq!(
            user("", "a@x.com").validate(),
            Err(DomainError::validation("username is required"))
        );
        assert_eq!(
            user("alice", "").validate(),
            Err(DomainError::validation("email is required"))
        );
        assert_eq!(
            user("alice", "nope").validate(),
            Err(DomainError::validation("email must be a valid email address"))
        );
        assert!(user("alice", "a@x.com").validate().is_ok());
        assert!(user("obrien", "o'brien@example.com").validate().is_ok());
        assert!(user("jürgen", "user@bücher.de").validate().is_ok());
    }

    #[test]
    fn post_input_requires_title_and_content() {
        let empty_title = PostInput {
            title: String::new(),
            content: "C".to_string(),
        };
        let empty_content = PostInput {
            title: "T".to_string(),
            content: String::new(),
        };

        assert_eq!(empty_title.validate(), Err(DomainError::validation("title is required")));
        assert_eq!(empty_content.validate(), Err(DomainError::validation("content is required")));
    }
}
