//! Contact Form
//!
//! Validates the contact form and turns it into a `mailto:` link. No mail is
//! sent from here; the browser hands the link to the platform mail client.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Same set `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("\"{0}\" is not a valid email address.")]
    InvalidEmail(String),
}

/// What the visitor typed into the contact form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Trim every field and check it is sendable
    pub fn validate(&self) -> Result<ContactForm, ContactError> {
        let form = ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if form.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if form.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !is_plausible_email(&form.email) {
            return Err(ContactError::InvalidEmail(form.email));
        }
        if form.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(form)
    }
}

/// One `@`, something before it, a dotted domain after it, no whitespace
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// `mailto:` link addressed to `to`, carrying the form as subject and body
pub fn mailto_href(to: &str, form: &ContactForm) -> String {
    let subject = encode_component(&format!("Portfolio contact from {}", form.name));
    let body = encode_component(&format!(
        "From: {} ({})\n\n{}",
        form.name, form.email, form.message
    ));
    format!("mailto:{}?subject={}&body={}", to, subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_mailto_encodes_like_encode_uri_component() {
        let form = make_form("Ana", "ana@example.com", "Hi & bye!\nThanks (really)");
        let href = mailto_href("me@example.com", &form);
        assert_eq!(
            href,
            "mailto:me@example.com?subject=Portfolio%20contact%20from%20Ana\
             &body=From%3A%20Ana%20(ana%40example.com)%0A%0AHi%20%26%20bye!%0AThanks%20(really)"
        );
    }

    #[test]
    fn test_mailto_encodes_non_ascii() {
        let form = make_form("Zoë", "z@example.com", "ok");
        let href = mailto_href("me@example.com", &form);
        assert!(href.contains("subject=Portfolio%20contact%20from%20Zo%C3%AB"));
    }

    #[test]
    fn test_validate_trims_fields() {
        let form = make_form("  Ana ", " ana@example.com ", "\n hello \n").validate().unwrap();
        assert_eq!(form, make_form("Ana", "ana@example.com", "hello"));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            make_form(" ", "a@b.io", "hi").validate(),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            make_form("A", "", "hi").validate(),
            Err(ContactError::MissingField("email"))
        );
        assert_eq!(
            make_form("A", "a@b.io", "   ").validate(),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["plain", "@example.com", "a@b", "a@@b.io", "a b@c.io", "a@.io", "a@io."] {
            let result = make_form("A", email, "hi").validate();
            assert!(
                matches!(result, Err(ContactError::InvalidEmail(_))),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ContactError::MissingField("name").to_string(), "Please fill in your name.");
        assert_eq!(
            ContactError::InvalidEmail("x".to_string()).to_string(),
            "\"x\" is not a valid email address."
        );
    }
}
