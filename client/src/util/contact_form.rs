//! Contact form fields and validation.
//!
//! Submission has no backend: a valid form shows the confirmation message
//! and clears itself.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you within two business days.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// A validated, trimmed submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    ///
    /// Returns the first [`ContactFormError`] in field order.
    pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        let company = Some(self.company.trim()).filter(|c| !c.is_empty()).map(str::to_owned);
        Ok(ContactSubmission { name: name.to_owned(), email: email.to_owned(), company, message: message.to_owned() })
    }

    /// Validate and, on success, clear every field.
    ///
    /// # Errors
    ///
    /// Returns [`ContactFormError`] and keeps the fields when invalid.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactFormError> {
        let submission = self.validate()?;
        *self = Self::default();
        Ok(submission)
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !host.starts_with('.') && !host.ends_with('.')
}
