// Form state for the game login and the contact page.
use crate::error::ValidationError;

/// Class options offered on the login card.
pub const CLASSES: [&str; 5] = ["Class 1", "Class 2", "Class 3", "Class 4", "Class 5"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub class: String,
}

impl LoginForm {
    /// Trimmed (name, class), or the first missing field.
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        let name = required(&self.name, "Name")?;
        let class = required(&self.class, "Class")?;
        Ok((name, class))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitting: bool,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        required(&self.subject, "Subject")?;
        required(&self.message, "Message")?;
        Ok(())
    }

    /// Start a submission. Fails if invalid; returns `Ok(false)` if one is already running.
    pub fn begin_submit(&mut self) -> Result<bool, ValidationError> {
        if self.submitting {
            return Ok(false);
        }
        self.validate()?;
        self.submitting = true;
        Ok(true)
    }

    /// Submission done: clear every field.
    pub fn finish_submit(&mut self) {
        *self = Self::default();
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let v = value.trim();
    if v.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            subject: "Licenses".into(),
            message: "Do you offer school pricing?".into(),
            submitting: false,
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let mut f = LoginForm { name: "  ".into(), class: "Class 2".into() };
        assert_eq!(f.validate(), Err(ValidationError::MissingField("Name")));
        f.name = " Ada ".into();
        f.class.clear();
        assert_eq!(f.validate(), Err(ValidationError::MissingField("Class")));
        f.class = "Class 2".into();
        assert_eq!(f.validate(), Ok(("Ada".into(), "Class 2".into())));
    }

    #[test]
    fn contact_reports_first_missing_field() {
        let mut f = filled();
        f.subject = "\n".into();
        assert_eq!(f.validate(), Err(ValidationError::MissingField("Subject")));
    }

    #[test]
    fn contact_rejects_email_without_at() {
        let mut f = filled();
        f.email = "ada.example.org".into();
        assert_eq!(f.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn submit_is_single_flight_and_clears_on_finish() {
        let mut f = filled();
        assert_eq!(f.begin_submit(), Ok(true));
        assert_eq!(f.begin_submit(), Ok(false));
        f.finish_submit();
        assert_eq!(f, ContactForm::default());
    }

    #[test]
    fn invalid_submit_does_not_start() {
        let mut f = ContactForm::default();
        assert!(f.begin_submit().is_err());
        assert!(!f.submitting);
    }

    #[test]
    fn set_updates_the_named_field() {
        let mut f = ContactForm::default();
        f.set(ContactField::Message, "hi".into());
        f.set(ContactField::Email, "a@b".into());
        assert_eq!(f.message, "hi");
        assert_eq!(f.email, "a@b");
    }
}
