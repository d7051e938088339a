use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::messages;
use crate::error::{AppError, ValidationError};
use crate::state::Selection;

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const PHONE_MAX_CHARS: usize = 20;
pub const MESSAGE_MAX_CHARS: usize = 1000;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9+\-()\s]+$").expect("phone pattern is valid")
});

/// Raw field values as typed into the inquiry modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A validated inquiry together with what the visitor was looking at.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InquirySubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub house_id: Option<String>,
    pub image_id: Option<String>,
    pub selected_style: Option<String>,
}

/// What the modal does after one press of the submit button.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    /// Field values to show next; cleared only on success.
    pub next_form: InquiryForm,
    /// The one alert shown for this submit.
    pub notice: String,
    pub close: bool,
}

impl InquiryForm {
    /// Validates and logs the inquiry record. A rejected form keeps its values and the
    /// modal stays open.
    pub fn submit(&self, selection: &Selection) -> SubmitOutcome {
        match self.validate(selection) {
            Ok(submission) => {
                match serde_json::to_string(&submission) {
                    Ok(json) => log::info!("Inquiry submitted: {}", json),
                    Err(err) => log::info!("Inquiry submitted: {:?} ({})", submission, err),
                }
                SubmitOutcome {
                    next_form: InquiryForm::default(),
                    notice: messages::INQUIRY_RECEIVED.to_string(),
                    close: true,
                }
            }
            Err(err) => {
                let err = AppError::from(err);
                log::debug!("Inquiry rejected: {:?}", err);
                SubmitOutcome {
                    next_form: self.clone(),
                    notice: err.to_string(),
                    close: false,
                }
            }
        }
    }

    /// Checks name, email, phone and message in that order and stops at the first
    /// rule that fails. Values are trimmed first.
    pub fn validate(&self, selection: &Selection) -> Result<InquirySubmission, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let message = self.message.trim();

        if name.is_empty() || name.chars().count() > NAME_MAX_CHARS {
            return Err(ValidationError::Name);
        }
        if email.is_empty() || !EMAIL_RE.is_match(email) || email.chars().count() > EMAIL_MAX_CHARS {
            return Err(ValidationError::Email);
        }
        if !phone.is_empty() && (!PHONE_RE.is_match(phone) || phone.chars().count() > PHONE_MAX_CHARS) {
            return Err(ValidationError::Phone);
        }
        if message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(ValidationError::Message);
        }

        Ok(InquirySubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
            house_id: selection.property_id.clone(),
            image_id: selection.image_id.clone(),
            selected_style: selection.last_style.map(|style| style.key().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RenovationStyle;

    fn form(name: &str, email: &str) -> InquiryForm {
        InquiryForm {
            name: name.into(),
            email: email.into(),
            ..InquiryForm::default()
        }
    }

    #[test]
    fn minimal_form_is_accepted() {
        let submission = form("A", "a@b.co").validate(&Selection::default()).unwrap();
        assert_eq!(submission.name, "A");
        assert_eq!(submission.email, "a@b.co");
        assert_eq!(submission.phone, "");
        assert_eq!(submission.house_id, None);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["not-an-email", "a@b", "a b@c.d", "@b.co", ""] {
            assert_eq!(
                form("A", email).validate(&Selection::default()),
                Err(ValidationError::Email),
                "{email}"
            );
        }
    }

    #[test]
    fn overlong_email_is_rejected() {
        let email = format!("{}@b.co", "a".repeat(251));
        assert_eq!(email.chars().count(), 256);
        assert_eq!(form("A", &email).validate(&Selection::default()), Err(ValidationError::Email));
    }

    #[test]
    fn name_bounds() {
        assert_eq!(form("   ", "a@b.co").validate(&Selection::default()), Err(ValidationError::Name));
        let longest = "名".repeat(NAME_MAX_CHARS);
        assert!(form(&longest, "a@b.co").validate(&Selection::default()).is_ok());
        let too_long = "名".repeat(NAME_MAX_CHARS + 1);
        assert_eq!(form(&too_long, "a@b.co").validate(&Selection::default()), Err(ValidationError::Name));
    }

    #[test]
    fn name_is_checked_before_email() {
        assert_eq!(form("", "not-an-email").validate(&Selection::default()), Err(ValidationError::Name));
    }

    #[test]
    fn phone_is_optional_but_restricted() {
        let mut f = form("A", "a@b.co");
        f.phone = "+81 (03) 1234-5678".into();
        assert!(f.validate(&Selection::default()).is_ok());

        f.phone = "03-1234-abcd".into();
        assert_eq!(f.validate(&Selection::default()), Err(ValidationError::Phone));

        f.phone = "0".repeat(PHONE_MAX_CHARS + 1);
        assert_eq!(f.validate(&Selection::default()), Err(ValidationError::Phone));
    }

    #[test]
    fn message_length_is_limited() {
        let mut f = form("A", "a@b.co");
        f.message = "x".repeat(MESSAGE_MAX_CHARS);
        assert!(f.validate(&Selection::default()).is_ok());
        f.message.push('x');
        assert_eq!(f.validate(&Selection::default()), Err(ValidationError::Message));
    }

    #[test]
    fn submission_snapshots_the_selection() {
        let selection = Selection {
            property_id: Some("house1".into()),
            image_id: Some("demo-1700000000000".into()),
            image_url: Some("/static/demo-images/demo1.jpg".into()),
            last_style: Some(RenovationStyle::Scandinavian),
        };
        let mut f = form("  山田  ", " a@b.co ");
        f.message = " 見学希望 ".into();
        let submission = f.validate(&selection).unwrap();
        assert_eq!(submission.name, "山田");
        assert_eq!(submission.message, "見学希望");

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["houseId"], "house1");
        assert_eq!(json["imageId"], "demo-1700000000000");
        assert_eq!(json["selectedStyle"], "scandinavian");
    }

    #[test]
    fn accepted_submit_clears_the_form_and_closes() {
        let mut f = form("山田", "a@b.co");
        f.message = "見学希望".into();

        let outcome = f.submit(&Selection::default());

        assert_eq!(outcome.notice, messages::INQUIRY_RECEIVED);
        assert_eq!(outcome.next_form, InquiryForm::default());
        assert!(outcome.close);
    }

    #[test]
    fn rejected_submit_keeps_the_form_open() {
        let f = form("山田", "not-an-email");

        let outcome = f.submit(&Selection::default());

        assert_eq!(outcome.notice, ValidationError::Email.to_string());
        assert_ne!(outcome.notice, messages::INQUIRY_RECEIVED);
        assert_eq!(outcome.next_form, f);
        assert!(!outcome.close);
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::Email.to_string(), "メールアドレスを正しく入力してください");
    }
}
