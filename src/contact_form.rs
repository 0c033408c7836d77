//! Contact form state and the single request it sends.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// How long a success or error banner stays up before the form reverts.
pub const BANNER_DISPLAY_MS: u32 = 5_000;

pub const PROJECT_TYPES: [&str; 8] = [
    "IoT Development",
    "AI/ML Integration",
    "Quantum Computing",
    "Medical Devices",
    "Automotive Systems",
    "Telecommunications",
    "Custom Solutions",
    "Consultation",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Project,
    Message,
}

impl Field {
    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Message)
    }
}

/// Form contents, serialized as-is for the email endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Project => &self.project,
            Field::Message => &self.message,
        }
    }

    pub fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::Name => &mut next.name,
            Field::Email => &mut next.email,
            Field::Company => &mut next.company,
            Field::Project => &mut next.project,
            Field::Message => &mut next.message,
        };
        *slot = value;
        next
    }

    pub fn first_missing(&self) -> Option<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request to email endpoint failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("email endpoint answered with status {0}")]
    Status(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Success,
    Error,
}

impl SubmissionPhase {
    /// Starts a submission. Nothing is sent while a required field is blank.
    ///
    /// The current phase is not consulted: a second submit before the first
    /// settles sends a second request.
    pub fn begin(fields: &ContactFields) -> Result<SubmissionPhase, Field> {
        match fields.first_missing() {
            Some(field) => Err(field),
            None => Ok(SubmissionPhase::Submitting),
        }
    }

    /// Applies the request outcome. Only an in-flight submission settles.
    pub fn settle(self, outcome: &Result<(), SubmitError>) -> SubmissionPhase {
        match (self, outcome) {
            (SubmissionPhase::Submitting, Ok(())) => SubmissionPhase::Success,
            (SubmissionPhase::Submitting, Err(_)) => SubmissionPhase::Error,
            (phase, _) => phase,
        }
    }

    /// Delay and target phase for the banner auto-revert, if one applies.
    pub fn revert_schedule(self) -> Option<(u32, SubmissionPhase)> {
        match self {
            SubmissionPhase::Success | SubmissionPhase::Error => {
                Some((BANNER_DISPLAY_MS, SubmissionPhase::Editing))
            }
            _ => None,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmissionPhase::Submitting
    }

    /// Only a delivered message clears the form; errors keep input for a retry.
    pub fn clears_form(self) -> bool {
        self == SubmissionPhase::Success
    }

    pub fn banner(self) -> Option<Banner> {
        match self {
            SubmissionPhase::Success => Some(Banner::Success),
            SubmissionPhase::Error => Some(Banner::Error),
            _ => None,
        }
    }
}

/// Posts the form to the email endpoint. One attempt, no retry.
pub async fn deliver(fields: &ContactFields) -> Result<(), SubmitError> {
    let response = Request::post(&config::contact_url())
        .json(fields)?
        .send()
        .await?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            project: "Consultation".into(),
            message: "We need an engine.".into(),
        }
    }

    #[test]
    fn required_fields_block_submission() {
        let fields = filled().with(Field::Email, "   ".into());
        assert_eq!(SubmissionPhase::begin(&fields), Err(Field::Email));

        let fields = filled().with(Field::Name, String::new()).with(Field::Message, String::new());
        assert_eq!(SubmissionPhase::begin(&fields), Err(Field::Name));
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let fields = filled().with(Field::Project, String::new());
        assert!(!Field::Company.is_required());
        assert!(!Field::Project.is_required());
        assert_eq!(SubmissionPhase::begin(&fields), Ok(SubmissionPhase::Submitting));
    }

    #[test]
    fn success_clears_fields_and_shows_banner() {
        let phase = SubmissionPhase::begin(&filled()).unwrap();
        assert!(phase.is_submitting());
        assert_eq!(phase.banner(), None);

        let phase = phase.settle(&Ok(()));
        assert_eq!(phase.banner(), Some(Banner::Success));
        assert!(phase.clears_form());
    }

    #[test]
    fn failure_keeps_fields_and_shows_error() {
        let phase = SubmissionPhase::begin(&filled()).unwrap();
        let phase = phase.settle(&Err(SubmitError::Status(502)));
        assert_eq!(phase, SubmissionPhase::Error);
        assert_eq!(phase.banner(), Some(Banner::Error));
        assert!(!phase.clears_form());
    }

    #[test]
    fn only_submitting_settles() {
        for phase in [
            SubmissionPhase::Editing,
            SubmissionPhase::Success,
            SubmissionPhase::Error,
        ] {
            assert_eq!(phase.settle(&Ok(())), phase);
            assert_eq!(phase.settle(&Err(SubmitError::Status(500))), phase);
        }
    }

    #[test]
    fn banners_revert_to_editing_after_five_seconds() {
        for outcome in [Ok(()), Err(SubmitError::Status(503))] {
            let settled = SubmissionPhase::Submitting.settle(&outcome);
            assert_eq!(
                settled.revert_schedule(),
                Some((5_000, SubmissionPhase::Editing))
            );
        }
        assert_eq!(BANNER_DISPLAY_MS, 5_000);
    }

    #[test]
    fn no_revert_scheduled_without_a_banner() {
        assert_eq!(SubmissionPhase::Editing.revert_schedule(), None);
        assert_eq!(SubmissionPhase::Submitting.revert_schedule(), None);
    }

    #[test]
    fn second_submit_while_in_flight_is_not_deduplicated() {
        let fields = filled();
        let first = SubmissionPhase::begin(&fields).unwrap();
        assert!(first.is_submitting());
        assert_eq!(SubmissionPhase::begin(&fields), Ok(SubmissionPhase::Submitting));
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            SubmitError::Status(500).to_string(),
            "email endpoint answered with status 500"
        );
    }

    #[test]
    fn body_uses_wire_field_names() {
        let body = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "company": "",
                "project": "Consultation",
                "message": "We need an engine.",
            })
        );
    }
}
