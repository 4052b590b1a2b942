//! The feedback draft and its submission payload.
//!
//! [`FeedbackRecord`] is the in-memory draft owned by the feedback page.
//! Mutation goes through explicit single-key operations (`set_field`,
//! `set_experience`, `set_rating`) so one update can never clobber an
//! unrelated field. Validation is deliberately absent here: the only
//! business rule is the submit-time precondition checked by
//! [`FeedbackRecord::required_fields_present`].
//!
//! [`FeedbackSubmission`] is the draft plus the identity attribution and
//! the server-timestamp placeholders, serialized as the immutable document
//! the directory stores.

use serde::{Deserialize, Serialize};

use crate::model::identity::Identity;
use crate::model::ServerStamp;

/// Self-reported years of experience. Wire values match the select options
/// shown on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "0-1")]
    UpToOneYear,
    #[serde(rename = "1-3")]
    OneToThreeYears,
    #[serde(rename = "3-5")]
    ThreeToFiveYears,
    #[serde(rename = "5+")]
    FivePlusYears,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::UpToOneYear,
        ExperienceLevel::OneToThreeYears,
        ExperienceLevel::ThreeToFiveYears,
        ExperienceLevel::FivePlusYears,
    ];

    /// Wire value, also used as the `<option>` value attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::UpToOneYear => "0-1",
            ExperienceLevel::OneToThreeYears => "1-3",
            ExperienceLevel::ThreeToFiveYears => "3-5",
            ExperienceLevel::FivePlusYears => "5+",
        }
    }

    /// Parses a select value; anything unrecognized (including the empty
    /// placeholder option) reads as unset.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }

    /// Option label shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::UpToOneYear => "0-1 YEARS (NEWBIE)",
            ExperienceLevel::OneToThreeYears => "1-3 YEARS (LEARNING)",
            ExperienceLevel::ThreeToFiveYears => "3-5 YEARS (EXPERIENCED)",
            ExperienceLevel::FivePlusYears => "5+ YEARS (EXPERT)",
        }
    }
}

/// The five rated aspects of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCategory {
    ContentQuality,
    SpeakerDelivery,
    TechnicalDepth,
    Engagement,
    OverallExperience,
}

/// Star ratings, one slot per category. 0 means "not yet rated"; the form
/// only ever writes 1 through 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub content_quality: u8,
    pub speaker_delivery: u8,
    pub technical_depth: u8,
    pub engagement: u8,
    pub overall_experience: u8,
}

impl Ratings {
    pub fn get(&self, category: RatingCategory) -> u8 {
        match category {
            RatingCategory::ContentQuality => self.content_quality,
            RatingCategory::SpeakerDelivery => self.speaker_delivery,
            RatingCategory::TechnicalDepth => self.technical_depth,
            RatingCategory::Engagement => self.engagement,
            RatingCategory::OverallExperience => self.overall_experience,
        }
    }

    fn slot(&mut self, category: RatingCategory) -> &mut u8 {
        match category {
            RatingCategory::ContentQuality => &mut self.content_quality,
            RatingCategory::SpeakerDelivery => &mut self.speaker_delivery,
            RatingCategory::TechnicalDepth => &mut self.technical_depth,
            RatingCategory::Engagement => &mut self.engagement,
            RatingCategory::OverallExperience => &mut self.overall_experience,
        }
    }
}

/// Scalar text fields addressable by [`FeedbackRecord::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
    Company,
    Role,
    EventVenue,
    EventDate,
    Questions,
    Improvements,
}

/// One feedback draft. Owned by a single page component per session; the
/// directory receives it by value inside a [`FeedbackSubmission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub experience_level: Option<ExperienceLevel>,
    pub event_venue: String,
    pub event_date: String,
    pub ratings: Ratings,
    pub questions: String,
    pub improvements: String,
}

impl FeedbackRecord {
    /// Replaces exactly one scalar field, leaving every other field
    /// untouched.
    pub fn set_field(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::Company => &mut self.company,
            TextField::Role => &mut self.role,
            TextField::EventVenue => &mut self.event_venue,
            TextField::EventDate => &mut self.event_date,
            TextField::Questions => &mut self.questions,
            TextField::Improvements => &mut self.improvements,
        };
        *slot = value;
    }

    pub fn set_experience(&mut self, level: Option<ExperienceLevel>) {
        self.experience_level = level;
    }

    /// Replaces one rating slot. Only 1..=5 is accepted; the unset marker 0
    /// is never written back through this operation.
    pub fn set_rating(&mut self, category: RatingCategory, stars: u8) {
        if (1..=5).contains(&stars) {
            *self.ratings.slot(category) = stars;
        }
    }

    /// Pre-fills contact fields from the signed-in identity. Absent
    /// attributes seed empty strings, never a rendered "null".
    pub fn seed_identity(&mut self, identity: &Identity) {
        self.name = identity.display_name.clone().unwrap_or_default();
        self.email = identity.email.clone().unwrap_or_default();
    }

    /// Submit-time precondition: name and email must be non-empty. Ratings
    /// carry no minimum; an all-zero record is a valid submission.
    pub fn required_fields_present(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// The immutable document written to the `feedback` collection: the draft
/// plus identity attribution and server-assigned timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[serde(flatten)]
    pub record: FeedbackRecord,
    pub user_id: String,
    pub user_display_name: Option<String>,
    #[serde(rename = "userPhotoURL")]
    pub user_photo_url: Option<String>,
    pub submitted_at: ServerStamp,
    pub created_at: ServerStamp,
}

impl FeedbackSubmission {
    pub fn new(record: FeedbackRecord, identity: &Identity) -> Self {
        Self {
            record,
            user_id: identity.uid.clone(),
            user_display_name: identity.display_name.clone(),
            user_photo_url: identity.photo_url.clone(),
            submitted_at: ServerStamp,
            created_at: ServerStamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SERVER_TIMESTAMP;
    use serde_json::json;

    fn identity(display_name: Option<&str>, email: Option<&str>) -> Identity {
        Identity {
            uid: "uid-1".to_string(),
            display_name: display_name.map(str::to_string),
            email: email.map(str::to_string),
            photo_url: Some("https://example.com/a.png".to_string()),
            email_verified: true,
        }
    }

    #[test]
    fn seeding_uses_empty_strings_for_absent_attributes() {
        let mut draft = FeedbackRecord::default();
        draft.seed_identity(&identity(None, None));
        assert_eq!(draft.name, "");
        assert_eq!(draft.email, "");
    }

    #[test]
    fn seeding_copies_known_identity_attributes() {
        let mut draft = FeedbackRecord::default();
        draft.seed_identity(&identity(Some("Ada Lovelace"), Some("ada@x.io")));
        assert_eq!(draft.name, "Ada Lovelace");
        assert_eq!(draft.email, "ada@x.io");
        assert_eq!(draft.ratings, Ratings::default());
    }

    #[test]
    fn set_rating_touches_only_the_named_category() {
        let mut draft = FeedbackRecord::default();
        draft.set_rating(RatingCategory::TechnicalDepth, 4);
        assert_eq!(draft.ratings.technical_depth, 4);
        for other in [
            RatingCategory::ContentQuality,
            RatingCategory::SpeakerDelivery,
            RatingCategory::Engagement,
            RatingCategory::OverallExperience,
        ] {
            assert_eq!(draft.ratings.get(other), 0);
        }
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        let mut draft = FeedbackRecord::default();
        draft.set_rating(RatingCategory::Engagement, 3);
        draft.set_rating(RatingCategory::Engagement, 0);
        draft.set_rating(RatingCategory::Engagement, 6);
        assert_eq!(draft.ratings.engagement, 3);
    }

    #[test]
    fn set_field_replaces_exactly_one_scalar() {
        let mut draft = FeedbackRecord::default();
        draft.seed_identity(&identity(Some("Ada Lovelace"), Some("ada@x.io")));
        draft.set_field(TextField::Company, "Analytical Engines Ltd".to_string());

        let mut expected = FeedbackRecord::default();
        expected.seed_identity(&identity(Some("Ada Lovelace"), Some("ada@x.io")));
        expected.company = "Analytical Engines Ltd".to_string();
        assert_eq!(draft, expected);
    }

    #[test]
    fn ratings_alone_do_not_satisfy_the_submit_precondition() {
        let mut draft = FeedbackRecord::default();
        draft.set_rating(RatingCategory::ContentQuality, 5);
        draft.set_rating(RatingCategory::OverallExperience, 4);
        draft.set_field(TextField::Email, "ada@x.io".to_string());
        assert!(!draft.required_fields_present());
    }

    #[test]
    fn unrated_records_are_still_submittable() {
        let mut draft = FeedbackRecord::default();
        draft.set_field(TextField::Name, "Ada Lovelace".to_string());
        draft.set_field(TextField::Email, "ada@x.io".to_string());
        assert!(draft.required_fields_present());
        assert_eq!(draft.ratings, Ratings::default());
    }

    #[test]
    fn submission_carries_attribution_and_timestamp_placeholders() {
        let mut draft = FeedbackRecord::default();
        draft.seed_identity(&identity(Some("Ada Lovelace"), Some("ada@x.io")));
        draft.set_experience(Some(ExperienceLevel::ThreeToFiveYears));
        draft.set_rating(RatingCategory::ContentQuality, 5);

        let value =
            serde_json::to_value(FeedbackSubmission::new(draft, &identity(Some("Ada Lovelace"), Some("ada@x.io"))))
                .unwrap();
        assert_eq!(value["userId"], json!("uid-1"));
        assert_eq!(value["userDisplayName"], json!("Ada Lovelace"));
        assert_eq!(value["userPhotoURL"], json!("https://example.com/a.png"));
        assert_eq!(value["submittedAt"], json!(SERVER_TIMESTAMP));
        assert_eq!(value["createdAt"], json!(SERVER_TIMESTAMP));
        assert_eq!(value["experienceLevel"], json!("3-5"));
        assert_eq!(value["ratings"]["contentQuality"], json!(5));
        assert_eq!(value["ratings"]["speakerDelivery"], json!(0));
    }

    #[test]
    fn experience_levels_round_trip_through_their_wire_values() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_value(level.as_str()), Some(level));
        }
        assert_eq!(ExperienceLevel::from_value(""), None);
        assert_eq!(ExperienceLevel::from_value("decades"), None);
    }
}
