use common::error::WriteError;
use common::model::feedback::{RatingCategory, TextField};
use common::model::identity::Identity;

pub enum Msg {
    AuthChanged(Option<Identity>),
    EditField(TextField, String),
    SelectExperience(String),
    SetRating(RatingCategory, u8),
    Submit,
    SubmitSucceeded,
    SubmitFailed(WriteError),
    LogOut,
    LoggedOut,
}
