use std::str::FromStr;

use chrono::NaiveDate;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{
        form::RawForm,
        parse::{ParseError, ParseOutcome},
    },
};

/// What a note attached to a lesson announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Homework,
    Test,
}

impl NoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Homework => "homework",
            Self::Test => "test",
        }
    }
}

impl FromStr for NoteKind {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "homework" => Ok(Self::Homework),
            "test" => Ok(Self::Test),
            _ => Err(ParseError::new(
                "Invalid note type (must be homework or test)",
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNoteParams {
    pub timetable_id: i32,
    pub kind: NoteKind,
    pub content: String,
    /// Due date of the homework or date of the test.
    pub date: Option<NaiveDate>,
}

impl Validator for CreateNoteParams {
    const KEY: &'static str = "note";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        Ok(Self {
            timetable_id: form.int("timetable_id", "Invalid timetable id")?,
            kind: form
                .required("type", "Invalid note type (must be homework or test)")?
                .parse()?,
            content: form.required("content", "Note content not provided")?,
            date: form.optional_date("date", "Invalid date")?,
        })
    }
}
