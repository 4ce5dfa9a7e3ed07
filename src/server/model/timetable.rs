//! Timetable aggregate and the validators of the three timetable routes.
//!
//! Every timetable entry is a base row tagged with its kind plus exactly one subtype
//! row. Regular and substitute entries additionally own an academic row naming the
//! period, subject and room of the lesson.

use chrono::{DateTime, NaiveDate, Utc, Weekday};

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{
        form::RawForm,
        parse::{ParseError, ParseOutcome},
    },
};

/// Discriminator stored on the base row. Written once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimetableKind {
    Regular,
    Substitute,
    Event,
}

impl TimetableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Substitute => "substitute",
            Self::Event => "event",
        }
    }
}

/// Lesson details shared by regular and substitute entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicSlot {
    pub period_id: i32,
    pub subject_id: i32,
    pub room_id: i32,
}

impl AcademicSlot {
    fn from_form(form: &RawForm) -> ParseOutcome<Self> {
        Ok(Self {
            period_id: form.int("period_id", "Invalid period id (not convertable to int)")?,
            subject_id: form.int("subject_id", "Invalid subject id (not convertable to int)")?,
            room_id: form.int("room_id", "Invalid room id (not convertable to int)")?,
        })
    }
}

/// Subtype fields of one timetable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableEntry {
    /// Weekly lesson held every `weekday`.
    Regular {
        academic: AcademicSlot,
        weekday: Weekday,
    },
    /// One-off lesson replacing the regular schedule on `date`.
    Substitute {
        academic: AcademicSlot,
        date: NaiveDate,
    },
    /// School event outside the lesson grid.
    Event {
        name: String,
        description: Option<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    },
}

impl TimetableEntry {
    pub fn kind(&self) -> TimetableKind {
        match self {
            Self::Regular { .. } => TimetableKind::Regular,
            Self::Substitute { .. } => TimetableKind::Substitute,
            Self::Event { .. } => TimetableKind::Event,
        }
    }

    pub fn academic(&self) -> Option<&AcademicSlot> {
        match self {
            Self::Regular { academic, .. } | Self::Substitute { academic, .. } => Some(academic),
            Self::Event { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTimetableParams {
    pub school_id: i32,
    pub entry: TimetableEntry,
}

/// Validator of `/regular_timetable`.
pub struct RegularTimetable;

impl Validator for RegularTimetable {
    const KEY: &'static str = "regular_timetable";
    type Output = CreateTimetableParams;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<CreateTimetableParams> {
        let school_id = form.int("school_id", "Invalid school id")?;
        let academic = AcademicSlot::from_form(form)?;

        let weekday = match form.int::<u8>("weekday", "Invalid weekday")? {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => return Err(ParseError::new("Invalid weekday")),
        };

        Ok(CreateTimetableParams {
            school_id,
            entry: TimetableEntry::Regular { academic, weekday },
        })
    }
}

/// Validator of `/substitute_timetable`.
pub struct SubstituteTimetable;

impl Validator for SubstituteTimetable {
    const KEY: &'static str = "substitute_timetable";
    type Output = CreateTimetableParams;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<CreateTimetableParams> {
        Ok(CreateTimetableParams {
            school_id: form.int("school_id", "Invalid school id")?,
            entry: TimetableEntry::Substitute {
                academic: AcademicSlot::from_form(form)?,
                date: form.date("date", "Invalid date")?,
            },
        })
    }
}

/// Validator of `/event_timetable`.
pub struct EventTimetable;

impl Validator for EventTimetable {
    const KEY: &'static str = "event_timetable";
    type Output = CreateTimetableParams;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<CreateTimetableParams> {
        let school_id = form.int("school_id", "Invalid school id")?;
        let name = form.required("name", "Name not provided")?;
        let starts_at = form.datetime("start", "Invalid start time")?;
        let ends_at = form.datetime("end", "Invalid end time")?;

        if ends_at < starts_at {
            return Err(ParseError::new("End can't be before start"));
        }

        Ok(CreateTimetableParams {
            school_id,
            entry: TimetableEntry::Event {
                name,
                description: form.optional("description"),
                starts_at,
                ends_at,
            },
        })
    }
}
