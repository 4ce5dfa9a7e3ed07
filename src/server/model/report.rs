use uuid::Uuid;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{form::RawForm, parse::ParseOutcome},
};

/// A lesson report: what was covered in one timetable entry and by whom.
#[derive(Debug, Clone)]
pub struct CreateReportParams {
    pub timetable_id: i32,
    pub reported_by: Uuid,
    pub topic_covered: String,
}

impl Validator for CreateReportParams {
    const KEY: &'static str = "report";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        Ok(Self {
            timetable_id: form.int("timetable_id", "Invalid timetable id")?,
            reported_by: form.uuid("reported_by", "Invalid reporter id")?,
            topic_covered: form.required("topic_covered", "Topic not provided")?,
        })
    }
}
