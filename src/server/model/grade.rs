use uuid::Uuid;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{
        form::RawForm,
        parse::{in_range, ParseOutcome},
    },
};

const VALUE_MESSAGE: &str = "Invalid grade value (can't be less than 1/more than 5)";
const WEIGHT_MESSAGE: &str = "Invalid grade weight (can't be less than 1/more than 10)";

#[derive(Debug, Clone)]
pub struct CreateGradeParams {
    pub student_id: Uuid,
    pub report_id: i32,
    pub value: i16,
    pub weight: i16,
}

impl Validator for CreateGradeParams {
    const KEY: &'static str = "grade";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        Ok(Self {
            student_id: form.uuid("student_id", "Invalid student id")?,
            report_id: form.int("report_id", "Invalid report id")?,
            value: in_range(form.int("value", VALUE_MESSAGE)?, 1, 5, VALUE_MESSAGE)?,
            weight: in_range(form.int("weight", WEIGHT_MESSAGE)?, 1, 10, WEIGHT_MESSAGE)?,
        })
    }
}
