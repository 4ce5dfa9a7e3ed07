//! Class and class group parameters.

use uuid::Uuid;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{
        form::RawForm,
        parse::{in_range, ParseOutcome},
    },
};

#[derive(Debug, Clone)]
pub struct CreateClassParams {
    pub name: String,
    /// School year, 1 through 9.
    pub year: i16,
    pub class_teacher_id: Uuid,
}

impl Validator for CreateClassParams {
    const KEY: &'static str = "class";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        const YEAR_MESSAGE: &str = "Invalid class year (can't be less than 1/more than 9)";

        Ok(Self {
            name: form.required("name", "Class name not provided")?,
            year: in_range(form.int("year", YEAR_MESSAGE)?, 1, 9, YEAR_MESSAGE)?,
            class_teacher_id: form.uuid("class_teacher_id", "Invalid class teacher id")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub class_id: i32,
    pub name: String,
}

impl Validator for CreateGroupParams {
    const KEY: &'static str = "group";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        Ok(Self {
            class_id: form.int("class_id", "Invalid class id")?,
            name: form.required("name", "Group name not provided")?,
        })
    }
}
