use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{form::RawForm, parse::ParseOutcome},
};

#[derive(Debug, Clone)]
pub struct CreateSubjectParams {
    pub school_id: i32,
    pub name: String,
    pub mandatory: bool,
}

impl Validator for CreateSubjectParams {
    const KEY: &'static str = "subject";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        Ok(Self {
            school_id: form.int("school_id", "Invalid school id")?,
            name: form.required("name", "Subject name not provided")?,
            // Subjects are mandatory unless explicitly marked otherwise
            mandatory: form.optional("mandatory").as_deref() != Some("false"),
        })
    }
}
