use uuid::Uuid;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{form::RawForm, parse::ParseOutcome},
};

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub school_id: i32,
    pub teacher_id: Uuid,
    pub name: String,
}

impl Validator for CreateRoomParams {
    const KEY: &'static str = "room";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        Ok(Self {
            school_id: form.int("school_id", "Invalid school id")?,
            teacher_id: form.uuid("teacher_id", "Invalid teacher id")?,
            name: form.required("name", "Room name not provided")?,
        })
    }
}
