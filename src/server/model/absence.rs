use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{
        form::RawForm,
        parse::{ParseError, ParseOutcome},
    },
};

#[derive(Debug, Clone)]
pub struct CreateAbsenceParams {
    pub user_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Validator for CreateAbsenceParams {
    const KEY: &'static str = "absence";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        let user_id = form.uuid("user_id", "Invalid user id")?;
        let starts_at = form.datetime("start", "Invalid start time")?;
        let ends_at = form.datetime("end", "Invalid end time")?;

        if ends_at < starts_at {
            return Err(ParseError::new("End can't be before start"));
        }

        Ok(Self {
            user_id,
            starts_at,
            ends_at,
        })
    }
}
