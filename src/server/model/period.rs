//! Period parameters.
//!
//! A period is a school's recurring lesson slot, e.g. 08:00-08:45. The school comes from
//! the caller's claims, so the validator only runs behind the authentication middleware.

use chrono::NaiveTime;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{
        form::RawForm,
        parse::{ParseError, ParseOutcome},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePeriodParams {
    pub school_id: i32,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Validator for CreatePeriodParams {
    const KEY: &'static str = "period";
    type Output = Self;

    fn validate(form: &RawForm, ctx: &RequestContext) -> ParseOutcome<Self> {
        let school_id = ctx
            .claims()
            .and_then(|claims| claims.school_id)
            .ok_or_else(|| ParseError::new("User doesn't belong to a school"))?;

        let start = form.time("start", "Invalid start time")?;
        let end = form.time("end", "Invalid end time")?;

        if end < start {
            return Err(ParseError::new("End can't be before start"));
        }

        Ok(Self {
            school_id,
            start,
            end,
        })
    }
}
