//! Immutable view over a submitted `application/x-www-form-urlencoded` body.
//!
//! Each typed getter reads one field and either returns the converted value or a
//! `ParseError` carrying the caller's message. Missing fields, blank fields and
//! malformed values all fail closed.

use std::{collections::HashMap, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::server::util::parse::{ParseError, ParseOutcome};

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field name to submitted value.
#[derive(Debug, Clone, Default)]
pub struct RawForm {
    fields: HashMap<String, String>,
}

impl RawForm {
    /// Decodes a url-encoded body. Of a repeated field only the first value is kept.
    pub fn parse(body: &[u8]) -> Self {
        let mut fields = HashMap::new();

        for (key, value) in url::form_urlencoded::parse(body) {
            fields
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        Self { fields }
    }

    /// Submitted value of `field`, untouched.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Value of `field`, trimmed, or `None` when missing or blank.
    pub fn optional(&self, field: &str) -> Option<String> {
        self.get(field)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Non-blank text value.
    pub fn required(&self, field: &str, message: &'static str) -> ParseOutcome<String> {
        self.optional(field).ok_or_else(|| ParseError::new(message))
    }

    /// Non-empty value kept exactly as submitted, surrounding whitespace included.
    pub fn secret(&self, field: &str, message: &'static str) -> ParseOutcome<String> {
        self.get(field)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ParseError::new(message))
    }

    /// Value parsed with `FromStr`, e.g. an integer of any width.
    pub fn int<T>(&self, field: &str, message: &'static str) -> ParseOutcome<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.required(field, message)?
            .parse::<T>()
            .map_err(|err| ParseError::with_cause(err, message))
    }

    /// Integer value that may be left out. A present but malformed value still fails.
    pub fn optional_int<T>(&self, field: &str, message: &'static str) -> ParseOutcome<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.optional(field) {
            Some(_) => self.int(field, message).map(Some),
            None => Ok(None),
        }
    }

    pub fn uuid(&self, field: &str, message: &'static str) -> ParseOutcome<Uuid> {
        self.int::<Uuid>(field, message)
    }

    /// Wall-clock time as `HH:MM:SS` or `HH:MM`.
    pub fn time(&self, field: &str, message: &'static str) -> ParseOutcome<NaiveTime> {
        let value = self.required(field, message)?;

        let mut last_err = None;
        for format in TIME_FORMATS {
            match NaiveTime::parse_from_str(&value, format) {
                Ok(time) => return Ok(time),
                Err(err) => last_err = Some(err),
            }
        }

        Err(match last_err {
            Some(err) => ParseError::with_cause(err, message),
            None => ParseError::new(message),
        })
    }

    /// Calendar date as `YYYY-MM-DD`.
    pub fn date(&self, field: &str, message: &'static str) -> ParseOutcome<NaiveDate> {
        let value = self.required(field, message)?;

        NaiveDate::parse_from_str(&value, DATE_FORMAT)
            .map_err(|err| ParseError::with_cause(err, message))
    }

    /// Calendar date that may be left out. A present but malformed value still fails.
    pub fn optional_date(
        &self,
        field: &str,
        message: &'static str,
    ) -> ParseOutcome<Option<NaiveDate>> {
        match self.optional(field) {
            Some(_) => self.date(field, message).map(Some),
            None => Ok(None),
        }
    }

    /// RFC 3339 timestamp, normalised to UTC.
    pub fn datetime(&self, field: &str, message: &'static str) -> ParseOutcome<DateTime<Utc>> {
        let value = self.required(field, message)?;

        DateTime::parse_from_rfc3339(&value)
            .map(|datetime| datetime.with_timezone(&Utc))
            .map_err(|err| ParseError::with_cause(err, message))
    }

    /// Email address in `local@domain.tld` form, lowercased.
    pub fn email(&self, field: &str, message: &'static str) -> ParseOutcome<String> {
        let value = self.required(field, message)?;

        if !is_email(&value) {
            return Err(ParseError::new(message));
        }

        Ok(value.to_lowercase())
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
