use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{form::RawForm, parse::ParseOutcome},
};

/// School section of the school registration form.
#[derive(Debug, Clone)]
pub struct CreateSchoolParams {
    pub name: String,
    pub city: String,
    pub zip_code: String,
    pub street_address: String,
}

impl Validator for CreateSchoolParams {
    const KEY: &'static str = "school";
    type Output = Self;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Self> {
        Ok(Self {
            name: form.required("school_name", "School name not provided")?,
            city: form.required("city", "City not provided")?,
            zip_code: form.required("zip_code", "Zip code not provided")?,
            street_address: form.required("street_address", "Street address not provided")?,
        })
    }
}
