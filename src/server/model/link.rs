//! Many-to-many links between existing records.
//!
//! Each link route has its own parameter type so its validator reads the right fields,
//! but all of them convert into one `Link` value for persistence.

use uuid::Uuid;

use crate::server::{
    middleware::{context::RequestContext, validate::Validator},
    util::{form::RawForm, parse::ParseOutcome},
};

/// A row of one of the link tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    ParentChild { parent_id: Uuid, child_id: Uuid },
    UsersGroup { user_id: Uuid, group_id: i32 },
    TimetableGroup { timetable_id: i32, group_id: i32 },
    TimetableTeacher { timetable_id: i32, teacher_id: Uuid },
}

#[derive(Debug, Clone, Copy)]
pub struct ParentChildParams;

impl Validator for ParentChildParams {
    const KEY: &'static str = "parent_child";
    type Output = Link;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Link> {
        Ok(Link::ParentChild {
            parent_id: form.uuid("parent_id", "Invalid parent id")?,
            child_id: form.uuid("child_id", "Invalid child id")?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UsersGroupParams;

impl Validator for UsersGroupParams {
    const KEY: &'static str = "users_group";
    type Output = Link;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Link> {
        Ok(Link::UsersGroup {
            user_id: form.uuid("user_id", "Invalid user id")?,
            group_id: form.int("group_id", "Invalid group id")?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimetableGroupParams;

impl Validator for TimetableGroupParams {
    const KEY: &'static str = "timetable_group";
    type Output = Link;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Link> {
        Ok(Link::TimetableGroup {
            timetable_id: form.int("timetable_id", "Invalid timetable id")?,
            group_id: form.int("group_id", "Invalid group id")?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimetableTeacherParams;

impl Validator for TimetableTeacherParams {
    const KEY: &'static str = "timetable_teacher";
    type Output = Link;

    fn validate(form: &RawForm, _ctx: &RequestContext) -> ParseOutcome<Link> {
        Ok(Link::TimetableTeacher {
            timetable_id: form.int("timetable_id", "Invalid timetable id")?,
            teacher_id: form.uuid("teacher_id", "Invalid teacher id")?,
        })
    }
}
