use chrono::{NaiveDate, TimeZone, Utc, Weekday};

use crate::server::{
    data::timetable::timetable_ops,
    model::timetable::{AcademicSlot, CreateTimetableParams, TimetableEntry},
};

use super::*;

mod timetable_ops;

fn slot(deps: &factory::helpers::TimetableDependencies) -> AcademicSlot {
    AcademicSlot {
        period_id: deps.period.id,
        subject_id: deps.subject.id,
        room_id: deps.room.id,
    }
}
