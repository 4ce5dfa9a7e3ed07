pub mod prelude;

pub mod absence;
pub mod academic_timetable;
pub mod class;
pub mod class_group;
pub mod event_timetable;
pub mod grade;
pub mod note;
pub mod parent_child;
pub mod period;
pub mod regular_timetable;
pub mod report;
pub mod room;
pub mod school;
pub mod subject;
pub mod substitute_timetable;
pub mod timetable;
pub mod timetable_group;
pub mod timetable_teacher;
pub mod users;
pub mod users_group;
