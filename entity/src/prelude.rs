pub use super::absence::Entity as Absence;
pub use super::academic_timetable::Entity as AcademicTimetable;
pub use super::class::Entity as Class;
pub use super::class_group::Entity as ClassGroup;
pub use super::event_timetable::Entity as EventTimetable;
pub use super::grade::Entity as Grade;
pub use super::note::Entity as Note;
pub use super::parent_child::Entity as ParentChild;
pub use super::period::Entity as Period;
pub use super::regular_timetable::Entity as RegularTimetable;
pub use super::report::Entity as Report;
pub use super::room::Entity as Room;
pub use super::school::Entity as School;
pub use super::subject::Entity as Subject;
pub use super::substitute_timetable::Entity as SubstituteTimetable;
pub use super::timetable::Entity as Timetable;
pub use super::timetable_group::Entity as TimetableGroup;
pub use super::timetable_teacher::Entity as TimetableTeacher;
pub use super::users::Entity as Users;
pub use super::users_group::Entity as UsersGroup;
