//! Single-row records and links.
//!
//! Each of these writes one row through the transactional executor and only differs in
//! the persistence operation and the messages reported for store rejections.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        absence::insert_absence,
        class::{insert_class, insert_group},
        grade::insert_grade,
        link::insert_link,
        note::insert_note,
        report::insert_report,
        room::insert_room,
        subject::insert_subject,
        transaction::{Generated, TransactionExecutor, TxOp},
    },
    error::{store::StoreMessages, AppError},
    model::{
        absence::CreateAbsenceParams,
        class::{CreateClassParams, CreateGroupParams},
        grade::CreateGradeParams,
        link::Link,
        note::CreateNoteParams,
        report::CreateReportParams,
        room::CreateRoomParams,
        subject::CreateSubjectParams,
    },
};

const RECORD_CONFLICT: &str = "Record already exists";

const ROOM_MESSAGES: StoreMessages = StoreMessages {
    conflict: RECORD_CONFLICT,
    constraint: "School or teacher does not exist",
};
const SUBJECT_MESSAGES: StoreMessages = StoreMessages {
    conflict: RECORD_CONFLICT,
    constraint: "School does not exist",
};
const CLASS_MESSAGES: StoreMessages = StoreMessages {
    conflict: RECORD_CONFLICT,
    constraint: "Class teacher does not exist",
};
const GROUP_MESSAGES: StoreMessages = StoreMessages {
    conflict: RECORD_CONFLICT,
    constraint: "Class does not exist",
};
const REPORT_MESSAGES: StoreMessages = StoreMessages {
    conflict: RECORD_CONFLICT,
    constraint: "Timetable entry or reporter does not exist",
};
const GRADE_MESSAGES: StoreMessages = StoreMessages {
    conflict: RECORD_CONFLICT,
    constraint: "Student or report does not exist",
};
const NOTE_MESSAGES: StoreMessages = StoreMessages {
    conflict: RECORD_CONFLICT,
    constraint: "Timetable entry does not exist",
};
const ABSENCE_MESSAGES: StoreMessages = StoreMessages {
    conflict: RECORD_CONFLICT,
    constraint: "User does not exist",
};
const LINK_MESSAGES: StoreMessages = StoreMessages {
    conflict: "Link already exists",
    constraint: "Linked record does not exist",
};

pub struct RecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_room(&self, params: CreateRoomParams) -> Result<i32, AppError> {
        self.create(|id| insert_room(params, id), &ROOM_MESSAGES)
            .await
    }

    pub async fn create_subject(&self, params: CreateSubjectParams) -> Result<i32, AppError> {
        self.create(|id| insert_subject(params, id), &SUBJECT_MESSAGES)
            .await
    }

    pub async fn create_class(&self, params: CreateClassParams) -> Result<i32, AppError> {
        self.create(|id| insert_class(params, id), &CLASS_MESSAGES)
            .await
    }

    pub async fn create_group(&self, params: CreateGroupParams) -> Result<i32, AppError> {
        self.create(|id| insert_group(params, id), &GROUP_MESSAGES)
            .await
    }

    /// Records a lesson report, timestamped now.
    pub async fn create_report(&self, params: CreateReportParams) -> Result<i32, AppError> {
        let reported_at = Utc::now();

        self.create(
            |id| insert_report(params, reported_at, id),
            &REPORT_MESSAGES,
        )
        .await
    }

    pub async fn create_grade(&self, params: CreateGradeParams) -> Result<i32, AppError> {
        self.create(|id| insert_grade(params, id), &GRADE_MESSAGES)
            .await
    }

    pub async fn create_note(&self, params: CreateNoteParams) -> Result<i32, AppError> {
        self.create(|id| insert_note(params, id), &NOTE_MESSAGES)
            .await
    }

    pub async fn create_absence(&self, params: CreateAbsenceParams) -> Result<i32, AppError> {
        self.create(|id| insert_absence(params, id), &ABSENCE_MESSAGES)
            .await
    }

    /// Links two existing records. Linking the same pair twice is a conflict.
    pub async fn link(&self, link: Link) -> Result<(), AppError> {
        TransactionExecutor::new(self.db)
            .execute(vec![insert_link(link)])
            .await
            .map_err(|err| AppError::from_store(err, &LINK_MESSAGES))
    }

    async fn create<F>(&self, build: F, messages: &StoreMessages) -> Result<i32, AppError>
    where
        F: FnOnce(Generated<i32>) -> TxOp,
    {
        let id = Generated::new();

        TransactionExecutor::new(self.db)
            .execute(vec![build(id.clone())])
            .await
            .map_err(|err| AppError::from_store(err, messages))?;

        Ok(id.get()?)
    }
}
