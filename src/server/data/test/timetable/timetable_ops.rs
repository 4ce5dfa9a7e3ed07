use super::*;

/// Tests that a substitute entry writes base, academic and subtype rows under one id.
///
/// Expected: Ok with three rows sharing the generated id
#[tokio::test]
async fn writes_substitute_rows_under_one_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let deps = factory::helpers::create_timetable_dependencies(db).await?;
    let date = NaiveDate::from_ymd_opt(2024, 10, 7).unwrap();

    let id = Generated::new();
    let params = CreateTimetableParams {
        school_id: deps.school.id,
        entry: TimetableEntry::Substitute {
            academic: slot(&deps),
            date,
        },
    };

    TransactionExecutor::new(db)
        .execute(timetable_ops(params, id.clone()))
        .await?;
    let id = id.get()?;

    let base = entity::prelude::Timetable::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(base.kind, "substitute");
    assert_eq!(base.school_id, deps.school.id);

    let academic = entity::prelude::AcademicTimetable::find_by_id(id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(academic.room_id, deps.room.id);

    let substitute = entity::prelude::SubstituteTimetable::find_by_id(id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(substitute.date, date);

    Ok(())
}

/// Tests that the weekday of a regular entry is stored as 1 (Monday) through 5.
///
/// Expected: Ok with weekday 3 stored for Wednesday
#[tokio::test]
async fn stores_regular_weekday_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let deps = factory::helpers::create_timetable_dependencies(db).await?;

    let id = Generated::new();
    let params = CreateTimetableParams {
        school_id: deps.school.id,
        entry: TimetableEntry::Regular {
            academic: slot(&deps),
            weekday: Weekday::Wed,
        },
    };

    TransactionExecutor::new(db)
        .execute(timetable_ops(params, id.clone()))
        .await?;

    let regular = entity::prelude::RegularTimetable::find_by_id(id.get()?)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(regular.weekday, 3);

    Ok(())
}

/// Tests that an event entry has no academic row.
///
/// Expected: Ok with base and event rows only
#[tokio::test]
async fn writes_event_without_academic_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::create_school(db).await?;

    let starts_at = Utc.with_ymd_and_hms(2024, 12, 20, 10, 0, 0).unwrap();
    let ends_at = Utc.with_ymd_and_hms(2024, 12, 20, 12, 0, 0).unwrap();

    let id = Generated::new();
    let params = CreateTimetableParams {
        school_id: school.id,
        entry: TimetableEntry::Event {
            name: "Winter concert".to_string(),
            description: None,
            starts_at,
            ends_at,
        },
    };

    let ops = timetable_ops(params, id.clone());
    assert_eq!(ops.len(), 2);

    TransactionExecutor::new(db).execute(ops).await?;
    let id = id.get()?;

    let event = entity::prelude::EventTimetable::find_by_id(id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(event.name, "Winter concert");
    assert_eq!(event.starts_at, starts_at);
    assert_eq!(entity::prelude::AcademicTimetable::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an unknown room rolls back the base row written before it.
///
/// Expected: Err classified as Constraint and no timetable rows
#[tokio::test]
async fn unknown_room_leaves_no_base_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let deps = factory::helpers::create_timetable_dependencies(db).await?;

    let params = CreateTimetableParams {
        school_id: deps.school.id,
        entry: TimetableEntry::Substitute {
            academic: AcademicSlot {
                room_id: deps.room.id + 1000,
                ..slot(&deps)
            },
            date: NaiveDate::from_ymd_opt(2024, 10, 7).unwrap(),
        },
    };

    let err = TransactionExecutor::new(db)
        .execute(timetable_ops(params, Generated::new()))
        .await
        .unwrap_err();

    assert_eq!(classify(&err), StoreErrorKind::Constraint);
    assert_eq!(entity::prelude::Timetable::find().count(db).await?, 0);
    assert_eq!(entity::prelude::SubstituteTimetable::find().count(db).await?, 0);

    Ok(())
}
