//! School data repository and persistence operations.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    data::transaction::{Generated, TxOp},
    model::school::CreateSchoolParams,
};

/// Repository providing database operations for schools.
pub struct SchoolRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SchoolRepository<'a, C> {
    /// Creates a new SchoolRepository instance
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run statements on
    ///
    /// # Returns
    /// - `SchoolRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a school
    ///
    /// # Arguments
    /// - `params` - Validated school fields
    ///
    /// # Returns
    /// - `Ok(entity::school::Model)` - The inserted row including its generated id
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateSchoolParams) -> Result<entity::school::Model, DbErr> {
        entity::school::ActiveModel {
            name: ActiveValue::Set(params.name),
            city: ActiveValue::Set(params.city),
            zip_code: ActiveValue::Set(params.zip_code),
            street_address: ActiveValue::Set(params.street_address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a school and records its generated id in `school_id`.
pub fn insert_school(params: CreateSchoolParams, school_id: Generated<i32>) -> TxOp {
    TxOp::new("insert school", move |txn| {
        Box::pin(async move {
            let school = SchoolRepository::new(txn).create(params).await?;
            school_id.set(school.id)
        })
    })
}
