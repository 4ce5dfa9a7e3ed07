use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        school::insert_school,
        transaction::{Generated, TransactionExecutor},
        user::insert_school_admin,
    },
    error::{store::StoreMessages, AppError},
    model::{
        school::CreateSchoolParams,
        user::{RegisterUserParams, User},
    },
    service::user::new_user,
};

const REGISTER_SCHOOL_MESSAGES: StoreMessages = StoreMessages {
    conflict: "Email already registered",
    constraint: "Invalid school data",
};

pub struct SchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a school together with its admin user in one transaction
    ///
    /// The school insert produces the id the admin insert consumes. If the admin cannot
    /// be inserted, e.g. because the email is taken, the school is rolled back as well.
    ///
    /// # Arguments
    /// - `school` - Validated school fields
    /// - `admin` - Validated admin fields; any `school_id` in them is replaced
    ///
    /// # Returns
    /// - `Ok(User)` - The admin, belonging to the new school
    /// - `Err(AppError::Conflict)` - Admin email already registered
    pub async fn register(
        &self,
        school: CreateSchoolParams,
        admin: RegisterUserParams,
    ) -> Result<User, AppError> {
        let admin = new_user(admin).await?;
        let school_id = Generated::new();

        let ops = vec![
            insert_school(school, school_id.clone()),
            insert_school_admin(admin.clone(), school_id.clone()),
        ];

        TransactionExecutor::new(self.db)
            .execute(ops)
            .await
            .map_err(|err| AppError::from_store(err, &REGISTER_SCHOOL_MESSAGES))?;

        let mut registered = admin.to_user();
        registered.school_id = Some(school_id.get()?);

        tracing::info!(
            school_id = ?registered.school_id,
            admin_id = %registered.id,
            "Registered school"
        );

        Ok(registered)
    }
}
