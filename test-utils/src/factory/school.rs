//! School factory for creating test school entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schools with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let school = SchoolFactory::new(&db).name("North High").build().await?;
/// ```
pub struct SchoolFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
    zip_code: String,
    street_address: String,
}

impl<'a> SchoolFactory<'a> {
    /// Creates a new SchoolFactory with default values.
    ///
    /// Defaults:
    /// - name: `"School {id}"` where id is auto-incremented
    /// - city: `"Springfield"`
    /// - zip_code: `"00-950"`
    /// - street_address: `"{id} Main Street"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("School {}", id),
            city: "Springfield".to_string(),
            zip_code: "00-950".to_string(),
            street_address: format!("{} Main Street", id),
        }
    }

    /// Sets the school name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Builds and inserts the school entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::school::Model)` - The created school entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::school::Model, DbErr> {
        entity::school::ActiveModel {
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            zip_code: ActiveValue::Set(self.zip_code),
            street_address: ActiveValue::Set(self.street_address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a school with default values.
pub async fn create_school(db: &DatabaseConnection) -> Result<entity::school::Model, DbErr> {
    SchoolFactory::new(db).build().await
}
