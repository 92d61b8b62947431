use sea_orm::{entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NAME_MAX_LEN: usize = 64;
pub const EMAIL_MAX_LEN: usize = 64;
pub const ADDRESS_MAX_LEN: usize = 256;
pub const PHONE_MAX_LEN: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values written on insert and on full replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: Date,
}

fn require(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} longer than {max} characters")));
    }
    Ok(())
}

pub fn validate(fields: &Fields) -> Result<(), ModelError> {
    require("name", &fields.name, NAME_MAX_LEN)?;
    require("email", &fields.email, EMAIL_MAX_LEN)?;
    require("address", &fields.address, ADDRESS_MAX_LEN)?;
    if let Some(phone) = &fields.phone_number {
        if phone.chars().count() > PHONE_MAX_LEN {
            return Err(ModelError::Validation(format!("phone_number longer than {PHONE_MAX_LEN} characters")));
        }
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, fields: Fields) -> Result<Model, ModelError> {
    validate(&fields)?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(fields.name),
        email: Set(fields.email),
        address: Set(fields.address),
        phone_number: Set(fields.phone_number),
        date_joined: Set(fields.date_joined),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Replace every mutable column of an existing row; `id` is left untouched.
pub async fn update<C: ConnectionTrait>(db: &C, existing: Model, fields: Fields) -> Result<Model, ModelError> {
    validate(&fields)?;
    let mut am: ActiveModel = existing.into();
    am.name = Set(fields.name);
    am.email = Set(fields.email);
    am.address = Set(fields.address);
    am.phone_number = Set(fields.phone_number);
    am.date_joined = Set(fields.date_joined);
    am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Returns whether a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
