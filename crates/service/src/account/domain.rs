use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ServiceError;
use models::account::Fields;

/// Account as exposed to callers; `date_joined` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

impl From<models::account::Model> for Account {
    fn from(m: models::account::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            address: m.address,
            phone_number: m.phone_number,
            date_joined: m.date_joined,
        }
    }
}

/// Create / replace payload.
///
/// `phone_number` distinguishes an absent key (`None`) from an explicit
/// `null` (`Some(None)`). Unknown keys, including `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountInput {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default, deserialize_with = "present")]
    pub phone_number: Option<Option<String>>,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl AccountInput {
    /// Parse a request body. The body must be a JSON object carrying
    /// `name`, `email` and `address` as strings.
    pub fn parse(body: &[u8]) -> Result<Self, ServiceError> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| ServiceError::Validation(format!("Invalid Account: body of request contained bad or no data: {e}")))?;
        if !value.is_object() {
            return Err(ServiceError::Validation("Invalid Account: body of request must be a JSON object".into()));
        }
        serde_json::from_value(value).map_err(|e| ServiceError::Validation(format!("Invalid Account: {e}")))
    }

    /// Columns for a new row; a missing `date_joined` becomes `today`.
    pub fn into_new_fields(self, today: NaiveDate) -> Fields {
        Fields {
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number.flatten(),
            date_joined: self.date_joined.unwrap_or(today),
        }
    }

    /// Columns replacing `existing`; optional keys absent from the payload
    /// keep their stored values.
    pub fn merge_onto(self, existing: &Account) -> Fields {
        Fields {
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: match self.phone_number {
                Some(phone) => phone,
                None => existing.phone_number.clone(),
            },
            date_joined: self.date_joined.unwrap_or(existing.date_joined),
        }
    }
}
