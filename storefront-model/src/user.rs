use crate::codec::{FieldCodec, optional_text, parsed, text};
use crate::error::{ModelError, ModelResult};
use crate::record::Record;
use crate::schema::{CUSTOMER_SCHEMA, RecordSchema, USER_SCHEMA, keys};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use storefront_types::{RecordTime, UserId};

/// Account role stored in `user_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }

    /// Reads `user_role` straight from a record, without decoding the rest
    /// of the user. `None` when the key is absent or holds no known role.
    pub fn of_record(record: &Record) -> Option<Self> {
        record.get_str(keys::user::ROLE)?.parse().ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Case-insensitive, matching how existing files spell roles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("admin") {
            Ok(Self::Admin)
        } else if s.eq_ignore_ascii_case("customer") {
            Ok(Self::Customer)
        } else {
            Err(format!("unknown role {s:?}"))
        }
    }
}

/// A user account as stored in the users file.
///
/// `password` is the stored form: normally the `^^...$$` encoding, but
/// legacy files may hold other values, so it is kept as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub password: String,
    pub register_time: RecordTime,
    pub role: Role,
    /// Present (and required) for customers.
    pub email: Option<String>,
    /// Present (and required) for customers.
    pub mobile: Option<String>,
}

impl User {
    pub fn admin(id: UserId, name: impl Into<String>, password: impl Into<String>, register_time: RecordTime) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
            register_time,
            role: Role::Admin,
            email: None,
            mobile: None,
        }
    }

    pub fn customer(
        id: UserId,
        name: impl Into<String>,
        password: impl Into<String>,
        register_time: RecordTime,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
            register_time,
            role: Role::Customer,
            email: Some(email.into()),
            mobile: Some(mobile.into()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}

impl FieldCodec for User {
    const SCHEMA: &'static RecordSchema = &USER_SCHEMA;

    fn to_record(&self) -> Record {
        let mut record = Record::new()
            .with(keys::user::ID, self.id.as_str())
            .with(keys::user::NAME, self.name.as_str())
            .with(keys::user::PASSWORD, self.password.as_str())
            .with(keys::user::REGISTER_TIME, self.register_time.to_string())
            .with(keys::user::ROLE, self.role.as_str());
        if let Some(email) = &self.email {
            record.set(keys::user::EMAIL, email.as_str());
        }
        if let Some(mobile) = &self.mobile {
            record.set(keys::user::MOBILE, mobile.as_str());
        }
        record
    }

    fn from_record(record: &Record) -> ModelResult<Self> {
        USER_SCHEMA.check(record)?;
        let role: Role = parsed(record, keys::user::ROLE)?;
        if role == Role::Customer {
            CUSTOMER_SCHEMA.check(record)?;
        }

        let id = UserId::parse(&text(record, keys::user::ID)?).map_err(|e| ModelError::InvalidField {
            key: keys::user::ID,
            reason: e.to_string(),
        })?;

        Ok(Self {
            id,
            name: text(record, keys::user::NAME)?,
            password: text(record, keys::user::PASSWORD)?,
            register_time: parsed(record, keys::user::REGISTER_TIME)?,
            role,
            email: optional_text(record, keys::user::EMAIL)?,
            mobile: optional_text(record, keys::user::MOBILE)?,
        })
    }

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}
