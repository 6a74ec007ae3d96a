use crate::error::{ShopError, ShopResult};
use crate::identity::IdentityOperations;
use std::fmt;
use std::str::FromStr;
use storefront_cipher::encode_password;
use storefront_model::validation::{is_valid_email, is_valid_mobile, is_valid_password, is_valid_username};
use storefront_model::{Role, User, keys};
use storefront_storage::{EntityStore, Page};
use storefront_types::{RecordTime, UserId};
use tracing::info;

/// The customer fields that may be changed after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Password,
    Email,
    Mobile,
}

impl ProfileField {
    /// The on-disk key this field is stored under.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => keys::user::NAME,
            Self::Password => keys::user::PASSWORD,
            Self::Email => keys::user::EMAIL,
            Self::Mobile => keys::user::MOBILE,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileField {
    type Err = ShopError;

    /// Accepts the on-disk key (`user_email`) or its short form (`email`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = s.strip_prefix("user_").unwrap_or(s);
        match short {
            "name" => Ok(Self::Name),
            "password" => Ok(Self::Password),
            "email" => Ok(Self::Email),
            "mobile" => Ok(Self::Mobile),
            _ => Err(ShopError::validation("attribute", format!("{s:?} cannot be updated"))),
        }
    }
}

/// Registration and maintenance of customer accounts.
#[derive(Debug, Clone)]
pub struct CustomerOperations {
    users: EntityStore<User>,
    identity: IdentityOperations,
    page_size: usize,
}

impl CustomerOperations {
    pub fn new(users: EntityStore<User>, identity: IdentityOperations, page_size: usize) -> Self {
        Self {
            users,
            identity,
            page_size,
        }
    }

    /// Validates every field, checks the name is free, then appends the
    /// customer with an encoded password.
    pub fn register_customer(&self, name: &str, password: &str, email: &str, mobile: &str) -> ShopResult<User> {
        check_username(name)?;
        check_password(password)?;
        check_email(email)?;
        check_mobile(mobile)?;
        if self.identity.username_exists(name)? {
            return Err(ShopError::Conflict(format!("user name {name:?} is taken")));
        }

        let stored = encode(password)?;
        let customer = User::customer(
            self.identity.generate_user_id()?,
            name,
            stored,
            RecordTime::now(),
            email,
            mobile,
        );
        self.users.insert(&customer)?;
        info!(user_id = %customer.id, "registered customer");
        Ok(customer)
    }

    /// Changes one profile field of an existing customer. Other fields and
    /// other lines in the file are left as they are.
    pub fn update_profile(&self, customer_id: &UserId, field: ProfileField, value: &str) -> ShopResult<()> {
        let stored = match field {
            ProfileField::Name => {
                check_username(value)?;
                value.to_string()
            }
            ProfileField::Password => {
                check_password(value)?;
                encode(value)?
            }
            ProfileField::Email => {
                check_email(value)?;
                value.to_string()
            }
            ProfileField::Mobile => {
                check_mobile(value)?;
                value.to_string()
            }
        };

        let customer = self
            .find_customer(customer_id)?
            .ok_or_else(|| ShopError::not_found("customer", customer_id.as_str()))?;

        if field == ProfileField::Name && customer.name != value && self.identity.username_exists(value)? {
            return Err(ShopError::Conflict(format!("user name {value:?} is taken")));
        }

        if !self
            .users
            .update_field_by_id(customer_id.as_str(), field.key(), stored)?
        {
            return Err(ShopError::not_found("customer", customer_id.as_str()));
        }
        info!(user_id = %customer_id, field = field.key(), "updated customer profile");
        Ok(())
    }

    /// Removes a customer. Matches on the raw id and role fields, so a
    /// customer line that no longer decodes can still be removed. Admin
    /// accounts are never matched.
    pub fn delete_customer(&self, customer_id: &UserId) -> ShopResult<()> {
        let deleted = self.users.lines().delete_where(|record| {
            record.get_str(keys::user::ID) == Some(customer_id.as_str())
                && Role::of_record(record) == Some(Role::Customer)
        })?;
        if !deleted {
            return Err(ShopError::not_found("customer", customer_id.as_str()));
        }
        info!(user_id = %customer_id, "deleted customer");
        Ok(())
    }

    pub fn find_customer(&self, customer_id: &UserId) -> ShopResult<Option<User>> {
        Ok(self
            .users
            .find_first(|user| user.id == *customer_id && user.is_customer())?)
    }

    pub fn list_customers(&self, page: usize) -> ShopResult<Page<User>> {
        Ok(self
            .users
            .filter_page(User::is_customer, page, self.page_size)?)
    }

    /// Removes every customer and keeps every line whose role field says
    /// admin, whether or not the rest of it decodes. Returns how many
    /// accounts remain.
    pub fn delete_all_customers(&self) -> ShopResult<usize> {
        let kept = self
            .users
            .lines()
            .clear_except(|record| Role::of_record(record) == Some(Role::Admin))?;
        info!(kept, "deleted all customers");
        Ok(kept)
    }
}

fn encode(password: &str) -> ShopResult<String> {
    encode_password(password).ok_or_else(|| ShopError::validation(keys::user::PASSWORD, "password is empty"))
}

fn check_username(name: &str) -> ShopResult<()> {
    if is_valid_username(name) {
        Ok(())
    } else {
        Err(ShopError::validation(
            keys::user::NAME,
            "use at least 5 letters or underscores",
        ))
    }
}

fn check_password(password: &str) -> ShopResult<()> {
    if is_valid_password(password) {
        Ok(())
    } else {
        Err(ShopError::validation(
            keys::user::PASSWORD,
            "use at least 5 characters including a letter and a digit",
        ))
    }
}

fn check_email(email: &str) -> ShopResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ShopError::validation(keys::user::EMAIL, format!("{email:?} is not an email address")))
    }
}

fn check_mobile(mobile: &str) -> ShopResult<()> {
    if is_valid_mobile(mobile) {
        Ok(())
    } else {
        Err(ShopError::validation(
            keys::user::MOBILE,
            "use 10 digits starting with 04 or 03",
        ))
    }
}
