use crate::error::{ShopError, ShopResult};
use crate::identity::{BOOTSTRAP_ADMIN_NAME, BOOTSTRAP_ADMIN_PASSWORD, IdentityOperations};
use storefront_cipher::encode_password;
use storefront_model::{Role, User, keys};
use storefront_storage::EntityStore;
use storefront_types::RecordTime;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AdminOperations {
    users: EntityStore<User>,
    identity: IdentityOperations,
}

impl AdminOperations {
    pub fn new(users: EntityStore<User>, identity: IdentityOperations) -> Self {
        Self { users, identity }
    }

    /// Whether any user line has the admin role.
    pub fn admin_exists(&self) -> ShopResult<bool> {
        Ok(self
            .users
            .lines()
            .find_first(|record| Role::of_record(record) == Some(Role::Admin))?
            .is_some())
    }

    /// Creates the bootstrap admin unless an admin already exists.
    /// Returns the new account, or `None` if nothing was written.
    pub fn register_admin(&self) -> ShopResult<Option<User>> {
        if self.admin_exists()? {
            info!("admin account already exists");
            return Ok(None);
        }

        let password = encode_password(BOOTSTRAP_ADMIN_PASSWORD)
            .ok_or_else(|| ShopError::validation(keys::user::PASSWORD, "empty password"))?;
        let admin = User::admin(
            self.identity.generate_user_id()?,
            BOOTSTRAP_ADMIN_NAME,
            password,
            RecordTime::now(),
        );
        self.users.insert(&admin)?;
        info!(user_id = %admin.id, "registered bootstrap admin");
        Ok(Some(admin))
    }
}
