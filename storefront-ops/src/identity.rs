use crate::error::{ShopError, ShopResult};
use std::collections::HashSet;
use storefront_cipher::decode_password;
use storefront_model::{Role, User, keys};
use storefront_storage::EntityStore;
use storefront_types::UserId;
use tracing::{debug, warn};

/// User name of the bootstrap administrator.
pub const BOOTSTRAP_ADMIN_NAME: &str = "admin";

/// Password of the bootstrap administrator.
pub const BOOTSTRAP_ADMIN_PASSWORD: &str = "admin123";

/// How many fresh ids are drawn before creation gives up.
pub const MAX_ID_ATTEMPTS: usize = 64;

/// Draws ids from `generate` until one is not in `taken`.
pub(crate) fn unique_id<I>(
    kind: &'static str,
    taken: &HashSet<String>,
    mut generate: impl FnMut() -> I,
) -> ShopResult<I>
where
    I: AsRef<str>,
{
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = generate();
        if !taken.contains(id.as_ref()) {
            return Ok(id);
        }
        debug!(kind, id = id.as_ref(), "generated id already taken, retrying");
    }
    Err(ShopError::Conflict(format!(
        "no free {kind} id after {MAX_ID_ATTEMPTS} attempts"
    )))
}

/// The account a successful login resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The stored `user_id`, empty if the line has none.
    pub user_id: String,
    pub name: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Id allocation, user-name lookup and login over the users file.
#[derive(Debug, Clone)]
pub struct IdentityOperations {
    users: EntityStore<User>,
}

impl IdentityOperations {
    pub fn new(users: EntityStore<User>) -> Self {
        Self { users }
    }

    /// A `u_` id not held by any line in the users file.
    pub fn generate_user_id(&self) -> ShopResult<UserId> {
        let taken = self.taken_ids()?;
        unique_id("user", &taken, UserId::generate)
    }

    /// Whether any user record, decodable or not, carries `name`.
    pub fn username_exists(&self, name: &str) -> ShopResult<bool> {
        Ok(self
            .users
            .lines()
            .find_first(|record| record.get_str(keys::user::NAME) == Some(name))?
            .is_some())
    }

    /// Finds the account with matching credentials.
    ///
    /// Works on the raw `user_name`, `user_password` and `user_role` fields,
    /// so a line whose other fields fail to decode can still log in. Stored
    /// passwords are decoded and compared with `password`. A stored password
    /// that does not decode is only accepted for the bootstrap admin account
    /// with the bootstrap password; every other account with a broken
    /// password is skipped.
    pub fn login(&self, username: &str, password: &str) -> ShopResult<Option<Session>> {
        if username.is_empty() {
            return Ok(None);
        }

        for line in self.users.lines().scan_all()? {
            let record = &line.record;
            let (Some(name), Some(stored)) = (
                record.get_str(keys::user::NAME),
                record.get_str(keys::user::PASSWORD),
            ) else {
                continue;
            };
            let accepted = match decode_password(stored) {
                Ok(plain) => name == username && plain == password,
                Err(e) => {
                    if is_legacy_admin(name, username) {
                        let ok = password == BOOTSTRAP_ADMIN_PASSWORD;
                        if ok {
                            warn!(line = line.line_no, "accepted bootstrap admin password for unencoded stored password");
                        }
                        ok
                    } else {
                        warn!(line = line.line_no, error = %e, "stored password does not decode, skipping");
                        false
                    }
                }
            };
            if !accepted {
                continue;
            }

            let Some(role) = Role::of_record(record) else {
                warn!(line = line.line_no, "credentials match a user line without a known role");
                continue;
            };
            let session = Session {
                user_id: record
                    .get(keys::user::ID)
                    .map(|v| v.to_plain_string())
                    .unwrap_or_default(),
                name: name.to_string(),
                role,
            };
            debug!(user_id = %session.user_id, "login accepted");
            return Ok(Some(session));
        }
        Ok(None)
    }

    fn taken_ids(&self) -> ShopResult<HashSet<String>> {
        Ok(self
            .users
            .lines()
            .scan_all()?
            .into_iter()
            .filter_map(|line| line.record.get(keys::user::ID).map(|v| v.to_plain_string()))
            .collect())
    }
}

fn is_legacy_admin(stored_name: &str, supplied_name: &str) -> bool {
    stored_name.eq_ignore_ascii_case(BOOTSTRAP_ADMIN_NAME) && supplied_name.eq_ignore_ascii_case(BOOTSTRAP_ADMIN_NAME)
}
