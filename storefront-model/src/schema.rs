use crate::error::{ModelError, ModelResult};
use crate::record::Record;

/// On-disk key names, in the order codecs write them.
pub mod keys {
    pub mod user {
        pub const ID: &str = "user_id";
        pub const NAME: &str = "user_name";
        pub const PASSWORD: &str = "user_password";
        pub const REGISTER_TIME: &str = "user_register_time";
        pub const ROLE: &str = "user_role";
        pub const EMAIL: &str = "user_email";
        pub const MOBILE: &str = "user_mobile";
    }

    pub mod product {
        pub const ID: &str = "pro_id";
        pub const MODEL: &str = "pro_model";
        pub const CATEGORY: &str = "pro_category";
        pub const NAME: &str = "pro_name";
        pub const CURRENT_PRICE: &str = "pro_current_price";
        pub const RAW_PRICE: &str = "pro_raw_price";
        pub const DISCOUNT: &str = "pro_discount";
        pub const LIKES_COUNT: &str = "pro_likes_count";
    }

    pub mod order {
        pub const ID: &str = "order_id";
        pub const USER_ID: &str = "user_id";
        pub const PRODUCT_ID: &str = "pro_id";
        pub const TIME: &str = "order_time";
    }
}

/// The required-key table of one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    /// Entity name used in diagnostics.
    pub entity: &'static str,
    /// Key holding the record's unique identifier.
    pub id_key: &'static str,
    /// Keys every record of this type must carry, in write order.
    pub required: &'static [&'static str],
}

impl RecordSchema {
    /// Required keys absent from `record`.
    pub fn missing_keys(&self, record: &Record) -> Vec<&'static str> {
        self.required
            .iter()
            .copied()
            .filter(|key| !record.contains_key(key))
            .collect()
    }

    /// Fails on the first required key absent from `record`.
    pub fn check(&self, record: &Record) -> ModelResult<()> {
        match self.missing_keys(record).first().copied() {
            Some(key) => Err(ModelError::MissingField {
                entity: self.entity,
                key,
            }),
            None => Ok(()),
        }
    }

    /// Returns true if `key` is one of this schema's required keys.
    pub fn is_required(&self, key: &str) -> bool {
        self.required.contains(&key)
    }
}

/// Keys shared by every user record (admins and customers).
pub const USER_SCHEMA: RecordSchema = RecordSchema {
    entity: "user",
    id_key: keys::user::ID,
    required: &[
        keys::user::ID,
        keys::user::NAME,
        keys::user::PASSWORD,
        keys::user::REGISTER_TIME,
        keys::user::ROLE,
    ],
};

/// User keys plus the contact fields customers must carry.
pub const CUSTOMER_SCHEMA: RecordSchema = RecordSchema {
    entity: "customer",
    id_key: keys::user::ID,
    required: &[
        keys::user::ID,
        keys::user::NAME,
        keys::user::PASSWORD,
        keys::user::REGISTER_TIME,
        keys::user::ROLE,
        keys::user::EMAIL,
        keys::user::MOBILE,
    ],
};

pub const PRODUCT_SCHEMA: RecordSchema = RecordSchema {
    entity: "product",
    id_key: keys::product::ID,
    required: &[
        keys::product::ID,
        keys::product::MODEL,
        keys::product::CATEGORY,
        keys::product::NAME,
        keys::product::CURRENT_PRICE,
        keys::product::RAW_PRICE,
        keys::product::DISCOUNT,
        keys::product::LIKES_COUNT,
    ],
};

pub const ORDER_SCHEMA: RecordSchema = RecordSchema {
    entity: "order",
    id_key: keys::order::ID,
    required: &[
        keys::order::ID,
        keys::order::USER_ID,
        keys::order::PRODUCT_ID,
        keys::order::TIME,
    ],
};
