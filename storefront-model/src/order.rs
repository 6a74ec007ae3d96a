use crate::codec::{FieldCodec, parsed, text};
use crate::error::{ModelError, ModelResult};
use crate::record::Record;
use crate::schema::{ORDER_SCHEMA, RecordSchema, keys};
use storefront_types::{OrderId, ProductId, RecordTime, UserId};

/// One purchase of one product by one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub time: RecordTime,
}

impl FieldCodec for Order {
    const SCHEMA: &'static RecordSchema = &ORDER_SCHEMA;

    fn to_record(&self) -> Record {
        Record::new()
            .with(keys::order::ID, self.id.as_str())
            .with(keys::order::USER_ID, self.user_id.as_str())
            .with(keys::order::PRODUCT_ID, self.product_id.as_str())
            .with(keys::order::TIME, self.time.to_string())
    }

    fn from_record(record: &Record) -> ModelResult<Self> {
        ORDER_SCHEMA.check(record)?;
        let invalid = |key: &'static str| move |e: storefront_types::Error| ModelError::InvalidField {
            key,
            reason: e.to_string(),
        };

        Ok(Self {
            id: OrderId::parse(&text(record, keys::order::ID)?).map_err(invalid(keys::order::ID))?,
            user_id: UserId::parse(&text(record, keys::order::USER_ID)?)
                .map_err(invalid(keys::order::USER_ID))?,
            product_id: ProductId::parse(&text(record, keys::order::PRODUCT_ID)?)
                .map_err(invalid(keys::order::PRODUCT_ID))?,
            time: parsed(record, keys::order::TIME)?,
        })
    }

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}
