use crate::codec::{FieldCodec, parsed, text};
use crate::error::{ModelError, ModelResult};
use crate::fixed::FixedPoint;
use crate::record::Record;
use crate::schema::{PRODUCT_SCHEMA, RecordSchema, keys};
use storefront_types::ProductId;

/// A catalogue entry from the products file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub model: String,
    pub category: String,
    pub name: String,
    pub current_price: FixedPoint,
    pub raw_price: FixedPoint,
    /// Discount in percent.
    pub discount: FixedPoint,
    pub likes_count: u64,
}

impl FieldCodec for Product {
    const SCHEMA: &'static RecordSchema = &PRODUCT_SCHEMA;

    fn to_record(&self) -> Record {
        Record::new()
            .with(keys::product::ID, self.id.as_str())
            .with(keys::product::MODEL, self.model.as_str())
            .with(keys::product::CATEGORY, self.category.as_str())
            .with(keys::product::NAME, self.name.as_str())
            .with(keys::product::CURRENT_PRICE, self.current_price)
            .with(keys::product::RAW_PRICE, self.raw_price)
            .with(keys::product::DISCOUNT, self.discount)
            .with(keys::product::LIKES_COUNT, self.likes_count)
    }

    fn from_record(record: &Record) -> ModelResult<Self> {
        PRODUCT_SCHEMA.check(record)?;
        let id = ProductId::parse(&text(record, keys::product::ID)?).map_err(|e| ModelError::InvalidField {
            key: keys::product::ID,
            reason: e.to_string(),
        })?;

        Ok(Self {
            id,
            model: text(record, keys::product::MODEL)?,
            category: text(record, keys::product::CATEGORY)?,
            name: text(record, keys::product::NAME)?,
            current_price: parsed(record, keys::product::CURRENT_PRICE)?,
            raw_price: parsed(record, keys::product::RAW_PRICE)?,
            discount: parsed(record, keys::product::DISCOUNT)?,
            likes_count: parsed(record, keys::product::LIKES_COUNT)?,
        })
    }

    fn record_id(&self) -> String {
        self.id.to_string()
    }
}
