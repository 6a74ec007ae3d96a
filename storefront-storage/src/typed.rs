use crate::error::StorageResult;
use crate::page::{Page, paginate};
use crate::store::{LineRecordStore, ScannedLine};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use storefront_model::{FieldCodec, FieldValue, Record};
use tracing::warn;

/// A [`LineRecordStore`] viewed as a collection of one entity type.
///
/// Lines that are valid JSON but do not decode as `T` (a missing key, a
/// malformed price or timestamp) are skipped by reads with a warning and
/// left in place by rewrites, exactly like lines that are not JSON at all.
/// Id lookups that guard writes go by the raw id key instead, so they see
/// every line. Predicates over other raw fields go through [`Self::lines`].
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    lines: LineRecordStore,
    _entity: PhantomData<fn() -> T>,
}

impl<T: FieldCodec> EntityStore<T> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            lines: LineRecordStore::open(path),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        self.lines.path()
    }

    /// The underlying untyped store.
    pub fn lines(&self) -> &LineRecordStore {
        &self.lines
    }

    pub fn insert(&self, entity: &T) -> StorageResult<()> {
        self.lines.append(&entity.to_record())
    }

    pub fn insert_all(&self, entities: &[T]) -> StorageResult<()> {
        let records: Vec<Record> = entities.iter().map(FieldCodec::to_record).collect();
        self.lines.append_all(&records)
    }

    /// Replaces the file content with `entities` in a single rewrite.
    pub fn replace_all(&self, entities: &[T]) -> StorageResult<()> {
        let records: Vec<Record> = entities.iter().map(FieldCodec::to_record).collect();
        self.lines.replace_all(&records)
    }

    /// Every decodable entity in file order.
    pub fn scan(&self) -> StorageResult<Vec<T>> {
        Ok(self
            .lines
            .scan_all()?
            .iter()
            .filter_map(|line| self.decode(line))
            .collect())
    }

    pub fn find_first<P>(&self, predicate: P) -> StorageResult<Option<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.scan()?.into_iter().find(|entity| predicate(entity)))
    }

    /// Whether any line carries `id` under the entity's id key, decodable
    /// or not.
    pub fn contains_id(&self, id: &str) -> StorageResult<bool> {
        Ok(self.lines.find_first(|record| has_id::<T>(record, id))?.is_some())
    }

    pub fn find_by_id(&self, id: &str) -> StorageResult<Option<T>> {
        self.find_first(|entity| entity.record_id() == id)
    }

    pub fn filter<P>(&self, predicate: P) -> StorageResult<Vec<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.scan()?.into_iter().filter(|entity| predicate(entity)).collect())
    }

    pub fn filter_page<P>(&self, predicate: P, page: usize, page_size: usize) -> StorageResult<Page<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(paginate(self.filter(predicate)?, page, page_size))
    }

    /// Overwrites one field on the record whose id key equals `id`.
    pub fn update_field_by_id(&self, id: &str, field: &str, value: impl Into<FieldValue>) -> StorageResult<bool> {
        self.lines.update_field(|record| has_id::<T>(record, id), field, value)
    }

    /// Removes the record(s) whose id key equals `id`, decodable or not.
    pub fn delete_by_id(&self, id: &str) -> StorageResult<bool> {
        self.lines.delete_where(|record| has_id::<T>(record, id))
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.lines.clear()
    }

    fn decode(&self, line: &ScannedLine) -> Option<T> {
        match T::from_record(&line.record) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(
                    path = %self.path().display(),
                    line = line.line_no,
                    entity = T::SCHEMA.entity,
                    error = %e,
                    "skipping undecodable record"
                );
                None
            }
        }
    }
}

fn has_id<T: FieldCodec>(record: &Record, id: &str) -> bool {
    record
        .get(T::SCHEMA.id_key)
        .is_some_and(|value| value.to_plain_string() == id)
}
