use crate::error::StorageResult;
use crate::page::{Page, paginate};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use storefront_model::{FieldValue, Record};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// A parsed line together with its position and original text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedLine {
    /// 1-based line number in the file.
    pub line_no: usize,
    /// The line exactly as read, without its terminator.
    pub raw: String,
    pub record: Record,
}

/// A file of JSON-object lines, one record per line.
///
/// Every read scans the whole file and every mutation rewrites it, so the
/// store holds no state beyond its path. Mutations write the new content to
/// a temporary file in the same directory and rename it into place; a
/// concurrent reader sees either the old file or the new one. There is no
/// locking: two writers racing on one file can lose updates.
#[derive(Debug, Clone)]
pub struct LineRecordStore {
    path: PathBuf,
}

impl LineRecordStore {
    /// Binds a store to `path`. Nothing is touched until the first operation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record as a new line, creating the file and its parent
    /// directory if needed.
    pub fn append(&self, record: &Record) -> StorageResult<()> {
        self.append_all(std::slice::from_ref(record))
    }

    /// Appends records in order with a single write.
    pub fn append_all(&self, records: &[Record]) -> StorageResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        let mut buf = String::new();
        for record in records {
            buf.push_str(&record.to_line()?);
            buf.push('\n');
        }

        if let Some(dir) = self.parent_dir() {
            fs::create_dir_all(dir)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;
        if lacks_trailing_newline(&mut file)? {
            buf.insert(0, '\n');
        }
        file.write_all(buf.as_bytes())?;

        debug!(path = %self.path.display(), records = records.len(), "appended records");
        Ok(())
    }

    /// Every parseable record in file order. A missing file scans as empty.
    pub fn scan_all(&self) -> StorageResult<Vec<ScannedLine>> {
        let Some(content) = self.read_content()? else {
            return Ok(Vec::new());
        };
        Ok(content
            .lines()
            .enumerate()
            .filter_map(|(idx, raw)| {
                self.parse(idx + 1, raw).map(|record| ScannedLine {
                    line_no: idx + 1,
                    raw: raw.to_string(),
                    record,
                })
            })
            .collect())
    }

    pub fn find_first<P>(&self, predicate: P) -> StorageResult<Option<Record>>
    where
        P: Fn(&Record) -> bool,
    {
        Ok(self
            .scan_all()?
            .into_iter()
            .map(|line| line.record)
            .find(|record| predicate(record)))
    }

    pub fn filter<P>(&self, predicate: P) -> StorageResult<Vec<Record>>
    where
        P: Fn(&Record) -> bool,
    {
        Ok(self
            .scan_all()?
            .into_iter()
            .map(|line| line.record)
            .filter(|record| predicate(record))
            .collect())
    }

    /// One page of the matching records. See [`paginate`] for clamping.
    pub fn filter_page<P>(&self, predicate: P, page: usize, page_size: usize) -> StorageResult<Page<Record>>
    where
        P: Fn(&Record) -> bool,
    {
        Ok(paginate(self.filter(predicate)?, page, page_size))
    }

    /// Overwrites `field` on every record matching `predicate`.
    ///
    /// Only the named field changes; other fields keep their values and
    /// order, and an absent field is added last. Non-matching lines,
    /// including ones that do not parse, are written back unchanged. When
    /// nothing matches the file is not touched and `false` is returned.
    pub fn update_field<P>(&self, predicate: P, field: &str, value: impl Into<FieldValue>) -> StorageResult<bool>
    where
        P: Fn(&Record) -> bool,
    {
        let Some(content) = self.read_content()? else {
            return Ok(false);
        };
        let value = value.into();
        let mut found = 0usize;
        let mut out = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            match self.parse(idx + 1, raw) {
                Some(mut record) if predicate(&record) => {
                    record.set(field, value.clone());
                    out.push(record.to_line()?);
                    found += 1;
                }
                _ => out.push(raw.to_string()),
            }
        }

        if found > 0 {
            self.write_atomic(&out)?;
            debug!(path = %self.path.display(), field, records = found, "updated field");
        }
        Ok(found > 0)
    }

    /// Removes every record matching `predicate`. Unparseable lines are kept.
    pub fn delete_where<P>(&self, predicate: P) -> StorageResult<bool>
    where
        P: Fn(&Record) -> bool,
    {
        let Some(content) = self.read_content()? else {
            return Ok(false);
        };
        let mut removed = 0usize;
        let mut out = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            match self.parse(idx + 1, raw) {
                Some(record) if predicate(&record) => removed += 1,
                _ => out.push(raw.to_string()),
            }
        }

        if removed > 0 {
            self.write_atomic(&out)?;
            debug!(path = %self.path.display(), records = removed, "deleted records");
        }
        Ok(removed > 0)
    }

    /// Empties the file.
    pub fn clear(&self) -> StorageResult<()> {
        self.write_atomic(&[])
    }

    /// Replaces the whole file with `records` in one atomic rewrite.
    pub fn replace_all(&self, records: &[Record]) -> StorageResult<()> {
        let lines = records
            .iter()
            .map(Record::to_line)
            .collect::<Result<Vec<_>, _>>()?;
        self.write_atomic(&lines)?;
        debug!(path = %self.path.display(), records = lines.len(), "replaced records");
        Ok(())
    }

    /// Rewrites the file keeping only parsed records that satisfy `keep`.
    /// Unparseable lines are dropped. Returns the number of records kept.
    pub fn clear_except<P>(&self, keep: P) -> StorageResult<usize>
    where
        P: Fn(&Record) -> bool,
    {
        let kept: Vec<String> = self
            .scan_all()?
            .into_iter()
            .filter(|line| keep(&line.record))
            .map(|line| line.raw)
            .collect();
        self.write_atomic(&kept)?;
        Ok(kept.len())
    }

    fn read_content(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn parse(&self, line_no: usize, raw: &str) -> Option<Record> {
        if raw.trim().is_empty() {
            return None;
        }
        match Record::parse_line(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(path = %self.path.display(), line = line_no, error = %e, "skipping unparseable line");
                None
            }
        }
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|dir| !dir.as_os_str().is_empty())
    }

    fn write_atomic(&self, lines: &[String]) -> StorageResult<()> {
        let dir = self.parent_dir().unwrap_or(Path::new("."));
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            for line in lines {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

fn lacks_trailing_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
