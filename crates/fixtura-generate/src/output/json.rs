use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::errors::GenerationError;
use crate::linker::RelationshipLinker;
use crate::shapes::{catalog, person, user};

/// Indented JSON for any generated value.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, GenerationError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` as indented JSON to `path`, returning the bytes written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<u64, GenerationError> {
    let mut writer = CountingWriter::new(BufWriter::new(File::create(path)?));
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(writer.bytes_written())
}

pub fn humans_as_json(count: i64, seeded: bool) -> Result<String, GenerationError> {
    to_json_pretty(&person::humans(count, seeded)?)
}

/// Products linked across the default number of categories.
///
/// Each product carries its `category_id` and `category_name`; the category
/// object itself is not embedded.
pub fn products_as_json(count: i64, seeded: bool) -> Result<String, GenerationError> {
    let catalog = RelationshipLinker::default().link(count, seeded)?;
    to_json_pretty(&catalog.linked_products())
}

pub fn categories_as_json(count: i64, seeded: bool) -> Result<String, GenerationError> {
    to_json_pretty(&catalog::categories(count, seeded)?)
}

pub fn users_as_json(count: i64, seeded: bool) -> Result<String, GenerationError> {
    to_json_pretty(&user::users(count, seeded)?)
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
