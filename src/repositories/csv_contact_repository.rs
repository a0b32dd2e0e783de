use crate::error::StorageResult;
use crate::models::{Contact, CONTACT_HEADER};
use crate::repositories::traits::ContactRepository;
use csv::StringRecord;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Contact repository backed by a comma-separated file.
///
/// The first row is the header; columns are matched to fields by header name,
/// so column order in a hand-edited file does not matter. Unknown columns are
/// ignored and missing ones load as empty text. Saving truncates the file and
/// rewrites it, which is not crash-safe.
pub struct CsvContactRepository {
    path: PathBuf,
}

impl CsvContactRepository {
    /// Create a repository reading and writing the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this repository uses.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Blank out repeated header names so only the leftmost column of each name
/// is read; serde rejects a record that names the same field twice.
fn first_occurrence_headers(headers: &StringRecord) -> StringRecord {
    let mut seen = HashSet::new();
    let deduped: StringRecord = headers
        .iter()
        .map(|name| if seen.insert(name) { name } else { "" })
        .collect();
    if seen.len() < headers.len() {
        warn!("Contact file header repeats column names; using the first of each");
    }
    deduped
}

impl ContactRepository for CsvContactRepository {
    fn load(&self) -> StorageResult<Option<Vec<Contact>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No contact file found, starting empty");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = first_occurrence_headers(reader.headers()?);
        let mut record = StringRecord::new();
        let mut contacts = Vec::new();
        while reader.read_record(&mut record)? {
            // Short rows are padded so absent trailing cells read as empty text.
            while record.len() < headers.len() {
                record.push_field("");
            }
            let contact: Contact = record.deserialize(Some(&headers))?;
            if !contact.is_complete() {
                let line = record.position().map_or(0, |pos| pos.line());
                warn!(line, "Contact row has empty fields");
            }
            contacts.push(contact);
        }

        info!(
            path = %self.path.display(),
            count = contacts.len(),
            "Loaded contacts"
        );
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> StorageResult<()> {
        // Header is written by hand so an empty list still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(CONTACT_HEADER)?;
        for contact in contacts {
            debug!(phone = %contact.phone, "Writing contact");
            writer.serialize(contact)?;
        }
        writer.flush()?;

        info!(
            path = %self.path.display(),
            count = contacts.len(),
            "Saved contacts"
        );
        Ok(())
    }
}
