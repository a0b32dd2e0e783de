use crate::error::StorageResult;
use crate::models::Contact;

/// Repository for the persisted contact list.
///
/// The whole list is read once at startup and written back in full on quit;
/// there are no incremental updates. Implementations exist for the CSV file
/// and, in tests, for memory.
pub trait ContactRepository {
    /// Load every stored contact in file order.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet, which callers treat as
    /// a fresh start rather than an error.
    fn load(&self) -> StorageResult<Option<Vec<Contact>>>;

    /// Replace the stored list with `contacts`, preserving their order.
    fn save(&self, contacts: &[Contact]) -> StorageResult<()>;
}
