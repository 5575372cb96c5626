use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between sessions.
///
/// Provides abstraction over the storage medium, enabling different
/// implementations (JSON file, in-memory mock).
pub trait AddressBookRepository {
    /// Load the stored address book.
    ///
    /// Never fails: a missing, unreadable, or corrupt store yields an empty book.
    fn load(&self) -> AddressBook;

    /// Persist the whole address book, replacing whatever was stored before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
