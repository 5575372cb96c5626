mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, DEFAULT_STORAGE_PATH};
pub use traits::AddressBookRepository;
