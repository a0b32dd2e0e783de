mod csv_contact_repository;
mod traits;

pub use csv_contact_repository::CsvContactRepository;
pub use traits::ContactRepository;
