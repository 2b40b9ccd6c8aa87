pub mod in_memory_customer_repository;
pub mod sqlite_customer_repository;

pub use in_memory_customer_repository::InMemoryCustomerRepository;
pub use sqlite_customer_repository::SqliteCustomerRepository;
