use domain::CustomerRepository;
use infrastructure::{Database, InMemoryCustomerRepository, SqliteCustomerRepository};
use std::sync::Arc;
use tracing::info;

pub mod customer;
pub mod dtos;

pub use customer::*;
pub use dtos::*;

/// Customer Application - one use case per operation, all sharing a repository
pub struct CustomerApp {
    pub create_customer: CreateCustomerUseCase,
    pub get_customer: GetCustomerUseCase,
    pub update_customer: UpdateCustomerUseCase,
    pub delete_customer: DeleteCustomerUseCase,
    pub add_credit: AddCreditUseCase,
    pub list_customers_sorted: ListCustomersSortedUseCase,
}

impl CustomerApp {
    /// SQLite-backed application.
    pub fn new(database_path: &str, pool_size: u32) -> Result<Self, domain::DomainError> {
        // Infrastructure layer - database setup
        let database = Database::new(database_path, pool_size)?;
        let customer_repository: Arc<dyn CustomerRepository> =
            Arc::new(SqliteCustomerRepository::new(database.get_pool().clone()));

        info!(database_path, "customer application using sqlite storage");
        Ok(Self::with_repository(customer_repository))
    }

    /// Process-local storage; contents are lost on exit.
    pub fn in_memory() -> Self {
        info!("customer application using in-memory storage");
        Self::with_repository(Arc::new(InMemoryCustomerRepository::new()))
    }

    pub fn with_repository(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            create_customer: CreateCustomerUseCase::new(customer_repository.clone()),
            get_customer: GetCustomerUseCase::new(customer_repository.clone()),
            update_customer: UpdateCustomerUseCase::new(customer_repository.clone()),
            delete_customer: DeleteCustomerUseCase::new(customer_repository.clone()),
            add_credit: AddCreditUseCase::new(customer_repository.clone()),
            list_customers_sorted: ListCustomersSortedUseCase::new(customer_repository),
        }
    }
}
