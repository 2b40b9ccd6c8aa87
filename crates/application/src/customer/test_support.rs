use async_trait::async_trait;
use domain::{Customer, CustomerRepository, DomainError, Email, IdGenerator, SortDirection};
use infrastructure::InMemoryCustomerRepository;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn repository() -> Arc<InMemoryCustomerRepository> {
    Arc::new(InMemoryCustomerRepository::new())
}

pub async fn seed(
    repo: &InMemoryCustomerRepository,
    id: &str,
    email: &str,
    credit: Decimal,
) -> Customer {
    let mut customer = Customer::create(id, "Seed", "Customer", Email::create(email).unwrap()).unwrap();
    if credit > Decimal::ZERO {
        customer.add_credit(credit).unwrap();
    }
    repo.save(&customer).await.unwrap()
}

/// Hands out `prefix-1`, `prefix-2`, ...
pub struct SequentialIds {
    prefix: &'static str,
    next: AtomicUsize,
}

impl SequentialIds {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicUsize::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// Every call fails as if the storage backend were down.
pub struct UnavailableRepository;

fn down() -> DomainError {
    DomainError::PersistenceError("connection refused".to_string())
}

#[async_trait]
impl CustomerRepository for UnavailableRepository {
    async fn find_by_id(&self, _id: &str) -> Result<Option<Customer>, DomainError> {
        Err(down())
    }

    async fn find_by_email(&self, _email: &Email) -> Result<Option<Customer>, DomainError> {
        Err(down())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        Err(down())
    }

    async fn find_all_sorted_by_credit(
        &self,
        _direction: SortDirection,
    ) -> Result<Vec<Customer>, DomainError> {
        Err(down())
    }

    async fn save(&self, _customer: &Customer) -> Result<Customer, DomainError> {
        Err(down())
    }

    async fn exists(&self, _id: &str) -> Result<bool, DomainError> {
        Err(down())
    }

    async fn delete(&self, _id: &str) -> Result<(), DomainError> {
        Err(down())
    }
}
