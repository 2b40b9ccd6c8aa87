use async_trait::async_trait;
use domain::{Customer, CustomerRepository, DomainError, Email, SortDirection};
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local customer store keyed by id.
///
/// Enforces the same unique-email rule as the SQLite table so both adapters
/// behave alike under the use cases.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

fn by_credit(direction: SortDirection) -> impl Fn(&Customer, &Customer) -> Ordering {
    move |a, b| {
        let credit = match direction {
            SortDirection::Ascending => a.available_credit().cmp(&b.available_credit()),
            SortDirection::Descending => b.available_credit().cmp(&a.available_credit()),
        };
        credit.then_with(|| a.created_at().cmp(&b.created_at()))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.email() == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().await;
        let mut all: Vec<Customer> = customers.values().cloned().collect();
        all.sort_by_key(|c| c.created_at());
        Ok(all)
    }

    async fn find_all_sorted_by_credit(
        &self,
        direction: SortDirection,
    ) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().await;
        let mut all: Vec<Customer> = customers.values().cloned().collect();
        all.sort_by(by_credit(direction));
        Ok(all)
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        let email_taken = customers
            .values()
            .any(|c| c.id() != customer.id() && c.email() == customer.email());
        if email_taken {
            return Err(DomainError::DuplicateEmail(customer.email().to_string()));
        }

        customers.insert(customer.id().to_string(), customer.clone());
        Ok(customer.clone())
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.contains_key(id))
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let mut customers = self.customers.write().await;
        customers.remove(id);
        Ok(())
    }
}
