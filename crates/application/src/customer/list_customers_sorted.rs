use crate::dtos::CustomerResponse;
use domain::{CustomerRepository, DomainError, SortDirection};
use std::sync::Arc;
use tracing::debug;

pub struct ListCustomersSortedUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl ListCustomersSortedUseCase {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// Highest credit first unless a direction is given.
    pub async fn execute(
        &self,
        direction: Option<SortDirection>,
    ) -> Result<Vec<CustomerResponse>, DomainError> {
        let direction = direction.unwrap_or_default();
        let customers = self
            .customer_repository
            .find_all_sorted_by_credit(direction)
            .await?;

        debug!(%direction, count = customers.len(), "listed customers by credit");

        Ok(customers.iter().map(CustomerResponse::from).collect())
    }
}
