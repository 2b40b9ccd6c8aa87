use crate::dtos::CustomerResponse;
use domain::{CustomerRepository, DomainError};
use std::sync::Arc;
use tracing::debug;

pub struct GetCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerUseCase {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    pub async fn execute(&self, id: &str) -> Result<CustomerResponse, DomainError> {
        debug!(customer_id = id, "fetching customer");

        match self.customer_repository.find_by_id(id).await? {
            Some(customer) => Ok(CustomerResponse::from(&customer)),
            None => Err(DomainError::CustomerNotFound(id.to_string())),
        }
    }
}
