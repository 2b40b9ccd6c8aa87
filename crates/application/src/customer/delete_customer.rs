use domain::{CustomerRepository, DomainError};
use std::sync::Arc;
use tracing::info;

pub struct DeleteCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl DeleteCustomerUseCase {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    pub async fn execute(&self, id: &str) -> Result<(), DomainError> {
        if !self.customer_repository.exists(id).await? {
            return Err(DomainError::CustomerNotFound(id.to_string()));
        }

        self.customer_repository.delete(id).await?;
        info!(customer_id = id, "customer deleted");

        Ok(())
    }
}
