use crate::dtos::{CustomerResponse, UpdateCustomerRequest};
use domain::{CustomerRepository, DomainError, Email};
use std::sync::Arc;
use tracing::{info, warn};

pub struct UpdateCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl UpdateCustomerUseCase {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// Applies only the fields present in the request.
    pub async fn execute(
        &self,
        id: &str,
        request: UpdateCustomerRequest,
    ) -> Result<CustomerResponse, DomainError> {
        let mut customer = self
            .customer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::CustomerNotFound(id.to_string()))?;

        if let Some(first_name) = request.first_name.as_deref() {
            customer.update_first_name(first_name)?;
        }

        if let Some(last_name) = request.last_name.as_deref() {
            customer.update_last_name(last_name)?;
        }

        if let Some(raw_email) = request.email.as_deref() {
            let email = Email::create(raw_email)?;

            // Keeping one's own address is not a conflict.
            if let Some(owner) = self.customer_repository.find_by_email(&email).await? {
                if owner.id() != id {
                    warn!(customer_id = id, %email, "email owned by another customer");
                    return Err(DomainError::DuplicateEmail(email.to_string()));
                }
            }

            customer.update_email(email);
        }

        let saved = self.customer_repository.save(&customer).await?;
        info!(customer_id = saved.id(), "customer updated");

        Ok(CustomerResponse::from(&saved))
    }
}
