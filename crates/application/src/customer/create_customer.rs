use crate::dtos::{CreateCustomerRequest, CustomerResponse};
use domain::{Customer, CustomerRepository, DomainError, Email, IdGenerator, UuidIdGenerator};
use std::sync::Arc;
use tracing::{info, warn};

pub struct CreateCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl CreateCustomerUseCase {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self::with_id_generator(customer_repository, Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(
        customer_repository: Arc<dyn CustomerRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            customer_repository,
            id_generator,
        }
    }

    /// Fails with `DuplicateEmail` if the normalized email is already taken.
    /// The check is not atomic with the save; the store's unique constraint
    /// settles concurrent creates.
    pub async fn execute(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<CustomerResponse, DomainError> {
        let email = Email::create(&request.email)?;

        if self.customer_repository.find_by_email(&email).await?.is_some() {
            warn!(%email, "customer email already registered");
            return Err(DomainError::DuplicateEmail(email.to_string()));
        }

        let customer = Customer::create(
            self.id_generator.next_id(),
            &request.first_name,
            &request.last_name,
            email,
        )?;

        let saved = self.customer_repository.save(&customer).await?;
        info!(customer_id = saved.id(), "customer created");

        Ok(CustomerResponse::from(&saved))
    }
}
