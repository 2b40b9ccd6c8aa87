use crate::dtos::{AddCreditRequest, CustomerResponse};
use domain::{CustomerRepository, DomainError};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

pub struct AddCreditUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl AddCreditUseCase {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    pub async fn execute(
        &self,
        id: &str,
        request: AddCreditRequest,
    ) -> Result<CustomerResponse, DomainError> {
        let mut customer = self
            .customer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::CustomerNotFound(id.to_string()))?;

        if request.amount <= Decimal::ZERO {
            return Err(DomainError::validation(
                "Credit amount must be greater than zero",
            ));
        }

        customer.add_credit(request.amount)?;

        let saved = self.customer_repository.save(&customer).await?;
        info!(
            customer_id = saved.id(),
            amount = %request.amount,
            balance = %saved.available_credit(),
            "credit added"
        );

        Ok(CustomerResponse::from(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::test_support::{repository, seed, UnavailableRepository};
    use domain::Credit;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn amount(value: Decimal) -> AddCreditRequest {
        AddCreditRequest { amount: value }
    }

    #[tokio::test]
    async fn test_midpoint_amount_rounds_half_up() {
        let repo = repository();
        seed(&repo, "c-1", "john@example.com", Decimal::ZERO).await;

        let response = AddCreditUseCase::new(repo)
            .execute("c-1", amount(dec!(150.505)))
            .await
            .unwrap();

        assert_eq!(response.available_credit, dec!(150.51));
    }

    #[tokio::test]
    async fn test_credit_accumulates() {
        let repo = repository();
        seed(&repo, "c-1", "john@example.com", dec!(100)).await;
        let use_case = AddCreditUseCase::new(repo.clone());

        use_case.execute("c-1", amount(dec!(0.25))).await.unwrap();
        let response = use_case.execute("c-1", amount(dec!(0.25))).await.unwrap();

        assert_eq!(response.available_credit, dec!(100.50));
        let stored = repo.find_by_id("c-1").await.unwrap().unwrap();
        assert_eq!(stored.available_credit().value(), dec!(100.5));
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_rejected_and_balance_unchanged() {
        let repo = repository();
        seed(&repo, "c-1", "john@example.com", dec!(20)).await;
        let use_case = AddCreditUseCase::new(repo.clone());

        for bad in [dec!(-5), Decimal::ZERO] {
            let result = use_case.execute("c-1", amount(bad)).await;
            assert_eq!(
                result,
                Err(DomainError::ValidationError(
                    "Credit amount must be greater than zero".to_string()
                ))
            );
        }

        let stored = repo.find_by_id("c-1").await.unwrap().unwrap();
        assert_eq!(stored.available_credit().value(), dec!(20));
    }

    #[rstest]
    #[case::huge_amount(Decimal::ZERO, Decimal::from_i128_with_scale(10_i128.pow(27), 0))]
    #[case::past_maximum(Credit::max_value(), dec!(0.01))]
    #[case::decimal_overflow(Credit::max_value(), Decimal::MAX)]
    #[tokio::test]
    async fn test_amount_beyond_maximum_is_rejected(
        #[case] balance: Decimal,
        #[case] extra: Decimal,
    ) {
        let repo = repository();
        seed(&repo, "c-1", "john@example.com", balance).await;

        let result = AddCreditUseCase::new(repo.clone())
            .execute("c-1", amount(extra))
            .await;

        assert_eq!(
            result,
            Err(DomainError::ValidationError(
                "Credit exceeds the maximum balance".to_string()
            ))
        );
        let stored = repo.find_by_id("c-1").await.unwrap().unwrap();
        assert_eq!(stored.available_credit().value(), balance);
    }

    #[tokio::test]
    async fn test_unknown_id_is_checked_before_amount() {
        let result = AddCreditUseCase::new(repository())
            .execute("ghost", amount(dec!(-5)))
            .await;

        assert_eq!(result, Err(DomainError::CustomerNotFound("ghost".to_string())));
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let result = AddCreditUseCase::new(Arc::new(UnavailableRepository))
            .execute("c-1", amount(dec!(1)))
            .await;

        assert!(matches!(result, Err(DomainError::PersistenceError(_))));
    }
}
