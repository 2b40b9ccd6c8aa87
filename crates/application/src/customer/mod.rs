pub mod add_credit;
pub mod create_customer;
pub mod delete_customer;
pub mod get_customer;
pub mod list_customers_sorted;
pub mod mapper;
pub mod update_customer;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_credit::AddCreditUseCase;
pub use create_customer::CreateCustomerUseCase;
pub use delete_customer::DeleteCustomerUseCase;
pub use get_customer::GetCustomerUseCase;
pub use list_customers_sorted::ListCustomersSortedUseCase;
pub use update_customer::UpdateCustomerUseCase;
