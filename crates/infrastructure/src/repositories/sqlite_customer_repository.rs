use crate::database::{customers, SqlitePool};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use domain::{Credit, Customer, CustomerRepository, DomainError, Email, SortDirection};
use tracing::debug;

// Database model - separate from domain entity
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct CustomerModel {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    available_credit_cents: i64,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = customers)]
struct NewCustomerModel {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    available_credit_cents: i64,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

// Mutable columns only; created_at is written once.
#[derive(AsChangeset)]
#[diesel(table_name = customers)]
struct CustomerChangeset {
    first_name: String,
    last_name: String,
    email: String,
    available_credit_cents: i64,
    updated_at: NaiveDateTime,
}

impl TryFrom<CustomerModel> for Customer {
    type Error = DomainError;

    fn try_from(model: CustomerModel) -> Result<Self, Self::Error> {
        let corrupt = |e: DomainError| {
            DomainError::PersistenceError(format!("Corrupt customer row {}: {}", model.id, e))
        };
        let email = Email::create(&model.email).map_err(corrupt)?;
        let credit = Credit::from_cents(model.available_credit_cents).map_err(corrupt)?;

        Ok(Customer::reconstitute(
            model.id,
            model.first_name,
            model.last_name,
            email,
            credit,
            model.created_at.and_utc(),
            model.updated_at.and_utc(),
        ))
    }
}

impl From<&Customer> for NewCustomerModel {
    fn from(customer: &Customer) -> Self {
        NewCustomerModel {
            id: customer.id().to_string(),
            first_name: customer.first_name().to_string(),
            last_name: customer.last_name().to_string(),
            email: customer.email().value().to_string(),
            available_credit_cents: customer.available_credit().cents(),
            created_at: customer.created_at().naive_utc(),
            updated_at: customer.updated_at().naive_utc(),
        }
    }
}

impl From<&NewCustomerModel> for CustomerChangeset {
    fn from(model: &NewCustomerModel) -> Self {
        CustomerChangeset {
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            email: model.email.clone(),
            available_credit_cents: model.available_credit_cents,
            updated_at: model.updated_at,
        }
    }
}

fn into_customers(models: Vec<CustomerModel>) -> Result<Vec<Customer>, DomainError> {
    models.into_iter().map(Customer::try_from).collect()
}

pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Runs blocking diesel work on the blocking thread pool.
    async fn with_connection<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, DomainError> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(DomainError::persistence)?;
            work(&mut conn)
        })
        .await
        .map_err(DomainError::persistence)?
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, DomainError> {
        let id = id.to_string();

        let model = self
            .with_connection(move |conn| {
                customers::table
                    .filter(customers::id.eq(id))
                    .select(CustomerModel::as_select())
                    .first::<CustomerModel>(conn)
                    .optional()
                    .map_err(DomainError::persistence)
            })
            .await?;

        model.map(Customer::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, DomainError> {
        let email = email.value().to_string();

        let model = self
            .with_connection(move |conn| {
                customers::table
                    .filter(customers::email.eq(email))
                    .select(CustomerModel::as_select())
                    .first::<CustomerModel>(conn)
                    .optional()
                    .map_err(DomainError::persistence)
            })
            .await?;

        model.map(Customer::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let models = self
            .with_connection(|conn| {
                customers::table
                    .order(customers::created_at.asc())
                    .select(CustomerModel::as_select())
                    .load::<CustomerModel>(conn)
                    .map_err(DomainError::persistence)
            })
            .await?;

        into_customers(models)
    }

    async fn find_all_sorted_by_credit(
        &self,
        direction: SortDirection,
    ) -> Result<Vec<Customer>, DomainError> {
        debug!(%direction, "loading customers ordered by credit");

        let models = self
            .with_connection(move |conn| {
                let query = customers::table
                    .select(CustomerModel::as_select())
                    .into_boxed();

                let query = match direction {
                    SortDirection::Ascending => {
                        query.order(customers::available_credit_cents.asc())
                    }
                    SortDirection::Descending => {
                        query.order(customers::available_credit_cents.desc())
                    }
                };

                query
                    .then_order_by(customers::created_at.asc())
                    .load::<CustomerModel>(conn)
                    .map_err(DomainError::persistence)
            })
            .await?;

        into_customers(models)
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let new_customer = NewCustomerModel::from(customer);
        let changeset = CustomerChangeset::from(&new_customer);

        let model = self
            .with_connection(move |conn| {
                let id = new_customer.id.clone();
                let email = new_customer.email.clone();

                diesel::insert_into(customers::table)
                    .values(&new_customer)
                    .on_conflict(customers::id)
                    .do_update()
                    .set(&changeset)
                    .execute(conn)
                    .map_err(|e| match e {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            DomainError::DuplicateEmail(email)
                        }
                        other => DomainError::persistence(other),
                    })?;

                customers::table
                    .filter(customers::id.eq(id))
                    .select(CustomerModel::as_select())
                    .first::<CustomerModel>(conn)
                    .map_err(DomainError::persistence)
            })
            .await?;

        Customer::try_from(model)
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let id = id.to_string();

        self.with_connection(move |conn| {
            diesel::select(diesel::dsl::exists(
                customers::table.filter(customers::id.eq(id)),
            ))
            .get_result::<bool>(conn)
            .map_err(DomainError::persistence)
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let id = id.to_string();

        self.with_connection(move |conn| {
            diesel::delete(customers::table.filter(customers::id.eq(id)))
                .execute(conn)
                .map(|_| ())
                .map_err(DomainError::persistence)
        })
        .await
    }
}
