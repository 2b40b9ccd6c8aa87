// Database schema for the customer store
diesel::table! {
    customers (id) {
        id -> Text,
        first_name -> Text,
        last_name -> Text,
        email -> Text,                    // normalized, unique
        available_credit_cents -> BigInt, // credit held as whole cents
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

pub const CREATE_CUSTOMERS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        available_credit_cents BIGINT NOT NULL DEFAULT 0 CHECK (available_credit_cents >= 0),
        created_at TIMESTAMP NOT NULL,
        updated_at TIMESTAMP NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_customers_available_credit
        ON customers (available_credit_cents);
";
