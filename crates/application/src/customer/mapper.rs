use crate::dtos::CustomerResponse;
use chrono::{DateTime, SecondsFormat, Utc};
use domain::Customer;

fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            first_name: customer.first_name().to_string(),
            last_name: customer.last_name().to_string(),
            email: customer.email().value().to_string(),
            available_credit: customer.available_credit().value(),
            created_at: iso_timestamp(customer.created_at()),
            updated_at: iso_timestamp(customer.updated_at()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domain::{Credit, Email};
    use rust_decimal_macros::dec;

    fn customer() -> Customer {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        Customer::reconstitute(
            "c-1".to_string(),
            "John".to_string(),
            "Doe".to_string(),
            Email::create("john@example.com").unwrap(),
            Credit::create(dec!(150.51)).unwrap(),
            at,
            at,
        )
    }

    #[test]
    fn test_maps_every_field() {
        let response = CustomerResponse::from(&customer());

        assert_eq!(response.id, "c-1");
        assert_eq!(response.first_name, "John");
        assert_eq!(response.last_name, "Doe");
        assert_eq!(response.email, "john@example.com");
        assert_eq!(response.available_credit, dec!(150.51));
        assert_eq!(response.created_at, "2024-03-05T09:30:00.000Z");
        assert_eq!(response.updated_at, "2024-03-05T09:30:00.000Z");
    }

    #[test]
    fn test_serializes_camel_case_with_numeric_credit() {
        let json = serde_json::to_value(CustomerResponse::from(&customer())).unwrap();

        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["availableCredit"].as_f64(), Some(150.51));
        assert_eq!(json["createdAt"], "2024-03-05T09:30:00.000Z");
    }

    #[test]
    fn test_reconstituted_copy_maps_identically() {
        let original = Customer::create(
            "c-2",
            "Ada",
            "Lovelace",
            Email::create("ada@example.com").unwrap(),
        )
        .unwrap();

        let copy = Customer::reconstitute(
            original.id().to_string(),
            original.first_name().to_string(),
            original.last_name().to_string(),
            original.email().clone(),
            original.available_credit(),
            original.created_at(),
            original.updated_at(),
        );

        assert_eq!(CustomerResponse::from(&copy), CustomerResponse::from(&original));
    }
}
