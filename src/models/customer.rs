use serde::Deserialize;

use crate::domain::customer::Customer as DomainCustomer;
use crate::domain::types::{CustomerId, Email, TypeConstraintError};
use crate::models::wire::{WireNumber, parse_optional_timestamp};

/// Row of `GET /customer/customers` (`{users: [...]}`).
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: WireNumber,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(row: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::new(row.id.as_i32()?)?,
            name: row.name.unwrap_or_default(),
            email: Email::new(row.email)?,
            created_at: parse_optional_timestamp(row.created_at.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerList {
    #[serde(default)]
    pub users: Vec<Customer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_envelope_decodes() {
        let list: CustomerList = serde_json::from_str(
            r#"{"users": [{"id": "12", "name": "Sally", "email": "Sally@Example.com",
                "created_at": "2024-01-02"}]}"#,
        )
        .unwrap();
        let customer = DomainCustomer::try_from(list.users[0].clone()).unwrap();
        assert_eq!(customer.id.get(), 12);
        assert_eq!(customer.email.as_str(), "sally@example.com");
        assert!(customer.created_at.is_some());
    }
}
