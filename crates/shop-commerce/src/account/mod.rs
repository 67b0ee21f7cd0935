//! Customer accounts: the customer record and the sign-in payload.

use crate::error::CommerceError;
use crate::ids::CustomerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer as served by the customers endpoints.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub number_phone: String,
    pub password: String,
    pub address: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Customer {
    /// Build a registration record with a client-generated ID.
    pub fn registration(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        number_phone: impl Into<String>,
        address: impl Into<String>,
        now: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        let now = now.into();
        let customer = Self {
            id: CustomerId::generate(),
            name: name.into(),
            email: email.into(),
            number_phone: number_phone.into(),
            password: password.into(),
            address: address.into(),
            created_at: now.clone(),
            updated_at: now,
        };

        if customer.name.trim().is_empty() {
            return Err(CommerceError::ValidationError("name is required".to_string()));
        }
        validate_credentials(&customer.email, &customer.password)?;
        Ok(customer)
    }
}

impl fmt::Debug for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("number_phone", &self.number_phone)
            .field("password", &"<redacted>")
            .field("address", &self.address)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Body of the login request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, CommerceError> {
        let request = Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        };
        validate_credentials(&request.email, &request.password)?;
        Ok(request)
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), CommerceError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(CommerceError::ValidationError(format!("invalid email: {:?}", email)));
    }
    if password.is_empty() {
        return Err(CommerceError::ValidationError("password is required".to_string()));
    }
    Ok(())
}
