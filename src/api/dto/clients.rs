/*
 * Responsibility
 * - Client request/response DTOs
 * - validate() holds the shape checks (required, non-empty) so handlers
 *   never touch the store with a bad payload
 */
use serde::{Deserialize, Serialize};

use crate::repos::client_repo::ClientRow;

#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    // default: an absent required field fails in validate() as a 400,
    // the same way an empty one does (not as a deserialization error)
    #[serde(default)]
    pub name: String,
    pub address: Option<String>,
    #[serde(default)]
    pub contact: String,
}

impl CreateClientRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.contact.trim().is_empty() {
            return Err("contact is required");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub contact: String,
}

impl From<ClientRow> for ClientResponse {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            contact: row.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, contact: &str) -> CreateClientRequest {
        CreateClientRequest {
            name: name.to_string(),
            address: None,
            contact: contact.to_string(),
        }
    }

    #[test]
    fn accepts_required_fields() {
        assert!(req("PT ABC", "021-999888").validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(req("", "021-999888").validate(), Err("name is required"));
        assert_eq!(req("   ", "021-999888").validate(), Err("name is required"));
    }

    #[test]
    fn rejects_empty_contact() {
        assert_eq!(req("PT ABC", "").validate(), Err("contact is required"));
    }

    #[test]
    fn absent_required_field_fails_validation_not_deserialization() {
        let req: CreateClientRequest =
            serde_json::from_value(serde_json::json!({"name": "PT ABC"})).unwrap();
        assert_eq!(req.validate(), Err("contact is required"));
    }
}
