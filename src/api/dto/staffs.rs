/*
 * Responsibility
 * - Staff request/response DTOs
 * - The wire name of the employee-number field is literally "NIP";
 *   the Rust side keeps snake_case with a serde rename
 */
use serde::{Deserialize, Serialize};

use crate::repos::staff_repo::StaffRow;

#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    // default: an absent required field fails in validate() as a 400,
    // the same way an empty one does (not as a deserialization error)
    #[serde(default)]
    pub name: String,
    pub address: Option<String>,
    #[serde(default)]
    pub contact: String,
    #[serde(rename = "NIP", default)]
    pub nip: String,
}

impl CreateStaffRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.contact.trim().is_empty() {
            return Err("contact is required");
        }
        if self.nip.trim().is_empty() {
            return Err("NIP is required");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStaffRequest {
    pub name: Option<String>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (set NULL)
    // - Some(Some(v)): set value
    #[serde(default, with = "double_option")]
    pub address: Option<Option<String>>,
    pub contact: Option<String>,
    #[serde(rename = "NIP")]
    pub nip: Option<String>,
}

// serde collapses "absent" and "null" for Option<Option<T>> unless
// deserialization goes through an explicit presence wrapper.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(de).map(Some)
    }
}

impl UpdateStaffRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("name cannot be empty");
        }
        if let Some(contact) = &self.contact
            && contact.trim().is_empty()
        {
            return Err("contact cannot be empty");
        }
        if let Some(nip) = &self.nip
            && nip.trim().is_empty()
        {
            return Err("NIP cannot be empty");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub contact: String,
    #[serde(rename = "NIP")]
    pub nip: String,
}

impl From<StaffRow> for StaffResponse {
    fn from(row: StaffRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            contact: row.contact,
            nip: row.nip,
        }
    }
}
