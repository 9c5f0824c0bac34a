//! Employee identity, stored record, and transfer shape.
//!
//! [`EmployeeRecord`] mirrors one row of the `employees` table. [`EmployeeDto`]
//! is the shape exchanged with clients; the two are structurally identical and
//! converted by [`crate::domain::employee_mapper`].

use serde::{Deserialize, Serialize};

/// Storage-assigned employee identifier.
///
/// Serialises transparently as a JSON integer.
///
/// # Examples
/// ```
/// use backend::domain::EmployeeId;
///
/// let id = EmployeeId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory shape of a stored employee row.
///
/// `id` is `None` until the repository assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// Primary key; `None` before the first save.
    pub id: Option<EmployeeId>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact address. Not required to be unique.
    pub email: String,
}

impl EmployeeRecord {
    /// Build a record that has not been persisted yet.
    pub fn unsaved(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Replace the editable fields, keeping the identifier untouched.
    pub fn overwrite_details(&mut self, details: EmployeeDto) {
        let EmployeeDto {
            id: _,
            first_name,
            last_name,
            email,
        } = details;
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
    }
}

/// Employee representation exchanged at the API boundary.
///
/// Serialised in camelCase: `{"id":1,"firstName":"Jane","lastName":"Doe","email":"jane@x.com"}`.
/// `id` may be omitted in request bodies and is ignored by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Identifier; absent on request bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact address.
    pub email: String,
}
