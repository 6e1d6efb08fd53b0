use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::patch::non_null;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub join_date: NaiveDateTime,
    pub membership_type: String,
    pub active: bool,
}

/// Body of `POST /members`. Keys beyond these three are ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    pub membership_type: String,
}

/// Body of `PUT /members/{id}`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMember {
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub membership_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub active: Option<bool>,
}

impl Member {
    /// Overwrite the fields present in `changes`, leaving the rest untouched.
    pub fn apply(&mut self, changes: UpdateMember) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(membership_type) = changes.membership_type {
            self.membership_type = membership_type;
        }
        if let Some(active) = changes.active {
            self.active = active;
        }
    }
}
