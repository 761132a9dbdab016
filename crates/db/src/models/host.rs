//! Host entity model and DTOs.

use radiodesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `hosts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Host {
    pub id: DbId,
    pub host_name: String,
    pub experience: i32,
    pub age: i32,
}

/// Input DTO for creating or fully replacing a host.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HostInput {
    #[validate(length(min = 1, max = 255))]
    pub host_name: String,
    /// Years on air.
    #[validate(range(min = 0, max = 100))]
    pub experience: i32,
    #[validate(range(min = 0, max = 120))]
    pub age: i32,
}
