//! Program entity model and DTOs.

use radiodesk_core::types::{DbId, TimeOfDay};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `programs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Program {
    pub id: DbId,
    pub program_name: String,
    pub duration: TimeOfDay,
    pub program_ratings: i32,
}

/// Input DTO for creating or fully replacing a program.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProgramInput {
    #[validate(length(min = 1, max = 255))]
    pub program_name: String,
    pub duration: TimeOfDay,
    #[validate(range(min = 0, max = 10))]
    pub program_ratings: i32,
}
