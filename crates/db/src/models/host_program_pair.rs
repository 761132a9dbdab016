//! Host/program join entity model and DTOs.

use radiodesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `host_program_pairs` table (many-to-many join).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct HostProgramPair {
    pub id: DbId,
    pub program_id: DbId,
    pub host_id: DbId,
}

/// Input DTO for creating or fully replacing a host/program pair.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HostProgramPairInput {
    pub program_id: DbId,
    pub host_id: DbId,
}
