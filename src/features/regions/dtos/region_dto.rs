use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::Region;

/// Response DTO for a state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionResponseDto {
    pub code: String,
    pub name: String,
}

impl From<&Region> for RegionResponseDto {
    fn from(r: &Region) -> Self {
        Self {
            code: r.code.to_string(),
            name: r.name.to_string(),
        }
    }
}
