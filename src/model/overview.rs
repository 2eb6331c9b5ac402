//! Overview parameter types.

use crate::dto::overview::{CreateOverviewDto, UpdateOverviewDto};

/// Parameters for creating an overview.
#[derive(Debug, Clone)]
pub struct CreateOverviewParams {
    pub income: f64,
    pub savings: f64,
    pub owner_id: i32,
}

impl CreateOverviewParams {
    /// Converts the wire DTO into create parameters; an absent savings
    /// percentage defaults to zero.
    pub fn from_dto(dto: CreateOverviewDto) -> Self {
        Self {
            income: dto.income,
            savings: dto.savings.unwrap_or(0.0),
            owner_id: dto.owner_id,
        }
    }
}

/// Parameters for a partial overview update.
#[derive(Debug, Clone, Default)]
pub struct UpdateOverviewParams {
    pub income: Option<f64>,
    pub savings: Option<f64>,
}

impl UpdateOverviewParams {
    pub fn from_dto(dto: UpdateOverviewDto) -> Self {
        Self {
            income: dto.income,
            savings: dto.savings,
        }
    }
}
