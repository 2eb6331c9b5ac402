use sea_orm::entity::prelude::*;

/// Display currency for a user's budget amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Currency {
    #[sea_orm(string_value = "USD")]
    Usd,
    #[sea_orm(string_value = "EUR")]
    Eur,
    #[sea_orm(string_value = "GBP")]
    Gbp,
    #[sea_orm(string_value = "CAD")]
    Cad,
    #[sea_orm(string_value = "AUD")]
    Aud,
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Theme {
    #[sea_orm(string_value = "light")]
    Light,
    #[sea_orm(string_value = "dark")]
    Dark,
}

/// Spending category assigned to a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "monthly")]
    Monthly,
    #[sea_orm(string_value = "need")]
    Need,
    #[sea_orm(string_value = "planned")]
    Planned,
    #[sea_orm(string_value = "impulse")]
    Impulse,
    #[sea_orm(string_value = "regret")]
    Regret,
}
