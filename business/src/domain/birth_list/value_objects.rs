use serde::{Deserialize, Serialize};

/// Lifecycle of a registry line item. Persisted as the numeric codes the
/// storefront has always used: 0 pending, 1 reserved, 2 purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Pending,
    Reserved,
    Purchased,
}

impl ItemState {
    pub fn code(&self) -> i16 {
        match self {
            ItemState::Pending => 0,
            ItemState::Reserved => 1,
            ItemState::Purchased => 2,
        }
    }

    pub fn from_code(code: i16) -> Result<Self, String> {
        match code {
            0 => Ok(ItemState::Pending),
            1 => Ok(ItemState::Reserved),
            2 => Ok(ItemState::Purchased),
            other => Err(format!("Invalid item state code: {}", other)),
        }
    }
}

/// List status strings kept exactly as the storefront displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirthListStatus {
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for BirthListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BirthListStatus::Active => write!(f, "Activa"),
            BirthListStatus::Completed => write!(f, "Completada"),
            BirthListStatus::Cancelled => write!(f, "Cancelada"),
        }
    }
}

impl std::str::FromStr for BirthListStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Activa" => Ok(BirthListStatus::Active),
            "Completada" => Ok(BirthListStatus::Completed),
            "Cancelada" => Ok(BirthListStatus::Cancelled),
            _ => Err(format!("Invalid birth list status: {}", s)),
        }
    }
}
