use super::*;
use enum_dispatch::enum_dispatch;

/// Trait for attributes shared by every member of a consist
#[enum_dispatch]
pub trait StockTrait {
    /// Length between pulling faces
    fn length(&self) -> si::Length;
    /// Current total mass, including any cargo
    fn weight(&self) -> si::Mass;
    fn speed_max(&self) -> si::Velocity;
    /// Checks that mass-related attributes are consistent with each other
    fn check_mass_consistent(&self) -> anyhow::Result<()>;
}

/// A single member of a consist: either a powered locomotive or a cargo-carrying car.
#[enum_dispatch(StockTrait, Describable)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StockUnit {
    Locomotive,
    RollingStock,
}

impl SerdeAPI for StockUnit {
    fn init(&mut self) -> anyhow::Result<()> {
        self.check_mass_consistent()
    }
}

impl StockUnit {
    pub fn is_locomotive(&self) -> bool {
        matches!(self, Self::Locomotive(_))
    }

    pub fn as_locomotive(&self) -> Option<&Locomotive> {
        match self {
            Self::Locomotive(loco) => Some(loco),
            Self::RollingStock(_) => None,
        }
    }

    pub fn as_rolling_stock(&self) -> Option<&RollingStock> {
        match self {
            Self::RollingStock(car) => Some(car),
            Self::Locomotive(_) => None,
        }
    }

    pub fn as_rolling_stock_mut(&mut self) -> Option<&mut RollingStock> {
        match self {
            Self::RollingStock(car) => Some(car),
            Self::Locomotive(_) => None,
        }
    }
}

impl fmt::Display for StockUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locomotive(loco) => fmt::Display::fmt(loco, f),
            Self::RollingStock(car) => fmt::Display::fmt(car, f),
        }
    }
}
