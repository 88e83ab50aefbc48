//! Module containing models for consists, locomotives, rolling stock, and cargo loading

pub mod cargo;
pub mod consist_model;
pub mod consist_summary;
pub mod consist_utils;
pub mod locomotive;
pub mod rolling_stock;

pub use consist_model::*;
pub use consist_utils::*;

pub(crate) use crate::imports::*;
pub(crate) use locomotive::Locomotive;
pub(crate) use rolling_stock::{CarType, RollingStock};
