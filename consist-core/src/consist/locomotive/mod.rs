//! Module containing the locomotive model

pub mod locomotive_model;
pub use locomotive_model::*;

pub(crate) use super::*;
