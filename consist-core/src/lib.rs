//! Crate containing models for freight train consists comprising ordered collections of
//! locomotives and rolling stock, along with cargo loading arithmetic, consist splitting,
//! and helpers for assembling randomized consists.
//! # Example
//! ```
//! use consist_core::prelude::*;
//!
//! let mut consist = consist![12; Locomotive::big_boy(4004)];
//! consist.attach(RollingStock::preset(CarType::Gondola, "CSX", 5150, "red"));
//! let remaining = distribute_cargo(150_000. * uc::KG, &mut consist, Some(CarType::Gondola));
//! assert_eq!(remaining.get::<si::kilogram>(), 60_000.);
//! ```

#[macro_use]
pub mod macros;

#[cfg(test)]
pub(crate) mod testing;

pub mod error;
pub mod imports;
pub mod si;
pub mod traits;
pub mod uc;
pub mod utils;

pub mod consist;
pub mod prelude;
pub mod random;
