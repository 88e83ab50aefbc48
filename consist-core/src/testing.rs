//! Fixtures and assertions shared by unit tests

use crate::consist::{CarType, Consist, Locomotive, RollingStock, StockUnit};
use crate::imports::*;

/// Gondola with the given masses in kilograms and a length of 16 m
pub(crate) fn test_car(dry_kg: f64, capacity_kg: f64, load_kg: f64) -> RollingStock {
    RollingStock::new(
        CarType::Gondola,
        "TS",
        4321,
        "black",
        16. * uc::M,
        dry_kg * uc::KG,
        capacity_kg * uc::KG,
        load_kg * uc::KG,
        70. * uc::MPH,
    )
}

/// Empty car of `car_type` with an explicit length in meters
pub(crate) fn test_car_with_length(car_type: CarType, number: u32, length_m: f64) -> RollingStock {
    let mut car = RollingStock::preset(car_type, "SOO", number, "green");
    car.length = length_m * uc::M;
    car
}

/// Big Boy followed by one empty car of each type, in [CarType::ALL] order
pub(crate) fn test_consist() -> Consist {
    let mut consist = Consist::new(42);
    consist.attach(Locomotive::big_boy(4004));
    for (i, car_type) in CarType::ALL.into_iter().enumerate() {
        consist.attach(RollingStock::preset(car_type, "BNSF", 1_000 + i as u32, "orange"));
    }
    consist
}

pub(crate) fn test_units(consist: &Consist) -> Vec<StockUnit> {
    consist.stock().cloned().collect()
}

pub(crate) fn assert_mass_eq(actual: si::Mass, expected: si::Mass) {
    let (actual, expected) = (
        actual.get::<si::kilogram>(),
        expected.get::<si::kilogram>(),
    );
    assert!(
        almost_eq(actual, expected, None),
        "{} != {}",
        format_dbg!(actual),
        format_dbg!(expected)
    );
}
