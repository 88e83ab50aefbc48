//! First-fit cargo distribution across the cars of a consist

use super::*;

/// Loads `cargo` into the consist, car by car in stock order, until either
/// no cargo remains or every eligible car is full.  Locomotives are always
/// skipped; with `car_type` given, so are cars of any other type.
///
/// Returns the cargo mass that could not be loaded.
pub fn distribute_cargo(
    cargo: si::Mass,
    consist: &mut Consist,
    car_type: Option<CarType>,
) -> si::Mass {
    distribute_cargo_with(cargo, consist, car_type, |_, _| {})
}

/// Same as [distribute_cargo], calling `on_load` with the stock position and
/// the car right after each car is loaded.
pub fn distribute_cargo_with<F>(
    cargo: si::Mass,
    consist: &mut Consist,
    car_type: Option<CarType>,
    mut on_load: F,
) -> si::Mass
where
    F: FnMut(usize, &RollingStock),
{
    let consist_number = consist.number;
    if !(cargo > si::Mass::ZERO) {
        log::debug!("no cargo to load into consist #{}", consist_number);
        return cargo;
    }
    let cargo_init = cargo;
    let mut cargo = cargo;
    for (i, unit) in consist.stock_mut().enumerate() {
        let car = match unit {
            StockUnit::RollingStock(car) => car,
            StockUnit::Locomotive(_) => continue,
        };
        if matches!(car_type, Some(car_type) if car_type != car.car_type) {
            continue;
        }
        if cargo == si::Mass::ZERO {
            break;
        }
        cargo = car.load(cargo);
        log::debug!(
            "loaded {} at position {}, {:.3} kg cargo remaining",
            car,
            i,
            cargo.get::<si::kilogram>()
        );
        on_load(i, car);
    }

    log::info!(
        "loaded {:.3} kg of cargo into consist #{}",
        (cargo_init - cargo).get::<si::kilogram>(),
        consist_number
    );
    if cargo > si::Mass::ZERO {
        log::warn!(
            "consist #{} is out of capacity with {:.3} kg of cargo remaining",
            consist_number,
            cargo.get::<si::kilogram>()
        );
    }
    cargo
}

/// By-value form of [distribute_cargo], returning the remaining cargo and the
/// loaded consist.
pub fn load_consist(
    cargo: si::Mass,
    mut consist: Consist,
    car_type: Option<CarType>,
) -> (si::Mass, Consist) {
    let remaining = distribute_cargo(cargo, &mut consist, car_type);
    (remaining, consist)
}
