use consist_core::prelude::*;
use consist_core::utils::almost_eq;

fn car(car_type: CarType, number: u32, length_m: f64) -> RollingStock {
    let mut car = RollingStock::preset(car_type, "NO", number, "yellow");
    car.length = length_m * uc::M;
    car
}

#[test]
fn test_that_zero_quantities_are_available_from_prelude() {
    let empty = Consist::new(3);
    assert_eq!(empty.length(), si::Length::ZERO);
    assert_eq!(empty.weight(), si::Mass::ZERO);
}

#[test]
fn test_split_and_reload_consist() {
    let a = car(CarType::Boxcar, 1, 10.);
    let b = car(CarType::Gondola, 2, 15.);
    let c = car(CarType::Gondola, 3, 20.);
    let mut west = consist![20; Locomotive::big_boy(4004), a, b.clone(), c];
    let length_before = west.length();

    let mut east = west.separate(&StockUnit::from(b)).unwrap();
    assert_eq!(east.number, 21);
    assert_eq!(west.len(), 2);
    assert_eq!(east.len(), 2);
    assert!(almost_eq(
        (west.length() + east.length()).get::<si::meter>(),
        length_before.get::<si::meter>(),
        None
    ));

    east.attach(Locomotive::big_boy(4014));
    let remaining = distribute_cargo(200. * uc::TONNE, &mut east, Some(CarType::Gondola));
    assert_eq!(remaining, 20. * uc::TONNE);
    assert!(east.rolling_stock().all(RollingStock::is_full));
    assert!(west.rolling_stock().all(RollingStock::is_empty));
}

#[test]
fn test_unloading_after_distribution() {
    let mut consist = consist![1; car(CarType::Hopper, 10, 18.), car(CarType::Hopper, 11, 18.)];
    distribute_cargo(150. * uc::TONNE, &mut consist, None);
    let (remaining, mut consist) = load_consist(si::Mass::ZERO, consist, None);
    assert_eq!(remaining, si::Mass::ZERO);

    let mut stock: Vec<StockUnit> = consist.clone().into_stock().into_iter().collect();
    let second = stock[1].as_rolling_stock_mut().unwrap();
    assert_eq!(second.fill_ratio().unwrap().get::<si::ratio>(), 0.5);
    assert_eq!(second.unload(0.5).unwrap(), 25. * uc::TONNE);
    assert_eq!(second.unload(1.0).unwrap(), 25. * uc::TONNE);
    assert_eq!(second.fill_ratio().unwrap().get::<si::ratio>(), 0.);

    consist = Consist::from_stock(consist.number, stock);
    assert_eq!(consist.weight(), 2. * CarType::Hopper.dry_mass() + 100. * uc::TONNE);
}

#[test]
fn test_random_consist_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("random.yaml");
    let config = RandomConsistConfig {
        car_range: (0, 6),
        car_types: vec![CarType::Gondola, CarType::Hopper],
        ..Default::default()
    };
    config.to_file(&config_path).unwrap();
    let config_de = RandomConsistConfig::from_file(&config_path).unwrap();
    assert_eq!(config_de, config);

    let mut consist =
        random_consist(Locomotive::big_boy(4004), 88, &config_de, &mut seeded_rng(5)).unwrap();
    assert_eq!(consist.rolling_stock().count(), 6);
    let remaining = distribute_cargo(1_000. * uc::TONNE, &mut consist, None);
    assert!(remaining > si::Mass::ZERO);
    let summary = consist.summary();
    assert!(summary.cars.iter().all(|fill| fill.fill_ratio == Some(1.)));
}

#[test]
fn test_consist_file_init_checks_mass() {
    let dir = tempfile::tempdir().unwrap();
    let consist = consist![3; Locomotive::default(), RollingStock::default()];
    let path = dir.path().join("consist.json");
    consist.to_file(&path).unwrap();
    let consist_de = Consist::from_file(&path).unwrap();
    assert_eq!(consist_de.len(), 2);
    assert_eq!(consist_de.number, 3);

    let bad_path = dir.path().join("consist.toml");
    assert!(consist.to_file(&bad_path).is_err());
    assert!(Consist::from_file(dir.path().join("missing.yaml")).is_err());
}

#[test]
fn test_describable_through_stock() {
    let consist = consist![4; Locomotive::big_boy(4004), RollingStock::default()];
    let infos: Vec<String> = consist.stock().map(|unit| unit.info()).collect();
    assert!(infos[0].starts_with("Name: Big Boy"));
    assert!(infos[1].starts_with("Car Type: Boxcar"));
    assert_eq!(
        consist.to_string(),
        "<< Consist #4:\n<Locomotive: 4000, UP, Big Boy #4004>\n<Boxcar: UP, brown #100> >>"
    );
}
