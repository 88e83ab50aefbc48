//! Read-only reporting view of a consist

use super::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Fill state of a single car
pub struct CarFill {
    pub car_type: CarType,
    pub number: u32,
    /// Fraction of capacity occupied, `None` for a car without capacity
    pub fill_ratio: Option<f64>,
}

impl From<&RollingStock> for CarFill {
    fn from(car: &RollingStock) -> Self {
        Self {
            car_type: car.car_type,
            number: car.number,
            fill_ratio: car.fill_ratio().ok().map(|r| r.get::<si::ratio>()),
        }
    }
}

impl fmt::Display for CarFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fill_ratio {
            None => write!(f, "{} {} has no capacity.", self.car_type, self.number),
            Some(r) if r == 0. => write!(f, "{} {} is empty.", self.car_type, self.number),
            Some(r) => write!(
                f,
                "{} {} is {:.1}% full.",
                self.car_type,
                self.number,
                r * 100.
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Totals and per-car fill of a consist
pub struct ConsistSummary {
    pub number: u32,
    pub n_locomotives: usize,
    pub n_cars: usize,
    pub length_meters: f64,
    pub weight_kilograms: f64,
    pub cars: Vec<CarFill>,
}

impl SerdeAPI for ConsistSummary {}

impl From<&Consist> for ConsistSummary {
    fn from(consist: &Consist) -> Self {
        let cars: Vec<CarFill> = consist.rolling_stock().map(CarFill::from).collect();
        Self {
            number: consist.number,
            n_locomotives: consist.locomotives().count(),
            n_cars: cars.len(),
            length_meters: consist.length().get::<si::meter>(),
            weight_kilograms: consist.weight().get::<si::kilogram>(),
            cars,
        }
    }
}

impl Consist {
    pub fn summary(&self) -> ConsistSummary {
        ConsistSummary::from(self)
    }
}

impl fmt::Display for ConsistSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Consist #{}: {} locomotive(s), {} car(s)",
            self.number, self.n_locomotives, self.n_cars
        )?;
        writeln!(f, "Consist Length: {:.2}[m]", self.length_meters)?;
        write!(f, "Consist Weight: {:.3}[kg]", self.weight_kilograms)?;
        for car in &self.cars {
            write!(f, "\n{car}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consist::cargo::distribute_cargo;
    use crate::testing::*;

    #[test]
    fn test_car_fill_display() {
        let mut car = test_car(20_000., 50_000., 0.);
        assert_eq!(CarFill::from(&car).to_string(), "Gondola 4321 is empty.");
        car.load(22_500. * uc::KG);
        assert_eq!(CarFill::from(&car).to_string(), "Gondola 4321 is 45.0% full.");
        let car = test_car(20_000., 0., 0.);
        assert_eq!(CarFill::from(&car).fill_ratio, None);
        assert_eq!(CarFill::from(&car).to_string(), "Gondola 4321 has no capacity.");
    }

    #[test]
    fn test_summary_counts_and_totals() {
        let mut consist = test_consist();
        distribute_cargo(35. * uc::TONNE, &mut consist, None);
        let summary = consist.summary();
        assert_eq!(summary.number, 42);
        assert_eq!(summary.n_locomotives, 1);
        assert_eq!(summary.n_cars, 4);
        assert!(almost_eq(
            summary.weight_kilograms,
            consist.weight().get::<si::kilogram>(),
            None
        ));
        assert_eq!(summary.cars[0].fill_ratio, Some(0.5));
        assert_eq!(summary.cars[1].fill_ratio, Some(0.));
        let text = summary.to_string();
        assert!(text.contains("Boxcar 1000 is 50.0% full."));
        assert!(text.contains("Flatcar 1003 is empty."));
    }

    #[test]
    fn test_summary_json() {
        let summary = test_consist().summary();
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"n_cars\":4"));
        let summary_de = ConsistSummary::from_json(&json).unwrap();
        assert_eq!(summary_de.cars, summary.cars);
        assert!(almost_eq(summary_de.length_meters, summary.length_meters, None));
    }
}
