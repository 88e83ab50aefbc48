use super::*;
use std::str::FromStr;

/// Category of cargo-carrying car
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarType {
    Boxcar,
    Gondola,
    Hopper,
    Flatcar,
}

impl CarType {
    pub const ALL: [CarType; 4] = [Self::Boxcar, Self::Gondola, Self::Hopper, Self::Flatcar];

    /// Preset car length (between pulling-faces)
    pub fn length(&self) -> si::Length {
        match self {
            Self::Boxcar => 15.7 * uc::M,
            Self::Gondola => 16.2 * uc::M,
            Self::Hopper => 18.0 * uc::M,
            Self::Flatcar => 19.0 * uc::M,
        }
    }

    /// Preset empty mass
    pub fn dry_mass(&self) -> si::Mass {
        match self {
            Self::Boxcar => 30. * uc::TONNE,
            Self::Gondola => 27. * uc::TONNE,
            Self::Hopper => 28. * uc::TONNE,
            Self::Flatcar => 25. * uc::TONNE,
        }
    }

    /// Preset cargo capacity
    pub fn capacity(&self) -> si::Mass {
        match self {
            Self::Boxcar => 70. * uc::TONNE,
            Self::Gondola => 90. * uc::TONNE,
            Self::Hopper => 100. * uc::TONNE,
            Self::Flatcar => 80. * uc::TONNE,
        }
    }

    pub fn speed_max(&self) -> si::Velocity {
        match self {
            Self::Hopper => 60. * uc::MPH,
            _ => 70. * uc::MPH,
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boxcar => "Boxcar",
            Self::Gondola => "Gondola",
            Self::Hopper => "Hopper",
            Self::Flatcar => "Flatcar",
        };
        f.write_str(name)
    }
}

impl FromStr for CarType {
    type Err = ConsistError;

    /// Case-insensitive, e.g. `"gondola"` and `"GONDOLA"` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = utils::title_case(s.trim());
        Self::ALL
            .into_iter()
            .find(|car_type| car_type.to_string() == name)
            .ok_or_else(|| ConsistError::InvalidArgument(format!("unknown car type `{s}`")))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A car holding goods, which can be pulled by a locomotive.
///
/// Mass bookkeeping keeps `dry_mass <= weight <= dry_mass + capacity` across every
/// [Self::load] and [Self::unload].  Construction is not validated; run
/// [StockTrait::check_mass_consistent] when the inputs are untrusted.
pub struct RollingStock {
    pub car_type: CarType,
    /// Owning railroad reporting mark
    pub road: String,
    pub number: u32,
    pub color: String,
    /// Railcar length (between pulling-faces)
    pub length: si::Length,
    /// Railcar empty mass (excluding freight)
    pub dry_mass: si::Mass,
    /// Maximum freight mass
    pub capacity: si::Mass,
    /// Current total mass, i.e. `dry_mass` plus freight
    weight: si::Mass,
    pub speed_max: si::Velocity,
}

impl SerdeAPI for RollingStock {
    fn init(&mut self) -> anyhow::Result<()> {
        self.check_mass_consistent()
    }
}

impl RollingStock {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        car_type: CarType,
        road: &str,
        number: u32,
        color: &str,
        length: si::Length,
        dry_mass: si::Mass,
        capacity: si::Mass,
        load_mass: si::Mass,
        speed_max: si::Velocity,
    ) -> Self {
        Self {
            car_type,
            road: road.into(),
            number,
            color: color.into(),
            length,
            dry_mass,
            capacity,
            weight: dry_mass + load_mass,
            speed_max,
        }
    }

    /// Empty car with the preset dimensions of `car_type`
    pub fn preset(car_type: CarType, road: &str, number: u32, color: &str) -> Self {
        Self::new(
            car_type,
            road,
            number,
            color,
            car_type.length(),
            car_type.dry_mass(),
            car_type.capacity(),
            si::Mass::ZERO,
            car_type.speed_max(),
        )
    }

    /// Mass of freight currently on board
    pub fn load_mass(&self) -> si::Mass {
        self.weight - self.dry_mass
    }

    /// Freight mass that can still be accepted, zero once the car is full
    pub fn free_capacity(&self) -> si::Mass {
        if self.is_full() {
            return si::Mass::ZERO;
        }
        let free_capacity = self.capacity - self.load_mass();
        if free_capacity > si::Mass::ZERO {
            free_capacity
        } else {
            si::Mass::ZERO
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weight <= self.dry_mass
    }

    pub fn is_full(&self) -> bool {
        self.weight >= self.dry_mass + self.capacity
    }

    /// Fraction of capacity currently occupied by freight, in `[0, 1]`.
    ///
    /// # Errors
    /// [ConsistError::ArithmeticDegenerate] if capacity is not positive.
    pub fn fill_ratio(&self) -> ConsistResult<si::Ratio> {
        if !(self.capacity > si::Mass::ZERO) {
            return Err(ConsistError::ArithmeticDegenerate(format!(
                "{self} has no capacity, fill ratio is undefined"
            )));
        }
        Ok(self.load_mass() / self.capacity)
    }

    /// Loads `mass` of freight, returning whatever could not be absorbed.
    ///
    /// Non-positive `mass` is treated as nothing to load and returns zero.
    /// If `mass` exceeds [Self::free_capacity], the car is filled exactly to
    /// capacity and the excess is returned as overflow.
    pub fn load(&mut self, mass: si::Mass) -> si::Mass {
        if !(mass > si::Mass::ZERO) {
            return si::Mass::ZERO;
        }
        let free_capacity = self.free_capacity();
        let weight_max = self.dry_mass + self.capacity;
        if mass < free_capacity {
            self.weight = self.weight + mass;
            // guard against round-off pushing past capacity
            if self.weight > weight_max {
                self.weight = weight_max;
            }
            si::Mass::ZERO
        } else {
            self.weight = weight_max;
            let overflow = mass - free_capacity;
            if overflow > si::Mass::ZERO {
                log::debug!(
                    "{} full, {:.3} kg overflow",
                    self,
                    overflow.get::<si::kilogram>()
                );
            }
            overflow
        }
    }

    /// Unloads `fraction` of the freight currently on board and returns the
    /// mass removed.  `fraction` above 1 is capped so that no more than the
    /// current load is removed.  Fractions are not clamped to the fill
    /// ratio: `unload(0.8)` on a car at 60 % fill removes 80 % of its load.
    ///
    /// # Errors
    /// [ConsistError::InvalidArgument] if `fraction` is negative or NaN.
    pub fn unload(&mut self, fraction: f64) -> ConsistResult<si::Mass> {
        if !(fraction >= 0.) {
            return Err(ConsistError::InvalidArgument(format!(
                "unload fraction must be non-negative, got {fraction}"
            )));
        }
        let load_mass = self.load_mass();
        if fraction >= 1. {
            self.weight = self.dry_mass;
            return Ok(load_mass);
        }
        let removed = fraction * load_mass;
        self.weight = self.weight - removed;
        if self.weight < self.dry_mass {
            self.weight = self.dry_mass;
        }
        Ok(removed)
    }

    /// Removes all freight, returning the mass removed.
    pub fn unload_all(&mut self) -> si::Mass {
        let load_mass = self.load_mass();
        self.weight = self.dry_mass;
        load_mass
    }
}

impl Default for RollingStock {
    fn default() -> Self {
        Self::preset(CarType::Boxcar, "UP", 100, "brown")
    }
}

impl StockTrait for RollingStock {
    fn length(&self) -> si::Length {
        self.length
    }

    fn weight(&self) -> si::Mass {
        self.weight
    }

    fn speed_max(&self) -> si::Velocity {
        self.speed_max
    }

    fn check_mass_consistent(&self) -> anyhow::Result<()> {
        let dry_mass = self.dry_mass.get::<si::kilogram>();
        let weight = self.weight.get::<si::kilogram>();
        let weight_max = (self.dry_mass + self.capacity).get::<si::kilogram>();
        ensure!(
            dry_mass >= 0. && self.capacity >= si::Mass::ZERO,
            "{}\n{} has negative dry mass or capacity",
            format_dbg!((dry_mass, self.capacity.get::<si::kilogram>())),
            self
        );
        if almost_lt(weight, dry_mass, None) {
            bail!(
                "{}\n{} weighs less than its dry mass ({} kg)",
                format_dbg!(weight),
                self,
                dry_mass
            );
        }
        if almost_gt(weight, weight_max, None) {
            bail!(
                "{}\n{} weighs more than dry mass plus capacity ({} kg)",
                format_dbg!(weight),
                self,
                weight_max
            );
        }
        Ok(())
    }
}

impl Describable for RollingStock {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Car Type", self.car_type.to_string()),
            ("Road", self.road.clone()),
            ("Number", self.number.to_string()),
            ("Color", self.color.clone()),
            ("Length", format!("{:.2} m", self.length.get::<si::meter>())),
            ("Dry Mass", format!("{:.1} kg", self.dry_mass.get::<si::kilogram>())),
            ("Weight", format!("{:.1} kg", self.weight.get::<si::kilogram>())),
            ("Capacity", format!("{:.1} kg", self.capacity.get::<si::kilogram>())),
            (
                "Max Speed",
                format!("{:.1} km/h", self.speed_max.get::<si::kilometer_per_hour>()),
            ),
        ]
    }
}

impl fmt::Display for RollingStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}: {}, {} #{}>",
            self.car_type, self.road, self.color, self.number
        )
    }
}
