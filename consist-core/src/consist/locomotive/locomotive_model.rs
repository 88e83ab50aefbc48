use super::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Powered unit with descriptive attributes only.  Locomotives never carry cargo.
///
/// There is no validation on these properties beyond [StockTrait::check_mass_consistent].
pub struct Locomotive {
    pub name: String,
    /// Owning railroad reporting mark, e.g. `UP`
    pub road: String,
    /// Locomotive class, e.g. `4000`
    pub class: String,
    pub number: u32,
    /// Locomotive length (between pulling-faces)
    pub length: si::Length,
    /// Locomotive mass in working order
    pub weight: si::Mass,
    /// Rated power
    pub power: si::Power,
    pub speed_max: si::Velocity,
}

impl SerdeAPI for Locomotive {
    fn init(&mut self) -> anyhow::Result<()> {
        self.check_mass_consistent()
    }
}

impl Locomotive {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        road: &str,
        class: &str,
        number: u32,
        length: si::Length,
        weight: si::Mass,
        power: si::Power,
        speed_max: si::Velocity,
    ) -> Self {
        Self {
            name: name.into(),
            road: road.into(),
            class: class.into(),
            number,
            length,
            weight,
            power,
            speed_max,
        }
    }

    /// Union Pacific 4000 class articulated steam locomotive, tender included.
    pub fn big_boy(number: u32) -> Self {
        Self::new(
            "Big Boy",
            "UP",
            "4000",
            number,
            40.47 * uc::M,
            548.3 * uc::TONNE,
            4_690. * uc::KW,
            80. * uc::MPH,
        )
    }
}

impl Default for Locomotive {
    fn default() -> Self {
        Self::big_boy(4014)
    }
}

impl StockTrait for Locomotive {
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
        ensure!(
            self.weight >= si::Mass::ZERO,
            "{}\nlocomotive {} has negative weight",
            format_dbg!(self.weight.get::<si::kilogram>()),
            self
        );
        Ok(())
    }
}

impl Describable for Locomotive {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Road", self.road.clone()),
            ("Class", self.class.clone()),
            ("Number", self.number.to_string()),
            ("Length", format!("{:.2} m", self.length.get::<si::meter>())),
            ("Weight", format!("{:.1} kg", self.weight.get::<si::kilogram>())),
            ("Power", format!("{:.1} kW", self.power.get::<si::kilowatt>())),
            (
                "Max Speed",
                format!("{:.1} km/h", self.speed_max.get::<si::kilometer_per_hour>()),
            ),
        ]
    }
}

impl fmt::Display for Locomotive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Locomotive: {}, {}, {} #{}>",
            self.class, self.road, self.name, self.number
        )
    }
}
