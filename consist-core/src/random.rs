//! Assembly of randomized consists for simulation or demonstration.
//!
//! Seed with [seeded_rng] for reproducible output; any [rand::Rng] works.

use crate::consist::locomotive::Locomotive;
use crate::consist::rolling_stock::{CarType, RollingStock};
use crate::consist::Consist;
use crate::imports::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const COLORS: [&str; 9] = [
    "red", "blue", "yellow", "green", "brown", "white", "grey", "black", "orange",
];
pub const ROADS: [&str; 9] = ["UP", "NO", "SOO", "CSX", "CC", "TS", "BNSF", "ICG", "ED&T"];

/// Deterministic RNG for [random_consist]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Choices and ranges used by [random_consist].  Missing fields fall back to
/// [Default], so a config file only needs the fields it overrides.
pub struct RandomConsistConfig {
    /// Half-open range of car indices; one car is generated per index
    pub car_range: (usize, usize),
    /// Inclusive range of car numbers
    pub number_range: (u32, u32),
    pub colors: Vec<String>,
    pub roads: Vec<String>,
    pub car_types: Vec<CarType>,
}

impl Default for RandomConsistConfig {
    fn default() -> Self {
        Self {
            car_range: (1, 20),
            number_range: (100, 99_999),
            colors: COLORS.iter().map(|c| c.to_string()).collect(),
            roads: ROADS.iter().map(|r| r.to_string()).collect(),
            car_types: CarType::ALL.to_vec(),
        }
    }
}

impl SerdeAPI for RandomConsistConfig {
    fn init(&mut self) -> anyhow::Result<()> {
        self.validate()?;
        Ok(())
    }
}

impl RandomConsistConfig {
    /// Number of cars [random_consist] attaches behind the locomotive
    pub fn n_cars(&self) -> usize {
        self.car_range.1.saturating_sub(self.car_range.0)
    }

    pub fn validate(&self) -> ConsistResult<()> {
        if self.car_range.0 > self.car_range.1 {
            return Err(ConsistError::InvalidArgument(format!(
                "car range {:?} is inverted",
                self.car_range
            )));
        }
        if self.number_range.0 > self.number_range.1 {
            return Err(ConsistError::InvalidArgument(format!(
                "number range {:?} is inverted",
                self.number_range
            )));
        }
        for (name, is_empty) in [
            ("colors", self.colors.is_empty()),
            ("roads", self.roads.is_empty()),
            ("car_types", self.car_types.is_empty()),
        ] {
            if is_empty {
                return Err(ConsistError::InvalidArgument(format!(
                    "`{name}` must not be empty"
                )));
            }
        }
        Ok(())
    }
}

fn choose<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    rng: &mut R,
    name: &str,
) -> ConsistResult<&'a T> {
    items
        .choose(rng)
        .ok_or_else(|| ConsistError::InvalidArgument(format!("`{name}` must not be empty")))
}

/// Builds consist `number` led by `loco`, followed by
/// [RandomConsistConfig::n_cars] empty preset cars with random number, color,
/// road, and car type.
///
/// # Errors
/// [ConsistError::InvalidArgument] if `config` fails [RandomConsistConfig::validate].
pub fn random_consist<R: Rng + ?Sized>(
    loco: Locomotive,
    number: u32,
    config: &RandomConsistConfig,
    rng: &mut R,
) -> ConsistResult<Consist> {
    config.validate()?;
    let mut consist = Consist::new(number);
    consist.attach(loco);
    for _ in config.car_range.0..config.car_range.1 {
        let car_number = rng.gen_range(config.number_range.0..=config.number_range.1);
        let color = choose(&config.colors, &mut *rng, "colors")?;
        let road = choose(&config.roads, &mut *rng, "roads")?;
        let car_type = *choose(&config.car_types, &mut *rng, "car_types")?;
        consist.attach(RollingStock::preset(car_type, road, car_number, color));
    }
    log::info!(
        "generated consist #{} with {} unit(s), {:.2} m, {:.3} kg",
        consist.number,
        consist.len(),
        consist.length().get::<si::meter>(),
        consist.weight().get::<si::kilogram>()
    );
    Ok(consist)
}
