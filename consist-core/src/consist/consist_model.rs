use super::*;
use std::collections::VecDeque;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// An ordered train formation of locomotives and/or rolling stock.  Order matters;
/// any sequence of units is permitted.
pub struct Consist {
    /// Consist identifier.  Not guaranteed unique, see [Self::separate].
    pub number: u32,
    /// Units of the consist, front first
    stock: VecDeque<StockUnit>,
}

impl SerdeAPI for Consist {
    fn init(&mut self) -> anyhow::Result<()> {
        self.check_mass_consistent()
    }
}

impl Consist {
    /// Empty consist
    pub fn new(number: u32) -> Self {
        Self {
            number,
            stock: VecDeque::new(),
        }
    }

    /// Consist taking ownership of a single ordered sequence of units.  For a
    /// variable-length list of mixed units, see the [consist!](crate::consist!) macro.
    pub fn from_stock<I>(number: u32, stock: I) -> Self
    where
        I: IntoIterator<Item = StockUnit>,
    {
        Self {
            number,
            stock: stock.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Units in order, front first
    pub fn stock(&self) -> impl DoubleEndedIterator<Item = &StockUnit> + ExactSizeIterator {
        self.stock.iter()
    }

    pub(crate) fn stock_mut(&mut self) -> impl Iterator<Item = &mut StockUnit> {
        self.stock.iter_mut()
    }

    pub fn into_stock(self) -> VecDeque<StockUnit> {
        self.stock
    }

    pub fn get(&self, index: usize) -> Option<&StockUnit> {
        self.stock.get(index)
    }

    pub fn locomotives(&self) -> impl Iterator<Item = &Locomotive> {
        self.stock.iter().filter_map(StockUnit::as_locomotive)
    }

    pub fn rolling_stock(&self) -> impl Iterator<Item = &RollingStock> {
        self.stock.iter().filter_map(StockUnit::as_rolling_stock)
    }

    /// Attaches `unit` at the end of the consist.
    pub fn attach<U: Into<StockUnit>>(&mut self, unit: U) {
        self.stock.push_back(unit.into());
    }

    /// Position of the first unit equal to `unit`
    pub fn position(&self, unit: &StockUnit) -> Option<usize> {
        self.stock.iter().position(|u| u == unit)
    }

    /// Splits the consist in two.  `unit` becomes the lead unit of the new
    /// consist, i.e. the consist is separated _before_ `unit`.  Everything
    /// ahead of `unit` stays in `self`.
    ///
    /// Units are matched by equality, so the first of several identical units
    /// is the split point.  The new consist is numbered `self.number + 1`
    /// without any uniqueness check.
    ///
    /// # Errors
    /// [ConsistError::NotFound] if `unit` is not in the consist, in which case
    /// `self` is left untouched.
    pub fn separate(&mut self, unit: &StockUnit) -> ConsistResult<Consist> {
        let index = self.position(unit).ok_or_else(|| ConsistError::NotFound {
            unit: unit.to_string(),
            consist: self.number,
        })?;
        self.separate_at(index)
    }

    /// Same as [Self::separate] with the split point given by position.
    pub fn separate_at(&mut self, index: usize) -> ConsistResult<Consist> {
        if index >= self.stock.len() {
            return Err(ConsistError::NotFound {
                unit: format!("unit at position {index}"),
                consist: self.number,
            });
        }
        let number = self.number.checked_add(1).ok_or_else(|| {
            ConsistError::ArithmeticDegenerate(format!(
                "consist #{} cannot be numbered past u32::MAX",
                self.number
            ))
        })?;
        let stock = self.stock.split_off(index);
        log::info!(
            "separated {} unit(s) from consist #{} into consist #{}",
            stock.len(),
            self.number,
            number
        );
        Ok(Self { number, stock })
    }

    /// Total consist length
    pub fn length(&self) -> si::Length {
        self.stock
            .iter()
            .fold(si::Length::ZERO, |acc, unit| acc + unit.length())
    }

    /// Total consist weight, including cargo
    pub fn weight(&self) -> si::Mass {
        self.stock
            .iter()
            .fold(si::Mass::ZERO, |acc, unit| acc + unit.weight())
    }

    /// Lowest max speed of any unit, or `None` for an empty consist
    pub fn speed_max(&self) -> Option<si::Velocity> {
        self.stock
            .iter()
            .map(StockUnit::speed_max)
            .reduce(|a, b| if b < a { b } else { a })
    }

    pub fn check_mass_consistent(&self) -> anyhow::Result<()> {
        for (i, unit) in self.stock.iter().enumerate() {
            match unit.check_mass_consistent() {
                Ok(res) => res,
                Err(e) => bail!(
                    "{e}\n{}",
                    format!(
                        "{}\nfailed at unit {} of consist #{}",
                        format_dbg!(),
                        i,
                        self.number
                    )
                ),
            };
        }
        Ok(())
    }
}

impl fmt::Display for Consist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<< Consist #{}:", self.number)?;
        for unit in &self.stock {
            write!(f, "\n{unit}")?;
        }
        write!(f, " >>")
    }
}
