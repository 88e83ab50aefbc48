pub use crate::consist;
pub use crate::consist::cargo::{distribute_cargo, distribute_cargo_with, load_consist};
pub use crate::consist::consist_summary::{CarFill, ConsistSummary};
pub use crate::consist::locomotive::Locomotive;
pub use crate::consist::rolling_stock::{CarType, RollingStock};
pub use crate::consist::{Consist, StockTrait, StockUnit};
pub use crate::error::{ConsistError, ConsistResult};
pub use crate::random::{random_consist, seeded_rng, RandomConsistConfig};
pub use crate::si;
pub use crate::traits::{Describable, SerdeAPI};
pub use crate::uc;
pub use uom::ConstZero;
