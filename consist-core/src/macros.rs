#[macro_export]
/// Generates a String similar to output of `dbg` but without printing
macro_rules! format_dbg {
    ($dbg_expr:expr) => {
        format!(
            "[{}:{}] {}: {:?}",
            file!(),
            line!(),
            stringify!($dbg_expr),
            $dbg_expr
        )
    };
    () => {
        format!("[{}:{}]", file!(), line!())
    };
}

/// Builds a [Consist](crate::consist::Consist) from a consist number and a
/// variable-length list of units, each of which is converted with
/// `Into<StockUnit>`.
/// ```
/// # use consist_core::prelude::*;
/// let consist = consist![7; Locomotive::big_boy(4014), RollingStock::default()];
/// assert_eq!(consist.len(), 2);
/// assert!(consist![8].is_empty());
/// ```
#[macro_export]
macro_rules! consist {
    ($number:expr) => {
        $crate::consist::Consist::new($number)
    };
    ($number:expr; $($unit:expr),* $(,)?) => {
        $crate::consist::Consist::from_stock(
            $number,
            [$($crate::consist::StockUnit::from($unit)),*],
        )
    };
}
