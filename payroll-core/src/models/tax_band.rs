use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Inclusive upper bound of the band; `None` marks the unbounded top band.
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}
