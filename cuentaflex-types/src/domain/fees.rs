//! Transaction fee configuration.

use rust_decimal::Decimal;

use crate::error::FeeError;
use crate::ports::FeeSchedule;

/// Fee amounts charged per transaction channel.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeesValues {
    deposit_from_atm: Option<Decimal>,
}

impl FeesValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deposit_from_atm(mut self, fee: Decimal) -> Self {
        self.deposit_from_atm = Some(fee);
        self
    }
}

impl FeeSchedule for FeesValues {
    fn deposit_from_atm_fee(&self) -> Result<Decimal, FeeError> {
        self.deposit_from_atm
            .ok_or(FeeError::NotConfigured("deposit_from_atm"))
    }
}
