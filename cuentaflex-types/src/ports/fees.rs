//! Fee configuration port.

use rust_decimal::Decimal;

use crate::error::FeeError;

/// Read-only source of the fees charged per channel.
pub trait FeeSchedule: Send + Sync {
    /// Fee withheld from every deposit made at an ATM.
    fn deposit_from_atm_fee(&self) -> Result<Decimal, FeeError>;
}
