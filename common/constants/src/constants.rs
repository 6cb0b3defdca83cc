#![no_std]

/// Basis points, 100%
pub const BPS: u64 = 10_000;

/// USD prices reported by the oracle carry 8 decimals
pub const PRICE_PRECISION: u64 = 100_000_000;
pub const PRICE_DECIMALS: u32 = 8;

/// Loan-to-value and liquidation thresholds are expressed in basis points
pub const LTV_PRECISION: u64 = 10_000;

/// Leverage multipliers carry 4 decimals, 30_000 = 3.0000x
pub const LEVERAGE_PRECISION: u64 = 10_000;

/// Borrow only 95% of what the LTV allows to absorb intra-transaction price moves
pub const BORROW_SAFETY_MARGIN_BPS: u64 = 9_500;

/// Extra collateral released on unwind to cover swap slippage (5%)
pub const UNWIND_SLIPPAGE_BUFFER_BPS: u64 = 500;

/// Health factor of exactly 1.0
pub const WAD: u64 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const REFERRAL_CODE: u16 = 0;

/// Aave style interest rate mode for variable debt
pub const VARIABLE_RATE_MODE: u8 = 2;

pub const EXECUTE_OPERATION_ENDPOINT: &[u8] = b"executeOperation";
