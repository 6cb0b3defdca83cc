#![no_std]

use common_constants::{BPS, WAD, WAD_PRECISION};

multiversx_sc::imports!();

/// Integer helpers shared by the vault and the lending pool mock.
/// Every division floors.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn pow10(&self, decimals: NumDecimals) -> BigUint {
        BigUint::from(10u64).pow(decimals as u32)
    }

    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        (a * b) / denominator
    }

    fn apply_bps(&self, amount: &BigUint, bps: u64) -> BigUint {
        self.mul_div_floor(amount, &BigUint::from(bps), &BigUint::from(BPS))
    }

    /// Token amount to USD at the oracle's 8 decimals.
    fn to_usd(&self, amount: &BigUint, price: &BigUint, decimals: NumDecimals) -> BigUint {
        self.mul_div_floor(amount, price, &self.pow10(decimals))
    }

    /// USD at 8 decimals back to a token amount.
    fn from_usd(&self, usd: &BigUint, price: &BigUint, decimals: NumDecimals) -> BigUint {
        self.mul_div_floor(usd, &self.pow10(decimals), price)
    }

    fn sub_or_zero(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn wad(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn get_min(self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
