multiversx_sc::imports!();

use common_constants::{
    BORROW_SAFETY_MARGIN_BPS, BPS, LEVERAGE_PRECISION, LTV_PRECISION, UNWIND_SLIPPAGE_BUFFER_BPS,
};
use common_errors::{
    ERROR_ASSET_NOT_COLLATERALIZABLE, ERROR_INSUFFICIENT_REPAYMENT_CAPACITY, ERROR_INVALID_LEVERAGE,
    ERROR_INVALID_LTV, ERROR_INVALID_PRICE, ERROR_LEVERAGE_EXCEEDS_MAXIMUM,
};
use common_structs::LeverageQuote;

/// Position sizing. No storage reads and no calls, every input is explicit and
/// every division floors.
#[multiversx_sc::module]
pub trait LeverageMathModule: common_math::SharedMathModule {
    /// `1 / (1 - ltv)` with 4 decimals, the leverage reached by looping
    /// supply and borrow forever.
    ///
    /// # Errors
    /// - `ERROR_INVALID_LTV`: `ltv` is zero or not below 100%.
    fn max_leverage(&self, ltv: u64) -> u64 {
        require!(ltv > 0 && ltv < LTV_PRECISION, ERROR_INVALID_LTV);
        LEVERAGE_PRECISION * LEVERAGE_PRECISION / (LTV_PRECISION - ltv)
    }

    fn require_leverage_in_range(&self, desired_leverage: u64, ltv: u64) {
        require!(
            desired_leverage >= LEVERAGE_PRECISION,
            ERROR_INVALID_LEVERAGE
        );
        let max_leverage = self.max_leverage(ltv);
        require!(
            desired_leverage <= max_leverage,
            ERROR_LEVERAGE_EXCEEDS_MAXIMUM
        );
    }

    /// Extra collateral to flash borrow so that `collateral * leverage` ends up supplied.
    fn flash_loan_amount(&self, collateral_amount: &BigUint, desired_leverage: u64) -> BigUint {
        self.mul_div_floor(
            collateral_amount,
            &BigUint::from(desired_leverage - LEVERAGE_PRECISION),
            &BigUint::from(LEVERAGE_PRECISION),
        )
    }

    /// Sizes an OPEN. `quote` must carry resolved prices.
    ///
    /// Returns `(flash_loan_amount, borrow_amount)`. The borrow is the LTV
    /// capacity of the total supplied collateral minus a 5% safety margin,
    /// and its value has to cover the flash loan plus `fee_bps`.
    fn compute_open_params(
        &self,
        quote: &LeverageQuote<Self::Api>,
        ltv: u64,
        fee_bps: u64,
    ) -> (BigUint, BigUint) {
        require!(
            quote.collateral_price > 0 && quote.borrow_price > 0,
            ERROR_INVALID_PRICE
        );
        self.require_leverage_in_range(quote.desired_leverage, ltv);

        let flash_loan_amount =
            self.flash_loan_amount(&quote.collateral_amount, quote.desired_leverage);
        let total_collateral = &quote.collateral_amount + &flash_loan_amount;

        let total_collateral_usd = self.to_usd(
            &total_collateral,
            &quote.collateral_price,
            quote.collateral_decimals,
        );
        let borrow_usd = self.mul_div_floor(
            &total_collateral_usd,
            &BigUint::from(ltv * BORROW_SAFETY_MARGIN_BPS),
            &BigUint::from(LTV_PRECISION * BPS),
        );
        let borrow_amount =
            self.from_usd(&borrow_usd, &quote.borrow_price, quote.borrow_decimals);

        let borrow_in_collateral = self.collateral_equivalent(
            &borrow_amount,
            &quote.borrow_price,
            quote.borrow_decimals,
            &quote.collateral_price,
            quote.collateral_decimals,
        );
        let required = &flash_loan_amount + &self.apply_bps(&flash_loan_amount, fee_bps);
        require!(
            borrow_in_collateral >= required,
            ERROR_INSUFFICIENT_REPAYMENT_CAPACITY
        );

        (flash_loan_amount, borrow_amount)
    }

    /// Price-implied amount of collateral worth `debt_amount`, floored once.
    fn collateral_equivalent(
        &self,
        debt_amount: &BigUint,
        debt_price: &BigUint,
        debt_decimals: usize,
        collateral_price: &BigUint,
        collateral_decimals: usize,
    ) -> BigUint {
        self.mul_div_floor(
            &(debt_amount * debt_price),
            &self.pow10(collateral_decimals),
            &(collateral_price * &self.pow10(debt_decimals)),
        )
    }

    /// Collateral equivalent of the debt plus a 5% buffer for swap slippage.
    fn unwind_collateral_with_buffer(
        &self,
        debt_amount: &BigUint,
        debt_price: &BigUint,
        debt_decimals: usize,
        collateral_price: &BigUint,
        collateral_decimals: usize,
    ) -> BigUint {
        require!(
            *debt_price > 0 && *collateral_price > 0,
            ERROR_INVALID_PRICE
        );
        let equivalent = self.collateral_equivalent(
            debt_amount,
            debt_price,
            debt_decimals,
            collateral_price,
            collateral_decimals,
        );
        self.apply_bps(&equivalent, BPS + UNWIND_SLIPPAGE_BUFFER_BPS)
    }

    /// Collateral that backs `debt_amount` at the liquidation threshold, i.e. the
    /// amount that can leave the pool once that debt is repaid.
    ///
    /// # Errors
    /// - `ERROR_ASSET_NOT_COLLATERALIZABLE`: the threshold is zero.
    fn collateral_backing_debt(
        &self,
        debt_amount: &BigUint,
        debt_price: &BigUint,
        debt_decimals: usize,
        liquidation_threshold: u64,
        collateral_price: &BigUint,
        collateral_decimals: usize,
    ) -> BigUint {
        require!(liquidation_threshold > 0, ERROR_ASSET_NOT_COLLATERALIZABLE);
        require!(
            *debt_price > 0 && *collateral_price > 0,
            ERROR_INVALID_PRICE
        );

        self.mul_div_floor(
            &(debt_amount * debt_price * BigUint::from(LTV_PRECISION)),
            &self.pow10(collateral_decimals),
            &(collateral_price
                * &self.pow10(debt_decimals)
                * BigUint::from(liquidation_threshold)),
        )
    }
}
