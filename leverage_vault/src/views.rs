use common_errors::ERROR_ASSET_NOT_COLLATERALIZABLE;
use common_structs::{LeverageQuote, PositionData};

use crate::{cache::Cache, math, oracle, pool, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + pool::PoolModule
    + math::LeverageMathModule
    + common_math::SharedMathModule
{
    #[view(getMaxLeverage)]
    fn get_max_leverage(&self, ltv: u64) -> u64 {
        self.max_leverage(ltv)
    }

    /// Max leverage for `asset` at its current pool LTV.
    #[view(getMaxLeverageForAsset)]
    fn get_max_leverage_for_asset(&self, asset: EgldOrEsdtTokenIdentifier) -> u64 {
        let lending_pool = self.lending_pool().get();
        let config = self.get_reserve_configuration(&lending_pool, &asset);
        require!(config.ltv > 0, ERROR_ASSET_NOT_COLLATERALIZABLE);

        self.max_leverage(config.ltv)
    }

    /// Sizes an OPEN for `quote`. Zero prices in the quote are read from the oracle.
    ///
    /// # Returns
    /// - `(flash_loan_amount, borrow_amount)`, arguments for `createPosition`.
    #[view(calculateOpenParams)]
    fn calculate_open_params(
        &self,
        quote: LeverageQuote<Self::Api>,
    ) -> MultiValue2<BigUint, BigUint> {
        let mut cache = Cache::new(self);

        let mut resolved = quote;
        resolved.collateral_price =
            cache.resolve_price(&resolved.collateral_token, &resolved.collateral_price);
        resolved.borrow_price = cache.resolve_price(&resolved.borrow_token, &resolved.borrow_price);

        let ltv = cache.get_cached_reserve(&resolved.collateral_token).ltv;
        require!(ltv > 0, ERROR_ASSET_NOT_COLLATERALIZABLE);

        let (flash_loan_amount, borrow_amount) =
            self.compute_open_params(&resolved, ltv, cache.flash_loan_fee_bps);

        (flash_loan_amount, borrow_amount).into()
    }

    /// Sizes a full UNWIND of the vault's `borrow_token` debt: the collateral
    /// equivalent of the debt plus a 5% slippage buffer.
    ///
    /// # Returns
    /// - `(collateral_to_withdraw, debt_amount)`, arguments for `unwindPosition`.
    #[view(calculateUnwindParams)]
    fn calculate_unwind_params(
        &self,
        collateral_token: EgldOrEsdtTokenIdentifier,
        borrow_token: EgldOrEsdtTokenIdentifier,
    ) -> MultiValue2<BigUint, BigUint> {
        let mut cache = Cache::new(self);

        let debt_amount =
            self.get_variable_debt(&cache.lending_pool, &borrow_token, &cache.sc_address);

        let collateral_price = cache.get_cached_price(&collateral_token);
        let borrow_price = cache.get_cached_price(&borrow_token);
        let collateral_decimals = cache.get_cached_reserve(&collateral_token).decimals;
        let borrow_decimals = cache.get_cached_reserve(&borrow_token).decimals;

        let collateral_to_withdraw = self.unwind_collateral_with_buffer(
            &debt_amount,
            &borrow_price,
            borrow_decimals,
            &collateral_price,
            collateral_decimals,
        );

        (collateral_to_withdraw, debt_amount).into()
    }

    /// The vault's aggregate position in the pool for one collateral/debt pair.
    #[view(getPositionData)]
    fn get_position_data(
        &self,
        collateral_token: EgldOrEsdtTokenIdentifier,
        debt_token: EgldOrEsdtTokenIdentifier,
    ) -> PositionData<Self::Api> {
        let lending_pool = self.lending_pool().get();
        let sc_address = self.blockchain().get_sc_address();

        PositionData {
            collateral_supplied: self.get_supplied(&lending_pool, &collateral_token, &sc_address),
            debt_outstanding: self.get_variable_debt(&lending_pool, &debt_token, &sc_address),
            account: self.get_account_data(&lending_pool, &sc_address),
            collateral_token,
            debt_token,
        }
    }

    #[view(getPriceOracle)]
    fn get_price_oracle(&self) -> OptionalValue<ManagedAddress> {
        let price_oracle = self.price_oracle();
        if price_oracle.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(price_oracle.get())
        }
    }
}
