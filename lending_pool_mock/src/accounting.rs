use common_constants::{BPS, WAD};
use common_errors::{ERROR_PRICE_NOT_FOUND, ERROR_RESERVE_NOT_FOUND};
use common_proxies::proxy_price_oracle;
use common_structs::{AccountData, ReserveConfiguration};

use crate::storage;

multiversx_sc::imports!();

/// USD values at 8 decimals, weighted sums are still scaled by BPS.
pub struct AccountTotals<M: ManagedTypeApi> {
    pub collateral: BigUint<M>,
    pub debt: BigUint<M>,
    pub weighted_ltv: BigUint<M>,
    pub weighted_threshold: BigUint<M>,
}

#[multiversx_sc::module]
pub trait AccountingModule: storage::Storage + common_math::SharedMathModule {
    fn require_reserve(&self, asset: &EgldOrEsdtTokenIdentifier) -> ReserveConfiguration {
        let mapper = self.reserve_config(asset);
        require!(!mapper.is_empty(), ERROR_RESERVE_NOT_FOUND);
        mapper.get()
    }

    fn asset_price(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let price = self
            .tx()
            .to(self.price_oracle().get())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_price(asset)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(price > 0, ERROR_PRICE_NOT_FOUND);
        price
    }

    fn account_totals(&self, user: &ManagedAddress) -> AccountTotals<Self::Api> {
        let mut totals = AccountTotals {
            collateral: BigUint::zero(),
            debt: BigUint::zero(),
            weighted_ltv: BigUint::zero(),
            weighted_threshold: BigUint::zero(),
        };

        for asset in self.reserves().iter() {
            let supplied = self.user_supply(user, &asset).get();
            let debt = self.user_debt(user, &asset).get();
            if supplied == 0 && debt == 0 {
                continue;
            }

            let config = self.reserve_config(&asset).get();
            let price = self.asset_price(&asset);

            if supplied > 0 {
                let value = self.to_usd(&supplied, &price, config.decimals);
                totals.weighted_ltv += &value * &BigUint::from(config.ltv);
                totals.weighted_threshold += &value * &BigUint::from(config.liquidation_threshold);
                totals.collateral += value;
            }
            if debt > 0 {
                totals.debt += self.to_usd(&debt, &price, config.decimals);
            }
        }

        totals
    }

    /// Health factor is WAD scaled and saturates when there is no debt.
    fn account_data(&self, user: &ManagedAddress) -> AccountData<Self::Api> {
        let totals = self.account_totals(user);
        let bps = BigUint::from(BPS);

        let (ltv, current_liquidation_threshold) = if totals.collateral == 0 {
            (0, 0)
        } else {
            (
                (&totals.weighted_ltv / &totals.collateral)
                    .to_u64()
                    .unwrap_or_default(),
                (&totals.weighted_threshold / &totals.collateral)
                    .to_u64()
                    .unwrap_or_default(),
            )
        };

        let max_debt = &totals.weighted_ltv / &bps;
        let available_borrows_base = self.sub_or_zero(&max_debt, &totals.debt);

        let health_factor = if totals.debt == 0 {
            BigUint::from_bytes_be(&u128::MAX.to_be_bytes())
        } else {
            self.mul_div_floor(
                &totals.weighted_threshold,
                &BigUint::from(WAD),
                &(&totals.debt * &bps),
            )
        };

        AccountData {
            total_collateral_base: totals.collateral,
            total_debt_base: totals.debt,
            available_borrows_base,
            current_liquidation_threshold,
            ltv,
            health_factor,
        }
    }

    fn is_healthy(&self, user: &ManagedAddress) -> bool {
        let totals = self.account_totals(user);
        totals.weighted_threshold >= &totals.debt * &BigUint::from(BPS)
    }

    fn is_within_borrow_capacity(&self, user: &ManagedAddress) -> bool {
        let totals = self.account_totals(user);
        totals.weighted_ltv >= &totals.debt * &BigUint::from(BPS)
    }
}
