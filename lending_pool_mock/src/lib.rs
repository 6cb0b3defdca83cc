#![no_std]

multiversx_sc::imports!();

pub mod accounting;
pub mod events;
pub mod storage;

use common_constants::{EXECUTE_OPERATION_ENDPOINT, LTV_PRECISION};
use common_errors::*;
use common_structs::{AccountData, ReserveConfiguration};

/// Single-market lending pool with simple flash loans. Positions are tracked per
/// caller address with no interest accrual and no liquidations.
#[multiversx_sc::contract]
pub trait LendingPoolMock:
    storage::Storage
    + accounting::AccountingModule
    + events::PoolEventsModule
    + common_math::SharedMathModule
{
    #[init]
    fn init(&self, price_oracle: ManagedAddress, flash_loan_premium_bps: u64) {
        require!(!price_oracle.is_zero(), ERROR_INVALID_ADDRESS);
        require!(flash_loan_premium_bps < LTV_PRECISION, ERROR_FEE_OUT_OF_RANGE);

        self.price_oracle().set(price_oracle);
        self.flash_loan_premium_bps().set(flash_loan_premium_bps);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addReserve)]
    fn add_reserve(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        decimals: usize,
        ltv: u64,
        liquidation_threshold: u64,
        liquidation_bonus: u64,
    ) {
        require!(
            self.reserve_config(&asset).is_empty(),
            ERROR_RESERVE_ALREADY_EXISTS
        );

        let config = ReserveConfiguration {
            decimals,
            ltv,
            liquidation_threshold,
            liquidation_bonus,
            usage_as_collateral_enabled: ltv > 0,
            borrowing_enabled: true,
            is_active: true,
        };
        require!(
            config.has_valid_thresholds(),
            ERROR_INVALID_LIQUIDATION_THRESHOLD
        );

        self.reserves().insert(asset.clone());
        self.reserve_config(&asset).set(config);
    }

    #[only_owner]
    #[endpoint(setReserveThresholds)]
    fn set_reserve_thresholds(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        ltv: u64,
        liquidation_threshold: u64,
    ) {
        let mut config = self.require_reserve(&asset);
        config.ltv = ltv;
        config.liquidation_threshold = liquidation_threshold;
        config.usage_as_collateral_enabled = ltv > 0;
        require!(
            config.has_valid_thresholds(),
            ERROR_INVALID_LIQUIDATION_THRESHOLD
        );

        self.reserve_config(&asset).set(config);
    }

    #[only_owner]
    #[endpoint(setFlashLoanPremium)]
    fn set_flash_loan_premium(&self, premium_bps: u64) {
        require!(premium_bps < LTV_PRECISION, ERROR_FEE_OUT_OF_RANGE);
        self.flash_loan_premium_bps().set(premium_bps);
    }

    // Simulates a pool that accepts the request but never calls the receiver
    #[only_owner]
    #[endpoint(setSkipReceiverCallback)]
    fn set_skip_receiver_callback(&self, skip: bool) {
        self.skip_receiver_callback().set(skip);
    }

    /// Lends `amount` of `asset` to `receiver` and calls its `executeOperation`
    /// in the same transaction. The receiver must return `true` and leave the
    /// pool richer by at least the premium.
    #[endpoint(flashLoanSimple)]
    fn flash_loan_simple(
        &self,
        receiver: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        params: ManagedBuffer,
        referral_code: u16,
    ) {
        self.require_reserve(&asset);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let balance_before = self.blockchain().get_sc_balance(&asset, 0);
        require!(balance_before >= amount, ERROR_INSUFFICIENT_LIQUIDITY);

        if self.skip_receiver_callback().get() {
            return;
        }

        let initiator = self.blockchain().get_caller();
        let premium = self.apply_bps(&amount, self.flash_loan_premium_bps().get());
        let idle_before = self.sub_or_zero(&balance_before, &self.reserve_liquidity(&asset).get());

        let accepted = self
            .tx()
            .to(&receiver)
            .raw_call(EXECUTE_OPERATION_ENDPOINT)
            .argument(&asset)
            .argument(&amount)
            .argument(&premium)
            .argument(&initiator)
            .argument(&params)
            .egld_or_single_esdt(&asset, 0, &amount)
            .original_result::<bool>()
            .returns(ReturnsResult)
            .sync_call();
        require!(accepted, ERROR_FLASHLOAN_REJECTED);

        // Supplies made during the callback are owed back to the receiver,
        // only the balance above the accounted liquidity repays the loan.
        let balance_after = self.blockchain().get_sc_balance(&asset, 0);
        let liquidity_after = self.reserve_liquidity(&asset).get();
        require!(
            balance_after >= liquidity_after + idle_before + &premium,
            ERROR_INVALID_FLASHLOAN_REPAYMENT
        );

        self.flash_loan_event(&receiver, &initiator, &asset, &amount, &premium, referral_code);
    }

    #[payable]
    #[endpoint(supply)]
    fn supply(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        self.require_reserve(&payment.token_identifier);
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        self.user_supply(&caller, &payment.token_identifier)
            .update(|supplied| *supplied += &payment.amount);
        self.reserve_liquidity(&payment.token_identifier)
            .update(|liquidity| *liquidity += &payment.amount);

        self.supply_event(&caller, &payment.token_identifier, &payment.amount);
    }

    #[endpoint(borrow)]
    fn borrow(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint, interest_rate_mode: u8) {
        let config = self.require_reserve(&asset);
        require!(config.can_borrow(), ERROR_RESERVE_NOT_FOUND);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(
            self.reserve_liquidity(&asset).get() >= amount,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        let caller = self.blockchain().get_caller();
        self.user_debt(&caller, &asset)
            .update(|debt| *debt += &amount);
        require!(
            self.is_within_borrow_capacity(&caller),
            ERROR_INSUFFICIENT_COLLATERAL
        );

        self.reserve_liquidity(&asset)
            .update(|liquidity| *liquidity -= &amount);
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&asset, 0, &amount)
            .transfer();

        self.borrow_event(&caller, &asset, &amount, interest_rate_mode);
    }

    #[payable]
    #[endpoint(repay)]
    fn repay(&self) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        self.require_reserve(&payment.token_identifier);
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        let debt_mapper = self.user_debt(&caller, &payment.token_identifier);
        let debt = debt_mapper.get();
        require!(payment.amount <= debt, ERROR_REPAY_EXCEEDS_DEBT);

        debt_mapper.set(&debt - &payment.amount);
        self.reserve_liquidity(&payment.token_identifier)
            .update(|liquidity| *liquidity += &payment.amount);

        self.repay_event(&caller, &payment.token_identifier, &payment.amount);
        payment.amount.clone()
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        self.require_reserve(&asset);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        let supply_mapper = self.user_supply(&caller, &asset);
        let supplied = supply_mapper.get();
        require!(supplied >= amount, ERROR_INSUFFICIENT_DEPOSIT);
        require!(
            self.reserve_liquidity(&asset).get() >= amount,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        supply_mapper.set(&supplied - &amount);
        require!(self.is_healthy(&caller), ERROR_HEALTH_FACTOR_WITHDRAW);

        self.reserve_liquidity(&asset)
            .update(|liquidity| *liquidity -= &amount);
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&asset, 0, &amount)
            .transfer();

        self.withdraw_event(&caller, &asset, &amount);
        amount
    }

    #[view(getUserAccountData)]
    fn get_user_account_data(&self, user: ManagedAddress) -> AccountData<Self::Api> {
        self.account_data(&user)
    }

    #[view(getReserveConfigurationData)]
    fn get_reserve_configuration_data(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ReserveConfiguration {
        self.require_reserve(&asset)
    }

    #[view(getUserVariableDebt)]
    fn get_user_variable_debt(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> BigUint {
        self.user_debt(&user, &asset).get()
    }

    #[view(getUserSupply)]
    fn get_user_supply(&self, asset: EgldOrEsdtTokenIdentifier, user: ManagedAddress) -> BigUint {
        self.user_supply(&user, &asset).get()
    }
}
