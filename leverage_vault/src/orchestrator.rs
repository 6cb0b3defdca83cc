multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_BORROW_TOKEN_RESIDUE_DETECTED,
    ERROR_FLASH_LOAN_CALLBACK_NOT_EXECUTED, ERROR_FOREIGN_INITIATOR,
    ERROR_INSUFFICIENT_SWAP_PROCEEDS, ERROR_INVALID_FLASH_LOAN_PAYMENT,
    ERROR_NO_PENDING_FLASH_LOAN, ERROR_UNAUTHORIZED_CALLBACK, ERROR_UNHEALTHY_POSITION,
};
use common_structs::{
    FlashLoanOperation, FlashLoanParams, FlashLoanState, OpenRequest, UnwindRequest,
};

use crate::{cache::Cache, math, oracle, pool, storage, swaps, validation};

/// Flash loan driven state machine:
/// `Idle -> LoanRequested -> CallbackExecuting -> Idle`.
/// Any failure reverts the whole transaction, so a persisted state other than
/// `Idle` is only ever observed from inside the callback.
#[multiversx_sc::module]
pub trait OrchestratorModule:
    storage::Storage
    + oracle::OracleModule
    + pool::PoolModule
    + swaps::SwapsModule
    + math::LeverageMathModule
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Requests `amount` of `token_id` from the lending pool with `params` as the
    /// opaque payload, then checks that the pool did call back.
    fn run_flash_loan(
        &self,
        cache: &Cache<Self>,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        params: &FlashLoanParams<Self::Api>,
    ) {
        let encoded = self.serializer().top_encode_to_managed_buffer(params);
        let is_open = matches!(params.operation, FlashLoanOperation::Open(_));

        self.flash_loan_state().set(FlashLoanState::LoanRequested);
        self.flash_loan_requested_event(&params.requester, token_id, amount, is_open);

        self.request_flash_loan(
            &cache.lending_pool,
            &cache.sc_address,
            token_id,
            amount,
            encoded,
        );

        require!(
            self.flash_loan_state().get() == FlashLoanState::CallbackExecuting,
            ERROR_FLASH_LOAN_CALLBACK_NOT_EXECUTED
        );
        self.flash_loan_state().set(FlashLoanState::Idle);
    }

    /// Flash loan receiver entry. Only the configured lending pool may call it,
    /// only for a loan this vault requested, once per loan.
    ///
    /// # Payment
    /// - Exactly `amount` of `asset`, the loaned funds.
    ///
    /// # Returns
    /// - `true` once `amount + premium` has been sent back to the pool.
    #[payable]
    #[endpoint(executeOperation)]
    fn execute_operation(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        premium: BigUint,
        initiator: ManagedAddress,
        params: ManagedBuffer,
    ) -> bool {
        let mut cache = Cache::new(self);

        let caller = self.blockchain().get_caller();
        require!(caller == cache.lending_pool, ERROR_UNAUTHORIZED_CALLBACK);
        require!(initiator == cache.sc_address, ERROR_FOREIGN_INITIATOR);
        require!(
            cache.flash_loan_state == FlashLoanState::LoanRequested,
            ERROR_NO_PENDING_FLASH_LOAN
        );

        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == asset && payment.amount == amount,
            ERROR_INVALID_FLASH_LOAN_PAYMENT
        );

        self.flash_loan_state().set(FlashLoanState::CallbackExecuting);
        cache.flash_loan_state = FlashLoanState::CallbackExecuting;

        let flash_params = self
            .serializer()
            .top_decode_from_managed_buffer::<FlashLoanParams<Self::Api>>(&params);

        match flash_params.operation {
            FlashLoanOperation::Open(request) => self.open_leveraged_position(
                &cache,
                &flash_params.requester,
                &asset,
                &amount,
                &premium,
                &request,
            ),
            FlashLoanOperation::Unwind(request) => self.unwind_leveraged_position(
                &mut cache,
                &flash_params.requester,
                &asset,
                &amount,
                &premium,
                &request,
            ),
        }

        true
    }

    /// supply(loan + collateral) -> borrow -> swap borrowed into the loaned asset
    /// -> health check -> supply surplus -> repay the flash loan.
    /// Also runs outside a callback with a zero `amount` and `premium`.
    fn open_leveraged_position(
        &self,
        cache: &Cache<Self>,
        requester: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        premium: &BigUint,
        request: &OpenRequest<Self::Api>,
    ) {
        let collateral_supplied = amount + &request.collateral_amount;
        self.pool_supply(&cache.lending_pool, asset, &collateral_supplied);

        let borrow_balance_before = self.blockchain().get_sc_balance(&request.borrow_token, 0);
        self.pool_borrow(
            &cache.lending_pool,
            &request.borrow_token,
            &request.borrow_amount,
        );

        let proceeds = self.execute_swap(
            &cache.swap_router,
            &request.borrow_token,
            &request.borrow_amount,
            asset,
            &request.swap_instruction,
            &request.min_return_amount,
        );

        let borrow_balance_after = self.blockchain().get_sc_balance(&request.borrow_token, 0);
        require!(
            borrow_balance_after == borrow_balance_before,
            ERROR_BORROW_TOKEN_RESIDUE_DETECTED
        );

        let repayment = amount + premium;
        require!(proceeds >= repayment, ERROR_INSUFFICIENT_SWAP_PROCEEDS);

        let account = self.get_account_data(&cache.lending_pool, &cache.sc_address);
        require!(
            self.to_decimal_wad(account.health_factor.clone()) > self.wad(),
            ERROR_UNHEALTHY_POSITION
        );

        let surplus = &proceeds - &repayment;
        if surplus > 0 {
            self.pool_supply(&cache.lending_pool, asset, &surplus);
        }

        self.settle_flash_loan(cache, asset, &repayment);

        self.position_created_event(
            requester,
            asset,
            &(collateral_supplied + surplus),
            &request.borrow_token,
            &request.borrow_amount,
            premium,
            &account.health_factor,
        );
    }

    /// repay debt -> withdraw the collateral that backed it -> swap it into the
    /// debt asset -> supply leftovers -> repay the flash loan.
    fn unwind_leveraged_position(
        &self,
        cache: &mut Cache<Self>,
        requester: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        premium: &BigUint,
        request: &UnwindRequest<Self::Api>,
    ) {
        require!(
            *asset == request.debt_token,
            ERROR_INVALID_FLASH_LOAN_PAYMENT
        );

        self.pool_repay(&cache.lending_pool, asset, &request.debt_amount);

        let collateral_config = cache.get_cached_reserve(&request.collateral_token);
        let debt_config = cache.get_cached_reserve(&request.debt_token);
        let collateral_price = cache.get_cached_price(&request.collateral_token);
        let debt_price = cache.get_cached_price(&request.debt_token);

        let backing = self.collateral_backing_debt(
            &request.debt_amount,
            &debt_price,
            debt_config.decimals,
            collateral_config.liquidation_threshold,
            &collateral_price,
            collateral_config.decimals,
        );
        let to_withdraw = self.get_min(backing, request.collateral_to_withdraw.clone());
        require!(to_withdraw > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let collateral_balance_before = self
            .blockchain()
            .get_sc_balance(&request.collateral_token, 0);
        let withdrawn = self.pool_withdraw(
            &cache.lending_pool,
            &request.collateral_token,
            &to_withdraw,
        );

        let proceeds = self.execute_swap(
            &cache.swap_router,
            &request.collateral_token,
            &withdrawn,
            asset,
            &request.swap_instruction,
            &request.min_return_amount,
        );

        let repayment = amount + premium;
        require!(proceeds >= repayment, ERROR_INSUFFICIENT_SWAP_PROCEEDS);

        let surplus = &proceeds - &repayment;
        if surplus > 0 {
            self.pool_supply(&cache.lending_pool, asset, &surplus);
        }

        let collateral_balance_after = self
            .blockchain()
            .get_sc_balance(&request.collateral_token, 0);
        let unspent = self.sub_or_zero(&collateral_balance_after, &collateral_balance_before);
        if unspent > 0 {
            self.pool_supply(&cache.lending_pool, &request.collateral_token, &unspent);
        }

        self.settle_flash_loan(cache, asset, &repayment);

        self.position_unwound_event(
            requester,
            &request.collateral_token,
            &self.sub_or_zero(&withdrawn, &unspent),
            &request.debt_token,
            &request.debt_amount,
            premium,
        );
    }

    fn settle_flash_loan(
        &self,
        cache: &Cache<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
        repayment: &BigUint,
    ) {
        if *repayment == 0 {
            return;
        }

        self.tx()
            .to(&cache.lending_pool)
            .egld_or_single_esdt(asset, 0, repayment)
            .transfer();
    }
}
