#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod math;
pub mod oracle;
pub mod orchestrator;
pub mod pool;
pub mod storage;
pub mod swaps;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait LeverageVault:
    orchestrator::OrchestratorModule
    + config::ConfigModule
    + views::ViewsModule
    + swaps::SwapsModule
    + pool::PoolModule
    + oracle::OracleModule
    + math::LeverageMathModule
    + validation::ValidationModule
    + storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// # Arguments
    /// - `operator`: the only address allowed to open, unwind and configure.
    /// - `lending_pool`: flash loan provider and money market of the position.
    /// - `swap_router`: target of every swap instruction.
    /// - `flash_loan_fee_bps`: fee assumed by `calculateOpenParams`.
    /// - `opt_price_oracle`: required only by views and by unwinds.
    #[init]
    fn init(
        &self,
        operator: ManagedAddress,
        lending_pool: ManagedAddress,
        swap_router: ManagedAddress,
        flash_loan_fee_bps: u64,
        opt_price_oracle: OptionalValue<ManagedAddress>,
    ) {
        self.require_non_zero_address(&operator);
        self.require_non_zero_address(&lending_pool);
        self.require_non_zero_address(&swap_router);
        require!(
            flash_loan_fee_bps < common_constants::BPS,
            ERROR_FEE_OUT_OF_RANGE
        );

        self.operator().set(&operator);
        self.lending_pool().set(&lending_pool);
        self.swap_router().set(&swap_router);
        self.flash_loan_fee_bps().set(flash_loan_fee_bps);
        self.flash_loan_state().set(FlashLoanState::Idle);

        if let OptionalValue::Some(price_oracle) = opt_price_oracle {
            self.require_non_zero_address(&price_oracle);
            self.price_oracle().set(&price_oracle);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Opens (or grows) the leveraged position in one transaction: flash borrows
    /// `flash_loan_amount` of the collateral token, supplies it together with
    /// the payment, borrows `borrow_amount` of `borrow_token` and swaps it back
    /// to repay the flash loan. A zero `flash_loan_amount` runs the same
    /// sequence on the payment alone, without a flash loan.
    ///
    /// # Arguments
    /// - `flash_loan_token`: collateral asset, must match the payment.
    /// - `flash_loan_amount`, `borrow_amount`: as returned by `calculateOpenParams`.
    /// - `swap_instruction`: router call swapping `borrow_token` into the collateral.
    /// - `min_return_amount`: minimum collateral the swap has to yield.
    ///
    /// # Payment
    /// - The operator's own collateral, in `flash_loan_token`.
    #[payable]
    #[endpoint(createPosition)]
    fn create_position(
        &self,
        flash_loan_token: EgldOrEsdtTokenIdentifier,
        flash_loan_amount: BigUint,
        borrow_token: EgldOrEsdtTokenIdentifier,
        borrow_amount: BigUint,
        swap_instruction: SwapInstruction<Self::Api>,
        min_return_amount: BigUint,
    ) {
        let cache = Cache::new(self);
        self.require_operator(&cache.operator);
        self.require_idle(cache.flash_loan_state);

        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0, ERROR_ZERO_COLLATERAL);
        require!(
            payment.token_identifier == flash_loan_token,
            ERROR_COLLATERAL_TOKEN_MISMATCH
        );
        self.require_distinct_assets(&flash_loan_token, &borrow_token);
        self.require_amount_greater_than_zero(&borrow_amount);
        self.validate_swap_instruction(&swap_instruction);

        let requester = self.blockchain().get_caller();
        let request = OpenRequest {
            collateral_token: flash_loan_token.clone(),
            collateral_amount: payment.amount,
            borrow_token,
            borrow_amount,
            swap_instruction,
            min_return_amount,
        };

        // 1x, or a leverage that floors to nothing: no loan to take
        if flash_loan_amount == 0 {
            let zero = BigUint::zero();
            self.open_leveraged_position(
                &cache,
                &requester,
                &flash_loan_token,
                &zero,
                &zero,
                &request,
            );
            return;
        }

        let params = FlashLoanParams {
            requester,
            operation: FlashLoanOperation::Open(request),
        };

        self.run_flash_loan(&cache, &flash_loan_token, &flash_loan_amount, &params);
    }

    /// Repays `debt_amount` with a flash loan of `debt_token`, withdraws the
    /// collateral that backed it (at most `collateral_to_withdraw`) and swaps it
    /// to repay the flash loan. Leftovers stay supplied in the pool.
    #[endpoint(unwindPosition)]
    fn unwind_position(
        &self,
        collateral_token: EgldOrEsdtTokenIdentifier,
        collateral_to_withdraw: BigUint,
        debt_token: EgldOrEsdtTokenIdentifier,
        debt_amount: BigUint,
        swap_instruction: SwapInstruction<Self::Api>,
        min_return_amount: BigUint,
    ) {
        let cache = Cache::new(self);
        self.require_operator(&cache.operator);
        self.require_idle(cache.flash_loan_state);

        self.require_distinct_assets(&collateral_token, &debt_token);
        self.require_amount_greater_than_zero(&collateral_to_withdraw);
        self.require_amount_greater_than_zero(&debt_amount);
        self.validate_swap_instruction(&swap_instruction);

        let params = FlashLoanParams {
            requester: self.blockchain().get_caller(),
            operation: FlashLoanOperation::Unwind(UnwindRequest {
                collateral_token,
                collateral_to_withdraw,
                debt_token: debt_token.clone(),
                debt_amount: debt_amount.clone(),
                swap_instruction,
                min_return_amount,
            }),
        };

        self.run_flash_loan(&cache, &debt_token, &debt_amount, &params);
    }
}
