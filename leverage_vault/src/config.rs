multiversx_sc::imports!();

use common_constants::BPS;
use common_errors::{ERROR_FEE_OUT_OF_RANGE, ERROR_NOTHING_TO_RECOVER};

use crate::{storage, validation};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, price_oracle: ManagedAddress) {
        self.require_operator(&self.operator().get());
        self.require_non_zero_address(&price_oracle);

        self.price_oracle().set(&price_oracle);
        self.price_oracle_updated_event(&price_oracle);
    }

    /// Fee used by `calculateOpenParams`, in basis points. The premium actually
    /// charged is always the one reported by the pool.
    #[endpoint(setFlashLoanFee)]
    fn set_flash_loan_fee(&self, fee_bps: u64) {
        self.require_operator(&self.operator().get());
        require!(fee_bps < BPS, ERROR_FEE_OUT_OF_RANGE);

        self.flash_loan_fee_bps().set(fee_bps);
        self.flash_loan_fee_updated_event(fee_bps);
    }

    /// Sends `opt_amount` of `token_id`, or the whole vault balance of it, to the
    /// operator.
    #[endpoint(recoverTokens)]
    fn recover_tokens(
        &self,
        token_id: EgldOrEsdtTokenIdentifier,
        opt_amount: OptionalValue<BigUint>,
    ) {
        let operator = self.operator().get();
        self.require_operator(&operator);
        self.require_idle(self.flash_loan_state().get());

        let amount = match opt_amount {
            OptionalValue::Some(amount) => amount,
            OptionalValue::None => self.blockchain().get_sc_balance(&token_id, 0),
        };
        require!(amount > 0, ERROR_NOTHING_TO_RECOVER);

        self.tx()
            .to(&operator)
            .egld_or_single_esdt(&token_id, 0, &amount)
            .transfer();

        self.tokens_recovered_event(&operator, &token_id, &amount);
    }

    #[endpoint(transferOperator)]
    fn transfer_operator(&self, new_operator: ManagedAddress) {
        let previous_operator = self.operator().get();
        self.require_operator(&previous_operator);
        self.require_non_zero_address(&new_operator);

        self.operator().set(&new_operator);
        self.operator_transferred_event(&previous_operator, &new_operator);
    }
}
