#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("flash_loan_requested")]
    fn flash_loan_requested_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] is_open: bool,
    );

    // Emitted from inside the flash loan callback once the pool position is
    // collateralized, the surplus supplied and the repayment sent.
    #[event("position_created")]
    fn position_created_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] collateral_token: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral_supplied: &BigUint,
        #[indexed] borrow_token: &EgldOrEsdtTokenIdentifier,
        #[indexed] borrow_amount: &BigUint,
        #[indexed] flash_loan_premium: &BigUint,
        #[indexed] health_factor: &BigUint,
    );

    #[event("position_unwound")]
    fn position_unwound_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] collateral_token: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral_withdrawn: &BigUint,
        #[indexed] debt_token: &EgldOrEsdtTokenIdentifier,
        #[indexed] debt_repaid: &BigUint,
        #[indexed] flash_loan_premium: &BigUint,
    );

    #[event("swap_executed")]
    fn swap_executed_event(
        &self,
        #[indexed] router: &ManagedAddress,
        #[indexed] endpoint: &ManagedBuffer,
        #[indexed] token_in: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount_in: &BigUint,
        #[indexed] token_out: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount_out: &BigUint,
    );

    #[event("operator_transferred")]
    fn operator_transferred_event(
        &self,
        #[indexed] previous_operator: &ManagedAddress,
        #[indexed] new_operator: &ManagedAddress,
    );

    #[event("price_oracle_updated")]
    fn price_oracle_updated_event(&self, #[indexed] price_oracle: &ManagedAddress);

    #[event("flash_loan_fee_updated")]
    fn flash_loan_fee_updated_event(&self, #[indexed] fee_bps: u64);

    #[event("tokens_recovered")]
    fn tokens_recovered_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );
}
