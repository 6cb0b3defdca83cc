#![no_std]

use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_LIQUIDITY};

multiversx_sc::imports!();

/// Router stand-in that pays out whatever output the instruction names,
/// regardless of the input it receives.
#[multiversx_sc::contract]
pub trait SwapMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // Consumes the whole input and reports (amount_out, amount_in_used)
    #[payable]
    #[endpoint(swap)]
    fn swap(
        &self,
        token_out: EgldOrEsdtTokenIdentifier,
        amount_out: BigUint,
    ) -> MultiValue2<BigUint, BigUint> {
        let payment = self.call_value().egld_or_single_esdt();
        self.pay_out(&token_out, &amount_out);

        (amount_out, payment.amount.clone()).into()
    }

    // Sends `refund` of the input back, leaving it unconsumed on the caller
    #[payable]
    #[endpoint(swapWithRefund)]
    fn swap_with_refund(
        &self,
        token_out: EgldOrEsdtTokenIdentifier,
        amount_out: BigUint,
        refund: BigUint,
    ) -> MultiValue2<BigUint, BigUint> {
        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();
        let amount_in_used = &payment.amount - &refund;

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&payment.token_identifier, 0, &refund)
            .transfer_if_not_empty();
        self.pay_out(&token_out, &amount_out);

        (amount_out, amount_in_used).into()
    }

    // Same as `swap` but returns nothing, the caller has to measure the output
    #[payable]
    #[endpoint(swapSilent)]
    fn swap_silent(&self, token_out: EgldOrEsdtTokenIdentifier, amount_out: BigUint) {
        self.pay_out(&token_out, &amount_out);
    }

    // Pays `amount_out` but reports `reported_out`
    #[payable]
    #[endpoint(swapOverReported)]
    fn swap_over_reported(
        &self,
        token_out: EgldOrEsdtTokenIdentifier,
        amount_out: BigUint,
        reported_out: BigUint,
    ) -> MultiValue2<BigUint, BigUint> {
        let payment = self.call_value().egld_or_single_esdt();
        self.pay_out(&token_out, &amount_out);

        (reported_out, payment.amount.clone()).into()
    }

    fn pay_out(&self, token_out: &EgldOrEsdtTokenIdentifier, amount_out: &BigUint) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(
            self.blockchain().get_sc_balance(token_out, 0) >= *amount_out,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(token_out, 0, amount_out)
            .transfer_if_not_empty();
    }
}
