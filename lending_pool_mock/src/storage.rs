use common_structs::ReserveConfiguration;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getFlashLoanPremium)]
    #[storage_mapper("flash_loan_premium_bps")]
    fn flash_loan_premium_bps(&self) -> SingleValueMapper<u64>;

    /// When set, `flashLoanSimple` returns without lending or calling the receiver.
    #[storage_mapper("skip_receiver_callback")]
    fn skip_receiver_callback(&self) -> SingleValueMapper<bool>;

    #[view(getReserves)]
    #[storage_mapper("reserves")]
    fn reserves(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("reserve_config")]
    fn reserve_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ReserveConfiguration>;

    /// Tokens owed to suppliers and not lent out. The flash loan repayment
    /// check only looks at the balance in excess of this amount.
    #[view(getReserveLiquidity)]
    #[storage_mapper("reserve_liquidity")]
    fn reserve_liquidity(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("user_supply")]
    fn user_supply(
        &self,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("user_debt")]
    fn user_debt(
        &self,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;
}
