use common_structs::FlashLoanState;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// The single address allowed to open, unwind and configure
    #[view(getOperator)]
    #[storage_mapper("operator")]
    fn operator(&self) -> SingleValueMapper<ManagedAddress>;

    /// Lending pool providing both the flash loans and the leveraged position
    #[view(getLendingPool)]
    #[storage_mapper("lending_pool")]
    fn lending_pool(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSwapRouter)]
    #[storage_mapper("swap_router")]
    fn swap_router(&self) -> SingleValueMapper<ManagedAddress>;

    /// Optional, exposed through `getPriceOracle`
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    /// Fee assumed when sizing positions, in basis points
    #[view(getFlashLoanFee)]
    #[storage_mapper("flash_loan_fee_bps")]
    fn flash_loan_fee_bps(&self) -> SingleValueMapper<u64>;

    #[view(getFlashLoanState)]
    #[storage_mapper("flash_loan_state")]
    fn flash_loan_state(&self) -> SingleValueMapper<FlashLoanState>;
}
