#![no_std]

use common_errors::{ERROR_INVALID_PRICE, ERROR_PRICE_NOT_FOUND};

multiversx_sc::imports!();

/// Owner-fed USD price registry, prices carry 8 decimals.
#[multiversx_sc::contract]
pub trait PriceOracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint) {
        require!(price > 0, ERROR_INVALID_PRICE);
        self.prices(&token).set(price);
    }

    #[view(getPrice)]
    fn get_price(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        let mapper = self.prices(&token);
        require!(!mapper.is_empty(), ERROR_PRICE_NOT_FOUND);
        mapper.get()
    }

    #[storage_mapper("prices")]
    fn prices(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;
}
