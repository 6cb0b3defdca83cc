multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_PRICE, ERROR_ORACLE_UNAVAILABLE};
use common_proxies::proxy_price_oracle;

use crate::storage;

#[multiversx_sc::module]
pub trait OracleModule: storage::Storage {
    fn require_price_oracle(&self, price_oracle: &Option<ManagedAddress>) -> ManagedAddress {
        match price_oracle {
            Some(address) => address.clone(),
            None => sc_panic!(ERROR_ORACLE_UNAVAILABLE),
        }
    }

    /// Token price in USD with 8 decimals.
    fn get_oracle_price(
        &self,
        price_oracle: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let price = self
            .tx()
            .to(price_oracle)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_price(token_id)
            .returns(ReturnsResult)
            .sync_call_readonly();

        require!(price > 0, ERROR_INVALID_PRICE);
        price
    }
}
