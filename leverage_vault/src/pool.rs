multiversx_sc::imports!();

use common_constants::{REFERRAL_CODE, VARIABLE_RATE_MODE};
use common_proxies::proxy_lending_pool;
use common_structs::{AccountData, ReserveConfiguration};

use crate::storage;

/// Typed calls into the lending pool, always acting for the vault's own address.
#[multiversx_sc::module]
pub trait PoolModule: storage::Storage {
    fn pool_supply(
        &self,
        pool: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .supply()
            .egld_or_single_esdt(token_id, 0, amount)
            .sync_call();
    }

    fn pool_borrow(
        &self,
        pool: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .borrow(token_id, amount, VARIABLE_RATE_MODE)
            .sync_call();
    }

    fn pool_repay(
        &self,
        pool: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .repay()
            .egld_or_single_esdt(token_id, 0, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn pool_withdraw(
        &self,
        pool: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .withdraw(token_id, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn request_flash_loan(
        &self,
        pool: &ManagedAddress,
        receiver: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        params: ManagedBuffer,
    ) {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .flash_loan_simple(receiver, token_id, amount, params, REFERRAL_CODE)
            .sync_call();
    }

    fn get_account_data(&self, pool: &ManagedAddress, user: &ManagedAddress) -> AccountData<Self::Api> {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .get_user_account_data(user)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn get_reserve_configuration(
        &self,
        pool: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
    ) -> ReserveConfiguration {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .get_reserve_configuration_data(token_id)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn get_variable_debt(
        &self,
        pool: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> BigUint {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .get_user_variable_debt(token_id, user)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn get_supplied(
        &self,
        pool: &ManagedAddress,
        token_id: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> BigUint {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .get_user_supply(token_id, user)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
