multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSETS_ARE_THE_SAME, ERROR_FLASH_LOAN_ONGOING,
    ERROR_INVALID_ADDRESS, ERROR_INVALID_SWAP_ENDPOINT, ERROR_UNAUTHORIZED,
};
use common_structs::{FlashLoanState, SwapInstruction};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    fn require_operator(&self, operator: &ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == *operator, ERROR_UNAUTHORIZED);
    }

    /// Entry points are refused while a flash loan of this vault is in flight.
    fn require_idle(&self, state: FlashLoanState) {
        require!(state.is_idle(), ERROR_FLASH_LOAN_ONGOING);
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_INVALID_ADDRESS);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(*amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
    }

    fn require_distinct_assets(
        &self,
        first: &EgldOrEsdtTokenIdentifier,
        second: &EgldOrEsdtTokenIdentifier,
    ) {
        require!(first != second, ERROR_ASSETS_ARE_THE_SAME);
    }

    /// The router is only ever reached through a regular endpoint, never through
    /// a protocol built-in function such as an ESDT transfer.
    fn validate_swap_instruction(&self, instruction: &SwapInstruction<Self::Api>) {
        require!(
            !instruction.endpoint.is_empty(),
            ERROR_INVALID_SWAP_ENDPOINT
        );
        require!(
            !self
                .blockchain()
                .is_builtin_function(&instruction.endpoint),
            ERROR_INVALID_SWAP_ENDPOINT
        );
    }
}
