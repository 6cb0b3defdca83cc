use common_errors::{ERROR_SLIPPAGE_EXCEEDED, ERROR_SWAP_EXECUTION_FAILED};
use common_structs::SwapInstruction;

use crate::{storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SwapsModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Dispatches `instruction` to the router with `amount_in` of `token_in`
    /// attached and returns the amount of `token_out` received.
    ///
    /// Only the back transfers of this call count as received. The router's first
    /// returned value is taken as the reported output, bounded by what was
    /// received; routers that return nothing are measured by transfers alone.
    /// Any other token sent back (e.g. a refund of `token_in`) stays in the vault.
    ///
    /// # Errors
    /// - `ERROR_INVALID_SWAP_ENDPOINT`: empty or built-in function endpoint.
    /// - `ERROR_SWAP_EXECUTION_FAILED`: nothing of `token_out` was received.
    /// - `ERROR_SLIPPAGE_EXCEEDED`: received less than `min_amount_out`.
    fn execute_swap(
        &self,
        router: &ManagedAddress,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
        token_out: &EgldOrEsdtTokenIdentifier,
        instruction: &SwapInstruction<Self::Api>,
        min_amount_out: &BigUint,
    ) -> BigUint {
        self.validate_swap_instruction(instruction);

        let mut args = ManagedArgBuffer::new();
        for arg in instruction.arguments.iter() {
            args.push_arg_raw(arg.clone_value());
        }

        let (raw_results, back_transfers) = self
            .tx()
            .to(router)
            .raw_call(instruction.endpoint.clone())
            .arguments_raw(args)
            .egld_or_single_esdt(token_in, 0, amount_in)
            .returns(ReturnsRawResult)
            .returns(ReturnsBackTransfersReset)
            .sync_call();

        let mut received = BigUint::zero();
        for payment in back_transfers.payments.iter() {
            if payment.token_identifier == *token_out {
                received += &payment.amount;
            }
        }

        let amount_out = if raw_results.is_empty() {
            received
        } else {
            let reported = BigUint::from_bytes_be_buffer(&raw_results.get(0));
            self.get_min(reported, received)
        };

        require!(amount_out > 0, ERROR_SWAP_EXECUTION_FAILED);
        require!(amount_out >= *min_amount_out, ERROR_SLIPPAGE_EXCEEDED);

        self.swap_executed_event(
            router,
            &instruction.endpoint,
            token_in,
            amount_in,
            token_out,
            &amount_out,
        );

        amount_out
    }
}
