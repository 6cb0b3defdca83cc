#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::LTV_PRECISION;

/// Lifecycle of the single flash loan a vault can have in flight.
/// `Settled` is the return to `Idle`, an aborted attempt never persists.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FlashLoanState {
    Idle,
    LoanRequested,
    CallbackExecuting,
}

impl FlashLoanState {
    pub fn is_idle(&self) -> bool {
        *self == FlashLoanState::Idle
    }
}

/// Pre-built router call, dispatched verbatim as `endpoint(arguments...)`
/// with the input tokens attached.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct SwapInstruction<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

impl<M: ManagedTypeApi> SwapInstruction<M> {
    pub fn new(endpoint: ManagedBuffer<M>, arguments: ManagedVec<M, ManagedBuffer<M>>) -> Self {
        SwapInstruction {
            endpoint,
            arguments,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct OpenRequest<M: ManagedTypeApi> {
    pub collateral_token: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_amount: BigUint<M>,
    pub borrow_token: EgldOrEsdtTokenIdentifier<M>,
    pub borrow_amount: BigUint<M>,
    pub swap_instruction: SwapInstruction<M>,
    pub min_return_amount: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct UnwindRequest<M: ManagedTypeApi> {
    pub collateral_token: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_to_withdraw: BigUint<M>,
    pub debt_token: EgldOrEsdtTokenIdentifier<M>,
    pub debt_amount: BigUint<M>,
    pub swap_instruction: SwapInstruction<M>,
    pub min_return_amount: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub enum FlashLoanOperation<M: ManagedTypeApi> {
    Open(OpenRequest<M>),
    Unwind(UnwindRequest<M>),
}

/// Opaque payload threaded through the lending pool's flash loan and decoded
/// once inside `executeOperation`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct FlashLoanParams<M: ManagedTypeApi> {
    pub requester: ManagedAddress<M>,
    pub operation: FlashLoanOperation<M>,
}

/// Input of `calculateOpenParams`. Prices are USD at 8 decimals, a zero price
/// is resolved through the configured oracle.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LeverageQuote<M: ManagedTypeApi> {
    pub collateral_token: EgldOrEsdtTokenIdentifier<M>,
    pub borrow_token: EgldOrEsdtTokenIdentifier<M>,
    pub desired_leverage: u64,
    pub collateral_amount: BigUint<M>,
    pub collateral_price: BigUint<M>,
    pub borrow_price: BigUint<M>,
    pub collateral_decimals: usize,
    pub borrow_decimals: usize,
}

/// Risk parameters of one lending pool reserve, thresholds in basis points.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ReserveConfiguration {
    pub decimals: usize,
    pub ltv: u64,
    pub liquidation_threshold: u64,
    pub liquidation_bonus: u64,
    pub usage_as_collateral_enabled: bool,
    pub borrowing_enabled: bool,
    pub is_active: bool,
}

impl ReserveConfiguration {
    pub fn can_collateralize(&self) -> bool {
        self.is_active && self.usage_as_collateral_enabled && self.ltv > 0
    }

    pub fn can_borrow(&self) -> bool {
        self.is_active && self.borrowing_enabled
    }

    pub fn has_valid_thresholds(&self) -> bool {
        self.ltv < LTV_PRECISION
            && self.liquidation_threshold > 0
            && self.liquidation_threshold < LTV_PRECISION
    }
}

/// Aggregate account snapshot, values in USD at 8 decimals and the health
/// factor in WAD.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountData<M: ManagedTypeApi> {
    pub total_collateral_base: BigUint<M>,
    pub total_debt_base: BigUint<M>,
    pub available_borrows_base: BigUint<M>,
    pub current_liquidation_threshold: u64,
    pub ltv: u64,
    pub health_factor: BigUint<M>,
}

/// Aggregate position of the vault as reported by `getPositionData`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PositionData<M: ManagedTypeApi> {
    pub collateral_token: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_supplied: BigUint<M>,
    pub debt_token: EgldOrEsdtTokenIdentifier<M>,
    pub debt_outstanding: BigUint<M>,
    pub account: AccountData<M>,
}
