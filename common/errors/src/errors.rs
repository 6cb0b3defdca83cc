#![no_std]

// Authorization

pub static ERROR_UNAUTHORIZED: &[u8] = b"Caller is not the operator.";

pub static ERROR_UNAUTHORIZED_CALLBACK: &[u8] = b"Callback caller is not the lending pool.";

pub static ERROR_FOREIGN_INITIATOR: &[u8] = b"Flash loan was not initiated by this contract.";

pub static ERROR_NO_PENDING_FLASH_LOAN: &[u8] = b"No flash loan pending for this callback.";

pub static ERROR_FLASH_LOAN_ONGOING: &[u8] = b"Flash loan already ongoing.";

// Input validation

pub static ERROR_ZERO_COLLATERAL: &[u8] = b"Collateral amount must be greater than zero.";

pub static ERROR_INVALID_LTV: &[u8] = b"Invalid loan-to-value.";

pub static ERROR_INVALID_LEVERAGE: &[u8] = b"Leverage must be at least 1x.";

pub static ERROR_INVALID_ADDRESS: &[u8] = b"Invalid address.";

pub static ERROR_FEE_OUT_OF_RANGE: &[u8] = b"Flash loan fee must be lower than 100%.";

pub static ERROR_COLLATERAL_TOKEN_MISMATCH: &[u8] =
    b"Collateral payment must be in the flash loaned token.";

pub static ERROR_ASSETS_ARE_THE_SAME: &[u8] = b"Collateral and debt assets must differ.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_SWAP_ENDPOINT: &[u8] = b"Invalid swap endpoint.";

pub static ERROR_NOTHING_TO_RECOVER: &[u8] = b"Nothing to recover.";

// Market data

pub static ERROR_ORACLE_UNAVAILABLE: &[u8] = b"Price oracle not set.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Invalid price.";

pub static ERROR_ASSET_NOT_COLLATERALIZABLE: &[u8] = b"Asset not supported as collateral.";

// Solvency

pub static ERROR_LEVERAGE_EXCEEDS_MAXIMUM: &[u8] = b"Leverage exceeds maximum for this asset.";

pub static ERROR_INSUFFICIENT_REPAYMENT_CAPACITY: &[u8] =
    b"Borrowed amount can not repay the flash loan.";

pub static ERROR_UNHEALTHY_POSITION: &[u8] = b"Health factor too low after operation.";

// Execution

pub static ERROR_SWAP_EXECUTION_FAILED: &[u8] = b"Swap execution failed.";

pub static ERROR_SLIPPAGE_EXCEEDED: &[u8] = b"Swap output below minimum.";

pub static ERROR_BORROW_TOKEN_RESIDUE_DETECTED: &[u8] =
    b"Borrowed tokens were not fully consumed by the swap.";

pub static ERROR_INSUFFICIENT_SWAP_PROCEEDS: &[u8] =
    b"Swap proceeds do not cover the flash loan repayment.";

pub static ERROR_INVALID_FLASH_LOAN_PAYMENT: &[u8] = b"Invalid flash loan payment.";

pub static ERROR_FLASH_LOAN_CALLBACK_NOT_EXECUTED: &[u8] = b"Flash loan callback not executed.";

// Lending pool

pub static ERROR_RESERVE_NOT_FOUND: &[u8] = b"Reserve not found.";

pub static ERROR_RESERVE_ALREADY_EXISTS: &[u8] = b"Reserve already exists.";

pub static ERROR_INVALID_LIQUIDATION_THRESHOLD: &[u8] =
    b"Invalid liquidation threshold has to be lower than 100%.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral available for this loan.";

pub static ERROR_INSUFFICIENT_DEPOSIT: &[u8] = b"Not enough tokens deposited for this account.";

pub static ERROR_HEALTH_FACTOR_WITHDRAW: &[u8] = b"Health factor will be too low after withdrawal.";

pub static ERROR_REPAY_EXCEEDS_DEBT: &[u8] = b"Repayment exceeds outstanding debt.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_PRICE_NOT_FOUND: &[u8] = b"Price not registered for token.";

pub static ERROR_INVALID_FLASHLOAN_REPAYMENT: &[u8] = b"Invalid flashloan re-payment.";

pub static ERROR_FLASHLOAN_REJECTED: &[u8] = b"Flash loan receiver rejected the operation.";
