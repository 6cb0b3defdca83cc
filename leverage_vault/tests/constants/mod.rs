use multiversx_sc::types::{TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::imports::MxscPath;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const OPERATOR_ADDRESS: TestAddress = TestAddress::new("operator");
pub const SUPPLIER_ADDRESS: TestAddress = TestAddress::new("supplier");
pub const ATTACKER_ADDRESS: TestAddress = TestAddress::new("attacker");

pub const LEVERAGE_VAULT_PATH: MxscPath = MxscPath::new("output/leverage-vault.mxsc.json");
pub const LENDING_POOL_MOCK_PATH: MxscPath =
    MxscPath::new("../lending_pool_mock/output/lending-pool-mock.mxsc.json");
pub const PRICE_ORACLE_MOCK_PATH: MxscPath =
    MxscPath::new("../price_oracle_mock/output/price-oracle-mock.mxsc.json");
pub const SWAP_MOCK_PATH: MxscPath = MxscPath::new("../swap_mock/output/swap-mock.mxsc.json");

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const USDC_DECIMALS: usize = 6;
pub const USDC_PRICE: u64 = 100_000_000; // 1$
pub const USDC_LTV: u64 = 8_000;
pub const USDC_LIQUIDATION_THRESHOLD: u64 = 8_500;

pub const WETH_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WETH-abcdef");
pub const WETH_DECIMALS: usize = 18;
pub const WETH_PRICE: u64 = 200_000_000_000; // 2000$
pub const WETH_LTV: u64 = 8_000;
pub const WETH_LIQUIDATION_THRESHOLD: u64 = 8_250;

// Listed with ltv 0, usable only as debt
pub const DAI_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("DAI-778899");
pub const DAI_DECIMALS: usize = 18;
pub const DAI_LIQUIDATION_THRESHOLD: u64 = 5_000;

pub const LIQUIDATION_BONUS: u64 = 10_500;
pub const POOL_FLASH_LOAN_PREMIUM_BPS: u64 = 5;
pub const VAULT_FLASH_LOAN_FEE_BPS: u64 = 5;

// Whole token units
pub const POOL_USDC_LIQUIDITY: u64 = 1_000_000;
pub const POOL_WETH_LIQUIDITY: u64 = 1_000;
pub const ROUTER_USDC_LIQUIDITY: u64 = 1_000_000;
pub const ROUTER_WETH_LIQUIDITY: u64 = 1_000;
pub const OPERATOR_USDC_BALANCE: u64 = 10_000;
pub const OPERATOR_WETH_BALANCE: u64 = 10;
pub const ATTACKER_USDC_BALANCE: u64 = 1_000;
