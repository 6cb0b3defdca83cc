use crate::constants::*;

use common_proxies::{
    proxy_leverage_vault, proxy_lending_pool, proxy_price_oracle, proxy_swap_router,
};
use common_structs::{
    AccountData, FlashLoanState, LeverageQuote, PositionData, SwapInstruction,
};
use multiversx_sc::{
    imports::{MultiValue2, OptionalValue},
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedBuffer, ManagedVec,
        ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ScenarioTxRun},
    ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(LEVERAGE_VAULT_PATH, leverage_vault::ContractBuilder);
    blockchain.register_contract(LENDING_POOL_MOCK_PATH, lending_pool_mock::ContractBuilder);
    blockchain.register_contract(PRICE_ORACLE_MOCK_PATH, price_oracle_mock::ContractBuilder);
    blockchain.register_contract(SWAP_MOCK_PATH, swap_mock::ContractBuilder);

    blockchain
}

/// `amount` whole tokens expressed in raw units.
pub fn units(amount: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

pub fn token(token_id: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token_id.to_token_identifier())
}

fn instruction(
    endpoint: &str,
    args: &[ManagedBuffer<StaticApi>],
) -> SwapInstruction<StaticApi> {
    let mut arguments = ManagedVec::new();
    for arg in args {
        arguments.push(arg.clone());
    }

    SwapInstruction::new(ManagedBuffer::from(endpoint), arguments)
}

fn token_arg(token_id: TestTokenIdentifier) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::from(token_id.as_bytes())
}

/// Router `swap`: consumes the whole input, pays `amount_out` of `token_out`.
pub fn swap_instruction(
    token_out: TestTokenIdentifier,
    amount_out: &BigUint<StaticApi>,
) -> SwapInstruction<StaticApi> {
    instruction(
        "swap",
        &[token_arg(token_out), amount_out.to_bytes_be_buffer()],
    )
}

/// Router `swapWithRefund`: sends `refund` of the input back to the vault.
pub fn swap_with_refund_instruction(
    token_out: TestTokenIdentifier,
    amount_out: &BigUint<StaticApi>,
    refund: &BigUint<StaticApi>,
) -> SwapInstruction<StaticApi> {
    instruction(
        "swapWithRefund",
        &[
            token_arg(token_out),
            amount_out.to_bytes_be_buffer(),
            refund.to_bytes_be_buffer(),
        ],
    )
}

/// Router `swapSilent`: pays out but returns nothing.
pub fn swap_silent_instruction(
    token_out: TestTokenIdentifier,
    amount_out: &BigUint<StaticApi>,
) -> SwapInstruction<StaticApi> {
    instruction(
        "swapSilent",
        &[token_arg(token_out), amount_out.to_bytes_be_buffer()],
    )
}

/// Router `swapOverReported`: pays `amount_out`, returns `reported_out`.
pub fn swap_over_reported_instruction(
    token_out: TestTokenIdentifier,
    amount_out: &BigUint<StaticApi>,
    reported_out: &BigUint<StaticApi>,
) -> SwapInstruction<StaticApi> {
    instruction(
        "swapOverReported",
        &[
            token_arg(token_out),
            amount_out.to_bytes_be_buffer(),
            reported_out.to_bytes_be_buffer(),
        ],
    )
}

pub fn raw_instruction(endpoint: &str) -> SwapInstruction<StaticApi> {
    instruction(endpoint, &[])
}

pub struct LeverageVaultTestState {
    pub world: ScenarioWorld,
    pub vault_sc: ManagedAddress<StaticApi>,
    pub pool_sc: ManagedAddress<StaticApi>,
    pub oracle_sc: ManagedAddress<StaticApi>,
    pub router_sc: ManagedAddress<StaticApi>,
}

impl LeverageVaultTestState {
    /// USDC and WETH markets seeded by a supplier, a funded router and a vault
    /// operated by `OPERATOR_ADDRESS`.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);

        let oracle_sc = setup_price_oracle(&mut world);
        let pool_sc = setup_lending_pool(&mut world, &oracle_sc);
        let router_sc = setup_swap_router(&mut world);

        let vault_sc = deploy_vault(
            &mut world,
            &pool_sc,
            &router_sc,
            OptionalValue::Some(oracle_sc.clone()),
        );

        Self {
            world,
            vault_sc,
            pool_sc,
            oracle_sc,
            router_sc,
        }
    }

    // Vault operations

    #[allow(clippy::too_many_arguments)]
    pub fn create_position(
        &mut self,
        from: &TestAddress,
        collateral_token: TestTokenIdentifier,
        collateral_amount: BigUint<StaticApi>,
        flash_loan_amount: BigUint<StaticApi>,
        borrow_token: TestTokenIdentifier,
        borrow_amount: BigUint<StaticApi>,
        swap_instruction: SwapInstruction<StaticApi>,
        min_return_amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .create_position(
                token(collateral_token),
                flash_loan_amount,
                token(borrow_token),
                borrow_amount,
                swap_instruction,
                min_return_amount,
            )
            .single_esdt(&collateral_token.to_token_identifier(), 0, &collateral_amount)
            .run();
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_position_error(
        &mut self,
        from: &TestAddress,
        collateral_token: TestTokenIdentifier,
        collateral_amount: BigUint<StaticApi>,
        flash_loan_amount: BigUint<StaticApi>,
        borrow_token: TestTokenIdentifier,
        borrow_amount: BigUint<StaticApi>,
        swap_instruction: SwapInstruction<StaticApi>,
        min_return_amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .create_position(
                token(collateral_token),
                flash_loan_amount,
                token(borrow_token),
                borrow_amount,
                swap_instruction,
                min_return_amount,
            )
            .single_esdt(&collateral_token.to_token_identifier(), 0, &collateral_amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// The 3x USDC/WETH position sized by `calculateOpenParams` for 1000 USDC:
    /// flash loan 2000 USDC, borrow 1.14 WETH swapped for 2280 USDC.
    pub fn open_default_position(&mut self) {
        self.create_position(
            &OPERATOR_ADDRESS,
            USDC_TOKEN,
            units(1_000, USDC_DECIMALS),
            units(2_000, USDC_DECIMALS),
            WETH_TOKEN,
            BigUint::from(1_140_000_000_000_000_000u64),
            swap_instruction(USDC_TOKEN, &units(2_280, USDC_DECIMALS)),
            units(2_280, USDC_DECIMALS),
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn unwind_position(
        &mut self,
        from: &TestAddress,
        collateral_token: TestTokenIdentifier,
        collateral_to_withdraw: BigUint<StaticApi>,
        debt_token: TestTokenIdentifier,
        debt_amount: BigUint<StaticApi>,
        swap_instruction: SwapInstruction<StaticApi>,
        min_return_amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .unwind_position(
                token(collateral_token),
                collateral_to_withdraw,
                token(debt_token),
                debt_amount,
                swap_instruction,
                min_return_amount,
            )
            .run();
    }

    #[allow(clippy::too_many_arguments)]
    pub fn unwind_position_error(
        &mut self,
        from: &TestAddress,
        collateral_token: TestTokenIdentifier,
        collateral_to_withdraw: BigUint<StaticApi>,
        debt_token: TestTokenIdentifier,
        debt_amount: BigUint<StaticApi>,
        swap_instruction: SwapInstruction<StaticApi>,
        min_return_amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .unwind_position(
                token(collateral_token),
                collateral_to_withdraw,
                token(debt_token),
                debt_amount,
                swap_instruction,
                min_return_amount,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Vault configuration

    pub fn set_flash_loan_fee(&mut self, from: &TestAddress, fee_bps: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .set_flash_loan_fee(fee_bps)
            .run();
    }

    pub fn set_flash_loan_fee_error(
        &mut self,
        from: &TestAddress,
        fee_bps: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .set_flash_loan_fee(fee_bps)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_price_oracle(&mut self, from: &TestAddress, price_oracle: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .set_price_oracle(price_oracle)
            .run();
    }

    pub fn set_price_oracle_error(
        &mut self,
        from: &TestAddress,
        price_oracle: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .set_price_oracle(price_oracle)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn recover_tokens(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        opt_amount: OptionalValue<BigUint<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .recover_tokens(token(token_id), opt_amount)
            .run();
    }

    pub fn recover_tokens_error(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        opt_amount: OptionalValue<BigUint<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .recover_tokens(token(token_id), opt_amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn transfer_operator(&mut self, from: &TestAddress, new_operator: &TestAddress) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .transfer_operator(new_operator.to_managed_address())
            .run();
    }

    pub fn transfer_operator_error(
        &mut self,
        from: &TestAddress,
        new_operator: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .transfer_operator(new_operator)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Vault views

    pub fn get_operator(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .operator()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_flash_loan_fee(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .flash_loan_fee()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_flash_loan_state(&mut self) -> FlashLoanState {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .flash_loan_state()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_price_oracle(&mut self) -> OptionalValue<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .price_oracle()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_max_leverage(&mut self, ltv: u64) -> u64 {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .get_max_leverage(ltv)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_max_leverage_error(&mut self, ltv: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .get_max_leverage(ltv)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn get_max_leverage_for_asset(&mut self, asset: TestTokenIdentifier) -> u64 {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .get_max_leverage_for_asset(token(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_max_leverage_for_asset_error(
        &mut self,
        asset: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .get_max_leverage_for_asset(token(asset))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn calculate_open_params(
        &mut self,
        quote: LeverageQuote<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .calculate_open_params(quote)
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn calculate_open_params_error(
        &mut self,
        quote: LeverageQuote<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .calculate_open_params(quote)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn calculate_unwind_params(
        &mut self,
        collateral_token: TestTokenIdentifier,
        borrow_token: TestTokenIdentifier,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .calculate_unwind_params(token(collateral_token), token(borrow_token))
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn get_position_data(
        &mut self,
        collateral_token: TestTokenIdentifier,
        debt_token: TestTokenIdentifier,
    ) -> PositionData<StaticApi> {
        self.world
            .query()
            .to(&self.vault_sc)
            .typed(proxy_leverage_vault::LeverageVaultProxy)
            .get_position_data(token(collateral_token), token(debt_token))
            .returns(ReturnsResult)
            .run()
    }

    // Lending pool

    pub fn pool_supply(
        &mut self,
        from: &TestAddress,
        token_id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        supply_to_pool(&mut self.world, &self.pool_sc, from, token_id, amount);
    }

    pub fn set_reserve_thresholds(
        &mut self,
        asset: TestTokenIdentifier,
        ltv: u64,
        liquidation_threshold: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .set_reserve_thresholds(token(asset), ltv, liquidation_threshold)
            .run();
    }

    pub fn set_skip_receiver_callback(&mut self, skip: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .set_skip_receiver_callback(skip)
            .run();
    }

    pub fn add_reserve(
        &mut self,
        asset: TestTokenIdentifier,
        decimals: usize,
        ltv: u64,
        liquidation_threshold: u64,
    ) {
        add_reserve(
            &mut self.world,
            &self.pool_sc,
            asset,
            decimals,
            ltv,
            liquidation_threshold,
        );
    }

    pub fn get_vault_supply(&mut self, asset: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .get_user_supply(token(asset), &self.vault_sc)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_vault_debt(&mut self, asset: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .get_user_variable_debt(token(asset), &self.vault_sc)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_vault_account_data(&mut self) -> AccountData<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .get_user_account_data(&self.vault_sc)
            .returns(ReturnsResult)
            .run()
    }

    // Price oracle

    pub fn set_price(&mut self, asset: TestTokenIdentifier, price: u64) {
        set_price(&mut self.world, &self.oracle_sc, asset, price);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world
        .account(OPERATOR_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, units(OPERATOR_USDC_BALANCE, USDC_DECIMALS))
        .esdt_balance(WETH_TOKEN, units(OPERATOR_WETH_BALANCE, WETH_DECIMALS));
    world
        .account(SUPPLIER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, units(POOL_USDC_LIQUIDITY, USDC_DECIMALS))
        .esdt_balance(WETH_TOKEN, units(POOL_WETH_LIQUIDITY, WETH_DECIMALS));
    world
        .account(ATTACKER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, units(ATTACKER_USDC_BALANCE, USDC_DECIMALS));
}

pub fn setup_price_oracle(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let oracle_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_oracle::PriceOracleProxy)
        .init()
        .code(PRICE_ORACLE_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    set_price(world, &oracle_sc, USDC_TOKEN, USDC_PRICE);
    set_price(world, &oracle_sc, WETH_TOKEN, WETH_PRICE);

    oracle_sc
}

pub fn set_price(
    world: &mut ScenarioWorld,
    oracle_sc: &ManagedAddress<StaticApi>,
    asset: TestTokenIdentifier,
    price: u64,
) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(oracle_sc)
        .typed(proxy_price_oracle::PriceOracleProxy)
        .set_price(token(asset), BigUint::from(price))
        .run();
}

pub fn setup_lending_pool(
    world: &mut ScenarioWorld,
    oracle_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let pool_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_lending_pool::LendingPoolProxy)
        .init(oracle_sc, POOL_FLASH_LOAN_PREMIUM_BPS)
        .code(LENDING_POOL_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    add_reserve(
        world,
        &pool_sc,
        USDC_TOKEN,
        USDC_DECIMALS,
        USDC_LTV,
        USDC_LIQUIDATION_THRESHOLD,
    );
    add_reserve(
        world,
        &pool_sc,
        WETH_TOKEN,
        WETH_DECIMALS,
        WETH_LTV,
        WETH_LIQUIDATION_THRESHOLD,
    );

    // Liquidity has to enter through `supply` to be lendable
    supply_to_pool(
        world,
        &pool_sc,
        &SUPPLIER_ADDRESS,
        USDC_TOKEN,
        units(POOL_USDC_LIQUIDITY, USDC_DECIMALS),
    );
    supply_to_pool(
        world,
        &pool_sc,
        &SUPPLIER_ADDRESS,
        WETH_TOKEN,
        units(POOL_WETH_LIQUIDITY, WETH_DECIMALS),
    );

    pool_sc
}

pub fn add_reserve(
    world: &mut ScenarioWorld,
    pool_sc: &ManagedAddress<StaticApi>,
    asset: TestTokenIdentifier,
    decimals: usize,
    ltv: u64,
    liquidation_threshold: u64,
) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(pool_sc)
        .typed(proxy_lending_pool::LendingPoolProxy)
        .add_reserve(
            token(asset),
            decimals,
            ltv,
            liquidation_threshold,
            LIQUIDATION_BONUS,
        )
        .run();
}

pub fn supply_to_pool(
    world: &mut ScenarioWorld,
    pool_sc: &ManagedAddress<StaticApi>,
    from: &TestAddress,
    token_id: TestTokenIdentifier,
    amount: BigUint<StaticApi>,
) {
    world
        .tx()
        .from(from.to_managed_address())
        .to(pool_sc)
        .typed(proxy_lending_pool::LendingPoolProxy)
        .supply()
        .single_esdt(&token_id.to_token_identifier(), 0, &amount)
        .run();
}

pub fn setup_swap_router(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let router_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_swap_router::SwapRouterProxy)
        .init()
        .code(SWAP_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_balance(
        router_sc.clone(),
        USDC_TOKEN.as_bytes(),
        units(ROUTER_USDC_LIQUIDITY, USDC_DECIMALS),
    );
    world.set_esdt_balance(
        router_sc.clone(),
        WETH_TOKEN.as_bytes(),
        units(ROUTER_WETH_LIQUIDITY, WETH_DECIMALS),
    );

    router_sc
}

pub fn deploy_vault(
    world: &mut ScenarioWorld,
    pool_sc: &ManagedAddress<StaticApi>,
    router_sc: &ManagedAddress<StaticApi>,
    opt_price_oracle: OptionalValue<ManagedAddress<StaticApi>>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_leverage_vault::LeverageVaultProxy)
        .init(
            OPERATOR_ADDRESS.to_managed_address(),
            pool_sc,
            router_sc,
            VAULT_FLASH_LOAN_FEE_BPS,
            opt_price_oracle,
        )
        .code(LEVERAGE_VAULT_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_vault_error(
    world: &mut ScenarioWorld,
    operator: ManagedAddress<StaticApi>,
    pool_sc: &ManagedAddress<StaticApi>,
    router_sc: &ManagedAddress<StaticApi>,
    flash_loan_fee_bps: u64,
    error_message: &[u8],
) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_leverage_vault::LeverageVaultProxy)
        .init(
            operator,
            pool_sc,
            router_sc,
            flash_loan_fee_bps,
            OptionalValue::<ManagedAddress<StaticApi>>::None,
        )
        .code(LEVERAGE_VAULT_PATH)
        .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
        .run();
}

/// A 3x quote of 1000 USDC against WETH, prices left for the caller to fill.
pub fn usdc_weth_quote(
    desired_leverage: u64,
    collateral_price: u64,
    borrow_price: u64,
) -> LeverageQuote<StaticApi> {
    LeverageQuote {
        collateral_token: token(USDC_TOKEN),
        borrow_token: token(WETH_TOKEN),
        desired_leverage,
        collateral_amount: units(1_000, USDC_DECIMALS),
        collateral_price: BigUint::from(collateral_price),
        borrow_price: BigUint::from(borrow_price),
        collateral_decimals: USDC_DECIMALS,
        borrow_decimals: WETH_DECIMALS,
    }
}
