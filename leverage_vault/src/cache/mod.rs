use common_structs::{FlashLoanState, ReserveConfiguration};

multiversx_sc::imports!();

/// Configuration and market data loaded once per call and handed by
/// reference to every step of it.
pub struct Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::pool::PoolModule,
{
    sc_ref: &'a C,

    pub prices_cache: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, BigUint<C::Api>>,
    pub reserve_configs:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, ReserveConfiguration>,
    pub operator: ManagedAddress<C::Api>,
    pub lending_pool: ManagedAddress<C::Api>,
    pub swap_router: ManagedAddress<C::Api>,
    pub price_oracle: Option<ManagedAddress<C::Api>>,
    pub flash_loan_fee_bps: u64,
    pub flash_loan_state: FlashLoanState,
    pub sc_address: ManagedAddress<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::pool::PoolModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let oracle_mapper = sc_ref.price_oracle();
        let price_oracle = if oracle_mapper.is_empty() {
            None
        } else {
            Some(oracle_mapper.get())
        };

        Cache {
            sc_ref,
            prices_cache: ManagedMapEncoded::new(),
            reserve_configs: ManagedMapEncoded::new(),
            operator: sc_ref.operator().get(),
            lending_pool: sc_ref.lending_pool().get(),
            swap_router: sc_ref.swap_router().get(),
            price_oracle,
            flash_loan_fee_bps: sc_ref.flash_loan_fee_bps().get(),
            flash_loan_state: sc_ref.flash_loan_state().get(),
            sc_address: sc_ref.blockchain().get_sc_address(),
        }
    }

    /// USD price at 8 decimals from the configured oracle.
    ///
    /// # Errors
    /// - `ERROR_ORACLE_UNAVAILABLE`: no oracle configured.
    /// - `ERROR_INVALID_PRICE`: the oracle reports zero.
    pub fn get_cached_price(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> BigUint<C::Api> {
        if self.prices_cache.contains(token_id) {
            return self.prices_cache.get(token_id);
        }

        let oracle = self.sc_ref.require_price_oracle(&self.price_oracle);
        let price = self.sc_ref.get_oracle_price(&oracle, token_id);
        self.prices_cache.put(token_id, &price);

        price
    }

    /// Uses `quoted` when non-zero, the oracle price otherwise.
    pub fn resolve_price(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
        quoted: &BigUint<C::Api>,
    ) -> BigUint<C::Api> {
        if *quoted > 0 {
            return quoted.clone();
        }

        self.get_cached_price(token_id)
    }

    pub fn get_cached_reserve(
        &mut self,
        token_id: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ReserveConfiguration {
        if self.reserve_configs.contains(token_id) {
            return self.reserve_configs.get(token_id);
        }

        let config = self
            .sc_ref
            .get_reserve_configuration(&self.lending_pool, token_id);
        self.reserve_configs.put(token_id, &config);

        config
    }
}
