#![no_std]

pub mod proxy_leverage_vault;
pub mod proxy_lending_pool;
pub mod proxy_price_oracle;
pub mod proxy_swap_router;
