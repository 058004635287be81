#![no_std]

pub mod proxy_lending_market;
pub mod proxy_liquidity_pool;
