pub use common_proxies::proxy_lending_market;
pub use liquidity_pool_mock::proxy_liquidity_pool_mock;
