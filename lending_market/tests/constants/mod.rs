use multiversx_sc_scenario::imports::{MxscPath, TestAddress, TestSCAddress, TestTokenIdentifier};

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const ADMIN_ADDRESS: TestAddress = TestAddress::new("program-admin");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");

pub const LENDING_MARKET_ADDRESS: TestSCAddress = TestSCAddress::new("lending-market");
pub const LIQUIDITY_POOL_ADDRESS: TestSCAddress = TestSCAddress::new("liquidity-pool");

pub const LENDING_MARKET_PATH: MxscPath = MxscPath::new("output/lending_market.mxsc.json");
pub const LIQUIDITY_POOL_MOCK_PATH: MxscPath =
    MxscPath::new("../liquidity_pool_mock/output/liquidity-pool-mock.mxsc.json");

pub const LOAN_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDT-123456");

pub const SECONDS_PER_DAY: u64 = 86_400;
// 03:00 UTC of day 20_000, which is the start of period 20_000 once shifted back by the offset
pub const START_TIMESTAMP: u64 = 20_000 * SECONDS_PER_DAY + 10_800;

pub const POOL_LIQUIDITY: u64 = 1_000_000_000_000;
pub const BORROWER_BALANCE: u64 = 200_000_000;
pub const OWNER_BALANCE: u64 = 10_000_000_000_000;

pub const RATE_2_PERCENT: u32 = 20_000_000;
pub const RATE_3_PERCENT: u32 = 30_000_000;
pub const RATE_5_PERCENT: u32 = 50_000_000;
pub const RATE_1_PERCENT: u32 = 10_000_000;
pub const RATE_10_PERCENT: u32 = 100_000_000;
