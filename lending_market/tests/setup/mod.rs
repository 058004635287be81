#![allow(dead_code)]

use common_structs::{InstallmentLoanPreview, InstallmentTerms, LoanPreview, LoanState};
use multiversx_sc_scenario::imports::*;

use crate::constants::*;
use crate::proxys::*;
use liquidity_pool_mock::HookMode;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.set_current_dir_from_workspace("lending_market");
    blockchain.register_contract(LENDING_MARKET_PATH, lending_market::ContractBuilder);
    blockchain.register_contract(LIQUIDITY_POOL_MOCK_PATH, liquidity_pool_mock::ContractBuilder);

    blockchain
}

pub fn error_message(error: &[u8]) -> &str {
    core::str::from_utf8(error).unwrap()
}

pub fn timestamp_at(periods: u64, seconds: u64) -> u64 {
    START_TIMESTAMP + periods * SECONDS_PER_DAY + seconds
}

pub fn loan_token() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(LOAN_TOKEN.to_token_identifier())
}

pub fn installment(borrow_amount: u64, addon_amount: u64, duration_in_periods: u32) -> InstallmentTerms {
    InstallmentTerms {
        borrow_amount,
        addon_amount,
        duration_in_periods,
    }
}

pub struct LendingMarketTestState {
    pub world: ScenarioWorld,
    pub lending_market: ManagedAddress<StaticApi>,
    pub liquidity_pool: ManagedAddress<StaticApi>,
    pub program_id: u32,
}

impl LendingMarketTestState {
    pub fn new() -> Self {
        Self::with_late_fee_rate(0)
    }

    /// Deploys the market and a funded pool, and registers one program with `late_fee_rate`.
    pub fn with_late_fee_rate(late_fee_rate: u32) -> Self {
        let mut world = world();

        world
            .account(OWNER_ADDRESS)
            .nonce(1)
            .esdt_balance(LOAN_TOKEN, BigUint::from(OWNER_BALANCE))
            .esdt_balance(OTHER_TOKEN, BigUint::from(OWNER_BALANCE));
        world
            .account(ADMIN_ADDRESS)
            .nonce(1)
            .esdt_balance(LOAN_TOKEN, BigUint::from(OWNER_BALANCE));
        world
            .account(BORROWER_ADDRESS)
            .nonce(1)
            .esdt_balance(LOAN_TOKEN, BigUint::from(BORROWER_BALANCE))
            .esdt_balance(OTHER_TOKEN, BigUint::from(BORROWER_BALANCE));
        world
            .account(STRANGER_ADDRESS)
            .nonce(1)
            .esdt_balance(LOAN_TOKEN, BigUint::from(BORROWER_BALANCE));

        world.current_block().block_timestamp(START_TIMESTAMP);

        let lending_market = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_lending_market::LendingMarketProxy)
            .init()
            .code(LENDING_MARKET_PATH)
            .new_address(LENDING_MARKET_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let liquidity_pool = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_liquidity_pool_mock::LiquidityPoolMockProxy)
            .init(lending_market.clone(), loan_token())
            .code(LIQUIDITY_POOL_MOCK_PATH)
            .new_address(LIQUIDITY_POOL_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(liquidity_pool.clone())
            .typed(proxy_liquidity_pool_mock::LiquidityPoolMockProxy)
            .deposit()
            .payment(TestEsdtTransfer(LOAN_TOKEN, 0, POOL_LIQUIDITY))
            .run();

        let program_id = world
            .tx()
            .from(OWNER_ADDRESS)
            .to(lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .register_program(loan_token(), liquidity_pool.clone(), late_fee_rate)
            .returns(ReturnsResult)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .add_program_admin(program_id, ADMIN_ADDRESS)
            .run();

        Self {
            world,
            lending_market,
            liquidity_pool,
            program_id,
        }
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn take_loan(
        &mut self,
        from: TestAddress,
        borrow_amount: u64,
        addon_amount: u64,
        duration_in_periods: u32,
        interest_rate_primary: u32,
        interest_rate_secondary: u32,
    ) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .take_loan(
                self.program_id,
                BORROWER_ADDRESS,
                borrow_amount,
                addon_amount,
                duration_in_periods,
                interest_rate_primary,
                interest_rate_secondary,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn take_loan_error(
        &mut self,
        from: TestAddress,
        program_id: u32,
        borrow_amount: u64,
        duration_in_periods: u32,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .take_loan(
                program_id,
                BORROWER_ADDRESS,
                borrow_amount,
                0u64,
                duration_in_periods,
                RATE_2_PERCENT,
                RATE_3_PERCENT,
            )
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    /// Takes the standard test loan: 90 borrowed plus 10 addon, 10 periods, 2% then 3%.
    pub fn take_default_loan(&mut self) -> u64 {
        self.take_loan(
            OWNER_ADDRESS,
            90_000_000,
            10_000_000,
            10,
            RATE_2_PERCENT,
            RATE_3_PERCENT,
        )
    }

    pub fn take_installment_loan(
        &mut self,
        from: TestAddress,
        installments: &[InstallmentTerms],
        interest_rate_primary: u32,
        interest_rate_secondary: u32,
    ) -> (u64, u32) {
        let mut terms = MultiValueEncoded::<StaticApi, InstallmentTerms>::new();
        for installment in installments {
            terms.push(*installment);
        }

        self.world
            .tx()
            .from(from)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .take_installment_loan(
                self.program_id,
                BORROWER_ADDRESS,
                interest_rate_primary,
                interest_rate_secondary,
                terms,
            )
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn take_installment_loan_error(&mut self, installments: &[InstallmentTerms], error: &[u8]) {
        let mut terms = MultiValueEncoded::<StaticApi, InstallmentTerms>::new();
        for installment in installments {
            terms.push(*installment);
        }

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .take_installment_loan(
                self.program_id,
                BORROWER_ADDRESS,
                RATE_2_PERCENT,
                RATE_3_PERCENT,
                terms,
            )
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn repay_loan(
        &mut self,
        from: TestAddress,
        loan_id: u64,
        repayment_amount: u64,
        paid_amount: u64,
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .repay_loan(loan_id, repayment_amount)
            .payment(TestEsdtTransfer(LOAN_TOKEN, 0, paid_amount))
            .run();
    }

    pub fn repay_loan_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        loan_id: u64,
        repayment_amount: u64,
        paid_amount: u64,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .repay_loan(loan_id, repayment_amount)
            .payment(TestEsdtTransfer(token, 0, paid_amount))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn discount_loan(&mut self, loan_id: u64, discount_amount: u64) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .discount_loan(loan_id, discount_amount)
            .run();
    }

    pub fn freeze_loan(&mut self, from: TestAddress, loan_id: u64) {
        self.world
            .tx()
            .from(from)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .freeze_loan(loan_id)
            .run();
    }

    pub fn freeze_loan_error(&mut self, from: TestAddress, loan_id: u64, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .freeze_loan(loan_id)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn unfreeze_loan(&mut self, loan_id: u64) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .unfreeze_loan(loan_id)
            .run();
    }

    pub fn update_loan_duration(&mut self, loan_id: u64, new_duration_in_periods: u32) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .update_loan_duration(loan_id, new_duration_in_periods)
            .run();
    }

    pub fn update_loan_duration_error(
        &mut self,
        loan_id: u64,
        new_duration_in_periods: u32,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .update_loan_duration(loan_id, new_duration_in_periods)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn update_loan_interest_rate_primary(&mut self, loan_id: u64, new_rate: u32) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .update_loan_interest_rate_primary(loan_id, new_rate)
            .run();
    }

    pub fn update_loan_interest_rate_secondary_error(
        &mut self,
        loan_id: u64,
        new_rate: u32,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .update_loan_interest_rate_secondary(loan_id, new_rate)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn update_loan_penalty_interest_rate(&mut self, loan_id: u64, new_rate: u32) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .update_loan_penalty_interest_rate(loan_id, new_rate)
            .run();
    }

    pub fn update_loan_penalty_interest_rate_error(
        &mut self,
        loan_id: u64,
        new_rate: u32,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .update_loan_penalty_interest_rate(loan_id, new_rate)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn revoke_loan(&mut self, loan_id: u64, paid_amount: u64) {
        let tx = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .revoke_loan(loan_id);

        if paid_amount == 0 {
            tx.run();
        } else {
            tx.payment(TestEsdtTransfer(LOAN_TOKEN, 0, paid_amount)).run();
        }
    }

    pub fn revoke_loan_error(&mut self, loan_id: u64, paid_amount: u64, error: &[u8]) {
        let tx = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .revoke_loan(loan_id)
            .returns(ExpectMessage(error_message(error)));

        if paid_amount == 0 {
            tx.run();
        } else {
            tx.payment(TestEsdtTransfer(LOAN_TOKEN, 0, paid_amount)).run();
        }
    }

    pub fn revoke_installment_loan(&mut self, loan_id: u64, paid_amount: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .revoke_installment_loan(loan_id)
            .payment(TestEsdtTransfer(LOAN_TOKEN, 0, paid_amount))
            .run();
    }

    pub fn revoke_installment_loan_error(&mut self, loan_id: u64, paid_amount: u64, error: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .revoke_installment_loan(loan_id)
            .payment(TestEsdtTransfer(LOAN_TOKEN, 0, paid_amount))
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn set_hook_mode(&mut self, hook_mode: HookMode) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.liquidity_pool.clone())
            .typed(proxy_liquidity_pool_mock::LiquidityPoolMockProxy)
            .set_hook_mode(hook_mode)
            .run();
    }

    pub fn loan_state(&mut self, loan_id: u64) -> LoanState<StaticApi> {
        self.world
            .query()
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .loans(loan_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_loan_id(&mut self) -> u64 {
        self.world
            .query()
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .last_loan_id()
            .returns(ReturnsResult)
            .run()
    }

    /// Preview at the current block.
    pub fn loan_preview(&mut self, loan_id: u64) -> LoanPreview {
        self.loan_preview_at(loan_id, 0)
    }

    pub fn loan_preview_at(&mut self, loan_id: u64, timestamp: u64) -> LoanPreview {
        self.world
            .query()
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .get_loan_preview(loan_id, timestamp)
            .returns(ReturnsResult)
            .run()
    }

    pub fn installment_loan_preview(&mut self, loan_id: u64) -> InstallmentLoanPreview<StaticApi> {
        self.world
            .query()
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .get_installment_loan_preview(loan_id, 0u64)
            .returns(ReturnsResult)
            .run()
    }

    pub fn installment_loan_preview_error(&mut self, loan_id: u64, error: &[u8]) {
        self.world
            .query()
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .get_installment_loan_preview(loan_id, 0u64)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn is_operation_ongoing(&mut self) -> bool {
        self.world
            .query()
            .to(self.lending_market.clone())
            .typed(proxy_lending_market::LendingMarketProxy)
            .operation_ongoing()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_total(&mut self, view: PoolTotal) -> u64 {
        let query = self
            .world
            .query()
            .to(self.liquidity_pool.clone())
            .typed(proxy_liquidity_pool_mock::LiquidityPoolMockProxy);

        match view {
            PoolTotal::Disbursed => query.total_disbursed().returns(ReturnsResult).run(),
            PoolTotal::Repaid => query.total_repaid().returns(ReturnsResult).run(),
            PoolTotal::Returned => query.total_returned().returns(ReturnsResult).run(),
            PoolTotal::Refunded => query.total_refunded().returns(ReturnsResult).run(),
        }
    }

    pub fn check_token_balance(&mut self, address: TestAddress, expected: u64) {
        self.world
            .check_account(address)
            .esdt_balance(LOAN_TOKEN, BigUint::from(expected));
    }

    pub fn check_pool_balance(&mut self, expected: u64) {
        self.world
            .check_account(LIQUIDITY_POOL_ADDRESS)
            .esdt_balance(LOAN_TOKEN, BigUint::from(expected));
    }
}

pub enum PoolTotal {
    Disbursed,
    Repaid,
    Returned,
    Refunded,
}
