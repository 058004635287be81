#![no_std]

use common_errors::{ERROR_ONLY_LENDING_MARKET, ERROR_TOKEN_MISMATCH};
use common_proxies::proxy_lending_market;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod proxy_liquidity_pool_mock;

/// How the pool answers hook calls.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum HookMode {
    Accept,
    Reject,
    Reenter,
}

/// Liquidity pool double answering the lending market hooks.
///
/// It holds the loan token, disburses new loans, books repayments and revocations, and can be
/// switched to reject every hook or to call back into the market from inside a hook.
#[multiversx_sc::contract]
pub trait LiquidityPoolMock {
    #[init]
    fn init(&self, lending_market: ManagedAddress, token: EgldOrEsdtTokenIdentifier) {
        self.lending_market().set(lending_market);
        self.token().set(token);
        self.hook_mode().set(HookMode::Accept);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Funds the pool so it can disburse loans
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.token().get(),
            ERROR_TOKEN_MISMATCH
        );
    }

    #[endpoint(setHookMode)]
    fn set_hook_mode(&self, hook_mode: HookMode) {
        self.hook_mode().set(hook_mode);
    }

    #[endpoint(onBeforeLoanTaken)]
    fn on_before_loan_taken(
        &self,
        loan_id: u64,
        borrower: ManagedAddress,
        borrow_amount: u64,
    ) -> bool {
        if !self.accept_hook(loan_id) {
            return false;
        }

        self.total_disbursed().update(|total| *total += borrow_amount);
        self.tx()
            .to(&borrower)
            .egld_or_single_esdt(&self.token().get(), 0, &BigUint::from(borrow_amount))
            .transfer();

        true
    }

    #[payable("*")]
    #[endpoint(onAfterLoanPayment)]
    fn on_after_loan_payment(&self, loan_id: u64, repayment_amount: u64) -> bool {
        if !self.accept_hook(loan_id) {
            return false;
        }

        self.total_repaid().update(|total| *total += repayment_amount);

        true
    }

    #[payable("*")]
    #[endpoint(onAfterLoanRevocation)]
    fn on_after_loan_revocation(
        &self,
        loan_id: u64,
        borrower: ManagedAddress,
        refund_amount: u64,
    ) -> bool {
        if !self.accept_hook(loan_id) {
            return false;
        }

        let payment = self.call_value().egld_or_single_esdt();
        if let Some(returned_amount) = payment.amount.to_u64() {
            self.total_returned().update(|total| *total += returned_amount);
        }

        if refund_amount > 0 {
            self.total_refunded().update(|total| *total += refund_amount);
            self.tx()
                .to(&borrower)
                .egld_or_single_esdt(&self.token().get(), 0, &BigUint::from(refund_amount))
                .transfer();
        }

        true
    }

    fn accept_hook(&self, loan_id: u64) -> bool {
        let lending_market = self.lending_market().get();
        require!(
            self.blockchain().get_caller() == lending_market,
            ERROR_ONLY_LENDING_MARKET
        );
        self.last_hook_loan_id().set(loan_id);

        match self.hook_mode().get() {
            HookMode::Accept => true,
            HookMode::Reject => false,
            HookMode::Reenter => {
                // Calls back while the market is still inside the hook
                self.tx()
                    .to(&lending_market)
                    .typed(proxy_lending_market::LendingMarketProxy)
                    .freeze_loan(loan_id)
                    .sync_call();
                true
            },
        }
    }

    #[view(getLendingMarket)]
    #[storage_mapper("lending_market")]
    fn lending_market(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getToken)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getHookMode)]
    #[storage_mapper("hook_mode")]
    fn hook_mode(&self) -> SingleValueMapper<HookMode>;

    #[view(getTotalDisbursed)]
    #[storage_mapper("total_disbursed")]
    fn total_disbursed(&self) -> SingleValueMapper<u64>;

    #[view(getTotalRepaid)]
    #[storage_mapper("total_repaid")]
    fn total_repaid(&self) -> SingleValueMapper<u64>;

    #[view(getTotalReturned)]
    #[storage_mapper("total_returned")]
    fn total_returned(&self) -> SingleValueMapper<u64>;

    #[view(getTotalRefunded)]
    #[storage_mapper("total_refunded")]
    fn total_refunded(&self) -> SingleValueMapper<u64>;

    #[view(getLastHookLoanId)]
    #[storage_mapper("last_hook_loan_id")]
    fn last_hook_loan_id(&self) -> SingleValueMapper<u64>;
}
