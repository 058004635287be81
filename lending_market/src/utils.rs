use common_errors::ERROR_LIQUIDITY_POOL_HOOK_REJECTED;
use common_proxies::proxy_liquidity_pool;

use crate::storage;

multiversx_sc::imports!();

/// Liquidity pool hooks and token transfers.
///
/// Every hook runs with the `operation_ongoing` flag raised, so a pool that calls back into a
/// mutating endpoint is rejected by the reentrancy guard. A hook answering `false` reverts the
/// whole operation.
#[multiversx_sc::module]
pub trait LendingUtilsModule: storage::Storage {
    /// Lets the pool account for and disburse a new loan to the borrower.
    fn call_before_loan_taken(
        &self,
        liquidity_pool: &ManagedAddress,
        loan_id: u64,
        borrower: &ManagedAddress,
        borrow_amount: u64,
    ) {
        self.operation_ongoing().set(true);
        let accepted = self
            .tx()
            .to(liquidity_pool)
            .typed(proxy_liquidity_pool::LiquidityPoolProxy)
            .on_before_loan_taken(loan_id, borrower, borrow_amount)
            .returns(ReturnsResult)
            .sync_call();
        self.operation_ongoing().set(false);

        require!(accepted, ERROR_LIQUIDITY_POOL_HOOK_REJECTED);
    }

    /// Forwards an applied repayment to the pool.
    fn call_after_loan_payment(
        &self,
        liquidity_pool: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        loan_id: u64,
        repayment_amount: u64,
    ) {
        let payment = self.hook_payment(token, repayment_amount);

        self.operation_ongoing().set(true);
        let accepted = self
            .tx()
            .to(liquidity_pool)
            .typed(proxy_liquidity_pool::LiquidityPoolProxy)
            .on_after_loan_payment(loan_id, repayment_amount)
            .payment(payment)
            .returns(ReturnsResult)
            .sync_call();
        self.operation_ongoing().set(false);

        require!(accepted, ERROR_LIQUIDITY_POOL_HOOK_REJECTED);
    }

    /// Settles a revocation with the pool.
    ///
    /// The shortfall is paid into the pool with the call, while a refund is paid out by the
    /// pool to the borrower.
    fn call_after_loan_revocation(
        &self,
        liquidity_pool: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        loan_id: u64,
        borrower: &ManagedAddress,
        returned_to_pool: u64,
        refunded_to_borrower: u64,
    ) {
        let payment = self.hook_payment(token, returned_to_pool);

        self.operation_ongoing().set(true);
        let accepted = self
            .tx()
            .to(liquidity_pool)
            .typed(proxy_liquidity_pool::LiquidityPoolProxy)
            .on_after_loan_revocation(loan_id, borrower, refunded_to_borrower)
            .payment(payment)
            .returns(ReturnsResult)
            .sync_call();
        self.operation_ongoing().set(false);

        require!(accepted, ERROR_LIQUIDITY_POOL_HOOK_REJECTED);
    }

    // A zero ESDT transfer is rejected by the protocol, so empty hooks are plain calls
    fn hook_payment(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        amount: u64,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        if amount == 0 {
            return EgldOrEsdtTokenPayment::no_payment();
        }

        EgldOrEsdtTokenPayment::new(token.clone(), 0, BigUint::from(amount))
    }

    fn send_payment(&self, to: &ManagedAddress, token: &EgldOrEsdtTokenIdentifier, amount: u64) {
        let payment = EgldOrEsdtTokenPayment::new(token.clone(), 0, BigUint::from(amount));
        self.tx().to(to).payment(&payment).transfer_if_not_empty();
    }

    /// Block timestamp shifted back so that period boundaries fall at 03:00 UTC.
    fn adjust_timestamp(&self, timestamp: u64) -> u64 {
        timestamp.saturating_sub(common_constants::NEGATIVE_TIME_OFFSET)
    }
}
