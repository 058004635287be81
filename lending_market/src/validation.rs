use common_constants::{INSTALLMENT_COUNT_MAX, RATE_FACTOR};
use common_errors::*;
use common_structs::ProgramConfig;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Rejects entry while a liquidity pool hook is executing.
    ///
    /// # Arguments
    /// - `operation_ongoing`: The flag as loaded by the endpoint's cache.
    fn reentrancy_guard(&self, operation_ongoing: bool) {
        require!(!operation_ongoing, ERROR_OPERATION_ONGOING);
    }

    fn require_loan_exists(&self, loan_id: u64) {
        require!(
            loan_id != 0 && !self.loans(loan_id).is_empty(),
            ERROR_LOAN_NOT_FOUND
        );
    }

    fn require_program(&self, program_id: u32) -> ProgramConfig<Self::Api> {
        let mapper = self.programs(program_id);
        require!(!mapper.is_empty(), ERROR_PROGRAM_NOT_FOUND);
        mapper.get()
    }

    fn require_amount_greater_than_zero(&self, amount: u64) {
        require!(amount > 0, ERROR_INVALID_AMOUNT);
    }

    /// Validates the terms of a new loan or installment.
    ///
    /// # Errors
    /// - `ERROR_INVALID_AMOUNT`: If the borrow amount is zero.
    /// - `ERROR_OVERFLOW`: If borrow plus addon does not fit a `u64`.
    fn validate_loan_terms(&self, borrow_amount: u64, addon_amount: u64) {
        self.require_amount_greater_than_zero(borrow_amount);
        require!(
            borrow_amount.checked_add(addon_amount).is_some(),
            ERROR_OVERFLOW
        );
    }

    fn validate_installment_count(&self, installment_count: usize) {
        require!(
            installment_count > 0 && installment_count <= INSTALLMENT_COUNT_MAX,
            ERROR_INVALID_INSTALLMENT_COUNT
        );
    }

    fn validate_borrower(&self, borrower: &ManagedAddress) {
        require!(!borrower.is_zero(), ERROR_INVALID_BORROWER);
    }

    fn validate_liquidity_pool(&self, liquidity_pool: &ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(liquidity_pool),
            ERROR_INVALID_LIQUIDITY_POOL
        );
    }

    fn validate_late_fee_rate(&self, late_fee_rate: u32) {
        require!(
            late_fee_rate as u64 <= RATE_FACTOR,
            ERROR_INVALID_LATE_FEE_RATE
        );
    }

    /// Checks the attached payment token against the loan token and returns the amount.
    fn validate_payment_token(
        &self,
        payment: &EgldOrEsdtTokenPayment,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> u64 {
        if payment.amount == 0u64 {
            return 0;
        }

        require!(payment.token_identifier == *token, ERROR_TOKEN_MISMATCH);
        require!(payment.token_nonce == 0, ERROR_TOKEN_MISMATCH);
        match payment.amount.to_u64() {
            Some(amount) => amount,
            None => sc_panic!(ERROR_OVERFLOW),
        }
    }
}
