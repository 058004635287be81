#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod access;
pub mod cache;
pub mod config;
pub mod installments;
pub mod loans;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait LendingMarket:
    loans::take::LoanOriginationModule
    + loans::repay::LoanRepaymentModule
    + loans::update::LoanUpdateModule
    + loans::revoke::LoanRevocationModule
    + installments::InstallmentAggregatorModule
    + config::ConfigModule
    + access::AccessModule
    + common_events::EventsModule
    + storage::Storage
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + views::ViewsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
    + common_rates::transitions::LoanTransitions
{
    #[init]
    fn init(&self) {
        self.operation_ongoing().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Takes an ordinary loan on behalf of a borrower.
    ///
    /// # Arguments
    /// - `program_id`: Program funding the loan.
    /// - `borrower`: Receiver of the borrowed amount.
    /// - `borrow_amount`: Amount disbursed by the liquidity pool.
    /// - `addon_amount`: Fees added to the principal without being disbursed.
    /// - `duration_in_periods`: Periods until the due date.
    /// - `interest_rate_primary`: Per-period rate before the due date.
    /// - `interest_rate_secondary`: Per-period rate after the due date.
    ///
    /// # Returns
    /// - `u64`: The new loan id.
    #[allow(clippy::too_many_arguments)]
    #[endpoint(takeLoan)]
    fn take_loan(
        &self,
        program_id: u32,
        borrower: ManagedAddress,
        borrow_amount: u64,
        addon_amount: u64,
        duration_in_periods: u32,
        interest_rate_primary: u32,
        interest_rate_secondary: u32,
    ) -> u64 {
        let cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_take_loan(
            cache,
            &caller,
            program_id,
            &borrower,
            borrow_amount,
            addon_amount,
            duration_in_periods,
            interest_rate_primary,
            interest_rate_secondary,
        )
    }

    /// Takes a loan split into installments sharing the same rates.
    ///
    /// # Arguments
    /// - `installments`: Borrow amount, addon amount and duration of each installment.
    ///
    /// # Returns
    /// - `MultiValue2<u64, u32>`: The first installment id and the number of installments.
    #[endpoint(takeInstallmentLoan)]
    fn take_installment_loan(
        &self,
        program_id: u32,
        borrower: ManagedAddress,
        interest_rate_primary: u32,
        interest_rate_secondary: u32,
        installments: MultiValueEncoded<InstallmentTerms>,
    ) -> MultiValue2<u64, u32> {
        let cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_take_installment_loan(
            cache,
            &caller,
            program_id,
            &borrower,
            interest_rate_primary,
            interest_rate_secondary,
            &installments.to_vec(),
        )
    }

    /// Repays a loan in its token.
    ///
    /// # Arguments
    /// - `loan_id`: Loan to repay.
    /// - `repayment_amount`: Requested amount, or `u64::MAX` for the outstanding balance.
    ///
    /// # Payment
    /// - The loan token, at least the amount applied. Any excess is refunded.
    #[payable]
    #[endpoint(repayLoan)]
    fn repay_loan(&self, loan_id: u64, repayment_amount: u64) {
        let cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        self.process_repayment(cache, &caller, loan_id, repayment_amount, &payment);
    }

    /// Forgives part of a loan's tracked balance.
    #[endpoint(discountLoan)]
    fn discount_loan(&self, loan_id: u64, discount_amount: u64) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_discount(&mut cache, &caller, loan_id, discount_amount);
    }

    #[endpoint(freezeLoan)]
    fn freeze_loan(&self, loan_id: u64) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_freeze(&mut cache, &caller, loan_id);
    }

    /// Ends a freeze. The due date moves forward by the number of frozen periods.
    #[endpoint(unfreezeLoan)]
    fn unfreeze_loan(&self, loan_id: u64) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_unfreeze(&mut cache, &caller, loan_id);
    }

    #[endpoint(updateLoanDuration)]
    fn update_loan_duration(&self, loan_id: u64, new_duration_in_periods: u32) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_update_duration(&mut cache, &caller, loan_id, new_duration_in_periods);
    }

    #[endpoint(updateLoanInterestRatePrimary)]
    fn update_loan_interest_rate_primary(&self, loan_id: u64, new_rate: u32) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_update_interest_rate_primary(&mut cache, &caller, loan_id, new_rate);
    }

    #[endpoint(updateLoanInterestRateSecondary)]
    fn update_loan_interest_rate_secondary(&self, loan_id: u64, new_rate: u32) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_update_interest_rate_secondary(&mut cache, &caller, loan_id, new_rate);
    }

    /// Sets the penalty rate, or clears it with `0`.
    ///
    /// Allowed while the other term changes are locked, which is what makes clearing the rate,
    /// changing the terms and restoring the rate possible.
    #[endpoint(updateLoanPenaltyInterestRate)]
    fn update_loan_penalty_interest_rate(&self, loan_id: u64, new_rate: u32) {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();

        self.process_update_penalty_interest_rate(&mut cache, &caller, loan_id, new_rate);
    }

    /// Revokes a loan.
    ///
    /// # Payment
    /// - The loan token covering `borrow_amount - repaid_amount` when the borrower repaid less
    ///   than was borrowed. Any excess is refunded.
    #[payable]
    #[endpoint(revokeLoan)]
    fn revoke_loan(&self, loan_id: u64) {
        let cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        self.process_revoke_loan(cache, &caller, loan_id, &payment);
    }

    /// Revokes every active installment of the group `loan_id` belongs to.
    ///
    /// # Payment
    /// - The loan token covering the summed shortfall of the revoked installments.
    #[payable]
    #[endpoint(revokeInstallmentLoan)]
    fn revoke_installment_loan(&self, loan_id: u64) {
        let cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        self.process_revoke_installment_loan(cache, &caller, loan_id, &payment);
    }
}
