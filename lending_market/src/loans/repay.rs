use common_errors::ERROR_INSUFFICIENT_PAYMENT;
use common_structs::LoanAction;

use crate::{access, cache::Cache, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait LoanRepaymentModule:
    storage::Storage
    + validation::ValidationModule
    + access::AccessModule
    + utils::LendingUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
    + common_rates::transitions::LoanTransitions
{
    /// Applies a paid repayment and forwards it to the liquidity pool.
    ///
    /// **Algorithm**:
    /// - Re-bases the loan and applies `min(requested, outstanding)`. `REPAY_MAX_AMOUNT` requests
    ///   the outstanding balance.
    /// - The attached payment must cover the applied amount. The remainder goes back to the
    ///   caller after the pool accepted the repayment.
    ///
    /// # Arguments
    /// - `cache`: The endpoint cache, dropped before the pool hook.
    /// - `caller`: Payer, the borrower or an operator of the program.
    /// - `loan_id`: Loan to repay.
    /// - `repayment_amount`: Requested amount or `REPAY_MAX_AMOUNT`.
    /// - `payment`: The attached payment in the loan token.
    fn process_repayment(
        &self,
        mut cache: Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        repayment_amount: u64,
        payment: &EgldOrEsdtTokenPayment,
    ) {
        let mut loan = cache.get_cached_loan(loan_id);
        self.require_loan_authorized(caller, &loan, LoanAction::Repay);
        let paid_amount = self.validate_payment_token(payment, &loan.token);

        let applied_amount = self.apply_repayment(&mut loan, repayment_amount, cache.timestamp);
        require!(paid_amount >= applied_amount, ERROR_INSUFFICIENT_PAYMENT);

        cache.update_loan(loan_id, &loan);
        let program = cache.get_cached_program(loan.program_id);
        drop(cache);

        self.call_after_loan_payment(&program.liquidity_pool, &loan.token, loan_id, applied_amount);
        self.send_payment(caller, &loan.token, paid_amount - applied_amount);

        self.loan_repayment_event(
            loan_id,
            caller,
            applied_amount,
            loan.tracked_balance,
            loan.repaid_amount,
        );
    }
}
