use common_errors::ERROR_INSUFFICIENT_PAYMENT;
use common_structs::{LoanAction, LoanRevocation, ProgramConfig};

use crate::{access, cache::Cache, installments, storage, utils, validation};

multiversx_sc::imports!();

/// Loan revocation and the pool settlement it triggers.
///
/// A revoked loan owes nothing going forward. The pool gets back what the borrower did not
/// repay of the borrow amount, paid by the caller, or returns to the borrower whatever was
/// repaid beyond it.
#[multiversx_sc::module]
pub trait LoanRevocationModule:
    storage::Storage
    + validation::ValidationModule
    + access::AccessModule
    + utils::LendingUtilsModule
    + installments::InstallmentAggregatorModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
    + common_rates::transitions::LoanTransitions
{
    fn process_revoke_loan(
        &self,
        mut cache: Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        payment: &EgldOrEsdtTokenPayment,
    ) {
        let mut loan = cache.get_cached_loan(loan_id);
        self.require_loan_authorized(caller, &loan, LoanAction::Revoke);

        let delta = self.revoke(&mut loan, cache.timestamp);
        cache.update_loan(loan_id, &loan);
        let program = cache.get_cached_program(loan.program_id);
        drop(cache);

        let mut revocations = ManagedVec::new();
        revocations.push(LoanRevocation::new(loan_id, loan.borrower, delta));
        self.settle_revocations(caller, &program, payment, &revocations);
    }

    /// Revokes every still active member of the group `loan_id` belongs to.
    ///
    /// # Errors
    /// - `ERROR_ALREADY_SETTLED` / `ERROR_ALREADY_REVOKED`: If no member is active anymore.
    fn process_revoke_installment_loan(
        &self,
        mut cache: Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        payment: &EgldOrEsdtTokenPayment,
    ) {
        let (first_installment_id, installment_count) = self.installment_group(loan_id);

        let first = cache.get_cached_loan(first_installment_id);
        self.require_loan_authorized(caller, &first, LoanAction::Revoke);

        let mut revocations = ManagedVec::new();
        for member_id in first_installment_id..first_installment_id + installment_count {
            let mut member = cache.get_cached_loan(member_id);
            if !member.is_active() {
                continue;
            }

            let delta = self.revoke(&mut member, cache.timestamp);
            cache.update_loan(member_id, &member);
            revocations.push(LoanRevocation::new(member_id, member.borrower, delta));
        }

        if revocations.is_empty() {
            self.require_active(&first);
        }

        let program = cache.get_cached_program(first.program_id);
        drop(cache);

        self.settle_revocations(caller, &program, payment, &revocations);
    }

    /// Collects the summed shortfall from the caller, runs the pool hook of every revocation
    /// and refunds the caller's excess.
    fn settle_revocations(
        &self,
        caller: &ManagedAddress,
        program: &ProgramConfig<Self::Api>,
        payment: &EgldOrEsdtTokenPayment,
        revocations: &ManagedVec<LoanRevocation<Self::Api>>,
    ) {
        let paid_amount = self.validate_payment_token(payment, &program.token);

        let mut total_returned_to_pool = 0u64;
        for revocation in revocations.iter() {
            total_returned_to_pool =
                self.add_checked(total_returned_to_pool, revocation.returned_to_pool);
        }
        require!(
            paid_amount >= total_returned_to_pool,
            ERROR_INSUFFICIENT_PAYMENT
        );

        for revocation in revocations.iter() {
            self.call_after_loan_revocation(
                &program.liquidity_pool,
                &program.token,
                revocation.loan_id,
                &revocation.borrower,
                revocation.returned_to_pool,
                revocation.refunded_to_borrower,
            );
            self.loan_revoked_event(
                revocation.loan_id,
                revocation.returned_to_pool,
                revocation.refunded_to_borrower,
            );
        }

        self.send_payment(caller, &program.token, paid_amount - total_returned_to_pool);
    }
}
