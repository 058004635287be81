use common_constants::REPAY_MAX_AMOUNT;
use common_errors::*;
use common_structs::{period_index, LoanPreview, LoanState, LoanStatus, RevocationDelta};

multiversx_sc::imports!();

/// State transitions of a single loan record.
///
/// Every transition validates first and then re-bases the record to `timestamp` before the
/// semantic change, so a change never applies retroactively to already accrued periods.
/// Nothing here reads or writes storage; the caller persists the record.
#[multiversx_sc::module]
pub trait LoanTransitions: crate::InterestAccrual + common_math::SharedMathModule {
    /// Moves the tracked balance and timestamp to `timestamp`.
    ///
    /// An active loan left without a balance is settled.
    fn rebase(&self, loan: &mut LoanState<Self::Api>, timestamp: u64) -> LoanPreview {
        let preview = self.preview_loan(loan, timestamp);

        loan.tracked_balance = preview.tracked_balance;
        loan.late_fee_amount = preview.late_fee_amount;
        loan.tracked_timestamp = timestamp;

        if loan.is_active() && loan.tracked_balance == 0 {
            loan.status = LoanStatus::Settled;
        }

        preview
    }

    /// Re-bases a loan that is about to change and requires it to still be active afterwards.
    fn rebase_active(&self, loan: &mut LoanState<Self::Api>, timestamp: u64) -> LoanPreview {
        let preview = self.rebase(loan, timestamp);
        self.require_active(loan);

        preview
    }

    fn require_active(&self, loan: &LoanState<Self::Api>) {
        match loan.status {
            LoanStatus::Active => {},
            LoanStatus::Settled => sc_panic!(ERROR_ALREADY_SETTLED),
            LoanStatus::Revoked => sc_panic!(ERROR_ALREADY_REVOKED),
        }
    }

    /// Duration, rates and freezing are locked while a penalty rate waits for the due date.
    fn require_terms_unlocked(&self, loan: &LoanState<Self::Api>, timestamp: u64) {
        require!(
            loan.penalty_interest_rate == 0 || loan.is_overdue(timestamp),
            ERROR_DURATION_CHANGE_PROHIBITED
        );
    }

    /// Applies a repayment and returns the amount actually taken.
    ///
    /// `REPAY_MAX_AMOUNT` repays the outstanding balance. Any amount reaching the outstanding
    /// balance, or the tracked balance, settles the loan and is capped at the outstanding
    /// balance, so the rounding remainder ends up in `repaid_amount` instead of a dust debt.
    fn apply_repayment(
        &self,
        loan: &mut LoanState<Self::Api>,
        amount: u64,
        timestamp: u64,
    ) -> u64 {
        self.require_active(loan);
        require!(amount > 0, ERROR_INVALID_AMOUNT);

        let preview = self.rebase_active(loan, timestamp);
        let outstanding = preview.outstanding_balance;

        let requested = if amount == REPAY_MAX_AMOUNT {
            outstanding
        } else {
            amount
        };
        let applied = core::cmp::min(requested, outstanding);

        if applied == outstanding || applied >= loan.tracked_balance {
            loan.tracked_balance = 0;
            loan.status = LoanStatus::Settled;
        } else {
            loan.tracked_balance -= applied;
        }
        loan.repaid_amount = self.add_checked(loan.repaid_amount, applied);

        applied
    }

    /// Forgives part of the balance and returns the amount actually discounted.
    fn apply_discount(&self, loan: &mut LoanState<Self::Api>, amount: u64, timestamp: u64) -> u64 {
        self.require_active(loan);
        require!(amount > 0, ERROR_INVALID_AMOUNT);

        self.rebase_active(loan, timestamp);

        let applied = core::cmp::min(amount, loan.tracked_balance);
        loan.tracked_balance -= applied;
        loan.discount_amount = self.add_checked(loan.discount_amount, applied);

        if loan.tracked_balance == 0 {
            loan.status = LoanStatus::Settled;
        }

        applied
    }

    fn freeze(&self, loan: &mut LoanState<Self::Api>, timestamp: u64) {
        self.require_active(loan);
        require!(!loan.is_frozen(), ERROR_LOAN_ALREADY_FROZEN);
        self.require_terms_unlocked(loan, timestamp);

        self.rebase_active(loan, timestamp);
        loan.freeze_timestamp = timestamp;
    }

    /// Ends a freeze, pushing the due date forward by the number of frozen periods.
    fn unfreeze(&self, loan: &mut LoanState<Self::Api>, timestamp: u64) {
        self.require_active(loan);
        require!(loan.is_frozen(), ERROR_LOAN_NOT_FROZEN);
        self.require_terms_unlocked(loan, timestamp);

        self.rebase_active(loan, timestamp);

        let frozen_periods =
            period_index(timestamp).saturating_sub(period_index(loan.freeze_timestamp));
        loan.duration_in_periods = self.add_periods(loan.duration_in_periods, frozen_periods);
        loan.freeze_timestamp = 0;
    }

    fn update_duration(
        &self,
        loan: &mut LoanState<Self::Api>,
        new_duration_in_periods: u32,
        timestamp: u64,
    ) {
        self.require_active(loan);
        self.require_terms_unlocked(loan, timestamp);
        require!(
            new_duration_in_periods > loan.duration_in_periods,
            ERROR_INAPPROPRIATE_DURATION
        );

        self.rebase_active(loan, timestamp);
        loan.duration_in_periods = new_duration_in_periods;
    }

    fn update_interest_rate_primary(
        &self,
        loan: &mut LoanState<Self::Api>,
        new_rate: u32,
        timestamp: u64,
    ) {
        self.require_active(loan);
        self.require_terms_unlocked(loan, timestamp);
        require!(
            new_rate < loan.interest_rate_primary,
            ERROR_INAPPROPRIATE_INTEREST_RATE
        );

        self.rebase_active(loan, timestamp);
        loan.interest_rate_primary = new_rate;
    }

    fn update_interest_rate_secondary(
        &self,
        loan: &mut LoanState<Self::Api>,
        new_rate: u32,
        timestamp: u64,
    ) {
        self.require_active(loan);
        self.require_terms_unlocked(loan, timestamp);
        require!(
            new_rate < loan.interest_rate_secondary,
            ERROR_INAPPROPRIATE_INTEREST_RATE
        );

        self.rebase_active(loan, timestamp);
        loan.interest_rate_secondary = new_rate;
    }

    /// Sets or clears the penalty rate. A non-zero rate must not be lower than the primary rate.
    fn update_penalty_interest_rate(
        &self,
        loan: &mut LoanState<Self::Api>,
        new_rate: u32,
        timestamp: u64,
    ) {
        self.require_active(loan);
        require!(
            new_rate == 0 || new_rate >= loan.interest_rate_primary,
            ERROR_RATE_INVARIANT_VIOLATION
        );

        self.rebase_active(loan, timestamp);
        loan.penalty_interest_rate = new_rate;
    }

    /// Terminates the loan without re-basing and reports the pool delta.
    fn revoke(&self, loan: &mut LoanState<Self::Api>, timestamp: u64) -> RevocationDelta {
        self.require_active(loan);

        loan.status = LoanStatus::Revoked;
        loan.tracked_balance = 0;
        loan.tracked_timestamp = core::cmp::max(loan.tracked_timestamp, timestamp);
        loan.freeze_timestamp = 0;

        RevocationDelta::from_amounts(loan.borrow_amount, loan.repaid_amount)
    }

    fn add_periods(&self, duration_in_periods: u32, periods: u64) -> u32 {
        let total = duration_in_periods as u64 + periods;
        require!(total <= u32::MAX as u64, ERROR_OVERFLOW);
        total as u32
    }
}
