#![no_std]

use common_constants::RATE_FACTOR;
use common_errors::ERROR_INVALID_TIMESTAMP;
use common_structs::{period_index, LoanPreview, LoanState};

multiversx_sc::imports!();

pub mod transitions;

/// The InterestAccrual module projects a loan's balance to an arbitrary timestamp.
///
/// **Scope**: Pure function of a stored `LoanState` and a timestamp. Nothing is written.
///
/// **Goal**: Produce exactly the balance the next state mutation would persist, so previews and
/// mutations can never disagree.
#[multiversx_sc::module]
pub trait InterestAccrual: common_math::SharedMathModule {
    /// Computes the loan preview as of `timestamp`.
    ///
    /// **Algorithm**:
    /// - Accrual is counted in whole periods between the tracked timestamp and `timestamp`.
    ///   A frozen loan is measured against its freeze point instead of `timestamp`.
    /// - Before the due period the primary rate compounds, after it the secondary rate.
    /// - When a period range crosses the due boundary the balance is first compounded at the
    ///   primary rate up to due, then replaced by the penalty formula if a penalty rate is set
    ///   and the formula exceeds it, then charged the late fee, and finally compounded at the
    ///   secondary rate.
    ///
    /// # Arguments
    /// - `loan`: The stored loan state.
    /// - `timestamp`: Offset-adjusted timestamp, not earlier than `loan.tracked_timestamp`.
    ///
    /// # Returns
    /// - `LoanPreview`: Period index, tracked and outstanding balances, late fee and penalty projection.
    fn preview_loan(&self, loan: &LoanState<Self::Api>, timestamp: u64) -> LoanPreview {
        require!(timestamp >= loan.tracked_timestamp, ERROR_INVALID_TIMESTAMP);

        let current_period = period_index(loan.effective_timestamp(timestamp));
        let (tracked_balance, late_fee_amount) = self.accrue_tracked_balance(loan, current_period);

        LoanPreview {
            period_index: current_period,
            tracked_balance,
            outstanding_balance: self.round_to_accuracy(tracked_balance),
            late_fee_amount,
            penalty_balance: self.penalty_balance(loan, tracked_balance, current_period),
        }
    }

    /// Returns the tracked balance and the late fee as of `current_period`.
    fn accrue_tracked_balance(
        &self,
        loan: &LoanState<Self::Api>,
        current_period: u64,
    ) -> (u64, u64) {
        let balance = loan.tracked_balance;
        let late_fee_amount = loan.late_fee_amount;

        if !loan.is_active() || balance == 0 {
            return (balance, late_fee_amount);
        }

        let tracked_period_index = period_index(loan.tracked_timestamp);
        if current_period <= tracked_period_index {
            return (balance, late_fee_amount);
        }

        let due_period_index = loan.due_period_index();
        if current_period < due_period_index {
            let balance = self.compound(
                balance,
                loan.interest_rate_primary,
                current_period - tracked_period_index,
            );
            return (balance, late_fee_amount);
        }

        if tracked_period_index >= due_period_index {
            let balance = self.compound(
                balance,
                loan.interest_rate_secondary,
                current_period - tracked_period_index,
            );
            return (balance, late_fee_amount);
        }

        // The range crosses the due boundary
        let mut balance = self.compound(
            balance,
            loan.interest_rate_primary,
            due_period_index - tracked_period_index,
        );

        // The override never forgives interest that already accrued
        if loan.penalty_interest_rate != 0 {
            let penalty_balance = self.penalty_override(loan, loan.duration_in_periods as u64);
            balance = core::cmp::max(balance, penalty_balance);
        }

        let late_fee_amount = self.late_fee(balance, loan.late_fee_rate);
        balance = self.add_checked(balance, late_fee_amount);

        let balance = self.compound(
            balance,
            loan.interest_rate_secondary,
            current_period - due_period_index,
        );

        (balance, late_fee_amount)
    }

    /// `principal * (1 + penalty)^periods - repaid - discount`, floored at zero.
    fn penalty_override(&self, loan: &LoanState<Self::Api>, periods: u64) -> u64 {
        self.compound(loan.principal(), loan.penalty_interest_rate, periods)
            .saturating_sub(loan.repaid_amount)
            .saturating_sub(loan.discount_amount)
    }

    /// What the balance would become if the loan defaulted at `current_period`.
    ///
    /// Reporting only, never persisted. Never below the tracked balance.
    fn penalty_balance(
        &self,
        loan: &LoanState<Self::Api>,
        tracked_balance: u64,
        current_period: u64,
    ) -> u64 {
        if !loan.is_active() || loan.penalty_interest_rate == 0 || tracked_balance == 0 {
            return 0;
        }

        if current_period >= loan.due_period_index() {
            return tracked_balance;
        }

        let periods_since_start = current_period.saturating_sub(loan.start_period_index());
        core::cmp::max(
            tracked_balance,
            self.penalty_override(loan, periods_since_start),
        )
    }

    fn late_fee(&self, balance: u64, late_fee_rate: u32) -> u64 {
        if late_fee_rate == 0 {
            return 0;
        }

        self.mul_div_floor(balance, late_fee_rate as u64, RATE_FACTOR)
    }
}
