use common_structs::{LoanAction, LoanState};

use crate::{access, cache::Cache, storage, utils, validation};

multiversx_sc::imports!();

/// Term changes on a single loan.
///
/// None of these move tokens, so the cache is committed when the endpoint returns.
#[multiversx_sc::module]
pub trait LoanUpdateModule:
    storage::Storage
    + validation::ValidationModule
    + access::AccessModule
    + utils::LendingUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
    + common_rates::transitions::LoanTransitions
{
    fn load_authorized_loan(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        action: LoanAction,
    ) -> LoanState<Self::Api> {
        let loan = cache.get_cached_loan(loan_id);
        self.require_loan_authorized(caller, &loan, action);
        loan
    }

    fn process_discount(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        discount_amount: u64,
    ) {
        let mut loan = self.load_authorized_loan(cache, caller, loan_id, LoanAction::Discount);
        let applied_amount = self.apply_discount(&mut loan, discount_amount, cache.timestamp);
        cache.update_loan(loan_id, &loan);

        self.loan_discounted_event(loan_id, applied_amount, loan.tracked_balance);
    }

    fn process_freeze(&self, cache: &mut Cache<Self>, caller: &ManagedAddress, loan_id: u64) {
        let mut loan = self.load_authorized_loan(cache, caller, loan_id, LoanAction::Freeze);
        self.freeze(&mut loan, cache.timestamp);
        cache.update_loan(loan_id, &loan);

        self.loan_frozen_event(loan_id, loan.tracked_balance);
    }

    fn process_unfreeze(&self, cache: &mut Cache<Self>, caller: &ManagedAddress, loan_id: u64) {
        let mut loan = self.load_authorized_loan(cache, caller, loan_id, LoanAction::Unfreeze);
        self.unfreeze(&mut loan, cache.timestamp);
        cache.update_loan(loan_id, &loan);

        self.loan_unfrozen_event(loan_id, loan.tracked_balance, loan.duration_in_periods);
    }

    fn process_update_duration(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        new_duration_in_periods: u32,
    ) {
        let mut loan =
            self.load_authorized_loan(cache, caller, loan_id, LoanAction::UpdateDuration);
        let old_duration_in_periods = loan.duration_in_periods;
        self.update_duration(&mut loan, new_duration_in_periods, cache.timestamp);
        cache.update_loan(loan_id, &loan);

        self.loan_duration_updated_event(
            loan_id,
            new_duration_in_periods,
            old_duration_in_periods,
        );
    }

    fn process_update_interest_rate_primary(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        new_rate: u32,
    ) {
        let mut loan =
            self.load_authorized_loan(cache, caller, loan_id, LoanAction::UpdateInterestRate);
        let old_rate = loan.interest_rate_primary;
        self.update_interest_rate_primary(&mut loan, new_rate, cache.timestamp);
        cache.update_loan(loan_id, &loan);

        self.loan_interest_rate_primary_updated_event(loan_id, new_rate, old_rate);
    }

    fn process_update_interest_rate_secondary(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        new_rate: u32,
    ) {
        let mut loan =
            self.load_authorized_loan(cache, caller, loan_id, LoanAction::UpdateInterestRate);
        let old_rate = loan.interest_rate_secondary;
        self.update_interest_rate_secondary(&mut loan, new_rate, cache.timestamp);
        cache.update_loan(loan_id, &loan);

        self.loan_interest_rate_secondary_updated_event(loan_id, new_rate, old_rate);
    }

    fn process_update_penalty_interest_rate(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        loan_id: u64,
        new_rate: u32,
    ) {
        let mut loan = self.load_authorized_loan(
            cache,
            caller,
            loan_id,
            LoanAction::UpdatePenaltyInterestRate,
        );
        let old_rate = loan.penalty_interest_rate;
        self.update_penalty_interest_rate(&mut loan, new_rate, cache.timestamp);
        cache.update_loan(loan_id, &loan);

        self.loan_penalty_interest_rate_updated_event(loan_id, new_rate, old_rate);
    }
}
