#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("program_registered")]
    fn program_registered_event(
        &self,
        #[indexed] program_id: u32,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] liquidity_pool: &ManagedAddress,
        #[indexed] late_fee_rate: u32,
    );

    #[event("program_late_fee_rate_updated")]
    fn program_late_fee_rate_updated_event(
        &self,
        #[indexed] program_id: u32,
        #[indexed] late_fee_rate: u32,
    );

    #[event("program_admin_updated")]
    fn program_admin_updated_event(
        &self,
        #[indexed] program_id: u32,
        #[indexed] admin: &ManagedAddress,
        #[indexed] is_admin: bool,
    );

    #[event("loan_taken")]
    fn loan_taken_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] loan: &LoanState<Self::Api>,
    );

    #[event("installment_loan_taken")]
    fn installment_loan_taken_event(
        &self,
        #[indexed] first_installment_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] installment_count: u32,
        #[indexed] total_borrow_amount: u64,
        #[indexed] total_addon_amount: u64,
    );

    // The caller is the payer, which may differ from the borrower when an admin repays
    #[event("loan_repayment")]
    fn loan_repayment_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] payer: &ManagedAddress,
        #[indexed] repayment_amount: u64,
        #[indexed] tracked_balance: u64,
        #[indexed] repaid_amount: u64,
    );

    #[event("loan_discounted")]
    fn loan_discounted_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] discount_amount: u64,
        #[indexed] tracked_balance: u64,
    );

    #[event("loan_frozen")]
    fn loan_frozen_event(&self, #[indexed] loan_id: u64, #[indexed] tracked_balance: u64);

    #[event("loan_unfrozen")]
    fn loan_unfrozen_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] tracked_balance: u64,
        #[indexed] duration_in_periods: u32,
    );

    #[event("loan_duration_updated")]
    fn loan_duration_updated_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] new_duration: u32,
        #[indexed] old_duration: u32,
    );

    #[event("loan_interest_rate_primary_updated")]
    fn loan_interest_rate_primary_updated_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] new_rate: u32,
        #[indexed] old_rate: u32,
    );

    #[event("loan_interest_rate_secondary_updated")]
    fn loan_interest_rate_secondary_updated_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] new_rate: u32,
        #[indexed] old_rate: u32,
    );

    #[event("loan_penalty_interest_rate_updated")]
    fn loan_penalty_interest_rate_updated_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] new_rate: u32,
        #[indexed] old_rate: u32,
    );

    #[event("loan_revoked")]
    fn loan_revoked_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] returned_to_pool: u64,
        #[indexed] refunded_to_borrower: u64,
    );
}
