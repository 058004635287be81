use common_structs::{InstallmentTerms, LoanState};

use crate::{access, cache::Cache, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait LoanOriginationModule:
    storage::Storage
    + validation::ValidationModule
    + access::AccessModule
    + utils::LendingUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Originates an ordinary loan and lets the pool disburse it.
    ///
    /// The record is committed before the pool hook runs. A rejected hook reverts the call,
    /// record included.
    #[allow(clippy::too_many_arguments)]
    fn process_take_loan(
        &self,
        mut cache: Cache<Self>,
        caller: &ManagedAddress,
        program_id: u32,
        borrower: &ManagedAddress,
        borrow_amount: u64,
        addon_amount: u64,
        duration_in_periods: u32,
        interest_rate_primary: u32,
        interest_rate_secondary: u32,
    ) -> u64 {
        let program = cache.get_cached_program(program_id);
        self.require_program_authorized(caller, program_id, borrower);
        self.validate_borrower(borrower);
        self.validate_loan_terms(borrow_amount, addon_amount);

        let loan_id = self.next_loan_id();
        let loan = LoanState::new(
            program_id,
            program.token.clone(),
            borrower.clone(),
            borrow_amount,
            addon_amount,
            cache.timestamp,
            duration_in_periods,
            interest_rate_primary,
            interest_rate_secondary,
            program.late_fee_rate,
        );
        cache.update_loan(loan_id, &loan);
        drop(cache);

        self.call_before_loan_taken(&program.liquidity_pool, loan_id, borrower, borrow_amount);
        self.loan_taken_event(loan_id, borrower, &loan);

        loan_id
    }

    /// Originates one record per installment under consecutive ids.
    ///
    /// Every member points at the first id, and only the first member stores the count. The
    /// pool is asked once, for the summed borrow amount, under the first id.
    ///
    /// # Returns
    /// - `MultiValue2<u64, u32>`: The first installment id and the number of installments.
    #[allow(clippy::too_many_arguments)]
    fn process_take_installment_loan(
        &self,
        mut cache: Cache<Self>,
        caller: &ManagedAddress,
        program_id: u32,
        borrower: &ManagedAddress,
        interest_rate_primary: u32,
        interest_rate_secondary: u32,
        installments: &ManagedVec<InstallmentTerms>,
    ) -> MultiValue2<u64, u32> {
        let program = cache.get_cached_program(program_id);
        self.require_program_authorized(caller, program_id, borrower);
        self.validate_borrower(borrower);

        let installment_count = installments.len();
        self.validate_installment_count(installment_count);

        let first_installment_id = self.last_loan_id().get() + 1;
        let mut total_borrow_amount = 0u64;
        let mut total_addon_amount = 0u64;

        for (index, terms) in installments.iter().enumerate() {
            self.validate_loan_terms(terms.borrow_amount, terms.addon_amount);

            let loan_id = self.next_loan_id();
            let mut loan = LoanState::new(
                program_id,
                program.token.clone(),
                borrower.clone(),
                terms.borrow_amount,
                terms.addon_amount,
                cache.timestamp,
                terms.duration_in_periods,
                interest_rate_primary,
                interest_rate_secondary,
                program.late_fee_rate,
            );
            loan.first_installment_id = first_installment_id;
            if index == 0 {
                loan.installment_count = installment_count as u32;
            }
            cache.update_loan(loan_id, &loan);

            total_borrow_amount = self.add_checked(total_borrow_amount, terms.borrow_amount);
            total_addon_amount = self.add_checked(total_addon_amount, terms.addon_amount);
        }
        drop(cache);

        self.call_before_loan_taken(
            &program.liquidity_pool,
            first_installment_id,
            borrower,
            total_borrow_amount,
        );
        self.installment_loan_taken_event(
            first_installment_id,
            borrower,
            installment_count as u32,
            total_borrow_amount,
            total_addon_amount,
        );

        (first_installment_id, installment_count as u32).into()
    }

    fn next_loan_id(&self) -> u64 {
        self.last_loan_id().update(|id| {
            *id += 1;
            *id
        })
    }
}
