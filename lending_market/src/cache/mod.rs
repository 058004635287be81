use common_structs::{LoanState, ProgramConfig};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-call view of the loan records an endpoint touches.
///
/// Records are read from storage once, mutated in memory and written back when the cache is
/// dropped. Endpoints that call a liquidity pool hook drop the cache before the call so the
/// pool, and anything it calls into, only ever observes committed state.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub loans: ManagedMapEncoded<C::Api, u64, LoanState<C::Api>>,
    pub updated_loan_ids: ManagedVec<C::Api, u64>,
    pub programs: ManagedMapEncoded<C::Api, u32, ProgramConfig<C::Api>>,
    /// Block timestamp shifted back by `NEGATIVE_TIME_OFFSET`.
    pub timestamp: u64,
    pub operation_ongoing: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage
        + crate::validation::ValidationModule
        + crate::utils::LendingUtilsModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let block_timestamp = sc_ref.blockchain().get_block_timestamp();

        Cache {
            loans: ManagedMapEncoded::new(),
            updated_loan_ids: ManagedVec::new(),
            programs: ManagedMapEncoded::new(),
            timestamp: sc_ref.adjust_timestamp(block_timestamp),
            operation_ongoing: sc_ref.operation_ongoing().get(),
            sc_ref,
        }
    }

    /// Returns the loan record, loading it from storage on first access.
    ///
    /// # Errors
    /// - `ERROR_LOAN_NOT_FOUND`: If no record is stored under `loan_id`.
    pub fn get_cached_loan(&mut self, loan_id: u64) -> LoanState<C::Api> {
        if self.loans.contains(&loan_id) {
            return self.loans.get(&loan_id);
        }

        self.sc_ref.require_loan_exists(loan_id);
        let loan = self.sc_ref.loans(loan_id).get();
        self.loans.put(&loan_id, &loan);

        loan
    }

    /// Stages a mutated record for the commit on drop.
    pub fn update_loan(&mut self, loan_id: u64, loan: &LoanState<C::Api>) {
        self.loans.put(&loan_id, loan);
        if !self.updated_loan_ids.contains(&loan_id) {
            self.updated_loan_ids.push(loan_id);
        }
    }

    pub fn get_cached_program(&mut self, program_id: u32) -> ProgramConfig<C::Api> {
        if self.programs.contains(&program_id) {
            return self.programs.get(&program_id);
        }

        let program = self.sc_ref.require_program(program_id);
        self.programs.put(&program_id, &program);

        program
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit every staged loan record
        for loan_id in self.updated_loan_ids.iter() {
            let loan = self.loans.get(&loan_id);
            self.sc_ref.loans(loan_id).set(&loan);
        }
    }
}
