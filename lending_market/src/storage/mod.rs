use common_structs::{LoanState, ProgramConfig};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get a loan record
    /// One record per ordinary loan and one per installment, keyed by loan id.
    #[view(getLoanState)]
    #[storage_mapper("loans")]
    fn loans(&self, loan_id: u64) -> SingleValueMapper<LoanState<Self::Api>>;

    /// Get the last assigned loan id
    /// Ids are assigned sequentially starting from 1, so 0 never names a loan.
    #[view(getLastLoanId)]
    #[storage_mapper("last_loan_id")]
    fn last_loan_id(&self) -> SingleValueMapper<u64>;

    /// Get a lending program
    /// A program binds a token, a liquidity pool and the late fee rate of its loans.
    #[view(getProgram)]
    #[storage_mapper("programs")]
    fn programs(&self, program_id: u32) -> SingleValueMapper<ProgramConfig<Self::Api>>;

    #[view(getLastProgramId)]
    #[storage_mapper("last_program_id")]
    fn last_program_id(&self) -> SingleValueMapper<u32>;

    /// Get the admins of a program
    /// Admins may take, modify and revoke the loans of their program.
    #[view(getProgramAdmins)]
    #[storage_mapper("program_admins")]
    fn program_admins(&self, program_id: u32) -> UnorderedSetMapper<ManagedAddress>;

    /// Set while a liquidity pool hook is executing
    #[view(isOperationOngoing)]
    #[storage_mapper("operation_ongoing")]
    fn operation_ongoing(&self) -> SingleValueMapper<bool>;
}
