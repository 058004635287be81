use common_errors::ERROR_UNAUTHORIZED;
use common_structs::{LoanAction, LoanState};

use crate::storage;

multiversx_sc::imports!();

/// Authorization predicate consulted before every mutating entry point.
///
/// The contract owner and the admins of a program may perform every action on the program's
/// loans. A borrower may only repay their own loans.
#[multiversx_sc::module]
pub trait AccessModule: storage::Storage {
    #[view(isAuthorized)]
    fn is_authorized_view(
        &self,
        caller: ManagedAddress,
        program_id: u32,
        borrower: ManagedAddress,
        action: LoanAction,
    ) -> bool {
        self.is_authorized(&caller, program_id, &borrower, action)
    }

    fn is_authorized(
        &self,
        caller: &ManagedAddress,
        program_id: u32,
        borrower: &ManagedAddress,
        action: LoanAction,
    ) -> bool {
        if *caller == self.blockchain().get_owner_address() {
            return true;
        }

        if self.program_admins(program_id).contains(caller) {
            return true;
        }

        action == LoanAction::Repay && caller == borrower
    }

    fn require_loan_authorized(
        &self,
        caller: &ManagedAddress,
        loan: &LoanState<Self::Api>,
        action: LoanAction,
    ) {
        require!(
            self.is_authorized(caller, loan.program_id, &loan.borrower, action),
            ERROR_UNAUTHORIZED
        );
    }

    fn require_program_authorized(
        &self,
        caller: &ManagedAddress,
        program_id: u32,
        borrower: &ManagedAddress,
    ) {
        require!(
            self.is_authorized(caller, program_id, borrower, LoanAction::Take),
            ERROR_UNAUTHORIZED
        );
    }
}
