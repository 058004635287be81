use common_structs::{InstallmentLoanPreview, LoanPreview};

use crate::{installments, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + installments::InstallmentAggregatorModule
    + common_rates::InterestAccrual
    + common_math::SharedMathModule
{
    /// Projects a loan to a block timestamp without writing anything.
    ///
    /// # Arguments
    /// - `loan_id`: Loan to preview.
    /// - `timestamp`: Raw block timestamp in seconds, or `0` for the current block.
    #[view(getLoanPreview)]
    fn get_loan_preview(&self, loan_id: u64, timestamp: u64) -> LoanPreview {
        self.require_loan_exists(loan_id);
        let loan = self.loans(loan_id).get();

        self.preview_loan(&loan, self.preview_timestamp(timestamp))
    }

    /// Projects the whole installment group `loan_id` belongs to.
    #[view(getInstallmentLoanPreview)]
    fn get_installment_loan_preview(
        &self,
        loan_id: u64,
        timestamp: u64,
    ) -> InstallmentLoanPreview<Self::Api> {
        self.preview_installment_loan(loan_id, self.preview_timestamp(timestamp))
    }

    fn preview_timestamp(&self, timestamp: u64) -> u64 {
        if timestamp == 0 {
            return self.adjust_timestamp(self.blockchain().get_block_timestamp());
        }

        self.adjust_timestamp(timestamp)
    }
}
