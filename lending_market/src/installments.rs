use common_errors::{ERROR_GROUP_NOT_FOUND, ERROR_GROUP_SIZE_MISMATCH};
use common_structs::{period_index, InstallmentLoanPreview};

use crate::storage;

multiversx_sc::imports!();

/// Aggregates the installments of an installment loan into one obligation.
///
/// Group membership is derived from the `first_installment_id` and `installment_count` fields of
/// the stored records. The first member carries the count, the others point back to it. An
/// ordinary loan is a group of one.
#[multiversx_sc::module]
pub trait InstallmentAggregatorModule:
    storage::Storage + common_rates::InterestAccrual + common_math::SharedMathModule
{
    /// Resolves the group `loan_id` belongs to.
    ///
    /// # Returns
    /// - `(u64, u64)`: The first loan id of the group and the number of members.
    ///
    /// # Errors
    /// - `ERROR_GROUP_NOT_FOUND`: If `loan_id` or the first member it points to is not stored.
    /// - `ERROR_GROUP_SIZE_MISMATCH`: If fewer members are stored than the first member declares.
    fn installment_group(&self, loan_id: u64) -> (u64, u64) {
        require!(
            loan_id != 0 && !self.loans(loan_id).is_empty(),
            ERROR_GROUP_NOT_FOUND
        );

        let loan = self.loans(loan_id).get();
        if !loan.is_installment() {
            return (loan_id, 1);
        }

        let first_installment_id = loan.first_installment_id;
        let first_mapper = self.loans(first_installment_id);
        require!(!first_mapper.is_empty(), ERROR_GROUP_NOT_FOUND);

        let first = first_mapper.get();
        require!(
            first.first_installment_id == first_installment_id && first.installment_count > 0,
            ERROR_GROUP_NOT_FOUND
        );

        let installment_count = first.installment_count as u64;
        for member_id in first_installment_id + 1..first_installment_id + installment_count {
            let member_mapper = self.loans(member_id);
            require!(
                !member_mapper.is_empty()
                    && member_mapper.get().first_installment_id == first_installment_id,
                ERROR_GROUP_SIZE_MISMATCH
            );
        }

        (first_installment_id, installment_count)
    }

    /// Sums the previews of every member of the group as of `timestamp`.
    ///
    /// The outstanding total is the sum of each member's rounded balance, not the rounding of
    /// the summed tracked balance, so it always equals what repaying every member would cost.
    /// `period_index` is the period of `timestamp` itself, whatever the members' freeze state.
    fn preview_installment_loan(
        &self,
        loan_id: u64,
        timestamp: u64,
    ) -> InstallmentLoanPreview<Self::Api> {
        let (first_installment_id, installment_count) = self.installment_group(loan_id);

        let mut preview = InstallmentLoanPreview {
            first_installment_id,
            installment_count: installment_count as u32,
            period_index: period_index(timestamp),
            total_tracked_balance: 0,
            total_outstanding_balance: 0,
            total_late_fee_amount: 0,
            total_penalty_balance: 0,
            installment_previews: ManagedVec::new(),
        };

        for member_id in first_installment_id..first_installment_id + installment_count {
            let member = self.loans(member_id).get();
            let member_preview = self.preview_loan(&member, timestamp);

            preview.total_tracked_balance =
                self.add_checked(preview.total_tracked_balance, member_preview.tracked_balance);
            preview.total_outstanding_balance = self.add_checked(
                preview.total_outstanding_balance,
                member_preview.outstanding_balance,
            );
            preview.total_late_fee_amount =
                self.add_checked(preview.total_late_fee_amount, member_preview.late_fee_amount);
            preview.total_penalty_balance =
                self.add_checked(preview.total_penalty_balance, member_preview.penalty_balance);
            preview.installment_previews.push(member_preview);
        }

        preview
    }
}
