#![no_std]

use common_constants::PERIOD_IN_SECONDS;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum LoanStatus {
    Active,
    Settled,
    Revoked,
}

/// Actions checked against the authorization predicate before a loan is touched.
#[type_abi]
#[derive(
    NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum LoanAction {
    Take,
    Repay,
    Discount,
    Freeze,
    Unfreeze,
    UpdateDuration,
    UpdateInterestRate,
    UpdatePenaltyInterestRate,
    Revoke,
}

/// Stored state of one loan or of one installment of an installment loan.
///
/// Amounts are token units, rates are scaled by `RATE_FACTOR` and timestamps are already
/// shifted by `NEGATIVE_TIME_OFFSET`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct LoanState<M: ManagedTypeApi> {
    pub program_id: u32,
    pub token: EgldOrEsdtTokenIdentifier<M>,
    pub borrower: ManagedAddress<M>,
    pub borrow_amount: u64,
    pub addon_amount: u64,
    pub start_timestamp: u64,
    pub duration_in_periods: u32,
    pub interest_rate_primary: u32,
    pub interest_rate_secondary: u32,
    pub penalty_interest_rate: u32,
    pub late_fee_rate: u32,
    pub repaid_amount: u64,
    pub tracked_balance: u64,
    pub tracked_timestamp: u64,
    pub freeze_timestamp: u64,
    pub first_installment_id: u64,
    pub installment_count: u32,
    pub late_fee_amount: u64,
    pub discount_amount: u64,
    pub status: LoanStatus,
}

impl<M: ManagedTypeApi> LoanState<M> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        program_id: u32,
        token: EgldOrEsdtTokenIdentifier<M>,
        borrower: ManagedAddress<M>,
        borrow_amount: u64,
        addon_amount: u64,
        timestamp: u64,
        duration_in_periods: u32,
        interest_rate_primary: u32,
        interest_rate_secondary: u32,
        late_fee_rate: u32,
    ) -> Self {
        LoanState {
            program_id,
            token,
            borrower,
            borrow_amount,
            addon_amount,
            start_timestamp: timestamp,
            duration_in_periods,
            interest_rate_primary,
            interest_rate_secondary,
            penalty_interest_rate: 0,
            late_fee_rate,
            repaid_amount: 0,
            tracked_balance: borrow_amount + addon_amount,
            tracked_timestamp: timestamp,
            freeze_timestamp: 0,
            first_installment_id: 0,
            installment_count: 0,
            late_fee_amount: 0,
            discount_amount: 0,
            status: LoanStatus::Active,
        }
    }

    pub fn principal(&self) -> u64 {
        self.borrow_amount + self.addon_amount
    }

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze_timestamp != 0
    }

    pub fn is_installment(&self) -> bool {
        self.first_installment_id != 0
    }

    pub fn start_period_index(&self) -> u64 {
        period_index(self.start_timestamp)
    }

    pub fn due_period_index(&self) -> u64 {
        self.start_period_index() + self.duration_in_periods as u64
    }

    /// First second of the due period.
    pub fn due_timestamp(&self) -> u64 {
        self.due_period_index() * PERIOD_IN_SECONDS
    }

    /// Timestamp accrual is measured against; a frozen loan stops at its freeze point.
    pub fn effective_timestamp(&self, timestamp: u64) -> u64 {
        if self.is_frozen() {
            self.freeze_timestamp
        } else {
            timestamp
        }
    }

    pub fn is_overdue(&self, timestamp: u64) -> bool {
        period_index(self.effective_timestamp(timestamp)) >= self.due_period_index()
    }
}

pub fn period_index(timestamp: u64) -> u64 {
    timestamp / PERIOD_IN_SECONDS
}

/// Terms of one installment of an installment loan.
#[type_abi]
#[derive(
    NestedEncode,
    NestedDecode,
    TopEncode,
    TopDecode,
    ManagedVecItem,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
)]
pub struct InstallmentTerms {
    pub borrow_amount: u64,
    pub addon_amount: u64,
    pub duration_in_periods: u32,
}

/// Read-only projection of a loan at a given timestamp.
#[type_abi]
#[derive(
    NestedEncode,
    NestedDecode,
    TopEncode,
    TopDecode,
    ManagedVecItem,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
)]
pub struct LoanPreview {
    pub period_index: u64,
    pub tracked_balance: u64,
    pub outstanding_balance: u64,
    pub late_fee_amount: u64,
    pub penalty_balance: u64,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct InstallmentLoanPreview<M: ManagedTypeApi> {
    pub first_installment_id: u64,
    pub installment_count: u32,
    /// Period of the requested timestamp. A frozen member reports its freeze period in its own
    /// entry of `installment_previews`.
    pub period_index: u64,
    pub total_tracked_balance: u64,
    pub total_outstanding_balance: u64,
    pub total_late_fee_amount: u64,
    pub total_penalty_balance: u64,
    pub installment_previews: ManagedVec<M, LoanPreview>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct ProgramConfig<M: ManagedTypeApi> {
    pub token: EgldOrEsdtTokenIdentifier<M>,
    pub liquidity_pool: ManagedAddress<M>,
    pub late_fee_rate: u32,
}

impl<M: ManagedTypeApi> ProgramConfig<M> {
    pub fn new(
        token: EgldOrEsdtTokenIdentifier<M>,
        liquidity_pool: ManagedAddress<M>,
        late_fee_rate: u32,
    ) -> Self {
        ProgramConfig {
            token,
            liquidity_pool,
            late_fee_rate,
        }
    }
}

/// Token movement a revocation owes the liquidity pool or the borrower.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevocationDelta {
    pub returned_to_pool: u64,
    pub refunded_to_borrower: u64,
}

impl RevocationDelta {
    pub fn from_amounts(borrow_amount: u64, repaid_amount: u64) -> Self {
        if repaid_amount < borrow_amount {
            RevocationDelta {
                returned_to_pool: borrow_amount - repaid_amount,
                refunded_to_borrower: 0,
            }
        } else {
            RevocationDelta {
                returned_to_pool: 0,
                refunded_to_borrower: repaid_amount - borrow_amount,
            }
        }
    }
}

/// A revocation performed in the current call, awaiting its pool settlement.
#[derive(ManagedVecItem, Clone)]
pub struct LoanRevocation<M: ManagedTypeApi> {
    pub loan_id: u64,
    pub borrower: ManagedAddress<M>,
    pub returned_to_pool: u64,
    pub refunded_to_borrower: u64,
}

impl<M: ManagedTypeApi> LoanRevocation<M> {
    pub fn new(loan_id: u64, borrower: ManagedAddress<M>, delta: RevocationDelta) -> Self {
        LoanRevocation {
            loan_id,
            borrower,
            returned_to_pool: delta.returned_to_pool,
            refunded_to_borrower: delta.refunded_to_borrower,
        }
    }
}
