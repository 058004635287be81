use common_constants::REPAY_MAX_AMOUNT;
use common_errors::*;
use common_structs::LoanStatus;

pub mod constants;
pub mod proxys;
pub mod setup;
use constants::*;
use setup::*;

#[test]
fn partial_repayment_reduces_rebased_balance() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    state.set_block_timestamp(timestamp_at(5, 0));
    state.repay_loan(BORROWER_ADDRESS, loan_id, 10_000_000, 10_000_000);

    let loan = state.loan_state(loan_id);
    assert_eq!(loan.tracked_balance, 100_408_080);
    assert_eq!(loan.tracked_timestamp, 20_005 * SECONDS_PER_DAY);
    assert_eq!(loan.repaid_amount, 10_000_000);
    assert_eq!(loan.status, LoanStatus::Active);

    let preview = state.loan_preview(loan_id);
    assert_eq!(preview.tracked_balance, 100_408_080);
    assert_eq!(preview.outstanding_balance, 100_410_000);

    state.check_token_balance(BORROWER_ADDRESS, BORROWER_BALANCE + 80_000_000);
    state.check_pool_balance(POOL_LIQUIDITY - 80_000_000);
    assert_eq!(state.pool_total(PoolTotal::Repaid), 10_000_000);
}

#[test]
fn repay_max_settles_outstanding_and_refunds_excess() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    state.set_block_timestamp(timestamp_at(5, 0));
    state.repay_loan(BORROWER_ADDRESS, loan_id, REPAY_MAX_AMOUNT, 120_000_000);

    let loan = state.loan_state(loan_id);
    assert_eq!(loan.status, LoanStatus::Settled);
    assert_eq!(loan.tracked_balance, 0);
    // The rounding remainder is paid, not left behind as dust
    assert_eq!(loan.repaid_amount, 110_410_000);

    state.check_token_balance(
        BORROWER_ADDRESS,
        BORROWER_BALANCE + 90_000_000 - 110_410_000,
    );
    assert_eq!(state.pool_total(PoolTotal::Repaid), 110_410_000);

    state.repay_loan_error(
        BORROWER_ADDRESS,
        LOAN_TOKEN,
        loan_id,
        1_000,
        1_000,
        ERROR_ALREADY_SETTLED,
    );
}

#[test]
fn overpayment_is_capped_at_outstanding_balance() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    state.set_block_timestamp(timestamp_at(5, 0));
    state.repay_loan(BORROWER_ADDRESS, loan_id, 150_000_000, 150_000_000);

    let loan = state.loan_state(loan_id);
    assert_eq!(loan.status, LoanStatus::Settled);
    assert_eq!(loan.repaid_amount, 110_410_000);
    state.check_token_balance(
        BORROWER_ADDRESS,
        BORROWER_BALANCE + 90_000_000 - 110_410_000,
    );
}

#[test]
fn repayment_not_covered_by_payment() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    state.set_block_timestamp(timestamp_at(5, 0));
    state.repay_loan_error(
        BORROWER_ADDRESS,
        LOAN_TOKEN,
        loan_id,
        50_000_000,
        40_000_000,
        ERROR_INSUFFICIENT_PAYMENT,
    );

    assert_eq!(state.loan_state(loan_id).repaid_amount, 0);
}

#[test]
fn repayment_in_wrong_token() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    state.repay_loan_error(
        BORROWER_ADDRESS,
        OTHER_TOKEN,
        loan_id,
        1_000_000,
        1_000_000,
        ERROR_TOKEN_MISMATCH,
    );
}

#[test]
fn repayment_zero_amount() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    state.repay_loan_error(
        BORROWER_ADDRESS,
        LOAN_TOKEN,
        loan_id,
        0,
        1_000_000,
        ERROR_INVALID_AMOUNT,
    );
}

#[test]
fn repayment_of_unknown_loan() {
    let mut state = LendingMarketTestState::new();

    state.repay_loan_error(
        BORROWER_ADDRESS,
        LOAN_TOKEN,
        42,
        1_000_000,
        1_000_000,
        ERROR_LOAN_NOT_FOUND,
    );
}

#[test]
fn only_borrower_or_operators_may_repay() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    state.repay_loan_error(
        STRANGER_ADDRESS,
        LOAN_TOKEN,
        loan_id,
        1_000_000,
        1_000_000,
        ERROR_UNAUTHORIZED,
    );

    // A program admin may repay on the borrower's behalf
    state.repay_loan(ADMIN_ADDRESS, loan_id, 1_000_000, 1_000_000);
    assert_eq!(state.loan_state(loan_id).repaid_amount, 1_000_000);
}

#[test]
fn repaid_amount_never_decreases() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    let mut previous_repaid = 0;
    for period in 1..=6 {
        state.set_block_timestamp(timestamp_at(period, 0));
        state.repay_loan(BORROWER_ADDRESS, loan_id, 3_000_000, 3_000_000);

        let loan = state.loan_state(loan_id);
        assert!(loan.repaid_amount >= previous_repaid);
        assert_eq!(loan.repaid_amount, previous_repaid + 3_000_000);
        previous_repaid = loan.repaid_amount;
    }
}

#[test]
fn discount_reduces_balance_and_settles_when_exhausted() {
    let mut state = LendingMarketTestState::new();
    let loan_id = state.take_default_loan();

    state.discount_loan(loan_id, 5_000_000);
    let loan = state.loan_state(loan_id);
    assert_eq!(loan.tracked_balance, 95_000_000);
    assert_eq!(loan.discount_amount, 5_000_000);

    state.discount_loan(loan_id, 200_000_000);
    let loan = state.loan_state(loan_id);
    assert_eq!(loan.tracked_balance, 0);
    assert_eq!(loan.discount_amount, 100_000_000);
    assert_eq!(loan.status, LoanStatus::Settled);
    assert_eq!(loan.repaid_amount, 0);
}
