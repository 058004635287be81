#![no_std]

pub static ERROR_INVALID_AMOUNT: &[u8] = b"Invalid amount.";

pub static ERROR_INVALID_TIMESTAMP: &[u8] = b"Timestamp is before the loan tracked timestamp.";

pub static ERROR_ALREADY_SETTLED: &[u8] = b"Loan is already settled.";

pub static ERROR_ALREADY_REVOKED: &[u8] = b"Loan is already revoked.";

pub static ERROR_UNAUTHORIZED: &[u8] = b"Caller is not authorized for this loan action.";

pub static ERROR_RATE_INVARIANT_VIOLATION: &[u8] =
    b"Penalty interest rate must not be lower than the primary interest rate.";

pub static ERROR_DURATION_CHANGE_PROHIBITED: &[u8] =
    b"Loan terms are locked while a penalty interest rate is set and the loan is not overdue.";

pub static ERROR_GROUP_SIZE_MISMATCH: &[u8] =
    b"Installment group has fewer stored members than declared.";

pub static ERROR_GROUP_NOT_FOUND: &[u8] = b"Installment group not found.";

pub static ERROR_OVERFLOW: &[u8] = b"Arithmetic overflow.";

pub static ERROR_LOAN_NOT_FOUND: &[u8] = b"Loan not found.";

pub static ERROR_PROGRAM_NOT_FOUND: &[u8] = b"Program not found.";

pub static ERROR_LOAN_ALREADY_FROZEN: &[u8] = b"Loan is already frozen.";

pub static ERROR_LOAN_NOT_FROZEN: &[u8] = b"Loan is not frozen.";

pub static ERROR_INAPPROPRIATE_DURATION: &[u8] = b"New duration must extend the current one.";

pub static ERROR_INAPPROPRIATE_INTEREST_RATE: &[u8] =
    b"New interest rate must be lower than the current one.";

pub static ERROR_INVALID_INSTALLMENT_COUNT: &[u8] = b"Invalid number of installments.";

pub static ERROR_INVALID_TOKEN: &[u8] = b"Invalid token identifier.";

pub static ERROR_TOKEN_MISMATCH: &[u8] = b"Payment token is not the loan token.";

pub static ERROR_INSUFFICIENT_PAYMENT: &[u8] = b"Payment does not cover the required amount.";

pub static ERROR_INVALID_LIQUIDITY_POOL: &[u8] = b"Liquidity pool must be a smart contract.";

pub static ERROR_INVALID_LATE_FEE_RATE: &[u8] = b"Late fee rate exceeds 100%.";

pub static ERROR_INVALID_BORROWER: &[u8] = b"Borrower address is invalid.";

pub static ERROR_LIQUIDITY_POOL_HOOK_REJECTED: &[u8] = b"Liquidity pool rejected the loan hook.";

pub static ERROR_OPERATION_ONGOING: &[u8] = b"Another loan operation is in progress.";

pub static ERROR_ONLY_LENDING_MARKET: &[u8] = b"Only the lending market may call this endpoint.";
