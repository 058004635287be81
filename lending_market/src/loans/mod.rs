pub mod repay;
pub mod revoke;
pub mod take;
pub mod update;
