#![no_std]

use common_constants::{ACCURACY_FACTOR, RATE_FACTOR, RATE_PRECISION, RAY, RAY_PRECISION};
use common_errors::ERROR_OVERFLOW;

multiversx_sc::imports!();

/// Fixed-point helpers shared by the accrual engine.
///
/// Every operation truncates toward zero. Compounding is done at RAY precision and only
/// narrowed back to token units at the very end, so repeated calls with the same inputs are
/// bit-exact across the preview, the transitions and the installment aggregation.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);

        self.to_decimal(product / scaled, precision)
    }

    /// Raises `base` to `exponent` by repeated squaring, truncating after every multiplication.
    fn pow_floor(
        &self,
        base: &ManagedDecimal<Self::Api, NumDecimals>,
        exponent: u64,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut result = self.to_decimal(BigUint::from(10u64).pow(precision as u32), precision);
        let mut base = base.rescale(precision);
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.mul_floor(&result, &base, precision);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = self.mul_floor(&base, &base, precision);
            }
        }

        result
    }

    /// Per-period growth factor `1 + rate` in RAY precision.
    fn growth_factor(&self, rate: u32) -> ManagedDecimal<Self::Api, NumDecimals> {
        let factor = self.to_decimal(BigUint::from(RATE_FACTOR + rate as u64), RATE_PRECISION);
        factor.rescale(RAY_PRECISION)
    }

    /// Computes `principal * (1 + rate)^periods`, rounded down.
    ///
    /// # Arguments
    /// - `principal`: Balance in token units.
    /// - `rate`: Per-period rate scaled by `RATE_FACTOR`.
    /// - `periods`: Number of whole periods to compound.
    ///
    /// # Returns
    /// - `u64`: The compounded balance. Fails with an overflow error if it no longer fits.
    fn compound(&self, principal: u64, rate: u32, periods: u64) -> u64 {
        if principal == 0 || rate == 0 || periods == 0 {
            return principal;
        }

        let growth = self.pow_floor(&self.growth_factor(rate), periods, RAY_PRECISION);
        let balance = BigUint::from(principal) * growth.into_raw_units() / BigUint::from(RAY);

        self.to_u64_checked(&balance)
    }

    /// `value * numerator / denominator` rounded down, narrowed to `u64`.
    fn mul_div_floor(&self, value: u64, numerator: u64, denominator: u64) -> u64 {
        let result = BigUint::from(value) * BigUint::from(numerator) / BigUint::from(denominator);
        self.to_u64_checked(&result)
    }

    /// Rounds `value` half-up to a multiple of `ACCURACY_FACTOR`.
    fn round_to_accuracy(&self, value: u64) -> u64 {
        let half = ACCURACY_FACTOR / 2;
        match value.checked_add(half) {
            Some(shifted) => shifted / ACCURACY_FACTOR * ACCURACY_FACTOR,
            None => sc_panic!(ERROR_OVERFLOW),
        }
    }

    fn add_checked(&self, a: u64, b: u64) -> u64 {
        match a.checked_add(b) {
            Some(sum) => sum,
            None => sc_panic!(ERROR_OVERFLOW),
        }
    }

    fn to_u64_checked(&self, value: &BigUint) -> u64 {
        match value.to_u64() {
            Some(narrow) => narrow,
            None => sc_panic!(ERROR_OVERFLOW),
        }
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }
}
