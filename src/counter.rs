use crate::{error::Error, format::CodeStr};
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul};
use std::{cell::RefCell, collections::HashMap, fmt::Display};

// The integer capability required for counting. Counts grow exponentially in
// the term size, so callers choosing a fixed-width type like `u64` or `u128`
// must bound the size accordingly; overflow is detected via the checked
// operations and reported as an error, never wrapped. `num_bigint::BigUint`
// satisfies this trait and never overflows.
pub trait Count: Clone + Display + From<u64> + Integer + CheckedAdd + CheckedMul {}

impl<T: Clone + Display + From<u64> + Integer + CheckedAdd + CheckedMul> Count for T {}

// A memo table for the function S(m, n): the number of terms with at most `m`
// free variables and binary size `n`. The table is populated lazily and
// monotonically; once an entry is written, it never changes. Entries live in
// a sparse map behind a `RefCell` so the table can be shared immutably by the
// unranker and the term sequence while still caching new entries.
pub struct CountTable<T: Count> {
    counts: RefCell<HashMap<(usize, usize), T>>,
}

impl<T: Count> CountTable<T> {
    pub fn new() -> Self {
        Self {
            counts: RefCell::new(HashMap::new()),
        }
    }

    // Compute S(m, n) via the recurrence
    //
    //   S(m, 0) = 0
    //   S(m, 1) = 0
    //   S(m, n) = I(m >= n - 1)
    //           + S(m + 1, n - 2)
    //           + sum over j in [0, n - 2] of S(m, j) * S(m, n - 2 - j)
    //
    // where I is the 0/1 indicator. Every recursive sub-call goes through
    // this same cache, so each (m, n) entry is computed at most once and the
    // summation never triggers redundant recursive expansion.
    pub fn count(&self, m: usize, n: usize) -> Result<T, Error> {
        // Return the cached count if we've already computed this entry.
        let cached = self.counts.borrow().get(&(m, n)).cloned();
        if let Some(count) = cached {
            return Ok(count);
        }

        // Every term occupies at least 2 bits, so sizes 0 and 1 are empty
        // classes regardless of the free variable bound.
        let count = if n < 2 {
            T::zero()
        } else {
            // The variable that consumes exactly `n` bits is the one with
            // index `n - 1`, and it contributes a single term when the
            // indicator `m >= n - 1` admits it.
            let mut total = if m >= n - 1 { T::one() } else { T::zero() };

            // An abstraction spends 2 bits on its binder and brings one more
            // variable into scope in its body.
            let abstractions = self.count(m + 1, n - 2)?;
            total = total
                .checked_add(&abstractions)
                .ok_or_else(|| overflow(m, n))?;

            // An application spends 2 bits on its tag and splits the
            // remaining bits between its two children at every possible
            // point.
            for left_size in 0..=(n - 2) {
                let left = self.count(m, left_size)?;
                let right = self.count(m, n - 2 - left_size)?;
                let pairs = left.checked_mul(&right).ok_or_else(|| overflow(m, n))?;
                total = total.checked_add(&pairs).ok_or_else(|| overflow(m, n))?;
            }

            total
        };

        // Cache the entry for subsequent lookups.
        self.counts.borrow_mut().insert((m, n), count.clone());
        Ok(count)
    }
}

impl<T: Count> Default for CountTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Construct the error for a count that doesn't fit in the chosen integer
// type.
fn overflow(m: usize, n: usize) -> Error {
    Error::NumericOverflow(format!(
        "The number of terms with at most {} free variables and size {} cannot be represented \
         by the chosen integer type.",
        m.code_str(),
        n.code_str(),
    ))
}
