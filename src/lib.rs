// This crate enumerates and bijectively indexes the terms of the De
// Bruijn-indexed binary lambda calculus by structural size: counting how many
// terms of a given binary size exist under a given free variable bound, and
// recovering the specific term at a given rank without materializing its
// predecessors. The entry points below validate their arguments and delegate
// to the core modules.

mod counter;
mod error;
mod format;
mod sequence;
mod term;
mod unranker;

pub use crate::{
    counter::{Count, CountTable},
    error::Error,
    format::CodeStr,
    sequence::{TermSequence, TermSequenceIter},
    term::Term,
};

use num_bigint::BigUint;
use std::rc::Rc;

// Validate that a signed argument is nonnegative and convert it for internal
// use.
fn validate(name: &str, value: i64) -> Result<usize, Error> {
    usize::try_from(value).map_err(|_| {
        Error::InvalidArgument(format!(
            "The argument {} must be nonnegative, but {} was given.",
            name.code_str(),
            value.code_str(),
        ))
    })
}

// Construct the error for a rank below the start of the class.
fn invalid_rank(rank: i64) -> Error {
    Error::InvalidArgument(format!(
        "The rank {} is invalid. Ranks start at {}.",
        rank.code_str(),
        1_usize.code_str(),
    ))
}

// Count the terms with at most `m` free variables and binary size `n`, using
// the default native integer width. Counts grow exponentially in `n`, so for
// large sizes use `count_big` instead.
pub fn count(m: i64, n: i64) -> Result<u64, Error> {
    count_with_table(m, n, &CountTable::new())
}

// Count with arbitrary precision. This never overflows.
pub fn count_big(m: i64, n: i64) -> Result<BigUint, Error> {
    count_with_table(m, n, &CountTable::new())
}

// Count against an explicit shared table, so repeated queries amortize the
// cost of populating the cache.
pub fn count_with_table<T: Count>(m: i64, n: i64, table: &CountTable<T>) -> Result<T, Error> {
    table.count(validate("m", m)?, validate("n", n)?)
}

// Compute the term at rank `k` (1-based) within the class of terms with at
// most `m` free variables and size `n`, using the default native integer
// width for counting.
pub fn unrank(m: i64, n: i64, k: i64) -> Result<Term, Error> {
    let rank = u64::try_from(k).map_err(|_| invalid_rank(k))?;
    unrank_with_table(m, n, &rank, &CountTable::new())
}

// Unrank with arbitrary-precision counting.
pub fn unrank_big(m: i64, n: i64, k: &BigUint) -> Result<Term, Error> {
    unrank_with_table(m, n, k, &CountTable::new())
}

// Unrank against an explicit shared table.
pub fn unrank_with_table<T: Count>(
    m: i64,
    n: i64,
    k: &T,
    table: &CountTable<T>,
) -> Result<Term, Error> {
    unranker::unrank(validate("m", m)?, validate("n", n)?, k, table)
}

// Produce the lazy, length-known, randomly-indexable sequence of every term
// with at most `m` free variables and size `n`, in ascending rank order.
pub fn enumerate_terms(m: i64, n: i64) -> Result<TermSequence<u64>, Error> {
    enumerate_terms_with_table(m, n, Rc::new(CountTable::new()))
}

// Enumerate with arbitrary-precision counting.
pub fn enumerate_terms_big(m: i64, n: i64) -> Result<TermSequence<BigUint>, Error> {
    enumerate_terms_with_table(m, n, Rc::new(CountTable::new()))
}

// Enumerate against an explicit shared table.
pub fn enumerate_terms_with_table<T: Count>(
    m: i64,
    n: i64,
    table: Rc<CountTable<T>>,
) -> Result<TermSequence<T>, Error> {
    TermSequence::new(validate("m", m)?, validate("n", n)?, table)
}
