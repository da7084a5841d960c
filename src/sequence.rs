use crate::{
    counter::{Count, CountTable},
    error::Error,
    term::Term,
    unranker::unrank,
};
use std::rc::Rc;

// The ordered sequence of every term with at most `m` free variables and size
// `n`, produced lazily by repeated unranking against a shared count table.
// Constructing the sequence computes S(m, n) once, which warms every table
// entry unranking will need, so each element is afterwards computed
// independently of the others. The sequence holds no iteration state of its
// own, which makes iteration restartable and random access by rank free of
// any cursor.
pub struct TermSequence<T: Count> {
    m: usize,
    n: usize,
    length: T,
    table: Rc<CountTable<T>>,
}

impl<T: Count> TermSequence<T> {
    pub fn new(m: usize, n: usize, table: Rc<CountTable<T>>) -> Result<Self, Error> {
        // Computing the length eagerly populates the table.
        let length = table.count(m, n)?;

        Ok(Self {
            m,
            n,
            length,
            table,
        })
    }

    // The number of terms in the sequence, which equals S(m, n).
    pub fn length(&self) -> T {
        self.length.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.length.is_zero()
    }

    // Fetch the term at the given 1-based rank. Iteration order equals index
    // order: the i-th term yielded by `iter` equals `get(i)`.
    pub fn get(&self, rank: &T) -> Result<Term, Error> {
        unrank(self.m, self.n, rank, &self.table)
    }

    pub fn iter(&self) -> TermSequenceIter<'_, T> {
        TermSequenceIter {
            sequence: self,
            next_rank: T::one(),
        }
    }
}

// An iterator over a term sequence. Multiple independent iterators over the
// same sequence are fine, since each one just tracks the next rank to fetch.
pub struct TermSequenceIter<'a, T: Count> {
    sequence: &'a TermSequence<T>,
    next_rank: T,
}

impl<T: Count> Iterator for TermSequenceIter<'_, T> {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        if self.next_rank > self.sequence.length {
            return None;
        }

        // In-range ranks over a warm table cannot fail.
        let term = self.sequence.get(&self.next_rank).ok()?;
        self.next_rank = self.next_rank.clone() + T::one();
        Some(term)
    }
}

impl<'a, T: Count> IntoIterator for &'a TermSequence<T> {
    type Item = Term;
    type IntoIter = TermSequenceIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
