use crate::{
    counter::{Count, CountTable},
    error::Error,
    format::CodeStr,
    term::Term,
};

// Compute the term at the given 1-based rank within the class of terms with
// at most `m` free variables and size `n`, without enumerating any of its
// predecessors. The walk mirrors the counting recurrence's case order
// exactly: ranks 1 through S(m + 1, n - 2) are abstractions, the following
// ranks are applications grouped by the size of their left child, and the
// final rank is the variable term whenever the indicator admits one. Every
// count comes from the supplied table, so repeated unranking over the same
// class amortizes to the size of the produced term once the table is warm.
pub fn unrank<T: Count>(
    m: usize,
    n: usize,
    rank: &T,
    table: &CountTable<T>,
) -> Result<Term, Error> {
    // Reject nonsensical ranks before doing any counting.
    if *rank < T::one() {
        return Err(Error::InvalidArgument(format!(
            "The rank {} is invalid. Ranks start at {}.",
            rank.code_str(),
            1_usize.code_str(),
        )));
    }

    // The rank must land within the class.
    let total = table.count(m, n)?;
    if *rank > total {
        return Err(Error::RankOutOfRange(format!(
            "The rank {} is out of range. There are only {} terms with at most {} free \
             variables and size {}.",
            rank.code_str(),
            total.code_str(),
            m.code_str(),
            n.code_str(),
        )));
    }

    // At this point 1 <= rank <= total, so the class is nonempty and n >= 2.

    // The indicator's single slot is always the last rank in the class.
    if m >= n - 1 && *rank == total {
        return Ok(Term::Variable(n - 1));
    }

    // The first S(m + 1, n - 2) ranks are abstractions, consumed in the body
    // class's own order.
    let abstractions = table.count(m + 1, n - 2)?;
    if *rank <= abstractions {
        let body = unrank(m + 1, n - 2, rank, table)?;
        return Ok(Term::Abstraction(Box::new(body)));
    }

    // The remaining rank indexes into the application blocks. The block for
    // split point `j` holds S(m, j) * S(m, n - 2 - j) pairs, enumerated
    // row-major with the right child's rank varying fastest.
    // [tag:remaining-in-blocks] The blocks sum to `total` minus the indicator
    // slot and the abstractions, and the two returns above excluded exactly
    // those ranks, so `remaining` always lands inside some block.
    let mut remaining = rank.clone() - abstractions;
    for left_size in 0..=(n - 2) {
        let left_count = table.count(m, left_size)?;
        let right_count = table.count(m, n - 2 - left_size)?;
        let pairs = left_count * right_count.clone();

        if remaining <= pairs {
            // Here pairs >= remaining >= 1, so `right_count` is nonzero and
            // the division is well-defined.
            let (left_offset, right_offset) = (remaining - T::one()).div_rem(&right_count);
            let applicand = unrank(m, left_size, &(left_offset + T::one()), table)?;
            let argument = unrank(m, n - 2 - left_size, &(right_offset + T::one()), table)?;
            return Ok(Term::Application(Box::new(applicand), Box::new(argument)));
        }

        remaining = remaining - pairs;
    }

    // This point should not be reachable due to [ref:remaining-in-blocks].
    panic!()
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_fails,
        counter::CountTable,
        term::Term::{Abstraction, Application, Variable},
        unranker::unrank,
    };
    use num_bigint::BigUint;
    use std::collections::HashSet;

    #[test]
    fn rank_zero_is_invalid() {
        let table = CountTable::<u64>::new();

        assert_fails!(unrank(0, 4, &0_u64, &table), "invalid");
    }

    #[test]
    fn rank_beyond_class_is_rejected() {
        let table = CountTable::<u64>::new();

        // The class (1, 2) holds exactly one term.
        assert_fails!(unrank(1, 2, &2_u64, &table), "out of range");

        // The class (0, 2) is empty, so every rank is out of range.
        assert_fails!(unrank(0, 2, &1_u64, &table), "out of range");
        assert_fails!(unrank(0, 2, &2_u64, &table), "out of range");
    }

    #[test]
    fn last_rank_is_the_variable() {
        let table = CountTable::<u64>::new();

        // Whenever m >= n - 1, the maximal rank of the class is the single
        // variable term of index n - 1.
        for (m, n) in [(1_usize, 2_usize), (2, 3), (3, 4), (5, 4), (9, 10)] {
            let total = table.count(m, n).unwrap();

            assert_eq!(unrank(m, n, &total, &table).unwrap(), Variable(n - 1));
        }
    }

    #[test]
    fn smallest_closed_term_is_the_identity() {
        let table = CountTable::<u64>::new();

        assert_eq!(
            unrank(0, 4, &1_u64, &table).unwrap(),
            Abstraction(Box::new(Variable(1))),
        );
    }

    #[test]
    fn closed_terms_of_size_eight() {
        let table = CountTable::<u64>::new();

        // Abstractions come first, in the body class's order.
        assert_eq!(
            unrank(0, 8, &1_u64, &table).unwrap(),
            Abstraction(Box::new(Abstraction(Box::new(Abstraction(Box::new(
                Variable(1),
            )))))),
        );

        assert_eq!(
            unrank(0, 8, &2_u64, &table).unwrap(),
            Abstraction(Box::new(Application(
                Box::new(Variable(1)),
                Box::new(Variable(1)),
            ))),
        );
    }

    #[test]
    fn application_block_recovery() {
        let table = CountTable::<u64>::new();
        let identity = Abstraction(Box::new(Variable(1)));

        // The class (0, 10) holds 6 terms: 5 abstractions followed by the
        // single application of the identity to itself.
        assert_eq!(table.count(0, 10).unwrap(), 6);
        assert_eq!(
            unrank(0, 10, &6_u64, &table).unwrap(),
            Application(Box::new(identity.clone()), Box::new(identity)),
        );
    }

    #[test]
    fn unranking_is_injective() {
        let table = CountTable::<u64>::new();

        for m in 0..3_usize {
            for n in 0..13_usize {
                let total = table.count(m, n).unwrap();
                let mut terms = HashSet::new();

                for rank in 1..=total {
                    let term = unrank(m, n, &rank, &table).unwrap();

                    // Every term has the size of its class and respects the
                    // free variable bound.
                    assert_eq!(term.size(), n);
                    assert!(term.uses_at_most(m));

                    terms.insert(term);
                }

                // No two ranks map to the same term.
                assert_eq!(terms.len(), usize::try_from(total).unwrap());
            }
        }
    }

    #[test]
    fn ranks_agree_across_integer_types() {
        let narrow = CountTable::<u64>::new();
        let unbounded = CountTable::<BigUint>::new();
        let total = narrow.count(0, 12).unwrap();

        for rank in 1..=total {
            assert_eq!(
                unrank(0, 12, &rank, &narrow).unwrap(),
                unrank(0, 12, &BigUint::from(rank), &unbounded).unwrap(),
            );
        }
    }
}
