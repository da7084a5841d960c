use std::fmt::{Display, Formatter, Result};

// A term of the De Bruijn-indexed binary lambda calculus. Variables reference
// their binders numerically, using the convention of the binary encoding:
// indices are 1-based, with the innermost enclosing binder addressed as 1.
// Terms are fully owned trees; no node is shared or mutated after
// construction, and structural equality is term identity.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Term {
    Variable(usize),
    Abstraction(Box<Term>),
    Application(Box<Term>, Box<Term>),
}

impl Term {
    // The size of a term is the length in bits of its binary encoding: a
    // variable of index `d` is encoded in unary and costs `d + 1` bits, while
    // an abstraction or an application costs 2 bits for its tag plus the
    // sizes of its children.
    pub fn size(&self) -> usize {
        match self {
            Self::Variable(index) => index + 1,
            Self::Abstraction(body) => 2 + body.size(),
            Self::Application(applicand, argument) => 2 + applicand.size() + argument.size(),
        }
    }

    // Check that every variable in the term references either one of its
    // enclosing binders or one of at most `free_variables` free variables.
    pub fn uses_at_most(&self, free_variables: usize) -> bool {
        match self {
            Self::Variable(index) => *index >= 1 && *index <= free_variables,
            Self::Abstraction(body) => body.uses_at_most(free_variables + 1),
            Self::Application(applicand, argument) => {
                applicand.uses_at_most(free_variables) && argument.uses_at_most(free_variables)
            }
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Variable(index) => write!(f, "{}", index),
            Self::Abstraction(body) => write!(f, "\u{03bb}{}", body),
            Self::Application(applicand, argument) => write!(f, "({} {})", applicand, argument),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::term::Term::{Abstraction, Application, Variable};

    #[test]
    fn size_of_variable() {
        assert_eq!(Variable(1).size(), 2);
        assert_eq!(Variable(3).size(), 4);
    }

    #[test]
    fn size_of_abstraction() {
        // The identity function has the smallest closed encoding: 4 bits.
        let identity = Abstraction(Box::new(Variable(1)));

        assert_eq!(identity.size(), 4);
    }

    #[test]
    fn size_of_application() {
        let identity = Abstraction(Box::new(Variable(1)));
        let term = Application(Box::new(identity.clone()), Box::new(identity));

        assert_eq!(term.size(), 10);
    }

    #[test]
    fn structural_equality() {
        let term = Abstraction(Box::new(Application(
            Box::new(Variable(1)),
            Box::new(Variable(1)),
        )));

        assert_eq!(term, term.clone());
        assert_ne!(term, Abstraction(Box::new(Variable(1))));
    }

    #[test]
    fn uses_at_most_closed_term() {
        let identity = Abstraction(Box::new(Variable(1)));

        assert!(identity.uses_at_most(0));
    }

    #[test]
    fn uses_at_most_free_variable() {
        assert!(Variable(1).uses_at_most(1));
        assert!(!Variable(1).uses_at_most(0));
        assert!(!Variable(2).uses_at_most(1));
    }

    #[test]
    fn uses_at_most_under_binders() {
        // \x. \y. x is closed, but its body mentions the outer binder.
        let term = Abstraction(Box::new(Abstraction(Box::new(Variable(2)))));

        assert!(term.uses_at_most(0));
    }

    #[test]
    fn display_terms() {
        let identity = Abstraction(Box::new(Variable(1)));
        let term = Abstraction(Box::new(Application(
            Box::new(Variable(1)),
            Box::new(Variable(1)),
        )));

        assert_eq!(identity.to_string(), "\u{03bb}1");
        assert_eq!(term.to_string(), "\u{03bb}(1 1)");
    }
}
