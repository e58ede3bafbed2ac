use std::fmt;
use std::fmt::Formatter;

/// What a token means to the parser, as decided by a
/// [`TokenClassifier`](crate::interpreter::classifier::TokenClassifier).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A value, e.g. `3` or `x`. Becomes a leaf of the tree.
    Operand,
    /// Combines the `arity` nodes to its left (in postfix order) into one.
    ///
    /// e.g.: `+` has arity 2 and `sqrt` has arity 1.
    ///
    /// Higher `precedence` binds tighter, e.g. `^` is 3, `*` is 2 and `+` is 1.
    /// Operators of equal precedence group to the left.
    Operator { arity: usize, precedence: i32 },
    OpenParenthesis,
    CloseParenthesis,
}

impl Symbol {
    pub fn operator(arity: usize, precedence: i32) -> Symbol {
        Symbol::Operator { arity, precedence }
    }

    /// Number of operands this symbol consumes, if it is an operator.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Symbol::Operator { arity, .. } => Some(*arity),
            _ => None,
        }
    }

    pub fn precedence(&self) -> Option<i32> {
        match self {
            Symbol::Operator { precedence, .. } => Some(*precedence),
            _ => None,
        }
    }

    /// False whenever either side is not an operator.
    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        match (self.precedence(), other.precedence()) {
            (Some(a), Some(b)) => a >= b,
            _ => false,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Operand => write!(f, "operand"),
            Symbol::Operator { arity, precedence } => {
                write!(f, "operator(arity {}, precedence {})", arity, precedence)
            }
            Symbol::OpenParenthesis => write!(f, "opening parenthesis"),
            Symbol::CloseParenthesis => write!(f, "closing parenthesis"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_ge_holds_for_equal_precedence() {
        let plus = Symbol::operator(2, 1);
        let minus = Symbol::operator(2, 1);
        assert!(plus.precedence_ge(&minus))
    }

    #[test]
    fn operator_ge_holds_for_higher_precedence() {
        let times = Symbol::operator(2, 2);
        let plus = Symbol::operator(2, 1);
        assert!(times.precedence_ge(&plus));
        assert!(!plus.precedence_ge(&times))
    }

    #[test]
    fn precedence_comparisons_are_false_for_non_operators() {
        let plus = Symbol::operator(2, 1);
        assert!(!Symbol::OpenParenthesis.precedence_ge(&plus));
        assert!(!plus.precedence_ge(&Symbol::Operand));
    }

    #[test]
    fn arity_and_precedence_only_exist_for_operators() {
        assert_eq!(Symbol::operator(3, 4).arity(), Some(3));
        assert_eq!(Symbol::operator(3, 4).precedence(), Some(4));
        assert_eq!(Symbol::Operand.arity(), None);
        assert_eq!(Symbol::CloseParenthesis.precedence(), None);
    }
}
