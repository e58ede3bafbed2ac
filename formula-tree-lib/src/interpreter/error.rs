use thiserror::Error;

/// Why an expression could not be turned into a tree.
///
/// Returned inside an [`anyhow::Error`]; use `downcast_ref::<ParseError>()`
/// to tell the kinds apart. Errors raised by the classifier or the builder
/// are passed through untouched and will not downcast to this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A closing parenthesis without an opener, or an opener never closed.
    #[error("unbalanced parentheses: `{token}` has no matching parenthesis")]
    UnbalancedParentheses { token: String },

    #[error("missing operand for operator `{operator}`: expected {arity}, found {available}")]
    InsufficientOperands {
        operator: String,
        arity: usize,
        available: usize,
    },

    /// Parsing finished with more than one sub-tree left uncombined.
    #[error("too many operands for operators: {remaining} sub-expressions were never combined")]
    TooManyOperands { remaining: usize },

    /// A parenthesis reached the tree generator, which only accepts postfix tokens.
    #[error("unexpected parenthesis `{token}` in postfix token stream")]
    MalformedProgram { token: String },

    #[error("expression has no operands or operators to build a tree from")]
    EmptyInput,
}
