use crate::interpreter::builder::NodeBuilder;
use crate::interpreter::classifier::ClassifiedToken;
use crate::interpreter::error::ParseError;
use crate::interpreter::symbol::Symbol;
use anyhow::{bail, Result};
use log::trace;

/// Generates a tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to a tree.
/// * `builder`: Creates each node of the tree.
///
/// returns: The root of the generated tree.
pub(crate) fn new_tree<B: NodeBuilder>(
    postfix_tokens: Vec<ClassifiedToken>,
    builder: &B,
) -> Result<B::Node> {
    let mut operands: Vec<B::Node> = Vec::new();

    for token in postfix_tokens {
        match token.symbol {
            Symbol::Operand => {
                trace!("leaf `{}`", token);
                operands.push(builder.build_leaf(&token.word)?)
            }
            Symbol::Operator { arity, .. } => {
                let available = operands.len();
                if available < arity {
                    bail!(ParseError::InsufficientOperands {
                        operator: token.word,
                        arity,
                        available,
                    });
                }
                // The last `arity` nodes, still in left-to-right order.
                let operator_operands = operands.split_off(available - arity);
                trace!("operator `{}` takes {} operand(s)", token, arity);
                operands.push(builder.build_operator(&token.word, operator_operands)?);
            }
            Symbol::OpenParenthesis | Symbol::CloseParenthesis => {
                bail!(ParseError::MalformedProgram { token: token.word });
            }
        }
    }

    let root = operands.pop().ok_or(ParseError::EmptyInput)?;
    if !operands.is_empty() {
        bail!(ParseError::TooManyOperands {
            remaining: operands.len() + 1,
        });
    }
    Ok(root)
}
