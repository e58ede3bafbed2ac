use crate::interpreter::classifier::ClassifiedToken;
use crate::interpreter::error::ParseError;
use crate::interpreter::symbol::Symbol;
use anyhow::{bail, Result};
use log::trace;

/// Reorders infix tokens so that every operator directly follows its operands.
///
/// Parentheses are consumed; every other token appears exactly once in the output.
/// An empty input gives an empty output.
pub(crate) fn infix_to_postfix(tokens: Vec<ClassifiedToken>) -> Result<Vec<ClassifiedToken>> {
    let mut operators: Vec<ClassifiedToken> = Vec::new();
    let mut output: Vec<ClassifiedToken> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.symbol {
            Symbol::Operand => {
                trace!("operand `{}` -> output", token);
                output.push(token)
            }
            Symbol::OpenParenthesis => {
                trace!("`{}` -> operator stack", token);
                operators.push(token)
            }
            Symbol::Operator { .. } => parse_operator_token(&mut operators, &mut output, token),
            Symbol::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output, token)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<ClassifiedToken>,
    output: &mut Vec<ClassifiedToken>,
) -> Result<()> {
    while let Some(operator) = operators.pop() {
        if operator.symbol == Symbol::OpenParenthesis {
            bail!(ParseError::UnbalancedParentheses {
                token: operator.word,
            });
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<ClassifiedToken>,
    output: &mut Vec<ClassifiedToken>,
    closing: ClassifiedToken,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => {
                bail!(ParseError::UnbalancedParentheses {
                    token: closing.word,
                });
            }
            Some(top_of_operator_stack) => {
                if top_of_operator_stack.symbol == Symbol::OpenParenthesis {
                    // Discard the open parenthesis.
                    trace!("`{}` closes `{}`", closing, top_of_operator_stack);
                    return Ok(());
                }
                output.push(top_of_operator_stack);
            }
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<ClassifiedToken>,
    output: &mut Vec<ClassifiedToken>,
    token: ClassifiedToken,
) {
    // An open parenthesis never compares as an operator, so popping stops there.
    while let Some(other_operator) = pop_binding_at_least_as_tightly(operators, &token.symbol) {
        trace!("`{}` pops `{}` -> output", token, other_operator);
        output.push(other_operator);
    }

    trace!("`{}` -> operator stack", token);
    operators.push(token);
}

fn pop_binding_at_least_as_tightly(
    operators: &mut Vec<ClassifiedToken>,
    symbol: &Symbol,
) -> Option<ClassifiedToken> {
    if operators.last()?.symbol.precedence_ge(symbol) {
        operators.pop()
    } else {
        None
    }
}
