//! A small arithmetic grammar built on top of [`FormulaTreeFactory`].
//!
//! Operators: `+ -` (precedence 1), `* /` (2), `^` (3), and the prefix functions
//! `sqrt`, `ln` (one argument) and `clamp` (three arguments) with precedence 4.
//! All of them group to the left. Tokens must be separated by whitespace.
//!
//! Since a function has the same precedence as the function before it, a
//! function used as the argument of another one must be parenthesised:
//! `sqrt ( sqrt x )` parses, while `sqrt sqrt x` fails with a missing operand.

use crate::interpreter::builder::NodeBuilder;
use crate::interpreter::classifier::TokenClassifier;
use crate::interpreter::symbol::Symbol;
use crate::interpreter::FormulaTreeFactory;
use anyhow::{bail, Context, Result};
use itertools::Itertools;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};
use string_builder::Builder;

#[derive(Debug, Copy, Clone, Default)]
pub struct ArithmeticClassifier;

impl TokenClassifier for ArithmeticClassifier {
    fn classify(&self, word: &str) -> Result<Symbol> {
        let symbol = match word {
            "+" | "-" => Symbol::operator(2, 1),
            "*" | "/" => Symbol::operator(2, 2),
            "^" => Symbol::operator(2, 3),
            "sqrt" | "ln" => Symbol::operator(1, 4),
            "clamp" => Symbol::operator(3, 4),
            "(" => Symbol::OpenParenthesis,
            ")" => Symbol::CloseParenthesis,
            word if is_operand(word) => Symbol::Operand,
            word => bail!("unknown token `{}`", word),
        };
        Ok(symbol)
    }
}

/// Literals and identifiers, e.g. `3`, `0.5` or `x_1`.
fn is_operand(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '_')
}

fn is_function(operator: &str) -> bool {
    operator.starts_with(char::is_alphabetic)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Atom(String),
    Operation {
        operator: String,
        operands: Vec<Formula>,
    },
}

impl Formula {
    pub fn new_atom(text: impl Into<String>) -> Formula {
        Formula::Atom(text.into())
    }

    pub fn new_operation(operator: impl Into<String>, operands: Vec<Formula>) -> Formula {
        Formula::Operation {
            operator: operator.into(),
            operands,
        }
    }

    /// Fully parenthesised infix text, e.g. `((3*7)+(6-4))` or `clamp(x, 0, 1)`.
    pub fn to_infix(&self) -> Result<String> {
        let mut builder = Builder::default();
        self.build_infix(&mut builder)?;
        builder.string().context("Failed to build infix string")
    }

    fn build_infix(&self, builder: &mut Builder) -> Result<()> {
        match self {
            Formula::Atom(text) => builder.append(text.as_str()),
            Formula::Operation { operator, operands } => match operands.as_slice() {
                [left, right] if !is_function(operator) => {
                    builder.append("(");
                    left.build_infix(builder)?;
                    builder.append(operator.as_str());
                    right.build_infix(builder)?;
                    builder.append(")");
                }
                _ => {
                    let arguments = operands
                        .iter()
                        .map(Formula::to_infix)
                        .collect::<Result<Vec<_>>>()?;
                    builder.append(format!("{}({})", operator, arguments.join(", ")));
                }
            },
        }
        Ok(())
    }

    /// Space-separated tokens with every operator after its operands.
    pub fn to_postfix(&self) -> String {
        let mut words = Vec::new();
        self.collect_postfix(&mut words);
        words.iter().join(" ")
    }

    fn collect_postfix<'a>(&'a self, words: &mut Vec<&'a str>) {
        match self {
            Formula::Atom(text) => words.push(text),
            Formula::Operation { operator, operands } => {
                operands
                    .iter()
                    .for_each(|operand| operand.collect_postfix(words));
                words.push(operator);
            }
        }
    }

    fn add_to_tree(&self, builder: &mut TreeBuilder) {
        match self {
            Formula::Atom(text) => {
                builder.add_empty_child(text.clone());
            }
            Formula::Operation { operator, operands } => {
                builder.begin_child(operator.clone());
                operands.iter().for_each(|operand| operand.add_to_tree(builder));
                builder.end_child();
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut builder = TreeBuilder::new("formula".into());
        self.add_to_tree(&mut builder);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct FormulaBuilder;

impl NodeBuilder for FormulaBuilder {
    type Node = Formula;

    fn build_leaf(&self, word: &str) -> Result<Formula> {
        Ok(Formula::new_atom(word))
    }

    fn build_operator(&self, word: &str, operands: Vec<Formula>) -> Result<Formula> {
        Ok(Formula::new_operation(word, operands))
    }
}

/// Parses a whitespace-separated arithmetic expression.
///
/// # Examples
///
/// ```
/// use formula_tree::interpreter::arithmetic;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let formula = arithmetic::parse("sqrt ( 2 + x ^ 2 )")?;
/// assert_eq!(formula.to_postfix(), "2 x 2 ^ + sqrt");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(expression: &str) -> Result<Formula> {
    let factory = FormulaTreeFactory::new(ArithmeticClassifier, FormulaBuilder);
    factory.parse(expression.split_whitespace())
}
