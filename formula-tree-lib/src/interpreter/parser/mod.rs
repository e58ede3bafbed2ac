mod infix_converter;
mod tree_generator;

use crate::interpreter::builder::NodeBuilder;
use crate::interpreter::classifier::ClassifiedToken;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::parser::tree_generator::new_tree;
use anyhow::Result;
use itertools::Itertools;
use log::debug;

/// Parses the given classified tokens into a tree made by `builder`.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
/// * `builder`: Creates the nodes of the resulting tree.
///
/// returns: The root of the tree.
pub(crate) fn parse<B: NodeBuilder>(
    infix_tokens: Vec<ClassifiedToken>,
    builder: &B,
) -> Result<B::Node> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("postfix order: {}", postfix_tokens.iter().join(" "));
    new_tree(postfix_tokens, builder)
}
