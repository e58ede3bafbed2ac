pub mod arithmetic;
pub mod builder;
pub mod classifier;
pub mod error;
mod parser;
pub mod symbol;

pub use builder::NodeBuilder;
pub use classifier::TokenClassifier;
pub use error::ParseError;
pub use symbol::Symbol;

use crate::interpreter::classifier::ClassifiedToken;
use anyhow::Result;
use log::debug;

/// Turns infix token sequences into trees of the caller's choosing.
///
/// The factory knows nothing about the tree it creates: `classifier` decides what
/// each token means and `builder` creates the nodes.
pub struct FormulaTreeFactory<C, B> {
    classifier: C,
    builder: B,
}

impl<C, B> FormulaTreeFactory<C, B>
where
    C: TokenClassifier,
    B: NodeBuilder,
{
    pub fn new(classifier: C, builder: B) -> Self {
        FormulaTreeFactory {
            classifier,
            builder,
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Parses the given tokens into an equivalent tree.
    ///
    /// Every token is classified exactly once. Errors from the classifier or the
    /// builder are returned as they are; problems with the shape of the expression
    /// are returned as a [`ParseError`].
    ///
    /// # Arguments
    ///
    /// * `words`: The tokens of the expression, in infix format.
    ///
    /// returns: The root of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use formula_tree::interpreter::arithmetic::{ArithmeticClassifier, FormulaBuilder};
    /// use formula_tree::interpreter::FormulaTreeFactory;
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let factory = FormulaTreeFactory::new(ArithmeticClassifier, FormulaBuilder);
    /// let tree = factory.parse("3 * 7 + ( 6 - 4 )".split(' '))?;
    /// assert_eq!(tree.to_infix()?, "((3*7)+(6-4))");
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn parse<I, S>(&self, words: I) -> Result<B::Node>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = words
            .into_iter()
            .map(|word| ClassifiedToken::classify(&self.classifier, word.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        debug!("parsing {} token(s)", tokens.len());

        let result = parser::parse(tokens, &self.builder);
        if let Err(error) = &result {
            debug!("parse failed: {}", error);
        }
        result
    }
}
