use anyhow::Result;

/// Creates the nodes of the caller's tree type.
///
/// The parser never looks inside a node; it only hands the nodes returned
/// here back as operands of later operators.
pub trait NodeBuilder {
    type Node;

    /// Creates a leaf node for an operand token.
    fn build_leaf(&self, word: &str) -> Result<Self::Node>;

    /// Creates a node for an operator token.
    ///
    /// # Arguments
    ///
    /// * `word`: The operator token.
    /// * `operands`: Exactly as many nodes as the operator's arity, in the
    ///   left-to-right order they appeared in the expression.
    fn build_operator(&self, word: &str, operands: Vec<Self::Node>) -> Result<Self::Node>;
}
