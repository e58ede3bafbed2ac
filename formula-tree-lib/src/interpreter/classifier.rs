use crate::interpreter::symbol::Symbol;
use anyhow::Result;
use std::fmt;
use std::fmt::Formatter;

/// Decides what each token of an expression means.
///
/// Must be total over every token the caller will pass to
/// [`FormulaTreeFactory::parse`](crate::interpreter::FormulaTreeFactory::parse).
/// The factory calls it once per token, but returning the same [`Symbol`]
/// for the same text is still expected.
pub trait TokenClassifier {
    fn classify(&self, word: &str) -> Result<Symbol>;
}

impl<F> TokenClassifier for F
where
    F: Fn(&str) -> Result<Symbol>,
{
    fn classify(&self, word: &str) -> Result<Symbol> {
        self(word)
    }
}

/// A token together with the symbol it was classified as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifiedToken {
    pub(crate) word: String,
    pub(crate) symbol: Symbol,
}

impl ClassifiedToken {
    pub(crate) fn new(word: impl Into<String>, symbol: Symbol) -> ClassifiedToken {
        ClassifiedToken {
            word: word.into(),
            symbol,
        }
    }

    pub(crate) fn classify(classifier: &impl TokenClassifier, word: &str) -> Result<Self> {
        let symbol = classifier.classify(word)?;
        Ok(ClassifiedToken::new(word, symbol))
    }
}

impl fmt::Display for ClassifiedToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
