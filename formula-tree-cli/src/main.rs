use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use formula_tree::interpreter::arithmetic;
use formula_tree::interpreter::arithmetic::Formula;
use log::info;

/// Parses an arithmetic expression into a formula tree
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to parse, with tokens separated by spaces, e.g. "3 * ( x + 1 )"
    expression: String,

    /// How to print the parsed formula
    #[clap(short, long, value_enum, default_value = "tree")]
    format: OutputFormat,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Tree,
    Infix,
    Postfix,
}

fn render(formula: &Formula, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Tree => Ok(formula.to_string()),
        OutputFormat::Infix => formula.to_infix(),
        OutputFormat::Postfix => Ok(formula.to_postfix()),
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    info!("parsing `{}`", args.expression);
    let formula = arithmetic::parse(&args.expression)
        .with_context(|| format!("could not parse expression `{}`", args.expression))?;
    println!("{}", render(&formula, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_valid() {
        use clap::CommandFactory;
        Arguments::command().debug_assert();
    }

    #[test]
    fn postfix_format_lists_operators_after_operands() {
        let formula = arithmetic::parse("a + b * c").unwrap();

        assert_eq!(render(&formula, OutputFormat::Postfix).unwrap(), "a b c * +");
    }

    #[test]
    fn infix_format_is_fully_parenthesised() {
        let formula = arithmetic::parse("( a + b ) * c").unwrap();

        assert_eq!(render(&formula, OutputFormat::Infix).unwrap(), "((a+b)*c)");
    }
}
