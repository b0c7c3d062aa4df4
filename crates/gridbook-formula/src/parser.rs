//! Formula text parsing
//!
//! The grammar is deliberately small: `=` followed by one function name
//! and one parenthesised argument, nothing else. There are no operators,
//! no nested calls, and no cell-to-cell recalculation, so a formula is
//! fully described by its function and its raw argument text.

use lazy_regex::regex_captures;

use crate::error::{FormulaError, FormulaResult};
use crate::functions::Function;

/// A parsed formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// The aggregate function to apply
    pub function: Function,
    /// The raw argument text between the parentheses, trimmed
    pub argument: String,
}

/// Check whether cell text looks like a formula (starts with `=`)
pub fn is_formula(text: &str) -> bool {
    text.trim_start().starts_with('=')
}

/// Parse formula text of the form `=NAME(argument)`
///
/// # Examples
/// ```
/// use gridbook_formula::{parse_formula, Function};
///
/// let formula = parse_formula("=SUM(A1:B5)").unwrap();
/// assert_eq!(formula.function, Function::Sum);
/// assert_eq!(formula.argument, "A1:B5");
/// ```
pub fn parse_formula(text: &str) -> FormulaResult<Formula> {
    let Some((_, name, argument)) =
        regex_captures!(r"^\s*=\s*([A-Za-z]+)\s*\((.*)\)\s*$", text)
    else {
        return Err(FormulaError::Parse(text.to_string()));
    };

    let function = Function::from_name(name)
        .ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))?;

    Ok(Formula {
        function,
        argument: argument.trim().to_string(),
    })
}
