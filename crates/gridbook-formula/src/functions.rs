//! The supported aggregate functions

use std::fmt;

/// An aggregate function over a range of numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sum,
    Average,
    Count,
    Max,
    Min,
}

impl Function {
    /// Look up a function by name, case-insensitively
    ///
    /// `AVG` is accepted as an alias for `AVERAGE`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "SUM" => Some(Function::Sum),
            "AVERAGE" | "AVG" => Some(Function::Average),
            "COUNT" => Some(Function::Count),
            "MAX" => Some(Function::Max),
            "MIN" => Some(Function::Min),
            _ => None,
        }
    }

    /// Canonical function name
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sum => "SUM",
            Function::Average => "AVERAGE",
            Function::Count => "COUNT",
            Function::Max => "MAX",
            Function::Min => "MIN",
        }
    }

    /// Apply the function to the collected numeric values
    ///
    /// Every function returns `0.0` on empty input, AVERAGE included, so
    /// a range with no numeric cells evaluates without an error value.
    pub fn apply(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        match self {
            Function::Sum => values.iter().sum(),
            Function::Average => values.iter().sum::<f64>() / values.len() as f64,
            Function::Count => values.len() as f64,
            Function::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Function::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Function::from_name("SUM"), Some(Function::Sum));
        assert_eq!(Function::from_name("sum"), Some(Function::Sum));
        assert_eq!(Function::from_name("Average"), Some(Function::Average));
        assert_eq!(Function::from_name("avg"), Some(Function::Average));
        assert_eq!(Function::from_name("COUNT"), Some(Function::Count));
        assert_eq!(Function::from_name("PRODUCT"), None);
        assert_eq!(Function::from_name(""), None);
    }

    #[test]
    fn test_apply() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Function::Sum.apply(&values), 10.0);
        assert_eq!(Function::Average.apply(&values), 2.5);
        assert_eq!(Function::Count.apply(&values), 4.0);
        assert_eq!(Function::Max.apply(&values), 4.0);
        assert_eq!(Function::Min.apply(&values), 1.0);
    }

    #[test]
    fn test_empty_input_is_zero() {
        for function in [
            Function::Sum,
            Function::Average,
            Function::Count,
            Function::Max,
            Function::Min,
        ] {
            assert_eq!(function.apply(&[]), 0.0, "{} on empty input", function);
        }
    }
}
