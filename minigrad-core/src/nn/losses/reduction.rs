use crate::error::MinigradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Specifies the reduction to apply to the per-sample losses:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl Reduction {
    /// Folds per-sample losses into one node.
    ///
    /// `Mean` is `sum * (1 / n)` and fails with `EmptyInput` on an empty
    /// list; `Sum` of an empty list is a constant `0` node.
    pub fn apply(&self, losses: &[Value]) -> Result<Value, MinigradError> {
        let total: Value = losses.iter().sum();
        match self {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                if losses.is_empty() {
                    return Err(MinigradError::EmptyInput {
                        operation: "Reduction::Mean".to_string(),
                    });
                }
                Ok(total * (1.0 / losses.len() as f64))
            }
        }
    }
}

impl FromStr for Reduction {
    type Err = MinigradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MinigradError::InvalidReduction {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Mean => f.write_str("mean"),
            Reduction::Sum => f.write_str("sum"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Reduction;
    use crate::error::MinigradError;
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse() {
        assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
        assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
        assert_eq!(
            "none".parse::<Reduction>().unwrap_err(),
            MinigradError::InvalidReduction {
                name: "none".to_string()
            }
        );
    }

    #[test]
    fn test_mean_and_sum() -> Result<(), MinigradError> {
        let losses = Value::from_slice(&[1.0, 2.0, 6.0]);
        assert_relative_eq!(Reduction::Sum.apply(&losses)?.data(), 9.0);
        let mean = Reduction::Mean.apply(&losses)?;
        assert_relative_eq!(mean.data(), 3.0);
        mean.backward();
        for l in &losses {
            assert_relative_eq!(l.grad(), 1.0 / 3.0);
        }
        Ok(())
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            Reduction::Mean.apply(&[]),
            Err(MinigradError::EmptyInput { .. })
        ));
        assert_eq!(Reduction::Sum.apply(&[]).map(|v| v.data()), Ok(0.0));
    }
}
