use crate::value::Value;

/// Local backward rule of a differentiable scalar operation.
///
/// Every operation that creates a non-leaf `Value` stores one of these
/// variants in the output node's `grad_fn`. A variant holds handles to the
/// operation's inputs plus the scalars captured at construction time, so the
/// backward pass never recomputes forward values.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    /// `lhs + rhs`
    Add { lhs: Value, rhs: Value },
    /// `lhs * rhs`
    Mul {
        lhs: Value,
        rhs: Value,
        lhs_data: f64,
        rhs_data: f64,
    },
    /// `base ^ exponent` with a constant real exponent.
    Pow {
        base: Value,
        base_data: f64,
        exponent: f64,
    },
    /// `tanh(input)`; `output` is the forward result.
    Tanh { input: Value, output: f64 },
    /// `1 / (1 + e^-input)`; `output` is the forward result.
    Sigmoid { input: Value, output: f64 },
    /// `max(input, 0)`
    Relu { input: Value, input_data: f64 },
    /// `input`
    Identity { input: Value },
    /// `e^input`; `output` is the forward result.
    Exp { input: Value, output: f64 },
    /// `ln(input)`
    Ln { input: Value, input_data: f64 },
    /// `min(lhs, rhs)`
    Min {
        lhs: Value,
        rhs: Value,
        lhs_data: f64,
        rhs_data: f64,
    },
    /// `max(lhs, rhs)`
    Max {
        lhs: Value,
        rhs: Value,
        lhs_data: f64,
        rhs_data: f64,
    },
}

impl BackwardOp {
    /// Returns the inputs of the operation, in forward order.
    ///
    /// The order matches the contributions returned by [`BackwardOp::backward`].
    pub fn inputs(&self) -> Vec<&Value> {
        use BackwardOp::*;
        match self {
            Add { lhs, rhs } | Mul { lhs, rhs, .. } | Min { lhs, rhs, .. } | Max { lhs, rhs, .. } => {
                vec![lhs, rhs]
            }
            Pow { base, .. } => vec![base],
            Tanh { input, .. }
            | Sigmoid { input, .. }
            | Relu { input, .. }
            | Identity { input }
            | Exp { input, .. }
            | Ln { input, .. } => vec![input],
        }
    }

    /// Consumes the rule and returns the owned input handles.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        use BackwardOp::*;
        match self {
            Add { lhs, rhs } | Mul { lhs, rhs, .. } | Min { lhs, rhs, .. } | Max { lhs, rhs, .. } => {
                vec![lhs, rhs]
            }
            Pow { base, .. } => vec![base],
            Tanh { input, .. }
            | Sigmoid { input, .. }
            | Relu { input, .. }
            | Identity { input }
            | Exp { input, .. }
            | Ln { input, .. } => vec![input],
        }
    }

    /// Computes the contribution of `grad_output` (the output node's
    /// accumulated gradient) to each input's gradient.
    ///
    /// Returns one entry per input, in the order of [`BackwardOp::inputs`].
    pub fn backward(&self, grad_output: f64) -> Vec<f64> {
        use BackwardOp::*;
        let g = grad_output;
        match *self {
            Add { .. } => vec![g, g],
            Mul {
                lhs_data, rhs_data, ..
            } => vec![rhs_data * g, lhs_data * g],
            Pow {
                base_data,
                exponent,
                ..
            } => {
                // d/dx x^0 is 0 everywhere, including x = 0.
                if exponent == 0.0 {
                    vec![0.0]
                } else {
                    vec![exponent * base_data.powf(exponent - 1.0) * g]
                }
            }
            Tanh { output, .. } => vec![(1.0 - output * output) * g],
            Sigmoid { output, .. } => vec![output * (1.0 - output) * g],
            // Strict boundary: no gradient at exactly zero.
            Relu { input_data, .. } => vec![if input_data > 0.0 { g } else { 0.0 }],
            Identity { .. } => vec![g],
            Exp { output, .. } => vec![output * g],
            Ln { input_data, .. } => vec![g / input_data],
            // Ties route gradient to neither side.
            Min {
                lhs_data, rhs_data, ..
            } => vec![
                if lhs_data < rhs_data { g } else { 0.0 },
                if rhs_data < lhs_data { g } else { 0.0 },
            ],
            Max {
                lhs_data, rhs_data, ..
            } => vec![
                if lhs_data > rhs_data { g } else { 0.0 },
                if rhs_data > lhs_data { g } else { 0.0 },
            ],
        }
    }

    /// Diagnostic label of the operation.
    pub fn tag(&self) -> String {
        use BackwardOp::*;
        match self {
            Add { .. } => "+".to_string(),
            Mul { .. } => "*".to_string(),
            Pow { exponent, .. } => format!("**{}", exponent),
            Tanh { .. } => "tanh".to_string(),
            Sigmoid { .. } => "sigmoid".to_string(),
            Relu { .. } => "relu".to_string(),
            Identity { .. } => "id".to_string(),
            Exp { .. } => "exp".to_string(),
            Ln { .. } => "ln".to_string(),
            Min { .. } => "min".to_string(),
            Max { .. } => "max".to_string(),
        }
    }
}
