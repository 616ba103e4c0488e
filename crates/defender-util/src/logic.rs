//! Boolean reductions over slices.

/// Fold a slice of flags with a logical operator.
///
/// Empty slices reduce to the operator's identity: `true` for AND, `false`
/// for OR and XOR.
pub trait BoolReduce {
    /// True when every flag is set.
    fn all_and(&self) -> bool;
    /// True when any flag is set.
    fn any_or(&self) -> bool;
    /// True when an odd number of flags is set.
    fn xor(&self) -> bool;

    /// Negated [`BoolReduce::all_and`].
    fn nand(&self) -> bool {
        !self.all_and()
    }

    /// Negated [`BoolReduce::any_or`].
    fn nor(&self) -> bool {
        !self.any_or()
    }

    /// Negated [`BoolReduce::xor`].
    fn xnor(&self) -> bool {
        !self.xor()
    }
}

impl BoolReduce for [bool] {
    fn all_and(&self) -> bool {
        self.iter().all(|&b| b)
    }

    fn any_or(&self) -> bool {
        self.iter().any(|&b| b)
    }

    fn xor(&self) -> bool {
        self.iter().fold(false, |acc, &b| acc ^ b)
    }
}
