/// Errors reported by the checked entry points.
///
/// The raw kernel never returns these; it trusts its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Input '{name}' must have at least one limb")]
    EmptyOperand { name: &'static str },

    #[error("Output must have at least {required} limbs, got {actual}")]
    OutputTooShort { required: usize, actual: usize },

    #[error("Value requires {required} limbs but only {available} are available")]
    ValueTooLarge { required: usize, available: usize },

    #[error("Batch output must have exactly {required} limbs, got {actual}")]
    BatchOutputMismatch { required: usize, actual: usize },
}
