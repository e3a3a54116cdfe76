/// Errors from matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// The determinant is exactly zero, so no inverse exists.
    ///
    /// The check is exact, not tolerance based: a nearly singular matrix
    /// still inverts, with very large entries.
    #[error("matrix is singular (determinant is exactly zero)")]
    Singular,
    #[error("expected {expected} elements, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
