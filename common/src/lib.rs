pub mod tracer;

/// Floating point type used for weights and sample values.
pub type Real = f64;
/// Integer type of the numeric configuration, for counts and indices.
pub type Int = i64;

/// Type of every time coordinate handled by the samplers.
pub type Time = Real;
