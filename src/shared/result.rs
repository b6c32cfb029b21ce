/// Result alias with `anyhow::Error` as the error type.
///
/// Typed failures are raised as `TevCatError` and can be recovered with
/// `downcast_ref::<TevCatError>()` where the kind matters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
