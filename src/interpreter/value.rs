/// Lexically scoped environments.
///
/// Defines the `Environment` type: a mapping from names to values with an
/// optional enclosing environment. Lookup walks outward; writes always go
/// to the current frame. Environments are shared between the call frames
/// that create them and the closures that capture them.
pub mod env;

pub mod core;
