/// Resolution domain - the component identity contract and its consumers
///
/// `domain` holds pure value types with no I/O; `services` holds the
/// logic that works on collections of components.
pub mod domain;
pub mod services;
