// Container-backed infrastructure for integration tests.

pub mod docker;
