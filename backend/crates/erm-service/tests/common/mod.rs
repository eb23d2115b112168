pub mod fixtures;
pub mod test_state;

#[allow(unused_imports)]
pub use fixtures::*;
pub use test_state::*;
