pub mod blockchain;
pub mod consensus;
pub mod formatting;
pub mod validation;

pub use validation::{run_conditions, validate_spend_bundle};
#[cfg(feature = "parallel")]
pub use validation::validate_spend_bundle_parallel;

fn _version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
fn _pkg_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

pub fn version() -> String {
    format!("{}: {}", _pkg_name(), _version())
}

#[test]
fn test_version() {
    println!("{}", version());
}
