//! Turning `--algo` into calculators.

use std::sync::Arc;

use fibo_core::calculator::{Calculator, FibError};
use fibo_core::registry;

/// `"all"` selects every registered calculator, in registry order; any
/// other value must name exactly one.
pub fn resolve_calculators(algo: &str) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => registry::available()
            .iter()
            .map(|name| registry::lookup(name))
            .collect(),
        name => Ok(vec![registry::lookup(name)?]),
    }
}
