//! Calculator lookup by command-line name.

use std::sync::Arc;

use crate::calculator::{Calculator, FibError};
use crate::fastdoubling::FastDoubling;
use crate::iterative::IterativeReference;

#[cfg(not(feature = "gmp"))]
const NAMES: &[&str] = &["fast", "iterative"];
#[cfg(feature = "gmp")]
const NAMES: &[&str] = &["fast", "iterative", "gmp"];

/// Names accepted by [`lookup`], in comparison order.
#[must_use]
pub fn available() -> &'static [&'static str] {
    NAMES
}

/// The calculator registered under `name` ("fastdoubling" is an alias of
/// "fast").
pub fn lookup(name: &str) -> Result<Arc<dyn Calculator>, FibError> {
    match name {
        "fast" | "fastdoubling" => Ok(Arc::new(FastDoubling)),
        "iterative" => Ok(Arc::new(IterativeReference)),
        #[cfg(feature = "gmp")]
        "gmp" => Ok(Arc::new(crate::calculator_gmp::GmpFastDoubling)),
        _ => Err(FibError::UnknownAlgorithm(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_and_alias() {
        assert_eq!(lookup("fast").unwrap().name(), "FastDoubling");
        assert_eq!(lookup("fastdoubling").unwrap().name(), "FastDoubling");
    }

    #[test]
    fn iterative() {
        assert_eq!(lookup("iterative").unwrap().name(), "Iterative");
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            lookup("matrix").err(),
            Some(FibError::UnknownAlgorithm("matrix".into()))
        );
    }

    #[test]
    fn every_available_name_resolves() {
        let names = available();
        assert!(names.contains(&"fast"));
        assert!(names.contains(&"iterative"));
        assert_eq!(names.contains(&"gmp"), cfg!(feature = "gmp"));
        for name in names {
            assert!(lookup(name).is_ok(), "{name}");
        }
    }
}
