//! A collection of utilities shared by the light client crates.
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

/// Ensure that a condition is true, otherwise return an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

#[cfg(test)]
mod tests {
    fn checked_div(a: u64, b: u64) -> Result<u64, &'static str> {
        ensure!(b != 0, "division by zero");
        Ok(a / b)
    }

    #[test]
    fn returns_error_when_condition_fails() {
        assert_eq!(checked_div(1, 0), Err("division by zero"));
    }

    #[test]
    fn continues_when_condition_holds() {
        assert_eq!(checked_div(6, 3), Ok(2));
    }
}
