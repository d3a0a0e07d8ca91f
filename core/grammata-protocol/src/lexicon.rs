//! Namespaced identifiers attached to word records.
//!
//! Lexical references point into Strong's Greek lexicon (`strongs:G3056`),
//! morphological tags follow Robinson's scheme (`robinson:N-NSM`).

use alloc::format;
use alloc::string::String;

pub const STRONGS_NAMESPACE: &str = "strongs";
pub const STRONGS_PREFIX: &str = "G";
pub const ROBINSON_NAMESPACE: &str = "robinson";

/// `"3056"` -> `"strongs:G3056"`
pub fn strongs_ref(number: &str) -> String {
    format!("{}:{}{}", STRONGS_NAMESPACE, STRONGS_PREFIX, number)
}

/// `"N-NSM"` -> `"robinson:N-NSM"`
pub fn robinson_tag(code: &str) -> String {
    format!("{}:{}", ROBINSON_NAMESPACE, code)
}

/// Splits `"robinson:N-NSM"` into `("robinson", "N-NSM")`.
pub fn split_namespace(value: &str) -> Option<(&str, &str)> {
    value.split_once(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_and_splits() {
        assert_eq!(strongs_ref("2532"), "strongs:G2532");
        assert_eq!(robinson_tag("V-PAI-1P"), "robinson:V-PAI-1P");
        assert_eq!(split_namespace("robinson:V-PAI-1P"), Some(("robinson", "V-PAI-1P")));
        assert_eq!(split_namespace("plain"), None);
    }
}
