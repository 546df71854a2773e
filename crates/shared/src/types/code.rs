//! Typed ledger codes.
//!
//! Using typed codes prevents accidentally passing a `CostCenter` where an `AccountCode` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed code wrappers around ledger key strings.
macro_rules! typed_code {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates a code from anything string-like, trimming surrounding whitespace.
            #[must_use]
            pub fn new(code: impl AsRef<str>) -> Self {
                Self(code.as_ref().trim().to_string())
            }

            /// Returns the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self::new(code)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_code!(CompanyCode, "Company code of a ledger line (`RBUKRS`).");
typed_code!(AccountCode, "General ledger account code (`RACCT`).");
typed_code!(CostCenter, "Cost center of a ledger line (`RCNTR`).");
typed_code!(DocumentNumber, "Accounting document number (`BELNR`).");

impl AccountCode {
    /// Returns true if the account is an expense account by numbering convention.
    ///
    /// Accounts starting with 5 (cost of sales), 6 (operating expenses) or
    /// 7 (financial result) count as spend.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        matches!(self.0.as_bytes().first(), Some(b'5' | b'6' | b'7'))
    }
}
