/*!
Runtime access errors.

Almost every misuse of a sum or pack is a compile error. The failures which can only be detected at
runtime are asking a sum for an alternative it does not currently hold, and a checked transform whose
target list is not exactly the union of its branch results.
*/
use crate::normal::Layout;
use thiserror::Error;

/// An error accessing the contents of a sum
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The requested alternative is not the live one
    #[error("requested alternative `{requested}`, but the sum holds `{held}`")]
    Mismatch {
        /// The name of the requested alternative
        requested: &'static str,
        /// The name of the live alternative
        held: &'static str,
    },
    /// The target of a checked transform differs from the union of its branch results
    #[error("transform target {target} is not the union {branches} of its branch results")]
    LayoutMismatch {
        /// The layout of the requested target list
        target: Layout,
        /// The normalized union of the branch results
        branches: Layout,
    },
}
