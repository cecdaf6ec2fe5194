//! Error types with rich diagnostics using miette.
//!
//! The renderer itself is a deterministic transform and cannot fail once a
//! symbol is well-formed; errors surface at the boundary where raw record
//! fields are converted into the typed model. Any such failure aborts the
//! whole component render - there is no partial-document recovery.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while converting raw symbol record fields into the
/// typed model.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unrecognized pin direction code {code:?}")]
    #[diagnostic(
        code(symsvg::symbol::invalid_direction),
        help("pin direction must be one of R, L, U, D")
    )]
    InvalidDirection { code: char },

    #[error("field {field} is not an integer: {value:?}")]
    #[diagnostic(code(symsvg::symbol::invalid_number))]
    InvalidNumber {
        field: &'static str,
        value: String,
    },
}
