// ============================================================================
// Filter Errors
// ============================================================================

/// Failure while coercing a raw filter value to its attribute's type.
///
/// Everything except dates coerces losslessly-or-lossily but never fails;
/// the date parser is the one unguarded path and its errors are terminal for
/// the filter application that hit them.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("cannot parse {0:?} as a date")]
    InvalidDate(String),

    #[error("filtering by select attributes is not implemented")]
    SelectNotSupported,
}

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("could not resolve attribute from IRI {iri:?}")]
    AttributeLookup {
        iri: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
