#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintingError {
    /// Some `group`'s fallback layout was itself unrepresentable, so a `Fail` reached the
    /// output. This is a malformed document, not a width problem.
    #[error("Document has no feasible layout: a failed alternative reached the output.")]
    Infeasible,
    #[error("Unknown colour '{0}'.")]
    UnknownColour(String),
    #[error("Unknown render mode '{0}': expected 'pretty', 'smart', or 'compact'.")]
    UnknownRenderMode(String),
}
