/// Reasons a service error payload could not be read in its structured form.
///
/// The public converters never return this; they turn it into a single
/// fallback message carrying the raw payload.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The response body is not valid JSON.
    #[error("failed to parse json body: {0}")]
    MalformedJson(#[from] serde_json::Error),
    /// The response is not a well-formed XML document.
    #[error("failed to parse xml document: {0}")]
    MalformedXml(#[from] roxmltree::Error),
    /// A field or element the payload layout requires is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// A value exists but does not have the expected shape.
    #[error("unexpected value at `{0}`")]
    UnexpectedShape(&'static str),
    /// Positional lookup ran past the children of an `<errordetail>`.
    #[error("error detail has no child node at index {0}")]
    MissingChild(usize),
}
