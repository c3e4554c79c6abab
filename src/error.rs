use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The input path does not point to a readable document.
    DocumentNotFound(PathBuf),
    /// The block walker was handed something that is neither a document
    /// body nor a table cell.
    InvalidContainer(String),
    /// An embedded picture reference is missing its name or relationship
    /// attributes.
    MalformedResourceReference(String),
    /// A relationship id has no corresponding binary part.
    UnresolvedRelationship(String),
    /// A table has rows of differing cell counts.
    MalformedTable(String),
    /// An export destination could not be created.
    ExportTargetUnwritable(PathBuf, std::io::Error),
    Zip(zip::result::ZipError),
    Xml(roxmltree::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DocumentNotFound(path) => {
                write!(f, "document not found: {}", path.display())
            }
            Error::InvalidContainer(reason) => {
                write!(f, "not a document body or table cell: {reason}")
            }
            Error::MalformedResourceReference(reason) => {
                write!(f, "malformed embedded resource reference: {reason}")
            }
            Error::UnresolvedRelationship(r_id) => {
                write!(f, "relationship id has no binary part: {r_id}")
            }
            Error::MalformedTable(reason) => write!(f, "malformed table: {reason}"),
            Error::ExportTargetUnwritable(path, e) => {
                write!(f, "cannot write export target {}: {e}", path.display())
            }
            Error::Zip(e) => write!(f, "ZIP error: {e}"),
            Error::Xml(e) => write!(f, "XML error: {e}"),
            Error::Json(e) => write!(f, "JSON error: {e}"),
            Error::Csv(e) => write!(f, "CSV error: {e}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Zip(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
