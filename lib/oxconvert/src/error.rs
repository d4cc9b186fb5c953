use crate::format::OutputFormat;
use oxrdf::{IriParseError, NamedNode, Term};
use oxrdfio::RdfParseError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error raised while loading a graph with [`Converter::load`](crate::Converter::load).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("The file {} does not exist", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The source file exists but could not be opened.
    #[error("Unable to open {}: {source}", path.display())]
    Io {
        /// The path of the source file.
        path: PathBuf,
        /// The error returned by the operating system.
        #[source]
        source: io::Error,
    },
    /// The source content is not a valid serialization or could not be read until its end.
    #[error(transparent)]
    Parse(#[from] RdfParseError),
    /// The base IRI is invalid.
    #[error("Invalid base IRI '{iri}': {error}")]
    InvalidBaseIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
}

impl LoadError {
    pub(crate) fn from_open_error(path: PathBuf, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io {
                path,
                source: error,
            }
        }
    }
}

impl From<LoadError> for io::Error {
    #[inline]
    fn from(error: LoadError) -> Self {
        match error {
            LoadError::NotFound { .. } => Self::new(io::ErrorKind::NotFound, error.to_string()),
            LoadError::Io { source, .. } => source,
            LoadError::Parse(error) => error.into(),
            LoadError::InvalidBaseIri { .. } => {
                Self::new(io::ErrorKind::InvalidInput, error.to_string())
            }
        }
    }
}

/// An error raised while writing one of the output files of [`Converter::emit`](crate::Converter::emit).
#[derive(Debug, Error)]
#[error("Unable to write the {format} file {}: {source}", path.display())]
pub struct WriteError {
    format: OutputFormat,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl WriteError {
    pub(crate) fn new(format: OutputFormat, path: PathBuf, source: io::Error) -> Self {
        Self {
            format,
            path,
            source,
        }
    }

    /// The format that was being written.
    #[inline]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// The file that was being written.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<WriteError> for io::Error {
    #[inline]
    fn from(error: WriteError) -> Self {
        error.source
    }
}

/// A [`property_values`](crate::property_values) match whose object is not a literal.
///
/// IRIs and blank nodes are never turned into strings implicitly.
#[derive(Debug, Clone, Error)]
#[error("The value of {property} for {subject} is {found} where a literal was expected")]
pub struct TypeMismatchError {
    subject: String,
    property: NamedNode,
    found: Term,
}

impl TypeMismatchError {
    pub(crate) fn new(subject: String, property: NamedNode, found: Term) -> Self {
        Self {
            subject,
            property,
            found,
        }
    }

    /// The subject of the mismatching triple, serialized in N-Triples syntax.
    #[inline]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The looked up property.
    #[inline]
    pub fn property(&self) -> &NamedNode {
        &self.property
    }

    /// The object that was found instead of a literal.
    #[inline]
    pub fn found(&self) -> &Term {
        &self.found
    }
}

impl From<TypeMismatchError> for io::Error {
    #[inline]
    fn from(error: TypeMismatchError) -> Self {
        Self::new(io::ErrorKind::InvalidData, error)
    }
}
