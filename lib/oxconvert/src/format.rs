use oxrdfio::{JsonLdProfileSet, RdfFormat};
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// The serializations written by [`Converter::emit`](crate::Converter::emit).
///
/// Each format is bound to a fixed file extension:
///
/// ```
/// use oxconvert::OutputFormat;
///
/// let extensions = OutputFormat::ALL.map(OutputFormat::file_extension);
/// assert_eq!(extensions, ["ttl", "ntri", "nquad", "xml", "json"]);
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum OutputFormat {
    /// [Turtle](https://www.w3.org/TR/turtle/)
    Turtle,
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
    /// [N-Quads](https://www.w3.org/TR/n-quads/)
    ///
    /// The graph is written as the default graph: lines are identical to the N-Triples ones.
    NQuads,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/)
    RdfXml,
    /// [JSON-LD](https://www.w3.org/TR/json-ld/)
    JsonLd,
}

impl OutputFormat {
    /// All the formats, in the order they are written.
    pub const ALL: [Self; 5] = [
        Self::Turtle,
        Self::NTriples,
        Self::NQuads,
        Self::RdfXml,
        Self::JsonLd,
    ];

    /// The extension of the files written in this format.
    #[inline]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::NTriples => "ntri",
            Self::NQuads => "nquad",
            Self::RdfXml => "xml",
            Self::JsonLd => "json",
        }
    }

    /// The format name.
    ///
    /// ```
    /// use oxconvert::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::RdfXml.name(), "RDF/XML")
    /// ```
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Turtle => "Turtle",
            Self::NTriples => "N-Triples",
            Self::NQuads => "N-Quads",
            Self::RdfXml => "RDF/XML",
            Self::JsonLd => "JSON-LD",
        }
    }

    /// The [`RdfFormat`] used to read and write this format.
    #[inline]
    pub const fn rdf_format(self) -> RdfFormat {
        match self {
            Self::Turtle => RdfFormat::Turtle,
            Self::NTriples => RdfFormat::NTriples,
            Self::NQuads => RdfFormat::NQuads,
            Self::RdfXml => RdfFormat::RdfXml,
            Self::JsonLd => RdfFormat::JsonLd {
                profile: JsonLdProfileSet::empty(),
            },
        }
    }

    /// Looks for a format from one of the extensions returned by [`file_extension`](Self::file_extension).
    ///
    /// ```
    /// use oxconvert::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_extension("nquad"), Some(OutputFormat::NQuads));
    /// assert_eq!(OutputFormat::from_extension("trig"), None);
    /// ```
    #[inline]
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.file_extension().eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for OutputFormat {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Guesses the format of a source file from its extension.
///
/// The extensions written by [`OutputFormat`] are recognized first, then the ones known by [`RdfFormat::from_extension`].
/// Files without a known extension are read as RDF/XML.
///
/// ```
/// use oxconvert::input_format_from_path;
/// use oxconvert::io::RdfFormat;
///
/// assert_eq!(input_format_from_path("res/data.ntri".as_ref()), RdfFormat::NTriples);
/// assert_eq!(input_format_from_path("res/data.trig".as_ref()), RdfFormat::TriG);
/// assert_eq!(input_format_from_path("res/data".as_ref()), RdfFormat::RdfXml);
/// ```
pub fn input_format_from_path(path: &Path) -> RdfFormat {
    path.extension()
        .and_then(OsStr::to_str)
        .and_then(format_from_extension)
        .unwrap_or(RdfFormat::RdfXml)
}

/// Looks for a format from an extension like `"nt"` or a media type like `"application/n-triples"`.
///
/// ```
/// use oxconvert::input_format_from_name;
/// use oxconvert::io::RdfFormat;
///
/// assert_eq!(input_format_from_name("ttl"), Some(RdfFormat::Turtle));
/// assert_eq!(input_format_from_name("application/rdf+xml"), Some(RdfFormat::RdfXml));
/// assert_eq!(input_format_from_name("foo"), None);
/// ```
pub fn input_format_from_name(name: &str) -> Option<RdfFormat> {
    format_from_extension(name).or_else(|| RdfFormat::from_media_type(name))
}

fn format_from_extension(extension: &str) -> Option<RdfFormat> {
    OutputFormat::from_extension(extension)
        .map(OutputFormat::rdf_format)
        .or_else(|| RdfFormat::from_extension(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_formats_read_their_own_extension() {
        for format in OutputFormat::ALL {
            assert_eq!(
                input_format_from_path(format!("out.{}", format.file_extension()).as_ref()),
                format.rdf_format()
            );
        }
    }

    #[test]
    fn extensions_are_case_insensitive() {
        assert_eq!(OutputFormat::from_extension("TTL"), Some(OutputFormat::Turtle));
        assert_eq!(
            input_format_from_path(Path::new("ISWC2010.RDF")),
            RdfFormat::RdfXml
        );
    }
}
