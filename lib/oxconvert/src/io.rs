//! Parsers and serializers for RDF formats using [OxRDF I/O](https://crates.io/crates/oxrdfio).
//!
//! Usage example converting a Turtle file to a N-Triples file:
//! ```
//! use oxconvert::io::{RdfFormat, RdfParser, RdfSerializer};
//!
//! let turtle_file = "@prefix foaf: <http://xmlns.com/foaf/0.1/> .
//! <http://example.org/alice> foaf:name \"Alice\" .";
//!
//! let ntriples_file = "<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> \"Alice\" .\n";
//!
//! let mut serializer = RdfSerializer::from_format(RdfFormat::NTriples).for_writer(Vec::new());
//! for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(turtle_file.as_bytes()) {
//!     serializer.serialize_quad(&quad?)?;
//! }
//! assert_eq!(serializer.finish()?, ntriples_file.as_bytes());
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

pub use oxrdfio::{
    JsonLdProfileSet, RdfFormat, RdfParseError, RdfParser, RdfSerializer, RdfSyntaxError,
    ReaderQuadParser, WriterQuadSerializer,
};
