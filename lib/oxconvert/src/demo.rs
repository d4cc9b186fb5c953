//! A small hand-built graph describing a person with the [vCard RDF](https://www.w3.org/Submission/vcard-rdf/) vocabulary.
//!
//! It allows to exercise the [`Converter`](crate::Converter) without any source file.
//!
//! ```
//! use oxconvert::demo::{demo_graph, vcard, PERSON_IRI};
//! use oxconvert::model::*;
//!
//! let demo = demo_graph();
//! assert_eq!(demo.len(), 4);
//! let person = NamedNodeRef::new(PERSON_IRI)?;
//! assert_eq!(
//!     demo.graph().object_for_subject_predicate(person, vcard::FN),
//!     Some(LiteralRef::new_simple_literal("John Smith").into())
//! );
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use crate::loaded::LoadedGraph;
use oxrdf::{BlankNodeRef, Graph, LiteralRef, NamedNodeRef, TermRef, TripleRef};
use std::io::{self, Write};

/// Terms of the [vCard RDF](https://www.w3.org/Submission/vcard-rdf/) vocabulary used by the demo graph.
pub mod vcard {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/2001/vcard-rdf/3.0#";
    /// Formatted name.
    pub const FN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/vcard-rdf/3.0#FN");
    /// Structured name.
    pub const N: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/vcard-rdf/3.0#N");
    pub const GIVEN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/vcard-rdf/3.0#Given");
    pub const FAMILY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/vcard-rdf/3.0#Family");
}

/// The described person.
pub const PERSON_IRI: &str = "http://somewhere/JohnSmith";
pub const GIVEN_NAME: &str = "John";
pub const FAMILY_NAME: &str = "Smith";

/// Builds the demo graph:
///
/// ```ttl
/// @prefix vcard: <http://www.w3.org/2001/vcard-rdf/3.0#> .
/// <http://somewhere/JohnSmith> vcard:FN "John Smith" ;
///     vcard:N [ vcard:Given "John" ; vcard:Family "Smith" ] .
/// ```
pub fn demo_graph() -> LoadedGraph {
    let person = NamedNodeRef::new_unchecked(PERSON_IRI);
    // Same label as the first blank node of a loaded file
    let name = BlankNodeRef::new_unchecked("b0");
    let full_name = format!("{GIVEN_NAME} {FAMILY_NAME}");

    let mut graph = Graph::new();
    graph.insert(TripleRef::new(
        person,
        vcard::FN,
        LiteralRef::new_simple_literal(&full_name),
    ));
    graph.insert(TripleRef::new(person, vcard::N, name));
    graph.insert(TripleRef::new(
        name,
        vcard::GIVEN,
        LiteralRef::new_simple_literal(GIVEN_NAME),
    ));
    graph.insert(TripleRef::new(
        name,
        vcard::FAMILY,
        LiteralRef::new_simple_literal(FAMILY_NAME),
    ));
    LoadedGraph::new(graph).with_prefix("vcard", vcard::NAMESPACE)
}

/// Prints every triple of `graph` on four lines: subject, predicate, object and a `...` separator.
///
/// Literal values are printed between double quotes, IRIs and blank nodes in N-Triples syntax.
pub fn describe<W: Write>(graph: &Graph, mut write: W) -> io::Result<W> {
    for triple in graph {
        writeln!(write, "Subject = {}", triple.subject)?;
        writeln!(write, "Predicate = {}", triple.predicate)?;
        match triple.object {
            TermRef::Literal(literal) => writeln!(write, "Object = \"{}\"", literal.value())?,
            object => writeln!(write, "Object = {object}")?,
        }
        writeln!(write, "...")?;
    }
    Ok(write)
}
