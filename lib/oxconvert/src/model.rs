//! Data structures for [RDF 1.1 Concepts](https://www.w3.org/TR/rdf11-concepts/) using [OxRDF](https://crates.io/crates/oxrdf).
//!
//! Usage example:
//!
//! ```
//! use oxconvert::model::*;
//!
//! let mut graph = Graph::default();
//!
//! let alice = NamedNodeRef::new("http://example.org/alice")?;
//! let name = NamedNodeRef::new("http://xmlns.com/foaf/0.1/name")?;
//! graph.insert(TripleRef::new(alice, name, LiteralRef::new_simple_literal("Alice")));
//!
//! assert_eq!(graph.triples_for_predicate(name).count(), 1);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

pub use oxrdf::*;
