use oxrdf::{BlankNode, Graph, NamedOrBlankNode, Term, Triple};
use oxrdfio::{RdfParseError, RdfParser};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// An in-memory [`Graph`] together with the prefixes declared by its source document.
///
/// The prefixes are given back to the serializers so that Turtle, RDF/XML and JSON-LD outputs keep the compact names of the source.
///
/// ```
/// use oxconvert::LoadedGraph;
/// use oxconvert::model::*;
///
/// let mut graph = Graph::new();
/// let alice = NamedNodeRef::new("http://example.org/alice")?;
/// graph.insert(TripleRef::new(alice, NamedNodeRef::new("http://xmlns.com/foaf/0.1/name")?, LiteralRef::new_simple_literal("Alice")));
///
/// let loaded = LoadedGraph::new(graph).with_prefix("foaf", "http://xmlns.com/foaf/0.1/");
/// assert_eq!(loaded.len(), 1);
/// assert_eq!(loaded.prefixes().collect::<Vec<_>>(), [("foaf", "http://xmlns.com/foaf/0.1/")]);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Eq, PartialEq)]
pub struct LoadedGraph {
    graph: Graph,
    prefixes: BTreeMap<String, String>,
}

impl LoadedGraph {
    /// Wraps a graph without any prefix.
    #[inline]
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            prefixes: BTreeMap::new(),
        }
    }

    /// Declares a prefix to use when serializing the graph.
    ///
    /// A prefix declared twice keeps its last IRI.
    #[inline]
    #[must_use]
    pub fn with_prefix(mut self, name: impl Into<String>, iri: impl Into<String>) -> Self {
        self.prefixes.insert(name.into(), iri.into());
        self
    }

    /// The triples.
    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// The declared prefixes as `(name, IRI)` pairs, sorted by name.
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(name, iri)| (name.as_str(), iri.as_str()))
    }

    /// Number of triples in the graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Reads a whole document into memory.
    ///
    /// Nothing is returned if the document is invalid: the first error aborts the parsing.
    pub(crate) fn parse(parser: RdfParser, reader: impl Read) -> Result<Self, RdfParseError> {
        let mut quads = parser.without_named_graphs().for_reader(reader);
        let mut graph = Graph::new();
        let mut labels = BlankNodeLabels::default();
        for quad in &mut quads {
            graph.insert(&labels.relabel(quad?.into()));
        }
        let prefixes = quads
            .prefixes()
            .map(|(name, iri)| (name.to_owned(), iri.to_owned()))
            .collect();
        Ok(Self { graph, prefixes })
    }
}

impl From<Graph> for LoadedGraph {
    #[inline]
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}

/// Gives blank nodes the labels `b0`, `b1`... in order of first appearance.
///
/// Parsers allocate random blank node ids, so without this two reads of the same file would not serialize to the same bytes.
#[derive(Default)]
struct BlankNodeLabels {
    labels: HashMap<BlankNode, BlankNode>,
}

impl BlankNodeLabels {
    fn relabel(&mut self, mut triple: Triple) -> Triple {
        triple.subject = match triple.subject {
            NamedOrBlankNode::BlankNode(node) => self.label(node).into(),
            subject => subject,
        };
        triple.object = match triple.object {
            Term::BlankNode(node) => self.label(node).into(),
            object => object,
        };
        triple
    }

    fn label(&mut self, node: BlankNode) -> BlankNode {
        let next = self.labels.len();
        self.labels
            .entry(node)
            .or_insert_with(|| BlankNode::new_unchecked(format!("b{next}")))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic_in_result_fn)]

    use super::*;
    use oxrdf::{LiteralRef, NamedNodeRef, NamedOrBlankNodeRef};
    use oxrdfio::RdfFormat;
    use std::collections::BTreeSet;
    use std::error::Error;

    const TURTLE: &str = r#"@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix ex: <http://example.org/> .
ex:alice foaf:name "Alice" ;
    foaf:knows [ foaf:name "Bob" ; foaf:knows [ foaf:name "Carol" ] ] .
"#;

    #[test]
    fn parse_keeps_prefixes() -> Result<(), Box<dyn Error>> {
        let loaded = LoadedGraph::parse(
            RdfParser::from_format(RdfFormat::Turtle),
            TURTLE.as_bytes(),
        )?;
        assert_eq!(loaded.len(), 5);
        assert_eq!(
            loaded.prefixes().collect::<Vec<_>>(),
            [
                ("ex", "http://example.org/"),
                ("foaf", "http://xmlns.com/foaf/0.1/")
            ]
        );
        Ok(())
    }

    #[test]
    fn blank_nodes_are_relabelled() -> Result<(), Box<dyn Error>> {
        let loaded = LoadedGraph::parse(
            RdfParser::from_format(RdfFormat::Turtle),
            TURTLE.as_bytes(),
        )?;
        let labels = loaded
            .graph()
            .iter()
            .filter_map(|triple| match triple.subject {
                NamedOrBlankNodeRef::BlankNode(node) => Some(node.as_str()),
                _ => None,
            })
            .collect::<BTreeSet<_>>();
        assert_eq!(labels, BTreeSet::from(["b0", "b1"]));
        let foaf_name = NamedNodeRef::new("http://xmlns.com/foaf/0.1/name")?;
        let bob = loaded
            .graph()
            .subject_for_predicate_object(foaf_name, LiteralRef::new_simple_literal("Bob"))
            .ok_or("Bob not found")?;
        assert!(bob.is_blank_node());
        Ok(())
    }

    #[test]
    fn parsing_twice_gives_the_same_graph() -> Result<(), Box<dyn Error>> {
        let first = LoadedGraph::parse(
            RdfParser::from_format(RdfFormat::Turtle),
            TURTLE.as_bytes(),
        )?;
        let second = LoadedGraph::parse(
            RdfParser::from_format(RdfFormat::Turtle),
            TURTLE.as_bytes(),
        )?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn named_graphs_are_rejected() {
        let nquads = "<http://example.org/s> <http://example.org/p> <http://example.org/o> <http://example.org/g> .\n";
        LoadedGraph::parse(
            RdfParser::from_format(RdfFormat::NQuads),
            nquads.as_bytes(),
        )
        .unwrap_err();
    }

    #[test]
    fn syntax_errors_abort_parsing() {
        let broken = "<http://example.org/s> <http://example.org/p> .\n";
        assert!(matches!(
            LoadedGraph::parse(
                RdfParser::from_format(RdfFormat::NTriples),
                broken.as_bytes()
            ),
            Err(RdfParseError::Syntax(_))
        ));
    }
}
