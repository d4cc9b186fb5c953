use crate::error::TypeMismatchError;
use oxrdf::{Graph, NamedNodeRef, TermRef};

/// Returns the literal values of all the triples of `graph` with `property` as predicate.
///
/// The values are yielded lazily in the graph iteration order.
/// A triple whose object is an IRI or a blank node yields a [`TypeMismatchError`] instead of a value.
///
/// ```
/// use oxconvert::model::*;
/// use oxconvert::property_values;
///
/// let foaf_name = NamedNodeRef::new("http://xmlns.com/foaf/0.1/name")?;
/// let foaf_knows = NamedNodeRef::new("http://xmlns.com/foaf/0.1/knows")?;
/// let alice = NamedNodeRef::new("http://example.org/alice")?;
/// let bob = NamedNodeRef::new("http://example.org/bob")?;
///
/// let mut graph = Graph::new();
/// graph.insert(TripleRef::new(alice, foaf_name, LiteralRef::new_simple_literal("Alice")));
/// graph.insert(TripleRef::new(alice, foaf_knows, bob));
///
/// let names = property_values(&graph, foaf_name).collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(names, ["Alice"]);
///
/// let error = property_values(&graph, foaf_knows).next().unwrap().unwrap_err();
/// assert_eq!(error.found(), &Term::from(bob));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn property_values<'a>(
    graph: &'a Graph,
    property: NamedNodeRef<'a>,
) -> impl Iterator<Item = Result<&'a str, TypeMismatchError>> + 'a {
    graph
        .triples_for_predicate(property)
        .map(move |triple| match triple.object {
            TermRef::Literal(literal) => Ok(literal.value()),
            object => Err(TypeMismatchError::new(
                triple.subject.to_string(),
                property.into_owned(),
                object.into_owned(),
            )),
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic_in_result_fn)]

    use super::*;
    use oxrdf::vocab::xsd;
    use oxrdf::{BlankNode, LiteralRef, TripleRef};
    use std::collections::BTreeSet;
    use std::error::Error;

    const FOAF_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");
    const FOAF_MBOX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/mbox");
    const ALICE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.org/alice");
    const BOB: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.org/bob");

    #[test]
    fn only_matching_predicate_is_returned() -> Result<(), Box<dyn Error>> {
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(
            ALICE,
            FOAF_NAME,
            LiteralRef::new_simple_literal("Alice"),
        ));
        graph.insert(TripleRef::new(
            ALICE,
            FOAF_MBOX,
            NamedNodeRef::new("mailto:alice@example.org")?,
        ));
        graph.insert(TripleRef::new(
            BOB,
            NamedNodeRef::new("http://xmlns.com/foaf/0.1/nick")?,
            LiteralRef::new_simple_literal("bobby"),
        ));
        assert_eq!(
            property_values(&graph, FOAF_NAME).collect::<Result<Vec<_>, _>>()?,
            ["Alice"]
        );
        Ok(())
    }

    #[test]
    fn every_matching_triple_is_returned() -> Result<(), Box<dyn Error>> {
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(
            ALICE,
            FOAF_NAME,
            LiteralRef::new_simple_literal("Alice"),
        ));
        graph.insert(TripleRef::new(
            ALICE,
            FOAF_NAME,
            LiteralRef::new_language_tagged_literal_unchecked("Alicia", "es"),
        ));
        graph.insert(TripleRef::new(
            BOB,
            FOAF_NAME,
            LiteralRef::new_typed_literal("Bob", xsd::STRING),
        ));
        let values = property_values(&graph, FOAF_NAME).collect::<Result<BTreeSet<_>, _>>()?;
        assert_eq!(values, BTreeSet::from(["Alice", "Alicia", "Bob"]));
        Ok(())
    }

    #[test]
    fn resources_are_not_stringified() {
        let mut graph = Graph::new();
        let node = BlankNode::new_unchecked("b0");
        graph.insert(TripleRef::new(ALICE, FOAF_NAME, &node));
        let errors = property_values(&graph, FOAF_NAME)
            .filter_map(Result::err)
            .collect::<Vec<_>>();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].subject(), "<http://example.org/alice>");
        assert_eq!(errors[0].property().as_ref(), FOAF_NAME);
        assert!(errors[0].found().is_blank_node());
    }

    #[test]
    fn no_match_is_empty() {
        let graph = Graph::new();
        assert_eq!(property_values(&graph, FOAF_NAME).count(), 0);
    }
}
