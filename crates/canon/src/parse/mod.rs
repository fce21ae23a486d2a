//! # Statement Parsing
//!
//! Turns the flattened N-Triples text emitted by the upstream RDF/XML transform
//! into a [`Store`].
//!
//! ## Grammar
//!
//! Each non-blank line holds exactly one statement:
//!
//! ```text
//! statement := subject WS predicate WS object WS? '.'
//! subject   := blank | iri
//! predicate := iri
//! object    := blank | literal | iri
//! blank     := '_:id' DIGIT+
//! iri       := '<' [^>]+ '>'
//! literal   := '"' [^"]* '"'
//! ```
//!
//! Angle brackets and quotes are stripped from stored values, while blank node
//! labels keep their prefix. Whitespace around a statement is tolerated, but a
//! single malformed line rejects the whole input: there is no partial store.

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till};
use nom::character::complete::{char, digit1, multispace0, multispace1};
use nom::combinator::{eof, map, recognize};
use nom::error::{VerboseError, VerboseErrorKind, context};
use nom::sequence::{delimited, pair, tuple};
use thiserror::Error;

use crate::store::Store;
use crate::term::{BLANK_PREFIX, Subject, Term, Triple};


//================================================================================================
// Types
//================================================================================================

/// A line that does not match the statement grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed statement on line {line}, column {column}: expected {expected}: {content}")]
pub struct GrammarError {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in bytes, where matching stopped.
    pub column: usize,
    /// The grammar element that was expected there.
    pub expected: &'static str,
    /// The offending line.
    pub content: String,
}

type Res<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

//================================================================================================
// Functions
//================================================================================================

/// Parse a full statement list into a [`Store`].
///
/// # Errors
///
/// Returns a [`GrammarError`] for the first line that does not match the
/// grammar; no store is produced in that case.
pub fn parse(text: &str) -> Result<Store, GrammarError> {
    let mut store = Store::default();

    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let triple = parse_statement(line).map_err(|(column, expected)| GrammarError {
            line: n + 1,
            column,
            expected,
            content: line.to_owned(),
        })?;

        tracing::trace!(
            line = n + 1,
            subject = %triple.subject,
            predicate = %triple.predicate,
            object = %triple.object
        );

        store.insert(triple);
    }

    tracing::debug!(
        subjects = store.len(),
        triples = store.triple_count(),
        "parsed statements"
    );

    Ok(store)
}

/// Parse a single statement line, reporting the failing column and the expected
/// grammar element on error.
fn parse_statement(line: &str) -> Result<Triple, (usize, &'static str)> {
    match statement(line) {
        Ok((_, triple)) => Ok(triple),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            let column = e
                .errors
                .first()
                .map_or(0, |(rest, _)| line.len() - rest.len())
                + 1;
            let expected = e
                .errors
                .iter()
                .find_map(|(_, kind)| match kind {
                    VerboseErrorKind::Context(c) => Some(*c),
                    _ => None,
                })
                .unwrap_or("statement");
            Err((column, expected))
        },
        Err(nom::Err::Incomplete(_)) => Err((line.len() + 1, "complete statement")),
    }
}

fn statement(input: &str) -> Res<'_, Triple> {
    let (rest, (_, subject, _, predicate, _, object, _, _, _, _)) = tuple((
        multispace0,
        context("subject", subject),
        context("whitespace after subject", multispace1),
        context("predicate", iri),
        context("whitespace after predicate", multispace1),
        context("object", object),
        multispace0,
        context("terminating '.'", char('.')),
        multispace0,
        context("end of statement", eof),
    ))(input)?;

    Ok((rest, Triple::new(subject, predicate, object)))
}

fn subject(input: &str) -> Res<'_, Subject> {
    alt((
        map(blank, |b: &str| Subject::Blank(b.to_owned())),
        map(iri, |i: &str| Subject::Iri(i.to_owned())),
    ))(input)
}

fn object(input: &str) -> Res<'_, Term> {
    alt((
        map(blank, |b: &str| Term::Blank(b.to_owned())),
        map(literal, |l: &str| Term::Literal(l.to_owned())),
        map(iri, |i: &str| Term::Iri(i.to_owned())),
    ))(input)
}

fn blank(input: &str) -> Res<'_, &str> {
    recognize(pair(tag(BLANK_PREFIX), digit1))(input)
}

fn iri(input: &str) -> Res<'_, &str> {
    delimited(char('<'), is_not(">"), char('>'))(input)
}

fn literal(input: &str) -> Res<'_, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"'))(input)
}
