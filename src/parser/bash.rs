//! `##` annotation parser: line-by-line state machine.
//!
//! Each line is classified by an ordered rule table (first match wins) and
//! the classified line then drives a two-state machine: `Idle` until a
//! `name() {` header is seen, `InFunction` until the closing `}`.

use super::ParseError;
use crate::model::{FunctionRecord, Records};
use crate::sanitize::{sanitize, Mode};
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*#").unwrap());

static RE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*##[ACDE]\s+").unwrap());

// Function header with the opening brace on the same line
static RE_FUNC_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\(\)\s+\{\s*$").unwrap());

static RE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\}\s*$").unwrap());

static RE_USAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*##C\s+(.+)$").unwrap());

static RE_TYPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*##(A|D|E)\s+(.+)$").unwrap());

static RE_ARG_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)=(.+)$").unwrap());

// -- Line classification ------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Argument,
    Description,
    Example,
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `#` comment that is not a directive
    Comment,
    Header(&'a str),
    Close,
    Usage(&'a str),
    Typed(Tag, &'a str),
    Other,
}

type Rule = for<'a> fn(&'a str) -> Option<Line<'a>>;

/// Evaluated top to bottom; the first rule that matches classifies the line.
const RULES: &[Rule] = &[plain_comment, header, close, usage, typed];

fn classify(line: &str) -> Line<'_> {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(Line::Other)
}

fn plain_comment(line: &str) -> Option<Line<'_>> {
    (RE_COMMENT.is_match(line) && !RE_DIRECTIVE.is_match(line)).then_some(Line::Comment)
}

fn header(line: &str) -> Option<Line<'_>> {
    let caps = RE_FUNC_DECL.captures(line)?;
    Some(Line::Header(caps.get(1)?.as_str()))
}

fn close(line: &str) -> Option<Line<'_>> {
    RE_CLOSE.is_match(line).then_some(Line::Close)
}

fn usage(line: &str) -> Option<Line<'_>> {
    let caps = RE_USAGE.captures(line)?;
    Some(Line::Usage(caps.get(1)?.as_str()))
}

fn typed(line: &str) -> Option<Line<'_>> {
    let caps = RE_TYPED.captures(line)?;
    let tag = match &caps[1] {
        "A" => Tag::Argument,
        "D" => Tag::Description,
        _ => Tag::Example,
    };
    Some(Line::Typed(tag, caps.get(2)?.as_str()))
}

// -- Parser state -------------------------------------------------------------

enum State {
    Idle,
    InFunction(OpenFunction),
}

/// A function whose closing brace has not been seen yet.
struct OpenFunction {
    record: FunctionRecord,
    /// Last `##C` text, prefixed with the function name
    usage: Option<String>,
}

impl OpenFunction {
    fn new(name: &str) -> Self {
        Self {
            record: FunctionRecord::new(name),
            usage: None,
        }
    }

    fn apply(&mut self, tag: Tag, text: &str, line_no: usize) -> Result<(), ParseError> {
        match tag {
            Tag::Argument => {
                let caps = RE_ARG_SPLIT
                    .captures(text)
                    .ok_or_else(|| ParseError::MalformedArgument {
                        line: line_no,
                        text: text.to_string(),
                    })?;
                self.record
                    .set_argument(sanitize(&caps[1], Mode::Full), sanitize(&caps[2], Mode::Full));
            }
            Tag::Description => self.record.description.push(sanitize(text, Mode::Full)),
            Tag::Example => self.record.examples.push(sanitize(text, Mode::Simple)),
        }
        Ok(())
    }

    /// Finalize the usage line and hand the record over.
    fn seal(self) -> FunctionRecord {
        let mut record = self.record;
        let usage = self.usage.unwrap_or_else(|| record.name.clone());
        record.usage = sanitize(&usage, Mode::Full);
        record
    }
}

// -- Public API ---------------------------------------------------------------

/// Extract documented functions from one file's lines.
///
/// A function still open when the input ends is sealed as if its closing
/// brace had been read.
///
/// # Errors
///
/// Returns [`ParseError::MalformedArgument`] for a `##A` directive that has
/// no `arg=description` split.
pub fn extract<'a, I>(lines: I) -> Result<Records, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Records::new();

    let state = lines
        .into_iter()
        .enumerate()
        .try_fold(State::Idle, |state, (idx, line)| {
            step(state, classify(line), idx + 1, &mut records)
        })?;

    if let State::InFunction(open) = state {
        insert(&mut records, open.seal());
    }

    Ok(records)
}

/// Extract documented functions from a whole file's text.
pub fn parse(content: &str) -> Result<Records, ParseError> {
    extract(content.lines())
}

// -- Transitions --------------------------------------------------------------

fn step(
    state: State,
    line: Line<'_>,
    line_no: usize,
    records: &mut Records,
) -> Result<State, ParseError> {
    match (state, line) {
        (State::Idle, Line::Header(name)) => Ok(State::InFunction(OpenFunction::new(name))),
        (State::Idle, _) => Ok(State::Idle),
        (State::InFunction(open), Line::Close) => {
            insert(records, open.seal());
            Ok(State::Idle)
        }
        (State::InFunction(mut open), Line::Usage(text)) => {
            open.usage = Some(format!("{} {}", open.record.name, text));
            Ok(State::InFunction(open))
        }
        (State::InFunction(mut open), Line::Typed(tag, text)) => {
            open.apply(tag, text, line_no)?;
            Ok(State::InFunction(open))
        }
        // Comments, nested headers and code lines leave the context untouched
        (state @ State::InFunction(_), _) => Ok(state),
    }
}

/// A later definition of the same name in one file replaces the earlier one.
fn insert(records: &mut Records, record: FunctionRecord) {
    records.insert(record.name.clone(), record);
}
