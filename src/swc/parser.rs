//! SWC line parser.
//!
//! Accepts, per physical line and in this order of priority:
//! - blank lines (spaces/tabs, then a terminator)
//! - `#` comment lines, collected into [`Graph::meta`]
//! - data lines: `id type x y z radius parent`
//!
//! Parsing stops at the first line that is none of the above. Whatever was
//! accepted before that line stays in the graph.

use std::fmt::Write as _;

use tracing::{debug, warn};

use crate::model::{Edge, Graph, Vertex, VertexType};
use crate::{Error, Result};
use super::scanner::Scanner;

/// Data-line field that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Coordinates,
    Radius,
    Parent,
}

impl Field {
    fn hint(self) -> &'static str {
        match self {
            Field::Type => "You need to specify type as an integer value.",
            Field::Coordinates => "You need to specify coordinates as three double values.",
            Field::Radius => "You need to specify a radius as a float value.",
            Field::Parent => "You need to specify an id of a parent, or -1 if there is no parent.",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Type => "type",
            Field::Coordinates => "coordinates",
            Field::Radius => "radius",
            Field::Parent => "parent",
        };
        f.write_str(name)
    }
}

/// Outcome of one `accept_line` step.
enum Line {
    Accepted,
    EndOfInput,
    /// The line is not valid SWC. Carries the field that broke it, if the
    /// line got far enough to look like a data line.
    Rejected(Option<Field>),
}

/// SWC reader with a per-instance diagnostic buffer.
///
/// One instance may be reused for any number of documents; diagnostics from
/// the previous call are discarded at the start of each call.
#[derive(Debug, Default)]
pub struct Parser {
    pub(crate) message: String,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics produced by the most recent call. Empty after success.
    pub fn error_message(&self) -> &str {
        &self.message
    }

    /// Parse an in-memory SWC document into `graph`.
    ///
    /// `graph` is cleared first. On failure it keeps everything read from
    /// the lines before the offending one.
    pub fn parse(&mut self, input: impl AsRef<[u8]>, graph: &mut Graph) -> Result<()> {
        let input = input.as_ref();
        self.message.clear();
        graph.clear();

        let line_count = input.iter().filter(|&&b| b == b'\n').count() + 1;
        graph.vertices.reserve(line_count);
        graph.edges.reserve(line_count);

        let mut scanner = Scanner::new(input);
        loop {
            match self.accept_line(&mut scanner, graph) {
                Line::Accepted => {}
                Line::EndOfInput => break,
                Line::Rejected(field) => return Err(self.reject(&scanner, field)),
            }
        }

        debug!(
            vertices = graph.vertices.len(),
            edges = graph.edges.len(),
            roots = graph.root_ids.len(),
            meta = graph.meta.len(),
            "parsed SWC document"
        );
        Ok(())
    }

    pub fn parse_str(&mut self, input: &str, graph: &mut Graph) -> Result<()> {
        self.parse(input.as_bytes(), graph)
    }

    fn accept_line(&mut self, scanner: &mut Scanner<'_>, graph: &mut Graph) -> Line {
        scanner.skip_blanks();

        if scanner.at_end() {
            return Line::EndOfInput;
        }

        if scanner.accept_end_of_line() {
            return Line::Accepted;
        }

        if scanner.accept(b'#') {
            let comment = scanner.take_line();
            graph.meta.push(String::from_utf8_lossy(comment).into_owned());
            return Line::Accepted;
        }

        match accept_record(scanner) {
            Ok((vertex, parent)) => {
                if parent == -1 {
                    graph.root_ids.push(vertex.id);
                } else {
                    graph.edges.push(Edge::new(parent, vertex.id));
                }
                graph.vertices.push(vertex);
                Line::Accepted
            }
            Err(field) => {
                if let Some(field) = field {
                    let _ = writeln!(
                        self.message,
                        "Error at line: {}, wrong {}. {}",
                        scanner.line(),
                        field,
                        field.hint()
                    );
                }
                Line::Rejected(field)
            }
        }
    }

    fn reject(&mut self, scanner: &Scanner<'_>, field: Option<Field>) -> Error {
        let line = scanner.line();
        let symbol = scanner.current_char();
        match symbol {
            Some(symbol) => {
                let _ = writeln!(self.message, "Error at line: {}, unexpected symbol:{}", line, symbol);
                warn!(line, %symbol, "SWC parse failed");
            }
            None => {
                let _ = writeln!(self.message, "Error at line: {}, unexpected end of input", line);
                warn!(line, "SWC parse failed at end of input");
            }
        }

        match field {
            Some(field) => Error::Field { line, field },
            // `accept_line` returns before a record is tried at end of input.
            None => Error::Syntax { line, symbol: symbol.unwrap_or(char::REPLACEMENT_CHARACTER) },
        }
    }
}

type Record = std::result::Result<(Vertex, i64), Option<Field>>;

/// One data line: the vertex and its raw parent id.
fn accept_record(scanner: &mut Scanner<'_>) -> Record {
    let id = scanner.accept_integer();
    let id = field(scanner, id, None)?;
    let code = scanner.accept_integer();
    let code = field(scanner, code, Some(Field::Type))?;
    let x = scanner.accept_real::<f64>();
    let x = field(scanner, x, Some(Field::Coordinates))?;
    let y = scanner.accept_real::<f64>();
    let y = field(scanner, y, Some(Field::Coordinates))?;
    let z = scanner.accept_real::<f64>();
    let z = field(scanner, z, Some(Field::Coordinates))?;
    let radius = scanner.accept_real::<f32>();
    let radius = field(scanner, radius, Some(Field::Radius))?;
    let parent = scanner.accept_integer();
    let parent = field(scanner, parent, Some(Field::Parent))?;

    // Exactly seven fields: the line has to end here.
    if !(scanner.at_end() || scanner.accept_end_of_line()) {
        return Err(None);
    }

    let vertex = Vertex::new(id, VertexType(code), x, y, z, radius);
    Ok((vertex, parent))
}

/// A literal counts as a field only if a blank, a line end or the end of
/// input follows it; `3.5` is not an integer followed by `.5`.
fn field<T>(scanner: &mut Scanner<'_>, value: Option<T>, name: Option<Field>) -> std::result::Result<T, Option<Field>> {
    match value {
        Some(value) if scanner.at_field_end() => {
            scanner.skip_blanks();
            Ok(value)
        }
        _ => Err(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> (Result<()>, Graph, String) {
        let mut parser = Parser::new();
        let mut graph = Graph::new();
        let result = parser.parse_str(input, &mut graph);
        (result, graph, parser.error_message().to_string())
    }

    #[test]
    fn test_two_vertices() {
        let (result, graph, message) = parse("1 1 0 0 0 1 -1\n2 3 1 1 1 0.5 1\n");
        assert!(result.is_ok());
        assert_eq!(message, "");
        assert_eq!(graph.vertices.len(), 2);
        assert_eq!(graph.vertices[0].id, 1);
        assert_eq!(graph.vertices[1].id, 2);
        assert_eq!(graph.vertices[1].vertex_type, VertexType::DENDRITE);
        assert_eq!(graph.vertices[1].radius, 0.5);
        assert_eq!(graph.root_ids, vec![1]);
        assert_eq!(graph.edges, vec![Edge::new(1, 2)]);
    }

    #[test]
    fn test_empty_input() {
        let (result, graph, message) = parse("");
        assert!(result.is_ok());
        assert!(graph.is_empty());
        assert_eq!(message, "");
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let input = "# ORIGINAL_SOURCE tracer\n\n  \t\r\n#\r\n 1 1 0 0 0 1 -1\r\n# trailing";
        let (result, graph, _) = parse(input);
        assert!(result.is_ok());
        assert_eq!(graph.meta, vec![" ORIGINAL_SOURCE tracer".to_string(), String::new(), " trailing".to_string()]);
        assert_eq!(graph.vertices.len(), 1);
    }

    #[test]
    fn test_last_line_without_terminator() {
        let (result, graph, _) = parse("1 1 0 0 0 1 -1\n2 1 0 0 0 1 1");
        assert!(result.is_ok());
        assert_eq!(graph.vertices.len(), 2);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_trailing_blanks_after_last_line() {
        let (result, graph, _) = parse("1 1 0 0 0 1 -1\n   \t");
        assert!(result.is_ok());
        assert_eq!(graph.vertices.len(), 1);
    }

    #[test]
    fn test_tabs_and_runs_of_spaces() {
        let (result, graph, _) = parse("\t3\t\t2   1.5  -2.5 1e1\t0.25   -1   \n");
        assert!(result.is_ok());
        let v = &graph.vertices[0];
        assert_eq!((v.id, v.vertex_type, v.x, v.y, v.z, v.radius), (3, VertexType::AXON, 1.5, -2.5, 10.0, 0.25));
        assert_eq!(graph.root_ids, vec![3]);
    }

    #[test]
    fn test_edge_to_unknown_parent_is_kept() {
        let (result, graph, _) = parse("5 3 0 0 0 1 99\n");
        assert!(result.is_ok());
        assert_eq!(graph.edges, vec![Edge::new(99, 5)]);
        assert!(graph.root_ids.is_empty());
    }

    #[test]
    fn test_unknown_type_code_survives() {
        let (result, graph, _) = parse("1 12 0 0 0 1 -1\n");
        assert!(result.is_ok());
        assert_eq!(graph.vertices[0].vertex_type, VertexType(12));
        assert_eq!(graph.vertices[0].kind(), None);
    }

    #[test]
    fn test_missing_parent_reports_line() {
        let (result, graph, message) = parse("1 1 0 0 0 1 -1\n2 1 0 0 0 1\n3 1 0 0 0 1 2\n");
        assert!(matches!(result, Err(Error::Field { line: 2, field: Field::Parent })));
        assert_eq!(
            message,
            "Error at line: 2, wrong parent. You need to specify an id of a parent, or -1 if there is no parent.\n\
             Error at line: 2, unexpected symbol:\n\n"
        );
        // Lines before the failure are kept.
        assert_eq!(graph.vertices.len(), 1);
    }

    #[test]
    fn test_missing_parent_at_end_of_input() {
        let (result, graph, message) = parse("1 1 0 0 0 1");
        assert!(matches!(result, Err(Error::Field { line: 1, field: Field::Parent })));
        assert_eq!(
            message,
            "Error at line: 1, wrong parent. You need to specify an id of a parent, or -1 if there is no parent.\n\
             Error at line: 1, unexpected end of input\n"
        );
        assert!(!message.contains('\0'));
        assert!(graph.vertices.is_empty());
    }

    #[test]
    fn test_fields_must_be_separated() {
        // Six fields where the type and x run together.
        let (result, graph, message) = parse("1 3.5 0 0 0 -1\n");
        assert!(matches!(result, Err(Error::Field { line: 1, field: Field::Type })));
        assert!(message.ends_with("unexpected symbol:.\n"));
        assert!(graph.vertices.is_empty());

        let (result, _, _) = parse("1 1 0 0 0 1.5-1\n");
        assert!(matches!(result, Err(Error::Field { line: 1, field: Field::Radius })));

        let (result, _, _) = parse("1 1 0 0 0 1 -1x\n");
        assert!(matches!(result, Err(Error::Field { line: 1, field: Field::Parent })));

        let (result, _, _) = parse("1a 1 0 0 0 1 -1\n");
        assert!(matches!(result, Err(Error::Syntax { line: 1, symbol: 'a' })));
    }

    #[test]
    fn test_radius_is_read_as_f32() {
        let (result, graph, _) = parse("1 1 0 0 0 0.10000001 -1\n");
        assert!(result.is_ok());
        assert_eq!(graph.vertices[0].radius, f32::from_bits(0.1f32.to_bits() + 1));
    }

    #[test]
    fn test_bad_radius() {
        let (result, _, message) = parse("1 1 0 0 0 r -1\n");
        assert!(matches!(result, Err(Error::Field { line: 1, field: Field::Radius })));
        assert!(message.starts_with("Error at line: 1, wrong radius."));
    }

    #[test]
    fn test_bad_coordinate() {
        let (result, _, message) = parse("\n\n1 1 0 y 0 1 -1\n");
        assert!(matches!(result, Err(Error::Field { line: 3, field: Field::Coordinates })));
        assert!(message.contains("unexpected symbol:y"));
    }

    #[test]
    fn test_bad_type() {
        let (result, _, _) = parse("1 soma 0 0 0 1 -1\n");
        assert!(matches!(result, Err(Error::Field { line: 1, field: Field::Type })));
    }

    #[test]
    fn test_garbage_line_has_no_field_message() {
        let (result, _, message) = parse("1 1 0 0 0 1 -1\nhello\n");
        assert!(matches!(result, Err(Error::Syntax { line: 2, symbol: 'h' })));
        assert_eq!(message, "Error at line: 2, unexpected symbol:h\n");
    }

    #[test]
    fn test_eighth_field_rejects_line() {
        let (result, graph, _) = parse("1 1 0 0 0 1 -1 7\n");
        assert!(matches!(result, Err(Error::Syntax { line: 1, symbol: '7' })));
        assert!(graph.vertices.is_empty());
    }

    #[test]
    fn test_reuse_clears_previous_state() {
        let mut parser = Parser::new();
        let mut graph = Graph::new();
        assert!(parser.parse_str("# a\n1 1 0 0 0 1 -1\nbad\n", &mut graph).is_err());
        assert!(!parser.error_message().is_empty());

        assert!(parser.parse_str("2 1 0 0 0 1 -1\n", &mut graph).is_ok());
        assert_eq!(parser.error_message(), "");
        assert!(graph.meta.is_empty());
        assert_eq!(graph.root_ids, vec![2]);
        assert_eq!(graph.vertices.len(), 1);
    }
}
