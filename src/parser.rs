//! This module provides the parser for machine description files, utilizing
//! the `pest` crate. The grammar in `grammar.pest` splits the input into
//! comma-separated rows; this module interprets the rows positionally and
//! builds a [`Machine`].
//!
//! Description layout:
//!
//! 1. machine name (the raw line, spaces allowed)
//! 2. state labels
//! 3. input alphabet
//! 4. tape alphabet; the last symbol is the blank
//! 5. start state
//! 6. final states
//! 7. .. transition rows `state,read,next,write,move`, where `next` may be
//!    empty (stay in the same state) and `write` may be empty (keep the
//!    cell). A single-field row names the reject state.

use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser as PestParser, Span,
};
use pest_derive::Parser as PestParser;

use crate::types::{Direction, Machine, NtmError};

/// The number of header rows before the transition rows begin.
const HEADER_ROWS: usize = 6;

/// Derives a `PestParser` for the row/field grammar in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct MachineParser;

/// Parses a machine description into a [`Machine`].
///
/// This is the main entry point for the loader collaborator. All structural
/// problems surface here as [`NtmError::ParseError`] or
/// [`NtmError::MalformedDescription`]; the execution engine never sees a
/// malformed table.
pub fn parse(input: &str) -> Result<Machine, NtmError> {
    let document = MachineParser::parse(Rule::document, input.trim_end())
        .map_err(|e| NtmError::ParseError(Box::new(e)))?
        .next()
        .expect("grammar guarantees a document node");

    // Blank lines parse as a single empty field; skip them.
    let rows: Vec<Pair<Rule>> = document
        .into_inner()
        .filter(|p| p.as_rule() == Rule::row && !p.as_str().trim().is_empty())
        .collect();

    if rows.len() < HEADER_ROWS {
        return Err(NtmError::MalformedDescription(format!(
            "Expected at least {} header rows, found {}",
            HEADER_ROWS,
            rows.len()
        )));
    }

    let name = rows[0].as_str().trim().to_string();
    // Rows 1 and 2 (state labels, input alphabet) are declarative only; the
    // engine keys everything off the transition rows.
    let tape_alphabet = fields(&rows[3]);
    let blank = parse_blank(&tape_alphabet, rows[3].as_span())?;
    let start_state = fields(&rows[4])
        .into_iter()
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| parse_error("Missing start state", rows[4].as_span()))?;
    let final_states: Vec<String> = fields(&rows[5])
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();

    let mut machine = Machine::new(name, start_state, final_states, blank);

    for row in &rows[HEADER_ROWS..] {
        parse_rule_row(row, &mut machine)?;
    }

    Ok(machine)
}

/// Interprets one row after the header: either a reject-state marker or a
/// five-field transition to register.
fn parse_rule_row(row: &Pair<Rule>, machine: &mut Machine) -> Result<(), NtmError> {
    let span = row.as_span();
    let parts = fields(row);

    if parts.len() == 1 {
        // A lone label names the reject state. It is recorded but has no
        // bearing on transition lookups.
        machine.reject_state = Some(parts[0].clone());
        return Ok(());
    }

    if parts.len() != 5 {
        return Err(parse_error(
            &format!("Expected 5 fields in transition row, found {}", parts.len()),
            span,
        ));
    }

    let read = parse_symbol(&parts[1], span)?;
    let next_state = (!parts[2].is_empty()).then_some(parts[2].as_str());
    let write = if parts[3].is_empty() {
        None
    } else {
        Some(parse_symbol(&parts[3], span)?)
    };
    let direction = parse_direction(&parts[4], span)?;

    machine.register(&parts[0], read, next_state, write, direction);

    Ok(())
}

/// Extracts the blank symbol: the last entry of the tape-alphabet row.
fn parse_blank(tape_alphabet: &[String], span: Span) -> Result<char, NtmError> {
    match tape_alphabet.last() {
        Some(symbol) if !symbol.is_empty() => parse_symbol(symbol, span),
        _ => Err(parse_error(
            "Tape alphabet row must end with the blank symbol",
            span,
        )),
    }
}

/// Parses a single move letter.
fn parse_direction(input: &str, span: Span) -> Result<Direction, NtmError> {
    match input {
        "L" => Ok(Direction::Left),
        "R" => Ok(Direction::Right),
        "S" => Ok(Direction::Stay),
        _ => Err(parse_error(
            &format!("Unsupported move direction: {input:?}"),
            span,
        )),
    }
}

/// Parses a field that must hold exactly one symbol.
fn parse_symbol(input: &str, span: Span) -> Result<char, NtmError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(parse_error(
            &format!("Expected a single symbol, found {input:?}"),
            span,
        )),
    }
}

/// Collects the field texts of a row.
fn fields(row: &Pair<Rule>) -> Vec<String> {
    row.clone()
        .into_inner()
        .filter(|p| p.as_rule() == Rule::field)
        .map(|p| p.as_str().to_string())
        .collect()
}

/// Creates an `NtmError::ParseError` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> NtmError {
    NtmError::ParseError(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;

    const SIMPLE: &str = "\
simple scanner
q0,qf
a
a,_
q0
qf
q0,a,qf,a,R
";

    #[test]
    fn test_parse_simple_description() {
        let machine = parse(SIMPLE).unwrap();

        assert_eq!(machine.name, "simple scanner");
        assert_eq!(machine.start_state, "q0");
        assert_eq!(machine.final_states, vec!["qf".to_string()]);
        assert_eq!(machine.blank, '_');
        assert_eq!(machine.reject_state, None);
        assert_eq!(
            machine.table.lookup("q0", 'a').unwrap(),
            &[Action {
                next_state: "qf".to_string(),
                write: Some('a'),
                direction: Direction::Right,
            }]
        );
    }

    #[test]
    fn test_parse_name_keeps_spaces() {
        let input = "\
a machine with a long name
q0
a
a,#
q0
q0
";
        let machine = parse(input).unwrap();
        assert_eq!(machine.name, "a machine with a long name");
        assert_eq!(machine.blank, '#');
        assert!(machine.table.is_empty());
    }

    #[test]
    fn test_parse_self_loop_and_keep_shorthand() {
        let input = "\
shorthand
q0,qf
a
a,_
q0
qf
q0,a,,,R
";
        let machine = parse(input).unwrap();
        let actions = machine.table.lookup("q0", 'a').unwrap();

        assert_eq!(actions[0].next_state, "q0");
        assert_eq!(actions[0].write, None);
        assert_eq!(actions[0].direction, Direction::Right);
    }

    #[test]
    fn test_parse_registration_order_preserved() {
        let input = "\
ordered
q0,q1,q2
a
a,_
q0
q2
q0,a,q1,a,R
q0,a,q2,b,L
";
        let machine = parse(input).unwrap();
        let actions = machine.table.lookup("q0", 'a').unwrap();

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].next_state, "q1");
        assert_eq!(actions[1].next_state, "q2");
    }

    #[test]
    fn test_parse_reject_state_row() {
        let input = "\
with reject
q0,qf,qreject
a
a,_
q0
qf
q0,a,qf,a,R
qreject
";
        let machine = parse(input).unwrap();
        assert_eq!(machine.reject_state, Some("qreject".to_string()));
        // The reject row must not have registered anything.
        assert_eq!(machine.table.len(), 1);
    }

    #[test]
    fn test_parse_too_few_rows() {
        let result = parse("just a name\nq0\na\n");
        let error = result.unwrap_err();
        assert!(matches!(error, NtmError::MalformedDescription(_)));
        assert!(error.to_string().contains("header rows"));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let input = "\
bad row
q0
a
a,_
q0
q0
q0,a,qf,R
";
        let error = parse(input).unwrap_err();
        assert!(matches!(error, NtmError::ParseError(_)));
        assert!(error.to_string().contains("Expected 5 fields"));
    }

    #[test]
    fn test_parse_multi_char_symbol() {
        let input = "\
bad symbol
q0
a
a,_
q0
q0
q0,ab,qf,a,R
";
        let error = parse(input).unwrap_err();
        assert!(error.to_string().contains("single symbol"));
    }

    #[test]
    fn test_parse_unsupported_direction() {
        let input = "\
bad move
q0
a
a,_
q0
q0
q0,a,qf,a,X
";
        let error = parse(input).unwrap_err();
        assert!(error.to_string().contains("Unsupported move direction"));
    }

    #[test]
    fn test_parse_missing_blank() {
        let input = "\
no blank
q0
a
a,
q0
q0
";
        let error = parse(input).unwrap_err();
        assert!(error.to_string().contains("blank symbol"));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let input = "\
spaced out
q0,qf
a
a,_

q0
qf

q0,a,qf,a,R
";
        let machine = parse(input).unwrap();
        assert_eq!(machine.start_state, "q0");
        assert_eq!(machine.table.len(), 1);
    }
}
