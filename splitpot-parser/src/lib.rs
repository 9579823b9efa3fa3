#![warn(clippy::uninlined_format_args)]

//! Line parser for the splitpot script language.
//!
//! One statement per line; `#` starts a comment; blank lines are skipped.
//!
//! ```text
//! POOL := ana bruno carla   # declare participants (paid 0 so far)
//! ana 30
//! bruno 12.5
//! !total
//! !balances
//! !settle
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{char, digit1, space0, space1},
    combinator::{map_res, opt, recognize},
    multi::separated_list1,
    IResult, Parser,
};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub members: Vec<&'a str>,
}

/// One payment into the pool. The grammar accepts a signed amount so the
/// ledger's negative-amount rejection stays reachable from scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution<'a> {
    pub name: &'a str,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Total,
    Balances,
    Settle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Declaration(Declaration<'a>),
    Contribution(Contribution<'a>),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementWithLine<'a> {
    pub line: usize,
    pub statement: Statement<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<'a> {
    pub statements: Vec<StatementWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

pub fn parse_script(content: &str) -> Result<Script<'_>, ParseError> {
    let mut statements = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = idx + 1;
        let text = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        }
        .trim();
        if text.is_empty() {
            continue;
        }

        match statement(text) {
            Ok((rest, statement)) if rest.trim().is_empty() => {
                statements.push(StatementWithLine { line, statement });
            }
            Ok((rest, _)) => {
                return Err(ParseError::SyntaxError {
                    line,
                    detail: format!("unexpected trailing input '{}'", rest.trim()),
                });
            }
            Err(_) => {
                return Err(ParseError::SyntaxError {
                    line,
                    detail: format!(
                        "expected `POOL := name ...`, `name amount`, or a `!` command, got '{text}'"
                    ),
                });
            }
        }
    }

    Ok(Script { statements })
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        declaration.map(Statement::Declaration),
        command.map(Statement::Command),
        contribution.map(Statement::Contribution),
    ))
    .parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-')(input)
}

fn amount(input: &str) -> IResult<&str, Decimal> {
    map_res(
        recognize((opt(char('-')), digit1, opt((char('.'), digit1)))),
        Decimal::from_str,
    )
    .parse(input)
}

fn declaration(input: &str) -> IResult<&str, Declaration<'_>> {
    let (input, _) = tag("POOL")(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = tag(":=")(input)?;
    let (input, _) = space0(input)?;
    let (input, members) = separated_list1(space1, identifier).parse(input)?;
    Ok((input, Declaration { members }))
}

fn contribution(input: &str) -> IResult<&str, Contribution<'_>> {
    let (input, name) = identifier(input)?;
    let (input, _) = space1(input)?;
    let (input, amount) = amount(input)?;
    Ok((input, Contribution { name, amount }))
}

fn command(input: &str) -> IResult<&str, Command> {
    let (input, _) = char('!')(input)?;
    alt((
        tag_no_case("total").map(|_| Command::Total),
        tag_no_case("balances").map(|_| Command::Balances),
        tag_no_case("settle").map(|_| Command::Settle),
    ))
    .parse(input)
}
