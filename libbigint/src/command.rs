//! Named arithmetic operators, and the one-line commands that apply them to a value.
//!
//! A command is written as `<OPERATOR> <operand>`, e.g. `SUBTRACT -2934923949`. Operator
//! names are matched case-insensitively.

pub(crate) mod errors;

use crate::bigint::{add, multiply, subtract, BigInt};
use crate::diagnostics::Span;
use crate::errors::{BigIntError, FormatError};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

type Operation = fn(&BigInt, &BigInt) -> BigInt;

/// Operations, indexed by `Operator as usize`.
const OPERATIONS: [Operation; 3] = [add, subtract, multiply];

/// Largest edit distance at which an unknown operator name still gets a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add = 0,
    Subtract = 1,
    Multiply = 2,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    /// The canonical, upper-case name of the operator.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "ADD",
            Operator::Subtract => "SUBTRACT",
            Operator::Multiply => "MULTIPLY",
        }
    }

    pub fn from_name(name: &str) -> Option<Operator> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    /// The operator whose name is closest to `name`, if any is close enough to be a typo.
    pub fn suggest(name: &str) -> Option<Operator> {
        let name = name.to_ascii_uppercase();
        Operator::ALL
            .iter()
            .copied()
            .map(|op| (edit_distance(&name, op.name()), op))
            .filter(|&(distance, _)| distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|&(distance, _)| distance)
            .map(|(_, op)| op)
    }

    /// Applies the operator as `lhs <op> rhs`.
    pub fn apply(self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        OPERATIONS[self as usize](lhs, rhs)
    }

    pub fn random<R: Rng>(rng: &mut R) -> Operator {
        Operator::ALL[rng.gen_range(0..Operator::ALL.len())]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a line is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("a command needs an operator and an operand")]
    Empty,
    #[error("unknown operator \"{name}\"")]
    UnknownOperator {
        name: String,
        span: Span,
        suggestion: Option<Operator>,
    },
    #[error("{operator} needs an operand")]
    MissingOperand { operator: Operator, span: Span },
    /// `span` covers the whole operand token.
    #[error("invalid operand: {source}")]
    InvalidOperand { span: Span, source: BigIntError },
    #[error("unexpected input after the operand")]
    UnexpectedInput { span: Span },
}

impl CommandError {
    /// Where in the line the error is. An empty command has an empty span.
    pub fn span(&self) -> Span {
        match self {
            CommandError::Empty => Span::from(0..0),
            CommandError::UnknownOperator { span, .. }
            | CommandError::MissingOperand { span, .. }
            | CommandError::InvalidOperand { span, .. }
            | CommandError::UnexpectedInput { span } => *span,
        }
    }
}

/// An operator together with its right-hand operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    operator: Operator,
    operand: BigInt,
}

impl Command {
    pub fn new(operator: Operator, operand: BigInt) -> Self {
        Self { operator, operand }
    }

    /// Parses a line of the form `<OPERATOR> <operand>`, with any amount of whitespace around
    /// and between the two tokens.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut tokens = split_tokens(line).into_iter();

        let (name_span, name) = tokens.next().ok_or(CommandError::Empty)?;
        let operator = Operator::from_name(name).ok_or_else(|| CommandError::UnknownOperator {
            name: name.to_owned(),
            span: name_span,
            suggestion: Operator::suggest(name),
        })?;

        let (operand_span, operand) = tokens.next().ok_or(CommandError::MissingOperand {
            operator,
            span: Span::from(name_span.hi..name_span.hi + 1),
        })?;
        let operand = operand
            .parse::<BigInt>()
            .map_err(|source| CommandError::InvalidOperand {
                span: operand_span,
                source,
            })?;

        if let Some((extra_span, _)) = tokens.next() {
            let hi = tokens.last().map_or(extra_span.hi, |(span, _)| span.hi);
            return Err(CommandError::UnexpectedInput {
                span: Span::from(extra_span.lo..hi),
            });
        }

        Ok(Command { operator, operand })
    }

    /// A command with a uniformly chosen operator and a random operand of `digits` digits.
    pub fn random<R: Rng>(rng: &mut R, digits: usize) -> Result<Command, BigIntError> {
        let operator = Operator::random(rng);
        let operand = BigInt::random(rng, digits)?;
        Ok(Command { operator, operand })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &BigInt {
        &self.operand
    }

    /// Returns `value <op> operand`.
    pub fn apply(&self, value: &BigInt) -> BigInt {
        self.operator.apply(value, &self.operand)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Command::parse(line)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.operand)
    }
}

/// Narrows the span of an operand to the character a format error points at, if any.
pub(crate) fn narrow_span(operand_span: Span, error: &BigIntError) -> Span {
    match error {
        BigIntError::InvalidFormat(FormatError::IllegalCharacter { position, .. }) => {
            let lo = operand_span.lo + position;
            Span::from(lo..lo + 1)
        }
        _ => operand_span,
    }
}

/// Splits a line on whitespace, keeping the character span of every token.
fn split_tokens(line: &str) -> Vec<(Span, &str)> {
    let mut tokens = Vec::with_capacity(2);
    // (char index, byte index) of the token being read
    let mut start: Option<(usize, usize)> = None;
    let mut char_count = 0;
    for (char_index, (byte_index, c)) in line.char_indices().enumerate() {
        char_count = char_index + 1;
        if c.is_whitespace() {
            if let Some((lo, byte_lo)) = start.take() {
                tokens.push((Span::from(lo..char_index), &line[byte_lo..byte_index]));
            }
        } else if start.is_none() {
            start = Some((char_index, byte_index));
        }
    }
    if let Some((lo, byte_lo)) = start {
        tokens.push((Span::from(lo..char_count), &line[byte_lo..]));
    }
    tokens
}

/// Levenshtein distance between two ASCII-ish strings, by character.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut current = Vec::with_capacity(b.len() + 1);
        current.push(i + 1);
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + (ca != cb) as usize;
            let insertion = current[j] + 1;
            let deletion = previous[j + 1] + 1;
            current.push(substitution.min(insertion).min(deletion));
        }
        previous = current;
    }
    previous[b.len()]
}
