//! Diagnostics produced for malformed commands and numbers.

use super::{narrow_span, CommandError};
use crate::diagnostics::{Diagnostic, DiagnosticRecord, DiagnosticRegistry, Span};
use crate::errors::{BigIntError, FormatError};

macro_rules! define_errors {
    ($($(#[doc = $doc:expr])+ $code:ident: $error:ident $gen_macro:tt)*) => {$(
        $(#[doc = $doc])+
        pub(crate) struct $error;

        impl DiagnosticRecord for $error {
            const CODE: &'static str = stringify!($code);
            const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
        })*

        /// Diagnostics produced for malformed commands.
        pub struct CommandErrors;

        impl DiagnosticRegistry for CommandErrors {
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                let mut vec = Vec::new();
                $(vec.push(($error::CODE, $error::EXPLANATION));)*
                vec
            }
        }

        $(
            macro_rules! $error $gen_macro
        )*
    };
}

define_errors! {
    ///A command must start with the name of an operator. The known operators are
    ///
    ///  - ADD, which adds the operand to the current value,
    ///  - SUBTRACT, which subtracts the operand from the current value,
    ///  - MULTIPLY, which multiplies the current value by the operand.
    ///
    ///Names are matched regardless of case, so "add 5" and "ADD 5" are the same command. When the
    ///name looks like a misspelling of a known operator, the closest one is suggested.
    C0001: UnknownOperator {
        ($span:expr, $name:expr, $suggestion:expr) => {{
            let mut diag = Diagnostic::span_err(
                $span,
                "Unknown operator",
                UnknownOperator::CODE,
                format!(r#""{}" is not an operator"#, $name),
            )
            .with_note("known operators are ADD, SUBTRACT, MULTIPLY");
            if let Some(suggestion) = $suggestion {
                diag = diag.with_spanned_help($span, format!(r#"did you mean "{}"?"#, suggestion));
            }
            diag
        }}
    }

    ///Every operator takes exactly one operand, written after the operator name and separated
    ///from it by whitespace. For example,
    ///
    ///  MULTIPLY -12
    ///
    ///multiplies the current value by -12.
    C0002: MissingOperand {
        ($span:expr, $operator:expr) => {
            Diagnostic::span_err(
                $span,
                "Missing operand",
                MissingOperand::CODE,
                format!("expected a number after {}", $operator),
            )
            .with_help(format!("write the operand after the operator, like \"{} 1\"", $operator))
        }
    }

    ///Numbers are written in decimal, with an optional leading "+" or "-" sign and no other
    ///characters: no spaces, digit separators, decimal points or exponents.
    ///
    ///Leading zeros are allowed and ignored, so "007" is 7 and "-0" is 0.
    C0003: InvalidNumber {
        ($span:expr, $err:expr) => {
            Diagnostic::span_err(
                narrow_span($span, $err),
                "Invalid number",
                InvalidNumber::CODE,
                match $err {
                    BigIntError::InvalidFormat(FormatError::IllegalCharacter { character, .. }) => {
                        format!("'{}' cannot be used in a number", character.escape_debug())
                    }
                    other => other.to_string(),
                },
            )
            .with_note("numbers are decimal digits with an optional leading sign")
        }
    }

    ///A command is a single operator and a single operand. Anything after the operand is
    ///rejected, since it is most likely a second command or a number split by a space, like
    ///
    ///  ADD 1 000 000
    ///
    ///which should be written as "ADD 1000000".
    C0004: UnexpectedInput {
        ($span:expr) => {
            Diagnostic::span_err(
                $span,
                "Unexpected input",
                UnexpectedInput::CODE,
                String::from("nothing may follow the operand"),
            )
            .with_help("put each command on its own line")
        }
    }

    ///A command cannot be empty; it needs an operator and an operand.
    C0005: EmptyCommand {
        ($span:expr) => {
            Diagnostic::span_err(
                $span,
                "Empty command",
                EmptyCommand::CODE,
                None,
            )
            .with_help("write a command like \"ADD 1\"")
        }
    }
}

impl From<&CommandError> for Diagnostic {
    fn from(error: &CommandError) -> Self {
        match error {
            CommandError::Empty => EmptyCommand!(Span::from(0..1)),
            CommandError::UnknownOperator {
                name,
                span,
                suggestion,
            } => UnknownOperator!(*span, name, suggestion),
            CommandError::MissingOperand { operator, span } => MissingOperand!(*span, operator),
            CommandError::InvalidOperand { span, source } => InvalidNumber!(*span, source),
            CommandError::UnexpectedInput { span } => UnexpectedInput!(*span),
        }
    }
}

impl Diagnostic {
    /// Diagnoses a number that failed to parse, where `span` covers the whole number.
    pub fn from_number_error(error: &BigIntError, span: Span) -> Diagnostic {
        InvalidNumber!(span, error)
    }
}
