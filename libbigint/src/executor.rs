//! Runs queued [Command]s against an accumulated value.

use crate::command::{Command, CommandError};
use crate::errors::BigIntError;
use crate::BigInt;
use rand::Rng;

/// The effect of applying one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub command: Command,
    pub before: BigInt,
    pub after: BigInt,
}

/// A stack of pending commands and the value they are applied to.
///
/// Commands are executed last-in first-out: the most recently pushed command runs first.
///
/// ```
/// use libbigint::{BigInt, CommandExecutor};
///
/// let mut executor = CommandExecutor::new(BigInt::from(2));
/// executor.push_command("ADD 1").unwrap();
/// executor.push_command("MULTIPLY 10").unwrap();
/// executor.run();
/// assert_eq!(executor.value().to_string(), "21");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CommandExecutor {
    value: BigInt,
    commands: Vec<Command>,
}

impl CommandExecutor {
    pub fn new(initial: BigInt) -> Self {
        Self {
            value: initial,
            commands: Vec::new(),
        }
    }

    /// Parses a command and pushes it. Nothing is pushed if the command is malformed.
    pub fn push_command(&mut self, line: &str) -> Result<(), CommandError> {
        let command = Command::parse(line)?;
        self.push(command);
        Ok(())
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Pushes a command with a random operator and a random operand of exactly `digits` digits.
    pub fn push_random_command<R: Rng>(
        &mut self,
        rng: &mut R,
        digits: usize,
    ) -> Result<&Command, BigIntError> {
        let command = Command::random(rng, digits)?;
        self.commands.push(command);
        Ok(&self.commands[self.commands.len() - 1])
    }

    /// Pops and applies the most recently pushed command.
    pub fn step(&mut self) -> Option<Step> {
        let command = self.commands.pop()?;
        let after = command.apply(&self.value);
        let before = std::mem::replace(&mut self.value, after.clone());
        Some(Step {
            command,
            before,
            after,
        })
    }

    /// Applies every pending command, returning the steps in the order they ran.
    pub fn run(&mut self) -> Vec<Step> {
        let mut steps = Vec::with_capacity(self.commands.len());
        while let Some(step) = self.step() {
            steps.push(step);
        }
        steps
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
