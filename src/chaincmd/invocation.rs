//! Invocation descriptor: one external process call.

use std::fmt;
use std::process::Command;

use serde::Serialize;

/// A program plus the exact argument list to hand to it.
///
/// Produced fresh by every [`ChainCmd`](super::ChainCmd) method and owned by
/// the caller. Nothing in this crate spawns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Binary to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments in the order the binary must receive them.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.program, self.args)
    }

    /// Build an unstarted [`Command`] for a runner.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Single-quote a token if a shell would split or reinterpret it.
fn quote(token: &str) -> String {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,@%+".contains(c));
    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}
