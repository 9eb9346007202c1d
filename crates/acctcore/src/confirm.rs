//! Interactive confirmation before irreversible bulk operations
//!
//! The gate is a safeguard against accidental data loss, not an access
//! check: anyone at the terminal can answer it.

use std::io::{self, BufRead, Write};

/// Question asked before deleting every account
pub const DELETE_ALL_QUESTION: &str = "Remove ALL accounts? (y/n): ";

/// How the operator answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    AwaitingConfirmation,
    Resolved(Decision),
}

/// Asks a yes/no question once and remembers the answer
pub struct ConfirmationGate<R, W> {
    input: R,
    output: W,
    state: GateState,
}

impl<R: BufRead, W: Write> ConfirmationGate<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            state: GateState::AwaitingConfirmation,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Prompt with `question` and read one line of input
    ///
    /// The answer is scanned as one token: surrounding spaces, tabs and the
    /// line terminator are ignored, and only `y` proceeds. Empty input, end
    /// of input and any other text abort. A read error leaves the gate
    /// unresolved.
    pub fn resolve(&mut self, question: &str) -> io::Result<Decision> {
        if let GateState::Resolved(decision) = self.state {
            return Ok(decision);
        }

        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let decision = match self.input.read_line(&mut line)? {
            0 => Decision::Abort,
            _ if scan_token(&line) == "y" => Decision::Proceed,
            _ => Decision::Abort,
        };

        self.state = GateState::Resolved(decision);
        Ok(decision)
    }
}

fn scan_token(line: &str) -> &str {
    line.trim_matches([' ', '\t', '\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (Decision, String) {
        let mut output = Vec::new();
        let mut gate = ConfirmationGate::new(Cursor::new(input.as_bytes()), &mut output);
        let decision = gate.resolve(DELETE_ALL_QUESTION).unwrap();
        drop(gate);
        (decision, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_y_proceeds() {
        let (decision, prompt) = answer("y\n");
        assert_eq!(decision, Decision::Proceed);
        assert_eq!(prompt, DELETE_ALL_QUESTION);

        for input in ["y\r\n", "y", " y\n", "y \n", "\ty\n", "  y\t\r\n"] {
            assert_eq!(answer(input).0, Decision::Proceed, "input {:?}", input);
        }
    }

    #[test]
    fn test_anything_else_aborts() {
        for input in ["n\n", "\n", "", "  \n", "Y\n", "yes\n", "y n\n", "yy\n"] {
            assert_eq!(answer(input).0, Decision::Abort, "input {:?}", input);
        }
    }

    #[test]
    fn test_reads_only_one_line() {
        let mut output = Vec::new();
        let mut gate = ConfirmationGate::new(Cursor::new(b"n\ny\n".as_slice()), &mut output);

        assert_eq!(gate.state(), GateState::AwaitingConfirmation);
        assert_eq!(gate.resolve(DELETE_ALL_QUESTION).unwrap(), Decision::Abort);
        assert_eq!(gate.state(), GateState::Resolved(Decision::Abort));

        // Resolved gates do not ask again
        assert_eq!(gate.resolve(DELETE_ALL_QUESTION).unwrap(), Decision::Abort);
        drop(gate);
        assert_eq!(String::from_utf8(output).unwrap(), DELETE_ALL_QUESTION);
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("terminal went away"))
        }
    }

    #[test]
    fn test_read_error_leaves_gate_unresolved() {
        let mut gate = ConfirmationGate::new(io::BufReader::new(FailingReader), io::sink());

        assert!(gate.resolve(DELETE_ALL_QUESTION).is_err());
        assert_eq!(gate.state(), GateState::AwaitingConfirmation);
    }
}
