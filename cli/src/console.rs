use std::io::{self, BufRead, Write};

use rollcall_core::{non_empty, AttendanceError};

/// Line-oriented prompt/reply over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), AttendanceError> {
        writeln!(self.output, "{}", line.as_ref()).map_err(AttendanceError::Input)
    }

    /// Prints `label` without a newline and returns the next line, trimmed.
    /// End of input is an `UnexpectedEof` error.
    pub fn prompt(&mut self, label: &str) -> Result<String, AttendanceError> {
        write!(self.output, "{}", label).map_err(AttendanceError::Input)?;
        self.output.flush().map_err(AttendanceError::Input)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(AttendanceError::Input)?;
        if read == 0 {
            return Err(AttendanceError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    /// Asks until a non-blank answer comes back.
    pub fn prompt_nonempty(&mut self, label: &str) -> Result<String, AttendanceError> {
        loop {
            let line = self.prompt(label)?;
            if let Some(value) = non_empty(&line) {
                return Ok(value.to_string());
            }
            self.say("Input cannot be empty. Please try again.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_nonempty_retries() {
        let mut console = scripted("\n   \n  Ali Khan  \n");
        let value = console.prompt_nonempty("Name: ").unwrap();
        assert_eq!(value, "Ali Khan");

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("Input cannot be empty").count(), 2);
        assert_eq!(out.matches("Name: ").count(), 3);
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut console = scripted("");
        let err = console.prompt("Choose: ").unwrap_err();
        assert!(err.is_input_closed());

        let mut console = scripted("  \n");
        assert!(console.prompt_nonempty("Name: ").unwrap_err().is_input_closed());
    }
}
