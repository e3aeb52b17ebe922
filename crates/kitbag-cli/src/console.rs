use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

/// Read a 1-based menu number.
///
/// Returns `None` when `text` is not an integer at all. Any integer is
/// accepted: negatives map to `0` and values too large for `usize` map to
/// `usize::MAX`, so both fall outside every list and are reported as out of
/// range by the lookup.
pub fn parse_index(text: &str) -> Option<usize> {
    match text.parse::<i128>() {
        Ok(n) => Some(usize::try_from(n).unwrap_or(if n < 0 { 0 } else { usize::MAX })),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(usize::MAX),
            IntErrorKind::NegOverflow => Some(0),
            _ => None,
        },
    }
}

/// Line-oriented prompt/response channel.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` without a newline and read one line of input.
    ///
    /// Returns the trimmed line, or `None` once the input is exhausted.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the next output off the prompt line
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Print a block that already carries its own trailing newline.
    pub fn say_block(&mut self, block: &str) -> io::Result<()> {
        write!(self.output, "{}", block)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
