use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
    tty::IsTty,
};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = " -> ";

/// Line-oriented operator I/O used by the game loop.
pub trait Console {
    /// Read one line without its trailing newline. End of input is
    /// `io::ErrorKind::UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;

    /// Keep asking until the operator enters an integer.
    fn read_int(&mut self) -> io::Result<i32> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => log::warn!("rejected non-integer input {:?}", line),
            }
        }
    }

    fn blank_line(&mut self) -> io::Result<()> {
        self.write_line("")
    }
}

fn end_of_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
}

/// Production console on stdin/stdout.
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        let output = io::stdout();
        let clear_screen = output.is_tty();
        Self {
            input: io::stdin().lock(),
            output,
            clear_screen,
        }
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> io::Result<String> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(end_of_input());
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Console fed from a fixed script, capturing everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            clears: 0,
        }
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<String> {
        self.inputs.pop_front().ok_or_else(end_of_input)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
