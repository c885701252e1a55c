//! The shell module runs the prompt-driven calculator.  A `Session` reads
//! answers from any buffered reader and writes prompts and reports to any
//! writer, so the same loop serves a terminal and a test harness.
//!
//! Malformed numbers are answered with a message and the same prompt.
//! Values that parse but fall outside the formulas' domain end the current
//! round with the evaluator's message.  Closing the input ends the session.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::input::{is_affirmative, parse_decimal, parse_server_count, Mode};
use crate::queueing::{evaluate, Traffic};
use crate::report::text_lines;
use crate::utils::errors::QueueingError;

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the writer, e.g. to inspect a transcript
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run rounds until the user declines another or the input closes.
    pub fn run(&mut self) -> Result<(), QueueingError> {
        while self.round()? {
            match self.read_line("\nCalculate again? (y/n): ")? {
                Some(answer) if is_affirmative(&answer) => continue,
                _ => break,
            }
        }
        writeln!(self.output, "Done.")?;
        Ok(())
    }

    /// One mode selection, data entry, and report.  Returns `false` once
    /// the input is exhausted.
    pub fn round(&mut self) -> Result<bool, QueueingError> {
        writeln!(self.output, "\n=== M/M/c calculator ===")?;
        writeln!(self.output, "1) Enter a (λ/μ) and c")?;
        writeln!(self.output, "2) Enter λ, μ and c")?;
        let selection = match self.read_line("Choose (1/2): ")? {
            Some(selection) => selection,
            None => return Ok(false),
        };
        let mode = match Mode::from_selection(&selection) {
            Some(mode) => mode,
            None => {
                writeln!(self.output, "Invalid option.")?;
                return Ok(true);
            }
        };
        let traffic = match self.read_traffic(mode)? {
            Some(traffic) => traffic,
            None => return Ok(false),
        };
        debug!(?traffic, "evaluating");

        match evaluate(&traffic) {
            Ok(evaluation) => {
                writeln!(self.output)?;
                for line in text_lines(&evaluation, traffic.has_rates()) {
                    writeln!(self.output, "{}", line)?;
                }
            }
            Err(err) => writeln!(self.output, "{}. Computation aborted.", err)?,
        }
        Ok(true)
    }

    fn read_traffic(&mut self, mode: Mode) -> Result<Option<Traffic>, QueueingError> {
        Ok(match mode {
            Mode::Ratio => {
                let offered_load = match self.read_decimal("Offered load a (λ/μ) in Erlangs: ")? {
                    Some(value) => value,
                    None => return Ok(None),
                };
                self.read_servers()?.map(|servers| Traffic::RatioOnly {
                    offered_load,
                    servers,
                })
            }
            Mode::Rates => {
                let arrival_rate = match self.read_decimal("Arrival rate λ: ")? {
                    Some(value) => value,
                    None => return Ok(None),
                };
                let service_rate = match self.read_decimal("Service rate μ per server: ")? {
                    Some(value) => value,
                    None => return Ok(None),
                };
                self.read_servers()?.map(|servers| Traffic::RatesAndCount {
                    arrival_rate,
                    service_rate,
                    servers,
                })
            }
        })
    }

    fn read_decimal(&mut self, prompt: &str) -> Result<Option<f64>, QueueingError> {
        self.read_until_valid(prompt, parse_decimal)
    }

    fn read_servers(&mut self) -> Result<Option<usize>, QueueingError> {
        self.read_until_valid("Number of servers c: ", parse_server_count)
    }

    fn read_until_valid<T, F>(&mut self, prompt: &str, parse: F) -> Result<Option<T>, QueueingError>
    where
        F: Fn(&str) -> Result<T, QueueingError>,
    {
        while let Some(line) = self.read_line(prompt)? {
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) if err.is_parse_error() => {
                    writeln!(self.output, "{}. Try again.", err)?;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(None)
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, QueueingError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        // Undecodable bytes become U+FFFD and fail parsing, so the prompt repeats
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}
