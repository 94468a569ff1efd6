//! Plain shell: one command per line on stdin, results on stdout.

use super::output::{JsonRound, JsonSummary, format_round_text, format_summary_text};
use super::{Action, CliError, OutputFormat};
use roshambo::{MoveSource, RoundListener, RoundRecord, Score, Session};
use std::io::{self, BufRead, Write};

/// Execute the plain shell on the process's stdin and stdout.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub(crate) fn execute<S: MoveSource>(source: S, format: OutputFormat) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(
        Session::new(source),
        format,
        stdin.lock(),
        stdout.lock(),
        stderr.lock(),
    )
}

/// Writes each round to the output as it is resolved.
struct LinePrinter<W> {
    out: W,
    format: OutputFormat,
    failure: Option<CliError>,
}

impl<W: Write> LinePrinter<W> {
    fn write_round(&mut self, record: &RoundRecord, score: Score) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => {
                write!(self.out, "{}", format_round_text(record, score))?;
            }
            OutputFormat::Json => {
                let line = JsonRound {
                    round: score.rounds(),
                    record,
                    score,
                };
                writeln!(self.out, "{}", serde_json::to_string(&line)?)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_summary(&mut self, score: Score) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => write!(self.out, "{}", format_summary_text(score))?,
            OutputFormat::Json => writeln!(
                self.out,
                "{}",
                serde_json::to_string(&JsonSummary::from_score(score))?
            )?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Surface the first write failure seen by `on_round`.
    fn check(&mut self) -> Result<(), CliError> {
        self.failure.take().map_or(Ok(()), Err)
    }
}

impl<W: Write> RoundListener for LinePrinter<W> {
    fn on_round(&mut self, record: &RoundRecord, score: Score) {
        if self.failure.is_none()
            && let Err(e) = self.write_round(record, score)
        {
            self.failure = Some(e);
        }
    }
}

/// Drive a session from `input` until `quit` or end of input.
fn run<S, R, W, E>(
    mut session: Session<S>,
    format: OutputFormat,
    input: R,
    out: W,
    mut err: E,
) -> Result<(), CliError>
where
    S: MoveSource,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut printer = LinePrinter {
        out,
        format,
        failure: None,
    };

    log::info!("Plain session started");

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match Action::parse(command) {
            Some(Action::Quit) => break,
            Some(Action::Play(player)) => {
                if let Err(e) = session.play_round(player, &mut printer) {
                    log::debug!("Round not played: {e}");
                    writeln!(err, "Error: {e}")?;
                }
                printer.check()?;
            }
            None => {
                writeln!(
                    err,
                    "Unknown command {command:?}; expected rock, paper, scissors, or quit"
                )?;
            }
        }
    }

    printer.write_summary(session.score())?;
    log::info!("Plain session ended after {} rounds", session.rounds());

    Ok(())
}
