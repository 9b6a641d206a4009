//! Terminal presentation backend.
//!
//! Writes the advisory to standard output and, for questions, reads one
//! bounded line from standard input. Only an answer starting with `y` or
//! `Y` accepts; anything else, including EOF, declines.

use std::io::{self, BufRead, Read, StdinLock, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;

use crate::advisory::RichMessage;
use crate::error::{NannyError, Result};

use super::render::to_terminal_text;
use super::theme::NannyTheme;
use super::Presenter;

/// Longest answer line read from the user, in bytes.
pub const MAX_ANSWER_LEN: u64 = 64;

/// Question suffix shown after the prompt.
pub const PROCEED_QUESTION: &str = "Proceed? [y/N]";

/// Notice printed when the user declines.
pub const DECLINE_NOTICE: &str = "You have chosen not to proceed. Exiting...";

/// Terminal UI over arbitrary input and output streams.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    theme: NannyTheme,
    colorize: bool,
    check_stdio: bool,
}

impl TerminalPresenter<StdinLock<'static>, Term> {
    /// Present on the process's standard streams.
    pub fn stdio(colorize: bool) -> Self {
        Self {
            input: io::stdin().lock(),
            output: Term::stdout(),
            theme: NannyTheme::for_colorize(colorize),
            colorize,
            check_stdio: true,
        }
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    /// Present on explicit streams (used by tests).
    pub fn new(input: R, output: W, colorize: bool) -> Self {
        Self {
            input,
            output,
            theme: NannyTheme::for_colorize(colorize),
            colorize,
            check_stdio: false,
        }
    }

    /// Consume the presenter and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| {
                tracing::debug!(error = %e, "write to stdout failed");
                NannyError::StdoutUnavailable
            })
    }

    fn read_answer(&mut self) -> Vec<u8> {
        let mut answer = Vec::new();
        if let Err(e) = (&mut self.input)
            .take(MAX_ANSWER_LEN)
            .read_until(b'\n', &mut answer)
        {
            tracing::debug!(error = %e, "reading answer failed; treating as decline");
            answer.clear();
        }
        answer
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn present(&mut self, message: &RichMessage) -> Result<Option<bool>> {
        if self.check_stdio {
            ensure_stdio_open()?;
        }

        let mut transcript = format!(
            "{}\n\n{}",
            self.theme.format_title(&message.title),
            to_terminal_text(&message.body, self.colorize)
        );
        if !message.is_acknowledgment() {
            transcript.push('\n');
            transcript.push_str(&to_terminal_text(&message.prompt, self.colorize));
            transcript.push('\n');
            transcript.push_str(&format!(
                "{} ",
                self.theme.question.apply_to(PROCEED_QUESTION)
            ));
        }
        self.write(&transcript)?;

        if message.is_acknowledgment() {
            return Ok(None);
        }

        let answer = self.read_answer();
        let accepted = matches!(answer.first(), Some(b'y' | b'Y'));
        if !accepted {
            let notice = format!("{}\n", self.theme.notice.apply_to(DECLINE_NOTICE));
            if let Err(e) = self.write(&notice) {
                tracing::warn!(error = %e, "could not show decline notice");
            }
        }
        Ok(Some(accepted))
    }
}

static STDIN_OPEN: AtomicBool = AtomicBool::new(true);
static STDOUT_OPEN: AtomicBool = AtomicBool::new(true);

/// Record whether stdin and stdout are open.
///
/// The binary calls this from `.init_array`, before the Rust runtime
/// reopens closed standard descriptors on `/dev/null`. Without that call
/// both streams are assumed open.
pub fn record_startup_stdio() {
    STDIN_OPEN.store(fd_is_open(0), Ordering::Relaxed);
    STDOUT_OPEN.store(fd_is_open(1), Ordering::Relaxed);
}

/// Fail with the dedicated stream errors if stdout or stdin was closed at
/// startup.
///
/// Standard output is checked first.
pub fn ensure_stdio_open() -> Result<()> {
    check_streams(
        STDOUT_OPEN.load(Ordering::Relaxed),
        STDIN_OPEN.load(Ordering::Relaxed),
    )
}

fn check_streams(stdout_open: bool, stdin_open: bool) -> Result<()> {
    if !stdout_open {
        return Err(NannyError::StdoutUnavailable);
    }
    if !stdin_open {
        return Err(NannyError::StdinUnavailable);
    }
    Ok(())
}

#[cfg(unix)]
fn fd_is_open(fd: libc::c_int) -> bool {
    // SAFETY: F_GETFD only queries descriptor flags and touches no memory.
    unsafe { libc::fcntl(fd, libc::F_GETFD) != -1 }
}

#[cfg(not(unix))]
fn fd_is_open(_fd: i32) -> bool {
    true
}
