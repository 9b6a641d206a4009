//! Graphical presentation backend.
//!
//! Nanny does not link a GUI toolkit. The modal dialog is drawn by a helper
//! program found on `PATH`: `kdialog` (Qt rich text) is preferred, `zenity`
//! (Pango markup) is the fallback. The helper's exit status is the answer:
//! 0 is Continue, 1 is Quit. When no helper can be run, or it dies or
//! reports any other status, the caller gets
//! [`NannyError::DialogUnavailable`] and may fall back to the terminal.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::advisory::RichMessage;
use crate::error::{NannyError, Result};

use super::richtext::{escape, RichText, Run};
use super::Presenter;

/// Dialog width in pixels, wide enough for the telemetry advisory.
pub const DIALOG_WIDTH: u32 = 640;

/// Label of the accepting button.
pub const CONTINUE_LABEL: &str = "Continue";

/// Label of the declining (default) button.
pub const QUIT_LABEL: &str = "Quit";

/// Supported dialog helper programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTool {
    Kdialog,
    Zenity,
}

impl DialogTool {
    /// Helpers in order of preference.
    pub const ALL: [DialogTool; 2] = [DialogTool::Kdialog, DialogTool::Zenity];

    /// Executable name.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Kdialog => "kdialog",
            Self::Zenity => "zenity",
        }
    }

    /// Find the first available helper on the given search path.
    pub fn detect(path_entries: &[PathBuf]) -> Option<(DialogTool, PathBuf)> {
        Self::ALL.iter().find_map(|tool| {
            resolve_tool_path(tool.binary(), path_entries).map(|path| (*tool, path))
        })
    }

    /// Command-line arguments that show `message`.
    pub fn args(&self, message: &RichMessage) -> Vec<String> {
        let markup = dialog_markup(message);
        let question = !message.is_acknowledgment();

        match self {
            Self::Kdialog => {
                let mut args = vec![
                    "--title".to_string(),
                    message.title.clone(),
                    "--icon".to_string(),
                    "dialog-warning".to_string(),
                ];
                if question {
                    args.extend([
                        "--warningyesno".to_string(),
                        markup,
                        "--yes-label".to_string(),
                        CONTINUE_LABEL.to_string(),
                        "--no-label".to_string(),
                        QUIT_LABEL.to_string(),
                    ]);
                } else {
                    args.extend(["--sorry".to_string(), markup]);
                }
                args
            }
            Self::Zenity => {
                let mut args = vec![
                    if question { "--question" } else { "--warning" }.to_string(),
                    format!("--title={}", message.title),
                    format!("--text={}", to_pango_markup(&RichText::parse(&markup))),
                    format!("--width={}", DIALOG_WIDTH),
                ];
                if question {
                    args.extend([
                        format!("--ok-label={}", CONTINUE_LABEL),
                        format!("--cancel-label={}", QUIT_LABEL),
                        "--default-cancel".to_string(),
                    ]);
                }
                args
            }
        }
    }
}

/// Modal dialog presenter.
#[derive(Debug, Clone)]
pub struct DialogPresenter {
    path_entries: Vec<PathBuf>,
}

impl Default for DialogPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogPresenter {
    /// Search the system `PATH` for a dialog helper.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Search only the given directories for a dialog helper.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }
}

impl Presenter for DialogPresenter {
    fn present(&mut self, message: &RichMessage) -> Result<Option<bool>> {
        let (tool, program) =
            DialogTool::detect(&self.path_entries).ok_or_else(|| NannyError::DialogUnavailable {
                message: "neither kdialog nor zenity found on PATH".to_string(),
            })?;

        tracing::debug!(tool = tool.binary(), program = %program.display(), "showing dialog");
        let status = Command::new(&program)
            .args(tool.args(message))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| NannyError::DialogUnavailable {
                message: format!("failed to run {}: {}", program.display(), e),
            })?;
        tracing::debug!(?status, "dialog closed");

        let accepted = match status.code() {
            Some(0) => true,
            Some(1) => false,
            _ => {
                return Err(NannyError::DialogUnavailable {
                    message: format!("{} failed ({})", tool.binary(), status),
                })
            }
        };

        if message.is_acknowledgment() {
            Ok(None)
        } else {
            Ok(Some(accepted))
        }
    }
}

/// Body shown in the dialog: the message body, then the prompt.
pub fn dialog_markup(message: &RichMessage) -> String {
    if message.is_acknowledgment() {
        message.body.clone()
    } else {
        format!("{}<br>{}", message.body, message.prompt)
    }
}

/// Convert a document to Pango markup for GTK labels.
pub fn to_pango_markup(doc: &RichText) -> String {
    let mut out = String::new();
    for (i, paragraph) in doc.paragraphs.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        for run in &paragraph.runs {
            match run {
                Run::Text { text, bold: true } => {
                    out.push_str(&format!("<b>{}</b>", escape(text)));
                }
                Run::Text { text, bold: false } => out.push_str(&escape(text)),
                Run::Link { href, text } => {
                    out.push_str(&format!("<a href=\"{}\">{}</a>", escape(href), escape(text)));
                }
                Run::LineBreak => out.push('\n'),
            }
        }
    }
    out
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
