//! Terminal width gate.

use std::process::{Command, Stdio};

use crate::error::{BannerError, Result};

/// Source of the current terminal's column count.
pub trait TerminalProbe {
    fn columns(&self) -> Result<usize>;
}

/// Queries `stty size` on the inherited stdin, which prints `rows cols`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SttyProbe;

impl TerminalProbe for SttyProbe {
    fn columns(&self) -> Result<usize> {
        let output = Command::new("stty")
            .arg("size")
            .stdin(Stdio::inherit())
            .output()
            .map_err(|e| BannerError::TerminalQuery(e.to_string()))?;
        if !output.status.success() {
            return Err(stty_failure(
                &output.status.to_string(),
                &String::from_utf8_lossy(&output.stderr),
            ));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let (_rows, cols) = parse_stty_size(&stdout)?;
        tracing::debug!(columns = cols, "terminal size");
        Ok(cols)
    }
}

/// Error for a failed `stty` run, carrying its own message when it printed one.
fn stty_failure(status: &str, stderr: &str) -> BannerError {
    match stderr.trim() {
        "" => BannerError::TerminalQuery(format!("stty exited with {status}")),
        message => BannerError::TerminalQuery(format!("stty exited with {status}: {message}")),
    }
}

/// A fixed column count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedColumns(pub usize);

impl TerminalProbe for FixedColumns {
    fn columns(&self) -> Result<usize> {
        Ok(self.0)
    }
}

/// Parse the `rows cols` pair printed by `stty size`.
pub fn parse_stty_size(output: &str) -> Result<(usize, usize)> {
    let mut fields = output.split_whitespace().map(str::parse::<usize>);
    match (fields.next(), fields.next()) {
        (Some(Ok(rows)), Some(Ok(cols))) => Ok((rows, cols)),
        _ => Err(BannerError::TerminalQuery(format!(
            "unexpected stty output: {:?}",
            output.trim()
        ))),
    }
}

/// When a banner counts as too wide for the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Reject when `width >= columns`, leaving the last column free.
    #[default]
    AtWidth,
    /// Reject only when `width > columns`.
    PastWidth,
}

impl WidthPolicy {
    pub fn is_too_wide(self, width: usize, columns: usize) -> bool {
        match self {
            WidthPolicy::AtWidth => width >= columns,
            WidthPolicy::PastWidth => width > columns,
        }
    }
}

/// Query `probe` and fail with [`BannerError::TooWide`] if `width` does not
/// fit under `policy`.
pub fn check_width<P: TerminalProbe + ?Sized>(
    probe: &P,
    width: usize,
    policy: WidthPolicy,
) -> Result<()> {
    let columns = probe.columns()?;
    if policy.is_too_wide(width, columns) {
        return Err(BannerError::TooWide { width, columns });
    }
    Ok(())
}
