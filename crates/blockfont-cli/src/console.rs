use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use blockfont::{check_width, Banner, BannerError, TerminalProbe, WidthPolicy};

/// Writes banners that fit the terminal.
pub struct Console<W: Write> {
    out: W,
    policy: WidthPolicy,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, policy: WidthPolicy) -> Self {
        Self { out, policy }
    }

    /// Check `banner` against the terminal and print it. Nothing is written
    /// when the check fails.
    pub fn emit<P: TerminalProbe + ?Sized>(&mut self, probe: &P, banner: &Banner) -> Result<()> {
        match check_width(probe, banner.width(), self.policy) {
            Ok(()) => {}
            Err(BannerError::TooWide { width, columns }) => {
                tracing::debug!(width, columns, policy = ?self.policy, "banner withheld");
                bail!("invalid terminal size");
            }
            Err(e) => return Err(anyhow!(e).context("error getting size of terminal")),
        }
        self.out
            .write_all(banner.as_str().as_bytes())
            .and_then(|()| self.out.flush())
            .context("writing banner")
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
