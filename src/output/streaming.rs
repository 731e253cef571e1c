//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines as the
//! walker produces them, for use with `TreeWalker`.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{TreeLine, TreeSink, WalkSummary};

use super::config::OutputConfig;
use super::utils::{TokenKind, line_parts};

/// Writes tree lines directly to a `WriteColor` target without buffering the tree.
pub struct StreamingFormatter<W> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        // Auto-detection already happened when `use_color` was decided
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn color_for(&self, kind: TokenKind, token: &str) -> Option<ColorSpec> {
        if !self.config.use_color {
            return None;
        }
        match kind {
            TokenKind::Folder => Some(self.config.colors.folder()),
            TokenKind::File => self.config.colors.for_file(token).cloned(),
            TokenKind::Plain => None,
        }
    }
}

impl<W: WriteColor> TreeSink for StreamingFormatter<W> {
    fn begin(&mut self, root: &Path) -> io::Result<()> {
        if self.config.show_title {
            writeln!(self.out, "Tree structure for: {}", root.display())?;
        }
        Ok(())
    }

    fn line(&mut self, line: &TreeLine) -> io::Result<()> {
        let parts = line_parts(line);

        write!(self.out, "{}", parts.prefix)?;
        match self.color_for(parts.kind, parts.token) {
            Some(spec) => {
                self.out.set_color(&spec)?;
                write!(self.out, "{}", parts.token)?;
                self.out.reset()?;
            }
            None => write!(self.out, "{}", parts.token)?,
        }
        writeln!(self.out, "{}", parts.suffix)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}
