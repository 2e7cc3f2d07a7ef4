//! Terminal rendering for markdown output
//!
//! Plans, catalogs and prompts are produced as markdown by the core
//! `Display` impls. This module prints them through termimad, or verbatim
//! when colors are disabled.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Print markdown to stdout.
    ///
    /// Header lines keep their leading hashes so the phase structure stays
    /// visible; every other line goes through the skin.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match header_color(line) {
                Some(code) => println!("\x1b[1;{code}m{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI color code for a markdown header line, by level.
fn header_color(line: &str) -> Option<u8> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || !line[level..].starts_with(' ') {
        return None;
    }
    Some(match level {
        1 => 35,
        2 => 34,
        _ => 36,
    })
}
