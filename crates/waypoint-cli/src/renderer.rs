//! Terminal output for the markdown produced by the display layer.
//!
//! Roadmaps, summaries, and status messages all flow through here as
//! markdown strings. With color enabled the text is styled via termimad;
//! `--no-color` falls back to printing the markdown verbatim, which is
//! also what the CLI tests assert against.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Prints roadmap markdown to the terminal, styled or plain.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            rich_enabled,
            skin: Self::roadmap_skin(),
        }
    }

    /// Skin tuned for the roadmap layout: blue headers match the manual
    /// header coloring in [`render`](Self::render), yellow bold picks out
    /// step titles, and durations rendered as inline code get a subtle
    /// background.
    fn roadmap_skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{}", markdown);
            return Ok(());
        }
        for line in markdown.lines() {
            // Header lines keep their hash prefix so the "### 3. Ownership"
            // step numbering stays scannable; termimad would strip it.
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
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
