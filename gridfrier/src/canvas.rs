//! Fixed-size character buffer a table is drawn into.

use unicode_width::UnicodeWidthChar as _;

/// One terminal column of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Char(char),
    /// Right half of the double-width character to its left.
    Spacer,
}

const BLANK: Glyph = Glyph::Char(' ');

/// Tab stops are this many columns apart, counted from where the text starts.
const TAB_WIDTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    lines: Vec<Vec<Glyph>>,
}

impl Canvas {
    /// A blank canvas of `width` columns by `height` lines.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            lines: vec![vec![BLANK; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Put a single-width character. Writes outside the canvas are dropped.
    pub fn put(&mut self, line: usize, column: usize, c: char) {
        if line >= self.height() || column >= self.width {
            log::warn!("dropped {c:?} outside the canvas at {line}:{column}");
            return;
        }
        self.set(line, column, Glyph::Char(c));
    }

    /// Put `c` in columns `from..to` of `line`.
    pub fn fill(&mut self, line: usize, from: usize, to: usize, c: char) {
        for column in from..to {
            self.put(line, column, c);
        }
    }

    /// Write `text` starting at `column`, using at most `max_width` terminal columns.
    ///
    /// Returns the number of columns written. A double-width character that does not fit is
    /// dropped together with the rest of the text. Tabs advance to the next tab stop, other
    /// control characters are skipped.
    pub fn write_str(
        &mut self,
        line: usize,
        column: usize,
        text: &str,
        max_width: usize,
    ) -> usize {
        if line >= self.height() {
            return 0;
        }
        let limit = max_width.min(self.width.saturating_sub(column));
        let mut written = 0;
        for c in text.chars() {
            if c == '\t' {
                let stop = (written / TAB_WIDTH + 1) * TAB_WIDTH;
                let end = stop.min(limit);
                for offset in written..end {
                    self.set(line, column + offset, BLANK);
                }
                written = end;
                if stop > limit {
                    break;
                }
                continue;
            }
            let Some(width) = c.width() else {
                continue;
            };
            if width == 0 {
                continue;
            }
            if written + width > limit {
                break;
            }
            self.set(line, column + written, Glyph::Char(c));
            if width == 2 {
                self.set(line, column + written + 1, Glyph::Spacer);
            }
            written += width;
        }
        written
    }

    /// Overwrite a slot, blanking the other half of any wide character it splits.
    fn set(&mut self, line: usize, column: usize, glyph: Glyph) {
        let row = &mut self.lines[line];
        let current = row[column];
        match current {
            Glyph::Spacer if column > 0 => row[column - 1] = BLANK,
            Glyph::Char(_) if row.get(column + 1) == Some(&Glyph::Spacer) => {
                row[column + 1] = BLANK;
            }
            Glyph::Char(_) | Glyph::Spacer => {}
        }
        row[column] = glyph;
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .filter_map(|glyph| match glyph {
                        Glyph::Char(c) => Some(c),
                        Glyph::Spacer => None,
                    })
                    .collect()
            })
            .collect()
    }
}
