//! Greedy label wrapping
//!
//! Fits a label into a fixed-width box one whitespace-separated word at a
//! time, measuring each candidate line through a [`TextMeasure`].

use crate::types::Result;

/// Something that can report the rendered width of a string.
pub trait TextMeasure {
    /// Rendered width of `text` in pixels
    fn text_width(&self, text: &str) -> Result<f32>;
}

/// Wrap `text` into lines no wider than `available_width`.
///
/// Words are never split: a single word wider than the box is emitted on a
/// line of its own, unchanged. Blank text produces no lines.
pub fn wrap_label<M>(text: &str, available_width: f32, measure: &M) -> Result<Vec<String>>
where
    M: TextMeasure + ?Sized,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure.text_width(&candidate)? <= available_width {
            current = candidate;
        } else if !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            lines.push(word.to_string());
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

/// Wrapped lines plus the metrics needed to stack them vertically
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    /// Height of one line, measured from a reference glyph pair
    pub line_height: u32,
    /// Gap between consecutive lines
    pub spacing: u32,
}

impl TextBlock {
    pub fn new(lines: Vec<String>, line_height: u32, spacing: u32) -> Self {
        Self {
            lines,
            line_height,
            spacing,
        }
    }

    /// `n * line_height + (n - 1) * spacing`, zero for no lines
    pub fn height(&self) -> u32 {
        let n = self.lines.len() as u32;
        n * self.line_height + n.saturating_sub(1) * self.spacing
    }

    /// Top of the first line when the block is centered in `region_height`.
    ///
    /// Rounds toward negative infinity, so a block taller than the region
    /// starts above it.
    pub fn start_y(&self, region_height: u32) -> i32 {
        (region_height as i32 - self.height() as i32).div_euclid(2)
    }

    /// Top of every line, in order
    pub fn line_tops(&self, region_height: u32) -> Vec<i32> {
        let start = self.start_y(region_height);
        let pitch = (self.line_height + self.spacing) as i32;
        (0..self.lines.len() as i32).map(|i| start + i * pitch).collect()
    }
}
