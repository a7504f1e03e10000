#![allow(dead_code)]

use badge_sheets::{Badge, BadgeError, Record, Result, TextMeasure, TextRenderer};
use image::{Rgb, RgbImage};
use std::sync::Mutex;

/// Width of every character drawn by [`MonoRenderer`]
pub const CHAR_W: i32 = 10;
/// Line height reported by [`MonoRenderer`]
pub const LINE_H: i32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Fixed-width text backend: each non-space character is a filled box
#[derive(Default)]
pub struct MonoRenderer {
    pub draws: Mutex<Vec<DrawCall>>,
}

impl MonoRenderer {
    pub fn draws(&self) -> Vec<DrawCall> {
        self.draws.lock().unwrap().clone()
    }
}

impl TextMeasure for MonoRenderer {
    fn text_width(&self, text: &str) -> Result<f32> {
        Ok((text.chars().count() as i32 * CHAR_W) as f32)
    }
}

impl TextRenderer for MonoRenderer {
    fn line_height(&self, _reference: &str) -> Result<f32> {
        Ok(LINE_H as f32)
    }

    fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let (w, h) = canvas.dimensions();
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = x + i as i32 * CHAR_W;
            for px in left + 1..left + CHAR_W - 1 {
                for py in y + 2..y + LINE_H - 2 {
                    if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < h {
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
        self.draws.lock().unwrap().push(DrawCall {
            x,
            y,
            text: text.to_string(),
        });
    }
}

/// Backend whose measurements always fail
pub struct FailingRenderer;

impl TextMeasure for FailingRenderer {
    fn text_width(&self, _text: &str) -> Result<f32> {
        Err(BadgeError::Measure("font backend unavailable".to_string()))
    }
}

impl TextRenderer for FailingRenderer {
    fn line_height(&self, _reference: &str) -> Result<f32> {
        Err(BadgeError::Measure("font backend unavailable".to_string()))
    }

    fn draw_text(&self, _canvas: &mut RgbImage, _x: i32, _y: i32, _text: &str, _color: Rgb<u8>) {}
}

pub fn records(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| Record::new(format!("Person {:03}", i), format!("{}", 1000 + i), i))
        .collect()
}

/// A plain badge filled with one colour that encodes `index`
pub fn solid_badge(index: usize, width: u32, height: u32) -> Badge {
    Badge {
        image: RgbImage::from_pixel(width, height, badge_colour(index)),
        source_row: index + 1,
        lines: vec![format!("Badge {}", index)],
    }
}

pub fn badge_colour(index: usize) -> Rgb<u8> {
    Rgb([(index % 251) as u8, (index / 251 % 251) as u8, 7])
}
