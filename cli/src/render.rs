//! Frame drawing with crossterm.
//!
//! The board is painted onto a character canvas, then queued as styled runs
//! that overwrite the previous frame in place.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
    terminal::{self, ClearType},
};
use rewind_2048_core::{Grid, Sprite, BOARD_SIZE};

/// Tile footprint in characters.
const TILE_W: usize = 7;
const TILE_H: usize = 3;
/// Gap between tiles, in characters.
const GAP_W: usize = 1;
const GAP_H: usize = 1;

const CANVAS_W: usize = BOARD_SIZE * (TILE_W + GAP_W) + GAP_W;
const CANVAS_H: usize = BOARD_SIZE * (TILE_H + GAP_H) + GAP_H;

/// Rows above the canvas: the score line and a blank one.
const CANVAS_TOP: u16 = 2;

type Rgb = (u8, u8, u8);

const BACKGROUND: Rgb = (187, 173, 160);
const EMPTY_CELL: Rgb = (205, 193, 180);
const DARK_TEXT: Rgb = (119, 110, 101);
const LIGHT_TEXT: Rgb = (249, 246, 242);

/// Everything needed to draw one frame. Built from the game, never written
/// back to it.
#[derive(Debug, Clone)]
pub struct View {
    pub score: u32,
    pub undo_available: usize,
    pub won: bool,
    pub over: bool,
    pub last_gain: u32,
    pub sprites: Vec<Sprite>,
}

/// One sprite per tile, sitting still on its cell.
pub fn grid_sprites(grid: &Grid) -> Vec<Sprite> {
    let mut sprites = Vec::new();
    for (row, line) in grid.iter().enumerate() {
        for (col, &value) in line.iter().enumerate() {
            if value != 0 {
                sprites.push(Sprite {
                    value,
                    row: row as f32,
                    col: col as f32,
                });
            }
        }
    }
    sprites
}

fn tile_color(value: u32) -> Rgb {
    match value {
        0 => EMPTY_CELL,
        2 => (238, 228, 218),
        4 => (237, 224, 200),
        8 => (242, 177, 121),
        16 => (245, 149, 99),
        32 => (246, 124, 95),
        64 => (246, 94, 59),
        128 => (237, 207, 114),
        256 => (237, 204, 97),
        512 => (237, 200, 80),
        1024 => (237, 197, 63),
        _ => (237, 194, 46),
    }
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn text_color(value: u32) -> Rgb {
    if value <= 4 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pixel {
    bg: Rgb,
    fg: Rgb,
    ch: char,
}

struct Canvas {
    pixels: Vec<[Pixel; CANVAS_W]>,
}

impl Canvas {
    fn new() -> Self {
        let blank = Pixel {
            bg: BACKGROUND,
            fg: DARK_TEXT,
            ch: ' ',
        };
        Canvas {
            pixels: vec![[blank; CANVAS_W]; CANVAS_H],
        }
    }

    /// Paint a tile whose top-left corner sits at fractional cell `(row, col)`.
    fn tile(&mut self, row: f32, col: f32, value: u32) {
        let top = (row * (TILE_H + GAP_H) as f32).round() as usize + GAP_H;
        let left = (col * (TILE_W + GAP_W) as f32).round() as usize + GAP_W;
        let bg = tile_color(value);
        let fg = text_color(value);

        let label = if value == 0 {
            String::new()
        } else {
            value.to_string()
        };
        let label_start = left + (TILE_W.saturating_sub(label.len())) / 2;
        let label_row = top + TILE_H / 2;

        for y in top..(top + TILE_H).min(CANVAS_H) {
            for x in left..(left + TILE_W).min(CANVAS_W) {
                self.pixels[y][x] = Pixel { bg, fg, ch: ' ' };
            }
        }
        for (i, ch) in label.chars().enumerate() {
            let x = label_start + i;
            if label_row < CANVAS_H && x < CANVAS_W {
                self.pixels[label_row][x].ch = ch;
            }
        }
    }

    /// Queue the canvas starting at screen row `top`, one styled run per
    /// stretch of identical colours.
    fn queue_to(&self, out: &mut impl Write, top: u16) -> io::Result<()> {
        for (y, line) in self.pixels.iter().enumerate() {
            queue!(out, cursor::MoveTo(0, top + y as u16))?;
            let mut run = String::with_capacity(CANVAS_W);
            let mut current: Option<(Rgb, Rgb)> = None;
            for px in line {
                if current != Some((px.bg, px.fg)) {
                    flush_run(out, current, &mut run)?;
                    current = Some((px.bg, px.fg));
                }
                run.push(px.ch);
            }
            flush_run(out, current, &mut run)?;
            queue!(out, style::ResetColor)?;
        }
        Ok(())
    }
}

fn flush_run(out: &mut impl Write, colors: Option<(Rgb, Rgb)>, run: &mut String) -> io::Result<()> {
    if let Some((bg, fg)) = colors {
        if !run.is_empty() {
            queue!(
                out,
                style::SetBackgroundColor(rgb(bg)),
                style::SetForegroundColor(rgb(fg)),
                style::Print(&*run),
            )?;
        }
    }
    run.clear();
    Ok(())
}

/// Queue one text line at screen row `y`, blanking whatever was left there.
fn text_line(out: &mut impl Write, y: u16, text: &str) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, y),
        style::Print(text),
        terminal::Clear(ClearType::UntilNewLine),
    )
}

/// Queue a full frame, including the status lines. The caller flushes.
pub fn draw(out: &mut impl Write, view: &View) -> io::Result<()> {
    let mut canvas = Canvas::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            canvas.tile(row as f32, col as f32, 0);
        }
    }
    for sprite in &view.sprites {
        canvas.tile(sprite.row, sprite.col, sprite.value);
    }

    let mut header = format!(
        "=== 2048 ===   Score: {}   Undo: {}",
        view.score, view.undo_available
    );
    if view.last_gain > 0 {
        header.push_str(&format!("   +{}", view.last_gain));
    }
    text_line(out, 0, &header)?;
    text_line(out, 1, "")?;

    canvas.queue_to(out, CANVAS_TOP)?;

    let below = CANVAS_TOP + CANVAS_H as u16;
    text_line(out, below, "")?;
    let banner = if view.over {
        "  *** GAME OVER ***  Z to undo, R to restart"
    } else if view.won {
        "  You reached 2048! Keep going."
    } else {
        ""
    };
    text_line(out, below + 1, banner)?;
    text_line(
        out,
        below + 2,
        "Controls: WASD or Arrow Keys | Z undo | R restart | Q quit",
    )?;
    queue!(out, terminal::Clear(ClearType::FromCursorDown))
}
