//! Brick board: a fixed grid of hit points loaded from level files
//!
//! Level files are plain text. Every ASCII digit fills the next cell in
//! row-major order; anything else (whitespace, comments) is ignored.

use std::io;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::tuning::Tuning;

/// Grid of brick hit points (0 = empty cell)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cols: usize,
    rows: usize,
    /// Size of one cell in pixels
    cell_size: Vec2,
    /// Row-major cells
    cells: Vec<u8>,
}

impl Board {
    /// Create an empty board
    pub fn new(cols: usize, rows: usize, cell_size: Vec2) -> Self {
        Self {
            cols,
            rows,
            cell_size,
            cells: vec![0; cols * rows],
        }
    }

    /// Board covering the whole screen with brick-sized cells
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.board_cols(), tuning.board_rows(), tuning.brick_size())
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set a cell's hit points; out-of-range cells are ignored
    pub fn set(&mut self, row: usize, col: usize, hp: u8) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = hp;
        }
    }

    /// Take one hit point off a cell, returning what is left
    pub fn hit(&mut self, row: usize, col: usize) -> Option<u8> {
        let i = self.index(row, col)?;
        self.cells[i] = self.cells[i].saturating_sub(1);
        Some(self.cells[i])
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// True when no brick is left
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&hp| hp == 0)
    }

    /// Number of cells still holding a brick
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|&&hp| hp > 0).count()
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            col as f32 * self.cell_size.x,
            row as f32 * self.cell_size.y,
            self.cell_size.x,
            self.cell_size.y,
        )
    }

    /// Non-empty cells as `(row, col, hp)` in row-major order
    pub fn bricks(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &hp)| hp > 0)
            .map(move |(i, &hp)| (i / cols, i % cols, hp))
    }

    /// Fill cells in row-major order from the digits in `text`.
    ///
    /// Non-digit bytes are skipped, digits past the last cell are dropped.
    /// Cells after the last digit keep their value. Returns the number of
    /// cells written.
    pub fn fill_from_digits(&mut self, text: &[u8]) -> usize {
        let digits = text
            .iter()
            .filter(|b| b.is_ascii_digit())
            .map(|b| b - b'0');

        let mut written = 0;
        for (cell, hp) in self.cells.iter_mut().zip(digits) {
            *cell = hp;
            written += 1;
        }
        written
    }

    /// Replace the board with the level stored at `path`.
    ///
    /// The board is left untouched when the file cannot be read. Otherwise
    /// it is zeroed first, so a short file never leaves stale bricks behind.
    pub fn load_level(&mut self, path: &Path) -> io::Result<()> {
        let text = std::fs::read(path)?;
        self.clear();
        let written = self.fill_from_digits(&text);
        log::debug!(
            "Loaded {} ({} cells, {} bricks)",
            path.display(),
            written,
            self.remaining()
        );
        Ok(())
    }

    /// Load level `level` from `dir`. An error means there is no such level.
    pub fn load_level_number(&mut self, dir: &Path, level: u32) -> io::Result<()> {
        self.load_level(&level_path(dir, level))
    }
}

/// Path of the file holding level `level`
pub fn level_path(dir: &Path, level: u32) -> PathBuf {
    dir.join(format!("{level}.level"))
}
