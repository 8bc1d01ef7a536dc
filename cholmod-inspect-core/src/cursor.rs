//! Column-major coordinate cursor
//!
//! Display layers enumerate every dense cell of the matrix, stored or
//! not. The cursor walks the full `rows x cols` extent in column-major
//! order, row advancing first, and is exhausted once the column index
//! passes the last column. One-shot: rescanning takes a fresh cursor.

/// Iterator over every (row, col) coordinate of a dense extent
#[derive(Debug, Clone)]
pub struct DenseCursor {
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
}

impl DenseCursor {
    /// Cursor positioned before (0, 0)
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row: 0,
            col: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.rows == 0 || self.col >= self.cols {
            return 0;
        }
        (self.cols - self.col) * self.rows - self.row
    }
}

impl Iterator for DenseCursor {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.rows == 0 || self.col >= self.cols {
            return None;
        }
        let item = (self.row, self.col);
        self.row += 1;
        if self.row == self.rows {
            self.row = 0;
            self.col += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DenseCursor {}
