use crate::colour::Colour;
use crate::error::Error;

/// An RGB buffer with the dimensions of a device lighting matrix.
///
/// The daemon takes a whole frame in one `setKeyRow` call. Each row is
/// encoded as `[row, start_col, end_col]` followed by one RGB triplet per
/// column, rows concatenated in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    data: Vec<Colour>,
}

impl Frame {
    /// A frame with every LED off.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Colour::BLACK; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Colour> {
        if row < self.rows && column < self.cols {
            Some(self.data[row * self.cols + column])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, column: usize, colour: Colour) -> Result<(), Error> {
        if row >= self.rows || column >= self.cols {
            return Err(Error::MatrixBounds {
                row,
                column,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + column] = colour;
        Ok(())
    }

    pub fn to_binary(&self) -> Vec<u8> {
        if self.cols == 0 {
            return Vec::new();
        }
        let mut buf = Vec::with_capacity(self.rows * (3 + self.cols * 3));
        for (row, colours) in self.data.chunks(self.cols).enumerate() {
            // Row ids and column bounds are single bytes on the wire
            buf.extend_from_slice(&[row as u8, 0, (self.cols - 1) as u8]);
            for c in colours {
                buf.extend_from_slice(&c.as_array());
            }
        }
        buf
    }
}
