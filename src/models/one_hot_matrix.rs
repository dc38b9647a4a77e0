use crate::models::Error;
use crate::types::OneHotValue;

/// A dense, row-major `rows × cols` matrix.
///
/// Rows correspond to sequence positions and columns to vocabulary indices.
/// Matrices produced by the encoder hold only `0.0` and `1.0`; matrices handed
/// to the decoder may hold arbitrary scores (e.g. softmax outputs of a model).
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotMatrix {
    rows: usize,
    cols: usize,
    data: Vec<OneHotValue>,
}

impl OneHotMatrix {
    /// Creates a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    /// * `Error::RaggedMatrix` if the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<OneHotValue>>) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, |row| row.len());

        if rows.iter().any(|row| row.len() != cols) {
            return Err(Error::RaggedMatrix);
        }

        let row_count = rows.len();
        let data = rows.into_iter().flatten().collect();

        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<OneHotValue> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: OneHotValue) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> Option<&[OneHotValue]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Iterates over rows in order.
    ///
    /// Zero-column matrices still yield one (empty) slice per row.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[OneHotValue]> + '_ {
        (0..self.rows).map(move |row| {
            let start = row * self.cols;
            &self.data[start..start + self.cols]
        })
    }

    pub fn as_slice(&self) -> &[OneHotValue] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<OneHotValue> {
        self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<OneHotValue>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }

    /// Sum of each row. Every row of an encoded sequence sums to `1.0`.
    pub fn row_sums(&self) -> Vec<OneHotValue> {
        self.iter_rows().map(|row| row.iter().sum()).collect()
    }
}
