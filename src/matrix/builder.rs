use crate::error::{MathError, Result};
use crate::matrix::matrix_gen::MatrixGen;
use crate::utils::chunk_rows;

/// Mutable filling phase of a matrix.
///
/// The size is fixed at creation. Cells come either all at once through
/// `populate`, row by row through `add_row`, or column by column through
/// `add_col`. `build` hands back an immutable [`MatrixGen`] once every cell
/// is present.
#[derive(Debug, Clone)]
pub struct MatrixBuilder<T> {
    rows: usize,
    cols: usize,
    lines: Vec<Vec<T>>,
}

impl<T: Clone> MatrixBuilder<T> {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MathError::invalid(
                "Number of rows and cols must be positive not null integers",
            ));
        }

        Ok(MatrixBuilder {
            rows,
            cols,
            lines: Vec::with_capacity(rows),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn filled_cols(&self) -> usize {
        self.lines.first().map(|line| line.len()).unwrap_or(0)
    }

    /// Replaces the content with `flat`, read row after row.
    pub fn populate(&mut self, flat: Vec<T>) -> Result<&mut Self> {
        if flat.len() != self.rows * self.cols {
            return Err(MathError::invalid(format!(
                "Expected {} values to populate a {}x{} matrix, got {}",
                self.rows * self.cols,
                self.rows,
                self.cols,
                flat.len()
            )));
        }

        self.lines = chunk_rows(&flat, self.cols);
        Ok(self)
    }

    pub fn add_row(&mut self, row: Vec<T>) -> Result<&mut Self> {
        if self.lines.len() >= self.rows {
            return Err(MathError::out_of_range(format!(
                "Matrix already has its {} rows",
                self.rows
            )));
        }
        if row.len() != self.cols {
            return Err(MathError::invalid(format!(
                "New row must have {} columns, got {}",
                self.cols,
                row.len()
            )));
        }

        self.lines.push(row);
        Ok(self)
    }

    pub fn add_col(&mut self, col: Vec<T>) -> Result<&mut Self> {
        // rows started with add_row are complete lines, columns can't fit in
        if !self.lines.is_empty() && self.lines.len() != self.rows {
            return Err(MathError::invalid(
                "Cannot add a column while rows are partially filled",
            ));
        }
        if self.filled_cols() >= self.cols {
            return Err(MathError::out_of_range(format!(
                "Matrix already has its {} columns",
                self.cols
            )));
        }
        if col.len() != self.rows {
            return Err(MathError::invalid(format!(
                "New column must have {} rows, got {}",
                self.rows,
                col.len()
            )));
        }

        if self.lines.is_empty() {
            self.lines = (0..self.rows).map(|_| Vec::with_capacity(self.cols)).collect();
        }
        self.lines
            .iter_mut()
            .zip(col)
            .for_each(|(line, value)| line.push(value));
        Ok(self)
    }

    pub fn get_row(&self, row: usize) -> Result<Vec<T>> {
        self.lines
            .get(row)
            .cloned()
            .ok_or_else(|| MathError::out_of_range(format!("There is no row having index {row}")))
    }

    pub fn get_col(&self, col: usize) -> Result<Vec<T>> {
        if col >= self.filled_cols() {
            return Err(MathError::out_of_range(format!(
                "There is no column having index {col}"
            )));
        }
        Ok(self.lines.iter().map(|line| line[col].clone()).collect())
    }

    pub fn is_complete(&self) -> bool {
        self.lines.len() == self.rows && self.lines.iter().all(|line| line.len() == self.cols)
    }

    pub fn build(self) -> Result<MatrixGen<T>> {
        if !self.is_complete() {
            return Err(MathError::runtime(format!(
                "Matrix {}x{} is not fully populated",
                self.rows, self.cols
            )));
        }

        log::debug!("Built a {}x{} matrix", self.rows, self.cols);
        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self.lines.into_iter().flatten().collect(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
