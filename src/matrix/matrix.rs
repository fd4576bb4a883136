use crate::error::Result;

/// Read-only interface of a fully built matrix.
///
/// Every operation returning a matrix allocates a new one; nothing here
/// mutates `self`. Filling a matrix is the job of
/// [`MatrixBuilder`](crate::matrix::builder::MatrixBuilder).
pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;
    fn identity(n: usize) -> Result<Self>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;
    fn get(&self, row: usize, col: usize) -> Result<T>;
    fn get_row(&self, row: usize) -> Result<Vec<T>>;
    fn get_col(&self, col: usize) -> Result<Vec<T>>;

    fn is_diagonal(&self) -> bool;
    fn transpose(&self) -> Self;
    fn sub_matrix(&self, drop_row: usize, drop_col: usize) -> Result<Self>;

    fn det(&self) -> Result<T>;
    fn cofactor(&self) -> Result<Self>;
    fn adjugate(&self) -> Result<Self>;
    fn inverse(&self) -> Result<Self>;
    fn trace(&self) -> Result<T>;

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    fn is_vector(&self) -> bool {
        self.cols() == 1
    }

    fn same_size(&self, other: &Self) -> bool {
        self.rows() == other.rows() && self.cols() == other.cols()
    }
}
