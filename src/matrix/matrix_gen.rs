use num_traits::{One, Zero};

use crate::error::{MathError, Result};
use crate::matrix::builder::MatrixBuilder;
use crate::matrix::matrix::Matrix;
use crate::numbers::complex::Complex;
use crate::numbers::element::Element;
use crate::numbers::rational::Rational;
use crate::utils::{align_columns, chunk_rows};
use std::fmt;
use std::ops;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub trait GenElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> GenElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Dense row-major matrix over any [`GenElement`].
///
/// Built through [`MatrixBuilder`], [`MatrixGen::from_flat`] or
/// [`Matrix::from_list`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

/// Mixed real/complex matrix.
pub type ElemMatrix = MatrixGen<Element>;

/// Right operand of [`MatrixGen::multiply`].
#[derive(Debug, Clone)]
pub enum Multiplier<'a, T> {
    Scalar(T),
    Matrix(&'a MatrixGen<T>),
}

impl<'a, T> From<&'a MatrixGen<T>> for Multiplier<'a, T> {
    fn from(matrix: &'a MatrixGen<T>) -> Self {
        Multiplier::Matrix(matrix)
    }
}

impl<'a> From<Element> for Multiplier<'a, Element> {
    fn from(value: Element) -> Self {
        Multiplier::Scalar(value)
    }
}

impl<'a> From<f64> for Multiplier<'a, Element> {
    fn from(value: f64) -> Self {
        Multiplier::Scalar(Element::from(value))
    }
}

impl<'a> From<i32> for Multiplier<'a, Element> {
    fn from(value: i32) -> Self {
        Multiplier::Scalar(Element::from(value))
    }
}

impl<'a> From<Complex> for Multiplier<'a, Element> {
    fn from(value: Complex) -> Self {
        Multiplier::Scalar(Element::from(value))
    }
}

impl<'a> From<f64> for Multiplier<'a, f64> {
    fn from(value: f64) -> Self {
        Multiplier::Scalar(value)
    }
}

impl<'a> From<Rational> for Multiplier<'a, Rational> {
    fn from(value: Rational) -> Self {
        Multiplier::Scalar(value)
    }
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        let mut builder = MatrixBuilder::new(lines.len(), cols)?;
        for line in lines {
            builder.add_row(line)?;
        }
        builder.build()
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        chunk_rows(&self.cells, self.cols)
    }

    fn identity(n: usize) -> Result<MatrixGen<T>> {
        if n == 0 {
            return Err(MathError::invalid("Identity size must be positive"));
        }

        Ok(MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }

    #[inline(always)]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.cols {
            return Err(MathError::invalid(format!(
                "No element at ({row}, {col}) in a {}x{} matrix",
                self.rows, self.cols
            )));
        }
        Ok(self.at(row, col))
    }

    fn get_row(&self, row: usize) -> Result<Vec<T>> {
        if row >= self.rows {
            return Err(MathError::out_of_range(format!(
                "There is no row having index {row}"
            )));
        }
        Ok(self.cells[row * self.cols..(row + 1) * self.cols].to_vec())
    }

    fn get_col(&self, col: usize) -> Result<Vec<T>> {
        if col >= self.cols {
            return Err(MathError::out_of_range(format!(
                "There is no column having index {col}"
            )));
        }
        Ok((0..self.rows).map(|r| self.at(r, col)).collect())
    }

    fn is_diagonal(&self) -> bool {
        (0..self.rows)
            .flat_map(|i| (0..self.cols).map(move |j| (i, j)))
            .filter(|(i, j)| i != j)
            .all(|(i, j)| self.cells[i * self.cols + j].is_zero())
    }

    fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    fn sub_matrix(&self, drop_row: usize, drop_col: usize) -> Result<MatrixGen<T>> {
        if drop_row >= self.rows || drop_col >= self.cols {
            return Err(MathError::out_of_range(format!(
                "Cannot drop ({drop_row}, {drop_col}) from a {}x{} matrix",
                self.rows, self.cols
            )));
        }
        if self.rows < 2 || self.cols < 2 {
            return Err(MathError::invalid(
                "A submatrix needs at least 2 rows and 2 columns to start from",
            ));
        }
        Ok(self.minor(drop_row, drop_col))
    }

    fn det(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MathError::runtime(format!(
                "Determinant needs a square matrix, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(self.laplace())
    }

    fn cofactor(&self) -> Result<MatrixGen<T>> {
        if !self.is_square() {
            return Err(MathError::runtime(format!(
                "Cofactor matrix needs a square matrix, got {}x{}",
                self.rows, self.cols
            )));
        }

        let n = self.rows;
        if n == 1 {
            return MatrixGen::identity(1);
        }

        Ok(MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|m| {
                    (0..n).map(move |k| {
                        let minor = self.minor(m, k);
                        // a 2x2 source leaves 1x1 minors
                        let value = if n == 2 {
                            minor.at(0, 0)
                        } else {
                            minor.laplace()
                        };
                        if (m + k) % 2 == 0 {
                            value
                        } else {
                            -value
                        }
                    })
                })
                .collect(),
        })
    }

    fn adjugate(&self) -> Result<MatrixGen<T>> {
        Ok(self.cofactor()?.transpose())
    }

    fn inverse(&self) -> Result<MatrixGen<T>> {
        let det = self.det()?;
        // exact comparison, no tolerance
        if det.is_zero() {
            log::debug!("Cannot invert a {}x{} matrix: determinant is zero", self.rows, self.cols);
            return Err(MathError::runtime("Matrix is singular: determinant is zero"));
        }

        log::debug!("Inverting a {}x{} matrix, determinant {}", self.rows, self.cols, det);
        Ok(self.adjugate()?.scale(&(T::one() / det)))
    }

    fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MathError::runtime(format!(
                "Trace needs a square matrix, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok((0..self.rows).map(|i| self.at(i, i)).sum())
    }
}

impl<T: GenElement> MatrixGen<T> {
    /// Starts a `rows`x`cols` builder, the only mutable phase of a matrix.
    pub fn builder(rows: usize, cols: usize) -> Result<MatrixBuilder<T>> {
        MatrixBuilder::new(rows, cols)
    }

    pub fn from_flat(rows: usize, cols: usize, flat: Vec<T>) -> Result<MatrixGen<T>> {
        let mut builder = MatrixBuilder::new(rows, cols)?;
        builder.populate(flat)?;
        builder.build()
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    // copy without `drop_row` and `drop_col`; needs at least 2 rows and cols
    fn minor(&self, drop_row: usize, drop_col: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: (0..self.rows)
                .filter(|&r| r != drop_row)
                .flat_map(|r| {
                    (0..self.cols)
                        .filter(move |&c| c != drop_col)
                        .map(move |c| self.at(r, c))
                })
                .collect(),
        }
    }

    // first row Laplace expansion of a square matrix
    fn laplace(&self) -> T {
        match self.rows {
            1 => self.at(0, 0),
            2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
            n => {
                log::trace!("Laplace expansion of a {n}x{n} matrix");
                (0..n).fold(T::zero(), |acc, j| {
                    let term = self.at(0, j) * self.minor(0, j).laplace();
                    if j % 2 == 0 {
                        acc + term
                    } else {
                        acc - term
                    }
                })
            }
        }
    }

    pub fn multiply_allow(&self, x: &Multiplier<'_, T>) -> bool {
        match x {
            Multiplier::Scalar(_) => true,
            Multiplier::Matrix(rhs) => self.cols == rhs.rows,
        }
    }

    /// Multiplies by a scalar, a complex number or a matrix.
    ///
    /// A matrix operand needs as many rows as `self` has columns, otherwise
    /// a `Runtime` error is returned.
    pub fn multiply<'a>(&self, x: impl Into<Multiplier<'a, T>>) -> Result<MatrixGen<T>>
    where
        T: 'a,
    {
        let x = x.into();
        if !self.multiply_allow(&x) {
            return Err(MathError::runtime(
                "Dimensions not compatible: right matrix must have as many rows as left has columns",
            ));
        }

        match x {
            Multiplier::Scalar(k) => Ok(self.scale(&k)),
            Multiplier::Matrix(rhs) => Ok(self.matmul(rhs)),
        }
    }

    pub fn scale(&self, k: &T) -> MatrixGen<T> {
        MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|x| x.clone() * k.clone()).collect(),
        }
    }

    // `self.cols == rhs.rows` is checked by the caller
    fn matmul(&self, rhs: &MatrixGen<T>) -> MatrixGen<T> {
        MatrixGen {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        }
    }

    pub fn add(&self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if !self.same_size(rhs) {
            return Err(MathError::runtime(format!(
                "Cannot add a {}x{} matrix to a {}x{} one",
                rhs.rows, rhs.cols, self.rows, self.cols
            )));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.to_owned() + b.to_owned())
                .collect(),
        })
    }
}

impl<T: GenElement> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn add(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        MatrixGen::add(self, rhs)
    }
}

impl<T: GenElement> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        self.multiply(rhs)
    }
}

impl<T: GenElement> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .cells
            .chunks(self.cols)
            .map(|line| line.iter().map(|x| x.to_string()).collect())
            .collect();
        write!(f, "{}", align_columns(&cells))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn m(rows: usize, cols: usize, flat: Vec<Element>) -> ElemMatrix {
        MatrixGen::from_flat(rows, cols, flat).unwrap()
    }

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> MatrixGen<f64> {
        let flat = (0..rows * cols)
            .map(|_| rng.gen_range(-9..=9) as f64)
            .collect();
        MatrixGen::from_flat(rows, cols, flat).unwrap()
    }

    #[test]
    fn test_get_and_copies() {
        let a = m(2, 3, elements![1, 2, 3, 4, 5, 6]);
        assert_eq!(a.get(1, 2).unwrap(), 6.0);
        assert!(matches!(a.get(2, 0), Err(MathError::InvalidArgument(_))));
        assert!(matches!(a.get(0, 3), Err(MathError::InvalidArgument(_))));
        assert_eq!(a.get_row(1).unwrap(), elements![4, 5, 6]);
        assert_eq!(a.get_col(2).unwrap(), elements![3, 6]);
        assert!(matches!(a.get_row(2), Err(MathError::OutOfRange(_))));
        assert!(matches!(a.get_col(3), Err(MathError::OutOfRange(_))));
        assert_eq!(a.to_list(), vec![elements![1, 2, 3], elements![4, 5, 6]]);

        assert!(matches!(
            ElemMatrix::from_list(vec![elements![1, 2], elements![3]]),
            Err(MathError::InvalidArgument(_))
        ));
        assert!(ElemMatrix::from_list(vec![]).is_err());
        assert!(ElemMatrix::from_flat(2, 2, elements![1, 2, 3]).is_err());
    }

    #[test]
    fn test_structural_queries() {
        let a = m(2, 3, elements![1, 2, 3, 4, 5, 6]);
        let b = m(2, 2, elements![1, 2, 3, 4]);
        assert!(!a.is_square());
        assert!(b.is_square());
        assert!(!a.same_size(&b));
        assert!(a.same_size(&a.clone()));
        assert!(m(2, 1, elements![1, 2]).is_vector());
        assert!(!b.is_vector());

        assert!(ElemMatrix::identity(3).unwrap().is_diagonal());
        assert!(!b.is_diagonal());
        assert!(m(2, 3, elements![1, 0, 0, 0, 5, 0]).is_diagonal());
        assert!(m(
            2,
            2,
            elements![Complex::new(1.0, 1.0), Complex::new(0.0, 0.0), 0, 2]
        )
        .is_diagonal());
        assert!(!m(2, 2, elements![1, Complex::new(0.0, 1.0), 0, 2]).is_diagonal());

        assert!(b.multiply_allow(&Multiplier::from(2.0)));
        assert!(b.multiply_allow(&Multiplier::from(Complex::new(1.0, 2.0))));
        assert!(b.multiply_allow(&Multiplier::from(&a)));
        assert!(!a.multiply_allow(&Multiplier::from(&b)));
    }

    #[test]
    fn test_transpose() {
        let a = m(2, 3, elements![1, 2, 3, 4, 5, 6]);
        let t = a.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.to_list(), vec![elements![1, 4], elements![2, 5], elements![3, 6]]);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_sub_matrix() {
        let a = m(2, 2, elements![1, 2, 3, 4]);
        assert_eq!(a.sub_matrix(0, 0).unwrap(), m(1, 1, elements![4]));
        assert_eq!(a.sub_matrix(0, 1).unwrap(), m(1, 1, elements![3]));
        assert_eq!(a.sub_matrix(1, 0).unwrap(), m(1, 1, elements![2]));
        assert_eq!(a.sub_matrix(1, 1).unwrap(), m(1, 1, elements![1]));

        let a = m(3, 3, elements![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(a.sub_matrix(1, 1).unwrap(), m(2, 2, elements![1, 3, 7, 9]));
        assert_eq!(a.sub_matrix(0, 0).unwrap(), m(2, 2, elements![5, 6, 8, 9]));
        assert_eq!(a.sub_matrix(2, 2).unwrap(), m(2, 2, elements![1, 2, 4, 5]));

        let a = m(2, 3, elements![1, 2, 3, 4, 5, 6]);
        assert_eq!(a.sub_matrix(0, 1).unwrap(), m(1, 2, elements![4, 6]));
        assert!(matches!(a.sub_matrix(2, 0), Err(MathError::OutOfRange(_))));
        assert!(matches!(
            m(1, 2, elements![1, 2]).sub_matrix(0, 0),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_det() {
        init_logger();
        assert_eq!(m(2, 2, elements![1, 2, 3, 4]).det().unwrap(), -2.0);
        assert_eq!(
            m(3, 3, elements![0, 2, 3, 4, 5, 6, 0, 8, 9]).det().unwrap(),
            24.0
        );
        assert_eq!(
            m(
                4,
                4,
                elements![-1, 0, 2, 3, 4, 5, -6, 0, 8, -4, 9, -3, 0, 3, -1, 0]
            )
            .det()
            .unwrap(),
            621.0
        );
        assert_eq!(m(1, 1, elements![7]).det().unwrap(), 7.0);

        assert!(matches!(
            m(2, 3, elements![1, 2, 3, 4, 5, 6]).det(),
            Err(MathError::Runtime(_))
        ));
    }

    #[test]
    fn test_det_complex() {
        // (1+i)(1-i) - 2*1 = 0
        let a = m(
            2,
            2,
            elements![Complex::new(1.0, 1.0), 2, 1, Complex::new(1.0, -1.0)],
        );
        assert!(a.det().unwrap().is_zero());
        assert!(matches!(a.inverse(), Err(MathError::Runtime(_))));

        let a = m(2, 2, elements![Complex::new(0.0, 1.0), 0, 0, Complex::new(0.0, 1.0)]);
        assert_eq!(a.det().unwrap(), Element::from(-1));

        // i * 2 * (1+i) = -2+2i
        let a = m(
            3,
            3,
            elements![Complex::new(0.0, 1.0), 1, 2, 0, 2, 3, 0, 0, Complex::new(1.0, 1.0)],
        );
        assert_eq!(a.det().unwrap(), Element::from(Complex::new(-2.0, 2.0)));
        assert_eq!(a.transpose().det().unwrap(), a.det().unwrap());
    }

    #[test]
    fn test_builder_from_matrix_type() {
        let mut b = ElemMatrix::builder(2, 2).unwrap();
        b.add_row(elements![1, 2]).unwrap();
        b.add_row(elements![3, 4]).unwrap();
        assert_eq!(b.build().unwrap(), m(2, 2, elements![1, 2, 3, 4]));
        assert!(matches!(
            ElemMatrix::builder(0, 2),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cofactor_and_adjugate() {
        let a = m(2, 2, elements![2, 3, 4, 5]);
        assert_eq!(a.cofactor().unwrap(), m(2, 2, elements![5, -4, -3, 2]));
        assert_eq!(a.adjugate().unwrap(), m(2, 2, elements![5, -3, -4, 2]));

        let a = m(3, 3, elements![1, 2, 3, 0, 4, 5, 1, 0, 6]);
        assert_eq!(
            a.cofactor().unwrap(),
            m(3, 3, elements![24, 5, -4, -12, 3, 2, -2, -5, 4])
        );
        assert_eq!(m(1, 1, elements![5]).cofactor().unwrap(), m(1, 1, elements![1]));
        assert!(matches!(
            m(1, 2, elements![1, 2]).cofactor(),
            Err(MathError::Runtime(_))
        ));
    }

    #[test]
    fn test_inverse() {
        init_logger();
        let i = m(2, 2, elements![2, 3, 4, 5]).inverse().unwrap();
        assert_eq!(i.get_row(0).unwrap(), elements![-2.5, 1.5]);
        assert_eq!(i.get_row(1).unwrap(), elements![2, -1]);

        let i = m(3, 3, elements![-1, 2, 5, 1, 2, 3, -2, 8, 10])
            .inverse()
            .unwrap();
        assert_eq!(i.get_row(0).unwrap(), elements![-1.0 / 8.0, 5.0 / 8.0, -1.0 / 8.0]);
        assert_eq!(i.get_row(1).unwrap(), elements![-0.5, 0, 0.25]);
        assert_eq!(i.get_row(2).unwrap(), elements![3.0 / 8.0, 1.0 / 8.0, -1.0 / 8.0]);

        let i = m(3, 3, elements![-3, 5, 6, -1, 2, 2, 1, -1, -1])
            .inverse()
            .unwrap();
        assert_eq!(i.get_row(0).unwrap(), elements![0, 1, 2]);
        assert_eq!(i.get_row(1).unwrap(), elements![-1, 3, 0]);
        assert_eq!(i.get_row(2).unwrap(), elements![1, -2, 1]);

        assert_eq!(m(1, 1, elements![4]).inverse().unwrap(), m(1, 1, elements![0.25]));
    }

    #[test]
    fn test_inverse_singular() {
        assert!(matches!(
            m(2, 2, elements![2, 0, 4, 0]).inverse(),
            Err(MathError::Runtime(_))
        ));
        assert!(matches!(
            m(2, 3, elements![1, 2, 3, 4, 5, 6]).inverse(),
            Err(MathError::Runtime(_))
        ));
    }

    #[test]
    fn test_inverse_rational_is_exact() {
        let q = |v: i64| Rational::from(v);
        let a = MatrixGen::from_flat(
            3,
            3,
            vec![q(2), q(-1), q(0), q(-1), q(2), q(-1), q(0), q(-1), q(2)],
        )
        .unwrap();
        let inv = a.inverse().unwrap();
        assert_eq!(inv.at(0, 0), Rational::new(3, 4).unwrap());
        assert_eq!(inv.to_string(), "3/4  1/2  1/4\n1/2    1  1/2\n1/4  1/2  3/4");
        assert_eq!(a.multiply(&inv).unwrap(), MatrixGen::identity(3).unwrap());
    }

    #[test]
    fn test_trace() {
        let a = m(3, 3, elements![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(a.trace().unwrap(), 15.0);
        let z = m(2, 2, elements![Complex::new(1.0, 2.0), 0, 0, 3]);
        assert_eq!(z.trace().unwrap(), Element::from(Complex::new(4.0, 2.0)));
        assert!(matches!(
            m(1, 2, elements![1, 2]).trace(),
            Err(MathError::Runtime(_))
        ));
    }

    #[test]
    fn test_add_real_matrix_with_partly_complex_matrix() {
        let a = m(2, 2, elements![1, 2, 3, 4]);
        let z = m(2, 2, elements![1, Complex::new(2.0, 1.0), 3, 4]);
        let r = m(2, 2, elements![2, Complex::new(4.0, 1.0), 6, 8]);

        assert_eq!(a.add(&z).unwrap(), r);
        assert_eq!(z.add(&a).unwrap(), r);
        assert_eq!((&a + &z).unwrap(), r);
        assert!(a.add(&z).unwrap().at(0, 1).is_complex());
        assert!(!a.add(&z).unwrap().at(0, 0).is_complex());

        assert!(matches!(
            a.add(&m(1, 2, elements![1, 2])),
            Err(MathError::Runtime(_))
        ));
    }

    #[test]
    fn test_multiply_matrix_with_scalar_or_complex_number() {
        let a = m(2, 2, elements![1, 2, 3, 4]);
        assert_eq!(a.multiply(2).unwrap(), m(2, 2, elements![2, 4, 6, 8]));
        assert_eq!(a.multiply(0.5).unwrap(), m(2, 2, elements![0.5, 1, 1.5, 2]));

        let z = Complex::new(1.0, 2.0);
        let r = m(2, 2, elements![z * 1.0, z * 2.0, z * 3.0, z * 4.0]);
        let product = a.multiply(z).unwrap();
        assert_eq!(product, r);
        assert!(product.cells().iter().all(|x| x.is_complex()));
    }

    #[test]
    fn test_multiply_real_matrix_with_real_matrix() {
        let a = m(2, 2, elements![1, 2, 3, 4]);
        let b = m(2, 2, elements![5, 6, 7, 8]);
        assert_eq!(a.multiply(&b).unwrap(), m(2, 2, elements![19, 22, 43, 50]));
        assert_eq!(b.multiply(&a).unwrap(), m(2, 2, elements![23, 34, 31, 46]));
        assert_eq!((&a * &b).unwrap(), m(2, 2, elements![19, 22, 43, 50]));

        let b = m(2, 3, elements![5, 6, 7, 8, 9, 10]);
        assert_eq!(
            a.multiply(&b).unwrap(),
            m(2, 3, elements![21, 24, 27, 47, 54, 61])
        );

        let b = m(2, 1, elements![5, 6]);
        assert_eq!(a.multiply(&b).unwrap(), m(2, 1, elements![17, 39]));

        assert!(matches!(b.multiply(&a), Err(MathError::Runtime(_))));
    }

    #[test]
    fn test_multiply_real_matrix_with_complex_matrix() {
        let a = m(2, 2, elements![1, 3, 2, 4]);
        let z = Complex::new(1.0, 2.0);
        let b = m(2, 2, elements![z * 1.0, z * 3.0, z * 2.0, z * 4.0]);
        let expected = m(
            2,
            2,
            elements![
                Complex::new(7.0, 14.0),
                Complex::new(15.0, 30.0),
                Complex::new(10.0, 20.0),
                Complex::new(22.0, 44.0)
            ],
        );
        let product = a.multiply(&b).unwrap();
        assert_eq!(product, expected);
        assert!(product.cells().iter().all(|x| x.is_complex()));

        // a single complex factor makes the whole cell complex
        let c = m(2, 1, elements![Complex::new(1.0, 0.0), 1]);
        let product = a.multiply(&c).unwrap();
        assert!(product.cells().iter().all(|x| x.is_complex()));
        assert_eq!(product, m(2, 1, elements![4, 6]));
    }

    #[test]
    fn test_to_string() {
        assert_eq!(m(2, 3, elements![1, 2, 3, 4, 5, 6]).to_string(), "1  2  3\n4  5  6");
        assert_eq!(
            m(2, 3, elements![1, 20, 3, 4, 5, 60]).to_string(),
            "1  20   3\n4   5  60"
        );
        assert_eq!(
            m(2, 3, elements![1, Complex::new(2.0, 1.0), 3, 4, 5, 60]).to_string(),
            "1  2+i   3\n4    5  60"
        );
        assert_eq!(
            m(2, 2, elements![2, 3, 4, 5]).inverse().unwrap().to_string(),
            "-2.5  1.5\n   2   -1"
        );
    }

    #[test]
    fn test_transpose_is_involution() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in 1..5 {
            let a = random_matrix(&mut rng, n, n + 1);
            assert_eq!(a.transpose().transpose(), a);
        }
    }

    #[test]
    fn test_product_transpose() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let (r, k, c) = (
                rng.gen_range(1..5),
                rng.gen_range(1..5),
                rng.gen_range(1..5),
            );
            let a = random_matrix(&mut rng, r, k);
            let b = random_matrix(&mut rng, k, c);
            assert_eq!(
                a.multiply(&b).unwrap().transpose(),
                b.transpose().multiply(&a.transpose()).unwrap()
            );
        }
    }

    #[test]
    fn test_det_invariant_under_transpose() {
        let mut rng = StdRng::seed_from_u64(2);
        for n in 1..6 {
            let a = random_matrix(&mut rng, n, n);
            assert_eq!(a.det().unwrap(), a.transpose().det().unwrap());
        }
    }

    #[test]
    fn test_trace_is_additive() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in 1..6 {
            let a = random_matrix(&mut rng, n, n);
            let b = random_matrix(&mut rng, n, n);
            assert_eq!(
                a.add(&b).unwrap().trace().unwrap(),
                a.trace().unwrap() + b.trace().unwrap()
            );
        }
    }

    #[test]
    fn test_inverse_float_gives_identity() {
        let a = m(2, 2, elements![2, 3, 4, 5]);
        let inv = a.inverse().unwrap();
        assert_eq!(inv, m(2, 2, elements![-2.5, 1.5, 2, -1]));
        assert_eq!(a.multiply(&inv).unwrap(), ElemMatrix::identity(2).unwrap());
        assert_eq!(inv.multiply(&a).unwrap(), ElemMatrix::identity(2).unwrap());
    }

    #[test]
    fn test_inverse_gives_identity() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut checked = 0;
        while checked < 10 {
            let n = rng.gen_range(1..5);
            let flat = (0..n * n)
                .map(|_| Rational::from(rng.gen_range(-6..=6)))
                .collect();
            let a = MatrixGen::from_flat(n, n, flat).unwrap();
            if a.det().unwrap().is_zero() {
                assert!(matches!(a.inverse(), Err(MathError::Runtime(_))));
                continue;
            }
            let inv = a.inverse().unwrap();
            assert_eq!(a.multiply(&inv).unwrap(), MatrixGen::identity(n).unwrap());
            assert_eq!(inv.multiply(&a).unwrap(), MatrixGen::identity(n).unwrap());
            checked += 1;
        }
    }
}
