use pyo3::prelude::*;
use pyo3::types::{PyComplex, PyComplexMethods, PyFloat};

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{ElemMatrix, MatrixGen};
use crate::numbers::complex::Complex;
use crate::numbers::element::Element;

/// Python view of a mixed real/complex matrix.
#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    inner: ElemMatrix,
}

fn element_from_py(value: &Bound<'_, PyAny>) -> PyResult<Element> {
    if let Ok(z) = value.downcast::<PyComplex>() {
        return Ok(Element::from(Complex::new(z.real(), z.imag())));
    }
    Ok(Element::from(value.extract::<f64>()?))
}

fn element_to_py(py: Python<'_>, value: Element) -> PyObject {
    match value {
        Element::Real(x) => PyFloat::new(py, x).into_any().unbind(),
        Element::Complex(z) => PyComplex::from_doubles(py, z.re(), z.im())
            .into_any()
            .unbind(),
    }
}

fn elements_to_py(py: Python<'_>, values: Vec<Element>) -> Vec<PyObject> {
    values.into_iter().map(|x| element_to_py(py, x)).collect()
}

impl From<ElemMatrix> for PyMatrix {
    fn from(inner: ElemMatrix) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn py_new(py: Python<'_>, rows: usize, cols: usize, values: Vec<PyObject>) -> PyResult<Self> {
        let flat = values
            .iter()
            .map(|value| element_from_py(value.bind(py)))
            .collect::<PyResult<Vec<Element>>>()?;
        Ok(MatrixGen::from_flat(rows, cols, flat)?.into())
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn get(&self, py: Python<'_>, row: usize, col: usize) -> PyResult<PyObject> {
        Ok(element_to_py(py, self.inner.get(row, col)?))
    }

    pub fn get_row(&self, py: Python<'_>, row: usize) -> PyResult<Vec<PyObject>> {
        Ok(elements_to_py(py, self.inner.get_row(row)?))
    }

    pub fn get_col(&self, py: Python<'_>, col: usize) -> PyResult<Vec<PyObject>> {
        Ok(elements_to_py(py, self.inner.get_col(col)?))
    }

    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    pub fn is_diagonal(&self) -> bool {
        self.inner.is_diagonal()
    }

    pub fn sub_matrix(&self, drop_row: usize, drop_col: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.sub_matrix(drop_row, drop_col)?.into())
    }

    pub fn det(&self, py: Python<'_>) -> PyResult<PyObject> {
        Ok(element_to_py(py, self.inner.det()?))
    }

    pub fn trace(&self, py: Python<'_>) -> PyResult<PyObject> {
        Ok(element_to_py(py, self.inner.trace()?))
    }

    pub fn cofactor(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.cofactor()?.into())
    }

    pub fn adjugate(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.adjugate()?.into())
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.add(&rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &Bound<'_, PyAny>) -> PyResult<PyMatrix> {
        if let Ok(matrix) = rhs.downcast::<PyMatrix>() {
            return Ok(self.inner.multiply(&matrix.get().inner)?.into());
        }
        Ok(self.inner.multiply(element_from_py(rhs)?)?.into())
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({}x{})", self.inner.rows(), self.inner.cols())
    }
}
