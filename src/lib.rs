#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod builder;
    pub mod matrix;
    pub mod matrix_gen;
}
pub mod numbers {
    pub mod complex;
    pub mod element;
    pub mod rational;
}

pub mod error;
pub mod utils;

pub mod factorial;
pub mod random_complex;

#[cfg(feature = "python")]
pub mod python;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_math(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
