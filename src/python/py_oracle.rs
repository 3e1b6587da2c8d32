//! Oracle bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::nn::{EncodedState, MoveOracle, OracleError};

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    #[getter]
    fn tensor(&self) -> Vec<f32> {
        self.0.tensor.clone()
    }

    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Convert tensor to numpy array (flat).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?}, len={})", self.0.shape, self.0.len())
    }
}

/// Python-implemented oracle.
///
/// The callable receives a float32 numpy array of length 100 and must return
/// a sequence of two floats.
#[pyclass(name = "Oracle")]
pub struct PyOracle {
    callback: PyObject,
}

#[pymethods]
impl PyOracle {
    #[new]
    fn new(callback: PyObject) -> Self {
        Self { callback }
    }

    /// Call the oracle directly on a Python-side encoding.
    fn predict(&self, py: Python<'_>, encoded: &PyEncodedState) -> PyResult<Vec<f32>> {
        let array = PyArray1::from_slice_bound(py, &encoded.0.tensor);
        self.callback.call1(py, (array,))?.extract(py)
    }
}

impl PyOracle {
    pub fn from_callable(callback: PyObject) -> Self {
        Self { callback }
    }
}

impl MoveOracle for PyOracle {
    fn predict(&self, encoded: &EncodedState) -> Result<Vec<f32>, OracleError> {
        Python::with_gil(|py| {
            let array = PyArray1::from_slice_bound(py, &encoded.tensor);
            let result = self
                .callback
                .call1(py, (array,))
                .map_err(|e| OracleError::Failed(e.to_string()))?;
            result
                .extract::<Vec<f32>>(py)
                .map_err(|e| OracleError::Failed(e.to_string()))
        })
    }
}

// SAFETY: every access to `callback` goes through `Python::with_gil()` or a
// `Python<'_>` token, and PyObject reference counting is GIL-protected.
//
// INVARIANT: any new method touching self.callback MUST hold the GIL.
unsafe impl Send for PyOracle {}
unsafe impl Sync for PyOracle {}
