use crate::{extract_authors, link_authors_with_options, LinkOptions, LinkStyle};
use pyo3::prelude::*;

fn value_error(msg: impl ToString) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(msg.to_string())
}

#[pyfunction]
#[pyo3(signature = (text, style=None, delimiter=None))]
fn link_authors(text: &str, style: Option<&str>, delimiter: Option<&str>) -> PyResult<String> {
    let mut options = LinkOptions::default();

    if let Some(name) = style {
        options.style = name.parse::<LinkStyle>().map_err(value_error)?;
    }
    if let Some(delimiter) = delimiter {
        options.delimiter = delimiter.to_string();
    }

    Ok(link_authors_with_options(text, &options))
}

#[pyfunction]
#[pyo3(name = "extract_authors")]
fn extract_authors_py(text: &str) -> Vec<String> {
    extract_authors(text, &LinkOptions::default()).into_names()
}

#[pymodule]
fn _authorlink(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(link_authors, m)?)?;
    m.add_function(wrap_pyfunction!(extract_authors_py, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
