use itertools::Itertools;

/// Builds a `Vec<Element>` from anything convertible into an element.
///
///     use rust_math::elements;
///     use rust_math::numbers::complex::Complex;
///
///     let row = elements![1, Complex::new(2.0, 1.0), 3.5];
///     assert_eq!(row.len(), 3);
#[macro_export]
macro_rules! elements {
    ($($x:expr),* $(,)?) => {
        vec![$($crate::numbers::element::Element::from($x)),*]
    };
}

// split a row-major buffer into rows of `cols` cells
pub fn chunk_rows<T: Clone>(cells: &[T], cols: usize) -> Vec<Vec<T>> {
    cells.chunks(cols).map(|row| row.to_vec()).collect()
}

/// Renders a grid of already formatted cells: every column is right aligned
/// to its widest cell and columns are separated by two spaces.
pub fn align_columns(cells: &[Vec<String>]) -> String {
    let cols = cells.iter().map(|row| row.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..cols)
        .map(|c| {
            cells
                .iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(widths.iter())
                .map(|(cell, width)| pad_left(cell, *width))
                .join("  ")
        })
        .join("\n")
}

pub fn pad_left(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - len), s)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
