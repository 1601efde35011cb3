use lazy_static::lazy_static;
use crate::error::{FilterError, FilterResult};

/// A square convolution kernel with its normalization parameters.
///
/// `factor` multiplies the weighted neighborhood sum and `bias` is added
/// afterwards, before the result is clamped into channel range.
#[derive(Debug, Clone)]
pub struct Kernel {
    matrix: Vec<Vec<f64>>,
    bias: f64,
    factor: f64,
}

impl Kernel {
    /// Build a kernel, rejecting shapes the engine cannot center on a
    /// pixel: the matrix must be non-empty, square and of odd side length.
    pub fn new(matrix: Vec<Vec<f64>>, bias: f64, factor: f64) -> FilterResult<Kernel> {
        let rows = matrix.len();
        if rows == 0 {
            return Err(FilterError::EmptyKernel);
        }
        if let Some((row, len)) = matrix.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != rows)
        {
            return Err(FilterError::NotSquare { row, len, rows });
        }
        if rows % 2 == 0 {
            return Err(FilterError::EvenStride(rows));
        }
        Ok(Kernel { matrix, bias, factor })
    }

    /// Side length of the matrix.
    pub fn stride(&self) -> usize {
        self.matrix.len()
    }

    /// Index of the center cell along either axis.
    pub fn center(&self) -> usize {
        self.stride() / 2
    }

    /// Weight at column `fx` of row `fy`.
    pub fn weight(&self, fx: usize, fy: usize) -> f64 {
        self.matrix[fy][fx]
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

/// A named filter definition in the catalog.
pub struct CatalogEntry {
    pub name: &'static str,
    pub kernel: Kernel,
}

fn entry(name: &'static str, matrix: Vec<Vec<f64>>, bias: f64, factor: f64) -> CatalogEntry {
    CatalogEntry {
        name,
        kernel: Kernel::new(matrix, bias, factor)
            .expect("catalog matrices are square with odd stride"),
    }
}

lazy_static! {
    /// The built-in filters, in the order the batch run applies them.
    pub static ref CATALOG: Vec<CatalogEntry> = vec![
        entry("identity", vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ], 0.0, 1.0),

        entry("edge_diagonal", vec![
            vec![1.0, 0.0, -1.0],
            vec![0.0, 0.0, 0.0],
            vec![-1.0, 0.0, 1.0],
        ], 0.0, 1.0),

        entry("edge_laplacian", vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, -4.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ], 0.0, 1.0),

        entry("edge_outline", vec![
            vec![-1.0, -1.0, -1.0],
            vec![-1.0, 8.0, -1.0],
            vec![-1.0, -1.0, -1.0],
        ], 0.0, 1.0),

        entry("edge_diag_5x5", vec![
            vec![-1.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, -2.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 6.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, -2.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, -1.0],
        ], 0.0, 1.0),

        entry("emboss", vec![
            vec![-1.0, -1.0, 0.0],
            vec![-1.0, 0.0, 1.0],
            vec![0.0, 1.0, 1.0],
        ], 50.0, 1.0),

        entry("emboss_5x5", vec![
            vec![-1.0, -1.0, -1.0, -1.0, 0.0],
            vec![-1.0, -1.0, -1.0, 0.0, 1.0],
            vec![-1.0, -1.0, 0.0, 1.0, 1.0],
            vec![-1.0, 0.0, 1.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0, 1.0, 1.0],
        ], 0.0, 1.0),

        entry("blur_gaussian", vec![
            vec![0.0625, 0.125, 0.0625],
            vec![0.125, 0.25, 0.125],
            vec![0.0625, 0.125, 0.0625],
        ], 8.0, 1.0),

        entry("blur_disc", vec![
            vec![0.0, 0.0, 1.0, 0.0, 0.0],
            vec![0.0, 1.0, 1.0, 1.0, 0.0],
            vec![1.0, 1.0, 1.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0],
        ], 0.0, 1.0 / 16.0),

        entry("edge_horizontal", vec![
            vec![-1.0, -1.0, -1.0],
            vec![0.0, 0.0, 0.0],
            vec![1.0, 1.0, 1.0],
        ], 100.0, 1.0),

        entry("edge_excess", vec![
            vec![1.0, 1.0, 1.0],
            vec![1.0, -7.0, 1.0],
            vec![1.0, 1.0, 1.0],
        ], 1.0, 1.0),

        entry("sharpen", vec![
            vec![-1.0, -1.0, -1.0, -1.0, -1.0],
            vec![-1.0, 2.0, 2.0, 2.0, -1.0],
            vec![-1.0, 2.0, 8.0, 2.0, -1.0],
            vec![-1.0, 2.0, 2.0, 2.0, -1.0],
            vec![-1.0, -1.0, -1.0, -1.0, -1.0],
        ], 1.0, 1.0 / 4.0),
    ];
}

/// Look a catalog entry up by name.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter()
        .find(|entry| entry.name == name)
}
