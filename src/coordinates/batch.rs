//! Batches of 3-vectors
//!
//! A [`VectorBatch`] is an `N x 3` array of `f64` rows. Every public
//! transform accepts anything implementing [`IntoBatch`], which is where a
//! single 3-vector gets promoted to a one-row batch. Inputs whose trailing
//! dimension is not 3 are rejected with [`FigaroError::ShapeError`].

use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Data, Ix1, Ix2};

use super::cartesian::Cartesian3;
use super::celestial::Celestial;
use crate::{FigaroError, Result};

const BATCH_SHAPE: &str = "N x 3 array";
const ROW_SHAPE: &str = "3-vector";

/// An `N x 3` batch of vectors
///
/// Rows carry no frame tag: the same batch type holds Cartesian
/// `[x, y, z]`, spherical `[r, theta, phi]` or celestial `[ra, dec, D]`
/// rows depending on which transform produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorBatch {
    data: Array2<f64>,
}

impl VectorBatch {
    /// Wraps an existing array, checking that it has three columns
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.ncols() != 3 {
            return Err(FigaroError::ShapeError {
                expected: BATCH_SHAPE,
                found: data.shape().to_vec(),
            });
        }
        Ok(VectorBatch { data })
    }

    /// Builds a batch from rows, preserving their order
    ///
    /// ```rust
    /// use figaro::VectorBatch;
    ///
    /// let batch = VectorBatch::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(batch.len(), 2);
    /// assert_eq!(batch.row(1), [4.0, 5.0, 6.0]);
    /// ```
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let rows: Vec<[f64; 3]> = rows.into_iter().collect();
        let data = Array2::from_shape_fn((rows.len(), 3), |(i, j)| rows[i][j]);
        VectorBatch { data }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Returns row `index` as an array
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn row(&self, index: usize) -> [f64; 3] {
        let row = self.data.row(index);
        [row[0], row[1], row[2]]
    }

    /// Iterates over the rows in order
    pub fn rows(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.data.outer_iter().map(|row| [row[0], row[1], row[2]])
    }

    /// View of a single column
    pub fn column(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.column(index)
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Applies `f` to every row independently
    pub fn map_rows<F>(&self, f: F) -> VectorBatch
    where
        F: Fn([f64; 3]) -> [f64; 3],
    {
        VectorBatch::from_rows(self.rows().map(f))
    }

    /// Reduces every row to a scalar
    pub fn map_rows_to_scalar<F>(&self, f: F) -> Array1<f64>
    where
        F: Fn([f64; 3]) -> f64,
    {
        self.rows().map(f).collect()
    }

    /// Reads every row as `[x, y, z]`
    pub fn to_cartesian(&self) -> Vec<Cartesian3> {
        self.rows().map(Cartesian3::from).collect()
    }

    /// Reads every row as `[ra, dec, D]`
    pub fn to_celestial(&self) -> Vec<Celestial> {
        self.rows().map(Celestial::from).collect()
    }
}

impl From<VectorBatch> for Array2<f64> {
    fn from(batch: VectorBatch) -> Self {
        batch.data
    }
}

impl std::ops::Index<(usize, usize)> for VectorBatch {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[index]
    }
}

/// Conversion into a [`VectorBatch`]
///
/// One-dimensional inputs are promoted to a one-row batch.
pub trait IntoBatch {
    fn into_batch(self) -> Result<VectorBatch>;
}

fn promote_row<S>(row: &ArrayBase<S, Ix1>) -> Result<VectorBatch>
where
    S: Data<Elem = f64>,
{
    if row.len() != 3 {
        return Err(FigaroError::ShapeError {
            expected: ROW_SHAPE,
            found: vec![row.len()],
        });
    }
    Ok(VectorBatch::from_rows([[row[0], row[1], row[2]]]))
}

impl IntoBatch for VectorBatch {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(self)
    }
}

impl IntoBatch for &VectorBatch {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(self.clone())
    }
}

impl<S> IntoBatch for ArrayBase<S, Ix2>
where
    S: Data<Elem = f64>,
{
    fn into_batch(self) -> Result<VectorBatch> {
        VectorBatch::from_array(self.into_owned())
    }
}

impl<S> IntoBatch for &ArrayBase<S, Ix2>
where
    S: Data<Elem = f64>,
{
    fn into_batch(self) -> Result<VectorBatch> {
        VectorBatch::from_array(self.to_owned())
    }
}

impl<S> IntoBatch for ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    fn into_batch(self) -> Result<VectorBatch> {
        promote_row(&self)
    }
}

impl<S> IntoBatch for &ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    fn into_batch(self) -> Result<VectorBatch> {
        promote_row(self)
    }
}

impl IntoBatch for [f64; 3] {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(VectorBatch::from_rows([self]))
    }
}

impl<const N: usize> IntoBatch for [[f64; 3]; N] {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(VectorBatch::from_rows(self))
    }
}

impl IntoBatch for &[[f64; 3]] {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(VectorBatch::from_rows(self.iter().copied()))
    }
}

impl IntoBatch for Vec<[f64; 3]> {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(VectorBatch::from_rows(self))
    }
}

impl IntoBatch for Cartesian3 {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(VectorBatch::from_rows([self.to_array()]))
    }
}

impl IntoBatch for &[Cartesian3] {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(VectorBatch::from_rows(self.iter().map(Cartesian3::to_array)))
    }
}

impl IntoBatch for Celestial {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(VectorBatch::from_rows([self.to_array()]))
    }
}

impl IntoBatch for &[Celestial] {
    fn into_batch(self) -> Result<VectorBatch> {
        Ok(VectorBatch::from_rows(self.iter().map(Celestial::to_array)))
    }
}
