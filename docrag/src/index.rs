//! Flat (exhaustive) vector index over squared Euclidean distance.

use crate::error::{Result, RetrievalError};

/// An exhaustive nearest-neighbor index over embedding vectors.
///
/// Vectors are stored slot-major in one flat buffer; slot `i` is the
/// `i`-th vector passed to [`build`](FlatIndex::build). Search scans
/// every stored vector — no approximation, no pruning — which is
/// correct by construction and fast enough at single-document corpus
/// scale. The index is immutable once built; rebuilding means
/// constructing a new `FlatIndex` and swapping it in.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    data: Vec<f32>,
    dimensions: usize,
}

impl FlatIndex {
    /// Build an index from an ordered set of embedding vectors.
    ///
    /// # Errors
    ///
    /// - [`RetrievalError::EmptyIndex`] if `vectors` is empty.
    /// - [`RetrievalError::DimensionMismatch`] if the vectors do not
    ///   all share the dimensionality of the first one.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimensions = vectors.first().ok_or(RetrievalError::EmptyIndex)?.len();

        let mut data = Vec::with_capacity(vectors.len() * dimensions);
        for vector in &vectors {
            if vector.len() != dimensions {
                return Err(RetrievalError::DimensionMismatch {
                    expected: dimensions,
                    actual: vector.len(),
                });
            }
            data.extend_from_slice(vector);
        }

        Ok(Self { data, dimensions })
    }

    /// Number of vectors stored in the index.
    pub fn len(&self) -> usize {
        if self.dimensions == 0 { 0 } else { self.data.len() / self.dimensions }
    }

    /// Whether the index holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of the stored vectors.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Return the `min(k, len)` nearest slots to `query` as
    /// `(slot, squared_distance)` pairs, ordered by ascending distance
    /// with ties broken by ascending slot.
    ///
    /// # Errors
    ///
    /// - [`RetrievalError::EmptyIndex`] if the index holds no vectors.
    /// - [`RetrievalError::DimensionMismatch`] if `query` has a
    ///   different dimensionality than the stored vectors.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if self.is_empty() {
            return Err(RetrievalError::EmptyIndex);
        }
        if query.len() != self.dimensions {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let mut hits: Vec<(usize, f32)> = self
            .data
            .chunks_exact(self.dimensions)
            .enumerate()
            .map(|(slot, vector)| (slot, squared_euclidean(query, vector)))
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        hits.truncate(k);
        Ok(hits)
    }
}

/// Squared Euclidean distance between two vectors of equal length.
fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}
