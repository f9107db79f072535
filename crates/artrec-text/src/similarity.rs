//! Dense pairwise cosine similarity between document vectors.

use crate::tfidf::SparseVector;

/// Symmetric `n × n` matrix of cosine similarities, stored row-major.
///
/// Row and column order match the order of the vectors it was built from.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairwise similarities of L2-normalized vectors.
    ///
    /// Only the upper triangle is computed and mirrored. The diagonal is 1
    /// for non-empty vectors and 0 for empty ones.
    #[must_use]
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let size = vectors.len();
        let mut values = vec![0.0; size * size];

        for i in 0..size {
            for j in i..size {
                let similarity = vectors[i].dot(&vectors[j]);
                values[i * size + j] = similarity;
                values[j * size + i] = similarity;
            }
        }

        tracing::debug!(size, "built similarity matrix");
        Self { size, values }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between documents `i` and `j`; `None` when out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.size && j < self.size).then(|| self.values[i * self.size + j])
    }

    /// All similarities of document `i` to every document.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.size).then(|| &self.values[i * self.size..(i + 1) * self.size])
    }
}
