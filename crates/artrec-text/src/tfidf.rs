//! TF-IDF weighting over tokenized documents.
//!
//! Term frequency is the raw count. Inverse document frequency is smoothed:
//! `idf(t) = ln((1 + n_docs) / (1 + df(t))) + 1`, so a term present in every
//! document still carries weight 1. Each document vector is L2-normalized,
//! which makes cosine similarity a plain dot product.

use std::collections::{BTreeMap, HashMap};

/// L2-normalized sparse vector, entries sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(index, weight)` pairs, normalizing to unit length.
    /// Zero weights are dropped; an all-zero input gives the empty vector.
    #[must_use]
    pub fn normalized(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|(_, weight)| *weight != 0.0);
        entries.sort_unstable_by_key(|(index, _)| *index);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= norm;
            }
        }
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product by merging the two sorted entry lists.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_index, a_weight) = self.entries[i];
            let (b_index, b_weight) = other.entries[j];
            match a_index.cmp(&b_index) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary and idf weights fitted on a document collection.
#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    /// term -> column index, assigned in lexicographic term order
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fit vocabulary and idf weights on tokenized documents.
    #[must_use]
    pub fn fit<D: AsRef<[String]>>(documents: &[D]) -> Self {
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for document in documents {
            let mut distinct: Vec<&str> = document.as_ref().iter().map(String::as_str).collect();
            distinct.sort_unstable();
            distinct.dedup();
            for term in distinct {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let n_docs = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), index);
            #[allow(clippy::cast_precision_loss)]
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
        }

        tracing::debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "fitted tf-idf model"
        );

        Self { vocabulary, idf }
    }

    /// Vectorize one tokenized document. Terms outside the vocabulary are ignored.
    #[must_use]
    pub fn transform(&self, tokens: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(index) = self.vocabulary.get(token) {
                *counts.entry(*index).or_default() += 1.0;
            }
        }
        SparseVector::normalized(
            counts
                .into_iter()
                .map(|(index, tf)| (index, tf * self.idf[index]))
                .collect(),
        )
    }

    /// Fit on `documents` and vectorize each of them.
    #[must_use]
    pub fn fit_transform<D: AsRef<[String]>>(documents: &[D]) -> (Self, Vec<SparseVector>) {
        let model = Self::fit(documents);
        let vectors = documents
            .iter()
            .map(|document| model.transform(document.as_ref()))
            .collect();
        (model, vectors)
    }

    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Idf weight of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|index| self.idf[*index])
    }
}
