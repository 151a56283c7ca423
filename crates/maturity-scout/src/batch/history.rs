//! In-process accumulator of every result produced during a session.

use crate::model::AnalysisResult;

/// Results in the order they were produced. Lives only as long as its owner;
/// nothing is persisted unless exported.
#[derive(Debug, Default, Clone)]
pub struct ResultHistory {
    results: Vec<AnalysisResult>,
}

impl ResultHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: AnalysisResult) {
        self.results.push(result);
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnalysisResult> {
        self.results.iter()
    }

    pub fn as_slice(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<AnalysisResult> {
        self.results
    }
}

impl<'a> IntoIterator for &'a ResultHistory {
    type Item = &'a AnalysisResult;
    type IntoIter = std::slice::Iter<'a, AnalysisResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<AnalysisResult> for ResultHistory {
    fn extend<T: IntoIterator<Item = AnalysisResult>>(&mut self, iter: T) {
        self.results.extend(iter);
    }
}
