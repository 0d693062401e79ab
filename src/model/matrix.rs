use std::collections::HashMap;

/// Count rows keyed by gene id, in first-insertion order.
///
/// Re-inserting a gene replaces its counts but keeps its first position,
/// so iteration order is stable across repeated rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneCounts {
    genes: Vec<String>,
    counts: Vec<Vec<f64>>,
    gene_index: HashMap<String, usize>,
}

impl GeneCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when an existing row for `gene` was overwritten.
    pub fn insert(&mut self, gene: String, counts: Vec<f64>) -> bool {
        if let Some(&idx) = self.gene_index.get(gene.as_str()) {
            self.counts[idx] = counts;
            return true;
        }
        let idx = self.genes.len();
        self.gene_index.insert(gene.clone(), idx);
        self.genes.push(gene);
        self.counts.push(counts);
        false
    }

    #[cfg(test)]
    pub fn get(&self, gene: &str) -> Option<&[f64]> {
        self.gene_index
            .get(gene)
            .map(|&idx| self.counts[idx].as_slice())
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    #[cfg(test)]
    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.genes
            .iter()
            .zip(self.counts.iter())
            .map(|(gene, counts)| (gene.as_str(), counts.as_slice()))
    }
}

impl FromIterator<(String, Vec<f64>)> for GeneCounts {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        let mut out = GeneCounts::new();
        for (gene, counts) in iter {
            out.insert(gene, counts);
        }
        out
    }
}

/// Tissue/cell column axis plus the retained `count` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionMatrix {
    pub tissues: Vec<String>,
    pub data: GeneCounts,
}

impl ExpressionMatrix {
    pub fn new(tissues: Vec<String>, data: GeneCounts) -> Self {
        Self { tissues, data }
    }

    pub fn n_tissues(&self) -> usize {
        self.tissues.len()
    }

    pub fn n_genes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
