//! Cosine similarity between embedding vectors.

/// Computes the cosine similarity of two vectors.
///
/// Returns `0.0` when the vectors differ in length or either has zero
/// magnitude, so padded or unindexed embeddings never rank above real
/// matches.
///
/// # Example
///
/// ```
/// use leave_engine::search::cosine_similarity;
///
/// let score = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]);
/// assert!((score - 1.0).abs() < 1e-6);
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
