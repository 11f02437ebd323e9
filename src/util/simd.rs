//! Vector math on `f32` slices using `wide` SIMD lanes.
//!
//! Slices shorter than one lane fall back to scalar loops.

use wide::f32x8;

const LANES: usize = 8;

fn lane(chunk: &[f32]) -> f32x8 {
    let mut buf = [0.0f32; LANES];
    buf.copy_from_slice(chunk);
    f32x8::new(buf)
}

/// SIMD-accelerated dot product. Extra elements of the longer slice are ignored.
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    let (a, b) = (&a[..len], &b[..len]);

    if len < LANES {
        return a.iter().zip(b).map(|(x, y)| x * y).sum();
    }

    let chunks_a = a.chunks_exact(LANES);
    let chunks_b = b.chunks_exact(LANES);
    let remainder_a = chunks_a.remainder();
    let remainder_b = chunks_b.remainder();

    let mut dot_vec = f32x8::splat(0.0);
    for (chunk_a, chunk_b) in chunks_a.zip(chunks_b) {
        dot_vec = dot_vec + lane(chunk_a) * lane(chunk_b);
    }

    let mut total: f32 = dot_vec.to_array().iter().sum();
    total += remainder_a
        .iter()
        .zip(remainder_b)
        .map(|(x, y)| x * y)
        .sum::<f32>();
    total
}

/// Euclidean length.
pub fn magnitude(vector: &[f32]) -> f32 {
    dot_product(vector, vector).sqrt()
}

/// A unit-length copy of `vector`; the zero vector stays zero.
pub fn normalized(vector: &[f32]) -> Vec<f32> {
    let norm = magnitude(vector);
    if norm == 0.0 {
        return vector.to_vec();
    }

    let scale = f32x8::splat(1.0 / norm);
    let chunks = vector.chunks_exact(LANES);
    let remainder = chunks.remainder();

    let mut out = Vec::with_capacity(vector.len());
    for chunk in chunks {
        out.extend_from_slice(&(lane(chunk) * scale).to_array());
    }
    out.extend(remainder.iter().map(|x| x / norm));
    out
}

/// Cosine similarity; zero when either vector is zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product(a, b) / (norm_a * norm_b)
    }
}
