use rand::Rng;

use crate::features::DIMENSIONS;
use crate::normalize::NormalizedVector;

pub type Centroid = [f64; DIMENSIONS];

/// Iterative k-means over normalized feature space.
///
/// Centroids are drawn uniformly at random from [0,1]^4 rather than seeded
/// from data points, so a centroid can finish with zero members. Such a
/// centroid is left in place during iteration and simply yields no cluster;
/// it is never re-seeded. A run can therefore report fewer than `k`
/// clusters. Known limitation, kept for parity with reported cluster
/// counts.
#[derive(Debug, Clone)]
pub struct KMeansEngine {
    pub k: usize,
    pub max_iterations: usize,
}

/// Final iteration state: frozen centroids plus the assignment array.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansOutcome {
    /// Sample index -> centroid index, length N.
    pub assignments: Vec<usize>,
    /// Length k; entries without members keep their last value.
    pub centroids: Vec<Centroid>,
    pub iterations: usize,
    /// False when the iteration cap stopped the run. The cap is accepted as
    /// best-effort convergence, not a failure.
    pub converged: bool,
}

impl KMeansEngine {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: 100,
        }
    }

    /// Runs with random initial centroids drawn from the injected RNG.
    pub fn run<R: Rng>(&self, vectors: &[NormalizedVector], rng: &mut R) -> KMeansOutcome {
        let centroids = (0..self.k)
            .map(|_| {
                let mut c = [0.0; DIMENSIONS];
                for d in c.iter_mut() {
                    *d = rng.gen::<f64>();
                }
                c
            })
            .collect();
        self.run_with_centroids(vectors, centroids)
    }

    /// Runs from caller-supplied initial centroids. This is the seam that
    /// lets callers pin exact membership.
    pub fn run_with_centroids(
        &self,
        vectors: &[NormalizedVector],
        mut centroids: Vec<Centroid>,
    ) -> KMeansOutcome {
        let mut assignments = vec![0usize; vectors.len()];
        let mut iterations = 0;
        let mut converged = false;
        let mut first_pass = true;

        while iterations < self.max_iterations {
            iterations += 1;

            let mut changed = false;
            for (i, v) in vectors.iter().enumerate() {
                let nearest = nearest_centroid(v, &centroids);
                if nearest != assignments[i] {
                    assignments[i] = nearest;
                    changed = true;
                }
            }

            // Convergence means an unchanged assignment versus the previous
            // pass. The zero-filled starting buffer is not a previous pass,
            // so the first pass always proceeds to the update step even
            // when every sample lands on centroid 0.
            if !changed && !first_pass {
                converged = true;
                break;
            }
            first_pass = false;

            update_centroids(vectors, &assignments, &mut centroids);
        }

        tracing::debug!(iterations, converged, k = self.k, "k-means finished");

        KMeansOutcome {
            assignments,
            centroids,
            iterations,
            converged,
        }
    }
}

/// Index of the closest centroid; ties resolve to the lowest index because
/// only a strictly smaller distance displaces the current best.
fn nearest_centroid(v: &NormalizedVector, centroids: &[Centroid]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let dist = distance_sq(&v.0, c);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Recomputes each centroid as the coordinate-wise mean of its members.
/// Centroids with zero members are left unchanged for the round.
fn update_centroids(
    vectors: &[NormalizedVector],
    assignments: &[usize],
    centroids: &mut [Centroid],
) {
    let mut sums = vec![[0.0; DIMENSIONS]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (v, &a) in vectors.iter().zip(assignments) {
        counts[a] += 1;
        for d in 0..DIMENSIONS {
            sums[a][d] += v.0[d];
        }
    }

    for (i, c) in centroids.iter_mut().enumerate() {
        if counts[i] == 0 {
            continue;
        }
        for d in 0..DIMENSIONS {
            c[d] = sums[i][d] / counts[i] as f64;
        }
    }
}

/// Squared Euclidean distance; ordering-equivalent to the true distance.
fn distance_sq(a: &[f64; DIMENSIONS], b: &[f64; DIMENSIONS]) -> f64 {
    let mut acc = 0.0;
    for d in 0..DIMENSIONS {
        let diff = a[d] - b[d];
        acc += diff * diff;
    }
    acc
}
