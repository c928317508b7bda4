use crate::features::{FeatureVector, DIMENSIONS};

/// Feature vector rescaled to [0,1] per dimension via population min/max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedVector(pub [f64; DIMENSIONS]);

/// Min-max scales the population into [0,1] per dimension.
///
/// A degenerate dimension (`min == max`) maps every sample to 0.0: a
/// constant dimension contributes no separating signal.
pub fn normalize(vectors: &[FeatureVector]) -> Vec<NormalizedVector> {
    if vectors.is_empty() {
        return Vec::new();
    }

    let mut min = [f64::INFINITY; DIMENSIONS];
    let mut max = [f64::NEG_INFINITY; DIMENSIONS];
    for v in vectors {
        let dims = v.dims();
        for d in 0..DIMENSIONS {
            min[d] = min[d].min(dims[d]);
            max[d] = max[d].max(dims[d]);
        }
    }

    vectors
        .iter()
        .map(|v| {
            let dims = v.dims();
            let mut scaled = [0.0; DIMENSIONS];
            for d in 0..DIMENSIONS {
                let range = max[d] - min[d];
                scaled[d] = if range == 0.0 {
                    0.0
                } else {
                    (dims[d] - min[d]) / range
                };
            }
            NormalizedVector(scaled)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(elapsed: f64, cpu: f64, buffer: f64, executions: u64) -> FeatureVector {
        FeatureVector {
            sql_id: "t".into(),
            elapsed_per_exec: elapsed,
            cpu_per_exec: cpu,
            buffer_per_exec: buffer,
            executions,
        }
    }

    #[test]
    fn test_min_maps_to_zero_max_to_one() {
        let vectors = vec![
            vector(10.0, 1.0, 100.0, 1),
            vector(55.0, 5.0, 550.0, 5),
            vector(100.0, 9.0, 1000.0, 9),
        ];
        let scaled = normalize(&vectors);

        for d in 0..DIMENSIONS {
            assert_eq!(scaled[0].0[d], 0.0);
            assert_eq!(scaled[2].0[d], 1.0);
        }
        // Midpoint lands mid-range.
        assert!((scaled[1].0[0] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_dimension_maps_to_zero() {
        let vectors = vec![
            vector(10.0, 7.0, 100.0, 1),
            vector(20.0, 7.0, 200.0, 2),
            vector(30.0, 7.0, 300.0, 3),
        ];
        let scaled = normalize(&vectors);
        // cpu dimension is constant: every sample normalizes to 0.0 there.
        assert!(scaled.iter().all(|v| v.0[1] == 0.0));
        // Non-degenerate dimensions still spread out.
        assert_eq!(scaled[2].0[0], 1.0);
    }

    #[test]
    fn test_empty_population() {
        assert!(normalize(&[]).is_empty());
    }
}
