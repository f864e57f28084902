pub mod vectors {
    use thiserror::Error;

    /// Tolerance used by the collinearity test only; equality and
    /// opposition compare components exactly.
    pub const COLLINEAR_TOLERANCE: f64 = 1e-9;

    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum VectorError {
        #[error("invalid or empty vector")]
        InvalidVector,

        #[error("vectors must have the same dimension (got {expected} and {found})")]
        DimensionMismatch { expected: usize, found: usize },

        #[error("cannot compute the unit vector of a null vector")]
        NullNormalization,
    }

    /// Magnitude and direction of a vector, as returned by [`normalize`].
    pub struct UnitVector {
        pub magnitude: f64,
        pub components: Vec<f64>,
    }

    /// Parse text like `[1, 2.5, -3]` into a vector. Brackets and whitespace
    /// are ignored, tokens that do not parse to a finite number are dropped.
    /// Never fails; an empty result means the input was unusable.
    pub fn parse_vector(text: &str) -> Vec<f64> {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '[' && *c != ']')
            .collect();
        if cleaned.is_empty() {
            return Vec::new();
        }
        cleaned
            .split(',')
            .filter_map(|token| token.parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .collect()
    }

    /// Render a vector as `[n1, n2, ...]` with 3 decimal places per component.
    pub fn format_vector(vec: &[f64]) -> String {
        let parts: Vec<String> = vec.iter().map(|n| format!("{:.3}", n)).collect();
        format!("[{}]", parts.join(", "))
    }

    /// Euclidean norm.
    pub fn magnitude(vec: &[f64]) -> f64 {
        vec.iter().map(|n| n * n).sum::<f64>().sqrt()
    }

    /// Whether every component is exactly zero.
    pub fn is_null(vec: &[f64]) -> Result<bool, VectorError> {
        if vec.is_empty() {
            return Err(VectorError::InvalidVector);
        }
        Ok(vec.iter().all(|n| *n == 0.0))
    }

    /// Magnitude plus the vector scaled to unit length.
    pub fn normalize(vec: &[f64]) -> Result<UnitVector, VectorError> {
        if vec.is_empty() {
            return Err(VectorError::InvalidVector);
        }
        let mag = magnitude(vec);
        if mag == 0.0 {
            return Err(VectorError::NullNormalization);
        }
        Ok(UnitVector {
            magnitude: mag,
            components: vec.iter().map(|n| n / mag).collect(),
        })
    }

    fn check_pair(a: &[f64], b: &[f64]) -> Result<(), VectorError> {
        if a.is_empty() || b.is_empty() {
            return Err(VectorError::InvalidVector);
        }
        if a.len() != b.len() {
            return Err(VectorError::DimensionMismatch {
                expected: a.len(),
                found: b.len(),
            });
        }
        Ok(())
    }

    pub fn are_equal(a: &[f64], b: &[f64]) -> Result<bool, VectorError> {
        check_pair(a, b)?;
        Ok(a.iter().zip(b).all(|(x, y)| x == y))
    }

    pub fn are_opposite(a: &[f64], b: &[f64]) -> Result<bool, VectorError> {
        check_pair(a, b)?;
        Ok(a.iter().zip(b).all(|(x, y)| *x == -*y))
    }

    /// Whether `b` is a scalar multiple of `a`. The null vector is collinear
    /// to every vector.
    pub fn are_collinear(a: &[f64], b: &[f64]) -> Result<bool, VectorError> {
        check_pair(a, b)?;
        let pivot = match a.iter().position(|n| *n != 0.0) {
            Some(i) => i,
            None => return Ok(true),
        };
        let k = b[pivot] / a[pivot];
        Ok(a.iter()
            .zip(b)
            .all(|(x, y)| (*x * k - *y).abs() < COLLINEAR_TOLERANCE))
    }

    fn parse_lines(text: &str) -> Result<Vec<Vec<f64>>, VectorError> {
        let vectors: Vec<Vec<f64>> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_vector)
            .collect();
        if vectors.is_empty() {
            return Err(VectorError::InvalidVector);
        }
        let dimension = vectors[0].len();
        if dimension == 0 {
            return Err(VectorError::InvalidVector);
        }
        for vec in &vectors[1..] {
            if vec.len() != dimension {
                return Err(VectorError::DimensionMismatch {
                    expected: dimension,
                    found: vec.len(),
                });
            }
        }
        Ok(vectors)
    }

    /// Component-wise sum of a newline-separated list of vector texts.
    pub fn resultant(text: &str) -> Result<Vec<f64>, VectorError> {
        let vectors = parse_lines(text)?;
        let mut sum = vec![0.0; vectors[0].len()];
        for vec in &vectors {
            for (i, component) in vec.iter().enumerate() {
                sum[i] += component;
            }
        }
        Ok(sum)
    }

    /// The vector that cancels the resultant: its component-wise negation.
    pub fn equilibrant(text: &str) -> Result<Vec<f64>, VectorError> {
        Ok(resultant(text)?.iter().map(|n| -n).collect())
    }
}
