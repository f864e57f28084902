// tests/vectors.rs
//
// Library-level checks for parsing, formatting, and the calculator
// operations, plus a few randomized properties.
// Run with: cargo test

use rvcalc::vectors::{
    are_collinear, are_equal, are_opposite, equilibrant, format_vector, is_null, magnitude,
    normalize, parse_vector, resultant, VectorError,
};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn random_vector(dimension: usize) -> Vec<f64> {
    (0..dimension).map(|_| rand::random_range(-10.0..10.0)).collect()
}

fn as_line(vec: &[f64]) -> String {
    let parts: Vec<String> = vec.iter().map(f64::to_string).collect();
    parts.join(",")
}

#[test]
fn parse_strips_brackets_and_whitespace() {
    assert_eq!(parse_vector("[1, 2, 3]"), vec![1.0, 2.0, 3.0]);
    assert_eq!(parse_vector("  4.5 ,\t-6 "), vec![4.5, -6.0]);
}

#[test]
fn parse_of_unusable_input_is_empty() {
    assert_eq!(parse_vector(""), Vec::<f64>::new());
    assert_eq!(parse_vector("   [ ] "), Vec::<f64>::new());
    assert_eq!(parse_vector("abc"), Vec::<f64>::new());
}

#[test]
fn parse_discards_bad_tokens() {
    assert_eq!(parse_vector("1,abc,2"), vec![1.0, 2.0]);
    assert_eq!(parse_vector("1,,2"), vec![1.0, 2.0]);
    // Non-finite values are not vector components
    assert_eq!(parse_vector("inf,1"), vec![1.0]);
    assert_eq!(parse_vector("NaN,1"), vec![1.0]);
}

#[test]
fn format_uses_three_decimal_places() {
    assert_eq!(format_vector(&[1.0, 2.0, 3.0]), "[1.000, 2.000, 3.000]");
    assert_eq!(format_vector(&[-0.5, 0.125]), "[-0.500, 0.125]");
    assert_eq!(format_vector(&[]), "[]");
}

#[test]
fn null_check() {
    assert_eq!(is_null(&[0.0, 0.0, 0.0]), Ok(true));
    assert_eq!(is_null(&[0.0, 0.0, 1.0]), Ok(false));
    assert_eq!(is_null(&[]), Err(VectorError::InvalidVector));
}

#[test]
fn normalize_three_four() {
    let unit = normalize(&[3.0, 4.0]).unwrap();
    assert_eq!(unit.magnitude, 5.0);
    assert!(approx_eq(unit.components[0], 0.6, 1e-12));
    assert!(approx_eq(unit.components[1], 0.8, 1e-12));
}

#[test]
fn normalize_rejects_null_and_empty_vectors() {
    assert!(matches!(normalize(&[0.0, 0.0]), Err(VectorError::NullNormalization)));
    assert!(matches!(normalize(&[]), Err(VectorError::InvalidVector)));
}

#[test]
fn equality_is_exact() {
    assert_eq!(are_equal(&[1.0, 2.0], &[1.0, 2.0]), Ok(true));
    assert_eq!(are_equal(&[1.0, 2.0], &[1.0, 2.0000001]), Ok(false));
}

#[test]
fn comparison_requires_matching_dimensions() {
    assert_eq!(
        are_equal(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(VectorError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    );
    assert_eq!(are_opposite(&[], &[1.0]), Err(VectorError::InvalidVector));
}

#[test]
fn opposite_vectors() {
    assert_eq!(are_opposite(&[1.0, -2.0], &[-1.0, 2.0]), Ok(true));
    assert_eq!(are_opposite(&[1.0, -2.0], &[-1.0, 3.0]), Ok(false));
}

#[test]
fn collinear_scalar_multiples() {
    assert_eq!(are_collinear(&[1.0, 2.0], &[2.0, 4.0]), Ok(true));
    assert_eq!(are_collinear(&[1.0, 2.0], &[2.0, 5.0]), Ok(false));
}

#[test]
fn collinear_null_vector_convention() {
    // The null vector is collinear to any vector
    assert_eq!(are_collinear(&[0.0, 0.0], &[5.0, 7.0]), Ok(true));
}

#[test]
fn collinear_tolerance_boundary() {
    // Off by ~1e-10: inside the tolerance
    assert_eq!(are_collinear(&[3.0, 6.0], &[1.0, 2.0000000001]), Ok(true));
    // Off by 1e-5: outside it
    assert_eq!(are_collinear(&[3.0, 6.0], &[1.0, 2.00001]), Ok(false));
}

#[test]
fn resultant_sums_component_wise() {
    assert_eq!(resultant("1,0\n0,1\n2,2"), Ok(vec![3.0, 3.0]));
    // Blank lines are skipped
    assert_eq!(resultant("\n1,0\n\n0,1\n"), Ok(vec![1.0, 1.0]));
}

#[test]
fn equilibrant_negates_the_resultant() {
    assert_eq!(equilibrant("1,0\n0,1\n2,2"), Ok(vec![-3.0, -3.0]));
}

#[test]
fn sum_rejects_bad_input() {
    assert_eq!(resultant(""), Err(VectorError::InvalidVector));
    assert_eq!(resultant("  \n \t"), Err(VectorError::InvalidVector));
    assert_eq!(resultant("abc\n1,2"), Err(VectorError::InvalidVector));
    assert_eq!(
        resultant("1,2\n1,2,3"),
        Err(VectorError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn random_unit_vectors_have_unit_magnitude() {
    for _ in 0..100 {
        let vec = random_vector(4);
        if magnitude(&vec) == 0.0 {
            continue;
        }
        let unit = normalize(&vec).unwrap();
        assert!(approx_eq(magnitude(&unit.components), 1.0, 1e-12));
    }
}

#[test]
fn random_scalar_multiples_are_collinear() {
    for _ in 0..100 {
        let mut vec = random_vector(2);
        vec.push(rand::random_range(1.0..5.0));
        let k: f64 = rand::random_range(0.5..3.0);
        let scaled: Vec<f64> = vec.iter().map(|n| n * k).collect();
        assert_eq!(are_collinear(&vec, &scaled), Ok(true));
    }
}

#[test]
fn random_vector_plus_negation_is_null() {
    for _ in 0..100 {
        let vec = random_vector(3);
        let negated: Vec<f64> = vec.iter().map(|n| -n).collect();
        let text = format!("{}\n{}", as_line(&vec), as_line(&negated));
        let sum = resultant(&text).unwrap();
        assert_eq!(is_null(&sum), Ok(true));
    }
}
