/// Returns true if `val1` and `val2` are within a relative/absolute `epsilon`
/// (default 1e-8) of each other.
pub fn almost_eq(val1: f64, val2: f64, epsilon: Option<f64>) -> bool {
    let epsilon = epsilon.unwrap_or(1e-8);
    ((val2 - val1) / (val1 + val2)).abs() < epsilon || (val2 - val1).abs() < epsilon
}

pub fn almost_gt(val1: f64, val2: f64, epsilon: Option<f64>) -> bool {
    let epsilon = epsilon.unwrap_or(1e-8);
    val1 > val2 * (1.0 + epsilon) && !almost_eq(val1, val2, Some(epsilon))
}

pub fn almost_lt(val1: f64, val2: f64, epsilon: Option<f64>) -> bool {
    let epsilon = epsilon.unwrap_or(1e-8);
    val1 < val2 * (1.0 - epsilon) && !almost_eq(val1, val2, Some(epsilon))
}

/// Capitalizes the first letter of each whitespace-separated word, e.g.
/// `"gondola car"` becomes `"Gondola Car"`.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_eq() {
        assert!(almost_eq(1.0, 1.0 + 1e-10, None));
        assert!(!almost_eq(1.0, 1.1, None));
        assert!(almost_eq(0.0, 0.0, None));
    }

    #[test]
    fn test_almost_gt_and_lt() {
        assert!(almost_gt(1.1, 1.0, None));
        assert!(!almost_gt(1.0 + 1e-12, 1.0, None));
        assert!(almost_lt(1.0, 1.1, None));
        assert!(!almost_lt(1.0, 1.0 + 1e-12, None));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("gondola"), "Gondola");
        assert_eq!(title_case("HOPPER"), "Hopper");
        assert_eq!(title_case("max  speed"), "Max Speed");
        assert_eq!(title_case(""), "");
    }
}
