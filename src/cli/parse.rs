use graphbench_core::graph::{Algorithm, Representation};

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse storage representation from string
pub fn parse_representation(s: &str) -> std::result::Result<Representation, String> {
    s.parse::<Representation>().map_err(|e| e.to_string())
}

/// Parse an edge density, rejecting values outside 0.0..=1.0
pub fn parse_density(s: &str) -> std::result::Result<f64, String> {
    let density: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid density: {}", s))?;
    if !density.is_finite() || !(0.0..=1.0).contains(&density) {
        return Err(format!("density must be between 0 and 1, got {}", s));
    }
    Ok(density)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_density() {
        assert_eq!(parse_density("0.25"), Ok(0.25));
        assert_eq!(parse_density("1"), Ok(1.0));
        assert!(parse_density("1.5").is_err());
        assert!(parse_density("-0.1").is_err());
        assert!(parse_density("half").is_err());
        assert!(parse_density("NaN").is_err());
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("bellman-ford"), Ok(Algorithm::BellmanFord));
        assert!(parse_algorithm("astar").is_err());
    }
}
