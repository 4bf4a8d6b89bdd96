// Constants for conversion
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Convert lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Convert SOL to lamports, rounding to the nearest lamport
pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * LAMPORTS_PER_SOL).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sol_is_a_billion_lamports() {
        assert_eq!(sol_to_lamports(1.0), 1_000_000_000);
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
    }

    #[test]
    fn fractional_sol_rounds_instead_of_truncating() {
        // 0.1 * 1e9 is 99999999.99999999 in binary floating point
        assert_eq!(sol_to_lamports(0.1), 100_000_000);
    }
}
