use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use qrcode::{render::svg, QrCode};
use regex::Regex;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::solana::utils::sol_to_lamports;

// Generate QR code for a Solana address
pub fn generate_qr_code(address: &str) -> Result<Vec<u8>> {
    // Create QR code with high error correction
    let code = QrCode::with_error_correction_level(address, qrcode::EcLevel::H)
        .map_err(|e| anyhow!("Failed to generate QR code: {}", e))?;

    let svg_string = code
        .render()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(svg_string.into_bytes())
}

// Validate Solana address
pub fn validate_solana_address(address: &str) -> bool {
    !address.trim().is_empty() && Pubkey::from_str(address.trim()).is_ok()
}

// Parse a SOL amount such as "0.5", "0.5 SOL" or "2 sol". Amounts that
// round to zero lamports are rejected.
pub fn parse_sol_amount(input: &str) -> Option<f64> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"(?i)^(\d+(?:\.\d+)?|\.\d+)(?:\s*SOL)?$").unwrap();
    }

    let amount = RE
        .captures(input.trim())
        .and_then(|cap| cap.get(1)?.as_str().parse::<f64>().ok())?;

    if amount.is_finite() && sol_to_lamports(amount) > 0 {
        Some(amount)
    } else {
        None
    }
}

// Parse a whole number of tokens to mint
pub fn parse_token_amount(input: &str) -> Option<u64> {
    match input.trim().replace('_', "").parse::<u64>() {
        Ok(amount) if amount > 0 => Some(amount),
        _ => None,
    }
}

// Format amount with SOL precision, trimming trailing zeros
pub fn format_sol(amount: f64) -> String {
    let formatted = format!("{:.9}", amount);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

// Shorten address for display: first and last `chars` characters
pub fn shorten_address(address: &str, chars: usize) -> String {
    if address.len() <= chars * 2 + 3 {
        return address.to_string();
    }

    let start = &address[..chars];
    let end = &address[address.len() - chars..];

    format!("{}...{}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

    #[test]
    fn empty_recipient_is_not_an_address() {
        assert!(!validate_solana_address(""));
        assert!(!validate_solana_address("   "));
        assert!(!validate_solana_address("not-a-key"));
        assert!(validate_solana_address(ADDRESS));
    }

    #[test]
    fn sol_amount_accepts_optional_suffix() {
        assert_eq!(parse_sol_amount("0.5"), Some(0.5));
        assert_eq!(parse_sol_amount("2 SOL"), Some(2.0));
        assert_eq!(parse_sol_amount("1.25sol"), Some(1.25));
        assert_eq!(parse_sol_amount(".5"), Some(0.5));
    }

    #[test]
    fn sol_amount_rejects_zero_and_garbage() {
        assert_eq!(parse_sol_amount("0"), None);
        assert_eq!(parse_sol_amount("-1"), None);
        assert_eq!(parse_sol_amount("1 USDC"), None);
        assert_eq!(parse_sol_amount(""), None);
    }

    #[test]
    fn sol_amount_below_one_lamport_is_rejected() {
        assert_eq!(parse_sol_amount("0.0000000004"), None);
        assert_eq!(parse_sol_amount("0.000000001"), Some(0.000000001));
    }

    #[test]
    fn token_amount_is_a_positive_integer() {
        assert_eq!(parse_token_amount("100"), Some(100));
        assert_eq!(parse_token_amount("1_000"), Some(1000));
        assert_eq!(parse_token_amount("0"), None);
        assert_eq!(parse_token_amount("1.5"), None);
    }

    #[test]
    fn shorten_keeps_both_ends() {
        assert_eq!(shorten_address(ADDRESS, 4), "7xKX...gAsU");
        assert_eq!(shorten_address("abcdef", 4), "abcdef");
    }

    #[test]
    fn format_sol_drops_trailing_zeros() {
        assert_eq!(format_sol(1.5), "1.5");
        assert_eq!(format_sol(2.0), "2");
        assert_eq!(format_sol(0.000000001), "0.000000001");
    }

    #[test]
    fn qr_code_is_svg() {
        let svg = generate_qr_code(ADDRESS).unwrap();
        assert!(String::from_utf8(svg).unwrap().contains("<svg"));
    }
}
