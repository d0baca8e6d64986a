// ============================================================================
// Basic Usage Example
// ============================================================================

use large_number::prelude::*;
use num_bigint::BigInt;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Large Number Example ===\n");

    // Parse suffixed text (numeral and suffix separated by whitespace)
    println!("Parsing...");
    for input in ["12.5 aa", "100 M", "1.2B", "999.999 k", "1.23 ac", "1.23aa", "1.23 ab"] {
        match parse(input) {
            Ok(value) => println!(
                "  {:>10} -> {} | short: {} | words: {}",
                input,
                value,
                to_short_form(&value),
                to_illion_text(&value)
            ),
            Err(error) => println!("  {:>10} -> error: {}", input, error),
        }
    }

    // Live-preview style: failures are expected and cheap
    println!("\n=== Typing Preview ===");
    for partial in ["1", "1.", "1.5", "1.5 ", "1.5 k", "1.5 kk"] {
        let (ok, value) = parse_or_zero(partial);
        println!("  {:<8} ok={} value={}", format!("{:?}", partial), ok, value);
    }

    // Arithmetic on suffixed strings
    println!("\n=== Arithmetic ===");
    println!("  1 k + 500      = {:?}", add_to_short_form("1 k", "500"));
    println!("  1 M - 1 k      = {:?}", subtract_to_short_form("1 M", "1 k"));
    println!("  2 M * 3 k      = {:?}", multiply_to_short_form("2 M", "3 k"));
    println!("  1 M * 1 M      = {:?}", multiply_to_illion_form("1 M", "1 M"));
    println!("  1 aa + 1k      = {:?}", add("1 aa", "1k"));

    // Math utilities
    println!("\n=== Math ===");
    let n = BigInt::from(10).pow(40);
    println!("  isqrt(10^40)   = {:?}", integer_sqrt(&n).map(|r| to_short_form(&r)));
    println!("  gcd(12 k, 18 k) = {}", gcd(&BigInt::from(12_000), &BigInt::from(18_000)));
    println!("  lcm(4, 6)      = {}", lcm(&BigInt::from(4), &BigInt::from(6)));

    // Wrapper value type
    println!("\n=== LargeNumber ===");
    let mut gold = LargeNumber::from_text("250 k");
    for _ in 0..3 {
        gold = gold + LargeNumber::from_text("250 k");
        println!("  gold: {} ({})", gold, gold.illion_text());
    }
}
