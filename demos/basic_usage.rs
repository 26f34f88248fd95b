// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_number::prelude::*;
use tracing::Level;

fn main() -> Result<(), NumericError> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("=== Radix Number Example ===\n");

    // Exact decimal arithmetic
    let a = Number::from_str_radix("1.34", 10)?;
    let b = Number::from_str_radix("-98.01", 10)?;
    println!("{} + {} = {}", a, b, a.checked_add(&b)?);

    let tenth = Number::from_str_radix("0.1", 10)?;
    let fifth = Number::from_str_radix("0.2", 10)?;
    println!("{} + {} = {} (no rounding)\n", tenth, fifth, tenth.checked_add(&fifth)?);

    // Other bases
    println!("Bases:");
    let hex = Number::from_str_radix("1f.2b", 16)?;
    println!("  {} (base 16) + 10 = {}", hex, hex.checked_add_int(10)?);
    println!("  123 in base 16 = {}", Number::from_int(123, 16)?);

    let mut binary = Number::from_str_radix("1.01101", 2)?;
    binary.shift(3)?;
    println!("  1.01101 (base 2) shifted by 3 = {}", binary);

    println!("\nDigits of {}:", hex);
    for (position, digit) in &hex {
        println!("  position {:>3}: {}", position, digit);
    }

    // Ordering
    println!("\nOrdering:");
    let mut values = vec![
        Number::from_str_radix("100.003", 10)?,
        Number::from_str_radix("-12.34", 10)?,
        Number::from_str_radix("23.45", 10)?,
    ];
    values.sort_by(|x, y| x.compare(y).unwrap_or(std::cmp::Ordering::Equal));
    for v in &values {
        println!("  {}", v);
    }
    let zero = Number::from_str_radix("0.", 10)?;
    let neg_zero = Number::from_str_radix("-0.", 10)?;
    println!("  0. == -0. : {}", zero == neg_zero);

    // Square roots
    println!("\nSquare roots of 2:");
    for config in [
        SqrtConfig::decimal(25),
        SqrtConfig::decimal(25).with_method(SqrtMethod::Native),
        SqrtConfig::binary(16),
        SqrtConfig::hexadecimal(16),
    ] {
        println!(
            "  base {:>2} {:?}: {}",
            config.base,
            config.method,
            config.compute(2)?
        );
    }

    // Errors
    println!("\nErrors:");
    for (text, base) in [("1.2", 2), ("1.2.3", 10), ("1.2", 40), ("1.2", 0)] {
        match Number::from_str_radix(text, base) {
            Ok(n) => println!("  {:?} parsed unexpectedly", n),
            Err(e) => println!("  {:?} in base {}: {}", text, base, e),
        }
    }

    Ok(())
}
