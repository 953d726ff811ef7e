//! Basic usage example for the galois-tables library.
//!
//! This example builds GF(7), GF(2^4) and GF(3^3), does some arithmetic and
//! moves GF(2^4) to a self-dual basis. Run with `RUST_LOG=debug` to see the
//! library's tracing events.
//!
//! Lives in `demos/` rather than `examples/`; `Cargo.toml` registers it as
//! the `basic_usage` example, so run it with `cargo run --example basic_usage`.

use galois_tables::gf::Coefficient;
use galois_tables::{GaloisField, GaloisFieldBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Galois Tables - Basic Usage Example\n");

    // Prime field
    let gf7 = GaloisField::prime(7).expect("Failed to build GF(7)");
    let two = gf7.element(2).expect("index in range");
    let three = gf7.element(3).expect("index in range");
    println!("{gf7}:");
    println!("  2 + 3 = {}", &two + &three);
    println!("  2 - 3 = {}", &two - &three);
    println!("  2 * 3 = {}", &two * &three);
    println!("  2 / 3 = {}", &two / &three);
    println!("  2^-1  = {}", two.inv().expect("two is a unit"));
    println!();

    // Extension field from a primitive polynomial
    let gf16 = GaloisFieldBuilder::new()
        .characteristic(2)
        .degree(4)
        .polynomial(vec![1, 1, 0, 0, 1])
        .build()
        .expect("Failed to build GF(2^4)");

    println!("{gf16:?}");
    println!("Element table (index: coordinates, trace):");
    for e in &gf16 {
        println!("  {:>2}: {:?}  tr = {}", e.index(), e.coordinates(), e.trace());
    }
    println!();

    // Non-primitive polynomials are rejected
    match GaloisField::new(2, 4, &[1, 1, 1, 1, 1]) {
        Ok(_) => println!("✗ 1 + x + x^2 + x^3 + x^4 was accepted"),
        Err(e) => println!("✓ Rejected: {e}"),
    }
    println!();

    // Self-dual basis
    let basis = gf16
        .compute_self_dual_basis()
        .expect("GF(2^4) has a self-dual basis");
    println!("Self-dual basis of {gf16} at indices {basis:?}");
    let sdb = gf16
        .with_self_dual_basis(&basis)
        .expect("basis was verified");
    println!("  one in polynomial basis: {:?}", gf16.one().coordinates());
    println!("  one in self-dual basis:  {:?}", sdb.one().coordinates());
    println!();

    // Polynomial evaluation over GF(3^3)
    let gf27 = GaloisField::new(3, 3, &[1, 2, 0, 1]).expect("Failed to build GF(3^3)");
    let x = gf27.primitive_element().expect("extension field");
    let coefs = [
        Coefficient::Scalar(1),
        Coefficient::Element(gf27.element(5).expect("index in range")),
        Coefficient::Scalar(2),
    ];
    let y = gf27.evaluate(&coefs, &x).expect("same field");
    println!("{gf27}: 1 + a^5 x + 2x^2 at x = a gives a^{}", y.index());
}
