//! Error handling example for swissmatch-rs
//!
//! Not-found is an empty result, a malformed key is `Error::InvalidArgument`,
//! and a broken dataset is `Error::Integrity`.

use swissmatch_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== swissmatch-rs Error Handling Example ===\n");

    // Example 1: Loading the bundled dataset may fail
    println!("--- Example 1: Loading the default dataset ---");
    match SwissMatch::load(None) {
        Ok(handle) => println!("✓ Loaded: {:?}", handle.snapshot().stats()),
        Err(e) => eprintln!("✗ Failed to load dataset: {e}"),
    }
    println!();

    let zurich = ZipCode {
        ordering_number: 4384,
        zip_type: ZipType::DomicileAndPostal,
        code: 8000,
        add_on: 0,
        names: Names::native("Zürich"),
        language: Language::German,
        language_alternative: None,
        canton: "ZH".into(),
        delivery_by: None,
        largest_community: None,
        valid_from: None,
    };
    let db = Dataset::build(vec![], vec![], vec![zurich.clone()])?;

    // Example 2: Not found vs. invalid
    println!("--- Example 2: Not found is not an error ---");
    for second in ["Nonexistent", "00", "000", "８０"] {
        match db.zip_code(8000, Some(second.into())) {
            Ok(Some(z)) => println!("  {second:>12}: found {z}"),
            Ok(None) => println!("  {second:>12}: not found"),
            Err(e) => println!("  {second:>12}: {e}"),
        }
    }
    println!();

    // Example 3: Integrity failures abort the build
    println!("--- Example 3: Duplicate ordering numbers ---");
    let mut twin = zurich.clone();
    twin.code = 8001;
    match Dataset::build(vec![], vec![], vec![zurich, twin]) {
        Ok(_) => println!("  unexpectedly built"),
        Err(e) => println!("  rejected: {e}"),
    }

    Ok(())
}
