//! Basic usage example for swissmatch-rs
//!
//! This example demonstrates how to:
//! - Build an index set from in-memory records
//! - Resolve a zip code under each addressing scheme
//! - Search by name across locales and spellings
//! - Reload the data without disturbing readers

use swissmatch_rs::prelude::*;

fn zip(onrp: u32, code: u16, add_on: u8, names: Names) -> ZipCode {
    ZipCode {
        ordering_number: onrp,
        zip_type: ZipType::DomicileAndPostal,
        code,
        add_on,
        names,
        language: Language::German,
        language_alternative: None,
        canton: "ZH".into(),
        delivery_by: None,
        largest_community: None,
        valid_from: None,
    }
}

fn main() -> Result<()> {
    println!("=== swissmatch-rs Basic Usage Example ===\n");

    let records = Records {
        cantons: vec![Canton {
            abbreviation: "ZH".into(),
            plate_code: 1,
            names: Names::native("Zürich").with(Locale::It, "Zurigo"),
        }],
        communities: vec![Community {
            community_number: 261,
            names: Names::native("Zürich"),
            canton: "ZH".into(),
            agglomeration: None,
        }],
        zip_codes: vec![
            zip(
                4384,
                8000,
                0,
                Names::native("Zürich").with(Locale::It, "Zurigo"),
            ),
            zip(4385, 8000, 2, Names::native("Zürich 1 Sihlpost")),
        ],
    };

    let handle = SwissMatch::load(Some(&records))?;
    let db = handle.snapshot();
    println!("✓ Index set built: {:?}\n", db.stats());

    // Example 1: the ordering number is the only standalone key
    println!("--- Example 1: Lookup by ONRP ---");
    if let Some(z) = db.zip_code(4384, None)? {
        println!("ONRP 4384 -> {z}");
    }
    println!();

    // Example 2: code + add-on, code + name
    println!("--- Example 2: Code with add-on or name ---");
    for second in [Arg::from(0), Arg::from("Zurigo"), Arg::from("zuerich")] {
        let hit = db.zip_code(8000, Some(second))?;
        println!("8000 + {second:?} -> {:?}", hit.map(|z| z.to_string()));
    }
    println!();

    // Example 3: one code, many records
    println!("--- Example 3: All records for 8000 ---");
    for z in db.zip_codes(Some(8000.into()))? {
        println!("- {z} (add-on {:02})", z.add_on);
    }
    println!();

    // Example 4: names in another locale
    println!("--- Example 4: Italian names for 8000 ---");
    println!("{:?}", db.cities_for_zip_code(8000, None, Some(Locale::It))?);
    println!();

    // Example 5: reload
    println!("--- Example 5: Reload ---");
    let mut smaller = records.clone();
    smaller.zip_codes.truncate(1);
    handle.reload(Some(&smaller))?;
    println!("old snapshot: {:?}", db.stats());
    println!("new snapshot: {:?}", handle.snapshot().stats());

    Ok(())
}
