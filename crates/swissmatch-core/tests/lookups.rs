mod common;

use swissmatch_core::prelude::*;

fn onrps(zips: &[&ZipCode]) -> Vec<u32> {
    zips.iter().map(|z| z.ordering_number).collect()
}

#[test]
fn zurich_resolves_under_every_scheme() {
    let db = common::dataset();

    let by_onrp = db.zip_code(4384, None).unwrap().unwrap();
    assert_eq!(by_onrp.to_string(), "8000 Zürich");

    for zip in [
        db.zip_code(8000, Some(0.into())).unwrap(),
        db.zip_code("8000", Some("00".into())).unwrap(),
        db.zip_code(800000, None).unwrap(),
        db.zip_code("800000", None).unwrap(),
        db.zip_code(8000, Some("Zürich".into())).unwrap(),
        db.zip_code(8000, Some("Zurigo".into())).unwrap(),
        db.zip_code(8000, Some("zuerich".into())).unwrap(),
    ] {
        assert_eq!(zip.map(|z| z.ordering_number), Some(4384));
    }

    let shared = db.zip_codes(Some(8000.into())).unwrap();
    assert_eq!(onrps(&shared), vec![4384, 4385]);
}

#[test]
fn full_code_round_trips_through_the_combined_key() {
    let db = common::dataset();
    for zip in db.zip_codes(None).unwrap() {
        let found = db.zip_code(zip.full_code(), None).unwrap();
        assert_eq!(found, Some(zip));
    }
    assert_eq!(db.zip_code(4384, None).unwrap().unwrap().full_code(), 800000);
}

#[test]
fn lone_name_without_a_code_is_invalid() {
    let db = common::dataset();
    let err = db.zip_code("Zürich", None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn unknown_name_is_not_found_not_invalid() {
    let db = common::dataset();
    assert!(db.zip_code(8000, Some("Nonexistent".into())).unwrap().is_none());
    assert!(db.zip_code(9999, None).unwrap().is_none());
    assert!(db.zip_codes(Some(9999.into())).unwrap().is_empty());
    assert!(db.city("Atlantis").is_empty());
}

#[cfg(feature = "json")]
#[test]
fn unsupported_second_argument_is_invalid() {
    let db = common::dataset();
    let empty_list = serde_json::json!([]);
    let err = db.zip_code(8000, Some(Arg::from(&empty_list))).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let empty_object = serde_json::json!({});
    let err = db.zip_codes(Some(Arg::from(&empty_object))).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn non_ascii_digits_are_invalid() {
    let db = common::dataset();
    let err = db.zip_code("８０００", None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    let err = db.zip_codes(Some("８０００".into())).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn duplicate_ordering_number_fails_the_build() {
    let mut records = common::records();
    let mut clone = records.zip_codes[0].clone();
    clone.code = 8099;
    clone.names = Names::native("Elsewhere");
    records.zip_codes.push(clone);

    let err = Dataset::from_records(records).unwrap_err();
    assert!(matches!(
        err,
        Error::Integrity(IntegrityError::DuplicateOrderingNumber(4384))
    ));
}

#[test]
fn ordering_number_is_a_bijection() {
    let db = common::dataset();
    let all = db.zip_codes(None).unwrap();
    assert_eq!(all.len(), db.stats().zip_codes);
    for zip in all {
        let found = db.zip_code_index().by_ordering_number(zip.ordering_number).unwrap();
        assert!(std::ptr::eq(found, zip));
    }
}

#[test]
fn every_name_variant_round_trips_with_its_code() {
    let db = common::dataset();
    for zip in db.zip_code_index().all() {
        for name in zip.names.variants() {
            let found = db.zip_code_index().by_code_and_name(zip.code, name).unwrap();
            assert_eq!(found.ordering_number, zip.ordering_number, "{name}");

            let by_name = db.city(name);
            assert!(by_name.iter().any(|z| z.ordering_number == zip.ordering_number));
            assert!(zip.is_named(name));
        }
    }
}

#[test]
fn canonical_name_finds_its_records() {
    let db = common::dataset();
    for zip in db.zip_code_index().all() {
        let folded = swissmatch_core::text::fold(zip.name());
        let hits = db.zip_code_index().by_name(&folded);
        assert!(hits.iter().any(|z| z.ordering_number == zip.ordering_number));
    }
}

#[test]
fn code_lookup_order_is_stable() {
    let db = common::dataset();
    let first = onrps(&db.zip_codes(Some("8000".into())).unwrap());
    for _ in 0..10 {
        assert_eq!(onrps(&db.zip_codes(Some("8000".into())).unwrap()), first);
    }
}

#[test]
fn names_match_across_spellings() {
    let db = common::dataset();
    assert_eq!(onrps(&db.city("Zürich")), vec![4384, 4386]);
    assert_eq!(onrps(&db.city("Zurigo")), vec![4384, 4386]);
    assert_eq!(onrps(&db.city("Graechen")), vec![3942]);
    assert_eq!(onrps(&db.city("grachen")), vec![3942]);
    assert_eq!(onrps(&db.city("Genf")), vec![5000]);
    assert_eq!(onrps(&db.zip_codes(Some("Berne".into())).unwrap()), vec![25]);
}

#[test]
fn cities_for_zip_code_filters_and_translates() {
    let db = common::dataset();

    assert_eq!(
        db.cities_for_zip_code(8000, None, None).unwrap(),
        vec!["Zürich", "Zürich 1 Sihlpost"]
    );
    assert_eq!(
        db.cities_for_zip_code("8000", Some(&[ZipType::DomicileAndPostal]), None)
            .unwrap(),
        vec!["Zürich"]
    );
    assert_eq!(
        db.cities_for_zip_code(8000, None, Some(Locale::It)).unwrap(),
        vec!["Zurigo", "Zürich 1 Sihlpost"]
    );
    assert!(db
        .cities_for_zip_code(8000, Some(&[ZipType::Company]), None)
        .unwrap()
        .is_empty());
    assert!(db.cities_for_zip_code(4242, None, None).unwrap().is_empty());

    let err = "xx".parse::<Locale>().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    let err = ZipType::try_from(55).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn cantons_and_communities() {
    let db = common::dataset();

    assert_eq!(db.canton("ZH").unwrap().unwrap().plate_code, 1);
    assert_eq!(db.canton("ge").unwrap().unwrap().name(), "Genève");
    assert_eq!(db.canton(2).unwrap().unwrap().abbreviation, "BE");
    assert_eq!(db.canton("23").unwrap().unwrap().abbreviation, "VS");
    assert!(db.canton("XX").unwrap().is_none());
    assert_eq!(db.cantons().len(), 4);

    assert_eq!(db.community(261).unwrap().unwrap().name(), "Zürich");
    assert_eq!(db.community("6621").unwrap().unwrap().name(), "Genève");
    assert!(db.community(1).unwrap().is_none());
    assert!(db.community("Zürich").is_err());

    let hits = db.communities(Some("geneve"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].community_number, 6621);
    assert_eq!(db.communities(Some("Genf"))[0].community_number, 6621);
    assert_eq!(db.communities(None).len(), 4);
}

#[test]
fn stats_reflect_the_fixture() {
    let stats = common::dataset().stats();
    assert_eq!(
        stats,
        DbStats {
            cantons: 4,
            communities: 4,
            zip_codes: 6
        }
    );
}
