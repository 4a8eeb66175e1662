#![allow(dead_code)]

use swissmatch_core::prelude::*;

pub fn canton(tag: &str, plate: u16, names: Names) -> Canton {
    Canton {
        abbreviation: tag.into(),
        plate_code: plate,
        names,
    }
}

pub fn community(number: u32, canton: &str, names: Names) -> Community {
    Community {
        community_number: number,
        names,
        canton: canton.into(),
        agglomeration: None,
    }
}

pub fn zip(
    onrp: u32,
    code: u16,
    add_on: u8,
    zip_type: ZipType,
    language: Language,
    canton: &str,
    names: Names,
) -> ZipCode {
    ZipCode {
        ordering_number: onrp,
        zip_type,
        code,
        add_on,
        names,
        language,
        language_alternative: None,
        canton: canton.into(),
        delivery_by: None,
        largest_community: None,
        valid_from: Some("1988-01-01".into()),
    }
}

pub fn records() -> Records {
    Records {
        cantons: vec![
            canton(
                "ZH",
                1,
                Names::native("Zürich").with(Locale::Fr, "Zurich").with(Locale::It, "Zurigo"),
            ),
            canton(
                "BE",
                2,
                Names::native("Bern").with(Locale::Fr, "Berne").with(Locale::It, "Berna"),
            ),
            canton("VS", 23, Names::native("Wallis").with(Locale::Fr, "Valais")),
            canton("GE", 25, Names::native("Genève").with(Locale::De, "Genf")),
        ],
        communities: vec![
            community(261, "ZH", Names::native("Zürich")),
            community(351, "BE", Names::native("Bern").with(Locale::Fr, "Berne")),
            community(6285, "VS", Names::native("Grächen")),
            community(6621, "GE", Names::native("Genève").with(Locale::De, "Genf")),
        ],
        zip_codes: vec![
            zip(
                4384,
                8000,
                0,
                ZipType::DomicileAndPostal,
                Language::German,
                "ZH",
                Names::native("Zürich")
                    .with(Locale::Fr, "Zurich")
                    .with(Locale::It, "Zurigo"),
            ),
            zip(
                4385,
                8000,
                2,
                ZipType::PostalOnly,
                Language::German,
                "ZH",
                Names::native("Zürich 1 Sihlpost"),
            ),
            zip(
                4386,
                8001,
                0,
                ZipType::DomicileOnly,
                Language::German,
                "ZH",
                Names::native("Zürich")
                    .with(Locale::Fr, "Zurich")
                    .with(Locale::It, "Zurigo"),
            ),
            zip(
                25,
                3000,
                0,
                ZipType::DomicileAndPostal,
                Language::German,
                "BE",
                Names::native("Bern")
                    .with(Locale::Fr, "Berne")
                    .with(Locale::It, "Berna"),
            ),
            zip(
                3942,
                3925,
                0,
                ZipType::DomicileAndPostal,
                Language::German,
                "VS",
                Names::native("Grächen"),
            ),
            zip(
                5000,
                1200,
                0,
                ZipType::DomicileAndPostal,
                Language::French,
                "GE",
                Names::native("Genève")
                    .with(Locale::De, "Genf")
                    .with(Locale::It, "Ginevra"),
            ),
        ],
    }
}

pub fn dataset() -> Dataset {
    Dataset::from_records(records()).expect("fixture builds")
}
