// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resolution, suggestion and random-pick behaviour through the public API

use flagfinder::tables::{CountryTable, CountryTables};
use flagfinder::url::DEFAULT_BASE_URL;
use flagfinder::{FlagConfig, FlagError, FlagService, Language};
use std::collections::HashSet;

const BASE: &str = "https://flags.test/h160/";

fn two_country_service() -> FlagService {
    let tables = CountryTables::new([
        CountryTable::from_entries(Language::English, [("fr", "France"), ("de", "Germany")]),
        CountryTable::from_entries(
            Language::German,
            [("fr", "Frankreich"), ("de", "Deutschland")],
        ),
    ]);
    let config = FlagConfig {
        base_url: BASE.to_string(),
        ..FlagConfig::default()
    };
    FlagService::new(config, tables)
}

#[test]
fn test_every_code_resolves_to_its_own_entry() {
    let service = FlagService::bundled();
    for table in service.tables() {
        for (code, name) in table.iter() {
            let country = service
                .get_flag(code, table.language())
                .expect("code should resolve");
            assert_eq!(country.code, code);
            assert_eq!(country.name, name);
            assert_eq!(country.url, format!("{DEFAULT_BASE_URL}{code}.webp"));
        }
    }
}

#[test]
fn test_every_name_resolves_to_a_code_with_that_name() {
    let service = FlagService::bundled();
    for table in service.tables() {
        for (_, name) in table.iter() {
            let country = service
                .get_flag(name, table.language())
                .expect("name should resolve");
            let matched = table.name(&country.code).expect("code in table");
            assert_eq!(matched.to_lowercase(), name.to_lowercase());
        }
    }
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    let service = FlagService::bundled();
    for table in service.tables() {
        for (_, name) in table.iter().take(25) {
            let shouted = format!(" {} ", name.to_uppercase());
            assert_eq!(
                service.get_flag(&shouted, table.language()).unwrap(),
                service.get_flag(name, table.language()).unwrap(),
                "{shouted:?} should resolve like {name:?}"
            );
        }
    }
}

#[test]
fn test_name_in_one_language_is_named_in_another() {
    let service = FlagService::bundled();
    let country = service.get_flag("Österreich", Language::ENGLISH).unwrap();
    assert_eq!(country.code, "at");
    assert_eq!(country.name, "Austria");

    let country = service.get_flag("united kingdom", Language::GERMAN).unwrap();
    assert_eq!(country.code, "gb");
    assert_eq!(country.name, "Vereinigtes Königreich");
}

#[test]
fn test_code_wins_over_name_fragment() {
    // "in" is India's code and also a fragment of many names.
    let service = FlagService::bundled();
    let country = service.get_flag("IN", Language::ENGLISH).unwrap();
    assert_eq!(country.code, "in");
    assert_eq!(country.name, "India");
}

#[test]
fn test_code_wins_over_exact_name_of_another_entry() {
    // "fr" is France's code and, exactly, the English name of another entry.
    let tables = CountryTables::new([
        CountryTable::from_entries(Language::English, [("xa", "FR"), ("fr", "France")]),
        CountryTable::from_entries(Language::German, [("xa", "Fr"), ("fr", "Frankreich")]),
    ]);
    let service = FlagService::new(FlagConfig::default(), tables);

    let country = service.get_flag(" FR ", Language::ENGLISH).unwrap();
    assert_eq!(country.code, "fr");
    assert_eq!(country.name, "France");
    assert_eq!(
        service.get_flag_url("fr").unwrap(),
        format!("{DEFAULT_BASE_URL}fr.webp")
    );

    // The German table carries the code too, so the code path wins there as well.
    let country = service.get_flag("Fr", Language::GERMAN).unwrap();
    assert_eq!(country.code, "fr");
    assert_eq!(country.name, "Frankreich");
}

#[test]
fn test_blank_identifier_is_not_found_with_every_name() {
    let service = two_country_service();
    for input in ["   ", ""] {
        let err = service.get_flag(input, Language::ENGLISH).unwrap_err();
        assert_eq!(
            err,
            FlagError::CountryNotFound {
                identifier: input.to_string(),
                suggestion: Some(
                    "Did you mean France, Germany, Frankreich, Deutschland?".to_string()
                ),
            }
        );
        assert!(matches!(
            service.get_flag_url(input),
            Err(FlagError::CountryNotFound { .. })
        ));
    }
}

#[test]
fn test_digits_are_rejected_before_lookup() {
    let service = two_country_service();
    for input in ["fr4", "4", "de 1", "Germany2"] {
        let err = service.get_flag(input, Language::ENGLISH).unwrap_err();
        assert!(
            matches!(err, FlagError::InvalidIdentifier { .. }),
            "{input:?} should be invalid, got {err:?}"
        );
        assert!(matches!(
            service.get_flag_url(input),
            Err(FlagError::InvalidIdentifier { .. })
        ));
    }
}

#[test]
fn test_worked_example() {
    let service = two_country_service();

    let germany = service.get_flag("Germany", Language::ENGLISH).unwrap();
    assert_eq!(germany.name, "Germany");
    assert_eq!(germany.code, "de");
    assert_eq!(germany.url, format!("{BASE}de.webp"));

    let err = service.get_flag("xx", Language::ENGLISH).unwrap_err();
    assert!(err.to_string().contains("Invalid country: xx"));
    assert_eq!(err.suggestion(), None);

    let err = service.get_flag("ger", Language::ENGLISH).unwrap_err();
    assert!(err.suggestion().unwrap().contains("Germany"));
}

#[test]
fn test_not_found_suggestion_lists_exact_substring_matches() {
    let service = two_country_service();
    let err = service.get_flag(" an ", Language::ENGLISH).unwrap_err();
    match err {
        FlagError::CountryNotFound {
            identifier,
            suggestion,
        } => {
            assert_eq!(identifier, " an ");
            assert_eq!(
                suggestion.as_deref(),
                Some("Did you mean France, Germany, Frankreich, Deutschland?")
            );
        }
        other => panic!("expected CountryNotFound, got {other:?}"),
    }

    let err = service
        .get_flag("nonexistentxyz", Language::ENGLISH)
        .unwrap_err();
    assert_eq!(
        err,
        FlagError::CountryNotFound {
            identifier: "nonexistentxyz".to_string(),
            suggestion: None,
        }
    );
}

#[test]
fn test_flag_url_for_every_english_code() {
    let service = FlagService::bundled();
    let english = service.tables().get(Language::ENGLISH).unwrap();
    for code in english.codes() {
        assert_eq!(
            service.get_flag_url(code).unwrap(),
            format!("{DEFAULT_BASE_URL}{code}.webp")
        );
    }
}

#[test]
fn test_flag_url_accepts_german_names() {
    let service = FlagService::bundled();
    assert_eq!(
        service.get_flag_url("  Schweiz").unwrap(),
        format!("{DEFAULT_BASE_URL}ch.webp")
    );
    let err = service.get_flag_url("Schweden-Land").unwrap_err();
    assert!(err.suggestion().is_none());
}

#[test]
fn test_random_flag_only_returns_table_codes() {
    let service = FlagService::bundled();
    for language in [Language::ENGLISH, Language::GERMAN] {
        let table = service.tables().get(language).unwrap();
        for _ in 0..100 {
            let country = service.get_random_flag(language).unwrap();
            assert_eq!(table.name(&country.code), Some(country.name.as_str()));
            assert_eq!(country.url, format!("{DEFAULT_BASE_URL}{}.webp", country.code));
        }
    }
}

#[test]
fn test_random_flag_reaches_every_code() {
    let service = two_country_service();
    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.insert(service.get_random_flag(Language::GERMAN).unwrap().code);
    }
    assert_eq!(seen, HashSet::from(["fr".to_string(), "de".to_string()]));
}

#[test]
fn test_random_flag_errors() {
    let service = two_country_service();
    assert_eq!(
        service.get_random_flag(Language::Spanish).unwrap_err(),
        FlagError::UnknownLanguage(Language::Spanish)
    );

    let empty = FlagService::new(
        FlagConfig::default(),
        CountryTables::new([CountryTable::new(Language::Italian)]),
    );
    assert_eq!(
        empty.get_random_flag(Language::Italian).unwrap_err(),
        FlagError::EmptyTable(Language::Italian)
    );
}

#[test]
fn test_process_wide_functions_use_bundled_tables() {
    let country = flagfinder::get_flag("Frankreich", Language::ENGLISH).unwrap();
    assert_eq!(country.name, "France");
    assert!(flagfinder::get_flag_url("fr").unwrap().ends_with("fr.webp"));
    assert!(flagfinder::get_random_flag(Language::GERMAN).is_ok());
}
