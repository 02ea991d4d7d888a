use std::collections::HashSet;

use algotour::sections::{SECTIONS, find};

#[test]
fn every_section_runs_clean() {
    for s in SECTIONS {
        if let Err(e) = (s.run)() {
            panic!("section '{}' failed: {e:?}", s.name);
        }
    }
}

#[test]
fn registry_names_are_unique() {
    let names: HashSet<&str> = SECTIONS.iter().map(|s| s.name).collect();
    assert_eq!(names.len(), SECTIONS.len());
}

#[test]
fn every_name_resolves_back_to_its_section() {
    for s in SECTIONS {
        let found = find(s.name).expect("registered name must resolve");
        assert_eq!(found.name, s.name);
    }
}

#[test]
fn unknown_names_do_not_resolve() {
    assert!(find("no_such_section").is_none());
    assert!(find("").is_none());
}

#[test]
fn summaries_are_present() {
    for s in SECTIONS {
        assert!(!s.summary.is_empty(), "section '{}' has no summary", s.name);
    }
}
