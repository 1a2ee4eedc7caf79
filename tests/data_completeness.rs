//! Data Completeness Suite
//!
//! The shipped tables must satisfy the start-up check, so every role a
//! query can produce renders in all four dialects.

use kinship_calc::tables::integrity;
use kinship_calc::{DialectId, KinshipTables};

fn tables() -> KinshipTables {
    KinshipTables::embedded().expect("embedded tables parse")
}

#[test]
fn test_integrity_report_is_clean() {
    let report = integrity::check(&tables());
    assert!(report.is_clean(), "{}\n{}", report, report.problems().join("\n"));
    assert!(report.checked_roles > 150);
}

#[test]
fn test_all_dialects_present_with_meta() {
    let tables = tables();
    let ids: Vec<_> = tables.dialects().map(|d| d.id()).collect();
    assert_eq!(ids, DialectId::ALL.to_vec());

    let expected = [
        (DialectId::Mandarin, "普通话", "Hanyu Pinyin"),
        (DialectId::Hokkien, "闽南话", "Pe̍h-ōe-jī"),
        (DialectId::Cantonese, "广东话", "Jyutping"),
        (DialectId::Teochew, "潮州话", "Peng'im"),
    ];
    for (id, native, system) in expected {
        let meta = tables.dialect(id).expect("dialect loaded").meta();
        assert_eq!(meta.native_name, native);
        assert_eq!(meta.romanization_system, system);
    }
}

#[test]
fn test_every_labelled_role_has_all_terms() {
    let tables = tables();
    for id in tables.roles().ids() {
        let Some(label) = tables.labels().label(id) else {
            continue;
        };
        assert!(!label.trim().is_empty(), "blank label for {}", tables.role_name(id));
        for dialect in tables.dialects() {
            let term = dialect.term(id);
            assert!(
                term.map_or(false, |t| !t.is_blank()),
                "{} has no {} term",
                tables.role_name(id),
                dialect.id()
            );
        }
    }
}

#[test]
fn test_reduction_rules_loaded_in_order() {
    use kinship_calc::kinship::RelationStep::*;
    let tables = tables();
    let rules = tables.normalizer().rules();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].pattern(), &[Husband, Wife]);
    assert_eq!(rules[1].pattern(), &[Wife, Husband]);
    assert!(rules.iter().all(|r| r.replacement().is_empty() && r.gender().is_none()));
}
