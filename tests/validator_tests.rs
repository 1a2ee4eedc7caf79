//! Next-Step Validation
//!
//! Offered steps for known chains, and soundness: a step that is not
//! offered never leads to a resolvable chain.

use std::collections::BTreeSet;

use kinship_calc::kinship::RelationStep::*;
use kinship_calc::{default_engine, Gender, KinshipEngine, RelationStep};

fn engine() -> &'static KinshipEngine {
    default_engine().expect("embedded tables load cleanly")
}

fn steps(chain: &[RelationStep], gender: Gender) -> Vec<RelationStep> {
    engine().valid_next_steps(chain, gender).into_iter().collect()
}

#[test]
fn test_every_first_step_is_offered() {
    for g in Gender::ALL {
        assert_eq!(steps(&[], g), RelationStep::ALL.to_vec());
    }
}

#[test]
fn test_known_frontiers() {
    assert_eq!(
        steps(&[Father], Gender::Male),
        vec![Father, Mother, Husband, Wife, OlderBrother, YoungerBrother, OlderSister, YoungerSister]
    );
    assert_eq!(
        steps(&[Husband], Gender::Female),
        vec![Father, Mother, OlderBrother, YoungerBrother, OlderSister, YoungerSister]
    );
    assert_eq!(steps(&[Wife, OlderSister], Gender::Male), vec![Husband, Wife, Son, Daughter]);
    assert_eq!(
        steps(&[Son, Wife], Gender::Male),
        vec![Father, Mother, OlderBrother, YoungerBrother, OlderSister, YoungerSister]
    );
    assert_eq!(steps(&[Father, OlderBrother, Son], Gender::Male), RelationStep::ALL.to_vec());
}

#[test]
fn test_dead_ends() {
    assert!(steps(&[Father; 4], Gender::Male).is_empty());
    assert!(steps(&[Son, Wife, Father], Gender::Male).is_empty());
}

#[test]
fn test_cancelled_chain_offers_fresh_start() {
    // husband.wife is the subject again
    assert_eq!(steps(&[Husband, Wife], Gender::Male), RelationStep::ALL.to_vec());
}

/// Every irreducible completion of `chain` with up to `extra` more steps
/// fails to resolve.
fn assert_no_completion(chain: &mut Vec<RelationStep>, extra: usize, gender: Gender) {
    let e = engine();
    if e.normalize(chain, gender).len() == chain.len() {
        assert!(
            e.resolve_id(chain, gender).is_none(),
            "rejected prefix still resolves: {:?} ({})",
            chain,
            gender
        );
    }
    if extra == 0 {
        return;
    }
    for step in RelationStep::ALL {
        chain.push(step);
        assert_no_completion(chain, extra - 1, gender);
        chain.pop();
    }
}

#[test]
fn test_rejected_steps_never_resolve() {
    for gender in Gender::ALL {
        let mut frontier: Vec<Vec<RelationStep>> = vec![Vec::new()];
        for _ in 0..3 {
            let mut next = Vec::new();
            for chain in &frontier {
                let offered: BTreeSet<RelationStep> = engine().valid_next_steps(chain, gender);
                for step in RelationStep::ALL {
                    let mut extended = chain.clone();
                    extended.push(step);
                    if offered.contains(&step) {
                        next.push(extended);
                    } else {
                        assert_no_completion(&mut extended, 2, gender);
                    }
                }
            }
            frontier = next;
        }
    }
}
