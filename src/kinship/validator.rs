//! Step Validator
//!
//! Reports which next steps can still lead somewhere, as a one-step frontier
//! over the same tables the resolver walks. A step is offered when:
//!
//! - the extended chain is itself a resolution entry,
//! - the extended chain is a strict prefix of some entry,
//! - the current chain resolves and its role continues with the step, or
//! - the current chain does not resolve but the extended chain does.
//!
//! The first two look at the chain as given; the last two go through the
//! normalizer and resolver.

use std::collections::BTreeSet;

use crate::tables::{KinshipTables, RoleId};

use super::normalizer::Normalizer;
use super::resolver::ChainResolver;
use super::step::{Chain, Gender, RelationStep};

#[derive(Debug, Clone, Copy)]
pub struct StepValidator<'a> {
    tables: &'a KinshipTables,
    normalizer: &'a Normalizer,
    resolver: ChainResolver<'a>,
}

impl<'a> StepValidator<'a> {
    pub fn new(tables: &'a KinshipTables, resolver: ChainResolver<'a>) -> Self {
        Self {
            tables,
            normalizer: tables.normalizer(),
            resolver,
        }
    }

    fn resolves(&self, chain: &[RelationStep], gender: Gender) -> Option<RoleId> {
        let normalized = self.normalizer.normalize_for(chain, gender);
        self.resolver.resolve(&normalized, gender)
    }

    pub fn valid_next_steps(&self, chain: &[RelationStep], gender: Gender) -> BTreeSet<RelationStep> {
        let resolution = self.tables.resolution();
        let current = if chain.is_empty() {
            None
        } else {
            self.resolves(chain, gender)
        };

        let mut candidate: Chain = Vec::with_capacity(chain.len() + 1);
        candidate.extend_from_slice(chain);
        candidate.push(RelationStep::Father);
        let last = chain.len();

        RelationStep::ALL
            .into_iter()
            .filter(|&step| {
                candidate[last] = step;
                if resolution.lookup(&candidate, gender).is_some() || resolution.is_strict_prefix(&candidate) {
                    return true;
                }
                match current {
                    Some(role) => self.tables.continuation().next(role, step).is_some(),
                    None => !chain.is_empty() && self.resolves(&candidate, gender).is_some(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TableSource;
    use RelationStep::*;

    fn fixture() -> KinshipTables {
        TableSource::from_yaml(
            r#"
entries:
  - { chain: [father], role: father }
  - { chain: [father, older_brother], role: fathers_older_brother }
  - { chain: [husband], role: husband }
  - { chain: [husband, mother, father], gender: female, role: husbands_grandfather }
  - { chain: [wife], role: wife }
"#,
            r#"
father:
  mother: paternal_grandmother
wife:
  son: son
"#,
            "",
            "",
            "rules:\n  - { pattern: [husband, wife], replacement: [] }\n",
            &[],
        )
        .unwrap()
        .build()
        .unwrap()
    }

    fn steps(t: &KinshipTables, chain: &[RelationStep], g: Gender) -> Vec<RelationStep> {
        StepValidator::new(t, ChainResolver::new(t))
            .valid_next_steps(chain, g)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_empty_chain_offers_first_steps() {
        let t = fixture();
        assert_eq!(steps(&t, &[], Gender::Male), vec![Father, Husband, Wife]);
    }

    #[test]
    fn test_entries_and_continuations() {
        let t = fixture();
        // older_brother by entry, mother by continuation
        assert_eq!(steps(&t, &[Father], Gender::Male), vec![Mother, OlderBrother]);
    }

    #[test]
    fn test_prefix_counts_any_gender() {
        let t = fixture();
        // husband.mother only leads to an entry for female subjects
        assert_eq!(steps(&t, &[Husband], Gender::Male), vec![Mother]);
        assert_eq!(steps(&t, &[Husband, Mother], Gender::Female), vec![Father]);
        assert_eq!(steps(&t, &[Husband, Mother], Gender::Male), Vec::<RelationStep>::new());
    }

    #[test]
    fn test_unresolved_chain_falls_back_to_full_resolve() {
        let t = fixture();
        // husband.wife normalizes away, so each extension resolves as a first step
        assert_eq!(steps(&t, &[Husband, Wife], Gender::Male), vec![Father, Husband, Wife]);
    }

    #[test]
    fn test_dead_end() {
        let t = fixture();
        assert!(steps(&t, &[Father, OlderBrother], Gender::Male).is_empty());
    }
}
