//! Capability-level property tests, run against both variants.
//!
//! - After append(v), render lists prior elements unchanged followed by v
//! - render is idempotent
//! - both variants hold identical contents for identical inputs

use super::common::expected;
use polyseq::testing::both_kinds;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_append_extends_rendering(
        seed in prop::collection::vec(any::<i32>(), 0..30),
        value in any::<i32>(),
    ) {
        for mut seq in both_kinds(&seed) {
            let before = seq.values();
            seq.append(value);

            let mut after = before.clone();
            after.push(value);
            prop_assert_eq!(seq.values(), after.clone());
            prop_assert_eq!(seq.render(), expected(seq.as_ref(), &after));
        }
    }

    #[test]
    fn prop_render_idempotent(
        seed in prop::collection::vec(any::<i32>(), 0..30),
    ) {
        for seq in both_kinds(&seed) {
            let first = seq.render();
            let second = seq.render();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_variants_agree(
        seed in prop::collection::vec(any::<i32>(), 0..20),
        appended in prop::collection::vec(any::<i32>(), 0..40),
    ) {
        let mut handles = both_kinds(&seed);
        for seq in handles.iter_mut() {
            for &value in &appended {
                seq.append(value);
            }
        }
        prop_assert_eq!(handles[0].values(), handles[1].values());
        prop_assert_eq!(handles[0].len(), handles[1].len());
        prop_assert_eq!(handles[0].is_empty(), seed.is_empty() && appended.is_empty());
    }
}

/// Render output must never contain double spaces or a missing trailing space.
#[test]
fn render_spacing_is_regular() {
    for seq in both_kinds(&[1, 22, 333]) {
        let rendered = seq.render();
        assert!(!rendered.contains("  "), "{:?}", rendered);
        assert!(rendered.ends_with(" 333 ]"));
    }
}
