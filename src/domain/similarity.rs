//! Roster similarity scoring.
//!
//! Two rosters are compared as sparse vectors over player ids, weighted by
//! inverse popularity: sharing a player nobody else fields says far more
//! about two squads than sharing the season's obvious pick. The score is the
//! cosine of the two vectors, in [0, 1].
//!
//! Weights need logarithms, so this module computes in `f64` rather than
//! `Decimal`.

use std::collections::{BTreeSet, HashSet};

use rust_decimal::prelude::ToPrimitive;

use crate::domain::ids::PlayerId;
use crate::domain::player::PlayerPool;

/// Ownership fractions are clamped to this range before weighting, keeping
/// `ln(1/ownership)` finite and nonzero.
const MIN_OWNERSHIP: f64 = 0.001;
const MAX_OWNERSHIP: f64 = 0.999;

/// Inverse-popularity weight for one player.
///
/// Players missing from the pool, or present without ownership data, weigh
/// a neutral 1.0 so the score degrades toward plain overlap instead of
/// collapsing when ownership data is absent.
fn weight(id: &PlayerId, pool: &PlayerPool) -> f64 {
    let Some(player) = pool.get(id) else {
        return 1.0;
    };
    match player.ownership() {
        Some(ownership) => {
            let f = ownership
                .to_f64()
                .unwrap_or(1.0)
                .clamp(MIN_OWNERSHIP, MAX_OWNERSHIP);
            -f.ln()
        }
        None => 1.0,
    }
}

/// Cosine similarity of two rosters under inverse-popularity weighting.
///
/// Returns a score in [0, 1]: 1.0 for identical rosters, 0.0 for disjoint
/// ones. Symmetric in its arguments. An empty roster scores 0.0 against
/// anything.
#[must_use]
pub fn roster_similarity(a: &[PlayerId], b: &[PlayerId], pool: &PlayerPool) -> f64 {
    let set_a: HashSet<&PlayerId> = a.iter().collect();
    let set_b: HashSet<&PlayerId> = b.iter().collect();

    let union: BTreeSet<&PlayerId> = set_a.union(&set_b).copied().collect();

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for id in union {
        let w = weight(id, pool);
        let w2 = w * w;
        let in_a = set_a.contains(id);
        let in_b = set_b.contains(id);
        if in_a {
            norm_a += w2;
        }
        if in_b {
            norm_b += w2;
        }
        if in_a && in_b {
            dot += w2;
        }
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Ids present in both rosters, sorted.
#[must_use]
pub fn shared_ids(a: &[PlayerId], b: &[PlayerId]) -> Vec<PlayerId> {
    let set_b: HashSet<&PlayerId> = b.iter().collect();
    let mut shared: Vec<PlayerId> = a
        .iter()
        .filter(|id| set_b.contains(id))
        .cloned()
        .collect();
    shared.sort();
    shared.dedup();
    shared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Player;
    use crate::domain::position::Position;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn pool_with_ownership(entries: &[(&str, Option<Decimal>)]) -> PlayerPool {
        let players = entries
            .iter()
            .map(|(name, ownership)| {
                Player::try_new(
                    PlayerId::from_name(name),
                    *name,
                    "Testham United",
                    Position::Midfielder,
                    dec!(5),
                    dec!(100),
                    Decimal::ONE,
                    *ownership,
                )
                .expect("valid test player")
            })
            .collect();
        PlayerPool::from_players(players).expect("unique test pool")
    }

    fn ids(names: &[&str]) -> Vec<PlayerId> {
        names.iter().map(|n| PlayerId::from_name(n)).collect()
    }

    #[test]
    fn identical_rosters_score_one() {
        let pool = pool_with_ownership(&[
            ("A", Some(dec!(0.4))),
            ("B", Some(dec!(0.1))),
            ("C", None),
        ]);
        let roster = ids(&["A", "B", "C"]);

        let score = roster_similarity(&roster, &roster, &pool);
        assert!((score - 1.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn disjoint_rosters_score_zero() {
        let pool = pool_with_ownership(&[
            ("A", Some(dec!(0.4))),
            ("B", Some(dec!(0.1))),
            ("C", Some(dec!(0.2))),
            ("D", Some(dec!(0.3))),
        ]);

        let score = roster_similarity(&ids(&["A", "B"]), &ids(&["C", "D"]), &pool);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let pool = pool_with_ownership(&[
            ("A", Some(dec!(0.4))),
            ("B", Some(dec!(0.1))),
            ("C", Some(dec!(0.2))),
        ]);
        let x = ids(&["A", "B"]);
        let y = ids(&["B", "C"]);

        let xy = roster_similarity(&x, &y, &pool);
        let yx = roster_similarity(&y, &x, &pool);
        assert!((xy - yx).abs() < 1e-12);
        assert!(xy > 0.0 && xy < 1.0);
    }

    #[test]
    fn sharing_a_rare_player_scores_higher_than_a_common_one() {
        let pool = pool_with_ownership(&[
            ("Rare", Some(dec!(0.01))),
            ("Common", Some(dec!(0.9))),
            ("X1", Some(dec!(0.5))),
            ("X2", Some(dec!(0.5))),
            ("Y1", Some(dec!(0.5))),
            ("Y2", Some(dec!(0.5))),
        ]);

        let rare_shared = roster_similarity(
            &ids(&["Rare", "X1"]),
            &ids(&["Rare", "Y1"]),
            &pool,
        );
        let common_shared = roster_similarity(
            &ids(&["Common", "X2"]),
            &ids(&["Common", "Y2"]),
            &pool,
        );

        assert!(
            rare_shared > common_shared,
            "rare {rare_shared} vs common {common_shared}"
        );
    }

    #[test]
    fn empty_roster_scores_zero() {
        let pool = pool_with_ownership(&[("A", Some(dec!(0.4)))]);
        assert_eq!(roster_similarity(&[], &ids(&["A"]), &pool), 0.0);
        assert_eq!(roster_similarity(&[], &[], &pool), 0.0);
    }

    #[test]
    fn unknown_players_get_neutral_weight() {
        // Pool knows neither roster; score degrades to plain overlap.
        let pool = pool_with_ownership(&[]);
        let score = roster_similarity(&ids(&["A", "B"]), &ids(&["A", "C"]), &pool);
        assert!((score - 0.5).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn shared_ids_sorted_and_deduped() {
        let shared = shared_ids(&ids(&["B", "A", "C"]), &ids(&["C", "A", "D"]));
        assert_eq!(shared, ids(&["A", "C"]));
    }
}
