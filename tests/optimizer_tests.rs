//! End-to-end optimizer properties, solved with the real HiGHS backend.
//!
//! Every scenario here is small enough to solve in milliseconds, so there is
//! no solver mocking: what these tests prove is what the binary ships.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use gaffer::domain::error::NoSolutionError;
use gaffer::domain::solver::HiGHSSolver;
use gaffer::domain::{
    Player, PlayerId, PlayerPool, Position, Roster, SquadRules, ValueModel,
};
use gaffer::error::Error;
use gaffer::optimizer::SquadOptimizer;
use gaffer::source::Adjustments;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_file(prefix: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("gaffer-{prefix}-{nanos}-{suffix}.csv"));
    fs::write(&path, contents).expect("write temp file");
    path
}

fn player(id: &str, position: Position, price: Decimal, points: Decimal) -> Player {
    Player::try_new(
        PlayerId::new(id),
        id,
        "Testham",
        position,
        price,
        points,
        Decimal::ONE,
        None,
    )
    .expect("valid player")
}

/// 3 GK / 6 DEF / 6 MID / 4 FWD with strictly descending value per position,
/// comfortably affordable under the default budget of 100.
fn balanced_pool() -> PlayerPool {
    let mut players = Vec::new();
    for i in 0..3u32 {
        let points = Decimal::from(120 - 10 * i);
        players.push(player(
            &format!("gk-{i}"),
            Position::Goalkeeper,
            dec!(4.5),
            points,
        ));
    }
    for i in 0..6u32 {
        let points = Decimal::from(150 - 10 * i);
        players.push(player(&format!("def-{i}"), Position::Defender, dec!(5.0), points));
    }
    for i in 0..6u32 {
        let points = Decimal::from(180 - 10 * i);
        players.push(player(
            &format!("mid-{i}"),
            Position::Midfielder,
            dec!(6.0),
            points,
        ));
    }
    for i in 0..4u32 {
        let points = Decimal::from(210 - 10 * i);
        players.push(player(&format!("fwd-{i}"), Position::Forward, dec!(7.5), points));
    }
    PlayerPool::from_players(players).expect("valid pool")
}

fn solve_with(pool: &PlayerPool, rules: SquadRules) -> Roster {
    let optimizer = SquadOptimizer::new(rules, ValueModel::default()).expect("valid rules");
    optimizer
        .optimize(pool, &HiGHSSolver::new())
        .expect("feasible scenario")
}

fn solve(pool: &PlayerPool) -> Roster {
    solve_with(pool, SquadRules::default())
}

#[test]
fn solved_roster_has_squad_shape() {
    let roster = solve(&balanced_pool());

    assert_eq!(roster.slots().len(), 15);
    assert_eq!(roster.starters().count(), 11);
    assert_eq!(roster.bench().count(), 4);

    let captains: Vec<_> = roster.slots().iter().filter(|s| s.is_captain()).collect();
    assert_eq!(captains.len(), 1);
    assert!(captains[0].is_starter(), "captain must be in the lineup");
    assert_eq!(captains[0].player().id(), roster.captain());
}

#[test]
fn composition_matches_targets() {
    let roster = solve(&balanced_pool());

    assert_eq!(roster.selected_at(Position::Goalkeeper), 2);
    assert_eq!(roster.selected_at(Position::Defender), 5);
    assert_eq!(roster.selected_at(Position::Midfielder), 5);
    assert_eq!(roster.selected_at(Position::Forward), 3);
}

#[test]
fn formation_stays_within_bounds() {
    let rules = SquadRules::default();
    let roster = solve_with(&balanced_pool(), rules.clone());

    assert_eq!(roster.starters_at(Position::Goalkeeper), 1);

    let mut total = roster.starters_at(Position::Goalkeeper);
    for position in Position::OUTFIELD {
        let count = roster.starters_at(position);
        let range = rules.formation.range(position).expect("outfield range");
        assert!(
            count >= range.min && count <= range.max,
            "{} starters at {position} outside {}..={}",
            count,
            range.min,
            range.max
        );
        total += count;
    }
    assert_eq!(total, 11);
}

#[test]
fn cost_stays_within_budget() {
    let roster = solve(&balanced_pool());

    assert!(roster.total_cost() <= roster.budget_cap());
    assert_eq!(roster.headroom(), roster.budget_cap() - roster.total_cost());
    assert!(roster.headroom() >= Decimal::ZERO);
}

#[test]
fn captain_is_best_value_starter() {
    let roster = solve(&balanced_pool());

    // fwd-0 carries the highest projected value in the pool, and doubling
    // the best starter is always optimal.
    assert_eq!(roster.captain().as_str(), "fwd-0");
}

#[test]
fn raising_a_value_never_lowers_the_objective() {
    let baseline = solve(&balanced_pool()).projected_points();

    // Same pool, one midfielder boosted.
    let mut players: Vec<Player> = balanced_pool().players().to_vec();
    let boosted = player("mid-0", Position::Midfielder, dec!(6.0), dec!(230));
    players.retain(|p| p.id().as_str() != "mid-0");
    players.push(boosted);
    let pool = PlayerPool::from_players(players).expect("valid pool");

    let improved = solve(&pool).projected_points();
    assert!(
        improved >= baseline,
        "boosting a player lowered the optimum: {improved} < {baseline}"
    );
}

#[test]
fn budget_below_cheapest_squad_reports_no_solution() {
    // Cheapest legal squad in the balanced pool costs 86.5.
    let rules = SquadRules {
        budget: dec!(50),
        ..SquadRules::default()
    };
    let optimizer = SquadOptimizer::new(rules, ValueModel::default()).expect("valid rules");

    let result = optimizer.optimize(&balanced_pool(), &HiGHSSolver::new());

    match result {
        Err(Error::NoSolution(NoSolutionError {
            pool_size,
            budget_cap,
        })) => {
            assert_eq!(pool_size, 19);
            assert_eq!(budget_cap, dec!(50));
        }
        other => panic!("expected NoSolutionError, got {other:?}"),
    }
}

#[test]
fn zero_budget_reports_no_solution() {
    let rules = SquadRules {
        budget: Decimal::ZERO,
        ..SquadRules::default()
    };
    let optimizer = SquadOptimizer::new(rules, ValueModel::default()).expect("valid rules");

    let result = optimizer.optimize(&balanced_pool(), &HiGHSSolver::new());

    assert!(matches!(
        result,
        Err(Error::NoSolution(NoSolutionError {
            budget_cap: cap,
            ..
        })) if cap == Decimal::ZERO
    ));
}

#[test]
fn wide_pool_selects_exact_composition() {
    // 20 keepers, 30 defenders, 30 midfielders, 20 forwards.
    let mut players = Vec::new();
    for (count, position, price) in [
        (20u32, Position::Goalkeeper, dec!(4.0)),
        (30, Position::Defender, dec!(4.5)),
        (30, Position::Midfielder, dec!(5.0)),
        (20, Position::Forward, dec!(5.5)),
    ] {
        for i in 0..count {
            let points = Decimal::from(200 - i);
            players.push(player(
                &format!("{}-{i}", position.code()),
                position,
                price,
                points,
            ));
        }
    }
    let pool = PlayerPool::from_players(players).expect("valid pool");

    let roster = solve(&pool);

    assert_eq!(roster.selected_at(Position::Goalkeeper), 2);
    assert_eq!(roster.selected_at(Position::Defender), 5);
    assert_eq!(roster.selected_at(Position::Midfielder), 5);
    assert_eq!(roster.selected_at(Position::Forward), 3);
    assert_eq!(roster.slots().len(), 15);
}

#[test]
fn unavailable_player_is_never_captain() {
    // An injured forward projects more raw points than anyone, but
    // availability 0 zeroes his expected value.
    let mut players: Vec<Player> = balanced_pool().players().to_vec();
    players.push(
        Player::try_new(
            PlayerId::new("crocked"),
            "crocked",
            "Testham",
            Position::Forward,
            dec!(7.5),
            dec!(500),
            Decimal::ZERO,
            None,
        )
        .expect("valid player"),
    );
    let pool = PlayerPool::from_players(players).expect("valid pool");

    let roster = solve(&pool);

    assert_ne!(roster.captain().as_str(), "crocked");
}

#[test]
fn zeroed_availability_moves_the_captaincy() {
    let pool = balanced_pool();
    let first = solve(&pool);
    let first_captain = pool
        .get(first.captain())
        .expect("captain in pool")
        .name()
        .to_string();

    let path = write_temp_file(
        "adjustments",
        &format!("name,availability\n{first_captain},0\n"),
    );
    let adjustments = Adjustments::load(&path).expect("load adjustments");
    let (adjusted, applied) = adjustments.apply(&pool).expect("apply adjustments");
    let _ = fs::remove_file(&path);

    assert_eq!(applied, 1);

    let second = solve(&adjusted);
    assert_ne!(
        second.captain(),
        first.captain(),
        "captaincy should move off a zeroed player"
    );
}

#[test]
fn time_limited_solver_still_solves() {
    let roster_limited = solve_with_solver(&balanced_pool(), HiGHSSolver::with_time_limit(30.0));
    let roster_free = solve(&balanced_pool());

    assert_eq!(
        roster_limited.projected_points(),
        roster_free.projected_points()
    );
}

fn solve_with_solver(pool: &PlayerPool, solver: HiGHSSolver) -> Roster {
    let optimizer =
        SquadOptimizer::new(SquadRules::default(), ValueModel::default()).expect("valid rules");
    optimizer.optimize(pool, &solver).expect("feasible scenario")
}
