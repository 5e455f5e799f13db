//! Exhaustive route search
//!
//! Levels are tiny (a handful of pads, each usable once), so a plain
//! depth-first search over legal hops is enough to find the best route.
//! The search is exponential in the pad count; on large custom levels it stops
//! after [`SEARCH_BUDGET`] landings and returns the best route seen so far.

use serde::Serialize;

use super::level::Level;
use super::state::{GameState, GameStatus};
use super::step::{StepOutcome, land_jump, request_jump, validate_jump};

/// Maximum hops simulated by one search
pub const SEARCH_BUDGET: usize = 200_000;

/// A winning sequence of hops
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Pads to hop to, in order (start pad excluded)
    pub route: Vec<u32>,
    /// Score on reaching the finish
    pub score: i32,
}

/// Best winning route for a fresh attempt at `level`
pub fn solve_level(level: &Level) -> Option<Solution> {
    solve(&GameState::new(level, 0))
}

/// Best winning route from `state`, or `None` if the level can no longer be won
///
/// Routes that would sink the frog are pruned. Among winning routes the highest
/// final score wins; ties keep the first route found in pad order.
pub fn solve(state: &GameState) -> Option<Solution> {
    solve_within(state, SEARCH_BUDGET)
}

/// [`solve`] with an explicit cap on simulated hops
pub fn solve_within(state: &GameState, budget: usize) -> Option<Solution> {
    if state.status == GameStatus::Won {
        return Some(Solution {
            route: Vec::new(),
            score: state.score,
        });
    }
    if !state.is_playing() || state.hop.is_some() {
        return None;
    }

    let mut search = Search {
        best: None,
        route: Vec::new(),
        budget,
    };
    search.run(state);
    if search.budget == 0 {
        log::debug!("Route search budget of {} hops exhausted", budget);
    }
    search.best
}

struct Search {
    best: Option<Solution>,
    route: Vec<u32>,
    /// Hops left to simulate
    budget: usize,
}

impl Search {
    fn run(&mut self, state: &GameState) {
        for pad in state.pads.iter().map(|p| p.id) {
            if self.budget == 0 {
                return;
            }
            if validate_jump(state, pad).is_err() {
                continue;
            }
            self.budget -= 1;

            let mut next = state.clone();
            let StepOutcome::HopStarted(hop) = request_jump(&mut next, pad) else {
                continue;
            };
            land_jump(&mut next, hop.ticket);

            self.route.push(pad);
            match next.status {
                GameStatus::Won => {
                    if self.best.as_ref().is_none_or(|b| next.score > b.score) {
                        self.best = Some(Solution {
                            route: self.route.clone(),
                            score: next.score,
                        });
                    }
                }
                GameStatus::Playing => self.run(&next),
                GameStatus::Lost => {}
            }
            self.route.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameEvent, LevelCatalog, LilyPad, step};

    #[test]
    fn test_level_one_best_route() {
        let catalog = LevelCatalog::builtin();
        let solution = solve_level(catalog.get(0).unwrap()).unwrap();
        assert_eq!(solution.route, vec![1, 2, 4, 5]);
        assert_eq!(solution.score, 12);
    }

    #[test]
    fn test_level_three_best_route() {
        let catalog = LevelCatalog::builtin();
        let solution = solve_level(catalog.get(2).unwrap()).unwrap();
        assert_eq!(solution.score, 27);
        assert_eq!(solution.route.last(), Some(&9));
    }

    #[test]
    fn test_level_two_cannot_be_won() {
        // Only pad 1 (-3) is within reach of the start pad
        let catalog = LevelCatalog::builtin();
        assert_eq!(solve_level(catalog.get(1).unwrap()), None);
    }

    #[test]
    fn test_route_replays_to_a_win() {
        let catalog = LevelCatalog::builtin();
        for index in [0, 2] {
            let level = catalog.get(index).unwrap();
            let solution = solve_level(level).unwrap();

            let mut state = GameState::new(level, index);
            for &pad in &solution.route {
                let StepOutcome::HopStarted(hop) =
                    step(&mut state, &catalog, GameEvent::RequestJump { pad })
                else {
                    panic!("route hop to {} rejected", pad);
                };
                step(&mut state, &catalog, GameEvent::LandJump { ticket: hop.ticket });
            }
            assert_eq!(state.status, GameStatus::Won);
            assert_eq!(state.score, solution.score);
        }
    }

    #[test]
    fn test_solve_mid_game() {
        let catalog = LevelCatalog::builtin();
        let level = catalog.get(0).unwrap();
        let mut state = GameState::new(level, 0);
        for pad in [1, 2] {
            let StepOutcome::HopStarted(hop) = request_jump(&mut state, pad) else {
                panic!("hop to {} rejected", pad);
            };
            land_jump(&mut state, hop.ticket);
        }
        // From pad 2 with pads 0 and 1 sunk: 4 then 5
        let solution = solve(&state).unwrap();
        assert_eq!(solution.route, vec![4, 5]);
        assert_eq!(solution.score, 12);
    }

    #[test]
    fn test_large_level_stops_at_budget() {
        // 40 pads in a tight ring: every pad reaches every other
        let pads = (0..40)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / 40.0;
                LilyPad::new(i, 50.0 * angle.cos(), 50.0 * angle.sin(), 1, false)
            })
            .collect();
        let level = Level {
            id: 1,
            title: "Ring".to_string(),
            start: 0,
            finish: 39,
            pads,
        };
        let state = GameState::new(&level, 0);

        let solution = solve_within(&state, 1_000).unwrap();
        assert_eq!(solution.route.last(), Some(&39));
        assert_eq!(solution.score, solution.route.len() as i32);

        assert_eq!(solve_within(&state, 0), None);
    }

    #[test]
    fn test_no_route_once_lost() {
        let catalog = LevelCatalog::builtin();
        let mut state = GameState::new(catalog.get(0).unwrap(), 0);
        state.status = GameStatus::Lost;
        assert_eq!(solve(&state), None);
    }
}
