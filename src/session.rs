//! Play session: feeds player input and the clock into the state machine
//!
//! A hop is accepted immediately but only lands once the hop delay has passed.
//! The session remembers that deadline and sends the landing from [`Session::update`].
//! All times are milliseconds on whatever monotonic clock the host uses.

use crate::settings::Settings;
use crate::sim::{
    GameEvent, GameState, Level, LevelCatalog, Solution, StepOutcome, solve, step,
};
use crate::view::GameView;

/// Landing scheduled for the hop in flight
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingLanding {
    ticket: u64,
    due_ms: f64,
}

/// One player's game: level catalog, current attempt, and hop timing
#[derive(Debug, Clone)]
pub struct Session {
    catalog: LevelCatalog,
    settings: Settings,
    state: GameState,
    landing: Option<PendingLanding>,
}

impl Session {
    /// Start on the first level of `catalog`
    pub fn new(catalog: LevelCatalog, settings: Settings) -> Self {
        let state = GameState::new(catalog.first(), 0);
        log::info!("Starting {}", catalog.first().title);
        Self {
            catalog,
            settings,
            state,
            landing: None,
        }
    }

    /// Session over the built-in levels with default settings
    pub fn with_builtin_levels() -> Self {
        Self::new(LevelCatalog::builtin(), Settings::default())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Level currently being played
    pub fn level(&self) -> &Level {
        self.catalog
            .get(self.state.level_index)
            .unwrap_or_else(|| self.catalog.first())
    }

    /// Whether a hop is animating
    pub fn is_hopping(&self) -> bool {
        self.landing.is_some()
    }

    /// When the hop in flight will land, if any
    pub fn landing_due_ms(&self) -> Option<f64> {
        self.landing.map(|l| l.due_ms)
    }

    /// Player clicked `pad`. Returns whether a hop started.
    ///
    /// With a zero hop delay the hop lands before this returns.
    pub fn click_pad(&mut self, pad: u32, now_ms: f64) -> bool {
        let StepOutcome::HopStarted(hop) =
            step(&mut self.state, &self.catalog, GameEvent::RequestJump { pad })
        else {
            return false;
        };

        let delay = self.settings.effective_hop_delay_ms();
        log::debug!("Hop {} -> {} (lands in {}ms)", hop.from, hop.to, delay);
        self.landing = Some(PendingLanding {
            ticket: hop.ticket,
            due_ms: now_ms + f64::from(delay),
        });
        if delay == 0 {
            self.update(now_ms);
        }
        true
    }

    /// Advance the clock, landing the hop in flight if it is due
    pub fn update(&mut self, now_ms: f64) -> Option<StepOutcome> {
        let landing = self.landing?;
        if now_ms < landing.due_ms {
            return None;
        }
        self.landing = None;
        Some(step(
            &mut self.state,
            &self.catalog,
            GameEvent::LandJump {
                ticket: landing.ticket,
            },
        ))
    }

    /// Restart the current level
    pub fn retry(&mut self) {
        self.landing = None;
        step(&mut self.state, &self.catalog, GameEvent::Reset);
    }

    /// Move to the next level after a win. Returns whether the level changed.
    pub fn advance(&mut self) -> bool {
        let outcome = step(&mut self.state, &self.catalog, GameEvent::Advance);
        if matches!(outcome, StepOutcome::LevelStarted { .. }) {
            self.landing = None;
            true
        } else {
            false
        }
    }

    /// Best winning route from the current position
    pub fn hint(&self) -> Option<Solution> {
        solve(&self.state)
    }

    /// Display data for the current state
    pub fn view(&self) -> GameView {
        GameView::new(&self.state, self.level(), &self.catalog, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameStatus;

    #[test]
    fn test_hop_lands_after_delay() {
        let mut session = Session::with_builtin_levels();

        assert!(session.click_pad(1, 1000.0));
        assert!(session.is_hopping());
        assert_eq!(session.landing_due_ms(), Some(1600.0));

        // Not yet
        assert_eq!(session.update(1599.0), None);
        assert_eq!(session.state().frog, 0);
        assert!(!session.state().pad(0).unwrap().used);

        let outcome = session.update(1600.0);
        assert_eq!(
            outcome,
            Some(StepOutcome::Landed {
                pad: 1,
                status: GameStatus::Playing
            })
        );
        assert_eq!(session.state().frog, 1);
        assert_eq!(session.state().score, 5);
        assert!(!session.is_hopping());
    }

    #[test]
    fn test_clicks_locked_out_while_hopping() {
        let mut session = Session::with_builtin_levels();
        assert!(session.click_pad(1, 0.0));
        assert!(!session.click_pad(1, 100.0));
        assert!(!session.click_pad(2, 200.0));

        session.update(600.0);
        assert_eq!(session.state().score, 5);
        assert!(session.click_pad(3, 700.0));
    }

    #[test]
    fn test_retry_cancels_pending_landing() {
        let mut session = Session::with_builtin_levels();
        session.click_pad(1, 0.0);
        session.retry();

        assert!(!session.is_hopping());
        assert_eq!(session.update(10_000.0), None);
        assert_eq!(session.state().frog, 0);
        assert_eq!(session.state().score, 0);
    }

    #[test]
    fn test_reduced_motion_lands_immediately() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let mut session = Session::new(LevelCatalog::builtin(), settings);
        assert!(session.click_pad(1, 0.0));
        assert!(!session.is_hopping());
        assert_eq!(session.state().frog, 1);
    }

    #[test]
    fn test_win_then_advance() {
        let mut session = Session::with_builtin_levels();
        let mut now = 0.0;
        for pad in [1, 3, 4, 5] {
            assert!(session.click_pad(pad, now));
            now += 600.0;
            session.update(now);
        }
        assert_eq!(session.state().status, GameStatus::Won);
        assert_eq!(session.state().score, 7);

        assert!(session.advance());
        assert_eq!(session.state().level_index, 1);
        assert_eq!(session.level().title, "Level 2: Dangerous Waters");
        assert!(!session.advance());
    }

    #[test]
    fn test_hint_follows_position() {
        let mut session = Session::with_builtin_levels();
        assert_eq!(session.hint().unwrap().route, vec![1, 2, 4, 5]);
        session.click_pad(1, 0.0);
        // Mid-hop there is no safe answer
        assert_eq!(session.hint(), None);
        session.update(600.0);
        assert_eq!(session.hint().unwrap().route, vec![2, 4, 5]);
    }
}
