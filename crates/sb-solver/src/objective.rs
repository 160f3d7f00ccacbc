//! What the solver maximises.

use sb_agent::AgentState;
use sb_route::Route;

/// Scores an agent state; higher is better.
pub trait Objective {
    fn score(&self, state: &AgentState) -> f64;
}

impl Objective for Route {
    #[inline]
    fn score(&self, state: &AgentState) -> f64 {
        self.reward(state.position, state.velocity)
    }
}
