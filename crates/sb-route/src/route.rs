//! The `Route` polyline and its progress queries.

use sb_agent::AgentState;
use sb_core::Vec3;

use crate::{RouteError, RouteResult, Waypoint};

/// An ordered route: `start`, a stack of checkpoints, `end`.
///
/// `start` and `end` always exist, even before they are placed, so every
/// query sees at least two waypoints.  Checkpoints are only ever pushed on
/// or popped off the top.  Waypoint names are unique within a route so
/// [`previous_point`][Self::previous_point] lookups are unambiguous.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    start: Waypoint,
    checkpoints: Vec<Waypoint>,
    end: Waypoint,
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

impl Route {
    pub const START_NAME: &'static str = "start";
    pub const END_NAME: &'static str = "end";

    /// A route with unplaced `start` and `end` and no checkpoints.
    pub fn new() -> Self {
        Self {
            start: Waypoint::unplaced(Self::START_NAME),
            checkpoints: Vec::new(),
            end: Waypoint::unplaced(Self::END_NAME),
        }
    }

    // ── Authoring ─────────────────────────────────────────────────────────

    /// Replace `start` with a sample of `state`.
    pub fn set_start(&mut self, state: &AgentState) -> &Waypoint {
        self.start = Waypoint::sample(Self::START_NAME, state);
        &self.start
    }

    /// Replace `end` with a sample of `state`.
    pub fn set_end(&mut self, state: &AgentState) -> &Waypoint {
        self.end = Waypoint::sample(Self::END_NAME, state);
        &self.end
    }

    /// Push a checkpoint sampled from `state`, named `cp{n}` for the
    /// smallest `n` at or above the stack depth that is not taken.
    pub fn push_checkpoint(&mut self, state: &AgentState) -> RouteResult<&Waypoint> {
        let name = (self.checkpoints.len()..)
            .map(|n| format!("cp{n}"))
            .find(|name| !self.waypoints().any(|w| w.name == *name))
            .unwrap_or_default();
        self.push_waypoint(Waypoint::sample(name, state))
    }

    /// Push an already-built checkpoint.  Fails if its name is taken.
    pub fn push_waypoint(&mut self, waypoint: Waypoint) -> RouteResult<&Waypoint> {
        if self.waypoints().any(|w| w.name == waypoint.name) {
            return Err(RouteError::DuplicateName(waypoint.name));
        }
        self.checkpoints.push(waypoint);
        Ok(&self.checkpoints[self.checkpoints.len() - 1])
    }

    /// Pop the most recently pushed checkpoint.
    pub fn pop_checkpoint(&mut self) -> Option<Waypoint> {
        self.checkpoints.pop()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn start(&self) -> &Waypoint {
        &self.start
    }

    pub fn end(&self) -> &Waypoint {
        &self.end
    }

    pub fn checkpoints(&self) -> &[Waypoint] {
        &self.checkpoints
    }

    /// All waypoints in route order: start, checkpoints, end.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> + Clone {
        std::iter::once(&self.start)
            .chain(self.checkpoints.iter())
            .chain(std::iter::once(&self.end))
    }

    /// Number of waypoints including `start` and `end` (always ≥ 2).
    pub fn len(&self) -> usize {
        self.checkpoints.len() + 2
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    // ── Progress ──────────────────────────────────────────────────────────

    /// Index (in route order) of the first waypoint `position` has not
    /// passed yet.
    ///
    /// The nearest waypoint is found first (ties keep the earlier one).  It
    /// still counts as ahead while the vector from the agent to it points
    /// along the following segment; otherwise the next waypoint is the
    /// target.  The last waypoint is never passed.
    pub fn target_index(&self, position: Vec3) -> usize {
        let points: Vec<&Waypoint> = self.waypoints().collect();

        let mut nearest = 0;
        let mut nearest_dist = f64::INFINITY;
        for (i, w) in points.iter().enumerate() {
            let d = position.distance(w.position);
            if d < nearest_dist {
                nearest_dist = d;
                nearest = i;
            }
        }

        if nearest + 1 >= points.len() {
            return nearest;
        }
        let forward = points[nearest + 1].position - points[nearest].position;
        let to_nearest = points[nearest].position - position;
        if to_nearest.dot(forward) > 0.0 { nearest } else { nearest + 1 }
    }

    /// Waypoints not yet passed, from the current target to `end`.
    ///
    /// `end` is always included, even once the agent has run past it.
    pub fn remaining_points(&self, position: Vec3) -> Vec<&Waypoint> {
        let target = self.target_index(position);
        self.waypoints().skip(target).collect()
    }

    /// The waypoint before `waypoint` in route order, matched by name.
    ///
    /// `None` for `start` and for names not on this route.
    pub fn previous_point(&self, waypoint: &Waypoint) -> Option<&Waypoint> {
        let index = self.waypoints().position(|w| w.name == waypoint.name)?;
        index.checked_sub(1).and_then(|i| self.waypoints().nth(i))
    }
}
