use std::ops::RangeInclusive;

use rand::Rng;

use crate::face::{RollOutcome, Rotation, RESTING_TRANSFORM};

pub const ROLL_DURATION_MS: u32 = 1000;
pub const EXTRA_TURNS: RangeInclusive<i32> = 2..=4;

const PRESS_SUFFIX: &str = " scale(0.95)";

/// Everything decided at trigger time for one die.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollPlan {
    pub outcome: RollOutcome,
    pub extra_turns: i32,
    pub target: Rotation,
}

impl RollPlan {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let outcome = RollOutcome::draw(rng);
        let extra_turns = rng.gen_range(EXTRA_TURNS);
        Self::new(outcome, extra_turns)
    }

    pub fn new(outcome: RollOutcome, extra_turns: i32) -> Self {
        Self {
            outcome,
            extra_turns,
            target: outcome.orientation().with_extra_turns(extra_turns),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DieState {
    Idle,
    Rolling(RollPlan),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiePose {
    Resting,
    Settled(Rotation),
}

#[derive(Clone, Debug)]
pub struct Die {
    state: DieState,
    pose: DiePose,
    pressed: bool,
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl Die {
    pub fn new() -> Self {
        Self {
            state: DieState::Idle,
            pose: DiePose::Resting,
            pressed: false,
        }
    }

    pub fn state(&self) -> DieState {
        self.state
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self.state, DieState::Rolling(_))
    }

    pub fn pose(&self) -> DiePose {
        self.pose
    }

    /// Target of the in-flight roll, if any.
    pub fn rolling_target(&self) -> Option<Rotation> {
        match self.state {
            DieState::Rolling(plan) => Some(plan.target),
            DieState::Idle => None,
        }
    }

    /// Idle -> Rolling. Returns `None` without touching the die while it is
    /// already rolling.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<RollPlan> {
        if self.is_rolling() {
            return None;
        }
        let plan = RollPlan::draw(rng);
        self.state = DieState::Rolling(plan);
        Some(plan)
    }

    /// Rolling -> Idle. The pose snaps to the exact target before the die
    /// reads idle again.
    pub fn settle(&mut self) -> Option<RollOutcome> {
        let DieState::Rolling(plan) = self.state else {
            return None;
        };
        self.pose = DiePose::Settled(plan.target);
        self.pressed = false;
        self.state = DieState::Idle;
        Some(plan.outcome)
    }

    /// Back to the resting pose. An in-flight roll keeps going.
    pub fn reset_pose(&mut self) {
        self.pose = DiePose::Resting;
        self.pressed = false;
    }

    pub fn press(&mut self) {
        if !self.is_rolling() {
            self.pressed = true;
        }
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Inline `transform` for the current pose.
    pub fn transform(&self) -> String {
        let mut transform = match self.pose {
            DiePose::Resting => RESTING_TRANSFORM.to_string(),
            DiePose::Settled(rotation) => rotation.to_transform(),
        };
        if self.pressed {
            transform.push_str(PRESS_SUFFIX);
        }
        transform
    }
}
