use std::borrow::Cow;

use rand::Rng;

use crate::config::Pairing;
use crate::face::RollOutcome;
use crate::prefs::DiceMode;
use crate::quip::{craps_quip, face_quip, ROLLING_TEXT};
use crate::roll::Die;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DieSlot {
    First,
    Second,
}

impl DieSlot {
    pub const ALL: [DieSlot; 2] = [DieSlot::First, DieSlot::Second];

    pub fn index(self) -> usize {
        match self {
            DieSlot::First => 0,
            DieSlot::Second => 1,
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            DieSlot::First => "dice1",
            DieSlot::Second => "dice2",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Pointer or touch on a specific die.
    Die(DieSlot),
    /// Document-wide key press.
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TicketKind {
    Single(DieSlot),
    Pair,
}

/// Handle for one started roll group; hand it back to [`DiceTable::settle`]
/// once the animation time has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollTicket {
    kind: TicketKind,
}

impl RollTicket {
    pub fn slots(&self) -> &'static [DieSlot] {
        match self.kind {
            TicketKind::Single(DieSlot::First) => &[DieSlot::First],
            TicketKind::Single(DieSlot::Second) => &[DieSlot::Second],
            TicketKind::Pair => &[DieSlot::First, DieSlot::Second],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollReport {
    Face {
        slot: DieSlot,
        outcome: RollOutcome,
    },
    Pair {
        first: RollOutcome,
        second: RollOutcome,
    },
}

impl RollReport {
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            RollReport::Face { outcome, .. } => Cow::Borrowed(face_quip(*outcome)),
            RollReport::Pair { first, second } => craps_quip(pair_total(*first, *second)),
        }
    }

    pub fn total(&self) -> u32 {
        match self {
            RollReport::Face { outcome, .. } => u32::from(outcome.value()),
            RollReport::Pair { first, second } => pair_total(*first, *second),
        }
    }

    /// Banner the report is published to.
    pub fn banner(&self) -> DieSlot {
        match self {
            RollReport::Face { slot, .. } => *slot,
            RollReport::Pair { .. } => DieSlot::First,
        }
    }
}

fn pair_total(first: RollOutcome, second: RollOutcome) -> u32 {
    u32::from(first.value()) + u32::from(second.value())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    text: String,
    shown: bool,
}

impl Banner {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    fn rolling(&mut self) {
        self.shown = false;
        self.text = ROLLING_TEXT.to_string();
    }

    fn publish(&mut self, message: &str) {
        self.text = message.to_string();
        self.shown = true;
    }
}

/// The widget instance: both dice, their banners, and the layout they are
/// shown in.
#[derive(Clone, Debug)]
pub struct DiceTable {
    mode: DiceMode,
    pairing: Pairing,
    dice: [Die; 2],
    banners: [Banner; 2],
}

impl DiceTable {
    pub fn new(mode: DiceMode, pairing: Pairing) -> Self {
        Self {
            mode,
            pairing,
            dice: [Die::new(), Die::new()],
            banners: [Banner::default(), Banner::default()],
        }
    }

    pub fn mode(&self) -> DiceMode {
        self.mode
    }

    /// Switches layout and puts every die back in the resting pose.
    /// Rolls already in flight still settle normally.
    pub fn set_mode(&mut self, mode: DiceMode) {
        self.mode = mode;
        for die in &mut self.dice {
            die.reset_pose();
        }
    }

    pub fn die(&self, slot: DieSlot) -> &Die {
        &self.dice[slot.index()]
    }

    pub fn banner(&self, slot: DieSlot) -> &Banner {
        &self.banners[slot.index()]
    }

    pub fn visible_slots(&self) -> &'static [DieSlot] {
        match self.mode {
            DiceMode::One => &[DieSlot::First],
            DiceMode::Two => &[DieSlot::First, DieSlot::Second],
        }
    }

    pub fn reports_independently(&self) -> bool {
        self.mode == DiceMode::Two && self.pairing == Pairing::Independent
    }

    /// Banners currently on screen.
    pub fn banner_slots(&self) -> &'static [DieSlot] {
        if self.reports_independently() {
            self.visible_slots()
        } else {
            &[DieSlot::First]
        }
    }

    pub fn is_busy(&self) -> bool {
        self.dice.iter().any(Die::is_rolling)
    }

    pub fn press(&mut self, slot: DieSlot) {
        self.dice[slot.index()].press();
    }

    pub fn release(&mut self, slot: DieSlot) {
        self.dice[slot.index()].release();
    }

    /// Starts whatever the trigger reaches in the current layout. Dice that
    /// are still rolling are left untouched; an empty result means nothing
    /// started.
    pub fn trigger<R: Rng + ?Sized>(&mut self, trigger: Trigger, rng: &mut R) -> Vec<RollTicket> {
        match (self.mode, self.pairing, trigger) {
            (DiceMode::One, _, _) => self.start_single(DieSlot::First, rng).into_iter().collect(),
            (DiceMode::Two, Pairing::Combined, _) => self.start_pair(rng).into_iter().collect(),
            (DiceMode::Two, Pairing::Independent, Trigger::Die(slot)) => {
                self.start_single(slot, rng).into_iter().collect()
            }
            (DiceMode::Two, Pairing::Independent, Trigger::All) => DieSlot::ALL
                .iter()
                .filter_map(|slot| self.start_single(*slot, rng))
                .collect(),
        }
    }

    /// Finalizes the dice on `ticket` and publishes the result. Returns
    /// `None` if the ticket was already settled.
    pub fn settle(&mut self, ticket: &RollTicket) -> Option<RollReport> {
        let report = match ticket.kind {
            TicketKind::Single(slot) => {
                let outcome = self.dice[slot.index()].settle()?;
                RollReport::Face { slot, outcome }
            }
            TicketKind::Pair => {
                let first = self.dice[0].settle();
                let second = self.dice[1].settle();
                RollReport::Pair {
                    first: first?,
                    second: second?,
                }
            }
        };
        self.banners[report.banner().index()].publish(&report.message());
        Some(report)
    }

    fn start_single<R: Rng + ?Sized>(&mut self, slot: DieSlot, rng: &mut R) -> Option<RollTicket> {
        self.dice[slot.index()].start(rng)?;
        self.banners[slot.index()].rolling();
        Some(RollTicket {
            kind: TicketKind::Single(slot),
        })
    }

    fn start_pair<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<RollTicket> {
        if self.is_busy() {
            return None;
        }
        for die in &mut self.dice {
            die.start(rng)?;
        }
        self.banners[0].rolling();
        Some(RollTicket {
            kind: TicketKind::Pair,
        })
    }
}
