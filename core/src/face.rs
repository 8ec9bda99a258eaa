use std::fmt;

use rand::Rng;

use crate::error::DiceError;

pub const FACE_COUNT: u8 = 6;

/// Isometric pose shown before the first roll and after every mode switch.
pub const RESTING_TRANSFORM: &str = "rotateX(-20deg) rotateY(-20deg)";

/// Rotation in whole degrees around each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Rotation {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Adds `turns` full revolutions to the X and Y axes, saturating at the
    /// `i32` bounds.
    pub fn with_extra_turns(self, turns: i32) -> Self {
        let extra = turns.saturating_mul(360);
        Self {
            x: self.x.saturating_add(extra),
            y: self.y.saturating_add(extra),
            z: self.z,
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            x: self.x.rem_euclid(360),
            y: self.y.rem_euclid(360),
            z: self.z.rem_euclid(360),
        }
    }

    pub fn to_transform(self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
            self.x, self.y, self.z
        )
    }

    /// Inline custom properties the stylesheet animates toward.
    pub fn to_css_vars(self) -> String {
        format!(
            "--final-x: {}deg; --final-y: {}deg; --final-z: {}deg;",
            self.x, self.y, self.z
        )
    }
}

// Index is face - 1: front, back, right, left, top, bottom.
const FACE_ORIENTATIONS: [Rotation; FACE_COUNT as usize] = [
    Rotation::new(0, 0, 0),
    Rotation::new(0, 180, 0),
    Rotation::new(0, -90, 0),
    Rotation::new(0, 90, 0),
    Rotation::new(-90, 0, 0),
    Rotation::new(90, 0, 0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RollOutcome(u8);

impl RollOutcome {
    pub fn new(face: u8) -> Result<Self, DiceError> {
        if (1..=FACE_COUNT).contains(&face) {
            Ok(Self(face))
        } else {
            Err(DiceError::FaceOutOfRange(face))
        }
    }

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..=FACE_COUNT))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Orientation that presents this face to the viewer.
    pub fn orientation(self) -> Rotation {
        FACE_ORIENTATIONS[usize::from(self.0 - 1)]
    }

    pub fn all() -> impl Iterator<Item = RollOutcome> {
        (1..=FACE_COUNT).map(RollOutcome)
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_faces_outside_range() {
        assert_eq!(RollOutcome::new(0), Err(DiceError::FaceOutOfRange(0)));
        assert_eq!(RollOutcome::new(7), Err(DiceError::FaceOutOfRange(7)));
        assert_eq!(RollOutcome::new(6).map(RollOutcome::value), Ok(6));
    }

    #[test]
    fn draws_are_uniform() {
        const DRAWS: usize = 60_000;
        // chi-square critical value for 5 degrees of freedom at p = 0.001
        const CRITICAL: f64 = 20.515;

        let mut rng = StdRng::seed_from_u64(0x0D1C_E5ED);
        let mut counts = [0usize; FACE_COUNT as usize];
        for _ in 0..DRAWS {
            let outcome = RollOutcome::draw(&mut rng);
            assert!((1..=6).contains(&outcome.value()));
            counts[usize::from(outcome.value() - 1)] += 1;
        }
        let expected = DRAWS as f64 / f64::from(FACE_COUNT);
        let chi_square: f64 = counts
            .iter()
            .map(|&count| {
                let diff = count as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(
            chi_square < CRITICAL,
            "chi-square {chi_square:.3} over {counts:?}"
        );
    }

    #[test]
    fn orientation_table_is_distinct_per_face() {
        let mut seen: Vec<Rotation> = RollOutcome::all()
            .map(|face| face.orientation().normalized())
            .collect();
        seen.sort_by_key(|rot| (rot.x, rot.y, rot.z));
        seen.dedup();
        assert_eq!(seen.len(), 6);
        assert_eq!(
            RollOutcome::new(3).unwrap().orientation(),
            Rotation::new(0, -90, 0)
        );
    }

    #[test]
    fn extra_turns_leave_z_alone() {
        let rot = Rotation::new(-90, 0, 0).with_extra_turns(3);
        assert_eq!(rot, Rotation::new(990, 1080, 0));
        assert_eq!(rot.normalized(), Rotation::new(270, 0, 0));
    }

    #[test]
    fn huge_turn_counts_saturate() {
        let rot = Rotation::new(0, 0, 0).with_extra_turns(6_000_000);
        assert_eq!(rot, Rotation::new(i32::MAX, i32::MAX, 0));

        let rot = Rotation::new(-90, 0, 0).with_extra_turns(i32::MIN);
        assert_eq!(rot, Rotation::new(i32::MIN, i32::MIN, 0));
    }

    #[test]
    fn formats_transform_and_css_vars() {
        let rot = Rotation::new(720, 900, 0);
        assert_eq!(
            rot.to_transform(),
            "rotateX(720deg) rotateY(900deg) rotateZ(0deg)"
        );
        assert_eq!(
            rot.to_css_vars(),
            "--final-x: 720deg; --final-y: 900deg; --final-z: 0deg;"
        );
    }
}
