use crate::topology::FaceStatus;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Union,
    Intersection,
    /// Operand 1 minus operand 2.
    Difference,
}

/// Which operand a face belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSource {
    First,
    Second,
}

/// Decision about whether to keep a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepDecision {
    Keep,
    /// Keep a face that was accepted through an inverted status.
    KeepInverted,
    Discard,
}

/// A set of face statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSet(u8);

impl StatusSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns the set extended with `status`.
    #[must_use]
    pub const fn with(self, status: FaceStatus) -> Self {
        Self(self.0 | Self::bit(status))
    }

    #[must_use]
    pub const fn contains(self, status: FaceStatus) -> bool {
        self.0 & Self::bit(status) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    const fn bit(status: FaceStatus) -> u8 {
        match status {
            FaceStatus::Inside => 1,
            FaceStatus::Outside => 1 << 1,
            FaceStatus::Same => 1 << 2,
            FaceStatus::Opposite => 1 << 3,
        }
    }
}

/// Which face statuses each operand contributes to a boolean result.
///
/// | Status of face | Union (1 / 2) | Intersection (1 / 2) | Difference (1 / 2) |
/// |----------------|---------------|----------------------|--------------------|
/// | `Inside`       | drop / drop   | keep / keep          | drop / keep*       |
/// | `Outside`      | keep / keep   | drop / drop          | keep / drop*       |
/// | `Same`         | keep / drop   | keep / drop          | drop / drop        |
/// | `Opposite`     | drop / drop   | drop / drop          | keep / drop        |
///
/// `*` operand 2 is read with `Inside` and `Outside` swapped, so a face
/// stored as `Outside` is the one accepted as `Inside`. Coincident faces are
/// only ever taken from operand 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    first: StatusSet,
    second: StatusSet,
    invert_second: bool,
}

impl SelectionPolicy {
    /// Creates a policy from the accepted sets of both operands.
    #[must_use]
    pub const fn new(first: StatusSet, second: StatusSet, invert_second: bool) -> Self {
        Self {
            first,
            second,
            invert_second,
        }
    }

    /// Returns the policy implementing `op`.
    #[must_use]
    pub const fn for_op(op: BooleanOp) -> Self {
        match op {
            BooleanOp::Union => Self::new(
                StatusSet::EMPTY
                    .with(FaceStatus::Outside)
                    .with(FaceStatus::Same),
                StatusSet::EMPTY.with(FaceStatus::Outside),
                false,
            ),
            BooleanOp::Intersection => Self::new(
                StatusSet::EMPTY
                    .with(FaceStatus::Inside)
                    .with(FaceStatus::Same),
                StatusSet::EMPTY.with(FaceStatus::Inside),
                false,
            ),
            BooleanOp::Difference => Self::new(
                StatusSet::EMPTY
                    .with(FaceStatus::Outside)
                    .with(FaceStatus::Opposite),
                StatusSet::EMPTY.with(FaceStatus::Inside),
                true,
            ),
        }
    }

    /// Statuses accepted from `source`, before any inversion.
    #[must_use]
    pub const fn accepted(&self, source: OperandSource) -> StatusSet {
        match source {
            OperandSource::First => self.first,
            OperandSource::Second => self.second,
        }
    }

    /// Whether statuses of `source` are read inverted.
    #[must_use]
    pub const fn inverts(&self, source: OperandSource) -> bool {
        match source {
            OperandSource::First => false,
            OperandSource::Second => self.invert_second,
        }
    }

    /// Decides whether a face with the stored `status` from `source` is kept.
    #[must_use]
    pub fn decide(&self, source: OperandSource, status: FaceStatus) -> KeepDecision {
        let inverted = self.inverts(source);
        let effective = if inverted { status.inverted() } else { status };
        match (self.accepted(source).contains(effective), inverted) {
            (false, _) => KeepDecision::Discard,
            (true, false) => KeepDecision::Keep,
            (true, true) => KeepDecision::KeepInverted,
        }
    }
}

/// Determines whether a face should be kept based on its stored status and
/// the boolean operation.
#[must_use]
pub fn should_keep_face(source: OperandSource, status: FaceStatus, op: BooleanOp) -> KeepDecision {
    SelectionPolicy::for_op(op).decide(source, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FaceStatus; 4] = [
        FaceStatus::Inside,
        FaceStatus::Outside,
        FaceStatus::Same,
        FaceStatus::Opposite,
    ];

    fn kept(source: OperandSource, op: BooleanOp) -> Vec<FaceStatus> {
        ALL.into_iter()
            .filter(|&s| should_keep_face(source, s, op) != KeepDecision::Discard)
            .collect()
    }

    #[test]
    fn union_keeps_outside_and_first_same() {
        assert_eq!(
            kept(OperandSource::First, BooleanOp::Union),
            vec![FaceStatus::Outside, FaceStatus::Same]
        );
        assert_eq!(
            kept(OperandSource::Second, BooleanOp::Union),
            vec![FaceStatus::Outside]
        );
    }

    #[test]
    fn intersection_keeps_inside_and_first_same() {
        assert_eq!(
            kept(OperandSource::First, BooleanOp::Intersection),
            vec![FaceStatus::Inside, FaceStatus::Same]
        );
        assert_eq!(
            kept(OperandSource::Second, BooleanOp::Intersection),
            vec![FaceStatus::Inside]
        );
    }

    #[test]
    fn difference_keeps_first_outside_and_opposite() {
        assert_eq!(
            kept(OperandSource::First, BooleanOp::Difference),
            vec![FaceStatus::Outside, FaceStatus::Opposite]
        );
    }

    #[test]
    fn difference_reads_second_inverted() {
        assert_eq!(
            should_keep_face(OperandSource::Second, FaceStatus::Outside, BooleanOp::Difference),
            KeepDecision::KeepInverted
        );
        assert_eq!(
            should_keep_face(OperandSource::Second, FaceStatus::Inside, BooleanOp::Difference),
            KeepDecision::Discard
        );
    }

    #[test]
    fn second_operand_coincident_faces_always_dropped() {
        for op in [BooleanOp::Union, BooleanOp::Intersection, BooleanOp::Difference] {
            for status in [FaceStatus::Same, FaceStatus::Opposite] {
                assert_eq!(
                    should_keep_face(OperandSource::Second, status, op),
                    KeepDecision::Discard,
                    "{op:?} kept {status:?} from operand 2"
                );
            }
        }
    }

    #[test]
    fn non_inverting_policies_never_report_inverted() {
        for op in [BooleanOp::Union, BooleanOp::Intersection] {
            for source in [OperandSource::First, OperandSource::Second] {
                for status in ALL {
                    assert_ne!(should_keep_face(source, status, op), KeepDecision::KeepInverted);
                }
            }
        }
    }

    #[test]
    fn status_set_membership() {
        let set = StatusSet::EMPTY.with(FaceStatus::Same);
        assert!(set.contains(FaceStatus::Same));
        assert!(!set.contains(FaceStatus::Opposite));
        assert!(!set.is_empty());
        assert!(StatusSet::default().is_empty());
    }
}
