use tracing::debug;

use crate::config::ComposeConfig;
use crate::topology::Solid;

use super::assemble::MeshBuilder;
use super::classify::ClassifiedOperand;
use super::select::{KeepDecision, OperandSource, SelectionPolicy};

/// Composes a solid from the faces of both operands accepted by `policy`.
///
/// Operand 1 is walked before operand 2, each in stored face order, so the
/// welded vertex order is deterministic for identical inputs.
#[must_use]
pub fn compose_solid(
    first: &ClassifiedOperand,
    second: &ClassifiedOperand,
    policy: &SelectionPolicy,
    config: &ComposeConfig,
) -> Solid {
    let mut builder = MeshBuilder::new(config.weld_index);

    let kept_first = group_operand_faces(&mut builder, first, OperandSource::First, policy, config);
    let kept_second =
        group_operand_faces(&mut builder, second, OperandSource::Second, policy, config);

    debug!(
        kept_first,
        kept_second,
        vertices = builder.vertex_count(),
        indices = builder.index_count(),
        "composed boolean result"
    );

    builder.build()
}

/// Feeds the accepted faces of one operand to the builder and returns how
/// many were kept.
fn group_operand_faces(
    builder: &mut MeshBuilder,
    operand: &ClassifiedOperand,
    source: OperandSource,
    policy: &SelectionPolicy,
    config: &ComposeConfig,
) -> usize {
    let mut kept = 0;
    for (status, [v1, v2, v3]) in operand.classified_faces() {
        match policy.decide(source, status) {
            KeepDecision::Discard => continue,
            KeepDecision::KeepInverted if config.reverse_inverted_winding => {
                builder.push_triangle([v1, v3, v2]);
            }
            KeepDecision::Keep | KeepDecision::KeepInverted => builder.push_triangle([v1, v2, v3]),
        }
        kept += 1;
    }
    kept
}
