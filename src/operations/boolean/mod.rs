mod assemble;
mod classify;
mod compose;
mod modeller;
mod select;

pub use assemble::MeshBuilder;
pub use classify::{ClassifiedOperand, SplitClassifier};
pub use compose::compose_solid;
pub use modeller::BooleanModeller;
pub use select::{
    should_keep_face, BooleanOp, KeepDecision, OperandSource, SelectionPolicy, StatusSet,
};
