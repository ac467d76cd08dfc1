pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use config::{ComposeConfig, WeldIndex};
pub use error::{OperationError, PolycsgError, Result, TopologyError};
pub use operations::boolean::{BooleanModeller, BooleanOp, ClassifiedOperand, SplitClassifier};
pub use topology::{FaceStatus, OperandMesh, Solid};
