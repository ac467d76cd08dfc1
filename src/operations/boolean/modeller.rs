use tracing::{debug, trace};

use crate::config::ComposeConfig;
use crate::error::{OperationError, Result};
use crate::topology::{FaceStatus, OperandMesh, Solid};

use super::classify::{ClassifiedOperand, SplitClassifier};
use super::compose::compose_solid;
use super::select::{BooleanOp, SelectionPolicy};

/// Applies boolean operations to a pair of solids.
///
/// Both solids are split against each other and classified once, at
/// construction. Each operation then only selects faces, so the modeller
/// can be queried repeatedly and from several threads.
///
/// See D. H. Laidlaw, W. B. Trumbore and J. F. Hughes, "Constructive Solid
/// Geometry for Polyhedral Objects", SIGGRAPH 1986.
#[derive(Debug, Clone)]
pub struct BooleanModeller {
    first: ClassifiedOperand,
    second: ClassifiedOperand,
    config: ComposeConfig,
}

impl BooleanModeller {
    /// Splits and classifies both solids with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `classifier`, or a topology error if
    /// its output is inconsistent with the split meshes.
    pub fn new<C>(solid1: &Solid, solid2: &Solid, classifier: &C) -> Result<Self>
    where
        C: SplitClassifier + ?Sized,
    {
        Self::with_config(solid1, solid2, classifier, ComposeConfig::default())
    }

    /// Splits and classifies both solids.
    ///
    /// Both meshes are split before either is classified.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BooleanModeller::new`].
    pub fn with_config<C>(
        solid1: &Solid,
        solid2: &Solid,
        classifier: &C,
        config: ComposeConfig,
    ) -> Result<Self>
    where
        C: SplitClassifier + ?Sized,
    {
        let mut mesh1 = OperandMesh::from_solid(solid1);
        let mut mesh2 = OperandMesh::from_solid(solid2);

        trace!("splitting operand faces");
        classifier.split(&mut mesh1, &mesh2)?;
        classifier.split(&mut mesh2, &mesh1)?;

        trace!("classifying operand faces");
        let statuses1 = classifier.classify(&mesh1, &mesh2)?;
        let statuses2 = classifier.classify(&mesh2, &mesh1)?;

        let first = ClassifiedOperand::new(mesh1, statuses1)?;
        let second = ClassifiedOperand::new(mesh2, statuses2)?;
        Ok(Self::from_classified(first, second).with_compose_config(config))
    }

    /// Creates a modeller from operands classified elsewhere.
    #[must_use]
    pub fn from_classified(first: ClassifiedOperand, second: ClassifiedOperand) -> Self {
        debug!(
            faces_first = first.face_count(),
            faces_second = second.face_count(),
            coincident_first = first.count_status(FaceStatus::Same)
                + first.count_status(FaceStatus::Opposite),
            "boolean modeller ready"
        );
        Self {
            first,
            second,
            config: ComposeConfig::default(),
        }
    }

    /// Replaces the composition configuration.
    #[must_use]
    pub fn with_compose_config(mut self, config: ComposeConfig) -> Self {
        self.config = config;
        self
    }

    /// Union of the two solids.
    #[must_use]
    pub fn union(&self) -> Solid {
        self.apply(BooleanOp::Union)
    }

    /// Intersection of the two solids.
    ///
    /// May be empty; check [`Solid::is_empty`] before rendering.
    #[must_use]
    pub fn intersection(&self) -> Solid {
        self.apply(BooleanOp::Intersection)
    }

    /// The first solid minus the second.
    #[must_use]
    pub fn difference(&self) -> Solid {
        self.apply(BooleanOp::Difference)
    }

    /// Applies `op` to the two solids.
    #[must_use]
    pub fn apply(&self, op: BooleanOp) -> Solid {
        debug!(?op, "applying boolean operation");
        compose_solid(
            &self.first,
            &self.second,
            &SelectionPolicy::for_op(op),
            &self.config,
        )
    }

    /// Returns an independent deep copy of this modeller.
    ///
    /// Unlike [`Clone::clone`], allocation failure while copying the face
    /// buffers is reported instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::CloneFailed`] if either operand cannot be
    /// copied.
    pub fn try_clone(&self) -> Result<Self> {
        let first = self
            .first
            .try_clone()
            .map_err(|e| OperationError::CloneFailed(format!("first operand: {e}")))?;
        let second = self
            .second
            .try_clone()
            .map_err(|e| OperationError::CloneFailed(format!("second operand: {e}")))?;
        Ok(Self {
            first,
            second,
            config: self.config.clone(),
        })
    }

    /// The first operand with its face statuses.
    #[must_use]
    pub fn operand1(&self) -> &ClassifiedOperand {
        &self.first
    }

    /// The second operand with its face statuses.
    #[must_use]
    pub fn operand2(&self) -> &ClassifiedOperand {
        &self.second
    }

    #[must_use]
    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::{PolycsgError, TopologyError};
    use crate::math::{Color, Point3};

    const GREY: Color = Color::new(0.5, 0.5, 0.5);

    /// Leaves faces unsplit and labels operand 1, then operand 2, from fixed
    /// tables. Records the order of collaborator calls.
    struct Table {
        first: Vec<FaceStatus>,
        second: Vec<FaceStatus>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl Table {
        fn new(first: Vec<FaceStatus>, second: Vec<FaceStatus>) -> Self {
            Self {
                first,
                second,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SplitClassifier for Table {
        fn split(&self, _mesh: &mut OperandMesh, _other: &OperandMesh) -> Result<()> {
            self.calls.borrow_mut().push("split");
            Ok(())
        }

        fn classify(&self, mesh: &OperandMesh, _other: &OperandMesh) -> Result<Vec<FaceStatus>> {
            let mut calls = self.calls.borrow_mut();
            let first_call = !calls.contains(&"classify");
            calls.push("classify");
            let table = if first_call { &self.first } else { &self.second };
            assert_eq!(table.len(), mesh.face_count());
            Ok(table.clone())
        }
    }

    /// `n` disjoint triangles along the x axis starting at `x`.
    fn strip(n: u32, x: f64) -> Solid {
        let mut vertices = Vec::new();
        for i in 0..n {
            let x0 = x + f64::from(i) * 2.0;
            vertices.push(Point3::new(x0, 0.0, 0.0));
            vertices.push(Point3::new(x0 + 1.0, 0.0, 0.0));
            vertices.push(Point3::new(x0, 1.0, 0.0));
        }
        Solid::with_color(vertices, (0..n * 3).collect(), GREY).unwrap()
    }

    #[test]
    fn splits_both_before_classifying() {
        let table = Table::new(vec![FaceStatus::Outside], vec![FaceStatus::Outside]);
        BooleanModeller::new(&strip(1, 0.0), &strip(1, 5.0), &table).unwrap();
        assert_eq!(
            *table.calls.borrow(),
            vec!["split", "split", "classify", "classify"]
        );
    }

    #[test]
    fn classifier_errors_propagate() {
        struct Failing;
        impl SplitClassifier for Failing {
            fn split(&self, _: &mut OperandMesh, _: &OperandMesh) -> Result<()> {
                Err(OperationError::Collaborator("ray cast hit an edge".into()).into())
            }
            fn classify(&self, _: &OperandMesh, _: &OperandMesh) -> Result<Vec<FaceStatus>> {
                unreachable!("classify must not run after a failed split")
            }
        }

        let result = BooleanModeller::new(&strip(1, 0.0), &strip(1, 0.0), &Failing);
        assert!(matches!(
            result,
            Err(PolycsgError::Operation(OperationError::Collaborator(_)))
        ));
    }

    #[test]
    fn unclassified_face_is_rejected() {
        struct Short;
        impl SplitClassifier for Short {
            fn split(&self, _: &mut OperandMesh, _: &OperandMesh) -> Result<()> {
                Ok(())
            }
            fn classify(&self, _: &OperandMesh, _: &OperandMesh) -> Result<Vec<FaceStatus>> {
                Ok(vec![FaceStatus::Outside])
            }
        }

        let result = BooleanModeller::new(&strip(2, 0.0), &strip(1, 5.0), &Short);
        assert!(matches!(
            result,
            Err(PolycsgError::Topology(TopologyError::StatusCountMismatch {
                faces: 2,
                statuses: 1
            }))
        ));
    }

    #[test]
    fn union_and_intersection_select_expected_faces() {
        use FaceStatus::{Inside, Opposite, Outside, Same};
        let table = Table::new(
            vec![Inside, Outside, Same, Opposite],
            vec![Inside, Outside, Same, Opposite],
        );
        let modeller = BooleanModeller::new(&strip(4, 0.0), &strip(4, 100.0), &table).unwrap();

        // union: first Outside + Same, second Outside
        let union = modeller.union();
        assert_eq!(union.triangle_count(), 3);
        assert_eq!(union.vertices()[0].x, 2.0);
        assert_eq!(union.vertices()[3].x, 4.0);
        assert_eq!(union.vertices()[6].x, 102.0);

        // intersection: first Inside + Same, second Inside
        let intersection = modeller.intersection();
        assert_eq!(intersection.triangle_count(), 3);
        assert_eq!(intersection.vertices()[0].x, 0.0);
        assert_eq!(intersection.vertices()[3].x, 4.0);
        assert_eq!(intersection.vertices()[6].x, 100.0);
    }

    #[test]
    fn difference_reads_second_operand_inverted() {
        use FaceStatus::{Inside, Opposite, Outside, Same};
        let table = Table::new(
            vec![Inside, Outside, Same, Opposite],
            vec![Inside, Outside, Same, Opposite],
        );
        let modeller = BooleanModeller::new(&strip(4, 0.0), &strip(4, 100.0), &table).unwrap();
        let before = modeller.operand2().statuses().to_vec();

        let difference = modeller.difference();
        assert_eq!(difference.triangle_count(), 3);
        assert_eq!(difference.vertices()[0].x, 2.0);
        assert_eq!(difference.vertices()[3].x, 6.0);
        assert_eq!(difference.vertices()[6].x, 102.0);

        assert_eq!(modeller.operand2().statuses(), before.as_slice());
        assert_eq!(modeller.apply(BooleanOp::Difference), difference);
    }

    #[test]
    fn try_clone_is_independent() {
        let table = Table::new(vec![FaceStatus::Outside], vec![FaceStatus::Inside]);
        let modeller = BooleanModeller::new(&strip(1, 0.0), &strip(1, 5.0), &table).unwrap();
        let clone = modeller.try_clone().unwrap();
        assert_eq!(clone.union(), modeller.union());
        assert_eq!(clone.difference(), modeller.difference());
        assert!(!std::ptr::eq(clone.operand1(), modeller.operand1()));
    }

    #[test]
    fn explicit_config_reaches_composition() {
        let table = Table::new(vec![FaceStatus::Outside], vec![FaceStatus::Outside]);
        let modeller = BooleanModeller::with_config(
            &strip(1, 0.0),
            &strip(1, 5.0),
            &table,
            ComposeConfig::linear_scan(),
        )
        .unwrap();
        assert_eq!(
            modeller.config().weld_index,
            crate::config::WeldIndex::LinearScan
        );
        assert_eq!(modeller.union().triangle_count(), 2);
    }
}
