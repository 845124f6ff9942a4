use crate::primitive::Primitive;

/// A single labeled feature frame.
///
/// Pairs a fixed-dimension feature vector with the externally assigned label it
/// came in with (e.g. the transition id of a frame-to-HMM alignment). Label and
/// features are immutable after construction; the cluster assignment is owned
/// and mutated exclusively by [`ClusterEngine`](crate::ClusterEngine).
///
/// ## Fields
/// - **label**: External category id, in `0..=max_label` of the owning engine
/// - **features**: The frame's feature vector (e.g. 13-dimensional PLP features)
/// - **cluster**: Index of the centroid this frame is currently assigned to
///   (`None` until the first reassignment pass)
/// - **previous_cluster**: Snapshot of **cluster** taken at the start of the
///   most recent reassignment pass
#[derive(Clone, Debug)]
pub struct FeaturePoint<T: Primitive> {
    pub(crate) label: usize,
    pub(crate) features: Vec<T>,
    pub(crate) cluster: Option<usize>,
    pub(crate) previous_cluster: Option<usize>,
}
impl<T: Primitive> FeaturePoint<T> {
    /// Create a new, not yet assigned point from a label and its feature vector.
    pub fn new(label: usize, features: Vec<T>) -> Self {
        Self { label, features, cluster: None, previous_cluster: None }
    }

    /// The externally assigned category id of this point.
    pub fn label(&self) -> usize { self.label }
    /// The point's feature vector.
    pub fn features(&self) -> &[T] { &self.features }
    /// Dimensionality of the feature vector.
    pub fn dims(&self) -> usize { self.features.len() }
    /// Index of the cluster this point is currently assigned to, or `None`
    /// before the first reassignment pass.
    pub fn cluster(&self) -> Option<usize> { self.cluster }
    /// The assignment this point had when the most recent reassignment pass began.
    pub fn previous_cluster(&self) -> Option<usize> { self.previous_cluster }

    /// Euclidean distance between this point and **other**.
    ///
    /// Pure and symmetric. Both points must have the same dimensionality;
    /// comparing vectors of different lengths is a programming error and panics.
    pub fn distance_to(&self, other: &FeaturePoint<T>) -> T {
        euclidean(&self.features, &other.features)
    }
}

/// The representative feature vector of one cluster.
///
/// A centroid has no label or identity of its own - its position in the
/// engine's centroid collection is the cluster id that point assignments refer
/// to. Recomputed as the mean of its members after every epoch.
#[derive(Clone, Debug)]
pub struct Centroid<T: Primitive> {
    pub(crate) features: Vec<T>,
}
impl<T: Primitive> Centroid<T> {
    /// The centroid's current feature vector.
    pub fn features(&self) -> &[T] { &self.features }
}

pub(crate) fn euclidean<T: Primitive>(a: &[T], b: &[T]) -> T {
    assert!(a.len() == b.len(), "dimensionality mismatch: {} vs {}", a.len(), b.len());
    a.iter().cloned()
        .zip(b.iter().cloned())
        .map(|(av, bv)| av - bv)    // <a> - <b>
        .map(|v| v * v)             // <components>^2
        .sum::<T>()                 // sum(<components>^2)
        .sqrt()
}
