use crate::api::{ClusterConfig, EpochReport, RunSummary};
use crate::errors::ClusterError;
use crate::point::{euclidean, Centroid, FeaturePoint};
use crate::primitive::Primitive;
use rand::prelude::*;
use std::collections::BTreeMap;
use std::ops::DerefMut;

/// Entrypoint of this crate's API-surface.
///
/// Create an instance of this struct, giving it the labeled points to operate
/// on, the number of clusters **k**, and the inclusive upper bound of the
/// labels occurring in the point set. The engine takes ownership of the points
/// for the duration of the calculation and leaves the final cluster assignment
/// on each one of them.
///
/// A calculation is started with [`ClusterEngine::run`] and proceeds in
/// epochs. Every epoch first reassigns each point to its nearest centroid,
/// then forces all points sharing a label into that label's dominant cluster,
/// and finally recomputes the centroids as the mean of their members. The run
/// ends when an epoch produces no membership change at all, or with
/// [`ClusterError::DidNotConverge`] once the configured epoch ceiling is hit.
///
/// ## Generics
/// - **T**: Primitive type of the feature vectors ([`f32`] or [`f64`])
pub struct ClusterEngine<T: Primitive> {
    pub(crate) points: Vec<FeaturePoint<T>>,
    pub(crate) centroids: Vec<Centroid<T>>,
    pub(crate) k: usize,
    pub(crate) max_label: usize,
    pub(crate) dims: usize,
}
impl<T: Primitive> ClusterEngine<T> {
    /// Create a new instance of the [`ClusterEngine`] structure.
    ///
    /// ## Arguments
    /// - **points**: The labeled points to cluster
    /// - **k**: Amount of clusters to group the points into
    /// - **max_label**: Inclusive upper bound of the labels in **points**
    ///
    /// ## Returns
    /// The engine, or [`ClusterError::InvalidConfiguration`] if the point set
    /// is empty, **k** is outside `1..=points.len()`, the points disagree on
    /// their dimensionality, or a label exceeds **max_label**.
    pub fn new(points: Vec<FeaturePoint<T>>, k: usize, max_label: usize) -> Result<Self, ClusterError> {
        if points.is_empty() {
            return Err(ClusterError::InvalidConfiguration("point set is empty".to_string()));
        }
        if k == 0 || k > points.len() {
            return Err(ClusterError::InvalidConfiguration(format!(
                "cluster count must be in 1..={} (got k={})", points.len(), k
            )));
        }
        let dims = points[0].dims();
        if dims == 0 {
            return Err(ClusterError::InvalidConfiguration(
                "feature vectors must have at least one dimension".to_string(),
            ));
        }
        for (idx, point) in points.iter().enumerate() {
            if point.dims() != dims {
                return Err(ClusterError::InvalidConfiguration(format!(
                    "point {} has {} dimensions, expected {}", idx, point.dims(), dims
                )));
            }
            if point.label > max_label {
                return Err(ClusterError::InvalidConfiguration(format!(
                    "point {} carries label {}, above max_label {}", idx, point.label, max_label
                )));
            }
        }
        Ok(Self { points, centroids: Vec::new(), k, max_label, dims })
    }

    /// Run the clustering calculation until the assignments stabilize.
    ///
    /// ## Arguments
    /// - **config**: [`ClusterConfig`] instance with the random generator,
    ///   epoch ceiling and status callbacks to use for this run
    ///
    /// ## Returns
    /// A [`RunSummary`] once an epoch finishes without any membership change
    /// from either reassignment or homogenization. The converging epoch does
    /// not recompute centroids, so the returned state is exactly the one the
    /// stability check saw and further passes would change nothing. If the
    /// epoch ceiling is reached first, [`ClusterError::DidNotConverge`] is
    /// returned and the engine keeps the last (homogenized) assignment, so
    /// the points stay readable.
    ///
    /// Every call starts from scratch: assignments are cleared and the
    /// centroids are reseeded from the configured random generator. A zero
    /// epoch ceiling is rejected as [`ClusterError::InvalidConfiguration`]
    /// before any work begins.
    ///
    /// ## Example
    /// ```rust
    /// use labelmeans::*;
    ///
    /// let points = vec![
    ///     FeaturePoint::new(0, vec![0.0f64, 0.0]),
    ///     FeaturePoint::new(0, vec![0.1, 0.0]),
    ///     FeaturePoint::new(1, vec![10.0, 10.0]),
    ///     FeaturePoint::new(1, vec![10.1, 10.0]),
    /// ];
    /// let mut engine = ClusterEngine::new(points, 2, 1).unwrap();
    /// let summary = engine.run(&ClusterConfig::default()).unwrap();
    ///
    /// assert_eq!(summary.cluster_sizes.iter().sum::<usize>(), 4);
    /// for point in engine.points() {
    ///     println!("{} {}", point.label(), point.cluster().unwrap());
    /// }
    /// ```
    pub fn run(&mut self, config: &ClusterConfig<T>) -> Result<RunSummary, ClusterError> {
        if config.max_epochs == 0 {
            return Err(ClusterError::InvalidConfiguration(
                "epoch ceiling must be at least 1".to_string(),
            ));
        }
        self.initialize_centroids(config);
        (config.init_done)(self);

        for epoch in 1..=config.max_epochs {
            let reassigned = self.reassign_memberships();
            let homogenize_changed = self.homogenize_clusters();
            let converged = reassigned == 0 && !homogenize_changed;
            // Converged epochs skip the recomputation so emptied clusters
            // are not rerolled after the stability check.
            if !converged {
                self.recalculate_centroids(config);
            }

            let report = EpochReport { epoch, reassigned, homogenize_changed };
            (config.epoch_done)(self, &report);

            if converged {
                return Ok(RunSummary { epochs: epoch, cluster_sizes: self.cluster_sizes() });
            }
        }
        Err(ClusterError::DidNotConverge { epochs: config.max_epochs })
    }

    // Clears all assignments and seeds the k centroids by copying the feature
    // vectors of k distinct, uniformly drawn points.
    fn initialize_centroids(&mut self, config: &ClusterConfig<T>) {
        for point in self.points.iter_mut() {
            point.cluster = None;
            point.previous_cluster = None;
        }
        self.centroids = self.points
            .choose_multiple(config.rnd.borrow_mut().deref_mut(), self.k)
            .map(|point| Centroid { features: point.features.clone() })
            .collect();
    }

    // Moves every point to its nearest centroid. Returns the amount of points
    // whose cluster at the end of the pass differs from the one they entered
    // the pass with.
    fn reassign_memberships(&mut self) -> usize {
        let centroids = &self.centroids;
        let mut reassigned = 0;
        for point in self.points.iter_mut() {
            point.previous_cluster = point.cluster;
            // An unassigned point starts against an infinite distance, so the
            // first candidate always wins the opening comparison.
            let mut best_distance = match point.cluster {
                Some(cluster) => euclidean(&point.features, &centroids[cluster].features),
                None => T::infinity(),
            };
            for (cluster, centroid) in centroids.iter().enumerate() {
                let distance = euclidean(&point.features, &centroid.features);
                if distance < best_distance {
                    point.cluster = Some(cluster);
                    best_distance = distance;
                }
            }
            if point.cluster != point.previous_cluster {
                reassigned += 1;
            }
        }
        reassigned
    }

    // Forces all points sharing a label into that label's dominant cluster.
    // Returns whether any point ended up in a cluster it was not assigned to
    // when the epoch's reassignment pass began.
    fn homogenize_clusters(&mut self) -> bool {
        // {label: {cluster: member count}}, rebuilt from scratch every pass
        let mut tally: BTreeMap<usize, BTreeMap<usize, usize>> = BTreeMap::new();
        for point in self.points.iter() {
            if let Some(cluster) = point.cluster {
                *tally.entry(point.label).or_default().entry(cluster).or_insert(0) += 1;
            }
        }

        let mut targets: BTreeMap<usize, usize> = BTreeMap::new();
        for (&label, clusters) in tally.iter() {
            // Largest member count wins; the strictly-greater comparison over
            // the ascending cluster order keeps the lower index on ties.
            let mut target = 0;
            let mut target_size = 0;
            for (&cluster, &size) in clusters.iter() {
                if size > target_size {
                    target = cluster;
                    target_size = size;
                }
            }
            targets.insert(label, target);
        }

        let mut changed = false;
        for point in self.points.iter_mut() {
            if let Some(&target) = targets.get(&point.label) {
                if point.cluster != Some(target) {
                    point.cluster = Some(target);
                    if point.cluster != point.previous_cluster {
                        changed = true;
                    }
                }
            }
        }
        changed
    }

    // Replaces every centroid with the dimension-wise mean of its members. A
    // centroid that lost all members is reseeded from one freshly drawn point
    // instead of degenerating into a division by zero.
    fn recalculate_centroids(&mut self, config: &ClusterConfig<T>) {
        for (cluster, centroid) in self.centroids.iter_mut().enumerate() {
            let mut members = 0usize;
            let mut sums = vec![T::zero(); self.dims];
            for point in self.points.iter() {
                if point.cluster == Some(cluster) {
                    sums.iter_mut()
                        .zip(point.features.iter().cloned())
                        .for_each(|(sum, value)| *sum += value);
                    members += 1;
                }
            }
            if members == 0 {
                let reseed = self.points.choose(config.rnd.borrow_mut().deref_mut()).unwrap();
                centroid.features.copy_from_slice(&reseed.features);
            } else {
                let members = T::from(members).unwrap();
                centroid.features.iter_mut()
                    .zip(sums.iter().cloned())
                    .for_each(|(cv, sum)| *cv = sum / members);
            }
        }
    }

    /// The points owned by this engine, in their construction order, with the
    /// current cluster assignment on each one.
    pub fn points(&self) -> &[FeaturePoint<T>] { &self.points }
    /// The current centroids. A centroid's index in this slice is the cluster
    /// id that point assignments refer to. Empty before the first run.
    pub fn centroids(&self) -> &[Centroid<T>] { &self.centroids }
    /// Amount of clusters the points are grouped into.
    pub fn k(&self) -> usize { self.k }
    /// Inclusive upper bound of the labels in the point set.
    pub fn max_label(&self) -> usize { self.max_label }
    /// Dimensionality of the feature vectors.
    pub fn dims(&self) -> usize { self.dims }

    /// Amount of points currently assigned to each cluster, indexed by
    /// cluster id.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.k];
        self.points.iter()
            .filter_map(|point| point.cluster)
            .for_each(|cluster| sizes[cluster] += 1);
        sizes
    }

    /// Consume the engine and hand the points (with their final assignments)
    /// back to the caller.
    pub fn into_points(self) -> Vec<FeaturePoint<T>> { self.points }
}
