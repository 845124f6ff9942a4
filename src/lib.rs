//! # labelmeans - API documentation
//!
//! Labelmeans is a small rust library for k-means clustering of labeled
//! points, with an additional homogenization pass that keeps every label in
//! exactly one cluster.
//!
//! ## Design target
//! The crate is built for pre-labeled data (e.g. feature frames that carry a
//! class id), where a plain k-means partition is not enough: after every
//! epoch's nearest-centroid reassignment, all points sharing a label are
//! forced into the cluster that already holds most of that label. Points are
//! given as plain `Vec`s instead of any high-level arithmetics / matrix crate
//! such as nalgebra or ndarray, so the API-surface stays rather plain.
//!
//! ## Algorithm
//! A run starts by seeding the k centroids from k distinct randomly drawn
//! points. Each epoch then executes three passes in a fixed order:
//! 1. **Reassignment**: every point moves to its nearest centroid
//!    (euclidean distance, earliest centroid wins ties)
//! 2. **Homogenization**: every label's points are forced into that label's
//!    most populated cluster (lowest cluster index wins ties)
//! 3. **Recalculation**: every centroid becomes the mean of its members;
//!    emptied clusters are reseeded from a randomly drawn point
//!
//! The run ends successfully once an epoch changes no membership at all.
//! Such an epoch skips the recalculation pass, so the reported state is the
//! measured fixed point. A run that keeps oscillating instead ends with an
//! error once the configured epoch ceiling is reached.
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use labelmeans::*;
//!
//! fn main() {
//!     // Two tight, well separated label groups
//!     let points = vec![
//!         FeaturePoint::new(0, vec![0.0f64, 0.0]),
//!         FeaturePoint::new(0, vec![0.1, 0.0]),
//!         FeaturePoint::new(1, vec![10.0, 10.0]),
//!         FeaturePoint::new(1, vec![10.1, 10.0]),
//!     ];
//!
//!     let mut engine = ClusterEngine::new(points, 2, 1).unwrap();
//!     let summary = engine.run(&ClusterConfig::default()).unwrap();
//!
//!     println!("Converged after {} epochs", summary.epochs);
//!     println!("Cluster sizes: {:?}", summary.cluster_sizes);
//!     for point in engine.points() {
//!         println!("label {} -> cluster {}", point.label(), point.cluster().unwrap());
//!     }
//! }
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use labelmeans::*;
//!
//! fn main() {
//!     let points = vec![
//!         FeaturePoint::new(0, vec![0.0f64, 0.0]),
//!         FeaturePoint::new(0, vec![0.1, 0.0]),
//!         FeaturePoint::new(1, vec![10.0, 10.0]),
//!         FeaturePoint::new(1, vec![10.1, 10.0]),
//!     ];
//!
//!     let conf = ClusterConfig::build()
//!         .init_done(&|engine| println!("Initialization completed ({} centroids).", engine.centroids().len()))
//!         .epoch_done(&|engine, report|
//!             println!("Epoch {} - reassigned: {} | homogenize changed: {} | sizes: {:?}",
//!                 report.epoch, report.reassigned, report.homogenize_changed, engine.cluster_sizes()))
//!         .max_epochs(50)
//!         .build();
//!
//!     let mut engine = ClusterEngine::new(points, 2, 1).unwrap();
//!     let summary = engine.run(&conf).unwrap();
//!     println!("Done after {} epochs", summary.epochs);
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`ClusterEngine`] struct. This struct is
//! generic over the underlying primitive type that should be used for the
//! calculations. To use it, an instance is created from the labeled
//! [`FeaturePoint`]s (taking them over into its ownership), the wanted amount
//! of clusters **k** and the highest label id in the set.
//!
//! Calling [`ClusterEngine::run`] with a [`ClusterConfig`] mutates the engine
//! in place: afterwards every point carries its cluster assignment and the
//! [`ClusterEngine::centroids`] slice holds the final centroids. The config
//! carries the random generator (inject a seeded one for reproducible runs),
//! the epoch ceiling, and the optional status event callbacks.
//!
//! **Note**: After a successful run, each label's points all sit in one
//! single cluster. That is a postcondition of the homogenization pass, not a
//! coincidence of the data.

#[macro_use] mod helpers;
mod primitive;
mod point;
mod api;
mod engine;
mod errors;

pub use api::{ClusterConfig, ClusterConfigBuilder, EpochDoneCallbackFn, EpochReport, InitDoneCallbackFn, RunSummary};
pub use engine::ClusterEngine;
pub use errors::ClusterError;
pub use point::{Centroid, FeaturePoint};
pub use primitive::Primitive;
