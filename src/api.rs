use crate::engine::ClusterEngine;
use crate::primitive::Primitive;
use rand::prelude::*;
use std::cell::RefCell;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&ClusterEngine<T>);
pub type EpochDoneCallbackFn<'a, T> = &'a dyn Fn(&ClusterEngine<T>, &EpochReport);

/// Structure holding the configuration options for a clustering run, such as
/// the random number generator to use, the epoch ceiling, and a couple of
/// callbacks that can be set to get status information from a running
/// calculation.
///
/// For more detailed information about all possible options, have a look at
/// [`ClusterConfigBuilder`].
pub struct ClusterConfig<'a, T: Primitive> {
    /// Callback that is called when the centroid initialization finished
    /// ## Arguments
    /// - **engine**: The engine, directly after centroid seeding
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each epoch
    /// ## Arguments
    /// - **engine**: The engine, after the epoch's centroid recomputation
    ///   (the converging epoch reports without recomputing)
    /// - **report**: [`EpochReport`] with the epoch's membership-change counts
    pub(crate) epoch_done: EpochDoneCallbackFn<'a, T>,
    /// Random number generator used for centroid seeding and reseeding
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// Hard ceiling on the number of epochs before a run is declared
    /// non-converging
    pub(crate) max_epochs: usize,
}
impl<'a, T: Primitive> Default for ClusterConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            epoch_done: &|_, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            max_epochs: 300,
        }
    }
}
impl<'a, T: Primitive> ClusterConfig<'a, T> {
    /// Use the [`ClusterConfigBuilder`] to build a [`ClusterConfig`] instance.
    pub fn build() -> ClusterConfigBuilder<'a, T> {
        ClusterConfigBuilder { config: ClusterConfig::default() }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for ClusterConfig<'a, T> {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { Ok(()) }
}

pub struct ClusterConfigBuilder<'a, T: Primitive> {
    config: ClusterConfig<'a, T>,
}
impl<'a, T: Primitive> ClusterConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization,
    /// before the epoch loop starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each epoch of a running
    /// clustering calculation.
    pub fn epoch_done(mut self, epoch_done: EpochDoneCallbackFn<'a, T>) -> Self {
        self.config.epoch_done = epoch_done; self
    }
    /// Set the random number generator that should be used for centroid seeding
    /// and for the reseeding of emptied clusters.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the maximum number of epochs a run may take before it is aborted
    /// with [`ClusterError::DidNotConverge`](crate::ClusterError::DidNotConverge).
    /// Must be at least 1; a run with a zero ceiling is rejected as
    /// [`ClusterError::InvalidConfiguration`](crate::ClusterError::InvalidConfiguration).
    /// ## Default
    /// `300`
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.config.max_epochs = max_epochs; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> ClusterConfig<'a, T> { self.config }
}

/// Membership-change counts of one finished epoch, as passed to the
/// `epoch_done` callback.
///
/// ## Fields
/// - **epoch**: Number of the finished epoch (starting at 1)
/// - **reassigned**: Amount of points whose cluster changed during the epoch's
///   distance-based reassignment pass
/// - **homogenize_changed**: Whether label homogenization moved any point to a
///   cluster it was not assigned to when the epoch began
#[derive(Clone, Debug)]
pub struct EpochReport {
    pub epoch: usize,
    pub reassigned: usize,
    pub homogenize_changed: bool,
}

/// Final overview of a converged run, as returned by
/// [`ClusterEngine::run`](crate::ClusterEngine::run).
///
/// ## Fields
/// - **epochs**: Amount of epochs the run took, including the final epoch that
///   produced no membership change
/// - **cluster_sizes**: Amount of points assigned to each cluster, indexed by
///   cluster id
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub epochs: usize,
    pub cluster_sizes: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let conf: ClusterConfig<f64> = ClusterConfig::build().max_epochs(17).build();
        assert_eq!(conf.max_epochs, 17);
        let default_conf: ClusterConfig<f64> = ClusterConfig::default();
        assert_eq!(default_conf.max_epochs, 300);
    }

    #[test]
    fn injected_generator_is_used() {
        let conf: ClusterConfig<f64> = ClusterConfig::build()
            .random_generator(StdRng::seed_from_u64(1337))
            .build();
        let mut reference = StdRng::seed_from_u64(1337);
        let drawn = conf.rnd.borrow_mut().next_u64();
        assert_eq!(drawn, reference.next_u64());
    }
}
