#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use std::collections::HashMap;

	use crate::{ClusterEngine, Primitive};

	/// Asserts that the engine's assignment matches the expected grouping up
	/// to a renaming of the cluster ids: points listed in the same group must
	/// share a cluster, points from different groups must not.
	pub fn assert_grouping_eq<T: Primitive>(engine: &ClusterEngine<T>, groups: &[&[usize]]) {
		let mut idmap = HashMap::new();
		let mut idrevmap = HashMap::new();
		for (group_id, members) in groups.iter().enumerate() {
			for &point_idx in members.iter() {
				let cluster = match engine.points()[point_idx].cluster() {
					Some(cluster) => cluster,
					None => panic!("Point {} is unassigned", point_idx),
				};
				if !idmap.contains_key(&group_id) {
					assert_eq!(idrevmap.contains_key(&cluster), false,
						"Cluster {} already serves group {}", cluster, idrevmap.get(&cluster).cloned().unwrap_or_default());
					idmap.insert(group_id, cluster);
					idrevmap.insert(cluster, group_id);
				}
				if idmap[&group_id] != cluster {
					panic!(
						"Cluster assignments different at point {}.\nMapping(group -> cluster): {:?}\nActual cluster: {}",
						point_idx, idmap, cluster
					);
				}
			}
		}
	}
}
