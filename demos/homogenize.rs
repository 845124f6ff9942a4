use labelmeans::*;
use std::collections::BTreeMap;

fn main() {
    let (points_per_label, dims, k, label_cnt) = (200, 13, 8, 10);

    // Generate some random labeled data, one loose blob per label
    let mut points = Vec::with_capacity(points_per_label * label_cnt);
    for label in 0..label_cnt {
        let center: Vec<f64> = (0..dims).map(|_| (rand::random::<f64>() - 0.5) * 20.0).collect();
        for _ in 0..points_per_label {
            let features = center.iter().map(|c| c + rand::random::<f64>() - 0.5).collect();
            points.push(FeaturePoint::new(label, features));
        }
    }

    // Cluster the points, forcing each label into a single cluster
    let mut engine = ClusterEngine::new(points, k, label_cnt - 1).unwrap();
    match engine.run(&ClusterConfig::default()) {
        Ok(summary) => {
            println!("Converged after {} epochs", summary.epochs);
            println!("Cluster sizes: {:?}", summary.cluster_sizes);
        }
        Err(err) => println!("{}", err),
    }

    let mut label_clusters = BTreeMap::new();
    for point in engine.points() {
        if let Some(cluster) = point.cluster() {
            label_clusters.entry(point.label()).or_insert(cluster);
        }
    }
    println!("Label -> cluster: {:?}", label_clusters);
}
