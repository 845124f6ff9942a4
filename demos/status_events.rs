use labelmeans::*;
use rand::prelude::*;

fn main() {
    let (points_per_label, dims, k, label_cnt) = (50, 13, 4, 6);

    // Generate some random labeled data, reproducibly
    let mut rnd = StdRng::seed_from_u64(1337);
    let mut points = Vec::with_capacity(points_per_label * label_cnt);
    for label in 0..label_cnt {
        let center: Vec<f64> = (0..dims).map(|_| rnd.gen_range(-10.0..10.0)).collect();
        for _ in 0..points_per_label {
            let features = center.iter().map(|c| c + rnd.gen_range(-0.5..0.5)).collect();
            points.push(FeaturePoint::new(label, features));
        }
    }

    let conf = ClusterConfig::build()
        .init_done(&|engine| println!("Initialization completed ({} centroids).", engine.centroids().len()))
        .epoch_done(&|engine, report|
            println!("Epoch {} - reassigned: {} | homogenize changed: {} | sizes: {:?}",
                report.epoch, report.reassigned, report.homogenize_changed, engine.cluster_sizes()))
        .random_generator(StdRng::seed_from_u64(1337))
        .max_epochs(100)
        .build();

    let mut engine = ClusterEngine::new(points, k, label_cnt - 1).unwrap();
    match engine.run(&conf) {
        Ok(summary) => println!("Done after {} epochs", summary.epochs),
        Err(err) => println!("{}", err),
    }
}
