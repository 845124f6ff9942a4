//! Clusters labeled feature frames from a text file. Every line holds one
//! frame: the label followed by the feature values, whitespace separated.
//!
//! Usage: labeled_frames [file] [k]

use labelmeans::*;
use std::process::exit;

fn parse_frames(content: &str) -> Result<Vec<FeaturePoint<f64>>, String> {
    let mut points = Vec::new();
    for (nr, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let label = fields.next().unwrap()
            .parse::<usize>()
            .map_err(|e| format!("line {}: bad label: {}", nr + 1, e))?;
        let features = fields
            .map(|f| f.parse::<f64>().map_err(|e| format!("line {}: bad feature: {}", nr + 1, e)))
            .collect::<Result<Vec<_>, _>>()?;
        points.push(FeaturePoint::new(label, features));
    }
    Ok(points)
}

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "labeled_frames.txt".to_string());
    let k = match args.next() {
        Some(arg) => arg.parse::<usize>().unwrap_or_else(|e| {
            eprintln!("Bad cluster count: {}", e);
            exit(1)
        }),
        None => 8,
    };

    let content = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("Unable to open {}: {}", path, e);
        exit(1)
    });
    let points = parse_frames(&content).unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1)
    });
    let max_label = points.iter().map(|p| p.label()).max().unwrap_or(0);
    eprintln!("Read {} frames from {}", points.len(), path);

    let mut engine = ClusterEngine::new(points, k, max_label).unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1)
    });
    eprintln!("Clustering {}-dimensional frames with labels 0..={} into {} clusters",
        engine.dims(), engine.max_label(), engine.k());
    if let Err(err) = engine.run(&ClusterConfig::default()) {
        eprintln!("{}", err);
    }

    // One line per frame, in input order: label and assigned cluster
    for point in engine.into_points() {
        if let Some(cluster) = point.cluster() {
            println!("{} {}", point.label(), cluster);
        }
    }
}
