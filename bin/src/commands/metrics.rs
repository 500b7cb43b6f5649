//! Metrics command implementation.
//!
//! This module lists the time-series metrics of a region document together
//! with their timestamp shape and size.

use anyhow::Result;
use trendline_lib::prelude::*;

use crate::config::Settings;

/// List the metrics of a region.
pub(crate) fn list_metrics(settings: &Settings, code: &str) -> Result<()> {
    let dataset = settings.dataset(code)?;
    let names = dataset.metric_names();

    if names.is_empty() {
        println!("No metrics found.");
        return Ok(());
    }

    if let Some(region) = dataset.code() {
        println!("Region: {region}\n");
    }

    println!("{:<32} {:<8} {:>8}", "METRIC", "SHAPE", "VALUES");
    println!("{}", "-".repeat(50));

    for name in &names {
        match dataset.metric(name) {
            Ok(metric) => {
                let shape = classify(&metric.values).map_or("-", |shape| shape.as_str());
                println!("{:<32} {:<8} {:>8}", name, shape, metric.values.len());
            }
            Err(e) => {
                tracing::warn!(metric = %name, error = %e, "skipping unreadable metric");
                println!("{:<32} {:<8} {:>8}", name, "invalid", "-");
            }
        }
    }

    println!("\nTotal: {} metrics", names.len());
    Ok(())
}
