use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::Serialize;
use statradar_core::{RadarChart, Stat, SvgSurface};

use crate::app::App;
use crate::cli::CliArgs;

/// Compare from the command line without starting the terminal UI.
pub async fn run_headless(app: &mut App, args: &CliArgs) -> Result<()> {
    if args.compare.is_empty() {
        return print_dataset_summary(app, args.json);
    }
    if args.compare.len() > 3 {
        return Err(eyre!(
            "--compare takes at most 3 names, got {}",
            args.compare.len()
        ));
    }

    for (index, name) in args.compare.iter().enumerate() {
        app.form.set_text(&app.store, index, name);
    }

    let chart = app
        .form
        .submit(&app.store, &app.config)
        .map_err(|error| eyre!(error))?;

    if let Some(path) = &args.svg {
        let mut surface = SvgSurface::new();
        surface.render(&chart);
        tokio::fs::write(path, surface.into_document()).await?;
        tracing::info!(%path, "wrote svg chart");
    }

    if args.json {
        let report = ComparisonReport::from_chart(&chart);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.svg.is_none() || args.headless {
        println!("{}", comparison_table(&chart));
    }

    Ok(())
}

fn print_dataset_summary(app: &App, json: bool) -> Result<()> {
    let summary = DatasetSummary {
        path: app.data_path.display().to_string(),
        creatures: app.store.len(),
        names: app
            .store
            .records()
            .iter()
            .map(|record| record.name.clone())
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("\nStat Radar Dataset");
    println!("==================");
    println!("Source: {}", summary.path);
    println!("Creatures: {}", summary.creatures);
    for name in &summary.names {
        println!("- {name}");
    }
    println!("\nPass --compare NAME two or three times to compare.");
    Ok(())
}

fn comparison_table(chart: &RadarChart) -> String {
    let mut lines = Vec::new();
    let mut header = format!("{:<10}", "Stat");
    for dataset in &chart.datasets {
        header.push_str(&format!(" {:>12}", dataset.name));
    }
    lines.push(header);
    lines.push("-".repeat(10 + 13 * chart.datasets.len()));

    for stat in Stat::ALL {
        let mut line = format!("{:<10}", stat.label());
        for dataset in &chart.datasets {
            line.push_str(&format!(" {:>12}", dataset.points[stat.index()].value));
        }
        lines.push(line);
    }

    let mut total = format!("{:<10}", "Total");
    for dataset in &chart.datasets {
        total.push_str(&format!(" {:>12}", dataset.profile.total()));
    }
    lines.push(total);
    lines.join("\n")
}

#[derive(Serialize)]
struct DatasetSummary {
    path: String,
    creatures: usize,
    names: Vec<String>,
}

#[derive(Serialize)]
struct ComparisonReport {
    max_value: f64,
    subjects: Vec<SubjectReport>,
}

#[derive(Serialize)]
struct SubjectReport {
    name: String,
    color: String,
    stats: Vec<(String, u16)>,
    total: u32,
}

impl ComparisonReport {
    fn from_chart(chart: &RadarChart) -> Self {
        let subjects = chart
            .datasets
            .iter()
            .map(|dataset| SubjectReport {
                name: dataset.name.clone(),
                color: dataset.color.hex(),
                stats: dataset
                    .points
                    .iter()
                    .map(|point| (point.stat.as_str().to_string(), point.value))
                    .collect(),
                total: dataset.profile.total(),
            })
            .collect();

        Self {
            max_value: chart.config.max_value,
            subjects,
        }
    }
}
