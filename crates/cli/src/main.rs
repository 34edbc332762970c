use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polysplit::api::{tally, Dcel, EdgeId};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod summary;

use summary::{write_summary, Counts, RunSummary, SplitStats};

#[derive(Parser)]
#[command(name = "polysplit")]
#[command(about = "Split a polygon along midpoint chords and tally towers per face")]
#[command(version = polysplit::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build, split, tally the towers and write the per-face report
    Run {
        /// Towers CSV (header line, then id,postcode,population,contact,x,y)
        #[arg(long)]
        towers: PathBuf,
        /// Whitespace-separated x y pairs
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// One `a b` edge pair per line; standard input when omitted
        #[arg(long)]
        splits: Option<PathBuf>,
        /// Optional JSON run summary
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Build and split only, then verify the subdivision and print its counts
    Check {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long)]
        splits: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            towers,
            polygon,
            out,
            splits,
            summary,
        } => run(&towers, &polygon, &out, splits.as_deref(), summary.as_deref()),
        Action::Check { polygon, splits } => check(&polygon, splits.as_deref()),
    }
}

fn build(polygon: &Path, splits: Option<&Path>) -> Result<(Dcel, SplitStats)> {
    let ring = io::read_polygon(polygon)?;
    let mut dcel = Dcel::from_polygon(&ring)
        .with_context(|| format!("building subdivision from {}", polygon.display()))?;
    tracing::info!(vertices = ring.len(), winding = ?dcel.winding(), "polygon");
    let requests = io::read_splits(splits)?;
    let stats = apply_splits(&mut dcel, requests);
    tracing::info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        faces = dcel.num_faces(),
        "splits"
    );
    Ok((dcel, stats))
}

/// Apply requests in order; rejected ones are logged and counted.
fn apply_splits(dcel: &mut Dcel, requests: Vec<(EdgeId, EdgeId)>) -> SplitStats {
    let mut stats = SplitStats {
        requested: requests.len(),
        ..SplitStats::default()
    };
    for (index, ((a, b), result)) in requests
        .iter()
        .zip(dcel.split_all(requests.iter().copied()))
        .enumerate()
    {
        match result {
            Ok(_) => stats.accepted += 1,
            Err(err) => {
                stats.rejected += 1;
                tracing::warn!(request = index, a = a.0, b = b.0, %err, "split rejected");
            }
        }
    }
    stats
}

fn run(
    towers: &Path,
    polygon: &Path,
    out: &Path,
    splits: Option<&Path>,
    summary_out: Option<&Path>,
) -> Result<()> {
    tracing::info!(towers = %towers.display(), polygon = %polygon.display(), out = %out.display(), "run");
    let watchtowers = io::read_towers(towers)?;
    let (dcel, stats) = build(polygon, splits)?;
    let tallied = tally(&dcel, &watchtowers);
    io::write_report_file(out, &watchtowers, &tallied)?;
    tracing::info!(
        towers = watchtowers.len(),
        faces = tallied.num_faces(),
        total = tallied.total(),
        "report written"
    );

    if let Some(path) = summary_out {
        let params = serde_json::json!({
            "towers": towers,
            "polygon": polygon,
            "splits": splits,
            "out": out,
        });
        let doc = RunSummary::new(params, &dcel, stats, watchtowers.len(), &tallied);
        write_summary(path, &doc)?;
    }
    Ok(())
}

fn check(polygon: &Path, splits: Option<&Path>) -> Result<()> {
    let (dcel, stats) = build(polygon, splits)?;
    if let Err(err) = dcel.check_invariants() {
        bail!("subdivision is inconsistent: {err}");
    }
    let obj = serde_json::json!({
        "counts": Counts::of(&dcel),
        "splits": stats,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn square_end_to_end() {
        let dir = tempdir().unwrap();
        let polygon = dir.path().join("polygon.txt");
        let splits = dir.path().join("splits.txt");
        let towers = dir.path().join("towers.csv");
        let out = dir.path().join("out").join("report.txt");
        let summary_path = dir.path().join("summary.json");
        fs::write(&polygon, "0 0\n1 0\n1 1\n0 1\n").unwrap();
        fs::write(&splits, "1 3\n1 3 oops\n9 0\n").unwrap();
        fs::write(
            &towers,
            "id,postcode,population,contact,x,y\n\
             A,3000,10,Ann,0.5,0.25\n\
             B,3001,20,Bo,0.5,0.75\n",
        )
        .unwrap();

        run(&towers, &polygon, &out, Some(splits.as_path()), Some(summary_path.as_path())).unwrap();

        let report = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "0");
        assert!(lines[1].starts_with("Watchtower ID: A, Postcode: 3000, Population Served: 10,"));
        assert_eq!(lines[2], "1");
        assert!(lines[3].ends_with("x: 0.500000, y: 0.750000"));
        assert_eq!(lines[4], "Face 0 population served: 10");
        assert_eq!(lines[5], "Face 1 population served: 20");
        assert_eq!(lines.len(), 6);

        let parsed: serde_json::Value =
            serde_json::from_slice(&fs::read(&summary_path).unwrap()).unwrap();
        assert_eq!(parsed["summary"]["splits"]["accepted"], 1);
        assert_eq!(parsed["summary"]["splits"]["rejected"], 1);
        assert_eq!(parsed["summary"]["total"], 30);
    }

    #[test]
    fn header_only_towers_still_reports_every_face() {
        let dir = tempdir().unwrap();
        let polygon = dir.path().join("polygon.txt");
        let splits = dir.path().join("splits.txt");
        let towers = dir.path().join("towers.csv");
        let out = dir.path().join("report.txt");
        fs::write(&polygon, "0 0\n1 0\n1 1\n0 1\n").unwrap();
        fs::write(&splits, "1 3\n").unwrap();
        fs::write(&towers, "id,postcode,population,contact,x,y\n").unwrap();

        run(&towers, &polygon, &out, Some(splits.as_path()), None).unwrap();

        let report = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "0",
                "1",
                "Face 0 population served: 0",
                "Face 1 population served: 0",
            ]
        );
    }

    #[test]
    fn rejected_splits_are_counted() {
        let mut dcel = Dcel::from_polygon(&[
            polysplit::Point2::new(0.0, 0.0),
            polysplit::Point2::new(1.0, 0.0),
            polysplit::Point2::new(0.0, 1.0),
        ])
        .unwrap();
        let stats = apply_splits(
            &mut dcel,
            vec![(EdgeId(0), EdgeId(0)), (EdgeId(0), EdgeId(7)), (EdgeId(0), EdgeId(1))],
        );
        assert_eq!((stats.requested, stats.accepted, stats.rejected), (3, 1, 2));
        assert_eq!(dcel.num_faces(), 2);
    }

    #[test]
    fn degenerate_polygon_fails() {
        let dir = tempdir().unwrap();
        let polygon = dir.path().join("polygon.txt");
        let splits = dir.path().join("splits.txt");
        fs::write(&polygon, "0 0 1 1").unwrap();
        fs::write(&splits, "").unwrap();
        assert!(check(&polygon, Some(splits.as_path())).is_err());
    }
}
