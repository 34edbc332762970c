//! Input readers and the report writer.
//!
//! Readers are lenient: malformed tokens, lines and rows are skipped with a
//! warning instead of failing the run. Only I/O errors are fatal.

use anyhow::{Context, Result};
use polars::prelude::*;
use polysplit::api::{EdgeId, FaceTally, Point2, Weighted};
use std::fs;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// One query point from the towers CSV.
#[derive(Clone, Debug, PartialEq)]
pub struct Watchtower {
    pub id: String,
    pub postcode: String,
    pub population: i64,
    pub contact: String,
    pub x: f64,
    pub y: f64,
}

impl Weighted for Watchtower {
    fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    fn weight(&self) -> i64 {
        self.population
    }
}

/// Vertex ring from whitespace-separated coordinate pairs.
///
/// Stops at the first token that is not a float; a trailing unpaired
/// coordinate is dropped.
pub fn parse_polygon(text: &str) -> Vec<Point2> {
    let mut coords = Vec::new();
    let mut tokens = text.split_whitespace();
    for tok in tokens.by_ref() {
        match tok.parse::<f64>() {
            Ok(v) => coords.push(v),
            Err(_) => {
                tracing::warn!(token = tok, "polygon input stops at non-numeric token");
                break;
            }
        }
    }
    let ignored = tokens.count();
    if ignored > 0 {
        tracing::warn!(ignored, "ignored trailing polygon tokens");
    }
    if coords.len() % 2 == 1 {
        tracing::warn!(value = coords[coords.len() - 1], "ignored unpaired coordinate");
    }
    coords
        .chunks_exact(2)
        .map(|c| Point2::new(c[0], c[1]))
        .collect()
}

pub fn read_polygon(path: &Path) -> Result<Vec<Point2>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading polygon {}", path.display()))?;
    Ok(parse_polygon(&text))
}

/// Split requests, one `a b` pair of edge ids per line. Blank lines are ignored;
/// other lines that are not exactly two non-negative integers are skipped.
pub fn parse_splits<R: BufRead>(reader: R) -> Result<Vec<(EdgeId, EdgeId)>> {
    let mut out = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("reading split requests")?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [a, b] => match (a.parse::<usize>(), b.parse::<usize>()) {
                (Ok(a), Ok(b)) => out.push((EdgeId(a), EdgeId(b))),
                _ => tracing::warn!(line = index + 1, text = line.as_str(), "skipping split request"),
            },
            _ => tracing::warn!(line = index + 1, text = line.as_str(), "skipping split request"),
        }
    }
    Ok(out)
}

/// Split requests from `path`, or from standard input when `None`.
pub fn read_splits(path: Option<&Path>) -> Result<Vec<(EdgeId, EdgeId)>> {
    match path {
        Some(p) => {
            let file =
                fs::File::open(p).with_context(|| format!("opening splits {}", p.display()))?;
            parse_splits(std::io::BufReader::new(file))
        }
        None => parse_splits(std::io::stdin().lock()),
    }
}

/// Towers CSV: one header line, then `id,postcode,population,contact,x,y`.
///
/// Every field is read as text and cast afterwards, so a bad value nulls
/// its row instead of failing the read; such rows are dropped. A file with
/// no records after the header yields no towers.
pub fn read_towers(path: &Path) -> Result<Vec<Watchtower>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("opening towers {}", path.display()))?;
    if !has_records(&text) {
        tracing::warn!(path = %path.display(), "towers file has no records");
        return Ok(Vec::new());
    }
    let raw = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_skip_rows(1)
        .with_infer_schema_length(Some(0))
        .with_truncate_ragged_lines(true)
        .finish()
        .with_context(|| format!("opening towers {}", path.display()))?
        .select([
            col("column_1").alias("id"),
            col("column_2").alias("postcode"),
            col("column_3").cast(DataType::Int64).alias("population"),
            col("column_4").alias("contact"),
            col("column_5").cast(DataType::Float64).alias("x"),
            col("column_6").cast(DataType::Float64).alias("y"),
        ])
        .collect()
        .with_context(|| format!("reading towers {}", path.display()))?;
    let df = raw.clone().lazy().drop_nulls(None).collect()?;
    let dropped = raw.height() - df.height();
    if dropped > 0 {
        tracing::warn!(dropped, "skipped malformed tower rows");
    }

    let ids = df.column("id")?.str()?;
    let postcodes = df.column("postcode")?.str()?;
    let populations = df.column("population")?.i64()?;
    let contacts = df.column("contact")?.str()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;

    let mut towers = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        if let (Some(id), Some(postcode), Some(population), Some(contact), Some(x), Some(y)) = (
            ids.get(i),
            postcodes.get(i),
            populations.get(i),
            contacts.get(i),
            xs.get(i),
            ys.get(i),
        ) {
            towers.push(Watchtower {
                id: id.to_string(),
                postcode: postcode.to_string(),
                population,
                contact: contact.to_string(),
                x,
                y,
            });
        }
    }
    Ok(towers)
}

/// Whether any non-blank line follows the header.
fn has_records(text: &str) -> bool {
    text.lines().skip(1).any(|l| !l.trim().is_empty())
}

/// Per-face listing of member towers, then per-face totals.
pub fn write_report<W: Write>(mut w: W, towers: &[Watchtower], tally: &FaceTally) -> Result<()> {
    for (face, members) in tally.members.iter().enumerate() {
        writeln!(w, "{face}")?;
        for &i in members {
            let t = &towers[i];
            writeln!(
                w,
                "Watchtower ID: {}, Postcode: {}, Population Served: {}, \
                 Watchtower Point of Contact Name: {}, x: {:.6}, y: {:.6}",
                t.id, t.postcode, t.population, t.contact, t.x, t.y
            )?;
        }
    }
    for (face, total) in tally.totals.iter().enumerate() {
        writeln!(w, "Face {face} population served: {total}")?;
    }
    Ok(())
}

pub fn write_report_file(path: &Path, towers: &[Watchtower], tally: &FaceTally) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_report(&mut w, towers, tally)?;
    w.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
