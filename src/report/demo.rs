use serde::{Serialize, Deserialize};
use std::io::Write;

use crate::error::Result;
use crate::report::config::{DemoConfig, Section};
use crate::report::format::banner;
use crate::report::sections::{
    takeaways, CircuitReport, GatesReport, TreeReport, VectorizedReport, XorReport,
};
use crate::tree::tree::load_cases_json;
use crate::tree::weather::go_outside_cases;
use crate::vectorized::dataset::Dataset;

pub const TITLE: &str = "BOOLEAN LOGIC IN MACHINE LEARNING";

/// Everything a demo run computed, one optional entry per section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gates: Option<GatesReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit: Option<CircuitReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xor: Option<XorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vectorized: Option<VectorizedReport>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub takeaways: Vec<String>,
}

/// Computes every section selected in `config`.
pub fn build_report(config: &DemoConfig) -> Result<DemoReport> {
    let mut report = DemoReport::default();
    for section in &config.sections {
        log::info!("building {section:?} section");
        match section {
            Section::Gates => report.gates = Some(GatesReport::build(&config.gates)),
            Section::Circuit => report.circuit = Some(CircuitReport::build()?),
            Section::Tree => {
                let tree = config.tree_in_use()?;
                let cases = match &config.cases_path {
                    Some(path) => load_cases_json(path)?,
                    None => go_outside_cases(),
                };
                report.tree = Some(TreeReport::build(&tree, &cases)?);
            }
            Section::Xor => report.xor = Some(XorReport::build(config.grid)?),
            Section::Vectorized => {
                let dataset = match config.random_rows {
                    Some(rows) => Dataset::random(rows, config.seed),
                    None => Dataset::demo()?,
                };
                report.vectorized = Some(VectorizedReport::build(&dataset)?);
            }
            Section::Takeaways => {
                report.takeaways = takeaways::TAKEAWAYS.iter().map(|s| s.to_string()).collect();
            }
        }
    }
    Ok(report)
}

/// Builds the report and writes it as text or JSON.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let report = build_report(config)?;
    if config.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    if config.is_full_walkthrough() {
        write!(out, "{}", banner(TITLE))?;
    }
    for section in &config.sections {
        match section {
            Section::Gates => render_some(&report.gates, |r| r.render(&mut *out))?,
            Section::Circuit => render_some(&report.circuit, |r| r.render(&mut *out))?,
            Section::Tree => render_some(&report.tree, |r| r.render(&mut *out, config.trace))?,
            Section::Xor => render_some(&report.xor, |r| r.render(&mut *out))?,
            Section::Vectorized => render_some(&report.vectorized, |r| r.render(&mut *out))?,
            Section::Takeaways => takeaways::render(out)?,
        }
    }
    out.flush()?;
    Ok(())
}

fn render_some<T, F>(section: &Option<T>, render: F) -> Result<()>
where
    F: FnOnce(&T) -> Result<()>,
{
    match section {
        Some(report) => render(report),
        None => Ok(()),
    }
}
