//! Text and JSON rendering of layout estimates.

use std::io::{self, Write};

use serde::Serialize;

use state_layout::{
    LayoutResult, compare::Comparison, sizing::PaddedSize, style::StyleRegistry, sweep::Sweep,
};

use crate::error::CliError;

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn json(out: &mut impl Write, value: &impl Serialize) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn layout(out: &mut impl Write, layout: &LayoutResult) -> io::Result<()> {
    let style = layout.style();
    writeln!(out, "state-layout")?;
    writeln!(out, "Style        : {} ({})", style.name(), style.key())?;
    writeln!(out, "Note         : {}", style.note())?;
    writeln!(out)?;
    writeln!(out, "Leaves       : {}", layout.leaves())?;
    writeln!(out, "Fanout       : {}", layout.fanout())?;
    writeln!(out, "Hash bytes   : {}", layout.hash_bytes())?;
    writeln!(out)?;
    writeln!(out, "Tree shape:")?;
    writeln!(out, "  Height          : {}", layout.height())?;
    writeln!(out, "  Total nodes     : {}", layout.total_nodes())?;
    writeln!(out, "  Nodes per level : {:?}", layout.nodes_per_level())?;
    writeln!(out)?;
    writeln!(out, "Proof / commitment estimates:")?;
    writeln!(out, "  Branch length   : {} levels", layout.proof_branch_length())?;
    writeln!(out, "  Per-proof bytes : {} bytes", layout.per_proof_bytes())?;
    writeln!(out, "  Per-proof bits  : {} bits", layout.per_proof_bits())?;
    writeln!(
        out,
        "  Commitment size : {} bytes (all nodes)",
        layout.total_commitment_bytes()
    )?;
    Ok(())
}

pub fn sweep(out: &mut impl Write, sweep: &Sweep) -> io::Result<()> {
    let header = format!(
        "{:>10}  {:>6}  {:>6}  {:>12}  {:>12}  {:>16}",
        "LEAVES", "FANOUT", "HEIGHT", "NODES", "PROOF BYTES", "TOTAL COMM BYTES"
    );
    writeln!(out, "Style: {}", sweep.style())?;
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.len()))?;

    for row in sweep.rows() {
        writeln!(
            out,
            "{:>10}  {:>6}  {:>6}  {:>12}  {:>12}  {:>16}",
            row.leaves,
            row.fanout.get(),
            row.height,
            row.total_nodes,
            row.per_proof_bytes,
            row.total_commitment_bytes
        )?;
    }
    Ok(())
}

pub fn comparison(out: &mut impl Write, comparison: &Comparison) -> io::Result<()> {
    let metric = comparison.metric();
    let header = format!(
        "{:>6}  {:>6}  {:>10}  {:>8}  {:>12}  {:>16}  {:>12}",
        "FANOUT", "HEIGHT", "NODES", "BRANCH", "PROOF BYTES", "TOTAL COMM BYTES", "METRIC"
    );
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.len()))?;

    for candidate in comparison.candidates() {
        let mark = if std::ptr::eq(candidate, comparison.best()) {
            "*"
        } else {
            " "
        };
        writeln!(
            out,
            "{:>6}  {:>6}  {:>10}  {:>8}  {:>12}  {:>16}  {:>12}{mark}",
            candidate.fanout().get(),
            candidate.height(),
            candidate.total_nodes(),
            candidate.proof_branch_length(),
            candidate.per_proof_bytes(),
            candidate.total_commitment_bytes(),
            metric.value(candidate),
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Best fanout for leaves={}, style={}, metric={}: {} (marked with *)",
        comparison.leaves(),
        comparison.style(),
        metric,
        comparison.best_fanout()
    )?;
    Ok(())
}

pub fn size(out: &mut impl Write, size: &PaddedSize) -> io::Result<()> {
    writeln!(out, "state-layout :: tree sizing")?;
    writeln!(out, "  leaves           : {}", size.leaves())?;
    writeln!(out, "  fanout           : {}", size.fanout())?;
    writeln!(out)?;
    writeln!(out, "  height (levels)  : {}", size.height())?;
    writeln!(out, "  leaf nodes       : {}", size.full_leaves())?;
    writeln!(out, "  internal nodes   : {}", size.internal_nodes())?;
    writeln!(out, "  total nodes      : {}", size.total_nodes())?;
    writeln!(out)?;
    writeln!(out, "  padding leaves   : {}", size.padding_leaves())?;
    writeln!(
        out,
        "  padding fraction : {:.4}%",
        size.padding_fraction() * 100.0
    )?;
    Ok(())
}

pub fn styles(out: &mut impl Write, registry: &StyleRegistry) -> io::Result<()> {
    for style in registry.iter() {
        writeln!(
            out,
            "{:<12} {:>3} bytes  {}",
            style.key(),
            style.hash_bytes(),
            style.name()
        )?;
        if !style.note().is_empty() {
            writeln!(out, "{:<12} {}", "", style.note())?;
        }
    }
    Ok(())
}
