use crate::cli::OutputFormat;
use anyhow::Context;
use log::info;
use pdbstat_core::{Composition, Percentages, RecordSet, StructureSummary};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn execute(input: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let records = RecordSet::from_path(&input)
        .with_context(|| format!("could not read PDB file {}", input.display()))?;
    info!(
        "{}: {} ATOM and {} HETATM records",
        input.display(),
        records.atoms.len(),
        records.hetero_atoms.len()
    );
    let summary = StructureSummary::from_records(&records)
        .with_context(|| format!("could not analyse {}", input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &summary)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(&mut out, &input, &summary)?,
    }
    Ok(())
}

fn write_text(out: &mut impl Write, input: &Path, summary: &StructureSummary) -> io::Result<()> {
    writeln!(out, "File: {}", input.display())?;
    writeln!(
        out,
        "Read {} ATOM records and {} HETATM records (waters excluded)",
        summary.atom_count, summary.hetero_atom_count
    )?;

    write_counts(out, "Amino Acid Composition", &summary.residue_composition)?;
    write_percentages(out, "Amino Acid Percentages", &summary.residue_percentages)?;
    write_counts(out, "Atomic Composition", &summary.element_composition)?;
    write_percentages(out, "Atomic Percentages", &summary.element_percentages)?;

    writeln!(out, "\nHydrophobicity:")?;
    let hydro = &summary.hydrophobicity;
    match &summary.hydrophobicity_percentages {
        Some(share) => {
            writeln!(out, "  Hydrophobic: {} ({:.2}%)", hydro.hydrophobic, share.hydrophobic)?;
            writeln!(out, "  Hydrophilic: {} ({:.2}%)", hydro.hydrophilic, share.hydrophilic)?;
        }
        None => {
            writeln!(out, "  Hydrophobic: {}", hydro.hydrophobic)?;
            writeln!(out, "  Hydrophilic: {}", hydro.hydrophilic)?;
        }
    }

    writeln!(out, "\nCharge:")?;
    let charge = &summary.charge;
    match &summary.charge_percentages {
        Some(share) => {
            writeln!(out, "  Positive: {} ({:.2}%)", charge.positive, share.positive)?;
            writeln!(out, "  Negative: {} ({:.2}%)", charge.negative, share.negative)?;
        }
        None => {
            writeln!(out, "  Positive: {}", charge.positive)?;
            writeln!(out, "  Negative: {}", charge.negative)?;
        }
    }
    writeln!(out, "  Net: {:+}", charge.net())?;

    write_counts(out, "Heteroatom Residues", &summary.hetero_residue_composition)?;

    writeln!(out, "\nMost Distant Residues:")?;
    match &summary.most_distant_residues {
        Some(pair) => writeln!(
            out,
            "  {} - {}: {:.2} Å",
            pair.first, pair.second, pair.distance
        )?,
        None => writeln!(out, "  n/a (fewer than two alpha-carbons)")?,
    }

    match summary.radius_of_gyration {
        Some(rg) => writeln!(out, "\nRadius of Gyration: {:.2} Å", rg)?,
        None => writeln!(out, "\nRadius of Gyration: n/a (no ATOM records)")?,
    }
    Ok(())
}

fn write_counts(out: &mut impl Write, title: &str, composition: &Composition) -> io::Result<()> {
    writeln!(out, "\n{title}:")?;
    if composition.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (key, count) in composition.iter() {
        writeln!(out, "  {key}: {count}")?;
    }
    Ok(())
}

fn write_percentages(
    out: &mut impl Write,
    title: &str,
    percentages: &Percentages,
) -> io::Result<()> {
    writeln!(out, "\n{title}:")?;
    if percentages.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (key, value) in percentages.iter() {
        writeln!(out, "  {key}: {value:.2}%")?;
    }
    Ok(())
}
