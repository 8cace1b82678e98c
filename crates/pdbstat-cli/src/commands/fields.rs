use anyhow::Context;
use itertools::Itertools;
use log::info;
use pdbstat_core::{atom_lines, extract_fields, hetatm_lines};
use std::io::{self, Write};
use std::path::PathBuf;

pub fn execute(input: PathBuf, fields: Option<Vec<String>>, hetatm: bool) -> anyhow::Result<()> {
    let lines = if hetatm {
        hetatm_lines(&input)
    } else {
        atom_lines(&input)
    };
    let lines = lines.with_context(|| format!("could not read PDB file {}", input.display()))?;

    let names: Option<Vec<&str>> = fields
        .as_ref()
        .map(|fields| fields.iter().map(|name| name.trim()).collect());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // the header depends only on the requested names, not on any record
    let header = extract_fields("", names.as_deref());
    writeln!(out, "{}", header.keys().join("\t"))?;

    let mut count = 0;
    for line in lines {
        let line = line?;
        let values = extract_fields(&line, names.as_deref());
        writeln!(out, "{}", values.values().join("\t"))?;
        count += 1;
    }
    info!("{}: wrote {} records", input.display(), count);
    Ok(())
}
