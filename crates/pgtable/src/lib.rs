use std::{io::Write, process::ExitCode};

use clap::Parser;
use symm::{Registry, RegistryError, Render};


/// print the character table of a molecular point group
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Schoenflies symbol of the point group to print, like C2v or D3h
    #[arg(short, long, default_value_t = String::from("C1"))]
    pub pointgroup: String,

    /// List the supported point groups and exit. Defaults to false.
    #[arg(short, long, default_value_t = false)]
    pub show: bool,

    /// Print the table as a LaTeX tabular. Defaults to false.
    #[arg(short, long, default_value_t = false)]
    pub latex: bool,
}

/// how a single invocation ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// the supported labels were printed
    Listed,
    /// the requested table was printed
    Resolved,
    /// the requested label is not in the registry
    Failed,
}

impl Status {
    pub fn code(&self) -> u8 {
        match self {
            Status::Listed | Status::Resolved => 0,
            Status::Failed => 1,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(value: Status) -> Self {
        ExitCode::from(value.code())
    }
}

/// render `labels` like a list literal: `['C1', 'Ci', 'Cs']`
pub fn literal_list<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<_> = labels.into_iter().map(|l| format!("'{l}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// write every label in `registry` to `w` on a single line
pub fn list_all<W: Write, D: Render>(
    w: &mut W,
    registry: &Registry<D>,
) -> std::io::Result<Status> {
    writeln!(w, "{}", literal_list(registry.labels()))?;
    Ok(Status::Listed)
}

/// look up `label` in `registry` and return the requested rendering
pub fn resolve<D: Render>(
    registry: &Registry<D>,
    label: &str,
    latex: bool,
) -> Result<String, RegistryError> {
    let pg = registry.get(label)?;
    Ok(if latex {
        pg.render_latex()
    } else {
        pg.render_plain()
    })
}

/// write the rendering of `label` to `w`. a missing label is reported on `w`
/// along with everything that is supported, and yields [Status::Failed]
pub fn resolve_and_print<W: Write, D: Render>(
    w: &mut W,
    registry: &Registry<D>,
    label: &str,
    latex: bool,
) -> std::io::Result<Status> {
    match resolve(registry, label, latex) {
        Ok(s) => {
            writeln!(w, "{s}")?;
            Ok(Status::Resolved)
        }
        Err(e) => {
            log::warn!("{e}");
            writeln!(w, "Cannot find {label}. It may not be supported yet.")?;
            writeln!(w, "Currently support point groups:")?;
            writeln!(w, "{}", literal_list(registry.labels()))?;
            Ok(Status::Failed)
        }
    }
}

/// dispatch on `args`: list the registry for `--show`, otherwise print one
/// table
pub fn run<W: Write, D: Render>(
    w: &mut W,
    registry: &Registry<D>,
    args: &Args,
) -> std::io::Result<Status> {
    if args.show {
        log::debug!("listing {} point groups", registry.len());
        return list_all(w, registry);
    }
    log::debug!("resolving {} (latex = {})", args.pointgroup, args.latex);
    resolve_and_print(w, registry, &args.pointgroup, args.latex)
}
