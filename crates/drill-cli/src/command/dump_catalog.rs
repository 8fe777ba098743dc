use std::path::PathBuf;

use drill_engine::catalog::Catalog;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DumpCatalogArg {
    /// Output file path (stdout if omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DumpCatalogArg) -> anyhow::Result<()> {
    let DumpCatalogArg { output } = arg;

    let catalog = Catalog::builtin();
    let mut output = Output::from_output_path(output.clone())?;
    output.write_json(&catalog)?;
    if let Output::File { path, .. } = &output {
        eprintln!("Wrote built-in catalog to {}", path.display());
    }
    Ok(())
}
