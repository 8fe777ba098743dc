use clap::{Parser, Subcommand};

use self::{dump_catalog::DumpCatalogArg, play::PlayArg};

mod dump_catalog;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the design drills in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
    /// Write the built-in level catalog as JSON
    DumpCatalog(#[clap(flatten)] DumpCatalogArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::DumpCatalog(arg) => dump_catalog::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let args = CommandArgs::try_parse_from(["designdrill"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_play_options() {
        let args = CommandArgs::try_parse_from([
            "designdrill",
            "play",
            "--seed",
            "42",
            "--color-rounds",
            "3",
            "--no-log",
        ])
        .unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play");
        };
        assert_eq!(arg.seed, Some(42));
        assert_eq!(arg.color_rounds.get(), 3);
        assert!(arg.no_log);
    }

    #[test]
    fn test_zero_color_rounds_rejected() {
        assert!(
            CommandArgs::try_parse_from(["designdrill", "play", "--color-rounds", "0"]).is_err()
        );
    }
}
