use std::path::PathBuf;

use clap::Parser;

use crate::{app::App, console::StdConsole, util};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Path to the puzzle fixture file
    #[clap(default_value = "assets/field.json")]
    fixture: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let session = util::load_session(&args.fixture)?;
    let mut app = App::new(session, StdConsole::stdio());
    app.run()
}
