mod app;
mod command;
mod console;
mod render;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
