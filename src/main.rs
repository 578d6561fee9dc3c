
use scicalc::config::CalculatorConfig;
use scicalc::display;
use scicalc::logging;
use scicalc::runner::Runner;
use scicalc::state::ApplicationState;
use scicalc::terminal::{StdTerminal, Terminal};

use log::info;

use std::io;

fn main() -> anyhow::Result<()> {
  let config = CalculatorConfig::load().unwrap_or_else(|err| {
    eprintln!("{} (using default settings)", err);
    CalculatorConfig::default()
  });
  if let Err(err) = logging::init(&config.log_dir, config.log_level) {
    eprintln!("Logging disabled: {}", err);
  }
  info!("Starting with configuration {:?}", config);

  let mut state = ApplicationState::new(config);
  let stdin = io::stdin();
  let mut terminal = StdTerminal::new(stdin.lock(), io::stdout());
  terminal.write_str(&display::title())?;
  terminal.write_str("\nWelcome to the Scientific Calculator!\n\n")?;
  terminal.write_str(&display::help())?;
  terminal.write_str("\n")?;

  Runner::default().run(&mut state, &mut terminal)?;
  info!("Exiting");
  log::logger().flush();
  Ok(())
}
