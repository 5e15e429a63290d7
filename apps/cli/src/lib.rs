pub mod args;
pub mod prompt;
pub mod report;

use std::io::{self, BufRead, Write};

use stockviz_core::ChartService;

use crate::args::Args;
use crate::prompt::{Prompter, RULE};
use crate::report::report_error;

pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    // Prompts share the terminal, so only warnings and up unless RUST_LOG says otherwise.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Runs the prompt → chart loop until the user stops or input runs out.
///
/// `preset` answers the first round's questions; later rounds prompt for
/// everything. Returns whether the last chart was produced.
pub async fn run<R: BufRead, W: Write>(
    service: &ChartService,
    prompter: &mut Prompter<R, W>,
    preset: Args,
) -> io::Result<bool> {
    prompter.welcome()?;

    let mut preset = Some(preset);
    loop {
        let selections = match prompter.collect(preset.take().unwrap_or_default()) {
            Ok(selections) => selections,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(true),
            Err(e) => return Err(e),
        };
        prompter.summary(&selections)?;

        let out = prompter.output();
        writeln!(out, "\nFetching data from Alpha Vantage API...")?;
        writeln!(out, "Please wait, this may take a moment...\n")?;

        let succeeded = match service.render_to_file(&selections.to_request()).await {
            Ok(path) => {
                let out = prompter.output();
                writeln!(out, "\u{2713} Success! Chart has been generated.")?;
                writeln!(out, "  Chart file: {}", path.display())?;
                true
            }
            Err(e) => {
                tracing::warn!("Chart for {} failed: {}", selections.symbol, e);
                report_error(prompter.output(), &e)?;
                false
            }
        };

        if !prompter.another()? {
            if succeeded {
                writeln!(
                    prompter.output(),
                    "\nThank you for using Stock Data Visualizer. Goodbye!"
                )?;
            }
            return Ok(succeeded);
        }
        writeln!(prompter.output(), "\n{}\n", RULE)?;
    }
}
