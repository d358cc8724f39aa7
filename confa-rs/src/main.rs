use std::io::Read;

use confa::cli::{self, CliArgs, Input};
use confa::Config;

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("confa: {e}");
            eprintln!("{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    init_tracing(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("confa: {e}");
        std::process::exit(1);
    }
}

/// Install a stderr subscriber when `-d` is given or `CONFA_LOG` is set.
///
/// `CONFA_LOG` takes an `EnvFilter` directive, e.g. `CONFA_LOG=confa=trace`.
fn init_tracing(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match std::env::var("CONFA_LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) if debug => EnvFilter::new("confa=debug"),
        Err(_) => return,
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn run(args: &CliArgs) -> confa::Result<()> {
    let opts = args.options();
    let config = match &args.input {
        Input::File(path) => Config::load_file(path, &opts)?,
        Input::Source(src) => Config::load_str_with(src, &opts)?,
        Input::Stdin => {
            let mut src = String::new();
            std::io::stdin()
                .read_to_string(&mut src)
                .map_err(|source| confa::Error::Io {
                    path: "<stdin>".into(),
                    source,
                })?;
            Config::load_str_with(&src, &opts)?
        }
    };

    let toml = config.to_toml();
    match &args.output {
        Some(path) => {
            let mut text = toml;
            text.push('\n');
            std::fs::write(path, text).map_err(|source| confa::Error::Io {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "output written");
        }
        None => println!("{toml}"),
    }
    Ok(())
}
