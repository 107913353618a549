use tracing::{debug, info, Level};

/// scopes: run a string through a chain of scope functions
#[derive(argh::FromArgs)]
struct Cli {
    /// drop the measured length when it equals this value
    #[argh(option, short = 'r', default = "3")]
    reject_length: usize,

    /// log at debug level
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// string fed into the chain
    #[argh(positional, default = "String::from(\"ddsa\")")]
    input: String,
}

fn main() {
    let cli: Cli = argh::from_env();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let length = scopes::of(Some(cli.input))
        .inspect(|_| info!("test"))
        .inspect(|s| info!("{}", s.map(String::as_str).unwrap_or("null")))
        .map_some(|s| Some(s.chars().count()))
        .inspect(|len| debug!(?len, "measured input"))
        .take_unless_some(|&len| len == cli.reject_length)
        .unwrap();

    match length {
        Some(len) => info!("onCreate: {len}"),
        None => info!("onCreate: null"),
    }
}
