//! An example to parse a URL from the CLI argument.
//!
//! Set `RUST_LOG=urlblocks=trace` to see why an input is rejected.

use tracing_subscriber::EnvFilter;
use urlblocks::Url;

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [OPTIONS] [--] URL

FLAGS:
    -h, --help              Prints this help

OPTIONS:
    -r, --relative <REF>    Resolves the reference against the URL

ARGS:
    <URL>                   Absolute URL with a host
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// URL.
    url: String,
    /// Reference to resolve against the URL.
    relative: Option<String>,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut url = None;
        let mut relative = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--relative" | "-r" => match args.next() {
                    Some(reference) => relative = Some(reference),
                    None => die("--relative requires a reference"),
                },
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if url.replace(arg).is_some() {
                        die("URL can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if url.replace(arg).is_some() {
                die("URL can be specified at most once");
            }
        }

        let url = url.unwrap_or_else(|| die("URL should be specified"));
        Self { url, relative }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = CliOpt::parse();

    let url = match Url::parse(&opt.url) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", opt.url, e)),
    };
    print_components(&url);

    if let Some(reference) = &opt.relative {
        match url.relative(reference) {
            Ok(resolved) => {
                println!();
                println!("Resolved {:?}:", reference);
                print_components(&resolved);
            }
            Err(e) => die(format_args!("Failed to resolve {:?}: {}", reference, e)),
        }
    }
}

fn print_components(url: &Url) {
    println!("url:          {}", url);
    println!("scheme:       {}", url.scheme());
    println!("username:     {:?}", url.username());
    println!("password:     {:?}", url.password());
    println!("host:         {}", url.hostname());
    println!("port:         {:?}", url.port());
    println!("default port: {:?}", url.default_port());
    println!("path:         {:?}", url.path().as_str());
    println!("segments:     {:?}", url.path().segments());
    println!("query:        {:?}", url.query_list());
    println!("fragment:     {:?}", url.fragment());
}
