use std::path::PathBuf;

use clap::Parser;
use dataclass_codegen_go::{Generator, GeneratorConfig, GoFile};
use dataclass_schema::TypeName;
use eyre::Result;
use tracing::{Level, debug};

use crate::{output, package};

const DEBUG_ENV: &str = "DATACLASS_DEBUG";
const STDOUT_ENV: &str = "DATACLASS_STDOUT";

/// Extension trait for exiting on input errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dataclass_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dataclass")]
#[command(version)]
#[command(about = "Generate a read-only Go interface, its backing struct and constructor")]
pub(crate) struct Cli {
    /// Interface name to generate, must be exported
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    type_name: String,

    /// Fields as `Name type` pairs separated by '|', e.g. "Name string|Age int"
    #[arg(short, long, value_name = "FIELDS")]
    field: String,

    /// goimports executable used to format the output
    #[arg(long, value_name = "PATH", default_value = "goimports")]
    goimports: PathBuf,

    /// Output file [default: <dir>/dataclass.go]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the result to stdout instead of a file (also DATACLASS_STDOUT)
    #[arg(long)]
    stdout: bool,

    /// Log parsing and generation steps to stderr (also DATACLASS_DEBUG)
    #[arg(long)]
    debug: bool,

    /// Skip goimports and write the raw output
    #[arg(long)]
    no_format: bool,

    /// Directory or Go files of the destination package [default: .]
    #[arg(value_name = "PATTERNS")]
    patterns: Vec<PathBuf>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let debug = self.debug || env_flag(DEBUG_ENV);
        init_tracing(debug);

        let type_name = TypeName::parse(&self.type_name).unwrap_or_exit();
        let patterns = self.patterns();
        let package = package::find_package_name(&patterns)?;
        debug!(package = %package, "found destination package");

        let generator = Generator::new(type_name, GeneratorConfig::default().with_debug(debug));
        let body = generator.generate(&self.field).unwrap_or_exit();
        let content = GoFile::new(package)
            .generated_by(std::env::args().skip(1))
            .body(body)
            .render();

        let formatter = (!self.no_format).then(|| output::Formatter::new(&self.goimports));
        if self.stdout || env_flag(STDOUT_ENV) {
            output::write_to_stdout(&content, formatter.as_ref())
        } else {
            let path = output::dest_filename(self.output.as_deref(), &patterns)?;
            debug!(path = %path.display(), "writing output");
            output::write_and_format(&path, &content, formatter.as_ref())
        }
    }

    fn patterns(&self) -> Vec<PathBuf> {
        if self.patterns.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.patterns.clone()
        }
    }
}

/// An env toggle is on when set to a non-empty value.
fn env_flag(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
