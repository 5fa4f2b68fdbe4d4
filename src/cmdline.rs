use std::env;
use std::path::PathBuf;
use std::process::exit;

use crate::limits;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Header,
}

pub struct Cli {
    /// Print the limit table before resolving
    pub verbose: bool,

    /// Output file name
    pub output: Option<PathBuf>,

    /// Limit overrides, NAME=VALUE
    pub define: Vec<String>,

    /// Target preset
    target: Option<String>,

    /// Output format
    format: Option<Format>,
}

impl Cli {
    pub fn parse() -> Self {
        let mut args = env::args();
        let prog_name = args.next().unwrap_or_else(|| "cwidth".to_string());
        match Self::parse_from(args) {
            Ok(Some(cli)) => cli,
            Ok(None) => {
                print_help(&prog_name);
                exit(0);
            }
            Err(msg) => die(&msg),
        }
    }

    /// Parses arguments without the program name. `Ok(None)` means help
    /// was requested.
    pub fn parse_from<I>(args: I) -> Result<Option<Self>, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut result = Self::new();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "-help" | "--help" => return Ok(None),

                "-v" => result.verbose = true,

                "-o" => {
                    let path = args.next().ok_or("Expected filename after '-o'")?;
                    result.set_output(&path)?;
                }
                s if s.starts_with("-o") => result.set_output(&s[2..])?,

                "-D" => {
                    let val = args.next().ok_or("Expected value after '-D'")?;
                    result.define.push(val);
                }
                s if s.starts_with("-D") => result.define.push(s[2..].to_string()),

                "-target" => {
                    let val = args.next().ok_or("Expected name after '-target'")?;
                    result.set_target(&val)?;
                }
                s if s.starts_with("-target=") => result.set_target(&s[8..])?,

                "-json" => result.set_format(Format::Json)?,
                "-header" => result.set_format(Format::Header)?,

                s => return Err(format!("Unrecognized parameter: {}", s)),
            }
        }
        Ok(Some(result))
    }

    pub fn get_target(&self) -> &str {
        self.target.as_deref().unwrap_or("host")
    }

    pub fn get_format(&self) -> Format {
        self.format.unwrap_or(Format::Text)
    }

    fn new() -> Self {
        Self {
            verbose: false,
            output: None,
            define: Vec::new(),
            target: None,
            format: None,
        }
    }

    fn set_output(&mut self, output: &str) -> Result<(), String> {
        if self.output.is_some() {
            return Err("Output file must not be specified more than once".to_string());
        }
        if output.is_empty() {
            return Err("Expected filename after '-o'".to_string());
        }
        self.output = Some(PathBuf::from(output));
        Ok(())
    }

    fn set_target(&mut self, target: &str) -> Result<(), String> {
        if self.target.is_some() {
            return Err("Target must not be specified more than once".to_string());
        }
        self.target = Some(target.to_string());
        Ok(())
    }

    fn set_format(&mut self, format: Format) -> Result<(), String> {
        if self.format.is_some() {
            return Err("Only one of -json and -header is allowed".to_string());
        }
        self.format = Some(format);
        Ok(())
    }
}

fn die(msg: &str) -> ! {
    println!("{}", msg);
    exit(1);
}

fn print_help(prog_name: &str) {
    print!(
        "Usage: {} [OPTIONS]

Options:
  -v                       Print the limit table before resolving
  -target <name>           Target preset [possible values: {}]. Default host.
  -D<NAME>=<VALUE>         Override a limit (SHRT_MAX, INT_MAX, LONG_MAX, INTPTR_MAX)
  -json                    Print the widths as JSON
  -header                  Print a C header defining CORK_SIZEOF_*
  -o <OUTPUT>              Output file name
  -h, --help               Print help
",
        prog_name,
        limits::target_names().join(", ")
    );
}
