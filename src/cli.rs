#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg {
    /// Color unless NO_COLOR is set
    Auto,
    Always,
    Never,
}

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Emit JSON instead of colored text
    #[arg(long)]
    pub json: bool,

    /// Color output: auto|always|never
    #[arg(long, value_enum, env = "STATUSLINE_COLOR", default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// Debug mode: write diagnostics to stderr
    #[arg(long, env = "STATUSLINE_DEBUG")]
    pub debug: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            json: false,
            color: ColorArg::Auto,
            debug: false,
        }
    }
}

impl Args {
    /// Parse process arguments. Help and version still exit; any other
    /// argument error falls back to defaults so a line is always printed.
    pub fn parse() -> Self {
        match <Args as clap::Parser>::try_parse() {
            Ok(args) => args,
            Err(err) if !err.use_stderr() => err.exit(),
            Err(_) => Args::default(),
        }
    }
}
