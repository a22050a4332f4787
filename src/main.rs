use std::path::Path;

use session_statusline::cli::Args;
use session_statusline::display::{Theme, print_json_output, print_text_output};
use session_statusline::git::{GitProbe, probe};
use session_statusline::input::parse_session;
use session_statusline::logging;
use session_statusline::utils::read_stdin;

fn main() {
    let args = Args::parse();
    logging::init(args.debug);

    let stdin = read_stdin().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to read stdin");
        Vec::new()
    });
    let ctx = parse_session(&stdin);
    let git_info = probe(&GitProbe::new(), Path::new(&ctx.working_dir));
    tracing::debug!(?ctx, ?git_info, "collected session state");

    let printed = if args.json {
        print_json_output(&ctx, git_info.as_ref())
    } else {
        print_text_output(&ctx, git_info.as_ref(), &Theme::from_arg(args.color))
    };
    if let Err(err) = printed {
        tracing::warn!(error = %format!("{err:#}"), "failed to write statusline");
    }
}
