use serde::Serialize;
use signpost::render::render_result;
use signpost::{
    ControllerConfig, ControllerError, DecisionTreeController, Edge, MemoryClipboard, NodeId,
    ParseOptions, ResultKey, SectionLayout, UiEvent, parse_tree, resolve,
};
use std::io::Read;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SIGNPOST_LOG";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    BadClick(String),
    Io(std::io::Error),
    Signpost(signpost::Error),
    Controller(ControllerError),
    Json(serde_json::Error),
    Invalid(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::BadClick(click) => write!(f, "unrecognized --click action: {click}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Signpost(err) => write!(f, "{err}"),
            CliError::Controller(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Invalid(count) if *count == 1 => write!(f, "1 problem found"),
            CliError::Invalid(count) => write!(f, "{count} problems found"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<signpost::Error> for CliError {
    fn from(value: signpost::Error) -> Self {
        Self::Signpost(value)
    }
}

impl From<ControllerError> for CliError {
    fn from(value: ControllerError) -> Self {
        Self::Controller(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Parse,
    Validate,
    Keys,
    Resolve,
    Render,
    Walk,
}

/// One `--click` action, replayed in order by `walk`.
#[derive(Debug, Clone)]
enum Click {
    Event(UiEvent),
    Copy(String),
}

impl std::str::FromStr for Click {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CliError::BadClick(s.to_string());
        let event = match s.split_once(':') {
            None => match s {
                "reset" => UiEvent::StartOver,
                "title" => UiEvent::NavTitle,
                "toggle" => UiEvent::NavToggle,
                _ => return Err(bad()),
            },
            Some((_, "")) => return Err(bad()),
            Some(("next", id)) => UiEvent::SelectOption(Edge::next(id)),
            Some(("result", key)) => UiEvent::SelectOption(Edge::result(key)),
            Some(("back", id)) => UiEvent::Back(NodeId::new(id)),
            Some(("anchor", href)) => UiEvent::Anchor(href.to_string()),
            Some(("service", id)) => UiEvent::ServiceCard(id.to_string()),
            Some(("pillar", id)) => UiEvent::Pillar(id.to_string()),
            Some(("scroll", y)) => UiEvent::Scroll(y.parse::<f64>().map_err(|_| bad())?),
            Some(("tick", ms)) => UiEvent::Tick(ms.parse::<u64>().map_err(|_| bad())?),
            Some(("copy", text)) => return Ok(Click::Copy(text.to_string())),
            Some(_) => return Err(bad()),
        };
        Ok(Click::Event(event))
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    /// Input path for page commands, result key for `resolve` and `render`.
    positional: Option<String>,
    pretty: bool,
    strict: bool,
    config: Option<String>,
    /// JSON array of measured `{"id", "top"}` sections for `scroll:` clicks.
    layout: Option<String>,
    clicks: Vec<Click>,
    state: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "signpost-cli\n\
\n\
USAGE:\n\
  signpost-cli [parse] [--pretty] [--strict] [<path>|-]\n\
  signpost-cli validate [--strict] [--config <path>] [<path>|-]\n\
  signpost-cli keys\n\
  signpost-cli resolve [--pretty] <key>\n\
  signpost-cli render [--out <path>] <key>\n\
  signpost-cli walk [--strict] [--config <path>] [--layout <path>] [--click <action>]... [--state] [--pretty] [--out <path>] [<path>|-]\n\
\n\
CLICK ACTIONS:\n\
  next:<id> result:<key> back:<id> reset title toggle anchor:<href> service:<id>\n\
  pillar:<id> scroll:<y> tick:<ms> copy:<text>\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the page is read from stdin.\n\
  - validate prints one line per problem and exits with status 1 when there is any.\n\
  - walk prints the page with the final state applied; --state prints the state as JSON.\n\
  - --layout takes a JSON array like [{\"id\":\"pillars\",\"top\":1400}] in page order.\n\
    Without it every scroll:<y> clears the nav highlight.\n\
  - Set SIGNPOST_LOG (e.g. SIGNPOST_LOG=debug) to see ignored clicks and markup recovery.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "validate" => args.command = Command::Validate,
            "keys" => args.command = Command::Keys,
            "resolve" => args.command = Command::Resolve,
            "render" => args.command = Command::Render,
            "walk" => args.command = Command::Walk,
            "--pretty" => args.pretty = true,
            "--strict" => args.strict = true,
            "--state" => args.state = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--layout" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.layout = Some(path.clone());
            }
            "--click" => {
                let Some(click) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.clicks.push(click.parse::<Click>()?);
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "-" => {
                if args.positional.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.positional = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            value => {
                if args.positional.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.positional = Some(value.to_string());
            }
        }
    }

    if matches!(args.command, Command::Resolve | Command::Render) && args.positional.is_none() {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn read_config(path: Option<&str>) -> Result<ControllerConfig, CliError> {
    match path {
        None => Ok(ControllerConfig::default()),
        Some(path) => Ok(ControllerConfig::from_json_str(&std::fs::read_to_string(path)?)?),
    }
}

fn read_layout(path: &str) -> Result<Vec<SectionLayout>, CliError> {
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn parse_options(strict: bool) -> ParseOptions {
    if strict {
        ParseOptions::strict()
    } else {
        ParseOptions::lenient()
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Parse => {
            let html = read_input(args.positional.as_deref())?;
            let tree = parse_tree(&html, parse_options(args.strict))?;
            write_json(&tree, args.pretty)
        }
        Command::Validate => {
            let html = read_input(args.positional.as_deref())?;
            let config = read_config(args.config.as_deref())?;
            let tree = parse_tree(&html, parse_options(args.strict))?;
            let diagnostics = tree.validate(&config.start_node, &config.results_panel_id);
            for diagnostic in &diagnostics {
                println!("{diagnostic}");
            }
            if diagnostics.is_empty() {
                Ok(())
            } else {
                Err(CliError::Invalid(diagnostics.len()))
            }
        }
        Command::Keys => {
            for key in ResultKey::ALL {
                println!("{key}");
            }
            Ok(())
        }
        Command::Resolve => {
            let key = args.positional.as_deref().unwrap_or_default();
            write_json(resolve(key), args.pretty)
        }
        Command::Render => {
            let key = args.positional.as_deref().unwrap_or_default();
            let mut fragment = render_result(resolve(key));
            fragment.push('\n');
            write_text(&fragment, args.out.as_deref())
        }
        Command::Walk => {
            let html = read_input(args.positional.as_deref())?;
            let config = read_config(args.config.as_deref())?;
            let mut controller =
                DecisionTreeController::from_markup(html, parse_options(args.strict), config)?;
            if let Some(path) = args.layout.as_deref() {
                controller.set_section_layout(read_layout(path)?);
            }
            let mut clipboard = MemoryClipboard::new();

            for click in args.clicks {
                match click {
                    Click::Event(event) => {
                        if let Some(transition) = controller.handle(event) {
                            tracing::info!(?transition, "click");
                        }
                    }
                    Click::Copy(text) => {
                        controller.copy_to_clipboard(&mut clipboard, &text);
                    }
                }
                for effect in controller.take_effects() {
                    tracing::info!(?effect, "effect");
                }
            }

            if args.state {
                return write_json(&controller.state(), args.pretty);
            }
            write_text(&controller.render_page()?, args.out.as_deref())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err @ CliError::BadClick(_)) => {
            eprintln!("{err}");
            eprintln!("{}", usage());
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
