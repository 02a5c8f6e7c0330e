//! Interactive REPL for the Mock Data Generator MCP server.
//!
//! Launch with `mock-data-mcp repl` to enter interactive mode.
//! Type `/help` for available commands, Tab for completion.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};
use serde_json::{json, Map, Value};

use mock_data::FieldKind;

use crate::config::parse_seed;
use crate::context::ServerContext;
use crate::tools::ToolRegistry;

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/generate", "Generate records: /generate [count] <field>..."),
    ("/fields", "List field kinds with dedicated generators"),
    ("/seed", "Set or clear the seed: /seed <n> | /seed off"),
    ("/tools", "List available MCP tools"),
    ("/info", "Show server capabilities and tools"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// REPL helper for tab completion.
#[derive(Default)]
struct MockDataHelper;

impl Completer for MockDataHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<16} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        // Field kind completion for the word under the cursor.
        if input.starts_with("/generate ") {
            let word_start = input.rfind(' ').map(|i| i + 1).unwrap_or(0);
            let word = input[word_start..].to_lowercase();
            let matches: Vec<Pair> = FieldKind::KNOWN
                .iter()
                .map(FieldKind::as_str)
                .filter(|kind| kind.starts_with(&word))
                .map(|kind| Pair {
                    display: kind.to_string(),
                    replacement: format!("{kind} "),
                })
                .collect();
            return Ok((word_start, matches));
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for MockDataHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for MockDataHelper {}
impl Validator for MockDataHelper {}
impl Helper for MockDataHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// REPL state.
struct ReplState {
    context: ServerContext,
}

/// Run the interactive REPL.
pub fn run(seed: Option<u64>) -> anyhow::Result<()> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mmock-data-mcp v{}\x1b[0m \x1b[90m\u{2014} Synthetic records on demand\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!(
        "    Press \x1b[36m/\x1b[0m to browse commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<MockDataHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(MockDataHelper));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".mock_data_mcp_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut state = ReplState {
        context: ServerContext::new(seed),
    };
    let prompt = " \x1b[36mmock>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let input = line.strip_prefix('/').unwrap_or(line);
                if input.is_empty() {
                    cmd_help();
                    continue;
                }

                let mut parts = input.splitn(2, ' ');
                let cmd = parts.next().unwrap_or("");
                let args = parts.next().unwrap_or("").trim();

                match cmd {
                    "exit" | "quit" => {
                        eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                        break;
                    }
                    "help" | "h" | "?" => cmd_help(),
                    "clear" | "cls" => eprint!("\x1b[2J\x1b[H"),
                    "generate" | "gen" | "g" => cmd_generate(args, &state),
                    "fields" => cmd_fields(),
                    "seed" => cmd_seed(args, &mut state),
                    "info" => cmd_info(),
                    "tools" => cmd_tools(),
                    _ => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);

    Ok(())
}

/// Turn `[count] <field>...` into tool arguments. A leading integer is the count.
fn parse_generate_args(args: &str) -> Value {
    let mut words = args.split_whitespace().peekable();
    let mut obj = Map::new();

    if let Some(count) = words.peek().and_then(|w| w.parse::<i64>().ok()) {
        obj.insert("count".to_string(), json!(count));
        words.next();
    }

    let fields: Vec<&str> = words.collect();
    obj.insert("fields".to_string(), json!(fields));
    Value::Object(obj)
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<18} {desc}");
    }
    eprintln!();
    eprintln!("  Tip: Tab completes commands, and field kinds after /generate.");
    eprintln!();
}

fn cmd_generate(args: &str, state: &ReplState) {
    if args.is_empty() {
        eprintln!("  Usage: /generate [count] <field>...");
        return;
    }

    match state
        .context
        .generate(&parse_generate_args(args))
        .and_then(|set| set.to_pretty_json())
    {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("  {e}"),
    }
}

fn cmd_fields() {
    eprintln!();
    for kind in FieldKind::KNOWN {
        eprintln!("    {kind}");
    }
    eprintln!();
    eprintln!("  Matching ignores case. Any other name yields a random string.");
    eprintln!();
}

fn cmd_seed(args: &str, state: &mut ReplState) {
    match args {
        "" => match state.context.generator().seed() {
            Some(seed) => eprintln!("  Seed: {seed}"),
            None => eprintln!("  Seed: off (OS entropy)"),
        },
        "off" | "none" => {
            state.context = ServerContext::new(None);
            eprintln!("  Seed cleared.");
        }
        raw => match parse_seed(raw) {
            Ok(seed) => {
                state.context = ServerContext::new(Some(seed));
                eprintln!("  Seed set to {seed}.");
            }
            Err(e) => eprintln!("  {e}"),
        },
    }
}

fn cmd_info() {
    let capabilities = crate::types::InitializeResult::default_result();
    let tools = ToolRegistry::list_tools();
    eprintln!();
    eprintln!(
        "  Server:   {} v{}",
        capabilities.server_info.name, capabilities.server_info.version
    );
    eprintln!("  Protocol: {}", capabilities.protocol_version);
    eprintln!("  Tools:    {}", tools.len());
    eprintln!();
}

fn cmd_tools() {
    let tools = ToolRegistry::list_tools();
    eprintln!();
    eprintln!("  {} MCP tool(s) available:", tools.len());
    eprintln!();
    for tool in &tools {
        eprintln!(
            "    {:<28} {}",
            tool.name,
            tool.description.as_deref().unwrap_or("")
        );
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_args_with_count() {
        let args = parse_generate_args("3 name Email");
        assert_eq!(args, json!({ "count": 3, "fields": ["name", "Email"] }));
    }

    #[test]
    fn test_parse_generate_args_without_count() {
        let args = parse_generate_args("city favoriteColor");
        assert_eq!(args, json!({ "fields": ["city", "favoriteColor"] }));
    }

    #[test]
    fn test_parse_generate_args_count_only() {
        let args = parse_generate_args("0");
        assert_eq!(args, json!({ "count": 0, "fields": [] }));
    }
}
