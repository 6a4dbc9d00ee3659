use bridge_core::prompt::NoPrompt;
use bridge_core::Prompt;
use hostbridge::commands;
use hostbridge::config::CONFIG;
use hostbridge::terminal::TerminalPrompt;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs a stderr; stdout queda reservado para el JSON.
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Uso: hostbridge <{}> [args...]", commands::COMMANDS.join("|"));
        std::process::exit(2);
    }
    let command = args[1].as_str();
    let mut env = CONFIG.environment();
    let mut terminal;
    let mut silent = NoPrompt;
    let prompt: &mut dyn Prompt = if CONFIG.interactive {
        terminal = TerminalPrompt::stdio();
        &mut terminal
    } else {
        &mut silent
    };
    match commands::run(command, &args[2..], &mut env, prompt) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("[hostbridge {command}] {e}");
            if e.exit_code() == 2 {
                if let Some(line) = commands::usage(command, &env) {
                    eprintln!("{line}");
                }
            }
            std::process::exit(e.exit_code());
        }
    }
}
