//! Subcomandos del CLI. Cada uno declara su `ArgumentSchema`, resuelve los
//! argumentos posicionales (preguntando lo que falte vía `Prompt`) y escribe
//! el resultado en el `Environment`.

use std::fs;
use std::path::Path;

use bridge_core::args::convert;
use bridge_core::host::scan_env;
use bridge_core::ui::fs_tree;
use bridge_core::{resolve_interactive, serialize, ArgSpec, ArgumentSchema, Environment, HostValue, Prompt, TreeCallbacks};
use log::info;

use crate::errors::AppError;

pub const COMMANDS: &[&str] = &["env", "inspect", "tree"];

/// Profundidad de expansión por defecto de `tree`.
pub const DEFAULT_TREE_DEPTH: i64 = 2;

pub fn env_schema() -> Result<ArgumentSchema, AppError> {
    Ok(ArgumentSchema::new(vec![ArgSpec::new("prefix").with_prompt("Prefijo de variables")])?)
}

pub fn inspect_schema(default_depth: usize) -> Result<ArgumentSchema, AppError> {
    Ok(ArgumentSchema::new(vec![ArgSpec::required("file").with_prompt("Archivo JSON a inspeccionar"),
                                ArgSpec::optional("depth", default_depth as u64).with_convert(convert::integer)])?)
}

pub fn tree_schema() -> Result<ArgumentSchema, AppError> {
    Ok(ArgumentSchema::new(vec![ArgSpec::required("dir").with_prompt("Directorio raíz"),
                                ArgSpec::optional("depth", DEFAULT_TREE_DEPTH).with_convert(convert::integer)])?)
}

fn schema_for(command: &str, env: &Environment) -> Result<ArgumentSchema, AppError> {
    match command {
        "env" => env_schema(),
        "inspect" => inspect_schema(env.max_depth()),
        "tree" => tree_schema(),
        other => Err(AppError::Usage(format!("comando desconocido: {other} (use {})", COMMANDS.join(", ")))),
    }
}

/// Línea de uso de un comando conocido.
pub fn usage(command: &str, env: &Environment) -> Option<String> {
    schema_for(command, env).ok()
                            .map(|s| format!("Uso: hostbridge {command} {}", s.usage()))
}

/// Profundidad no negativa; un entero negativo es un error de uso.
fn depth_arg(value: Option<i64>, fallback: usize) -> Result<usize, AppError> {
    match value {
        None => Ok(fallback),
        Some(d) => usize::try_from(d).map_err(|_| AppError::Usage(format!("depth debe ser >= 0 (recibido {d})"))),
    }
}

pub fn run(command: &str, raw_args: &[String], env: &mut Environment, prompt: &mut dyn Prompt) -> Result<(), AppError> {
    let schema = schema_for(command, env)?;
    let args = resolve_interactive(&schema, raw_args, prompt)?;
    if !args.extra().is_empty() {
        info!("cli:ignored extra args command={command} extra={:?}", args.extra());
    }
    match command {
        "env" => {
            let vars = scan_env(args.get_str("prefix"));
            env.print_value(&HostValue::object(vars))?;
        }
        "inspect" => {
            let file = args.get_str("file").unwrap_or_default();
            let depth = depth_arg(args.get_i64("depth"), env.max_depth())?;
            let text = fs::read_to_string(file)?;
            let parsed: serde_json::Value = serde_json::from_str(&text)?;
            let out = serialize(&HostValue::from(parsed), env.converters(), depth)?;
            env.print_json(&out);
        }
        "tree" => {
            let dir = args.get_str("dir").unwrap_or_default();
            let depth = depth_arg(args.get_i64("depth"), DEFAULT_TREE_DEPTH as usize)?;
            let root = Path::new(dir);
            if !root.is_dir() {
                return Err(AppError::Usage(format!("no es un directorio: {dir}")));
            }
            let mut view = fs_tree(root, TreeCallbacks::new());
            view.expand_to(depth)?;
            env.print_value(&HostValue::from(view.root().clone()))?;
        }
        other => return Err(AppError::Usage(format!("comando desconocido: {other}"))),
    }
    Ok(())
}
