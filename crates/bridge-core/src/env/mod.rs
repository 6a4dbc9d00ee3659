//! `Environment`: contexto explícito que reemplaza los globales del motor
//! (`print`). Se pasa a quien necesite imprimir o serializar.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use log::warn;
use serde_json::Value;

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::errors::BridgeError;
use crate::host::HostValue;
use crate::introspect::{serialize, ConverterRegistry};

pub type PrintSink = Box<dyn FnMut(&str)>;

pub struct Environment {
    sink: PrintSink,
    converters: ConverterRegistry,
    max_depth: usize,
    pretty: bool,
}

impl Environment {
    /// Entorno con conversores por defecto y salida compacta.
    pub fn new(sink: PrintSink) -> Self {
        Self { sink,
               converters: ConverterRegistry::with_defaults(),
               max_depth: DEFAULT_MAX_DEPTH,
               pretty: false }
    }

    pub fn stdout() -> Self {
        Self::writer(io::stdout())
    }

    /// Una línea por `print`. Un error de escritura (pipe cerrado) se
    /// registra y la línea se descarta.
    pub fn writer<W: Write + 'static>(mut out: W) -> Self {
        Self::new(Box::new(move |line: &str| {
            if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
                warn!("env:print err={e}");
            }
        }))
    }

    /// Entorno que acumula cada línea impresa; útil en tests.
    pub fn capture() -> (Self, Rc<RefCell<Vec<String>>>) {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink_lines = lines.clone();
        let env = Self::new(Box::new(move |line: &str| sink_lines.borrow_mut().push(line.to_string())));
        (env, lines)
    }

    pub fn with_converters(mut self, converters: ConverterRegistry) -> Self {
        self.converters = converters;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn print(&mut self, line: &str) {
        (self.sink)(line);
    }

    pub fn print_json(&mut self, value: &Value) {
        let text = if self.pretty { format!("{value:#}") } else { value.to_string() };
        self.print(&text);
    }

    /// Serializa con la configuración del entorno y lo imprime.
    pub fn print_value(&mut self, value: &HostValue) -> Result<(), BridgeError> {
        let json = serialize(value, &self.converters, self.max_depth)?;
        self.print_json(&json);
        Ok(())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
         .field("converters", &self.converters)
         .field("max_depth", &self.max_depth)
         .field("pretty", &self.pretty)
         .finish_non_exhaustive()
    }
}
