//! Constantes compartidas por el resolver y el serializador.
//!
//! Los marcadores centinela forman parte del formato de salida: cualquier
//! consumidor que inspeccione el árbol JSON puede compararlos literalmente.

/// Profundidad máxima por defecto de `serialize_default`.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Sustituye a un objeto que ya está en el camino de descenso actual.
pub const CIRCULAR_MARKER: &str = "<circular>";

/// Sustituye a un objeto compuesto cuando se agotó la profundidad.
pub const MAX_DEPTH_MARKER: &str = "<max-depth>";

/// Clave del objeto de último recurso para hojas desconocidas.
pub const TO_STRING_KEY: &str = "toString";

/// Bytes de un buffer que se incluyen en la vista previa del conversor por defecto.
pub const DEFAULT_BUFFER_PREVIEW: usize = 32;

/// Conversiones encadenadas permitidas sobre un mismo nivel antes de cortar
/// con `MAX_DEPTH_MARKER` (un conversor que siempre devuelve un objeto nuevo
/// del mismo tipo no avanza en profundidad).
pub const MAX_CONVERSION_CHAIN: usize = 16;
