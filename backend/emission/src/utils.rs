pub const GRAPH_NAME: &str = "interference";

pub fn graph_head() -> String {
	format!(
		"graph {GRAPH_NAME} {{
  layout=neato;
  overlap=false;
  node [shape=circle, style=filled, fontname=monospace];"
	)
}

/// Quoted DOT string.
pub fn quote(str: &str) -> String {
	let escaped = str.replace('\\', "\\\\").replace('"', "\\\"");
	format!("\"{escaped}\"")
}
