#[derive(serde::Serialize)]
struct Builtins {
  alphabet: String,
  checksum: bool,
  grouping: bool,
}

impl Default for Builtins {
  fn default() -> Self {
    Self {
      alphabet: "uppercase".into(),
      checksum: true,
      grouping: true,
    }
  }
}

fn flag(var: &str) -> Option<bool> {
  match std::env::var(var).ok()?.to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    other => panic!("{} must be a boolean, got `{}'", var, other),
  }
}

fn main() {
  for var in &[
    "HEX32_DEFAULT_ALPHABET",
    "HEX32_DEFAULT_CHECKSUM",
    "HEX32_DEFAULT_GROUPING",
  ] {
    println!("cargo:rerun-if-env-changed={}", var);
  }
  let mut builtins = Builtins::default();
  if let Ok(x) = std::env::var("HEX32_DEFAULT_ALPHABET") {
    builtins.alphabet = x;
  }
  if let Some(x) = flag("HEX32_DEFAULT_CHECKSUM") {
    builtins.checksum = x;
  }
  if let Some(x) = flag("HEX32_DEFAULT_GROUPING") {
    builtins.grouping = x;
  }
  let dest = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("config.json");
  std::fs::write(dest, serde_json::to_string(&builtins).unwrap()).unwrap();
}
