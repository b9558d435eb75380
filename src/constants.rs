//! Common constants used throughout errcodegen.

/// Configuration file names looked up in the working directory
pub const CONFIG_FILES: [&str; 3] = ["errcodegen.json", "errcodegen.yml", "errcodegen.yaml"];
