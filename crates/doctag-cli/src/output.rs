//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a plain list of doc names (query results)
    pub fn print_docs(&self, docs: &[String]) {
        match self.format {
            OutputFormat::Human => {
                if docs.is_empty() {
                    println!("No matching docs.");
                    return;
                }
                for doc in docs {
                    println!("{}", doc);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(docs).unwrap());
            }
            OutputFormat::Quiet => {
                for doc in docs {
                    println!("{}", doc);
                }
            }
        }
    }

    /// Print names with their associated names, e.g. `todo.txt (gtd, list)`
    pub fn print_with_associations(&self, items: &[(String, Vec<String>)]) {
        match self.format {
            OutputFormat::Human => {
                if items.is_empty() {
                    println!("Nothing to show.");
                    return;
                }
                for (name, associated) in items {
                    println!("{} ({})", name, associated.join(", "));
                }
            }
            OutputFormat::Json => {
                let json_items: Vec<_> = items
                    .iter()
                    .map(|(name, associated)| {
                        serde_json::json!({"name": name, "associated": associated})
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json_items).unwrap());
            }
            OutputFormat::Quiet => {
                for (name, _) in items {
                    println!("{}", name);
                }
            }
        }
    }

    /// Print names with association counts, e.g. `list (3)`
    pub fn print_counted(&self, items: &[(String, usize)]) {
        match self.format {
            OutputFormat::Human => {
                if items.is_empty() {
                    println!("Nothing to show.");
                    return;
                }
                for (name, count) in items {
                    println!("{} ({})", name, count);
                }
                println!("\n{} entries", items.len());
            }
            OutputFormat::Json => {
                let json_items: Vec<_> = items
                    .iter()
                    .map(|(name, count)| serde_json::json!({"name": name, "count": count}))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json_items).unwrap());
            }
            OutputFormat::Quiet => {
                for (name, _) in items {
                    println!("{}", name);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}
