use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use xjsx_codegen::ConvertOptions;

#[derive(Parser)]
#[command(name = "xjsx")]
#[command(about = "XJSX compiler: inline markup in JavaScript to plain function calls")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a source file to JavaScript
    Build {
        /// Input file
        path: String,

        /// Output file (defaults to the input with a .js extension)
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        names: NameArgs,
    },

    /// Check a source file for syntax errors without writing output
    Check {
        /// Input file
        path: String,
    },
}

/// Overrides for the call names used in generated code.
#[derive(Args)]
struct NameArgs {
    /// Component creation function
    #[arg(long, value_name = "NAME")]
    create_fn: Option<String>,

    /// Text node creation function
    #[arg(long, value_name = "NAME")]
    text_fn: Option<String>,

    /// Identifier paired with `ref` props
    #[arg(long, value_name = "NAME")]
    refs_ident: Option<String>,
}

impl NameArgs {
    fn into_options(self) -> ConvertOptions {
        let defaults = ConvertOptions::default();
        ConvertOptions {
            create_fn: self.create_fn.unwrap_or(defaults.create_fn),
            text_fn: self.text_fn.unwrap_or(defaults.text_fn),
            refs_ident: self.refs_ident.unwrap_or(defaults.refs_ident),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            path,
            output,
            names,
        } => cmd_build(&path, output.as_deref(), &names.into_options()),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn compile_or_exit(path: &str, source: &str, options: &ConvertOptions) -> String {
    match xjsx_codegen::compile_with(source, options) {
        Ok(js) => js,
        Err(e) => {
            eprintln!("error: {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(path: &str, output: Option<&str>, options: &ConvertOptions) {
    let source = read_source(path);
    let js = compile_or_exit(path, &source, options);

    let out_path = output.map_or_else(|| default_output_path(Path::new(path)), PathBuf::from);
    if let Err(e) = std::fs::write(&out_path, js) {
        eprintln!("error: writing {}: {e}", out_path.display());
        std::process::exit(1);
    }

    eprintln!("Compiled: {}", out_path.display());
}

fn cmd_check(path: &str) {
    let source = read_source(path);
    compile_or_exit(path, &source, &ConvertOptions::default());
    eprintln!("OK: {path}");
}

/// `app.jsx` → `app.js`; `app.js` → `app.compiled.js` so the input is never
/// overwritten.
fn default_output_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "js") {
        input.with_extension("compiled.js")
    } else {
        input.with_extension("js")
    }
}
