//! The compiler for the Stencil Templating Engine.
// Copyright (C) 2024  Frankie Baffa
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use {
    clap::Parser,
    serde_json::{
        Map as JsonMap,
        Value as JsonValue,
    },
    std::{
        fs::write,
        path::PathBuf,
        process::exit as pexit,
    },
    stencil_core::{
        compile_file,
        read_context,
        Error,
        Result,
    },
    tracing::debug,
    tracing_subscriber::EnvFilter,
};

/// Renders a stencil template against a json context.
#[derive(Debug, Parser)]
#[command(name = "stencilc", version)]
struct Options {
    /// The template to render.
    template: PathBuf,

    /// A json file holding the root context object.
    #[arg(short, long)]
    context: Option<PathBuf>,

    /// Write the output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug information to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log nothing, not even warnings.
    #[arg(short, long)]
    quiet: bool,
}

impl Options {
    /// The log filter: `None` disables logging entirely.
    fn log_filter(&self) -> Option<EnvFilter> {
        if self.quiet {
            None
        }
        else if self.verbose {
            Some(EnvFilter::new("debug"))
        }
        else {
            Some(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        }
    }
}

fn init_logging(opts: &Options) {
    if let Some(filter) = opts.log_filter() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

fn run(opts: &Options) -> Result<()> {
    let context = match &opts.context {
        Some(p) => read_context(p)?,
        None => JsonValue::Object(JsonMap::new()),
    };

    let output = compile_file(&opts.template, &context)?;

    if let Some(p) = &opts.output {
        debug!(path = ?p, "writing output");
        write(p, output).map_err(|e| Error::IO(e, p.to_owned()))?;
    }
    else {
        print!("{output}");
    }

    Ok(())
}

fn main() {
    let opts = Options::parse();
    init_logging(&opts);

    if let Err(e) = run(&opts) {
        eprintln!("{e}");
        pexit(1);
    }
}

#[cfg(test)]
mod test {
    use {
        super::Options,
        clap::Parser,
        std::path::PathBuf,
    };

    #[test]
    fn options_template_only() {
        let opts = Options::try_parse_from(["stencilc", "page.html"]).unwrap();
        assert_eq!(PathBuf::from("page.html"), opts.template);
        assert!(opts.context.is_none());
        assert!(opts.output.is_none());
        assert!(opts.log_filter().is_some());
    }

    #[test]
    fn options_all() {
        let opts = Options::try_parse_from([
            "stencilc", "-c", "ctx.json", "--output", "out.html", "-v", "page.html",
        ]).unwrap();

        assert_eq!(Some(PathBuf::from("ctx.json")), opts.context);
        assert_eq!(Some(PathBuf::from("out.html")), opts.output);
        assert!(opts.verbose);
    }

    #[test]
    fn options_quiet_disables_logging() {
        let opts = Options::try_parse_from(["stencilc", "-q", "page.html"]).unwrap();
        assert!(opts.log_filter().is_none());
    }

    #[test]
    fn options_verbose_conflicts_with_quiet() {
        assert!(Options::try_parse_from(["stencilc", "-v", "-q", "page.html"]).is_err());
    }

    #[test]
    fn options_template_required() {
        assert!(Options::try_parse_from(["stencilc"]).is_err());
    }
}
