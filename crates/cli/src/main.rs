use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polysweep::prelude::{draw_instance, QueryCfg, ReplayToken, StarCfg, VertexCount};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;
mod provenance;
mod solve;

use input::TestCase;
use output::Format;
use solve::{Algo, Summary};

#[derive(Parser)]
#[command(name = "polysweep-cli")]
#[command(about = "Classify query points against polygons (INSIDE / OUTSIDE / BORDER)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify every query of every test case in a stream
    Locate {
        /// Input stream; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Algo::Sweep)]
        algo: Algo,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write `<stem>.provenance.json` next to `--out`
        #[arg(long)]
        provenance: bool,
    },
    /// Write random star-polygon test cases in the stream format
    Generate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        cases: usize,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 64)]
        queries: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Locate {
            input,
            out,
            algo,
            format,
            provenance,
        } => locate(input, out, algo, format, provenance),
        Action::Generate {
            seed,
            cases,
            vertices,
            queries,
            out,
        } => generate(seed, cases, vertices, queries, out),
        Action::Report => report(),
    }
}

fn locate(
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    algo: Algo,
    format: Format,
    provenance: bool,
) -> Result<()> {
    tracing::info!(input = ?input, out = ?out, ?algo, ?format, "locate");
    let text = read_input(input.as_deref())?;
    let (rendered, summary) = locate_text(&text, algo, format)?;
    tracing::info!(
        cases = summary.cases,
        malformed = summary.malformed,
        queries = summary.queries,
        "classified"
    );
    write_output(out.as_deref(), &rendered)?;

    if provenance {
        match &out {
            Some(path) => {
                let payload = provenance::Payload::new(serde_json::json!({
                    "algo": algo,
                    "format": format!("{format:?}").to_lowercase(),
                    "input": input.as_ref().map(|p| p.display().to_string()),
                }))
                .with_summary(serde_json::to_value(&summary)?);
                let prov_path = provenance::write_sidecar(path, payload)?;
                tracing::info!(path = %prov_path.display(), "provenance");
            }
            None => tracing::warn!("--provenance needs --out; skipping sidecar"),
        }
    }
    Ok(())
}

/// Parse, classify and render one whole stream.
fn locate_text(text: &str, algo: Algo, format: Format) -> Result<(String, Summary)> {
    let cases = input::parse_cases(text).context("parsing test cases")?;
    let results = solve::solve_all(&cases, algo);
    let rendered = output::render(&results, format)?;
    Ok((rendered, Summary::from_results(&results)))
}

fn generate(
    seed: u64,
    cases: usize,
    vertices: usize,
    queries: usize,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(seed, cases, vertices, queries, out = ?out, "generate");
    anyhow::ensure!(
        vertices >= 3,
        "--vertices must be at least 3, got {vertices}"
    );
    let star = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..StarCfg::default()
    };
    let query = QueryCfg {
        count: queries,
        ..QueryCfg::default()
    };
    let mut tok = ReplayToken { seed, index: 0 };
    let mut drawn = Vec::with_capacity(cases);
    for _ in 0..cases {
        let inst = draw_instance(star, query, tok);
        drawn.push(TestCase {
            vertices: inst.vertices,
            queries: inst.queries,
        });
        tok = tok.next();
    }
    write_output(out.as_deref(), &input::write_cases(&drawn))
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "polysweep_version": polysweep::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("reading stdin")?;
            Ok(s)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(p, text).with_context(|| format!("writing {}", p.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("writing stdout")?;
            stdout.flush().context("flushing stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const STREAM: &str = "3\n\
        4 0 0 4 0 4 4 0 4\n5 2 2 0 0 4 2 5 5 2 0\n\
        2 0 0 1 1\n1 0 0\n\
        3 0 0 4 0 0 4\n3 1 1 3 3 2 2\n";

    #[test]
    fn text_run_skips_malformed_case() {
        let (text, summary) = locate_text(STREAM, Algo::Sweep, Format::Text).unwrap();
        assert_eq!(
            text,
            "INSIDE\nBORDER\nBORDER\nOUTSIDE\nBORDER\nINSIDE\nOUTSIDE\nBORDER\n"
        );
        assert_eq!(summary.cases, 3);
        assert_eq!(summary.malformed, 1);
        assert_eq!(summary.queries, 8);
    }

    #[test]
    fn naive_and_sweep_render_identically() {
        let a = locate_text(STREAM, Algo::Sweep, Format::Json).unwrap().0;
        let b = locate_text(STREAM, Algo::Naive, Format::Json).unwrap().0;
        assert_eq!(a, b);
        assert!(a.contains("\"error\""));
    }

    #[test]
    fn syntax_error_aborts_with_context() {
        let err = locate_text("1\n3 0 0 1", Algo::Sweep, Format::Text).unwrap_err();
        assert!(format!("{err:#}").contains("parsing test cases"));
    }

    #[test]
    fn locate_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cases.txt");
        let out = dir.path().join("out").join("answers.txt");
        std::fs::write(&input, STREAM).unwrap();
        locate(
            Some(input),
            Some(out.clone()),
            Algo::Sweep,
            Format::Text,
            true,
        )
        .unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written.lines().count(), 8);
        let sidecar = dir.path().join("out").join("answers.provenance.json");
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(doc["params"]["algo"], "sweep");
        assert_eq!(doc["summary"]["malformed"], 1);
    }

    #[test]
    fn generate_rejects_degenerate_vertex_count() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("gen.txt");
        let err = generate(1, 1, 2, 5, Some(out.clone())).unwrap_err();
        assert!(err.to_string().contains("at least 3"), "{err}");
        assert!(!out.exists());
    }

    #[test]
    fn generated_stream_parses_and_classifies() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("gen.txt");
        generate(9, 3, 10, 20, Some(out.clone())).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let cases = input::parse_cases(&text).unwrap();
        assert_eq!(cases.len(), 3);
        assert!(cases.iter().all(|c| c.vertices.len() == 10 && c.queries.len() == 20));
        let (_, summary) = locate_text(&text, Algo::Sweep, Format::Text).unwrap();
        assert_eq!(summary.malformed, 0);
        assert_eq!(summary.queries, 60);
    }
}
