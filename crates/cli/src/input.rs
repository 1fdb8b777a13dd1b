//! Whitespace-separated test-case stream.
//!
//! Layout: `T`, then per case `N x1 y1 .. xN yN Q x1 y1 .. xQ yQ`.

use anyhow::{anyhow, Context, Result};
use std::fmt::Write as _;
use std::str::SplitWhitespace;

/// One polygon and its queries, as read from the stream.
#[derive(Clone, Debug, PartialEq)]
pub struct TestCase {
    pub vertices: Vec<(f64, f64)>,
    pub queries: Vec<(f64, f64)>,
}

struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            it: text.split_whitespace(),
            pos: 0,
        }
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str> {
        let tok = self
            .it
            .next()
            .ok_or_else(|| anyhow!("expected {what}, found end of input"))?;
        self.pos += 1;
        Ok(tok)
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let tok = self.next_token(what)?;
        tok.parse()
            .map_err(|_| anyhow!("invalid {what} `{tok}` at token {}", self.pos))
    }

    fn coord(&mut self, what: &str) -> Result<f64> {
        let tok = self.next_token(what)?;
        tok.parse()
            .map_err(|_| anyhow!("invalid {what} `{tok}` at token {}", self.pos))
    }

    fn pairs(&mut self, n: usize, what: &str) -> Result<Vec<(f64, f64)>> {
        // Counts come from untrusted input; let the vector grow if they are real.
        let mut out = Vec::with_capacity(n.min(1 << 16));
        for i in 0..n {
            let x = self.coord("x coordinate").with_context(|| format!("{what} {i}"))?;
            let y = self.coord("y coordinate").with_context(|| format!("{what} {i}"))?;
            out.push((x, y));
        }
        Ok(out)
    }
}

/// Parse the full stream. Geometry is not validated here.
pub fn parse_cases(text: &str) -> Result<Vec<TestCase>> {
    let mut tok = Tokens::new(text);
    let t = tok.count("test case count")?;
    let mut cases = Vec::with_capacity(t.min(1 << 12));
    for i in 0..t {
        let case = parse_case(&mut tok).with_context(|| format!("test case {}", i + 1))?;
        cases.push(case);
    }
    if tok.it.next().is_some() {
        tracing::warn!(after = tok.pos, "ignoring trailing input");
    }
    Ok(cases)
}

fn parse_case(tok: &mut Tokens<'_>) -> Result<TestCase> {
    let n = tok.count("vertex count")?;
    let vertices = tok.pairs(n, "vertex")?;
    let q = tok.count("query count")?;
    let queries = tok.pairs(q, "query")?;
    Ok(TestCase { vertices, queries })
}

/// Serialize cases back into the stream format (exact `f64` round trip).
pub fn write_cases(cases: &[TestCase]) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{}", cases.len());
    for case in cases {
        for list in [&case.vertices, &case.queries] {
            let _ = writeln!(s, "{}", list.len());
            for (x, y) in list.iter() {
                let _ = writeln!(s, "{x} {y}");
            }
        }
    }
    s
}
