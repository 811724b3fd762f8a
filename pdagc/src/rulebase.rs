//! A minimal rulebase loader (spec.md section 6's "rulebase parser",
//! explicitly out of scope for the pdag core itself). Each line is one
//! sample:
//!
//! ```text
//! "login from %ip:ipv4%" tags=["auth","login"]
//! "login from %host:word%"
//! ```
//!
//! `%name:parser%` placeholders are split from the surrounding literal
//! text and installed via [`pdag_core::add_parser`] one character (for
//! literals) or one edge (for placeholders) at a time, exactly as
//! spec.md section 4.D expects the builder to be driven.

use eyre::{bail, eyre, Result};
use pdag_core::{add_parser, id_of, new_edge, new_literal_edge, Context};
use tracing::instrument;

enum Token<'a> {
    Literal(&'a str),
    Placeholder { name: &'a str, parser: &'a str, arg: Option<&'a str> },
}

fn tokenize(sample: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = sample;

    while let Some(start) = rest.find('%') {
        if start > 0 {
            tokens.push(Token::Literal(&rest[..start]));
        }
        let after = &rest[start + 1..];
        let end = after
            .find('%')
            .ok_or_else(|| eyre!("unterminated placeholder in sample: {sample}"))?;
        let body = &after[..end];
        let mut parts = body.splitn(3, ':');
        let name = parts
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| eyre!("placeholder missing a field name: %{body}%"))?;
        let parser = parts
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| eyre!("placeholder missing a parser name: %{body}%"))?;
        let arg = parts.next();
        tokens.push(Token::Placeholder { name, parser, arg });
        rest = &after[end + 1..];
    }
    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }
    Ok(tokens)
}

fn split_sample_line(line: &str) -> Result<(&str, Option<serde_json::Value>)> {
    if !line.starts_with('"') {
        bail!("sample line must start with a quoted sample: {line}");
    }
    let mut end = None;
    let mut escaped = false;
    for (i, c) in line.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                end = Some(i);
                break;
            }
            _ => {}
        }
    }
    let end = end.ok_or_else(|| eyre!("unterminated sample text: {line}"))?;
    let sample = &line[1..end];
    let trailer = line[end + 1..].trim();

    let tags = if trailer.is_empty() {
        None
    } else if let Some(json) = trailer.strip_prefix("tags=") {
        Some(serde_json::from_str(json).map_err(|e| eyre!("invalid tags JSON in `{trailer}`: {e}"))?)
    } else {
        bail!("unrecognized sample-line trailer: {trailer}");
    };

    Ok((sample, tags))
}

#[instrument(skip(ctx, line))]
fn install_sample(ctx: &mut Context, line: &str) -> Result<()> {
    let (sample, tags) = split_sample_line(line)?;
    let mut root = ctx.main_root();

    for token in tokenize(sample)? {
        match token {
            Token::Literal(text) => {
                for b in text.bytes() {
                    add_parser(ctx, &mut root, new_literal_edge(b))?;
                }
            }
            Token::Placeholder { name, parser, arg } => {
                let prsid = id_of(parser).ok_or_else(|| eyre!("unknown parser name: {parser}"))?;
                let edge = new_edge(name, prsid, None, arg, None)?;
                add_parser(ctx, &mut root, edge)?;
            }
        }
    }

    ctx.set_terminal(root, true);
    if tags.is_some() {
        ctx.set_tags(root, tags);
    }
    Ok(())
}

/// Loads every sample line in `source` into `ctx`, skipping blank lines
/// and `#`-prefixed comments.
pub fn load_rulebase(ctx: &mut Context, source: &str) -> Result<()> {
    for (line_no, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        install_sample(ctx, line).map_err(|e| eyre!("rulebase line {}: {e}", line_no + 1))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdag_core::{normalize, optimize, NoopAnnotator};

    #[test]
    fn loads_two_samples_sharing_a_prefix() {
        let mut ctx = Context::new();
        load_rulebase(
            &mut ctx,
            "\"login from %ip:ipv4%\" tags=[\"auth\"]\n\"login from %host:word%\"\n",
        )
        .unwrap();
        optimize(&mut ctx);

        let outcome = normalize(&ctx, "login from 10.0.0.1", &NoopAnnotator);
        assert!(outcome.is_matched());
        assert_eq!(
            outcome.result().get("event.tags"),
            Some(&serde_json::Value::Array(vec!["auth".into()]))
        );
    }

    #[test]
    fn rejects_unterminated_placeholder() {
        let mut ctx = Context::new();
        let err = load_rulebase(&mut ctx, "\"bad %name\"\n").unwrap_err();
        assert!(err.to_string().contains("unterminated placeholder"));
    }

    #[test]
    fn rejects_unknown_parser_name() {
        let mut ctx = Context::new();
        let err = load_rulebase(&mut ctx, "\"login from %host:no_such_parser%\"\n").unwrap_err();
        assert!(err.to_string().contains("unknown parser name: no_such_parser"));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let mut ctx = Context::new();
        load_rulebase(&mut ctx, "# a comment\n\n\"ok\"\n").unwrap();
        assert_eq!(ctx.node_count(), 3); // root + 'o' + 'k'
    }
}
