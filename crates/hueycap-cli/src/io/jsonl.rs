// crates/hueycap-cli/src/io/jsonl.rs

use anyhow::Context;
use hueycap_core::{Diagnostic, Ratio};

/// Non-finite ratios become null.
fn ratio_json(r: Ratio) -> String {
    match r.value() {
        Some(v) => format!("{v}"),
        None => "null".to_string(),
    }
}

/// One JSON object per diagnostic.
/// Format: {"kind":"req04","raw":["01","2C"],"value":N,"factor":F|null,"expected":F}
///         {"kind":"req53","value":N}
///         {"kind":"res04","value":N,"luminance":F|null}
///         {"kind":"res53","value":N}
pub fn diagnostic_line(d: &Diagnostic) -> String {
    match d {
        Diagnostic::Request04 {
            raw,
            value,
            factor,
            expected,
        } => format!(
            "{{\"kind\":\"req04\",\"raw\":[\"{}\",\"{}\"],\"value\":{},\"factor\":{},\"expected\":{}}}",
            raw[0],
            raw[1],
            value,
            ratio_json(*factor),
            expected
        ),
        Diagnostic::Request53 { value } => format!("{{\"kind\":\"req53\",\"value\":{value}}}"),
        Diagnostic::Response04 { value, luminance } => format!(
            "{{\"kind\":\"res04\",\"value\":{},\"luminance\":{}}}",
            value,
            ratio_json(*luminance)
        ),
        Diagnostic::Response53 { value } => format!("{{\"kind\":\"res53\",\"value\":{value}}}"),
    }
}

pub fn write_diagnostics_file(path: &str, diags: &[Diagnostic]) -> anyhow::Result<()> {
    let mut s = String::new();
    for d in diags {
        s.push_str(&diagnostic_line(d));
        s.push('\n');
    }
    std::fs::write(path, s).with_context(|| format!("write diagnostics jsonl: {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_factor_is_null() {
        let d = Diagnostic::Request04 {
            raw: ["01".into(), "2C".into()],
            value: 300,
            factor: Ratio::NonFinite,
            expected: 0.0,
        };
        assert_eq!(
            diagnostic_line(&d),
            r#"{"kind":"req04","raw":["01","2C"],"value":300,"factor":null,"expected":0}"#
        );
    }

    #[test]
    fn luminance_is_plain_number() {
        let d = Diagnostic::Response04 {
            value: 50,
            luminance: Ratio::Finite(2000.5),
        };
        assert_eq!(
            diagnostic_line(&d),
            r#"{"kind":"res04","value":50,"luminance":2000.5}"#
        );
    }
}
