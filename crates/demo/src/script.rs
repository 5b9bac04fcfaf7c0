// File: crates/demo/src/script.rs
// Summary: CSV lifecycle script loader (event,hook,element,points).

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Updated,
    Destroyed,
}

impl FromStr for Lifecycle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mounted" | "mount" | "attach" => Ok(Lifecycle::Mounted),
            "updated" | "update" => Ok(Lifecycle::Updated),
            "destroyed" | "destroy" | "detach" => Ok(Lifecycle::Destroyed),
            other => anyhow::bail!("unknown lifecycle event `{other}`"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptEvent {
    pub event: Lifecycle,
    pub hook: String,
    pub element: String,
    /// Raw `data-points` value; `None` leaves the attribute unset.
    pub points: Option<String>,
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_records(rdr)
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    parse_records(rdr)
}

fn parse_records<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<ScriptEvent>> {
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = row + 2; // header is line 1
        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or("");

        let event = field(0).parse::<Lifecycle>().with_context(|| format!("line {line}"))?;
        let element = field(2);
        if element.is_empty() {
            anyhow::bail!("line {line}: missing element id");
        }
        let points = rec.get(3).filter(|p| !p.trim().is_empty()).map(str::to_string);
        out.push(ScriptEvent { event, hook: field(1).to_string(), element: element.to_string(), points });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_points_and_blank_fields() {
        let text = "event,hook,element,points\n\
                    mounted,ChartJSDoughnut,budget,\"[10,20,70]\"\n\
                    destroyed,,budget,\n";
        let events = parse_script(text).expect("parse");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event, Lifecycle::Mounted);
        assert_eq!(events[0].points.as_deref(), Some("[10,20,70]"));
        assert_eq!(events[1].event, Lifecycle::Destroyed);
        assert_eq!(events[1].points, None);
    }

    #[test]
    fn malformed_points_are_kept_verbatim() {
        let events = parse_script("event,hook,element,points\nupdated,H,q,not-json\n").expect("parse");
        assert_eq!(events[0].points.as_deref(), Some("not-json"));
    }

    #[test]
    fn unknown_event_is_an_error() {
        let err = parse_script("event,hook,element,points\nexploded,H,q,\n").unwrap_err();
        assert!(format!("{err:#}").contains("unknown lifecycle event"));
    }

    #[test]
    fn missing_element_is_an_error() {
        assert!(parse_script("event,hook,element,points\nmounted,H,,[1]\n").is_err());
    }

    #[test]
    fn bundled_sample_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/replay.csv");
        let events = load_script(&path).expect("sample script");
        assert!(events.iter().any(|e| e.event == Lifecycle::Updated));
    }
}
