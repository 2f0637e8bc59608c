//! Colored console output for model events.
//!
//! Provides a custom `tracing` layer that renders the structured events
//! emitted by `quirkysat-model` with colors.
//!
//! ## Log Levels
//!
//! - **WARN**: Ignored or clamped thresholds
//! - **DEBUG**: Model construction, verdicts, short circuits, overrides
//! - **TRACE**: Individual clause evaluations
//!
//! The default filter is `quirkysat_model=info`. Set `RUST_LOG`, for example
//! `RUST_LOG=quirkysat_model=debug`, to see verdicts.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DIRECTIVE: &str = "quirkysat_model=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ModelConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = format!("quirkysat v{} - weighted clause scoring", VERSION);
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats model events with colors.
pub struct ModelConsoleLayer;

impl<S: Subscriber> Layer<S> for ModelConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Only model events carry the fields we render
        if !metadata.target().starts_with("quirkysat_model") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    kind: Option<String>,
    clause: Option<String>,
    score: Option<String>,
    required: Option<String>,
    supplied: Option<String>,
    weight: Option<String>,
    from: Option<String>,
    to: Option<String>,
    satisfied: Option<bool>,
    passed: Option<bool>,
    skipped: Option<u64>,
    passed_count: Option<u64>,
    clause_count: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "kind" => self.kind = Some(s),
            "clause" => self.clause = Some(s),
            "score" => self.score = Some(s),
            "required" => self.required = Some(s),
            "supplied" => self.supplied = Some(s),
            "weight" => self.weight = Some(s),
            "from" => self.from = Some(s),
            "to" => self.to = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "skipped" => self.skipped = Some(value),
            "passed_count" => self.passed_count = Some(value),
            "clause_count" => self.clause_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "satisfied" => self.satisfied = Some(value),
            "passed" => self.passed = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_debug(field, &value);
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref() {
        Some("model_built") => format_model_built(v),
        Some("verdict") => format_verdict(v),
        Some("short_circuit") => format_short_circuit(v),
        Some("clause_pushed") => format_clause_pushed(v),
        Some("weight_override") => format_weight_override(v),
        Some("threshold_ignored") | Some("threshold_clamped") => format_threshold_warning(v),
        // Per-clause trace events carry no event name
        None if level == Level::TRACE && v.passed.is_some() => format_clause(v),
        _ => String::new(),
    }
}

fn format_kind(v: &EventVisitor) -> String {
    format!("[{}]", v.kind.as_deref().unwrap_or("model"))
        .bright_cyan()
        .to_string()
}

fn format_model_built(v: &EventVisitor) -> String {
    format!(
        "{} {} Model built │ {} clauses │ required {}",
        "▶".bright_green().bold(),
        format_kind(v),
        v.clause_count.unwrap_or(0).to_string().bright_yellow(),
        v.required.as_deref().unwrap_or("N/A").bright_yellow()
    )
}

fn format_verdict(v: &EventVisitor) -> String {
    let satisfied = v.satisfied.unwrap_or(false);
    let icon = if satisfied {
        "✓".bright_green().bold().to_string()
    } else {
        "✗".bright_red().bold().to_string()
    };
    // Absolute verdicts count passing clauses instead of summing weights
    let (label, measured, target) = match (&v.score, v.passed_count) {
        (Some(score), _) => ("score", score.clone(), v.required.clone()),
        (None, Some(passed)) => {
            let total = v.clause_count.map(|n| n.to_string());
            ("passed", passed.to_string(), total)
        }
        (None, None) => ("score", "N/A".to_string(), v.required.clone()),
    };
    let measured = if satisfied {
        measured.bright_green().to_string()
    } else {
        measured.bright_red().to_string()
    };

    format!(
        "{} {} {} {} / {}",
        icon,
        format_kind(v),
        label,
        measured,
        target.as_deref().unwrap_or("N/A").white()
    )
}

fn format_short_circuit(v: &EventVisitor) -> String {
    format!(
        "{} {} clause {} failed │ {} skipped",
        "✗".bright_red().bold(),
        format_kind(v),
        v.clause.as_deref().unwrap_or("?").white().bold(),
        v.skipped.unwrap_or(0).to_string().bright_black()
    )
}

fn format_clause_pushed(v: &EventVisitor) -> String {
    format!(
        "  {} clause {} added │ weight {}",
        "+".bright_blue(),
        v.clause.as_deref().unwrap_or("?").white(),
        v.weight.as_deref().unwrap_or("N/A").bright_yellow()
    )
}

fn format_weight_override(v: &EventVisitor) -> String {
    format!(
        "  {} clause {} weight {} → {}",
        "~".bright_blue(),
        v.clause.as_deref().unwrap_or("?").white(),
        v.from.as_deref().unwrap_or("N/A").bright_black(),
        v.to.as_deref().unwrap_or("N/A").bright_yellow()
    )
}

fn format_threshold_warning(v: &EventVisitor) -> String {
    let action = match v.event.as_deref() {
        Some("threshold_clamped") => "clamped",
        _ => "ignored",
    };
    format!(
        "{} {} required score {} {}",
        "WARN".yellow().bold(),
        format_kind(v),
        v.supplied.as_deref().unwrap_or("N/A").bright_yellow(),
        action
    )
}

fn format_clause(v: &EventVisitor) -> String {
    let passed = v.passed.unwrap_or(false);
    let icon = if passed {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };
    format!(
        "    {} {}",
        icon,
        v.clause.as_deref().unwrap_or("?").bright_black()
    )
}
