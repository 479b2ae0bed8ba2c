//! Caller frame resolution
//!
//! Emission methods on [`Logger`](super::logger::Logger) run several frames
//! below the code that actually asked for the log line. This module walks
//! the stack at emission time and returns the first frame that does not
//! belong to this crate or to the backtrace machinery underneath it, so the
//! rendered line points at the caller's file and line rather than the
//! facade's internals.

use std::sync::OnceLock;

/// Lookback is bounded to avoid runaway walks on deep stacks.
const MAX_CALLER_DEPTH: usize = 25;

/// The facade's own crate identity, discovered on first resolution by
/// locating the frame of the walk routine itself.
static FACADE_CRATE: OnceLock<String> = OnceLock::new();

/// Resolved location of a log call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    /// Base name of the source file
    pub file: String,
    pub line: u32,
    /// Short function name, without the module path
    pub function: String,
}

/// Adjustments to where resolution lands.
///
/// `fix_by_file` and `fix_by_func` are substring sets: when the frame found
/// at the default depth matches either set, resolution moves one frame
/// deeper. This works around trampolines that interpose a frame between the
/// logical caller and the facade. `extra_skip` is an explicit frames-to-skip
/// count applied afterwards, for call shapes the substring sets cannot
/// describe.
#[derive(Debug, Clone, Default)]
pub struct CallerOverrides {
    pub fix_by_file: Vec<String>,
    pub fix_by_func: Vec<String>,
    pub extra_skip: usize,
}

struct RawFrame {
    function: String,
    file: Option<String>,
    line: Option<u32>,
}

/// Walk the stack and resolve the first frame outside the facade.
///
/// Returns `None` when no qualifying frame exists within the bounded search
/// depth; resolution never fails.
pub fn resolve(overrides: &CallerOverrides) -> Option<CallerInfo> {
    let frames = collect_frames();
    let own = facade_crate(&frames);

    let first = frames.iter().position(|f| {
        if f.function.is_empty() {
            // Unattributable frame, keep walking
            return false;
        }
        let pkg = crate_of(&f.function);
        pkg != own && pkg != "backtrace"
    })?;

    let mut idx = first;
    if matches_override(&frames[idx], overrides) {
        idx += 1;
    }
    idx += overrides.extra_skip;

    let frame = frames.get(idx)?;
    Some(CallerInfo {
        file: frame.file.clone().unwrap_or_default(),
        line: frame.line.unwrap_or(0),
        function: short_name(&frame.function),
    })
}

fn collect_frames() -> Vec<RawFrame> {
    let mut frames = Vec::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            let function = symbol
                .name()
                .map(|n| format!("{:#}", n))
                .unwrap_or_default();
            let file = symbol
                .filename()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned());
            frames.push(RawFrame {
                function,
                file,
                line: symbol.lineno(),
            });
        });
        frames.len() < MAX_CALLER_DEPTH
    });
    frames
}

/// Cache the facade's crate name from the frame of the walk itself.
fn facade_crate(frames: &[RawFrame]) -> &'static str {
    FACADE_CRATE
        .get_or_init(|| {
            frames
                .iter()
                .find(|f| {
                    f.function.contains("caller::collect_frames")
                        || f.function.contains("caller::resolve")
                })
                .map(|f| crate_of(&f.function).to_string())
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
        })
        .as_str()
}

/// Leading crate segment of a demangled symbol name.
///
/// Handles plain paths (`mycrate::module::func`) as well as qualified trait
/// forms (`<mycrate::Type as other::Trait>::method`).
fn crate_of(function: &str) -> &str {
    let name = function.strip_prefix('<').unwrap_or(function);
    let end = name.find("::").unwrap_or(name.len());
    let head = &name[..end];
    head.split(' ').next().unwrap_or(head)
}

/// Last path segment of a demangled symbol name, with closure markers
/// stripped.
fn short_name(function: &str) -> String {
    let mut name = function;
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    match name.rfind("::") {
        Some(idx) => name[idx + 2..].to_string(),
        None => name.to_string(),
    }
}

fn matches_override(frame: &RawFrame, overrides: &CallerOverrides) -> bool {
    if let Some(file) = &frame.file {
        if overrides.fix_by_file.iter().any(|pat| file.contains(pat)) {
            return true;
        }
    }
    overrides
        .fix_by_func
        .iter()
        .any(|pat| frame.function.contains(pat))
}
