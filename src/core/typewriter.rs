//! Simulated terminal sessions.
//!
//! [`TerminalTypewriter`] plays a script of commands and their output lines;
//! [`LoopingTyper`] types and deletes a rotating list of single lines. Both
//! are advanced by [`tick`](TerminalTypewriter::tick) with the frame delta in
//! milliseconds and report what changed, so the DOM layer never owns timers.

use super::timer::{Schedule, MAX_STEPS_PER_TICK};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Normal,
    Highlight,
    Success,
    Comment,
    Error,
}

impl LineKind {
    pub fn css_class(self) -> &'static str {
        match self {
            LineKind::Normal => "terminal-output-line",
            LineKind::Highlight => "terminal-output-line highlight",
            LineKind::Success => "terminal-output-line success",
            LineKind::Comment => "terminal-output-line comment",
            LineKind::Error => "terminal-output-line error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutputLine {
    pub text: String,
    pub kind: LineKind,
}

impl OutputLine {
    pub fn new(text: &str, kind: LineKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScriptEntry {
    pub command: String,
    pub output: SmallVec<[OutputLine; 4]>,
    /// Extra hold after the last output line.
    pub delay_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TerminalEvent {
    Command(String),
    ClearCommand,
    AppendLine(OutputLine),
    ClearOutput,
    CursorVisible(bool),
}

#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    pub start_delay_ms: f64,
    pub char_interval_ms: f64,
    pub command_pause_ms: f64,
    pub line_interval_ms: f64,
    pub gap_ms: f64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000.0,
            char_interval_ms: 30.0,
            command_pause_ms: 800.0,
            line_interval_ms: 200.0,
            gap_ms: 1000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Starting,
    Typing { typed: usize },
    ShowOutput,
    Output { emitted: usize },
    Settle,
    Gap,
}

pub struct TerminalTypewriter {
    script: Vec<ScriptEntry>,
    config: TypewriterConfig,
    index: usize,
    phase: Phase,
    schedule: Schedule,
    started: bool,
}

impl TerminalTypewriter {
    pub fn new(script: Vec<ScriptEntry>, config: TypewriterConfig) -> Self {
        Self {
            script,
            config,
            index: 0,
            phase: Phase::Idle,
            schedule: Schedule::default(),
            started: false,
        }
    }

    /// Begin playback after the start delay. Only the first call has an
    /// effect.
    pub fn start(&mut self) {
        if self.started || self.script.is_empty() {
            return;
        }
        self.started = true;
        self.phase = Phase::Starting;
        self.schedule.from_now(self.config.start_delay_ms);
    }

    pub fn dispose(&mut self) {
        self.phase = Phase::Idle;
        self.schedule.cancel();
    }

    pub fn tick(&mut self, dt_ms: f64, out: &mut Vec<TerminalEvent>) {
        self.schedule.advance(dt_ms);
        let mut steps = 0;
        while self.phase != Phase::Idle && self.schedule.is_due() && steps < MAX_STEPS_PER_TICK {
            self.step(out);
            steps += 1;
        }
    }

    fn step(&mut self, out: &mut Vec<TerminalEvent>) {
        match self.phase {
            Phase::Idle => {}
            Phase::Starting | Phase::Gap => self.begin_entry(out),
            Phase::Typing { typed } => {
                let command = &self.script[self.index].command;
                if typed < command.chars().count() {
                    let typed = typed + 1;
                    out.push(TerminalEvent::Command(command.chars().take(typed).collect()));
                    self.phase = Phase::Typing { typed };
                    self.schedule.after(self.config.char_interval_ms);
                } else {
                    out.push(TerminalEvent::CursorVisible(true));
                    self.phase = Phase::ShowOutput;
                    self.schedule.after(self.config.command_pause_ms);
                }
            }
            Phase::ShowOutput => {
                out.push(TerminalEvent::CursorVisible(false));
                out.push(TerminalEvent::ClearCommand);
                self.phase = Phase::Output { emitted: 0 };
                self.schedule.after(0.0);
            }
            Phase::Output { emitted } => {
                let entry = &self.script[self.index];
                match entry.output.get(emitted) {
                    Some(line) => {
                        let line = if line.text.is_empty() {
                            OutputLine::new(" ", LineKind::Normal)
                        } else {
                            line.clone()
                        };
                        out.push(TerminalEvent::AppendLine(line));
                        let emitted = emitted + 1;
                        if emitted < entry.output.len() {
                            self.phase = Phase::Output { emitted };
                            self.schedule.after(self.config.line_interval_ms);
                        } else {
                            self.phase = Phase::Settle;
                            self.schedule
                                .after(self.config.line_interval_ms + entry.delay_ms);
                        }
                    }
                    None => {
                        self.phase = Phase::Settle;
                        self.schedule.after(entry.delay_ms);
                    }
                }
            }
            Phase::Settle => {
                out.push(TerminalEvent::CursorVisible(true));
                self.index += 1;
                self.phase = Phase::Gap;
                self.schedule.after(self.config.gap_ms);
            }
        }
    }

    fn begin_entry(&mut self, out: &mut Vec<TerminalEvent>) {
        if self.index >= self.script.len() {
            self.index = 0;
            out.push(TerminalEvent::ClearOutput);
            out.push(TerminalEvent::ClearCommand);
        }
        out.push(TerminalEvent::CursorVisible(false));
        self.phase = Phase::Typing { typed: 0 };
        self.schedule.after(0.0);
    }

    #[inline]
    pub fn current_entry(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }
}

/// The "how we think" session shown in the approach section.
pub fn approach_script() -> Vec<ScriptEntry> {
    use LineKind::*;
    let entry = |command: &str, lines: &[(&str, LineKind)], delay_ms: f64| ScriptEntry {
        command: command.to_string(),
        output: lines
            .iter()
            .map(|(text, kind)| OutputLine::new(text, *kind))
            .collect(),
        delay_ms,
    };
    vec![
        entry(
            "cat how-we-think.txt",
            &[
                ("It's not a tagline. It's a mindset.", Highlight),
                ("", Normal),
                ("Most companies deliver what you expect.", Normal),
                ("We deliver what you didn't.", Success),
            ],
            500.0,
        ),
        entry(
            "how-we-think --explore",
            &[
                ("We challenge assumptions.", Normal),
                ("We question the status quo.", Normal),
                ("We don't accept \"that's how it's always been done.\"", Highlight),
            ],
            600.0,
        ),
        entry(
            "how-we-think --build",
            &[
                ("We see problems as opportunities.", Normal),
                ("We transform ideas into reality.", Success),
                ("We build what you didn't know was possible.", Highlight),
            ],
            600.0,
        ),
        entry(
            "how-we-think --innovate",
            &[
                ("We're comfortable with uncertainty.", Normal),
                ("We thrive in ambiguity.", Normal),
                ("We're not afraid to fail. Failure teaches.", Highlight),
            ],
            600.0,
        ),
        entry(
            "how-we-think --deliver",
            &[
                ("When you work with us, you're partnering with explorers.", Normal),
                ("With researchers. With builders.", Normal),
                ("Expect results that exceed your imagination.", Success),
            ],
            600.0,
        ),
        entry(
            "echo \"Expect the Unthinkable\"",
            &[
                ("Expect the Unthinkable", Highlight),
                ("", Normal),
                ("# Ready to explore what's possible?", Comment),
            ],
            800.0,
        ),
    ]
}

// ---------------- Type/delete loop ----------------

#[derive(Clone, Debug)]
pub struct LoopingTyperConfig {
    pub start_delay_ms: f64,
    pub type_interval_ms: f64,
    pub delete_interval_ms: f64,
    pub hold_ms: f64,
    /// Additional hold after the last line, before the loop restarts.
    pub wrap_hold_ms: f64,
    pub between_ms: f64,
}

impl Default for LoopingTyperConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000.0,
            type_interval_ms: 50.0,
            delete_interval_ms: 30.0,
            hold_ms: 2000.0,
            wrap_hold_ms: 1000.0,
            between_ms: 500.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TyperPhase {
    Idle,
    Typing,
    Deleting,
}

pub struct LoopingTyper {
    lines: Vec<String>,
    config: LoopingTyperConfig,
    line: usize,
    chars: usize,
    phase: TyperPhase,
    schedule: Schedule,
    text: String,
}

impl LoopingTyper {
    pub fn new(lines: Vec<String>, config: LoopingTyperConfig) -> Self {
        Self {
            lines,
            config,
            line: 0,
            chars: 0,
            phase: TyperPhase::Idle,
            schedule: Schedule::default(),
            text: String::new(),
        }
    }

    pub fn start(&mut self) {
        if self.phase != TyperPhase::Idle || self.lines.is_empty() {
            return;
        }
        self.phase = TyperPhase::Typing;
        self.schedule.from_now(self.config.start_delay_ms);
    }

    pub fn dispose(&mut self) {
        self.phase = TyperPhase::Idle;
        self.schedule.cancel();
    }

    /// Returns `true` when the visible text changed.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        self.schedule.advance(dt_ms);
        let mut changed = false;
        let mut steps = 0;
        while self.phase != TyperPhase::Idle && self.schedule.is_due() && steps < MAX_STEPS_PER_TICK {
            changed |= self.step();
            steps += 1;
        }
        changed
    }

    fn step(&mut self) -> bool {
        let len = self.lines[self.line].chars().count();
        match self.phase {
            TyperPhase::Idle => false,
            TyperPhase::Typing => {
                if self.chars < len {
                    self.chars += 1;
                    self.sync_text();
                }
                if self.chars >= len {
                    self.phase = TyperPhase::Deleting;
                    let last = self.line + 1 == self.lines.len();
                    let hold = if last {
                        self.config.hold_ms + self.config.wrap_hold_ms
                    } else {
                        self.config.hold_ms
                    };
                    self.schedule.after(hold);
                } else {
                    self.schedule.after(self.config.type_interval_ms);
                }
                true
            }
            TyperPhase::Deleting => {
                if self.chars > 0 {
                    self.chars -= 1;
                    self.sync_text();
                }
                if self.chars == 0 {
                    self.line = (self.line + 1) % self.lines.len();
                    self.phase = TyperPhase::Typing;
                    self.schedule.after(self.config.between_ms);
                } else {
                    self.schedule.after(self.config.delete_interval_ms);
                }
                true
            }
        }
    }

    fn sync_text(&mut self) {
        self.text.clear();
        self.text
            .extend(self.lines[self.line].chars().take(self.chars));
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn line_index(&self) -> usize {
        self.line
    }
}

/// Lines cycled by the research-section terminal.
pub fn research_lines() -> Vec<String> {
    [
        "python research/main.py",
        "> Testing hypothesis: AI can understand context beyond training data",
        "> Running experiment #1273",
        "> Status: In progress...",
        "> Results: Unexpected pattern detected",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

