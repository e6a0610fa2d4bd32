// Host-side tests for the frame-driven text sequencers: the scripted
// terminal, the type/delete loop, and the hero tagline rotator.

use site_fx::core::tagline::{TaglineConfig, TaglineEvent, TaglineRotator, HERO_TAGLINES};
use site_fx::core::timer::Schedule;
use site_fx::core::typewriter::{
    approach_script, research_lines, LineKind, LoopingTyper, LoopingTyperConfig, OutputLine,
    ScriptEntry, TerminalEvent, TerminalTypewriter, TypewriterConfig,
};
use smallvec::smallvec;

fn entry(command: &str, lines: &[(&str, LineKind)], delay_ms: f64) -> ScriptEntry {
    ScriptEntry {
        command: command.to_string(),
        output: lines.iter().map(|(t, k)| OutputLine::new(t, *k)).collect(),
        delay_ms,
    }
}

/// Advance in 1 ms steps, stamping each event with the time it fired.
fn run(tw: &mut TerminalTypewriter, until_ms: u32) -> Vec<(u32, TerminalEvent)> {
    let mut stamped = Vec::new();
    let mut out = Vec::new();
    for now in 1..=until_ms {
        tw.tick(1.0, &mut out);
        stamped.extend(out.drain(..).map(|e| (now, e)));
    }
    stamped
}

fn at(events: &[(u32, TerminalEvent)], wanted: &TerminalEvent) -> Vec<u32> {
    events
        .iter()
        .filter(|(_, e)| e == wanted)
        .map(|(t, _)| *t)
        .collect()
}

fn two_entry_script() -> Vec<ScriptEntry> {
    vec![
        entry("ls", &[("a", LineKind::Success), ("", LineKind::Normal)], 500.0),
        entry("pwd", &[], 0.0),
    ]
}

#[test]
fn nothing_happens_before_start() {
    let mut tw = TerminalTypewriter::new(two_entry_script(), TypewriterConfig::default());
    assert!(run(&mut tw, 3000).is_empty());
    assert!(!tw.is_running());
}

#[test]
fn commands_type_one_char_per_interval() {
    let mut tw = TerminalTypewriter::new(two_entry_script(), TypewriterConfig::default());
    tw.start();
    let events = run(&mut tw, 1100);
    assert_eq!(at(&events, &TerminalEvent::Command("l".into())), vec![1000]);
    assert_eq!(at(&events, &TerminalEvent::Command("ls".into())), vec![1030]);
    assert_eq!(at(&events, &TerminalEvent::CursorVisible(true)), vec![1060]);
}

#[test]
fn output_lines_are_spaced_and_blank_lines_padded() {
    let mut tw = TerminalTypewriter::new(two_entry_script(), TypewriterConfig::default());
    tw.start();
    let events = run(&mut tw, 2500);
    let first = OutputLine::new("a", LineKind::Success);
    let blank = OutputLine::new(" ", LineKind::Normal);
    assert_eq!(at(&events, &TerminalEvent::ClearCommand), vec![1860]);
    assert_eq!(at(&events, &TerminalEvent::AppendLine(first)), vec![1860]);
    assert_eq!(at(&events, &TerminalEvent::AppendLine(blank)), vec![2060]);
}

#[test]
fn script_loops_after_last_entry() {
    let mut tw = TerminalTypewriter::new(two_entry_script(), TypewriterConfig::default());
    tw.start();
    let events = run(&mut tw, 6000);
    assert_eq!(at(&events, &TerminalEvent::Command("p".into())), vec![3760]);
    assert_eq!(at(&events, &TerminalEvent::ClearOutput), vec![5650]);
    assert_eq!(at(&events, &TerminalEvent::Command("l".into())), vec![1000, 5650]);
    assert_eq!(tw.current_entry(), 0);
}

#[test]
fn start_is_one_shot_and_dispose_halts() {
    let mut tw = TerminalTypewriter::new(two_entry_script(), TypewriterConfig::default());
    tw.start();
    run(&mut tw, 500);
    tw.start();
    let events = run(&mut tw, 600);
    // the second start must not push the first keystroke back
    assert_eq!(at(&events, &TerminalEvent::Command("l".into())), vec![500]);

    tw.dispose();
    assert!(!tw.is_running());
    assert!(run(&mut tw, 5000).is_empty());
}

#[test]
fn empty_script_never_runs() {
    let mut tw = TerminalTypewriter::new(Vec::new(), TypewriterConfig::default());
    tw.start();
    assert!(!tw.is_running());
    assert!(run(&mut tw, 2000).is_empty());
}

#[test]
fn long_frame_catches_up_in_order() {
    let mut tw = TerminalTypewriter::new(two_entry_script(), TypewriterConfig::default());
    tw.start();
    let mut out = Vec::new();
    tw.tick(1100.0, &mut out);
    assert_eq!(
        out,
        vec![
            TerminalEvent::CursorVisible(false),
            TerminalEvent::Command("l".into()),
            TerminalEvent::Command("ls".into()),
            TerminalEvent::CursorVisible(true),
        ]
    );
}

#[test]
fn approach_script_ends_on_the_slogan() {
    let script = approach_script();
    assert_eq!(script.len(), 6);
    let last = script.last().unwrap();
    assert_eq!(last.output[0], OutputLine::new("Expect the Unthinkable", LineKind::Highlight));
    assert_eq!(last.output[2].kind, LineKind::Comment);
    assert!(script.iter().all(|e| !e.command.is_empty()));
}

#[test]
fn line_kinds_map_to_css() {
    assert_eq!(LineKind::Normal.css_class(), "terminal-output-line");
    assert_eq!(LineKind::Error.css_class(), "terminal-output-line error");
    let e = ScriptEntry {
        command: "x".into(),
        output: smallvec![OutputLine::new("y", LineKind::Highlight)],
        delay_ms: 0.0,
    };
    assert_eq!(e.output.len(), 1);
}

fn typer_texts(typer: &mut LoopingTyper, until_ms: u32) -> Vec<(u32, String)> {
    let mut seen = Vec::new();
    for now in 1..=until_ms {
        if typer.tick(1.0) {
            seen.push((now, typer.text().to_string()));
        }
    }
    seen
}

#[test]
fn looping_typer_types_holds_deletes_and_wraps() {
    let mut typer = LoopingTyper::new(vec!["ab".into(), "c".into()], LoopingTyperConfig::default());
    typer.start();
    let seen = typer_texts(&mut typer, 7100);
    let expected: Vec<(u32, String)> = [
        (1000, "a"),
        (1050, "ab"),
        (3050, "a"),
        (3080, ""),
        (3580, "c"),
        (6580, ""),
        (7080, "a"),
    ]
    .iter()
    .map(|(t, s)| (*t, s.to_string()))
    .collect();
    assert_eq!(seen, expected);
    assert_eq!(typer.line_index(), 0);
}

#[test]
fn looping_typer_ignores_empty_list_and_dispose() {
    let mut empty = LoopingTyper::new(Vec::new(), LoopingTyperConfig::default());
    empty.start();
    assert!(typer_texts(&mut empty, 3000).is_empty());

    let mut typer = LoopingTyper::new(research_lines(), LoopingTyperConfig::default());
    typer.start();
    typer_texts(&mut typer, 1200);
    assert!(!typer.text().is_empty());
    typer.dispose();
    assert!(typer_texts(&mut typer, 5000).is_empty());
}

#[test]
fn research_lines_have_no_blank_entries() {
    assert!(research_lines().iter().all(|l| !l.is_empty()));
}

#[test]
fn tagline_fades_then_swaps() {
    let mut r = TaglineRotator::new(HERO_TAGLINES.len(), TaglineConfig::default());
    assert_eq!(r.start(), Some(TaglineEvent::Show(0)));
    assert_eq!(r.start(), None);

    let mut out = Vec::new();
    r.tick(2999.0, &mut out);
    assert!(out.is_empty());
    r.tick(1.0, &mut out);
    assert_eq!(out, vec![TaglineEvent::FadeOut]);
    out.clear();
    r.tick(600.0, &mut out);
    assert_eq!(out, vec![TaglineEvent::Show(1)]);
    out.clear();
    r.tick(3500.0, &mut out);
    assert_eq!(out, vec![TaglineEvent::FadeOut]);
}

#[test]
fn tagline_wraps_around() {
    let mut r = TaglineRotator::new(2, TaglineConfig::default());
    r.start();
    let mut out = Vec::new();
    // first fade, then two full cycles
    r.tick(3000.0 + 600.0 + 2.0 * 4100.0, &mut out);
    let shown: Vec<usize> = out
        .iter()
        .filter_map(|e| match e {
            TaglineEvent::Show(i) => Some(*i),
            TaglineEvent::FadeOut => None,
        })
        .collect();
    assert_eq!(shown, vec![1, 0, 1]);
}

#[test]
fn tagline_without_lines_stays_idle() {
    let mut r = TaglineRotator::new(0, TaglineConfig::default());
    assert_eq!(r.start(), None);
    let mut out = Vec::new();
    r.tick(60_000.0, &mut out);
    assert!(out.is_empty());
}

#[test]
fn schedule_chains_from_previous_deadline() {
    let mut s = Schedule::default();
    assert!(!s.is_pending());
    s.from_now(100.0);
    s.advance(150.0);
    assert!(s.is_due());
    s.after(30.0);
    // 130 is still behind "now", so the step is due at once
    assert!(s.is_due());
    s.after(30.0);
    assert!(!s.is_due());
    s.advance(-5.0);
    assert_eq!(s.now_ms(), 150.0);
    s.cancel();
    assert!(!s.is_pending());
    assert!(!s.is_due());
}
