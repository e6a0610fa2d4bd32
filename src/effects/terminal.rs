use super::Effect;
use crate::constants::{
    ID_RESEARCH_TERMINAL, ID_TERMINAL_COMMAND, ID_TERMINAL_CURSOR, ID_TERMINAL_OUTPUT,
    SEL_TERMINAL_CONTAINER, TERMINAL_THRESHOLD,
};
use crate::core::typewriter::{
    approach_script, research_lines, LoopingTyper, LoopingTyperConfig, OutputLine,
    TerminalEvent, TerminalTypewriter, TypewriterConfig,
};
use crate::dom;
use crate::frame::{FrameLoop, FrameTime};
use crate::visibility::{Visibility, Watch};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Terminal {
    typewriter: TerminalTypewriter,
    events: Vec<TerminalEvent>,
    document: web::Document,
    command: web::HtmlElement,
    output: web::HtmlElement,
    cursor: Option<web::HtmlElement>,
}

impl Terminal {
    fn frame(&mut self, time: FrameTime) {
        self.typewriter
            .tick(time.dt as f64 * 1000.0, &mut self.events);
        // take so the loop below can borrow self
        let mut events = std::mem::take(&mut self.events);
        for ev in events.drain(..) {
            self.apply(ev);
        }
        self.events = events;
    }

    fn apply(&self, ev: TerminalEvent) {
        match ev {
            TerminalEvent::Command(text) => self.command.set_text_content(Some(&text)),
            TerminalEvent::ClearCommand => self.command.set_text_content(Some("")),
            TerminalEvent::AppendLine(line) => self.append_line(&line),
            TerminalEvent::ClearOutput => self.output.set_inner_html(""),
            TerminalEvent::CursorVisible(on) => {
                if let Some(c) = &self.cursor {
                    dom::set_style(c, "opacity", if on { "1" } else { "0" });
                }
            }
        }
    }

    fn append_line(&self, line: &OutputLine) {
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        el.set_class_name(line.kind.css_class());
        el.set_text_content(Some(&line.text));
        _ = self.output.append_child(&el);
        self.output.set_scroll_top(self.output.scroll_height());
    }
}

/// Scripted command/output session that plays once the terminal scrolls
/// into view, then loops.
pub struct TerminalEffect {
    state: Rc<RefCell<Terminal>>,
    frame_loop: Rc<RefCell<Option<FrameLoop>>>,
    visibility: Option<Visibility>,
}

impl TerminalEffect {
    pub fn start() -> anyhow::Result<Self> {
        let (_window, document) = super::page()?;
        let command: web::HtmlElement = dom::element_by_id(&document, ID_TERMINAL_COMMAND)?;
        let output: web::HtmlElement = dom::element_by_id(&document, ID_TERMINAL_OUTPUT)?;
        let cursor = dom::element_by_id::<web::HtmlElement>(&document, ID_TERMINAL_CURSOR).ok();
        let container = document
            .query_selector(SEL_TERMINAL_CONTAINER)
            .ok()
            .flatten()
            .ok_or_else(|| anyhow::anyhow!("missing {}", SEL_TERMINAL_CONTAINER))?;

        let state = Rc::new(RefCell::new(Terminal {
            typewriter: TerminalTypewriter::new(approach_script(), TypewriterConfig::default()),
            events: Vec::new(),
            document,
            command,
            output,
            cursor,
        }));
        let frame_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

        let visibility = {
            let st = state.clone();
            let fl = frame_loop.clone();
            Visibility::observe(&[container], TERMINAL_THRESHOLD, "0px", move |_, change| {
                if !change.intersecting {
                    return Watch::Keep;
                }
                st.borrow_mut().typewriter.start();
                let frame_state = st.clone();
                *fl.borrow_mut() = Some(FrameLoop::start(move |t| {
                    frame_state.borrow_mut().frame(t)
                }));
                log::info!("[terminal] visible, starting session");
                Watch::Done
            })?
        };

        Ok(Self {
            state,
            frame_loop,
            visibility: Some(visibility),
        })
    }
}

impl Effect for TerminalEffect {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn dispose(&mut self) {
        self.visibility = None;
        if let Some(fl) = self.frame_loop.borrow_mut().take() {
            fl.stop();
        }
        self.state.borrow_mut().typewriter.dispose();
    }
}

/// Single-line type/delete loop in the research section.
pub struct ResearchTyperEffect {
    typer: Rc<RefCell<LoopingTyper>>,
    frame_loop: Option<FrameLoop>,
}

impl ResearchTyperEffect {
    pub fn start() -> anyhow::Result<Self> {
        let (_window, document) = super::page()?;
        let text_el: web::HtmlElement = dom::element_by_id(&document, ID_RESEARCH_TERMINAL)?;

        let typer = Rc::new(RefCell::new(LoopingTyper::new(
            research_lines(),
            LoopingTyperConfig::default(),
        )));
        typer.borrow_mut().start();

        let frame_typer = typer.clone();
        let frame_loop = FrameLoop::start(move |t| {
            let mut typer = frame_typer.borrow_mut();
            if typer.tick(t.dt as f64 * 1000.0) {
                text_el.set_text_content(Some(typer.text()));
            }
        });
        Ok(Self {
            typer,
            frame_loop: Some(frame_loop),
        })
    }
}

impl Effect for ResearchTyperEffect {
    fn name(&self) -> &'static str {
        "research-typer"
    }

    fn dispose(&mut self) {
        self.frame_loop = None;
        self.typer.borrow_mut().dispose();
    }
}
