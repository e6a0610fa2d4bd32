use super::Effect;
use crate::constants::{
    GRAPH_EDGE_COLOR, GRAPH_EDGE_HALF_WIDTH, GRAPH_NODE_ALPHA, GRAPH_NODE_SIZE, GRAPH_THRESHOLD,
    ID_RESEARCH_VISUAL,
};
use crate::core::node_graph::{NodeGraph, NodeGraphConfig};
use crate::dom;
use crate::events::Listener;
use crate::frame::{FrameLoop, FrameTime};
use crate::render::{GpuState, LineInstance, Scene, SpriteInstance, SpriteParams};
use crate::visibility::{Visibility, Watch};
use glam::Mat4;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Research {
    graph: NodeGraph,
    gpu: GpuState,
    canvas: web::HtmlCanvasElement,
    aspect: f32,
    sprites: Vec<SpriteInstance>,
    lines: Vec<LineInstance>,
}

impl Research {
    fn measure(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.gpu.resize_if_needed(w, h);
        self.aspect = w as f32 / h as f32;
    }

    fn frame(&mut self, time: FrameTime) {
        if !self.graph.is_visible() {
            return;
        }
        self.graph.tick(time.dt);
        let positions = self.graph.positions();
        self.sprites.clear();
        self.sprites.extend(
            positions
                .iter()
                .zip(self.graph.colors())
                .map(|(p, c)| SpriteInstance::new(*p, *c, GRAPH_NODE_ALPHA, GRAPH_NODE_SIZE)),
        );
        self.lines.clear();
        for edge in self.graph.edges() {
            self.lines.push(LineInstance::new(
                positions[edge.a],
                positions[edge.b],
                GRAPH_EDGE_HALF_WIDTH,
                GRAPH_EDGE_COLOR,
                self.graph.edge_alpha(edge),
            ));
        }
        let camera = self.graph.camera(self.aspect);
        let scene = Scene {
            camera: &camera,
            model: Mat4::IDENTITY,
            params: SpriteParams {
                time: self.graph.time(),
                ..Default::default()
            },
            sprites: &self.sprites,
            lines: &self.lines,
        };
        if let Err(e) = self.gpu.render(&scene) {
            log::error!("[research] render error: {:?}", e);
        }
    }
}

/// Orbiting node network in the research section; animates only while
/// on screen.
pub struct ResearchGraphEffect {
    canvas: web::HtmlCanvasElement,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<Listener>,
    visibility: Option<Visibility>,
}

impl ResearchGraphEffect {
    pub async fn start() -> anyhow::Result<Self> {
        let (window, document) = super::page()?;
        let container: web::HtmlElement = dom::element_by_id(&document, ID_RESEARCH_VISUAL)?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::set_style(&canvas, "width", "100%");
        dom::set_style(&canvas, "height", "100%");
        dom::set_style(&canvas, "display", "block");
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);

        let config = NodeGraphConfig::default();
        let gpu = match GpuState::new(&canvas, config.node_count).await {
            Ok(g) => g,
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };
        let state = Rc::new(RefCell::new(Research {
            graph: NodeGraph::new(config),
            gpu,
            canvas: canvas.clone(),
            aspect: 1.0,
            sprites: Vec::new(),
            lines: Vec::new(),
        }));
        state.borrow_mut().measure();
        log::info!(
            "[research] graph with {} edges",
            state.borrow().graph.edges().len()
        );

        let resize_state = state.clone();
        let listeners = vec![Listener::new(&window, "resize", move |_| {
            resize_state.borrow_mut().measure()
        })];

        let visibility = {
            let st = state.clone();
            Visibility::observe(&[container.into()], GRAPH_THRESHOLD, "0px", move |_, change| {
                st.borrow_mut().graph.set_visible(change.intersecting);
                Watch::Keep
            })?
        };

        let frame_state = state.clone();
        let frame_loop = FrameLoop::start(move |t| frame_state.borrow_mut().frame(t));
        Ok(Self {
            canvas,
            frame_loop: Some(frame_loop),
            listeners,
            visibility: Some(visibility),
        })
    }
}

impl Effect for ResearchGraphEffect {
    fn name(&self) -> &'static str {
        "research-graph"
    }

    fn dispose(&mut self) {
        self.frame_loop = None;
        self.listeners.clear();
        self.visibility = None;
        self.canvas.remove();
    }
}
