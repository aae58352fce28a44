use std::collections::HashMap;

use crate::diagram::{State, TransitionDiagram};
use color_eyre::eyre::{eyre, Result};
use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::Color32;
use egui_graphs::{
    DefaultGraphView, Graph, SettingsInteraction, SettingsNavigation, SettingsStyle,
};
use log::info;
use petgraph::{graph::EdgeIndex, graph::NodeIndex, prelude::StableGraph};

struct Visualizer {
    graph: Graph,
}

impl Visualizer {
    fn new(_: &CreationContext<'_>, graph: Graph) -> Self {
        Visualizer { graph }
    }
}

impl App for Visualizer {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let navigation_settings = &SettingsNavigation::new()
                .with_zoom_and_pan_enabled(true)
                .with_fit_to_screen_enabled(true);
            let interactive_settings = &SettingsInteraction::new().with_dragging_enabled(true);
            let style_settings = &SettingsStyle::default().with_labels_always(true);
            ui.add(
                &mut DefaultGraphView::new(&mut self.graph)
                    .with_styles(style_settings)
                    .with_interactions(interactive_settings)
                    .with_navigations(navigation_settings),
            );
        });
    }
}

fn state_color(state: State) -> Color32 {
    match state {
        State::Start => Color32::from_rgb(20, 67, 130),
        State::Accept => Color32::from_rgb(20, 130, 90),
        State::Error => Color32::from_rgb(160, 35, 35),
    }
}

/// Group the labels of parallel transitions so every (from, to) pair is drawn as one edge
fn merged_edge_labels(diagram: &TransitionDiagram) -> Vec<((NodeIndex, NodeIndex), String)> {
    let source = diagram.get_graph();

    let mut order: Vec<(NodeIndex, NodeIndex)> = Vec::new();
    let mut labels: HashMap<(NodeIndex, NodeIndex), Vec<&str>> = HashMap::new();

    for edge_idx in source.edge_indices() {
        let Some(endpoints) = source.edge_endpoints(edge_idx) else {
            continue;
        };

        let entry = labels.entry(endpoints).or_insert_with(|| {
            order.push(endpoints);
            Vec::new()
        });
        entry.push(source[edge_idx].get_label());
    }

    order
        .into_iter()
        .map(|endpoints| {
            let label = labels
                .get(&endpoints)
                .map(|parts| parts.join(", "))
                .unwrap_or_default();
            (endpoints, label)
        })
        .collect()
}

fn generate_graph(diagram: &TransitionDiagram) -> Graph {
    let source = diagram.get_graph();
    let mut stable_graph = StableGraph::new();

    let mut node_map: HashMap<NodeIndex, NodeIndex> = HashMap::new();

    // Add all nodes

    for node_idx in source.node_indices() {
        node_map.insert(node_idx, stable_graph.add_node(()));
    }

    // Add one edge per state pair and remember its label

    let mut edge_labels: Vec<(EdgeIndex, String)> = Vec::new();

    for ((from, to), label) in merged_edge_labels(diagram) {
        let edge_idx = stable_graph.add_edge(node_map[&from], node_map[&to], ());
        edge_labels.push((edge_idx, label));
    }

    let mut graph = Graph::from(&stable_graph);

    for (source_idx, node_idx) in node_map.iter() {
        let state = source[*source_idx];
        if let Some(node) = graph.node_mut(*node_idx) {
            node.set_label(state.name().to_string());
            node.set_color(state_color(state));
        }
    }

    for (edge_idx, label) in edge_labels {
        if let Some(edge) = graph.edge_mut(edge_idx) {
            edge.set_label(label);
        }
    }

    graph
}

/// Open an interactive window showing the transition diagram
pub fn visualize(diagram: &TransitionDiagram) -> Result<()> {
    let graph = generate_graph(diagram);
    info!("Opening the transition diagram viewer");
    run_native(
        "token transition diagram",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(Visualizer::new(cc, graph)))),
    )
    .map_err(|err| eyre!("Error: Failed to open the diagram viewer! {}", err))
}
