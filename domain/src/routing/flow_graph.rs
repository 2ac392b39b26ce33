//! Static description of a variant's decision graph, renderable as DOT.

use super::classifier::{KeywordTable, ai_task_label};
use super::route::{AiTask, Route};
use super::trace::{AI_ROUTER_NODE, DECIDE_NODE, WorkflowTrace};
use super::variant::Variant;
use serde::Serialize;

const ACTIVE_FILL: &str = "#90EE90";
const ACTIVE_BORDER: &str = "#228B22";
const IDLE_FILL: &str = "#F8F9FA";
const IDLE_BORDER: &str = "#555555";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Nodes and labelled edges of one variant's workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowGraph {
    pub variant: Variant,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn for_variant(variant: Variant) -> Self {
        let table = KeywordTable::for_variant(variant);
        let mut nodes = vec![node(DECIDE_NODE, "🧠 Decide Action")];
        let mut edges = Vec::new();

        for rule in table.rules() {
            nodes.push(node(rule.route.as_str(), route_label(rule.route)));
            edges.push(edge(DECIDE_NODE, rule.route.as_str(), rule.label));
        }
        let fallback = table.fallback();
        nodes.push(node(fallback.as_str(), route_label(fallback)));
        edges.push(edge(DECIDE_NODE, fallback.as_str(), "otherwise"));

        if variant == Variant::Tiered {
            nodes.push(node(AI_ROUTER_NODE, "🧭 AI Router"));
            edges.push(edge(Route::Ai.as_str(), AI_ROUTER_NODE, "classify task"));
            for task in AiTask::ALL {
                nodes.push(node(task.as_str(), task_label(task)));
                edges.push(edge(AI_ROUTER_NODE, task.as_str(), ai_task_label(task)));
            }
        }

        Self {
            variant,
            nodes,
            edges,
        }
    }

    /// Render as Graphviz DOT. Nodes and edges on `active` are highlighted.
    pub fn to_dot(&self, active: Option<&WorkflowTrace>) -> String {
        let mut dot = String::from("digraph workflow {\n");
        dot.push_str("  node [shape=box, style=\"rounded,filled\", fontname=\"Arial\"];\n");

        for n in &self.nodes {
            let on_path = active.is_some_and(|t| t.contains(&n.id));
            let (fill, border) = if on_path {
                (ACTIVE_FILL, ACTIVE_BORDER)
            } else {
                (IDLE_FILL, IDLE_BORDER)
            };
            dot.push_str(&format!(
                "  \"{}\" [label=\"{}\", fillcolor=\"{}\", color=\"{}\", fontcolor=\"black\"];\n",
                n.id,
                escape(&n.label),
                fill,
                border
            ));
        }

        for e in &self.edges {
            let on_path = active.is_some_and(|t| t.traversed(&e.from, &e.to));
            let style = if on_path {
                format!(", color=\"{}\", penwidth=2", ACTIVE_BORDER)
            } else {
                String::new()
            };
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"{}];\n",
                e.from,
                e.to,
                escape(&e.label),
                style
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

fn node(id: &str, label: &str) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        label: label.to_string(),
    }
}

fn edge(from: &str, to: &str, label: &str) -> FlowEdge {
    FlowEdge {
        from: from.to_string(),
        to: to.to_string(),
        label: label.to_string(),
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn route_label(route: Route) -> &'static str {
    match route {
        Route::Calculator => "🧮 Calculator",
        Route::FactLookup => "📚 Fact Lookup",
        Route::EchoReply => "💬 Echo Reply",
        Route::Manager => "📝 To-Do Manager",
        Route::Qa => "💬 Hosted Model QA",
        Route::Ai => "🤖 AI Assistant",
    }
}

fn task_label(task: AiTask) -> &'static str {
    match task {
        AiTask::Qa => "❓ Q&A",
        AiTask::Conversation => "💬 Conversation",
        AiTask::Summary => "📄 Summary",
        AiTask::Translate => "🌐 Translate",
        AiTask::Sentiment => "🙂 Sentiment",
    }
}
