//! Interactive force-directed diagram as a single HTML document.
//!
//! Nodes and links are embedded as inline JSON; layout, drag and hover run in
//! the browser on D3 v7, loaded from its CDN when the page is opened.

use chrono::{DateTime, TimeZone};

use super::force_graph::{GraphData, Theme, legend_entries};
use super::markup::escape;
use crate::error::Result;
use crate::registry::RegistryStats;

/// D3 build the page loads at view time.
pub const D3_URL: &str = "https://d3js.org/d3.v7.min.js";

const PAGE_CSS: &str = r#"
body { margin: 0; overflow: hidden; font-family: system-ui, -apple-system, sans-serif; }
#graph { width: 100vw; height: 100vh; background: linear-gradient(135deg, #0f172a 0%, #1e293b 100%); }
.node { cursor: pointer; }
.node circle { stroke: #fff; stroke-width: 2px; }
.node text { fill: white; font-size: 10px; font-weight: 500; }
.link { stroke: #475569; stroke-opacity: 0.6; stroke-width: 1.5px; }
.tooltip {
  position: absolute;
  background: rgba(15, 23, 42, 0.95);
  border: 1px solid #3b82f6;
  border-radius: 8px;
  padding: 12px;
  color: white;
  font-size: 12px;
  pointer-events: none;
  z-index: 1000;
  max-width: 280px;
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.3);
}
.tooltip h3 { margin: 0 0 8px 0; color: #60a5fa; font-size: 14px; }
.tooltip p { margin: 4px 0; color: #94a3b8; }
.tooltip .port { color: #10b981; font-family: monospace; }
.legend {
  position: absolute;
  bottom: 20px;
  left: 20px;
  background: rgba(15, 23, 42, 0.9);
  border-radius: 8px;
  padding: 16px;
  color: white;
}
.legend-item { display: flex; align-items: center; gap: 8px; margin: 6px 0; }
.legend-dot { width: 12px; height: 12px; border-radius: 50%; }
.header { position: absolute; top: 20px; left: 20px; color: white; }
.header h1 { font-size: 24px; margin: 0; }
.header p { color: #94a3b8; margin: 4px 0 0 0; font-size: 12px; }
.stats { position: absolute; top: 20px; right: 20px; display: flex; gap: 12px; }
.stat {
  background: rgba(15, 23, 42, 0.9);
  border-radius: 8px;
  padding: 12px 16px;
  color: white;
  text-align: center;
}
.stat-value { font-size: 24px; font-weight: bold; color: #3b82f6; }
.stat-label { font-size: 10px; color: #94a3b8; text-transform: uppercase; }
"#;

/// Simulation, drag and tooltip wiring. Expects `nodes` and `links` in scope.
const PAGE_JS: &str = r##"
const width = window.innerWidth;
const height = window.innerHeight;

const esc = (s) => String(s).replace(/[&<>"']/g, (c) => ({ "&": "&amp;", "<": "&lt;", ">": "&gt;", '"': "&quot;", "'": "&#39;" })[c]);

const svg = d3.select("#graph")
  .append("svg")
  .attr("width", width)
  .attr("height", height);

svg.append("defs").append("marker")
  .attr("id", "arrowhead")
  .attr("viewBox", "-0 -5 10 10")
  .attr("refX", 25)
  .attr("refY", 0)
  .attr("orient", "auto")
  .attr("markerWidth", 6)
  .attr("markerHeight", 6)
  .append("path")
  .attr("d", "M 0,-5 L 10,0 L 0,5")
  .attr("fill", "#475569");

const simulation = d3.forceSimulation(nodes)
  .force("link", d3.forceLink(links).id((d) => d.id).distance(150))
  .force("charge", d3.forceManyBody().strength(-400))
  .force("center", d3.forceCenter(width / 2, height / 2))
  .force("collision", d3.forceCollide().radius(50));

const link = svg.append("g")
  .selectAll("line")
  .data(links)
  .enter().append("line")
  .attr("class", "link")
  .attr("marker-end", "url(#arrowhead)");

const node = svg.append("g")
  .selectAll(".node")
  .data(nodes)
  .enter().append("g")
  .attr("class", "node")
  .call(d3.drag()
    .on("start", dragstarted)
    .on("drag", dragged)
    .on("end", dragended));

node.append("circle")
  .attr("r", (d) => d.radius)
  .attr("fill", (d) => d.color);

node.append("text")
  .attr("dy", (d) => d.radius + 15)
  .attr("text-anchor", "middle")
  .text((d) => d.name);

node.filter((d) => d.port)
  .append("text")
  .attr("dy", 4)
  .attr("text-anchor", "middle")
  .attr("font-size", "8px")
  .attr("fill", "white")
  .text((d) => ":" + d.port);

const tooltip = d3.select("#tooltip");

node.on("mouseover", function (event, d) {
  let content = `<h3>${esc(d.name)}</h3>`;
  content += `<p>${esc(d.desc)}</p>`;
  if (d.port) content += `<p class="port">Porta: :${d.port}</p>`;
  if (d.stack) content += `<p>Stack: ${esc(d.stack)}</p>`;
  if (d.path) content += `<p>Prod: ${esc(d.path)}</p>`;

  tooltip.html(content)
    .style("display", "block")
    .style("left", (event.pageX + 15) + "px")
    .style("top", (event.pageY - 10) + "px");
})
.on("mouseout", function () {
  tooltip.style("display", "none");
});

simulation.on("tick", () => {
  link
    .attr("x1", (d) => d.source.x)
    .attr("y1", (d) => d.source.y)
    .attr("x2", (d) => d.target.x)
    .attr("y2", (d) => d.target.y);

  node.attr("transform", (d) => `translate(${d.x},${d.y})`);
});

function dragstarted(event, d) {
  if (!event.active) simulation.alphaTarget(0.3).restart();
  d.fx = d.x;
  d.fy = d.y;
}

function dragged(event, d) {
  d.fx = event.x;
  d.fy = event.y;
}

function dragended(event, d) {
  if (!event.active) simulation.alphaTarget(0);
  d.fx = null;
  d.fy = null;
}
"##;

fn render_legend(data: &GraphData, theme: &Theme) -> String {
	legend_entries(data, theme)
		.iter()
		.map(|entry| {
			format!(
				r#"<div class="legend-item"><div class="legend-dot" style="background: {}"></div> {}</div>"#,
				entry.color.to_css(),
				escape(&entry.label)
			)
		})
		.collect::<Vec<_>>()
		.join("\n    ")
}

fn render_stats(stats: &RegistryStats) -> String {
	[
		(stats.active, "Projetos Ativos"),
		(stats.ports_in_use, "Portas em Uso"),
		(stats.databases, "Bancos de Dados"),
	]
	.iter()
	.map(|(value, label)| {
		format!(
			r#"<div class="stat">
      <div class="stat-value">{value}</div>
      <div class="stat-label">{label}</div>
    </div>"#
		)
	})
	.collect::<Vec<_>>()
	.join("\n    ")
}

/// Render the complete interactive page.
pub fn render_page<Tz>(
	data: &GraphData,
	stats: &RegistryStats,
	generated_at: &DateTime<Tz>,
) -> Result<String>
where
	Tz: TimeZone,
	Tz::Offset: std::fmt::Display,
{
	let theme = Theme::default();
	Ok(format!(
		r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Ecossistema Invistto - Diagrama Interativo</title>
  <script src="{d3}"></script>
  <style>{css}</style>
</head>
<body>
  <div id="graph"></div>

  <div class="header">
    <h1>🏗️ Ecossistema Invistto</h1>
    <p>Diagrama interativo - Arraste os nós para reorganizar · Gerado em {generated}</p>
  </div>

  <div class="stats">
    {stats}
  </div>

  <div class="legend">
    {legend}
  </div>

  <div id="tooltip" class="tooltip" style="display: none;"></div>

  <script>
const nodes = {nodes};
const links = {links};
  </script>
  <script>{js}</script>
</body>
</html>
"#,
		d3 = D3_URL,
		css = PAGE_CSS,
		generated = generated_at.format("%Y-%m-%d %H:%M"),
		stats = render_stats(stats),
		legend = render_legend(data, &theme),
		nodes = data.nodes_json()?,
		links = data.links_json()?,
		js = PAGE_JS,
	))
}

#[cfg(test)]
mod tests {
	use chrono::Utc;

	use super::*;
	use crate::registry::Registry;

	fn page() -> (GraphData, String) {
		let registry = Registry::builtin();
		let data = GraphData::from_registry(&registry);
		let at = Utc.with_ymd_and_hms(2026, 1, 24, 10, 30, 0).unwrap();
		let html = render_page(&data, &registry.stats(), &at).unwrap();
		(data, html)
	}

	#[test]
	fn embeds_graph_data_and_d3() {
		let (data, html) = page();
		assert!(html.starts_with("<!DOCTYPE html>"));
		assert!(html.contains(D3_URL));
		assert!(html.contains(&format!("const nodes = {};", data.nodes_json().unwrap())));
		assert!(html.contains(&format!("const links = {};", data.links_json().unwrap())));
	}

	#[test]
	fn script_is_embedded_whole() {
		let (_, html) = page();
		assert!(html.contains(&format!("<script>{PAGE_JS}</script>")));
		assert!(PAGE_JS.contains(r##"d3.select("#graph")"##));
		assert!(PAGE_JS.contains(r##"d3.select("#tooltip")"##));
		assert!(PAGE_JS.trim_end().ends_with("d.fy = null;\n}"));
	}

	#[test]
	fn header_shows_timestamp_and_computed_stats() {
		let (_, html) = page();
		let stats = Registry::builtin().stats();
		assert!(html.contains("Gerado em 2026-01-24 10:30"));
		assert!(html.contains(&format!(
			"<div class=\"stat-value\">{}</div>\n      <div class=\"stat-label\">Bancos de Dados</div>",
			stats.databases
		)));
	}

	#[test]
	fn legend_lists_every_category() {
		let (_, html) = page();
		for label in ["Hub Central", "Backend API", "Banco de Dados", "Externo", "Auth API"] {
			assert!(html.contains(&format!("</div> {label}</div>")), "missing {label}");
		}
	}
}
