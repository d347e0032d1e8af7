//! Card-style overview page: Tailwind layout with a Mermaid flowchart.

use std::fmt::Display;

use super::catalog::{Backend, Catalog, Database, Frontend, Issue, Package, Service};
use crate::components::markup::escape;

/// Tailwind build loaded at view time.
pub const TAILWIND_URL: &str = "https://cdn.tailwindcss.com";
/// Mermaid build loaded at view time.
pub const MERMAID_URL: &str = "https://unpkg.com/mermaid@10/dist/mermaid.min.js";

const PAGE_CSS: &str = r#"
        .card { transition: all 0.3s ease; }
        .card:hover { transform: translateY(-2px); box-shadow: 0 10px 40px rgba(0,0,0,0.1); }
        .mermaid { background: #f8fafc; border-radius: 8px; padding: 20px; }
        details summary { cursor: pointer; }
        details summary::-webkit-details-marker { display: none; }
        .port-badge { font-family: monospace; }
"#;

/// Ports that always badge as frontends regardless of their description.
const FRONTEND_PORTS: [u16; 5] = [3006, 3007, 3008, 3009, 5173];

/// First `max` characters of `text`.
fn clip(text: &str, max: usize) -> String {
	text.chars().take(max).collect()
}

fn list(items: &[&str], max: usize) -> String {
	if items.is_empty() {
		return "N/A".to_string();
	}
	items.iter().take(max).copied().collect::<Vec<_>>().join(", ")
}

fn join<T>(items: &[T], card: impl Fn(&T) -> String) -> String {
	items.iter().map(card).collect::<Vec<_>>().join("\n")
}

fn frontend_card(app: &Frontend) -> String {
	let platforms = if app.platforms.is_empty() {
		"Web".to_string()
	} else {
		app.platforms.join(", ")
	};
	format!(
		r#"
        <div class="card bg-white rounded-xl shadow-lg p-6 border-l-4 border-green-500">
            <div class="flex justify-between items-start mb-3">
                <h3 class="font-bold text-lg text-gray-800">{name}</h3>
                <span class="port-badge bg-green-100 text-green-800 px-2 py-1 rounded text-sm">:{port}</span>
            </div>
            <p class="text-gray-600 text-sm mb-3">{description}</p>
            <div class="space-y-1 text-xs text-gray-500">
                <p><strong>React:</strong> {react}</p>
                <p><strong>State:</strong> {state}</p>
                <p><strong>Path:</strong> {path}</p>
                <p><strong>Plataformas:</strong> {platforms}</p>
            </div>
        </div>
        "#,
		name = escape(app.name),
		port = app.port,
		description = escape(app.description),
		react = escape(app.react_version),
		state = escape(app.state_management),
		path = escape(app.production_path.unwrap_or("/")),
		platforms = escape(&platforms),
	)
}

fn backend_card(api: &Backend) -> String {
	format!(
		r#"
        <div class="card bg-white rounded-xl shadow-lg p-6 border-l-4 border-purple-500">
            <div class="flex justify-between items-start mb-3">
                <h3 class="font-bold text-lg text-gray-800">{name}</h3>
                <span class="port-badge bg-purple-100 text-purple-800 px-2 py-1 rounded text-sm">:{port}</span>
            </div>
            <p class="text-gray-600 text-sm mb-3">{description}</p>
            <div class="space-y-1 text-xs text-gray-500">
                <p><strong>Framework:</strong> {framework}</p>
                <p><strong>ORM:</strong> {orm}</p>
                <p><strong>Features:</strong> {features}</p>
                <p><strong>DB:</strong> {database}...</p>
            </div>
        </div>
        "#,
		name = escape(api.name),
		port = api.port,
		description = escape(api.description),
		framework = escape(api.framework),
		orm = escape(api.orm),
		features = escape(&list(api.features, 3)),
		database = escape(&clip(api.database.unwrap_or("N/A"), 40)),
	)
}

fn service_card(svc: &Service) -> String {
	format!(
		r#"
        <div class="card bg-white rounded-xl shadow-lg p-4 border-l-4 border-orange-500">
            <div class="flex justify-between items-start mb-2">
                <h3 class="font-bold text-gray-800">{name}</h3>
                <span class="port-badge bg-orange-100 text-orange-800 px-2 py-1 rounded text-xs">:{port}</span>
            </div>
            <p class="text-gray-600 text-xs">{description}</p>
        </div>
        "#,
		name = escape(svc.name),
		port = svc.port,
		description = escape(svc.description),
	)
}

fn database_card(db: &Database) -> String {
	format!(
		r#"
        <div class="card bg-white rounded-xl shadow-lg p-6 border-l-4 border-{accent}-500">
            <h3 class="font-bold text-lg text-gray-800 mb-2">{name}</h3>
            <p class="text-gray-600 text-sm mb-3">{host}:{port}</p>
            <p class="text-xs text-gray-500"><strong>Usado por:</strong> {used_by}</p>
        </div>
        "#,
		accent = db.accent,
		name = escape(db.name),
		host = escape(db.host),
		port = db.port,
		used_by = escape(&list(db.used_by, 4)),
	)
}

fn package_card(pkg: &Package) -> String {
	format!(
		r#"
        <div class="card bg-white rounded-xl shadow-lg p-4 border-l-4 border-cyan-500">
            <h3 class="font-bold text-gray-800 text-sm mb-1">{key}</h3>
            <p class="text-gray-600 text-xs mb-2">{description}</p>
            <p class="text-xs text-gray-400">Exports: {exports}</p>
        </div>
        "#,
		key = escape(pkg.key),
		description = escape(pkg.description),
		exports = escape(&pkg.exports.iter().take(3).copied().collect::<Vec<_>>().join(", ")),
	)
}

/// Tailwind color family for a port badge, judged from the port and its owners.
pub fn port_color(port: u16, owners: &str) -> &'static str {
	let owners = owners.to_lowercase();
	if owners.contains("auth") {
		"red"
	} else if owners.contains("frontend") || FRONTEND_PORTS.contains(&port) {
		"green"
	} else if owners.contains("api") || owners.contains("backend") {
		"purple"
	} else if owners.contains("service") {
		"orange"
	} else {
		"gray"
	}
}

fn port_badges(ports: &[(u16, &str)]) -> String {
	let mut sorted = ports.to_vec();
	sorted.sort_by_key(|(port, _)| *port);
	join(&sorted, |(port, owners)| {
		let color = port_color(*port, owners);
		format!(
			r#"
        <div class="bg-{color}-100 text-{color}-800 px-3 py-2 rounded-lg text-center">
            <div class="font-mono font-bold">:{port}</div>
            <div class="text-xs truncate">{owners}</div>
        </div>
        "#,
			owners = escape(&clip(owners, 20)),
		)
	})
}

fn issue_item(issue: &Issue) -> String {
	format!(
		r#"
        <div class="bg-white rounded-lg p-3">
            <p class="font-semibold text-gray-800">{issue}</p>
            <p class="text-sm text-gray-600 mt-1">{details}</p>
            <p class="text-sm text-green-700 mt-1">💡 {recommendation}</p>
        </div>
        "#,
		issue = escape(issue.issue),
		details = escape(issue.details),
		recommendation = escape(issue.recommendation),
	)
}

fn issue_group(tone: &str, title: &str, issues: &[Issue]) -> String {
	format!(
		r#"<details class="bg-{tone}-50 rounded-xl p-4 border border-{tone}-200">
                    <summary class="font-bold text-{tone}-800 flex items-center gap-2">
                        {title} ({count})
                    </summary>
                    <div class="mt-4 space-y-3">
                        {items}
                    </div>
                </details>"#,
		count = issues.len(),
		items = join(issues, issue_item),
	)
}

const RECOMMENDED_STACK: &str = r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div>
                        <h3 class="font-bold text-lg mb-3 text-green-700">Frontend</h3>
                        <ul class="space-y-2 text-gray-700">
                            <li>✓ <strong>React 19.1.0</strong> (LTS estável)</li>
                            <li>✓ <strong>TypeScript 5.x</strong></li>
                            <li>✓ <strong>Vite</strong> (build tool)</li>
                            <li>✓ <strong>TanStack Query v5</strong> (state/cache)</li>
                            <li>✓ <strong>TailwindCSS</strong> (styling)</li>
                            <li>✓ <strong>Axios</strong> (HTTP client)</li>
                            <li>✓ <strong>@invistto/auth-react</strong> (auth)</li>
                            <li>✓ <strong>Recharts</strong> (charts)</li>
                            <li>✓ <strong>Capacitor 6</strong> (mobile)</li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="font-bold text-lg mb-3 text-purple-700">Backend</h3>
                        <ul class="space-y-2 text-gray-700">
                            <li>✓ <strong>NestJS 11.x</strong></li>
                            <li>✓ <strong>TypeScript 5.x</strong></li>
                            <li>✓ <strong>Prisma</strong> (ORM MySQL)</li>
                            <li>✓ <strong>@invistto/auth</strong> (guards)</li>
                            <li>✓ <strong>class-validator</strong> (DTOs)</li>
                            <li>✓ <strong>Swagger</strong> (docs)</li>
                            <li>✓ <strong>Redis</strong> (cache)</li>
                            <li>✓ <strong>Bull</strong> (queues)</li>
                            <li>✓ <strong>node-firebird</strong> (legacy)</li>
                        </ul>
                    </div>
                </div>"#;

/// Render the complete overview page.
///
/// `generated_at` is printed verbatim in the header and footer.
pub fn render_page(catalog: &Catalog, generated_at: impl Display) -> String {
	let totals = catalog.totals;
	let issues = &catalog.standardization_issues;
	format!(
		r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Ecossistema Invistto - Mapa de Arquitetura</title>
    <script src="{tailwind}"></script>
    <script src="{mermaid}"></script>
    <style>{css}</style>
</head>
<body class="bg-gray-50 min-h-screen">
    <div class="max-w-7xl mx-auto px-4 py-8">
        <header class="text-center mb-12">
            <h1 class="text-4xl font-bold text-gray-900 mb-2">🏗️ Ecossistema Invistto</h1>
            <p class="text-gray-600">Mapa completo de arquitetura - Gerado em {generated_at}</p>
            <div class="flex justify-center gap-4 mt-4">
                <span class="bg-blue-100 text-blue-800 px-3 py-1 rounded-full text-sm">{projects} Projetos</span>
                <span class="bg-green-100 text-green-800 px-3 py-1 rounded-full text-sm">{active} Ativos</span>
                <span class="bg-purple-100 text-purple-800 px-3 py-1 rounded-full text-sm">{databases} Bancos de Dados</span>
                <span class="bg-orange-100 text-orange-800 px-3 py-1 rounded-full text-sm">~{tables} Tabelas</span>
            </div>
        </header>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">📊 Diagrama de Arquitetura</h2>
            <div class="bg-white rounded-xl shadow-lg p-6 overflow-x-auto">
                <div class="mermaid">
{flowchart}
                </div>
            </div>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">🖥️ Aplicações Frontend</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {frontends}
            </div>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">⚙️ APIs Backend</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {backends}
            </div>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">🔧 Serviços Auxiliares</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {services}
            </div>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">💾 Bancos de Dados</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {database_cards}
            </div>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">📦 Pacotes Compartilhados</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {packages}
            </div>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">🔌 Mapa de Portas</h2>
            <div class="bg-white rounded-xl shadow-lg p-6">
                <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-3">
                    {ports}
                </div>
            </div>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">⚠️ Problemas de Padronização</h2>
            <div class="space-y-4">
                {critical}

                {warnings}

                {improvements}
            </div>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">✅ Stack Padrão Recomendada</h2>
            <div class="bg-white rounded-xl shadow-lg p-6">
                {stack}
            </div>
        </section>

        <footer class="text-center text-gray-500 py-8 border-t">
            <p>Gerado automaticamente por ecosystem-map</p>
            <p class="text-sm mt-1">Última atualização: {generated_at}</p>
        </footer>
    </div>

    <script>
        mermaid.initialize({{ startOnLoad: true, theme: 'default' }});
    </script>
</body>
</html>
"#,
		tailwind = TAILWIND_URL,
		mermaid = MERMAID_URL,
		css = PAGE_CSS,
		projects = totals.total_projects,
		active = totals.active_projects,
		databases = totals.databases,
		tables = totals.total_tables,
		flowchart = catalog.flowchart,
		frontends = join(catalog.frontends, frontend_card),
		backends = join(catalog.backends, backend_card),
		services = join(catalog.services, service_card),
		database_cards = join(catalog.databases, database_card),
		packages = join(catalog.shared_packages, package_card),
		ports = port_badges(catalog.ports),
		critical = issue_group("red", "🔴 Críticos", issues.critical),
		warnings = issue_group("yellow", "🟡 Avisos", issues.warnings),
		improvements = issue_group("blue", "🔵 Melhorias", issues.improvements),
		stack = RECOMMENDED_STACK,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn port_colors_follow_owner_keywords() {
		assert_eq!(port_color(3001, "invistto-auth (Auth API)"), "red");
		assert_eq!(port_color(3007, "invistto-bi / ari-whatsapp-service"), "green");
		assert_eq!(port_color(3005, "zeiss-backend"), "purple");
		assert_eq!(port_color(3003, "ai-service"), "orange");
		assert_eq!(port_color(9000, "misc"), "gray");
	}

	#[test]
	fn clip_counts_characters() {
		assert_eq!(clip("Serviço de exemplo", 7), "Serviço");
		assert_eq!(clip("abc", 40), "abc");
	}

	#[test]
	fn backend_card_truncates_features_and_database() {
		let catalog = Catalog::builtin();
		let auth = catalog.backends.iter().find(|b| b.key == "invistto-auth").unwrap();
		let card = backend_card(auth);
		assert!(card.contains("JWT 24h, httpOnly cookies, CSRF protection</p>"));
		assert!(!card.contains("SSO código 30s"));
		assert!(card.contains("<strong>DB:</strong> MySQL (painel.invistto.com:3305/invistto...</p>"));
	}

	#[test]
	fn database_card_lists_first_four_users() {
		let catalog = Catalog::builtin();
		let card = database_card(&catalog.databases[0]);
		assert!(card.contains("border-indigo-500"));
		assert!(card.contains("invistto-auth, admin-panel-v2, courier-v3, ari</p>"));
		assert!(!card.contains("api-invistto"));
	}

	#[test]
	fn page_has_every_section() {
		let catalog = Catalog::builtin();
		let html = render_page(&catalog, "2026-01-24 10:30:00");
		assert!(html.starts_with("<!DOCTYPE html>"));
		assert!(html.contains("Gerado em 2026-01-24 10:30:00"));
		assert!(html.contains("28 Projetos"));
		assert!(html.contains("🔴 Críticos (3)"));
		assert!(html.contains("🟡 Avisos (3)"));
		assert!(html.contains("🔵 Melhorias (2)"));
		assert!(html.contains("flowchart TB"));
		assert_eq!(html.matches("font-mono font-bold").count(), catalog.ports.len());
		assert_eq!(
			html.matches("border-l-4 border-green-500").count(),
			catalog.frontends.len()
		);
	}
}
