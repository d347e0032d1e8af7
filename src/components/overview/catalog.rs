//! Architecture catalog: apps, APIs, services, packages, databases, and known issues.
//!
//! Richer than the diagram registry; rendered only by the overview page.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Anything listed under a key in the catalog JSON.
pub trait Keyed {
	/// Map key of the item.
	fn key(&self) -> &'static str;
}

fn keyed<S: Serializer, T: Keyed + Serialize>(items: &&[T], serializer: S) -> Result<S::Ok, S::Error> {
	let mut map = serializer.serialize_map(Some(items.len()))?;
	for item in items.iter() {
		map.serialize_entry(item.key(), item)?;
	}
	map.end()
}

fn ports<S: Serializer>(ports: &&[(u16, &str)], serializer: S) -> Result<S::Ok, S::Error> {
	let mut map = serializer.serialize_map(Some(ports.len()))?;
	for (port, owner) in ports.iter() {
		map.serialize_entry(port, owner)?;
	}
	map.end()
}

fn none<T>(list: &&[T]) -> bool {
	list.is_empty()
}

/// Storage keys and cookie mode an app passes to the shared auth client.
#[derive(Clone, Debug, Serialize)]
pub struct AuthConfig {
	/// Storage key of the access token.
	pub token_key: &'static str,
	/// Storage key of the cached user.
	pub user_key: &'static str,
	/// `true`, or a JS condition such as `!isTauri`.
	pub use_cookies: &'static str,
	/// Whether the token is validated on startup.
	pub validate_on_load: bool,
}

/// Browser, desktop or mobile app.
#[derive(Clone, Debug, Serialize)]
pub struct Frontend {
	/// Project key; the map key in JSON.
	#[serde(skip)]
	pub key: &'static str,
	/// Display name.
	pub name: &'static str,
	/// One-line summary.
	pub description: &'static str,
	/// Development port.
	pub port: u16,
	/// Path the app is served under in production.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub production_path: Option<&'static str>,
	/// React version in use.
	pub react_version: &'static str,
	/// Server-state library and version.
	pub state_management: &'static str,
	/// Styling and component libraries.
	pub ui_framework: &'static str,
	/// HTTP client library.
	pub http_client: &'static str,
	/// Auth client package.
	pub auth: &'static str,
	/// Options passed to the auth client, when documented.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auth_config: Option<AuthConfig>,
	/// Platforms the app ships on; empty means web only.
	#[serde(skip_serializing_if = "none")]
	pub platforms: &'static [&'static str],
	/// Port of the API the app talks to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub backend_port: Option<u16>,
	/// API the app talks to, when it is not a dedicated one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub backend: Option<&'static str>,
	/// Repository layout, e.g. `monorepo`.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub layout: Option<&'static str>,
	/// Notable trait of the project.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub special: Option<&'static str>,
}

/// HTTP API.
#[derive(Clone, Debug, Serialize)]
pub struct Backend {
	/// Project key; the map key in JSON.
	#[serde(skip)]
	pub key: &'static str,
	/// Display name.
	pub name: &'static str,
	/// One-line summary.
	pub description: &'static str,
	/// Development port.
	pub port: u16,
	/// Server framework and version.
	pub framework: &'static str,
	/// Data access layer.
	pub orm: &'static str,
	/// Data stores behind the API.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub database: Option<&'static str>,
	/// Notable routes.
	#[serde(skip_serializing_if = "none")]
	pub endpoints: &'static [&'static str],
	/// Total route count, when the routes are not listed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub endpoints_count: Option<u32>,
	/// Persistence models.
	#[serde(skip_serializing_if = "none")]
	pub models: &'static [&'static str],
	/// Domain modules.
	#[serde(skip_serializing_if = "none")]
	pub modules: &'static [&'static str],
	/// Notable capabilities.
	#[serde(skip_serializing_if = "none")]
	pub features: &'static [&'static str],
}

/// Auxiliary service.
#[derive(Clone, Debug, Serialize)]
pub struct Service {
	/// Project key; the map key in JSON.
	#[serde(skip)]
	pub key: &'static str,
	/// Display name.
	pub name: &'static str,
	/// One-line summary.
	pub description: &'static str,
	/// Development port.
	pub port: u16,
	/// Server framework and version.
	pub framework: &'static str,
	/// Data access layer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub orm: Option<&'static str>,
	/// Data stores behind the API.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub database: Option<&'static str>,
	/// Job queue backend.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub queue: Option<&'static str>,
	/// Notable capabilities.
	#[serde(skip_serializing_if = "none")]
	pub features: &'static [&'static str],
	/// Services called, with their ports.
	#[serde(skip_serializing_if = "none")]
	pub integrates_with: &'static [&'static str],
}

/// Shared npm package.
#[derive(Clone, Debug, Serialize)]
pub struct Package {
	/// npm package name; the map key in JSON.
	#[serde(skip)]
	pub key: &'static str,
	/// Display name.
	pub name: &'static str,
	/// One-line summary.
	pub description: &'static str,
	/// Directory of the package source.
	pub location: &'static str,
	/// Main exported symbols.
	pub exports: &'static [&'static str],
	/// Notable capabilities.
	#[serde(skip_serializing_if = "none")]
	pub features: &'static [&'static str],
}

/// Data store and the projects using it.
#[derive(Clone, Debug, Serialize)]
pub struct Database {
	/// Store key; the map key in JSON.
	#[serde(skip)]
	pub key: &'static str,
	/// Display name.
	pub name: &'static str,
	/// Server host.
	pub host: &'static str,
	/// Server port.
	pub port: u16,
	/// Schema name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub database: Option<&'static str>,
	/// One-line summary.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<&'static str>,
	/// Approximate table count.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tables_count: Option<&'static str>,
	/// Important tables with a short note each.
	#[serde(skip_serializing_if = "none")]
	pub key_tables: &'static [&'static str],
	/// Logical database index and its user, for Redis.
	#[serde(skip_serializing_if = "none")]
	pub databases: &'static [(&'static str, &'static str)],
	/// Keys of the projects using the store.
	pub used_by: &'static [&'static str],
	/// Tailwind color family of the card border.
	#[serde(skip)]
	pub accent: &'static str,
}

impl Keyed for Frontend {
	fn key(&self) -> &'static str {
		self.key
	}
}

impl Keyed for Backend {
	fn key(&self) -> &'static str {
		self.key
	}
}

impl Keyed for Service {
	fn key(&self) -> &'static str {
		self.key
	}
}

impl Keyed for Package {
	fn key(&self) -> &'static str {
		self.key
	}
}

impl Keyed for Database {
	fn key(&self) -> &'static str {
		self.key
	}
}

/// A standardization problem and the suggested fix.
#[derive(Clone, Debug, Serialize)]
pub struct Issue {
	/// Short title.
	pub issue: &'static str,
	/// What differs, and where.
	pub details: &'static str,
	/// Suggested fix.
	pub recommendation: &'static str,
}

/// Issues grouped by severity.
#[derive(Clone, Debug, Serialize)]
pub struct Issues {
	/// Problems that should be fixed first.
	pub critical: &'static [Issue],
	/// Inconsistencies worth scheduling.
	pub warnings: &'static [Issue],
	/// Optional improvements.
	pub improvements: &'static [Issue],
}

impl Issues {
	/// Issue count across every group.
	pub fn total(&self) -> usize {
		self.critical.len() + self.warnings.len() + self.improvements.len()
	}
}

/// Headline numbers shown in the page header.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Totals {
	/// Projects mapped, legacy ones included.
	pub total_projects: u32,
	/// Projects in active use.
	pub active_projects: u32,
	/// Data stores.
	pub databases: u32,
	/// Approximate table count across stores.
	pub total_tables: u32,
}

/// The full architecture catalog.
#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
	/// Headline numbers; exported under `meta`.
	#[serde(skip)]
	pub totals: Totals,
	/// Apps, keyed by project key.
	#[serde(serialize_with = "keyed")]
	pub frontends: &'static [Frontend],
	/// APIs, keyed by project key.
	#[serde(serialize_with = "keyed")]
	pub backends: &'static [Backend],
	/// Auxiliary services, keyed by project key.
	#[serde(serialize_with = "keyed")]
	pub services: &'static [Service],
	/// Shared npm packages, keyed by package name.
	#[serde(serialize_with = "keyed")]
	pub shared_packages: &'static [Package],
	/// Data stores, keyed by store name.
	#[serde(serialize_with = "keyed")]
	pub databases: &'static [Database],
	/// Known inconsistencies across projects.
	pub standardization_issues: Issues,
	/// Port and the services bound to it, in ascending port order.
	#[serde(rename = "ports_map", serialize_with = "ports")]
	pub ports: &'static [(u16, &'static str)],
	/// Mermaid source of the architecture flowchart.
	#[serde(skip)]
	pub flowchart: &'static str,
}

impl Catalog {
	/// The ecosystem as currently documented.
	pub fn builtin() -> Self {
		Self {
			totals: Totals {
				total_projects: 28,
				active_projects: 15,
				databases: 3,
				total_tables: 100,
			},
			frontends: FRONTENDS,
			backends: BACKENDS,
			services: SERVICES,
			shared_packages: PACKAGES,
			databases: DATABASES,
			standardization_issues: Issues {
				critical: CRITICAL,
				warnings: WARNINGS,
				improvements: IMPROVEMENTS,
			},
			ports: PORTS,
			flowchart: FLOWCHART,
		}
	}
}

const FRONTENDS: &[Frontend] = &[
	Frontend {
		key: "invistto-hub",
		name: "Invistto Hub",
		description: "Central Hub - SSO Gateway para todos os apps",
		port: 5173,
		production_path: Some("/hub/"),
		react_version: "19.2.0",
		state_management: "TanStack Query v5.90.18",
		ui_framework: "TailwindCSS + Heroicons + Lucide",
		http_client: "axios 1.13.2",
		auth: "@invistto/auth-react",
		auth_config: Some(AuthConfig {
			token_key: "@invistto-hub:token",
			user_key: "@invistto-hub:user",
			use_cookies: "!isTauri",
			validate_on_load: true,
		}),
		platforms: &["Web", "Desktop (Tauri 2)", "Mobile (Capacitor 6)"],
		backend_port: None,
		backend: None,
		layout: None,
		special: Some("SSO com código seguro (30s)"),
	},
	Frontend {
		key: "admin-panel-v2",
		name: "Admin Panel",
		description: "Painel administrativo - Gestão de usuários, bases, roles",
		port: 5173,
		production_path: Some("/admin/"),
		react_version: "18.3.1",
		state_management: "TanStack Query v5.90.12",
		ui_framework: "TailwindCSS",
		http_client: "axios",
		auth: "@invistto/auth-react",
		auth_config: Some(AuthConfig {
			token_key: "@ari:token",
			user_key: "@ari:user",
			use_cookies: "true",
			validate_on_load: true,
		}),
		platforms: &[],
		backend_port: Some(3002),
		backend: None,
		layout: Some("monorepo"),
		special: None,
	},
	Frontend {
		key: "courier-v3",
		name: "Courier Analytics",
		description: "Dashboard WhatsApp - ROI campanhas, análise produtos",
		port: 3008,
		production_path: Some("/courier/"),
		react_version: "19.2.3",
		state_management: "TanStack Query v5.90.20",
		ui_framework: "TailwindCSS + Lucide + Recharts",
		http_client: "axios",
		auth: "@invistto/auth-react",
		auth_config: Some(AuthConfig {
			token_key: "@courier:token",
			user_key: "@courier:user",
			use_cookies: "true",
			validate_on_load: true,
		}),
		platforms: &[],
		backend_port: Some(3333),
		backend: None,
		layout: Some("monorepo"),
		special: None,
	},
	Frontend {
		key: "invistto-bi",
		name: "Invistto BI",
		description: "Business Intelligence - Vendas, financeiro, estoque",
		port: 3007,
		production_path: Some("/bi/"),
		react_version: "19.1.0",
		state_management: "TanStack Query v5.84.1",
		ui_framework: "TailwindCSS + Heroicons + Radix UI + Recharts",
		http_client: "axios 1.4.0",
		auth: "@invistto/auth-react",
		auth_config: Some(AuthConfig {
			token_key: "@invistto-bi:token",
			user_key: "@invistto-bi:user",
			use_cookies: "true",
			validate_on_load: true,
		}),
		platforms: &["Web", "Mobile (Capacitor 6)"],
		backend_port: None,
		backend: Some("ARI (porta 3010)"),
		layout: None,
		special: None,
	},
	Frontend {
		key: "zeiss-api-client",
		name: "Zeiss Lab Client",
		description: "Integração Carl Zeiss Vision - Catálogo, pedidos, preços",
		port: 3006,
		production_path: Some("/zeiss/"),
		react_version: "19.1.0",
		state_management: "TanStack Query v5.84.1",
		ui_framework: "Material UI 7.3.1 + TailwindCSS + Recharts",
		http_client: "axios 1.4.0",
		auth: "@invistto/auth-react",
		auth_config: None,
		platforms: &[],
		backend_port: Some(3005),
		backend: None,
		layout: None,
		special: Some("Integração Zeiss SAO API + Firebird multi-tenant"),
	},
	Frontend {
		key: "olhovivo-lens",
		name: "OlhoVivo Lentes",
		description: "Hub multi-laboratório - Zeiss, Rodenstock, HOYA, Essilor",
		port: 3009,
		production_path: Some("/lentes/"),
		react_version: "19.1.0",
		state_management: "TanStack Query v5.84.1",
		ui_framework: "TailwindCSS + Heroicons + Recharts",
		http_client: "axios 1.4.0",
		auth: "@invistto/auth-react",
		auth_config: None,
		platforms: &["Web", "Mobile (Capacitor 6)"],
		backend_port: Some(3015),
		backend: None,
		layout: None,
		special: None,
	},
];

const BACKENDS: &[Backend] = &[
	Backend {
		key: "invistto-auth",
		name: "Auth API",
		description: "Autenticação centralizada - JWT, SSO, password reset",
		port: 3001,
		framework: "NestJS 10.x",
		orm: "MySQL2 (raw queries)",
		database: Some("MySQL (painel.invistto.com:3305/invistto)"),
		endpoints: &[
			"POST /auth/login",
			"GET /auth/validate",
			"POST /auth/refresh",
			"POST /auth/logout",
			"GET /auth/profile",
			"POST /auth/forgot-password",
			"POST /auth/reset-password",
			"POST /auth/sso/init",
			"POST /auth/sso/exchange",
			"POST /auth/sso/validate-token",
		],
		endpoints_count: None,
		models: &[],
		modules: &[],
		features: &["JWT 24h", "httpOnly cookies", "CSRF protection", "SSO código 30s"],
	},
	Backend {
		key: "admin-panel-api",
		name: "Admin Panel API",
		description: "Backend do painel administrativo",
		port: 3002,
		framework: "NestJS 10.x",
		orm: "Prisma",
		database: Some("MySQL (painel.invistto.com:3305/invistto)"),
		endpoints: &[],
		endpoints_count: None,
		models: &[
			"User",
			"Role",
			"Permission",
			"Base",
			"UserRole",
			"UserBase",
			"RolePermission",
		],
		modules: &[],
		features: &[],
	},
	Backend {
		key: "courier-api",
		name: "Courier V2 API",
		description: "Backend analytics WhatsApp - 29 endpoints",
		port: 3333,
		framework: "NestJS 10.x",
		orm: "Prisma + Firebird",
		database: Some("MySQL + Firebird (multi-tenant)"),
		endpoints: &[],
		endpoints_count: Some(29),
		models: &[],
		modules: &[],
		features: &["DTOs validados", "SqlSafeValidator", "Cache Redis"],
	},
	Backend {
		key: "ari",
		name: "ARI - Analytics REST Invistto",
		description: "API de BI - 11 domínios analytics",
		port: 3010,
		framework: "NestJS 11.x",
		orm: "Knex.js",
		database: Some("MySQL (painel.invistto.com:3305/invistto)"),
		endpoints: &[],
		endpoints_count: None,
		models: &[],
		modules: &[
			"VendasModule",
			"FinanceiroModule",
			"VendedoresModule",
			"ClientesModule",
			"LojasModule",
			"ProdutosModule",
			"EstoqueModule",
			"MedicosModule",
			"ComprasModule",
			"OticaModule",
			"InsightsModule",
		],
		features: &["MCP Claude integration", "AI billing tracking"],
	},
	Backend {
		key: "zeiss-backend",
		name: "Zeiss Lab API",
		description: "Backend integração Zeiss Vision",
		port: 3005,
		framework: "NestJS 10.x",
		orm: "MySQL2 + Firebird",
		database: Some("MySQL (zeiss_*) + Firebird (ERP)"),
		endpoints: &[],
		endpoints_count: None,
		models: &[],
		modules: &[],
		features: &["BullMQ jobs", "Redis cache", "WebSocket", "Zeiss SAO API"],
	},
	Backend {
		key: "olhovivo-backend",
		name: "OlhoVivo Lens API",
		description: "Backend multi-laboratório",
		port: 3015,
		framework: "NestJS 10.3.0",
		orm: "Prisma + Firebird",
		database: Some("MySQL (lens_*) + Firebird"),
		endpoints: &[],
		endpoints_count: None,
		models: &[],
		modules: &[],
		features: &["Multi-lab consolidation", "Sync batch", "Margin calculation"],
	},
	Backend {
		key: "api-invistto",
		name: "API Invistto (Pontomarket)",
		description: "CRM multi-tenant - Integração Pontomarket",
		port: 3000,
		framework: "NestJS 10.x",
		orm: "MySQL2 (raw)",
		database: Some("MySQL + Redis + RabbitMQ"),
		endpoints: &[],
		endpoints_count: None,
		models: &[],
		modules: &[],
		features: &["Rate limiting", "AI integration (Claude/OpenAI)", "Message queue"],
	},
	Backend {
		key: "sales-api",
		name: "Sales API",
		description: "Gestão vendas óticas",
		port: 3011,
		framework: "NestJS 11.x",
		orm: "Firebird + MySQL2",
		database: Some("Firebird (ERP) + MySQL (auth)"),
		endpoints: &[],
		endpoints_count: None,
		models: &[],
		modules: &[],
		features: &[],
	},
	Backend {
		key: "dash-invistto-api",
		name: "Dashboard API",
		description: "Métricas e indicadores",
		port: 3333,
		framework: "NestJS 11.x",
		orm: "Prisma + Firebird",
		database: Some("MySQL + Firebird"),
		endpoints: &[],
		endpoints_count: None,
		models: &[],
		modules: &[],
		features: &[],
	},
];

const SERVICES: &[Service] = &[
	Service {
		key: "ai-service",
		name: "AI Service",
		description: "NLP e processamento de consultas naturais",
		port: 3003,
		framework: "NestJS 11.x",
		orm: None,
		database: None,
		queue: None,
		features: &[],
		integrates_with: &["ai-billing-service (3004)"],
	},
	Service {
		key: "ai-billing-service",
		name: "AI Billing Service",
		description: "Tracking de uso de AI (tokens, custos)",
		port: 3004,
		framework: "Express.js",
		orm: Some("Prisma"),
		database: Some("MySQL"),
		queue: None,
		features: &["Cron jobs", "Invoice generation", "Usage limits"],
		integrates_with: &[],
	},
	Service {
		key: "ari-whatsapp-service",
		name: "WhatsApp Service",
		description: "Envio de mensagens WhatsApp via Web.js",
		port: 3007,
		framework: "NestJS 10.x",
		orm: None,
		database: None,
		queue: Some("Bull + Redis"),
		features: &["Rate limiting", "Retry strategy", "Session management"],
		integrates_with: &[],
	},
	Service {
		key: "servermcp",
		name: "ServerMCP",
		description: "Gateway MCP para Claude Desktop",
		port: 3002,
		framework: "Express.js (Node.js)",
		orm: None,
		database: None,
		queue: None,
		features: &["Basic→JWT conversion", "Circuit breaker", "Redis cache"],
		integrates_with: &["ari (3010)", "ai-service (3003)"],
	},
];

const PACKAGES: &[Package] = &[
	Package {
		key: "@invistto/auth-react",
		name: "Auth React",
		description: "Autenticação React centralizada",
		location: "invistto-auth/packages/react",
		exports: &["AuthProvider", "useAuth", "usePermissions", "useUserRole"],
		features: &["SSO support", "httpOnly cookies", "Token refresh"],
	},
	Package {
		key: "@invistto/auth",
		name: "Auth Core",
		description: "Guards e decorators NestJS",
		location: "invistto-auth/packages/core",
		exports: &["JwtAuthGuard", "RolesGuard", "@CurrentUser", "@Public", "@Roles"],
		features: &[],
	},
	Package {
		key: "@invistto/shared-system-config",
		name: "Shared Config",
		description: "Configurações centralizadas",
		location: "sharedconfig",
		exports: &["InvisttoSystemConfig", "systemConfig"],
		features: &[],
	},
	Package {
		key: "@invistto/database-schema",
		name: "Database Schema",
		description: "Prisma schema compartilhado",
		location: "sharedschema",
		exports: &["PrismaClient", "types"],
		features: &[],
	},
];

const DATABASES: &[Database] = &[
	Database {
		key: "mysql_main",
		name: "MySQL Principal",
		host: "painel.invistto.com",
		port: 3305,
		database: Some("invistto"),
		description: None,
		tables_count: Some("80+"),
		key_tables: &[
			"ariusers - Usuários do sistema",
			"base - Multi-tenant bases",
			"courier - Mensagens WhatsApp",
			"vd_pedido - Pedidos de venda",
			"vd_pedido_itens - Itens dos pedidos",
			"vd_campanha - Campanhas marketing",
			"ge_pessoa - Cadastro de pessoas",
			"ge_empresa - Empresas/Lojas",
			"es_produto - Produtos",
			"ari_ai_usage - Uso de AI",
			"ari_access_logs - Logs de acesso",
		],
		databases: &[],
		used_by: &[
			"invistto-auth",
			"admin-panel-v2",
			"courier-v3",
			"ari",
			"api-invistto",
			"ai-billing-service",
		],
		accent: "indigo",
	},
	Database {
		key: "firebird_erp",
		name: "Firebird ERP",
		host: "inv04.invistto.com (e outros)",
		port: 3307,
		database: None,
		description: Some("Bancos legados dos ERPs - 1 por cliente"),
		tables_count: None,
		key_tables: &[],
		databases: &[],
		used_by: &[
			"courier-v3",
			"zeiss-api-client",
			"olhovivo-lens",
			"sales-api",
			"dash-invistto-api",
		],
		accent: "amber",
	},
	Database {
		key: "redis",
		name: "Redis",
		host: "localhost",
		port: 6379,
		database: None,
		description: None,
		tables_count: None,
		key_tables: &[],
		databases: &[("0", "ari-nest cache"), ("1", "servermcp cache")],
		used_by: &[
			"servermcp",
			"ari-whatsapp-service",
			"api-invistto",
			"zeiss-api-client",
		],
		accent: "rose",
	},
];

const CRITICAL: &[Issue] = &[
	Issue {
		issue: "Versões React inconsistentes",
		details: "18.3.1 (admin-panel) vs 19.1.0 (bi, zeiss, olhovivo) vs 19.2.0+ (hub, courier)",
		recommendation: "Padronizar para React 19.1.0 (LTS estável)",
	},
	Issue {
		issue: "ORMs diferentes",
		details: "Prisma vs Knex.js vs MySQL2 raw vs TypeORM",
		recommendation: "Consolidar em Prisma para novos projetos",
	},
	Issue {
		issue: "Portas conflitantes",
		details: "ARI e olhovivo-lens usam porta 3010",
		recommendation: "olhovivo-lens já migrado para 3015",
	},
];

const WARNINGS: &[Issue] = &[
	Issue {
		issue: "Storage keys inconsistentes",
		details: "@ari:token vs @courier:token vs @invistto-bi:token",
		recommendation: "Padronizar para @invistto:{app}:token",
	},
	Issue {
		issue: "NestJS versions diferentes",
		details: "10.x vs 11.x",
		recommendation: "Migrar todos para NestJS 11.x",
	},
	Issue {
		issue: "Projetos legados sem manutenção",
		details: "projeto-invistto, superV, superpdv, whoamii",
		recommendation: "Arquivar ou depreciar oficialmente",
	},
];

const IMPROVEMENTS: &[Issue] = &[
	Issue {
		issue: "Monorepo inconsistente",
		details: "admin-panel e courier são monorepo, outros são single",
		recommendation: "Considerar turborepo/nx para todos",
	},
	Issue {
		issue: "Validação SQL",
		details: "Apenas courier tem SqlSafeValidator",
		recommendation: "Implementar em todos os backends",
	},
];

const PORTS: &[(u16, &str)] = &[
	(3000, "api-invistto (Pontomarket CRM)"),
	(3001, "invistto-auth (Auth API)"),
	(3002, "admin-panel-api / servermcp"),
	(3003, "ai-service"),
	(3004, "ai-billing-service"),
	(3005, "zeiss-backend"),
	(3006, "zeiss-frontend"),
	(3007, "invistto-bi / ari-whatsapp-service"),
	(3008, "courier-frontend"),
	(3009, "olhovivo-lens-frontend"),
	(3010, "ari (Analytics API)"),
	(3011, "sales-api"),
	(3015, "olhovivo-lens-backend"),
	(3333, "courier-api / dash-invistto-api"),
	(5173, "admin-panel-frontend / invistto-hub"),
];

const FLOWCHART: &str = r#"flowchart TB
    subgraph HUB["🏠 INVISTTO HUB (SSO Gateway)"]
        HUB_WEB["Web :5173"]
        HUB_DESK["Desktop (Tauri)"]
        HUB_MOB["Mobile (Capacitor)"]
    end

    subgraph AUTH["🔐 AUTH API :3001"]
        AUTH_JWT["JWT + Cookies"]
        AUTH_SSO["SSO (30s codes)"]
    end

    subgraph FRONTENDS["🖥️ APLICAÇÕES FRONTEND"]
        ADMIN["Admin Panel\n:5173 → /admin/"]
        COURIER["Courier Analytics\n:3008 → /courier/"]
        BI["Invistto BI\n:3007 → /bi/"]
        ZEISS_F["Zeiss Client\n:3006 → /zeiss/"]
        LENS_F["OlhoVivo Lens\n:3009 → /lentes/"]
    end

    subgraph BACKENDS["⚙️ APIS BACKEND"]
        ADMIN_API["Admin API\n:3002"]
        COURIER_API["Courier API\n:3333"]
        ARI["ARI Analytics\n:3010"]
        ZEISS_B["Zeiss API\n:3005"]
        LENS_B["Lens API\n:3015"]
        SALES["Sales API\n:3011"]
    end

    subgraph SERVICES["🔧 SERVIÇOS AUXILIARES"]
        AI["AI Service\n:3003"]
        AI_BILL["AI Billing\n:3004"]
        WA["WhatsApp\n:3007"]
        MCP["ServerMCP\n:3002"]
    end

    subgraph DATA["💾 DADOS"]
        MYSQL[("MySQL\npainel.invistto.com:3305")]
        FB[("Firebird\nERPs Legados")]
        REDIS[("Redis\nlocalhost:6379")]
    end

    HUB --> AUTH
    FRONTENDS --> AUTH

    ADMIN --> ADMIN_API
    COURIER --> COURIER_API
    BI --> ARI
    ZEISS_F --> ZEISS_B
    LENS_F --> LENS_B

    BACKENDS --> MYSQL
    BACKENDS --> FB

    AI --> AI_BILL
    MCP --> ARI
    WA --> REDIS

    classDef hub fill:#3b82f6,stroke:#1d4ed8,color:#fff
    classDef auth fill:#ef4444,stroke:#dc2626,color:#fff
    classDef frontend fill:#10b981,stroke:#059669,color:#fff
    classDef backend fill:#8b5cf6,stroke:#7c3aed,color:#fff
    classDef service fill:#f59e0b,stroke:#d97706,color:#fff
    classDef data fill:#6366f1,stroke:#4f46e5,color:#fff

    class HUB_WEB,HUB_DESK,HUB_MOB hub
    class AUTH_JWT,AUTH_SSO auth
    class ADMIN,COURIER,BI,ZEISS_F,LENS_F frontend
    class ADMIN_API,COURIER_API,ARI,ZEISS_B,LENS_B,SALES backend
    class AI,AI_BILL,WA,MCP service
    class MYSQL,FB,REDIS data"#;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ports_are_sorted_and_unique() {
		let catalog = Catalog::builtin();
		assert!(catalog.ports.windows(2).all(|w| w[0].0 < w[1].0));
	}

	#[test]
	fn json_sections_are_keyed_in_order() {
		let json = serde_json::to_value(Catalog::builtin()).unwrap();
		let frontends = json["frontends"].as_object().unwrap();
		assert_eq!(frontends.len(), FRONTENDS.len());
		assert_eq!(json["frontends"]["invistto-hub"]["port"], 5173);
		assert_eq!(json["ports_map"]["3010"], "ari (Analytics API)");
		assert_eq!(
			json["standardization_issues"]["critical"]
				.as_array()
				.unwrap()
				.len(),
			3
		);
		assert!(json.get("totals").is_none());
	}

	#[test]
	fn issue_total_sums_every_group() {
		assert_eq!(Catalog::builtin().standardization_issues.total(), 8);
	}
}
