//! The ecosystem as currently deployed.

use super::{Category, Project};

pub(super) const PROJECTS: &[Project] = &[
	// SSO gateway in front of every app
	Project {
		key: "invistto-hub",
		name: "Invistto Hub",
		category: Category::Hub,
		port: Some(5173),
		path: Some("/hub/"),
		description: "SSO Gateway Central",
		stack: Some("React 19.2.0 + Vite"),
		status: Some("ativo"),
		platforms: &["Web", "Desktop (Tauri)", "Mobile"],
		connects: &["invistto-auth"],
		color: "#3b82f6",
		..Project::BLANK
	},
	Project {
		key: "invistto-auth",
		name: "Auth API",
		category: Category::Backend,
		port: Some(3001),
		description: "Autenticação Centralizada",
		stack: Some("NestJS 10 + MySQL"),
		status: Some("ativo"),
		features: &["JWT", "SSO", "httpOnly Cookies"],
		connects: &["mysql-main"],
		color: "#ef4444",
		..Project::BLANK
	},
	Project {
		key: "admin-panel-frontend",
		name: "Admin Panel",
		category: Category::Frontend,
		port: Some(5173),
		path: Some("/admin/"),
		description: "Painel Administrativo",
		stack: Some("React 18.3.1 + Vite"),
		status: Some("ativo"),
		connects: &["invistto-auth", "admin-panel-api"],
		color: "#10b981",
		..Project::BLANK
	},
	Project {
		key: "admin-panel-api",
		name: "Admin API",
		category: Category::Backend,
		port: Some(3002),
		description: "Backend Admin",
		stack: Some("NestJS 10 + Prisma"),
		status: Some("ativo"),
		connects: &["mysql-main"],
		color: "#8b5cf6",
		..Project::BLANK
	},
	Project {
		key: "courier-frontend",
		name: "Courier Analytics",
		category: Category::Frontend,
		port: Some(3008),
		path: Some("/courier/"),
		description: "Dashboard WhatsApp",
		stack: Some("React 19.2.3 + TanStack Query"),
		status: Some("ativo"),
		connects: &["invistto-auth", "courier-api"],
		color: "#10b981",
		..Project::BLANK
	},
	Project {
		key: "courier-api",
		name: "Courier API",
		category: Category::Backend,
		port: Some(3333),
		description: "29 Endpoints Analytics",
		stack: Some("NestJS 10 + Prisma + Firebird"),
		status: Some("ativo"),
		connects: &["mysql-main", "firebird"],
		color: "#8b5cf6",
		..Project::BLANK
	},
	Project {
		key: "invistto-bi",
		name: "Invistto BI",
		category: Category::Frontend,
		port: Some(3007),
		path: Some("/bi/"),
		description: "Business Intelligence",
		stack: Some("React 19.1.0 + Recharts"),
		status: Some("ativo"),
		platforms: &["Web", "Mobile"],
		connects: &["invistto-auth", "ari"],
		color: "#10b981",
		..Project::BLANK
	},
	Project {
		key: "ari",
		name: "ARI Analytics",
		category: Category::Backend,
		port: Some(3010),
		description: "API de BI (11 módulos)",
		stack: Some("NestJS 11 + Knex.js"),
		status: Some("ativo"),
		modules: &["Vendas", "Financeiro", "Clientes", "Produtos", "Insights"],
		connects: &["mysql-main", "servermcp"],
		color: "#8b5cf6",
		..Project::BLANK
	},
	Project {
		key: "zeiss-frontend",
		name: "Zeiss Client",
		category: Category::Frontend,
		port: Some(3006),
		path: Some("/zeiss/"),
		description: "Integração Carl Zeiss",
		stack: Some("React 19.1.0 + MUI"),
		status: Some("ativo"),
		connects: &["invistto-auth", "zeiss-api"],
		color: "#10b981",
		..Project::BLANK
	},
	Project {
		key: "zeiss-api",
		name: "Zeiss API",
		category: Category::Backend,
		port: Some(3005),
		description: "Catálogo e Pedidos Zeiss",
		stack: Some("NestJS 10 + MySQL + Firebird"),
		status: Some("ativo"),
		features: &["BullMQ", "Redis", "WebSocket"],
		connects: &["mysql-main", "firebird", "redis", "zeiss-sao-api"],
		color: "#8b5cf6",
		..Project::BLANK
	},
	Project {
		key: "lens-frontend",
		name: "OlhoVivo Lens",
		category: Category::Frontend,
		port: Some(3009),
		path: Some("/lentes/"),
		description: "Hub Multi-Laboratório",
		stack: Some("React 19.1.0 + TanStack Query"),
		status: Some("ativo"),
		platforms: &["Web", "Mobile"],
		connects: &["invistto-auth", "lens-api"],
		color: "#10b981",
		..Project::BLANK
	},
	Project {
		key: "lens-api",
		name: "Lens API",
		category: Category::Backend,
		port: Some(3015),
		description: "Consolidação de Catálogos",
		stack: Some("NestJS 10 + Prisma + Firebird"),
		status: Some("ativo"),
		labs: &["Zeiss", "Rodenstock", "HOYA", "Essilor"],
		connects: &["mysql-main", "firebird"],
		color: "#8b5cf6",
		..Project::BLANK
	},
	Project {
		key: "api-invistto",
		name: "API Invistto",
		category: Category::Backend,
		port: Some(3000),
		description: "CRM Pontomarket",
		stack: Some("NestJS 10 + MySQL"),
		status: Some("ativo"),
		features: &["Rate Limiting", "AI Integration"],
		connects: &["mysql-main", "redis"],
		color: "#8b5cf6",
		..Project::BLANK
	},
	Project {
		key: "servermcp",
		name: "ServerMCP",
		category: Category::Service,
		port: Some(3002),
		description: "Gateway Claude Desktop",
		stack: Some("Express.js + Redis"),
		status: Some("ativo"),
		features: &["Basic→JWT", "Circuit Breaker"],
		connects: &["ari", "redis"],
		color: "#f59e0b",
		..Project::BLANK
	},
	Project {
		key: "sales-api",
		name: "Sales API",
		category: Category::Backend,
		port: Some(3011),
		description: "Vendas Óticas",
		stack: Some("NestJS 11 + Firebird"),
		status: Some("ativo"),
		connects: &["firebird", "mysql-main"],
		color: "#8b5cf6",
		..Project::BLANK
	},
	// Databases
	Project {
		key: "mysql-main",
		name: "MySQL Principal",
		category: Category::Database,
		port: Some(3305),
		host: Some("painel.invistto.com"),
		description: "Banco centralizado",
		tables: Some("80+ tabelas"),
		color: "#6366f1",
		..Project::BLANK
	},
	Project {
		key: "firebird",
		name: "Firebird ERPs",
		category: Category::Database,
		port: Some(3307),
		host: Some("Múltiplos (1 por cliente)"),
		description: "Bancos legados ERP",
		color: "#6366f1",
		..Project::BLANK
	},
	Project {
		key: "redis",
		name: "Redis Cache",
		category: Category::Database,
		port: Some(6379),
		host: Some("localhost"),
		description: "Cache e Filas",
		color: "#6366f1",
		..Project::BLANK
	},
	Project {
		key: "zeiss-sao-api",
		name: "Zeiss SAO API",
		category: Category::External,
		description: "API Externa Carl Zeiss",
		color: "#94a3b8",
		..Project::BLANK
	},
];
