//! MCP Server for library-catalog
//!
//! MCP Protocol (stdio) <-> application::CatalogService
//!
//! 5 tools: book_add, book_delete, book_search, book_list, book_status

use std::path::PathBuf;

use log::info;
use rmcp::{
    handler::server::{tool::ToolCallContext, tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::application::error::{AppError, ErrorKind};
use crate::application::service::CatalogService;
use crate::domain::model::book::NewBook;
use crate::domain::model::id::BookId;
use crate::domain::model::query::SearchQuery;
use crate::infra::json_store::JsonCatalogRepository;

use super::render;

// =============================================================================
// Public entry point
// =============================================================================

/// MCP Serverを起動する。data_fileはカタログのJSONファイル。
pub async fn run(data_file: PathBuf) -> anyhow::Result<()> {
    info!("serving catalog {} over MCP stdio", data_file.display());
    let server = CatalogMcpServer::new(data_file);
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

// =============================================================================
// MCP Server
// =============================================================================

#[derive(Clone)]
struct CatalogMcpServer {
    data_file: PathBuf,
    tool_router: ToolRouter<Self>,
}

impl CatalogMcpServer {
    fn new(data_file: PathBuf) -> Self {
        Self {
            data_file,
            tool_router: Self::tool_router(),
        }
    }

    /// 呼び出しごとにServiceを作る（カタログはキャッシュしない）。
    fn service(&self) -> CatalogService<JsonCatalogRepository> {
        CatalogService::new(JsonCatalogRepository::new(&self.data_file))
    }

    fn to_mcp_error(e: AppError) -> McpError {
        match e.kind() {
            ErrorKind::InvalidInput | ErrorKind::NotFound => {
                McpError::invalid_params(format!("{e}"), None)
            }
            ErrorKind::Storage => McpError::internal_error(format!("{e}"), None),
        }
    }
}

// =============================================================================
// ServerHandler impl
// =============================================================================

impl ServerHandler for CatalogMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "library-catalog".to_string(),
                title: Some("Library Catalog".to_string()),
                description: Some(
                    "Book catalog with integer IDs and available/checked_out status.".to_string(),
                ),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Manage a single-user book catalog.\n\
                 \n\
                 Tools: `book_list` or `book_search` to find IDs, then \
                 `book_status` / `book_delete`. `book_add` registers a new book."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_ctx = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_ctx).await
    }
}

// =============================================================================
// Request types
// =============================================================================

/// JSONの数値・文字列どちらで渡されても同じ解析を通す。
fn value_text(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookAddRequest {
    #[schemars(description = "Book title")]
    pub title: String,
    #[schemars(description = "Author name")]
    pub author: String,
    #[schemars(description = "Publication year (integer)")]
    pub year: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookDeleteRequest {
    #[schemars(description = "Book ID from `book_list` output")]
    pub id: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookSearchRequest {
    #[schemars(description = "Search criterion: title, author or year")]
    pub criterion: String,
    #[schemars(
        description = "Query. Case-insensitive substring for title/author, exact integer for year"
    )]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookListRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookStatusRequest {
    #[schemars(description = "Book ID from `book_list` output")]
    pub id: serde_json::Value,
    #[schemars(description = "New status: available or checked_out")]
    pub status: String,
}

// =============================================================================
// Tool implementations
// =============================================================================

#[tool_router]
impl CatalogMcpServer {
    #[tool(
        name = "book_add",
        description = "Add a book to the catalog. A fresh integer ID is assigned and the status starts as available.",
        annotations(
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn book_add(
        &self,
        Parameters(req): Parameters<McpBookAddRequest>,
    ) -> Result<CallToolResult, McpError> {
        let new_book = NewBook::parse(&req.title, &req.author, &value_text(&req.year))
            .map_err(|e| Self::to_mcp_error(e.into()))?;
        let book = self
            .service()
            .add_book(new_book)
            .map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Added: {}. {}",
            book.id(),
            book.title()
        ))]))
    }

    #[tool(
        name = "book_delete",
        description = "Delete a book by ID. Fails with not found if no book has that ID.",
        annotations(
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn book_delete(
        &self,
        Parameters(req): Parameters<McpBookDeleteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = BookId::parse(&value_text(&req.id)).map_err(|e| Self::to_mcp_error(e.into()))?;
        self.service()
            .delete_book(id)
            .map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Deleted: {id}"
        ))]))
    }

    #[tool(
        name = "book_search",
        description = "Search books by title, author (case-insensitive substring) or year (exact).",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            open_world_hint = false
        )
    )]
    async fn book_search(
        &self,
        Parameters(req): Parameters<McpBookSearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        let query = SearchQuery::parse(&req.criterion, &req.query)
            .map_err(|e| Self::to_mcp_error(e.into()))?;
        let books = self.service().search(&query).map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(render::book_list(
            "Books found:",
            "No books found.",
            &books,
        ))]))
    }

    #[tool(
        name = "book_list",
        description = "List every book in stored order.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            open_world_hint = false
        )
    )]
    async fn book_list(
        &self,
        #[allow(unused_variables)] Parameters(_req): Parameters<McpBookListRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = self.service().list_books().map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(render::book_list(
            "All books:",
            "Library is empty.",
            catalog.books(),
        ))]))
    }

    #[tool(
        name = "book_status",
        description = "Change a book's status to available or checked_out.",
        annotations(
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn book_status(
        &self,
        Parameters(req): Parameters<McpBookStatusRequest>,
    ) -> Result<CallToolResult, McpError> {
        let id = BookId::parse(&value_text(&req.id)).map_err(|e| Self::to_mcp_error(e.into()))?;
        let book = self
            .service()
            .change_status(id, &req.status)
            .map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Updated: {}. {} is {}",
            book.id(),
            book.title(),
            render::status_label(book.status())
        ))]))
    }
}

// =============================================================================
// Tests
// =============================================================================
