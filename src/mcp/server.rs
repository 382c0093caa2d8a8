use std::sync::Arc;

use tokio::sync::Mutex;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};

use crate::app::App;
use crate::domain::booking::BookingField;
use crate::view::pages::booking::SubmitOutcome;
use crate::view::router::Route;

/// Upper bound on navigations applied while settling one tool call.
const MAX_REDIRECTS: usize = 8;

// ---------- Tool parameter types ----------

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct NavigateToolParams {
    /// Path to open: "/" (listings), "/property/{id}" or "/{id}" (property detail), "/booking"
    pub path: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BookingInputToolParams {
    /// Form field: firstName, lastName, email, phoneNumber, billingAddress, cardNumber, expirationDate or cvv
    pub field: String,
    /// New value for the field (replaces the previous value)
    pub value: String,
}

// ---------- MCP Server ----------

#[derive(Clone)]
pub struct RentalFrontServer {
    app: Arc<Mutex<App>>,
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for RentalFrontServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RentalFrontServer").finish_non_exhaustive()
    }
}

/// Lets the mounted page finish loading, following any redirects it requests.
async fn settle_and_render(app: &mut App) -> String {
    for _ in 0..MAX_REDIRECTS {
        app.settled().await;
        if app.apply_pending() == 0 {
            break;
        }
    }
    app.render()
}

#[tool_router]
impl RentalFrontServer {
    pub fn new(app: App) -> Self {
        Self {
            app: Arc::new(Mutex::new(app)),
            tool_router: Self::tool_router(),
        }
    }

    /// Open a page of the rental front-end and return it once its data has loaded.
    #[tool(
        name = "rental_navigate",
        description = "Open a page of the rental site and return it as Markdown once its data has loaded. Paths: \"/\" lists all properties, \"/property/{id}\" shows one property with its guest reviews, \"/booking\" opens the booking and payment form.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn rental_navigate(
        &self,
        Parameters(params): Parameters<NavigateToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut app = self.app.lock().await;
        app.navigate(Route::parse(&params.path));
        let text = settle_and_render(&mut app).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Show the current page, following any pending redirect.
    #[tool(
        name = "rental_view",
        description = "Return the page currently shown. Pending redirects (for example the return to the listings a few seconds after a confirmed booking) are applied first. Opens the listings if no page is open yet.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn rental_view(&self) -> Result<CallToolResult, McpError> {
        let mut app = self.app.lock().await;
        let mounted = app.ensure_mounted();
        let text = if mounted || app.apply_pending() > 0 {
            settle_and_render(&mut app).await
        } else {
            app.render()
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Type into one booking form field.
    #[tool(
        name = "rental_booking_input",
        description = "Set one field of the booking form (the booking page must be open). Fields: firstName, lastName, email, phoneNumber, billingAddress, cardNumber, expirationDate, cvv. Returns the updated form.",
        annotations(read_only_hint = false, open_world_hint = false)
    )]
    async fn rental_booking_input(
        &self,
        Parameters(params): Parameters<BookingInputToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let app = self.app.lock().await;
        let Some(booking) = app.booking() else {
            return Ok(booking_not_open());
        };
        let field = match params.field.parse::<BookingField>() {
            Ok(field) => field,
            Err(e) => {
                return Ok(CallToolResult::error(vec![Content::text(format!(
                    "{e}. Valid fields: firstName, lastName, email, phoneNumber, billingAddress, cardNumber, expirationDate, cvv."
                ))]));
            }
        };
        if !booking.input(field, params.value) {
            return Ok(CallToolResult::error(vec![Content::text(
                "The booking is already confirmed; the form is closed.",
            )]));
        }
        Ok(CallToolResult::success(vec![Content::text(app.render())]))
    }

    /// Submit the booking form.
    #[tool(
        name = "rental_booking_submit",
        description = "Submit the booking form (\"Confirm & Pay\"). The email must contain '@'. On success the confirmation is shown and the site returns to the listings after a short delay; on failure the form is shown again with all input kept.",
        annotations(read_only_hint = false, open_world_hint = true)
    )]
    async fn rental_booking_submit(&self) -> Result<CallToolResult, McpError> {
        let app = self.app.lock().await;
        let Some(booking) = app.booking() else {
            return Ok(booking_not_open());
        };
        let outcome = booking.submit().await;
        let text = app.render();
        Ok(match outcome {
            SubmitOutcome::Confirmed => CallToolResult::success(vec![Content::text(text)]),
            SubmitOutcome::InvalidEmail | SubmitOutcome::Failed => {
                CallToolResult::error(vec![Content::text(text)])
            }
            SubmitOutcome::Ignored => CallToolResult::error(vec![Content::text(
                "Nothing to submit: the booking is already confirmed.",
            )]),
        })
    }

    /// Press "Return to listings" on a not-found view.
    #[tool(
        name = "rental_return_to_listings",
        description = "Press the \"Return to listings\" button shown when a property or page could not be found, and return the listings page.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn rental_return_to_listings(&self) -> Result<CallToolResult, McpError> {
        let mut app = self.app.lock().await;
        if !app.return_to_listings() {
            return Ok(CallToolResult::error(vec![Content::text(
                "There is no \"Return to listings\" button on this page. Use rental_navigate with path \"/\" instead.",
            )]));
        }
        let text = settle_and_render(&mut app).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

fn booking_not_open() -> CallToolResult {
    CallToolResult::error(vec![Content::text(
        "The booking form is not open. Call rental_navigate with path \"/booking\" first.",
    )])
}

#[tool_handler]
impl ServerHandler for RentalFrontServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Property-rental site rendered as Markdown pages.\n\
                 \n\
                 ## Browsing\n\
                 - rental_navigate: open \"/\" for all listings, \"/property/{id}\" for one property \
                 with guest reviews, \"/booking\" for the booking form\n\
                 - rental_view: show the current page (applies pending redirects)\n\
                 - rental_return_to_listings: the button on a not-found page\n\
                 \n\
                 ## Booking\n\
                 - rental_booking_input: set one form field (firstName, lastName, email, phoneNumber, \
                 billingAddress, cardNumber, expirationDate, cvv)\n\
                 - rental_booking_submit: submit the form; the email must contain '@'\n\
                 \n\
                 ## Tips\n\
                 - Links in pages are paths you can pass to rental_navigate.\n\
                 - After a confirmed booking, call rental_view a few seconds later to land back on the listings."
                    .into(),
            ),
        }
    }
}
