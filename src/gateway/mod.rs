//! Channel-level request handling.
//!
//! [`Gateway`] ties the menu tree, intent router and content catalog together
//! and renders replies in each channel's format. It holds no mutable state;
//! one instance is built at startup and shared by every request.

use std::fmt;

use crate::catalog::ContentCatalog;
use crate::error::ConfigError;
use crate::intent::IntentRouter;
use crate::menu::{MenuNode, MenuTree, SelectionPath, SessionState};
use crate::models::{MessageRequest, MessageResponse, SessionRequest, SessionResponse, Topic};

/// Shown when a selection path does not resolve.
pub const INVALID_OPTION: &str = "Invalid option. Please try again by dialing *123#";

/// A rendered short-code menu reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuReply {
    /// The client should prompt for another selector and resend the path.
    Continue(String),
    /// The session is over.
    End(String),
}

impl MenuReply {
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End(_))
    }
}

impl fmt::Display for MenuReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue(body) => write!(f, "CON {}", body),
            Self::End(body) => write!(f, "END {}", body),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gateway {
    menu: MenuTree,
    catalog: ContentCatalog,
    router: IntentRouter,
}

impl Gateway {
    pub fn new(menu: MenuTree, catalog: ContentCatalog, router: IntentRouter) -> Self {
        Self {
            menu,
            catalog,
            router,
        }
    }

    /// Builtin menu, rules and content.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::with_catalog(ContentCatalog::builtin()?)
    }

    /// Builtin menu and rules serving `catalog`.
    pub fn with_catalog(catalog: ContentCatalog) -> Result<Self, ConfigError> {
        Ok(Self::new(MenuTree::builtin()?, catalog, IntentRouter::builtin()))
    }

    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn router(&self) -> &IntentRouter {
        &self.router
    }

    /// Answer one short-code request from its raw `*`-joined text.
    pub fn dial(&self, text: &str) -> MenuReply {
        let path = SelectionPath::parse(text);

        match self.menu.session_state(&path) {
            SessionState::Root(node) | SessionState::Branch(node) => {
                MenuReply::Continue(self.render_branch(node))
            }
            SessionState::Terminal(node) => {
                let body = node
                    .topic()
                    .map(|topic| self.catalog.get(topic).render(""))
                    .unwrap_or_default();
                MenuReply::End(body)
            }
            SessionState::Invalid(e) => {
                tracing::debug!("Rejected path {:?}: {}", text, e);
                MenuReply::End(INVALID_OPTION.to_string())
            }
        }
    }

    /// Answer one freeform message.
    pub fn reply(&self, message: &str) -> String {
        let topic = self.router.classify(message);
        tracing::debug!("Classified message as {}", topic);
        self.render_topic(topic, message)
    }

    pub fn handle_session(&self, request: SessionRequest) -> SessionResponse {
        let reply = self.dial(&request.text);
        tracing::debug!(
            session_id = %request.session_id,
            text = %request.text,
            end = reply.is_end(),
            "Session request handled"
        );

        SessionResponse {
            session_id: request.session_id,
            service_code: request.service_code,
            phone_number: request.phone_number,
            response: reply.to_string(),
        }
    }

    pub fn handle_message(&self, request: MessageRequest) -> MessageResponse {
        let text = self.reply(&request.text);

        MessageResponse {
            to: request.from,
            from: request.to,
            text,
        }
    }

    fn render_branch(&self, node: &MenuNode) -> String {
        let mut out = node.prompt().to_string();
        for (selector, child) in self.menu.children(node) {
            out.push_str(&format!("\n{}. {}", selector, child.label));
        }
        out
    }

    fn render_topic(&self, topic: Topic, message: &str) -> String {
        let entry = self.catalog.get(topic);
        let mut out = entry.render(message);

        if !entry.related_topics.is_empty() {
            let hints: Vec<String> = entry.related_topics.iter().map(Topic::keyword).collect();
            out.push_str("\n\nReply: ");
            out.push_str(&hints.join(" | "));
        }
        out
    }
}
