//! Media-Tone Analysis Tool
//!
//! Two-phase tool: derive a short search title from the law text, then
//! search the news and characterize the aggregate media tone.
//!
//! Recoverable conditions (no articles, search backend failure on both
//! attempts) are converted into a plain informational result here and
//! never raised past the tool boundary.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use lexsight_core::{CoreError, CoreResult, Tool};
use lexsight_llm::{ChatModel, Message};

use crate::search::{NewsArticle, NewsSearch};

const SYSTEM_PROMPT: &str = "You are a legal assistant specialising in French legislation.";
const ANALYST_PROMPT: &str = "You are an expert in media analysis.";

/// Cap on articles fed to the tone narrative, to bound prompt size.
const MAX_ARTICLES: usize = 10;

/// Media-tone tool. Contract: `invoke({law_text}) -> analysis`.
pub struct ToneTool {
    model: Arc<dyn ChatModel>,
    search: Arc<dyn NewsSearch>,
    locale: String,
}

impl ToneTool {
    pub const NAME: &'static str = "tone_analysis";

    pub fn new(model: Arc<dyn ChatModel>, search: Arc<dyn NewsSearch>) -> Self {
        Self {
            model,
            search,
            locale: "fr".to_string(),
        }
    }

    /// Override the news-search locale (default "fr").
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Derive a short, neutral search title from the law text.
    async fn derive_title(&self, law_text: &str) -> CoreResult<String> {
        let messages = vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(format!(
                "Here is a law text:\n{}\n\nPropose a SHORT (5-7 words maximum), general \
                 title suitable for finding press articles. Do not use quotation marks. \
                 Give only the title, without explanation.\n\nTitle:",
                law_text
            )),
        ];

        let response = self
            .model
            .complete(messages, vec![])
            .await
            .map_err(|e| CoreError::internal(format!("title completion failed: {}", e)))?;

        let title = response
            .content
            .ok_or_else(|| CoreError::parse("model returned no title text"))?;

        Ok(title.replace(['"', '\''], "").trim().to_string())
    }

    /// Search for articles, retrying once with only the first three title
    /// words when the backend reports an error. A failure on the fallback
    /// attempt collapses to `None`, the same outcome as zero articles.
    async fn fetch_articles(&self, title: &str) -> Option<Vec<NewsArticle>> {
        match self.search.search(title, &self.locale).await {
            Ok(articles) => Some(articles),
            Err(e) => {
                let keywords: String = title
                    .split_whitespace()
                    .take(3)
                    .collect::<Vec<_>>()
                    .join(" ");
                tracing::warn!(error = %e, fallback = %keywords, "news search failed, retrying with simplified keywords");
                match self.search.search(&keywords, &self.locale).await {
                    Ok(articles) => Some(articles),
                    Err(e) => {
                        tracing::warn!(error = %e, "fallback news search failed");
                        None
                    }
                }
            }
        }
    }

    fn no_coverage_message(title: &str) -> String {
        format!(
            "No press articles found for '{}'.\n\nThis can mean:\n\
             - the law is very recent and has not yet been covered by the press\n\
             - the title is too specific\n\
             - it is a piece of legislation with little media coverage\n\n\
             Try another document or rephrase the request.",
            title
        )
    }

    async fn analyze(&self, title: &str, articles: &[NewsArticle]) -> CoreResult<String> {
        let analysis_text = articles
            .iter()
            .map(|a| format!("Title: {}\nSource: {}\nLink: {}\n", a.title, a.source, a.link))
            .collect::<Vec<_>>()
            .join("\n\n");

        let messages = vec![
            Message::system(ANALYST_PROMPT),
            Message::user(format!(
                "Here is a list of press articles about the law '{}':\n\n{}\n\n\
                 Analyze the overall tone of voice of the media coverage of this law. \
                 Based on the political leaning associated with each outlet, infer how \
                 this law is being received across the media landscape. Justify your \
                 analysis.",
                title, analysis_text
            )),
        ];

        let response = self
            .model
            .complete(messages, vec![])
            .await
            .map_err(|e| CoreError::internal(format!("tone completion failed: {}", e)))?;

        let narrative = response
            .content
            .ok_or_else(|| CoreError::parse("model returned no tone analysis"))?;

        let mut listing = String::from("\n\n---\n\n### Articles analyzed\n\n");
        for (i, article) in articles.iter().enumerate() {
            listing.push_str(&format!(
                "**{}. {}**: [{}]({})\n\n",
                i + 1,
                article.source,
                article.title,
                article.link
            ));
        }

        Ok(narrative + &listing)
    }
}

#[async_trait]
impl Tool for ToneTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Analyze the tone of voice of press coverage about a law text."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "law_text": {
                    "type": "string",
                    "description": "Raw text of the law whose press coverage to analyze"
                }
            },
            "required": ["law_text"]
        })
    }

    async fn invoke(&self, args: Value) -> CoreResult<String> {
        let law_text = args
            .get("law_text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| CoreError::validation("law_text argument is required"))?;

        let title = self.derive_title(law_text).await?;
        tracing::debug!(%title, "derived search title");

        let articles = match self.fetch_articles(&title).await {
            Some(articles) if !articles.is_empty() => articles,
            _ => return Ok(Self::no_coverage_message(&title)),
        };

        let capped = &articles[..articles.len().min(MAX_ARTICLES)];
        self.analyze(&title, capped).await
    }
}
