use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use shared_config::AppConfig;

use crate::models::Citation;
use crate::services::classifier::BmiClassification;

const SYSTEM_PROMPT: &str = "Aja como um nutricionista e coach de bem-estar. Forneça dicas \
    saudáveis, práticas e motivadoras, baseadas em informações recentes, para a classificação \
    de IMC fornecida. O texto deve ser conciso e amigável, em um único parágrafo.";

const FALLBACK_TIP: &str = "Não foi possível gerar as dicas.";

#[derive(Error, Debug)]
pub enum TipError {
    #[error(
        "A chave da API Gemini não foi configurada. Por favor, configure a variável \
         de ambiente 'GEMINI_API_KEY'."
    )]
    MissingApiKey,

    #[error("Erro de conexão com a API Gemini: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Erro de conexão com a API Gemini: HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Ocorreu um erro ao processar a resposta da API: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone)]
pub struct WellnessTip {
    pub text: String,
    pub sources: Vec<Citation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_attributions: Vec<GroundingAttribution>,
}

#[derive(Debug, Deserialize)]
struct GroundingAttribution {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    title: Option<String>,
    uri: Option<String>,
}

pub struct TipService {
    api_key: String,
    api_url: String,
    http_client: Client,
}

impl TipService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            api_url: config.gemini_api_url.clone(),
            http_client: Client::new(),
        }
    }

    /// Asks Gemini for a short wellness tip matching the classification.
    /// Search grounding is enabled so the answer may carry web citations.
    pub async fn generate_tips(
        &self,
        classification: BmiClassification,
    ) -> Result<WellnessTip, TipError> {
        if self.api_key.is_empty() {
            return Err(TipError::MissingApiKey);
        }

        debug!(
            "Generating wellness tips for classification: {}",
            classification.label()
        );

        let user_query = format!(
            "Gere dicas saudáveis e motivadoras para uma pessoa com a seguinte classificação \
             de IMC: '{}'. Foque em passos pequenos, alcançáveis e sustentáveis. \
             Responda integralmente em português.",
            classification.label()
        );

        let payload = json!({
            "contents": [{"parts": [{"text": user_query}]}],
            "tools": [{"google_search": {}}],
            "systemInstruction": {"parts": [{"text": SYSTEM_PROMPT}]},
        });

        let url = format!("{}?key={}", self.api_url, self.api_key);
        let response = self.http_client.post(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TipError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TipError::MalformedResponse(e.to_string()))?;

        Ok(extract_tip(parsed))
    }
}

fn extract_tip(response: GenerateContentResponse) -> WellnessTip {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return WellnessTip {
            text: FALLBACK_TIP.to_string(),
            sources: Vec::new(),
        };
    };

    let text = candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .unwrap_or_else(|| FALLBACK_TIP.to_string());

    // Attributions without a URI are not linkable and are skipped.
    let sources = candidate
        .grounding_metadata
        .map(|metadata| {
            metadata
                .grounding_attributions
                .into_iter()
                .filter_map(|attribution| attribution.web)
                .filter_map(|WebSource { title, uri }| {
                    uri.map(|uri| Citation {
                        title: title.unwrap_or_else(|| uri.clone()),
                        uri,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    WellnessTip { text, sources }
}
